/// Test fixtures: representative JSON payloads from the Netatmo API.
///
/// Truncated to the minimum needed to exercise the parsers, but
/// structurally faithful to the real envelopes.
///
/// getstationsdata response shape:
///   response.body.devices[]
///     .module_name          — the base station's own display name
///     .dashboard_data       — base station readings (Temperature, CO2,
///                             Humidity, Pressure, Noise, ...)
///     .modules[]
///       .module_name
///       .battery_percent    — on the module, NOT inside dashboard_data
///       .dashboard_data     — the module's readings
///
/// Module order in `modules` follows the service: the outdoor unit first,
/// auxiliary indoor modules after it. The base station is not listed in
/// `modules`; it is the device itself.

/// Three-module account: outdoor unit, one auxiliary bedroom module, and
/// the base station ("Living Room").
pub(crate) fn stations_data_json() -> &'static str {
    r#"{
      "body": {
        "devices": [
          {
            "_id": "70:ee:50:00:00:01",
            "station_name": "Homeworld",
            "module_name": "Living Room",
            "type": "NAMain",
            "dashboard_data": {
              "time_utc": 1714573200,
              "Temperature": 22.0,
              "CO2": 450,
              "Humidity": 50,
              "Noise": 38,
              "Pressure": 1013.2,
              "AbsolutePressure": 1006.8
            },
            "modules": [
              {
                "_id": "02:00:00:00:00:01",
                "module_name": "Outdoor",
                "type": "NAModule1",
                "battery_percent": 80,
                "dashboard_data": {
                  "time_utc": 1714573180,
                  "Temperature": 10.0,
                  "Humidity": 50
                }
              },
              {
                "_id": "03:00:00:00:00:01",
                "module_name": "Bedroom",
                "type": "NAModule4",
                "battery_percent": 55,
                "dashboard_data": {
                  "time_utc": 1714573190,
                  "Temperature": 19.5,
                  "Humidity": 45,
                  "CO2": 620
                }
              }
            ]
          }
        ]
      },
      "status": "ok",
      "time_exec": 0.06,
      "time_server": 1714573210
    }"#
}

/// Token endpoint success response. The service rotates the refresh token
/// on every exchange.
pub(crate) fn token_response_json() -> &'static str {
    r#"{
      "access_token": "5f1234|abcdef0123456789",
      "refresh_token": "5f1234|fedcba9876543210",
      "expires_in": 10800,
      "expire_in": 10800,
      "scope": ["read_station"]
    }"#
}
