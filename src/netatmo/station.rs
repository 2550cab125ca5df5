/// Stations-data client: module listing and the latest reading set.
///
/// One GET against `/api/getstationsdata` returns every station on the
/// account, each with its own dashboard readings and the readings of all
/// attached modules. That single response backs both operations here, so
/// an invocation makes exactly one data call.

use crate::model::{Readings, SensorKind, StationError};
use serde::Deserialize;
use std::collections::HashMap;

const STATIONS_DATA_URL: &str = "https://api.netatmo.com/api/getstationsdata";

// ---------------------------------------------------------------------------
// Serde structures for the getstationsdata envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StationsData {
    body: Body,
}

#[derive(Debug, Deserialize)]
struct Body {
    devices: Vec<Device>,
}

/// A base station. Its own readings sit in `dashboard_data`; the wireless
/// units hang off `modules`.
#[derive(Debug, Deserialize)]
struct Device {
    module_name: String,
    dashboard_data: Option<DashboardData>,
    #[serde(default)]
    modules: Vec<Module>,
}

/// A wireless module. `battery_percent` lives on the module itself, next
/// to (not inside) `dashboard_data`.
#[derive(Debug, Deserialize)]
struct Module {
    module_name: String,
    battery_percent: Option<f64>,
    dashboard_data: Option<DashboardData>,
}

/// The measured values. Keys are capitalized in the API; anything we do
/// not chart is ignored.
#[derive(Debug, Deserialize, Default)]
struct DashboardData {
    #[serde(rename = "Temperature")]
    temperature: Option<f64>,
    #[serde(rename = "Humidity")]
    humidity: Option<f64>,
    #[serde(rename = "CO2")]
    co2: Option<f64>,
    #[serde(rename = "Pressure")]
    pressure: Option<f64>,
}

impl DashboardData {
    fn sensor_map(&self) -> HashMap<SensorKind, f64> {
        let mut map = HashMap::new();
        if let Some(v) = self.temperature {
            map.insert(SensorKind::Temperature, v);
        }
        if let Some(v) = self.humidity {
            map.insert(SensorKind::Humidity, v);
        }
        if let Some(v) = self.co2 {
            map.insert(SensorKind::CO2, v);
        }
        if let Some(v) = self.pressure {
            map.insert(SensorKind::Pressure, v);
        }
        map
    }
}

// ---------------------------------------------------------------------------
// API call
// ---------------------------------------------------------------------------

/// Fetches the account's station data with a bearer token.
///
/// # Errors
/// `StationError::Query` for transport failures, non-success statuses, or
/// a response that does not match the envelope.
pub fn fetch_stations_data(
    client: &reqwest::blocking::Client,
    access_token: &str,
) -> Result<StationsData, StationError> {
    let response = client
        .get(STATIONS_DATA_URL)
        .bearer_auth(access_token)
        .send()
        .map_err(|e| StationError::Query(format!("stations request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(StationError::Query(format!(
            "stations endpoint returned {}",
            status
        )));
    }

    response
        .json()
        .map_err(|e| StationError::Query(format!("malformed stations response: {}", e)))
}

// ---------------------------------------------------------------------------
// Module listing and readings
// ---------------------------------------------------------------------------

/// Ordered module names: attached modules first (the outdoor unit leads),
/// then the base station's own module name last.
///
/// External-API quirk: the service returns every module on the account no
/// matter which station name is requested, but it rejects an empty name -
/// any non-empty string (a single space included) satisfies it. We pass
/// the real name anyway and never rely on server-side filtering.
pub fn module_names(data: &StationsData, station_name: &str) -> Result<Vec<String>, StationError> {
    if station_name.is_empty() {
        return Err(StationError::Query(
            "station name must be non-empty".to_string(),
        ));
    }

    let device = data
        .body
        .devices
        .first()
        .ok_or_else(|| StationError::Query("account has no station devices".to_string()))?;

    let mut names: Vec<String> = device
        .modules
        .iter()
        .map(|m| m.module_name.clone())
        .collect();
    names.push(device.module_name.clone());
    Ok(names)
}

/// The latest reading set for every module, keyed by module name.
/// `battery_percent` is folded into each wireless module's sensor map.
pub fn latest_readings(data: &StationsData) -> Readings {
    let mut readings = Readings::new();
    for device in &data.body.devices {
        let base = device
            .dashboard_data
            .as_ref()
            .map(DashboardData::sensor_map)
            .unwrap_or_default();
        readings.insert(device.module_name.clone(), base);

        for module in &device.modules {
            let mut sensors = module
                .dashboard_data
                .as_ref()
                .map(DashboardData::sensor_map)
                .unwrap_or_default();
            if let Some(battery) = module.battery_percent {
                sensors.insert(SensorKind::BatteryPercent, battery);
            }
            readings.insert(module.module_name.clone(), sensors);
        }
    }
    readings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netatmo::fixtures;

    fn parsed_fixture() -> StationsData {
        serde_json::from_str(fixtures::stations_data_json()).expect("fixture must parse")
    }

    #[test]
    fn test_module_order_outdoor_first_base_last() {
        let data = parsed_fixture();
        let names = module_names(&data, "Homeworld").unwrap();
        assert_eq!(names, vec!["Outdoor", "Bedroom", "Living Room"]);
    }

    #[test]
    fn test_empty_station_name_rejected() {
        let data = parsed_fixture();
        let err = module_names(&data, "").unwrap_err();
        assert!(matches!(err, StationError::Query(_)));
        // The quirk: any non-empty name goes through, even a lone space.
        assert!(module_names(&data, " ").is_ok());
    }

    #[test]
    fn test_readings_merge_battery_into_modules() {
        let data = parsed_fixture();
        let readings = latest_readings(&data);

        let outdoor = &readings["Outdoor"];
        assert_eq!(outdoor[&SensorKind::Temperature], 10.0);
        assert_eq!(outdoor[&SensorKind::Humidity], 50.0);
        assert_eq!(outdoor[&SensorKind::BatteryPercent], 80.0);
        assert!(!outdoor.contains_key(&SensorKind::CO2), "outdoor unit has no CO2 sensor");

        let base = &readings["Living Room"];
        assert_eq!(base[&SensorKind::Temperature], 22.0);
        assert_eq!(base[&SensorKind::CO2], 450.0);
        assert_eq!(base[&SensorKind::Pressure], 1013.2);
        assert!(!base.contains_key(&SensorKind::BatteryPercent), "base station is mains powered");
    }

    #[test]
    fn test_unknown_dashboard_keys_ignored() {
        // Noise, rain etc. are present in real responses; the parser must
        // skip them rather than fail.
        let data = parsed_fixture();
        let readings = latest_readings(&data);
        assert_eq!(readings["Living Room"].len(), 4);
    }

    #[test]
    fn test_empty_devices_is_query_error() {
        let data: StationsData =
            serde_json::from_str(r#"{"body":{"devices":[]}}"#).unwrap();
        let err = module_names(&data, "Homeworld").unwrap_err();
        assert!(matches!(err, StationError::Query(_)));
    }

    #[test]
    fn test_module_without_dashboard_yields_battery_only() {
        let data: StationsData = serde_json::from_str(
            r#"{"body":{"devices":[{"module_name":"Base",
                "dashboard_data":{"Temperature":21.0},
                "modules":[{"module_name":"Dead Module","battery_percent":5}]}]}}"#,
        )
        .unwrap();
        let readings = latest_readings(&data);
        assert_eq!(readings["Dead Module"][&SensorKind::BatteryPercent], 5.0);
        assert_eq!(readings["Dead Module"].len(), 1);
    }
}
