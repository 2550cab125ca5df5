/// netatmo_widget: status-bar widget feeder for a Netatmo weather station.
///
/// One invocation probes connectivity, pulls the latest readings for every
/// module on the account, and prints a single `{text, tooltip, class}`
/// JSON line to stdout for the host bar. Failures become informative
/// payloads; exit code is 0 on every path.
///
/// # Module structure
///
/// ```text
/// netatmo_widget
/// ├── model        — SensorKind, WidgetPayload, StationError taxonomy
/// ├── connectivity — bounded reachability probe with intermediate payloads
/// ├── netatmo
/// │   ├── auth     — credentials file + OAuth2 refresh-token exchange
/// │   ├── station  — getstationsdata client: module list + latest readings
/// │   └── fixtures (test only) — representative API response payloads
/// ├── layout       — per-module sensor layout derived from position
/// ├── format       — color thresholds, units, environment classification
/// └── payload      — widget payload builder (success + error payloads)
/// ```

pub mod connectivity;
pub mod format;
pub mod layout;
pub mod model;
pub mod netatmo;
pub mod payload;
