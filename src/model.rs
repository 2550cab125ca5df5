/// Shared data types: sensor kinds, the widget payload, and the error
/// taxonomy used across the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

// ---------------------------------------------------------------------------
// Sensor kinds
// ---------------------------------------------------------------------------

/// A category of measurement reported by a station module.
///
/// Each kind carries a fixed unit suffix and display label; the color
/// thresholds live in `format.rs` next to the rest of the presentation
/// rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Temperature,
    Humidity,
    CO2,
    Pressure,
    BatteryPercent,
}

impl SensorKind {
    /// Unit suffix appended after the formatted value.
    pub fn unit_suffix(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Humidity => "%",
            SensorKind::CO2 => "ppm",
            SensorKind::Pressure => "mbar",
            SensorKind::BatteryPercent => "%",
        }
    }

    /// Display label used in the tooltip. The battery level is reported by
    /// the API as `battery_percent`; everything else reads fine as-is.
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperature",
            SensorKind::Humidity => "Humidity",
            SensorKind::CO2 => "CO2",
            SensorKind::Pressure => "Pressure",
            SensorKind::BatteryPercent => "Battery",
        }
    }
}

/// Latest readings for every module: module name -> sensor kind -> value.
/// Rebuilt fresh on every invocation; nothing is cached between runs.
pub type Readings = HashMap<String, HashMap<SensorKind, f64>>;

// ---------------------------------------------------------------------------
// Widget payload
// ---------------------------------------------------------------------------

/// The JSON object printed to stdout for the host bar.
///
/// On the success path all three fields are present; error payloads carry
/// only `text` and `tooltip` (the `class` key is omitted entirely, not
/// serialized as null).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetPayload {
    pub text: String,
    pub tooltip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl WidgetPayload {
    /// Serializes to a single JSON line. The payload is three plain string
    /// fields, so serialization cannot realistically fail; if it somehow
    /// does, the host bar still gets well-formed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"text":"Data - N/A","tooltip":"payload serialization failed"}"#.to_string())
    }
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Pipeline failure, preserved by kind for diagnostics even though the
/// outward-facing payload collapses everything into one generic message.
#[derive(Debug, Clone, PartialEq)]
pub enum StationError {
    /// Credentials missing/invalid or the token exchange failed.
    Auth(String),
    /// Transport error, non-success status, or malformed response from the
    /// stations-data endpoint.
    Query(String),
    /// Degenerate module count (e.g. a station with zero modules).
    Layout(String),
}

impl fmt::Display for StationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationError::Auth(msg) => write!(f, "authentication failed: {}", msg),
            StationError::Query(msg) => write!(f, "station query failed: {}", msg),
            StationError::Layout(msg) => write!(f, "sensor layout unresolvable: {}", msg),
        }
    }
}

impl Error for StationError {}
