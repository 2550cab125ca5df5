/// Presentation rules: color thresholds, markup wrapping, and the overall
/// environment classification derived from the outdoor temperature.
///
/// Values are rendered as Pango markup (`<span color="...">`) because the
/// host bar feeds the tooltip straight into a Pango label. All thresholds
/// are evaluated with strict `<`, first match wins.

use crate::model::SensorKind;

// ---------------------------------------------------------------------------
// Color scheme (Nord-ish palette used by the widget CSS)
// ---------------------------------------------------------------------------

pub const BLUE: &str = "#5A85DB";
pub const GREEN: &str = "#A3BE8C";
pub const YELLOW: &str = "#EBCB8B";
pub const RED: &str = "#BF616A";
pub const WHITE: &str = "#FFFFFF";

/// Wraps a value in a Pango color span. `None` renders white, for kinds
/// without a threshold rule.
fn wrap_in_color_tag(val: &str, color: Option<&str>) -> String {
    format!("<span color=\"{}\">{}</span>", color.unwrap_or(WHITE), val)
}

/// Picks the threshold color for a reading. Boundary values fall through
/// to the next branch: Temperature 3 is green (not blue) and 27 is red;
/// CO2 1000 is yellow; Humidity 40 and 60 are green.
fn threshold_color(value: f64, kind: SensorKind) -> Option<&'static str> {
    match kind {
        SensorKind::Temperature => {
            if value < 3.0 {
                Some(BLUE)
            } else if value < 15.0 {
                Some(GREEN)
            } else if value < 27.0 {
                Some(YELLOW)
            } else {
                Some(RED)
            }
        }
        SensorKind::CO2 => {
            if value < 1000.0 {
                Some(GREEN)
            } else if value < 1500.0 {
                Some(YELLOW)
            } else {
                Some(RED)
            }
        }
        SensorKind::BatteryPercent => {
            if value < 30.0 {
                Some(RED)
            } else if value < 60.0 {
                Some(YELLOW)
            } else {
                Some(GREEN)
            }
        }
        SensorKind::Humidity => {
            if value < 40.0 || value > 60.0 {
                Some(RED)
            } else {
                Some(GREEN)
            }
        }
        // No comfort rule for barometric pressure
        SensorKind::Pressure => None,
    }
}

/// Renders a raw reading as a tab-indented, color-wrapped markup string.
/// CO2 values get a second tab so the four-digit ppm numbers line up with
/// the shorter readings above them.
pub fn format_value(value: f64, kind: SensorKind) -> String {
    let indent = match kind {
        SensorKind::CO2 => "\t\t",
        _ => "\t",
    };
    wrap_in_color_tag(&format!("{}{}", indent, value), threshold_color(value, kind))
}

/// Overall environment classification from the outdoor temperature, used
/// as the widget's CSS class. Boundary values 3 and 28 are both `normal`.
pub fn classify_environment(outdoor_temp: f64) -> &'static str {
    if outdoor_temp > 28.0 {
        "hot"
    } else if outdoor_temp < 3.0 {
        "cold"
    } else {
        "normal"
    }
}
