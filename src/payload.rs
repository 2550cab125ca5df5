/// Widget payload construction: the success payload assembled from live
/// readings, plus the fixed payloads for every error path.
///
/// The host bar renders `text` inline, `tooltip` on hover (Pango markup),
/// and uses `class` to pick CSS. Error payloads deliberately omit `class`.

use crate::format::{classify_environment, format_value};
use crate::model::{Readings, SensorKind, StationError, WidgetPayload};
use chrono::{DateTime, Local};

/// Tooltip heading above the per-module sections.
const TOOLTIP_HEADER: &str = "<b>Netatmo Weather Station</b>\n";

// ---------------------------------------------------------------------------
// Success path
// ---------------------------------------------------------------------------

/// Assembles the success payload.
///
/// `text` and `class` come from the first module's leading layout sensor —
/// the outdoor unit's temperature. The tooltip lists every module in the
/// order the service returned them, one line per expected sensor, and ends
/// with the station name and a local `HHMMhrs DD/MM` timestamp.
///
/// A reading missing from an interior tooltip line renders as `n/a`, but a
/// missing outdoor temperature is a query failure: without it there is
/// nothing to put in the bar.
pub fn build(
    station_name: &str,
    module_names: &[String],
    layouts: &[Vec<SensorKind>],
    readings: &Readings,
    now: DateTime<Local>,
) -> Result<WidgetPayload, StationError> {
    if layouts.len() != module_names.len() || layouts.is_empty() {
        return Err(StationError::Layout(format!(
            "{} layouts for {} modules",
            layouts.len(),
            module_names.len()
        )));
    }

    let lead_module = &module_names[0];
    let lead_kind = *layouts[0].first().ok_or_else(|| {
        StationError::Layout("first module has no expected sensors".to_string())
    })?;
    let outdoor_temp = readings
        .get(lead_module)
        .and_then(|sensors| sensors.get(&lead_kind))
        .copied()
        .ok_or_else(|| {
            StationError::Query(format!(
                "no {} reading for module '{}'",
                lead_kind.label(),
                lead_module
            ))
        })?;

    let mut tooltip = String::from(TOOLTIP_HEADER);
    for (name, sensors) in module_names.iter().zip(layouts) {
        tooltip.push_str(&format!("\n<b>{}:</b>\n", name));
        for kind in sensors {
            let value = readings.get(name).and_then(|m| m.get(kind)).copied();
            let rendered = match value {
                Some(v) => format_value(v, *kind),
                None => "\tn/a".to_string(),
            };
            tooltip.push_str(&format!(
                " {} - {} {}\n",
                kind.label(),
                rendered,
                kind.unit_suffix()
            ));
        }
    }
    tooltip.push_str(&format!(
        "\n{} {}hrs {}",
        station_name,
        now.format("%H%M"),
        now.format("%d/%m")
    ));

    Ok(WidgetPayload {
        text: format!(" {}°C", outdoor_temp),
        tooltip,
        class: Some(classify_environment(outdoor_temp).to_string()),
    })
}

// ---------------------------------------------------------------------------
// Fixed error payloads (text + tooltip only, no class)
// ---------------------------------------------------------------------------

/// Intermediate line emitted after each failed connectivity probe. The
/// bar keeps rendering `text` between retries, so it must stay visible.
pub fn connecting(attempt: usize, max_tries: usize) -> WidgetPayload {
    WidgetPayload {
        text: "connecting...".to_string(),
        tooltip: format!("connection attempt {} of {}", attempt, max_tries),
        class: None,
    }
}

/// Final payload when the bounded probe loop never reached the network.
pub fn no_internet() -> WidgetPayload {
    WidgetPayload {
        text: "no internet".to_string(),
        tooltip: " No network connectivity -\n widget will retry on the next refresh ".to_string(),
        class: None,
    }
}

/// Payload for a missing station-name argument.
pub fn not_configured() -> WidgetPayload {
    WidgetPayload {
        text: "Netatmo - not configured".to_string(),
        tooltip: " Station name not configured -\n pass it as the first argument ".to_string(),
        class: None,
    }
}

/// Generic payload for any auth/query/layout failure while online.
pub fn service_error() -> WidgetPayload {
    WidgetPayload {
        text: "Data - N/A".to_string(),
        tooltip: " Error - Netatmo server request failed!\n or another unknown exception ".to_string(),
        class: None,
    }
}
