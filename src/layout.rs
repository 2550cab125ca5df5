/// Per-module sensor layout resolver.
///
/// The stations-data endpoint reports readings per module, but which
/// sensors a module is expected to carry is derived purely from its
/// position in the module list, never from the API:
///
/// - index 0: the outdoor unit (battery powered, no CO2/pressure)
/// - last index: the base station (mains powered, carries CO2 + pressure)
/// - strictly interior indices: auxiliary indoor modules
///
/// A one-module station is just the base station on its own, so the lone
/// module gets the base-station set.

use crate::model::{SensorKind, StationError};

/// Sensors reported by the outdoor unit (first module).
pub const OUTDOOR_SENSORS: &[SensorKind] = &[
    SensorKind::Temperature,
    SensorKind::Humidity,
    SensorKind::BatteryPercent,
];

/// Sensors reported by the base station (last module).
pub const BASE_STATION_SENSORS: &[SensorKind] = &[
    SensorKind::Temperature,
    SensorKind::Humidity,
    SensorKind::CO2,
    SensorKind::Pressure,
];

/// Sensors reported by auxiliary indoor modules (interior positions).
pub const AUXILIARY_SENSORS: &[SensorKind] = &[
    SensorKind::Temperature,
    SensorKind::Humidity,
    SensorKind::CO2,
    SensorKind::BatteryPercent,
];

/// Derives the expected sensor list for each module position.
///
/// Each slot is constructed explicitly for its index, so first/last rules
/// never fight over the same entry and no slot shares storage with another.
///
/// # Errors
/// `StationError::Layout` when `module_count` is zero.
pub fn resolve(module_count: usize) -> Result<Vec<Vec<SensorKind>>, StationError> {
    if module_count == 0 {
        return Err(StationError::Layout(
            "station reported no modules".to_string(),
        ));
    }

    // Lone module: the station is just its base unit.
    if module_count == 1 {
        return Ok(vec![BASE_STATION_SENSORS.to_vec()]);
    }

    let mut layouts = Vec::with_capacity(module_count);
    layouts.push(OUTDOOR_SENSORS.to_vec());
    for _ in 1..module_count - 1 {
        layouts.push(AUXILIARY_SENSORS.to_vec());
    }
    layouts.push(BASE_STATION_SENSORS.to_vec());
    Ok(layouts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_modules_is_an_error() {
        let err = resolve(0).unwrap_err();
        assert!(matches!(err, StationError::Layout(_)));
    }

    #[test]
    fn test_single_module_gets_base_station_set() {
        let layouts = resolve(1).unwrap();
        assert_eq!(layouts.len(), 1);
        assert_eq!(layouts[0], BASE_STATION_SENSORS.to_vec());
    }

    #[test]
    fn test_two_modules() {
        let layouts = resolve(2).unwrap();
        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0], OUTDOOR_SENSORS.to_vec());
        assert_eq!(layouts[1], BASE_STATION_SENSORS.to_vec());
    }

    #[test]
    fn test_interior_modules_all_get_auxiliary_set() {
        for count in 3..=5 {
            let layouts = resolve(count).unwrap();
            assert_eq!(layouts.len(), count, "layout length must equal module count");
            assert_eq!(layouts[0], OUTDOOR_SENSORS.to_vec());
            assert_eq!(layouts[count - 1], BASE_STATION_SENSORS.to_vec());
            for interior in &layouts[1..count - 1] {
                assert_eq!(interior, &AUXILIARY_SENSORS.to_vec(), "interior layouts must be identical");
            }
        }
    }

    #[test]
    fn test_slots_do_not_share_storage() {
        let mut layouts = resolve(4).unwrap();
        layouts[1].push(SensorKind::Pressure);
        assert_ne!(layouts[1], layouts[2], "mutating one interior slot must not affect another");
    }
}
