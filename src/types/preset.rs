//! The cities offered as one-click selections on the globe.

use crate::types::coordinate::Coordinate;
use haversine::{distance, Units};
use ordered_float::OrderedFloat;

/// A named city with a fixed coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetLocation {
    pub name: &'static str,
    pub coordinate: Coordinate,
}

const fn preset(name: &'static str, latitude: f64, longitude: f64) -> PresetLocation {
    PresetLocation {
        name,
        coordinate: Coordinate {
            latitude,
            longitude,
        },
    }
}

/// Cities available as presets, west to east.
pub static PRESET_LOCATIONS: [PresetLocation; 6] = [
    preset("San Francisco", 37.7749, -122.4194),
    preset("New York", 40.7128, -74.0060),
    preset("London", 51.5074, -0.1278),
    preset("Cairo", 30.0444, 31.2357),
    preset("Tokyo", 35.6762, 139.6503),
    preset("Sydney", -33.8688, 151.2093),
];

impl PresetLocation {
    /// Looks a preset up by name, ignoring case.
    ///
    /// ```
    /// use solar_dash::PresetLocation;
    ///
    /// let tokyo = PresetLocation::by_name("tokyo").unwrap();
    /// assert_eq!(tokyo.name, "Tokyo");
    /// assert!(PresetLocation::by_name("Atlantis").is_none());
    /// ```
    pub fn by_name(name: &str) -> Option<&'static PresetLocation> {
        PRESET_LOCATIONS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Returns the preset closest to `coordinate` together with its great-circle
    /// distance in kilometers, if one lies within `max_distance_km`.
    pub fn nearest(
        coordinate: Coordinate,
        max_distance_km: f64,
    ) -> Option<(&'static PresetLocation, f64)> {
        PRESET_LOCATIONS
            .iter()
            .map(|p| {
                let km = distance(
                    coordinate.as_haversine(),
                    p.coordinate.as_haversine(),
                    Units::Kilometers,
                );
                (p, km)
            })
            .filter(|(_, km)| *km <= max_distance_km)
            .min_by_key(|(_, km)| OrderedFloat(*km))
    }
}
