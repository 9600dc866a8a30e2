//! Geographical coordinate used to address both upstream data sources.

use crate::DashboardError;
use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
///
/// # Examples
///
/// ```
/// use solar_dash::Coordinate;
///
/// let paris = Coordinate::new(48.8566, 2.3522).unwrap();
/// assert_eq!(paris.latitude, 48.8566);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude, positive north of the equator.
    pub latitude: f64,
    /// Longitude, positive east of Greenwich.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting latitudes outside [-90, 90] and
    /// longitudes outside [-180, 180].
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidCoordinate`] when either value is out of
    /// range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DashboardError> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !(lat_ok && lon_ok) {
            return Err(DashboardError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub(crate) fn as_haversine(&self) -> haversine::Location {
        haversine::Location {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
