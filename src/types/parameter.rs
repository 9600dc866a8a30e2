//! Daily point parameters requested from the climate data source.

use std::fmt;

/// Value the climate source reports in place of a missing sample.
pub const MISSING_SENTINEL: f64 = -999.0;

/// A daily parameter code understood by the climate data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Air temperature at 2 meters, °C.
    Temperature,
    /// Relative humidity at 2 meters, %.
    RelativeHumidity,
    /// Wind speed at 10 meters, m/s.
    WindSpeed,
    /// All-sky surface shortwave downward irradiance, W/m².
    SurfaceShortwave,
}

impl Parameter {
    /// Every parameter, in request order.
    pub const ALL: [Parameter; 4] = [
        Parameter::Temperature,
        Parameter::RelativeHumidity,
        Parameter::WindSpeed,
        Parameter::SurfaceShortwave,
    ];

    /// Code used both in the request query and as the key in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            Parameter::Temperature => "T2M",
            Parameter::RelativeHumidity => "RH2M",
            Parameter::WindSpeed => "WS10M",
            Parameter::SurfaceShortwave => "ALLSKY_SFC_SW_DWN",
        }
    }

    pub(crate) fn query_list() -> String {
        Self::ALL
            .iter()
            .map(Parameter::code)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Formats a `Parameter` as its source code.
///
/// ```
/// use solar_dash::Parameter;
///
/// assert_eq!(Parameter::WindSpeed.to_string(), "WS10M");
/// ```
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
