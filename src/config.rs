//! Tunables for the dashboard client.

use bon::Builder;
use std::time::Duration;

pub const CLIMATE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
pub const SATELLITE_URL: &str = "https://satellite-api.open-meteo.com/v1/archive";

/// Endpoints and windowing used by [`crate::Dashboard`].
///
/// Every field has a default, so `DashboardConfig::builder().build()` targets the
/// public APIs.
///
/// ```
/// use solar_dash::DashboardConfig;
/// use std::time::Duration;
///
/// let config = DashboardConfig::builder()
///     .climate_url("http://localhost:8080/daily")
///     .request_timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.reporting_lag_days, 3);
/// assert_eq!(config.climate_url, "http://localhost:8080/daily");
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct DashboardConfig {
    /// Daily point endpoint of the climate data source.
    #[builder(into, default = CLIMATE_URL.to_string())]
    pub climate_url: String,
    /// Hourly archive endpoint of the satellite radiation source.
    #[builder(into, default = SATELLITE_URL.to_string())]
    pub satellite_url: String,
    /// Days between today and the last requested day.
    #[builder(default = 3)]
    pub reporting_lag_days: u32,
    /// Calendar days in the requested window.
    #[builder(default = 8)]
    pub window_days: u32,
    #[builder(default = Duration::from_secs(30))]
    pub request_timeout: Duration,
    /// Days kept in the snapshot series.
    #[builder(default = crate::normalize::normalizer::DEFAULT_SERIES_LEN)]
    pub series_len: usize,
    /// Irradiance in W/m² reported as 100 %.
    #[builder(default = crate::normalize::normalizer::DEFAULT_REFERENCE_MAX)]
    pub reference_max: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
