//! The output shape consumed by charts and metric cards.

use crate::utils::format_date_key;
use serde::Serialize;

/// One day of the dashboard series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetric {
    /// Display label, `MM/DD`.
    pub date: String,
    /// °C, one decimal.
    pub temperature: Option<f64>,
    /// Relative humidity %, one decimal.
    pub humidity: Option<f64>,
    /// m/s, one decimal.
    pub wind_speed: Option<f64>,
    /// Percentage of the reference peak, or raw W/m² on the fallback path.
    /// See [`SolarSource`].
    pub solar_percent: Option<f64>,
}

/// Values shown on the "current" metric cards. Absent values read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub solar_percent: f64,
}

impl From<&DailyMetric> for CurrentConditions {
    fn from(day: &DailyMetric) -> Self {
        Self {
            temperature: day.temperature.unwrap_or(0.0),
            humidity: day.humidity.unwrap_or(0.0),
            wind_speed: day.wind_speed.unwrap_or(0.0),
            solar_percent: day.solar_percent.unwrap_or(0.0),
        }
    }
}

/// Where the `solar_percent` values of a snapshot came from.
///
/// The two paths do not share a unit: the satellite path yields a percentage of
/// the reference maximum, the fallback yields raw irradiance in W/m².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SolarSource {
    /// Averaged hourly diffuse radiation, as a percentage.
    Satellite,
    /// Daily all-sky shortwave irradiance from the climate source, W/m².
    ClimateFallback,
}

impl SolarSource {
    pub fn unit(&self) -> &'static str {
        match self {
            SolarSource::Satellite => "%",
            SolarSource::ClimateFallback => "W/m²",
        }
    }
}

/// Everything the dashboard renders for one location selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub current: CurrentConditions,
    /// At most seven days, oldest first.
    pub series: Vec<DailyMetric>,
    /// `YYYYMMDD` key of the latest date with a temperature sample. Since the
    /// same check decides which days enter `series`, this is always the key of
    /// the last series entry.
    pub latest_date: String,
    pub solar_source: SolarSource,
}

/// A labelled, formatted value for a metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

impl DashboardSnapshot {
    /// `latest_date` rendered as `DD/MM/YYYY`, or `N/A`.
    pub fn latest_date_label(&self) -> String {
        format_date_key(&self.latest_date)
    }

    /// Formatted cards for the current conditions, in display order.
    pub fn metric_cards(&self) -> Vec<MetricCard> {
        let c = &self.current;
        vec![
            MetricCard {
                label: "Temperature",
                value: format!("{:.1} °C", c.temperature),
            },
            MetricCard {
                label: "Humidity",
                value: format!("{:.1} %", c.humidity),
            },
            MetricCard {
                label: "Wind Speed",
                value: format!("{:.1} m/s", c.wind_speed),
            },
            MetricCard {
                label: "Solar",
                value: format!("{:.1} {}", c.solar_percent, self.solar_source.unit()),
            },
        ]
    }
}
