//! Turns the two upstream payloads into a [`DashboardSnapshot`].

use crate::normalize::error::DataError;
use crate::normalize::radiation::daily_mean;
use crate::types::parameter::Parameter;
use crate::types::payload::{DailyParameterSet, HourlyRadiationSet, DIFFUSE_VARIABLE};
use crate::types::snapshot::{CurrentConditions, DailyMetric, DashboardSnapshot, SolarSource};
use crate::utils::{iso_date, round1, series_label};
use log::{debug, info};
use serde_json::Value;

/// Days kept in the dashboard series.
pub const DEFAULT_SERIES_LEN: usize = 7;
/// Irradiance, in W/m², that maps to 100 %.
pub const DEFAULT_REFERENCE_MAX: f64 = 1000.0;

/// Normalization settings. A single pass, no state carried between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    series_len: usize,
    reference_max: f64,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_SERIES_LEN, DEFAULT_REFERENCE_MAX)
    }
}

impl Normalizer {
    pub fn new(series_len: usize, reference_max: f64) -> Self {
        Self {
            series_len,
            reference_max,
        }
    }

    /// Builds a snapshot from a climate payload and an optional satellite payload.
    ///
    /// A missing, erroneous or incomplete satellite payload is not an error: the
    /// solar value then falls back to the climate source's daily shortwave
    /// irradiance in W/m², unscaled.
    ///
    /// # Errors
    ///
    /// Any [`DataError`] raised while reading the climate payload, and
    /// [`DataError::NoValidData`] when every temperature sample is missing.
    pub fn normalize(
        &self,
        daily: &Value,
        hourly: Option<&Value>,
    ) -> Result<DashboardSnapshot, DataError> {
        let params = DailyParameterSet::from_json(daily)?;
        let radiation = hourly
            .and_then(HourlyRadiationSet::from_json)
            .filter(|set| set.variable(DIFFUSE_VARIABLE).is_some());

        let valid_dates = params.valid_dates();
        let Some(latest) = valid_dates.last() else {
            return Err(DataError::NoValidData);
        };
        let latest_date = latest.to_string();
        let kept = &valid_dates[valid_dates.len().saturating_sub(self.series_len)..];

        let solar_source = match radiation {
            Some(_) => SolarSource::Satellite,
            None => SolarSource::ClimateFallback,
        };
        debug!(
            "Normalizing {} of {} valid dates, solar from {:?}",
            kept.len(),
            valid_dates.len(),
            solar_source
        );

        let series: Vec<DailyMetric> = kept
            .iter()
            .map(|key| DailyMetric {
                date: series_label(key),
                temperature: params.value(Parameter::Temperature, key).map(round1),
                humidity: params.value(Parameter::RelativeHumidity, key).map(round1),
                wind_speed: params.value(Parameter::WindSpeed, key).map(round1),
                solar_percent: match &radiation {
                    Some(set) => self.solar_percent(set, key),
                    None => params.value(Parameter::SurfaceShortwave, key).map(round1),
                },
            })
            .filter(|day| day.temperature.is_some())
            .collect();

        let current = series
            .last()
            .map(CurrentConditions::from)
            .unwrap_or_default();

        info!(
            "Built snapshot with {} days, latest date {}",
            series.len(),
            latest_date
        );
        Ok(DashboardSnapshot {
            current,
            series,
            latest_date,
            solar_source,
        })
    }

    fn solar_percent(&self, set: &HourlyRadiationSet, key: &str) -> Option<f64> {
        let day = iso_date(key)?;
        daily_mean(set, DIFFUSE_VARIABLE, &day).map(|mean| round1(mean / self.reference_max * 100.0))
    }
}

/// [`Normalizer::normalize`] with the default settings.
pub fn normalize(daily: &Value, hourly: Option<&Value>) -> Result<DashboardSnapshot, DataError> {
    Normalizer::default().normalize(daily, hourly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn climate(days: &[(&str, f64)]) -> Value {
        let mut t2m = serde_json::Map::new();
        let mut rh = serde_json::Map::new();
        let mut ws = serde_json::Map::new();
        let mut sw = serde_json::Map::new();
        for (key, temp) in days {
            t2m.insert(key.to_string(), json!(temp));
            rh.insert(key.to_string(), json!(50.0));
            ws.insert(key.to_string(), json!(2.0));
            sw.insert(key.to_string(), json!(150.0));
        }
        json!({ "properties": { "parameter": {
            "T2M": t2m, "RH2M": rh, "WS10M": ws, "ALLSKY_SFC_SW_DWN": sw
        } } })
    }

    #[test]
    fn all_sentinel_temperatures_fail() {
        let body = climate(&[("20240101", -999.0), ("20240102", -999.0)]);
        let err = normalize(&body, None).unwrap_err();
        assert!(matches!(err, DataError::NoValidData));
        assert_eq!(err.to_string(), "no valid data");
    }

    #[test]
    fn missing_shape_fails() {
        let err = normalize(&json!({ "header": {} }), None).unwrap_err();
        assert!(matches!(err, DataError::MissingParameterBlock));
    }

    #[test]
    fn fewer_than_seven_valid_dates_are_all_kept() {
        let body = climate(&[
            ("20240101", 1.0),
            ("20240102", -999.0),
            ("20240103", 3.0),
            ("20240104", 4.0),
        ]);
        let snap = normalize(&body, None).unwrap();
        let dates: Vec<_> = snap.series.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["01/01", "01/03", "01/04"]);
    }

    #[test]
    fn keeps_seven_latest_valid_dates() {
        let days: Vec<(String, f64)> = (1..=10)
            .map(|d| (format!("202401{:02}", d), d as f64))
            .collect();
        // Insert out of order to make sure ordering comes from the keys.
        let mut refs: Vec<(&str, f64)> = days.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        refs.reverse();
        let snap = normalize(&climate(&refs), None).unwrap();

        assert_eq!(snap.series.len(), 7);
        assert_eq!(snap.series[0].date, "01/04");
        assert_eq!(snap.series[6].date, "01/10");
        assert_eq!(snap.latest_date, "20240110");
        assert_eq!(snap.current.temperature, 10.0);
    }

    #[test]
    fn fallback_scenario_without_satellite_payload() {
        let body = json!({ "properties": { "parameter": {
            "T2M": { "20240101": 20.5, "20240102": -999 },
            "RH2M": { "20240101": 60, "20240102": 55 },
            "WS10M": { "20240101": 3, "20240102": 4 },
            "ALLSKY_SFC_SW_DWN": { "20240101": 200, "20240102": 210 }
        } } });
        let snap = normalize(&body, None).unwrap();

        assert_eq!(snap.series.len(), 1);
        let day = &snap.series[0];
        assert_eq!(day.date, "01/01");
        assert_eq!(day.temperature, Some(20.5));
        assert_eq!(day.humidity, Some(60.0));
        assert_eq!(day.wind_speed, Some(3.0));
        assert_eq!(day.solar_percent, Some(200.0));
        assert_eq!(snap.current, CurrentConditions::from(day));
        assert_eq!(snap.latest_date, "20240101");
        assert_eq!(snap.solar_source, SolarSource::ClimateFallback);
    }

    #[test]
    fn satellite_path_averages_diffuse_radiation() {
        let body = climate(&[("20240101", 12.0)]);
        let hourly = json!({ "hourly": {
            "time": ["2024-01-01T00:00", "2024-01-01T12:00"],
            "diffuse_radiation_instant": [100, 300]
        } });
        let snap = normalize(&body, Some(&hourly)).unwrap();
        assert_eq!(snap.series[0].solar_percent, Some(20.0));
        assert_eq!(snap.current.solar_percent, 20.0);
        assert_eq!(snap.solar_source, SolarSource::Satellite);
    }

    #[test]
    fn satellite_day_without_samples_is_null_not_fallback() {
        let body = climate(&[("20240101", 12.0), ("20240102", 13.0)]);
        let hourly = json!({ "hourly": {
            "time": ["2024-01-01T00:00", "2024-01-02T00:00"],
            "diffuse_radiation_instant": [250, null]
        } });
        let snap = normalize(&body, Some(&hourly)).unwrap();
        assert_eq!(snap.series[0].solar_percent, Some(25.0));
        assert_eq!(snap.series[1].solar_percent, None);
        assert_eq!(snap.current.solar_percent, 0.0);
    }

    #[test]
    fn error_body_behaves_like_absent_payload() {
        let body = climate(&[("20240101", 12.0), ("20240102", 13.0)]);
        let with_error = normalize(&body, Some(&json!({ "error": true }))).unwrap();
        let without = normalize(&body, None).unwrap();
        assert_eq!(with_error, without);
        assert!(with_error
            .series
            .iter()
            .all(|d| d.solar_percent == Some(150.0)));
    }

    #[test]
    fn missing_diffuse_variable_falls_back() {
        let body = climate(&[("20240101", 12.0)]);
        let hourly = json!({ "hourly": {
            "time": ["2024-01-01T00:00"],
            "shortwave_radiation": [400]
        } });
        let snap = normalize(&body, Some(&hourly)).unwrap();
        assert_eq!(snap.series[0].solar_percent, Some(150.0));
        assert_eq!(snap.solar_source, SolarSource::ClimateFallback);
    }

    #[test]
    fn unreadable_unrelated_hourly_variable_keeps_satellite_path() {
        let body = climate(&[("20240101", 12.0)]);
        let hourly = json!({ "hourly": {
            "time": ["2024-01-01T00:00", "2024-01-01T12:00"],
            "shortwave_radiation": ["n/a", 1.0],
            "diffuse_radiation_instant": [100, 300]
        } });
        let snap = normalize(&body, Some(&hourly)).unwrap();
        assert_eq!(snap.series[0].solar_percent, Some(20.0));
        assert_eq!(snap.solar_source, SolarSource::Satellite);
    }

    #[test]
    fn latest_date_matches_last_series_entry() {
        let body = climate(&[
            ("20240101", 1.0),
            ("20240102", 2.0),
            ("20240103", -999.0),
        ]);
        let snap = normalize(&body, None).unwrap();
        assert_eq!(snap.latest_date, "20240102");
        assert_eq!(snap.series.last().unwrap().date, "01/02");
    }

    #[test]
    fn non_numeric_humidity_reads_as_missing() {
        let body = json!({ "properties": { "parameter": {
            "T2M": { "20240101": 12.0 },
            "RH2M": { "20240101": "x" }
        } } });
        let snap = normalize(&body, None).unwrap();
        assert_eq!(snap.series.len(), 1);
        assert_eq!(snap.series[0].temperature, Some(12.0));
        assert_eq!(snap.series[0].humidity, None);
        assert_eq!(snap.current.humidity, 0.0);
    }

    #[test]
    fn values_are_rounded_and_sentinels_nulled() {
        let body = json!({ "properties": { "parameter": {
            "T2M": { "20240101": 20.46 },
            "RH2M": { "20240101": -999 },
            "WS10M": { "20240101": 3.14159 },
            "ALLSKY_SFC_SW_DWN": { "20240101": -999 }
        } } });
        let snap = normalize(&body, None).unwrap();
        let day = &snap.series[0];
        assert_eq!(day.temperature, Some(20.5));
        assert_eq!(day.humidity, None);
        assert_eq!(day.wind_speed, Some(3.1));
        assert_eq!(day.solar_percent, None);
        assert_eq!(snap.current.humidity, 0.0);
    }

    #[test]
    fn custom_series_len_and_reference() {
        let body = climate(&[("20240101", 1.0), ("20240102", 2.0), ("20240103", 3.0)]);
        let hourly = json!({ "hourly": {
            "time": ["2024-01-03T10:00"],
            "diffuse_radiation_instant": [250]
        } });
        let snap = Normalizer::new(2, 500.0)
            .normalize(&body, Some(&hourly))
            .unwrap();
        assert_eq!(snap.series.len(), 2);
        assert_eq!(snap.current.solar_percent, 50.0);
    }
}
