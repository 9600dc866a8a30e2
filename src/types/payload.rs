//! Typed views over the two upstream JSON bodies.
//!
//! The fetch layer hands over raw [`serde_json::Value`]s; these types are built
//! from them during normalization so that shape problems surface as
//! [`DataError`]s rather than transport errors.

use crate::normalize::error::DataError;
use crate::types::parameter::{Parameter, MISSING_SENTINEL};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Hourly variables requested from the satellite radiation source.
pub const HOURLY_VARIABLES: [&str; 4] = [
    "shortwave_radiation",
    "direct_radiation",
    "direct_radiation_instant",
    "diffuse_radiation_instant",
];

/// The hourly variable averaged into the daily solar percentage.
pub const DIFFUSE_VARIABLE: &str = "diffuse_radiation_instant";

/// Daily samples per parameter, keyed by `YYYYMMDD` date.
///
/// Date keys are kept in a `BTreeMap`, so iteration is chronological.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyParameterSet {
    series: HashMap<Parameter, BTreeMap<String, Option<f64>>>,
}

impl DailyParameterSet {
    /// Reads `properties.parameter` out of a climate source response.
    ///
    /// # Errors
    ///
    /// * [`DataError::MissingParameterBlock`] if `properties.parameter` is not an object.
    /// * [`DataError::MissingParameter`] if the temperature series is absent.
    /// * [`DataError::Malformed`] if the temperature series is not a map of date to
    ///   number. Unreadable samples of the other parameters are treated as missing.
    pub fn from_json(body: &Value) -> Result<Self, DataError> {
        let block = body
            .get("properties")
            .and_then(|p| p.get("parameter"))
            .and_then(Value::as_object)
            .ok_or(DataError::MissingParameterBlock)?;

        let mut series = HashMap::with_capacity(Parameter::ALL.len());
        for parameter in Parameter::ALL {
            let Some(raw) = block.get(parameter.code()) else {
                debug!("Parameter {} absent from climate payload", parameter);
                continue;
            };
            if parameter == Parameter::Temperature {
                let samples: BTreeMap<String, Option<f64>> = serde_json::from_value(raw.clone())
                    .map_err(|e| DataError::Malformed(parameter, e))?;
                series.insert(parameter, samples);
            } else if let Some(samples) = lenient_samples(parameter, raw) {
                series.insert(parameter, samples);
            }
        }

        if !series.contains_key(&Parameter::Temperature) {
            return Err(DataError::MissingParameter(Parameter::Temperature));
        }
        Ok(Self { series })
    }

    /// Date keys of the temperature series whose sample is present, ascending.
    pub fn valid_dates(&self) -> Vec<&str> {
        self.series
            .get(&Parameter::Temperature)
            .map(|temps| {
                temps
                    .iter()
                    .filter(|(_, v)| is_present(**v))
                    .map(|(k, _)| k.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sample for `parameter` at `date_key`, or `None` if absent or missing.
    pub fn value(&self, parameter: Parameter, date_key: &str) -> Option<f64> {
        self.series
            .get(&parameter)
            .and_then(|samples| samples.get(date_key))
            .copied()
            .flatten()
            .filter(|v| is_present(Some(*v)))
    }
}

/// Date to sample, with anything that is not a number read as missing.
fn lenient_samples(parameter: Parameter, raw: &Value) -> Option<BTreeMap<String, Option<f64>>> {
    let Some(map) = raw.as_object() else {
        warn!("Ignoring {} series that is not an object", parameter);
        return None;
    };
    Some(
        map.iter()
            .map(|(date, v)| {
                if !(v.is_number() || v.is_null()) {
                    debug!("Non-numeric {} sample at {} read as missing", parameter, date);
                }
                (date.clone(), v.as_f64())
            })
            .collect(),
    )
}

fn is_present(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != MISSING_SENTINEL && v.is_finite())
}

/// Hourly radiation samples aligned by index with `time`.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRadiationSet {
    /// ISO-8601 hour stamps, e.g. `2024-01-01T12:00`.
    pub time: Vec<String>,
    /// Variable name to samples; `None` where the source reported null or a
    /// non-numeric value.
    pub variables: HashMap<String, Vec<Option<f64>>>,
}

#[derive(Deserialize)]
struct RawHourly {
    time: Vec<String>,
    #[serde(flatten)]
    variables: HashMap<String, Value>,
}

impl HourlyRadiationSet {
    /// Reads the `hourly` block of a satellite source response.
    ///
    /// Returns `None` for an error body (`"error": true`), a body without an
    /// `hourly` block, or one whose `time` is not a list of strings. All of these
    /// put normalization on its fallback path. Variables are read independently:
    /// a variable that is not an array is dropped, and non-numeric samples
    /// become `None`, without affecting the other variables.
    pub fn from_json(body: &Value) -> Option<Self> {
        if body.get("error").and_then(Value::as_bool) == Some(true) {
            warn!(
                "Satellite source returned an error body: {}",
                body.get("reason").and_then(Value::as_str).unwrap_or("no reason given")
            );
            return None;
        }
        let hourly = body.get("hourly")?;
        let raw: RawHourly = match serde_json::from_value(hourly.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Ignoring malformed hourly radiation block: {}", e);
                return None;
            }
        };
        let variables = raw
            .variables
            .into_iter()
            .filter_map(|(name, samples)| match samples {
                Value::Array(values) => {
                    Some((name, values.iter().map(Value::as_f64).collect()))
                }
                _ => {
                    debug!("Skipping hourly variable {} that is not an array", name);
                    None
                }
            })
            .collect();
        Some(Self {
            time: raw.time,
            variables,
        })
    }

    /// Samples for `variable`, if the source returned it.
    pub fn variable(&self, variable: &str) -> Option<&[Option<f64>]> {
        self.variables.get(variable).map(Vec::as_slice)
    }
}
