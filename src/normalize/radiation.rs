//! Hourly-to-daily reduction of satellite radiation samples.

use crate::types::payload::HourlyRadiationSet;

/// Mean of `variable` over every hour stamped with `iso_date` (`YYYY-MM-DD`).
///
/// Null or non-finite samples are skipped, as are stamps whose index runs past
/// the end of the sample array. `None` if no usable sample remains.
pub fn daily_mean(set: &HourlyRadiationSet, variable: &str, iso_date: &str) -> Option<f64> {
    let samples = set.variable(variable)?;
    let (sum, count) = set
        .time
        .iter()
        .enumerate()
        .filter(|(_, stamp)| stamp.starts_with(iso_date))
        .filter_map(|(i, _)| samples.get(i).copied().flatten())
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / count as f64)
}
