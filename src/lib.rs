//! Data side of a solar/weather globe dashboard.
//!
//! For a coordinate, [`Dashboard`] fetches daily climate parameters and hourly
//! satellite radiation concurrently and shapes them into a [`DashboardSnapshot`]:
//! a short daily series plus the values shown on the "current" cards.
//! [`normalize`] exposes the shaping step on its own for callers that already
//! hold both payloads.

mod config;
mod dashboard;
mod error;
mod fetch;
mod normalize;
#[cfg(test)]
mod test_support;
mod types;
mod utils;

pub use config::{DashboardConfig, CLIMATE_URL, SATELLITE_URL};
pub use dashboard::*;
pub use error::DashboardError;

pub use fetch::error::FetchError;
pub use fetch::source_loader::{RawPayloads, SourceLoader};
pub use fetch::window::RequestWindow;

pub use normalize::error::DataError;
pub use normalize::normalizer::{normalize, Normalizer, DEFAULT_REFERENCE_MAX, DEFAULT_SERIES_LEN};
pub use normalize::radiation::daily_mean;

pub use types::coordinate::Coordinate;
pub use types::parameter::{Parameter, MISSING_SENTINEL};
pub use types::payload::{DailyParameterSet, HourlyRadiationSet, DIFFUSE_VARIABLE, HOURLY_VARIABLES};
pub use types::preset::{PresetLocation, PRESET_LOCATIONS};
pub use types::snapshot::{CurrentConditions, DailyMetric, DashboardSnapshot, MetricCard, SolarSource};

pub use utils::format_date_key;
