//! Main entry point: fetch both sources for a coordinate and normalize them into a
//! [`DashboardSnapshot`].

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::fetch::source_loader::{RawPayloads, SourceLoader};
use crate::fetch::window::RequestWindow;
use crate::normalize::normalizer::Normalizer;
use crate::types::coordinate::Coordinate;
use crate::types::snapshot::DashboardSnapshot;
use bon::bon;
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome of [`Dashboard::select`].
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// This was still the latest selection when its data arrived.
    Current(DashboardSnapshot),
    /// A newer selection was started while this one was in flight; its result
    /// should not be displayed.
    Superseded,
}

/// Client that turns a location into a dashboard snapshot.
///
/// Every call performs a fresh fetch of both sources; nothing is cached.
///
/// # Examples
///
/// ```no_run
/// # use solar_dash::{Dashboard, DashboardError, PresetLocation};
/// # #[tokio::main]
/// # async fn main() -> Result<(), DashboardError> {
/// let dashboard = Dashboard::new()?;
/// let london = PresetLocation::by_name("London").unwrap();
///
/// let snapshot = dashboard.snapshot(london.coordinate).call().await?;
/// println!("{} days up to {}", snapshot.series.len(), snapshot.latest_date_label());
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    loader: SourceLoader,
    normalizer: Normalizer,
    config: DashboardConfig,
    generation: AtomicU64,
}

#[bon]
impl Dashboard {
    /// Creates a client against the public APIs with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Fetch`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, DashboardError> {
        Self::with_config(DashboardConfig::default())
    }

    /// Creates a client with custom endpoints or windowing.
    pub fn with_config(config: DashboardConfig) -> Result<Self, DashboardError> {
        Ok(Self {
            loader: SourceLoader::new(&config)?,
            normalizer: Normalizer::new(config.series_len, config.reference_max),
            config,
            generation: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The window requested when today is `today`.
    pub fn window_for(&self, today: NaiveDate) -> RequestWindow {
        RequestWindow::ending_before(
            today,
            self.config.reporting_lag_days,
            self.config.window_days,
        )
    }

    /// Fetches the raw bodies of both sources for `coordinate`.
    ///
    /// `.today(NaiveDate)` overrides the local date the window is computed from.
    #[builder(start_fn = payloads)]
    #[doc(hidden)]
    pub async fn build_payloads(
        &self,
        #[builder(start_fn)] coordinate: Coordinate,
        today: Option<NaiveDate>,
    ) -> Result<RawPayloads, DashboardError> {
        let window = self.window_for(today.unwrap_or_else(|| Local::now().date_naive()));
        debug!(
            "Fetching {:?} for window {} to {}",
            coordinate, window.start, window.end
        );
        Ok(self.loader.fetch(coordinate, window).await?)
    }

    /// Fetches and normalizes data for `coordinate`.
    ///
    /// `.today(NaiveDate)` overrides the local date the window is computed from.
    ///
    /// # Errors
    ///
    /// * [`DashboardError::Fetch`] if the climate source cannot be reached or
    ///   returns something other than JSON.
    /// * [`DashboardError::Data`] if the climate payload has the wrong shape or
    ///   no valid temperature samples.
    #[builder(start_fn = snapshot)]
    #[doc(hidden)]
    pub async fn build_snapshot(
        &self,
        #[builder(start_fn)] coordinate: Coordinate,
        today: Option<NaiveDate>,
    ) -> Result<DashboardSnapshot, DashboardError> {
        let payloads = self
            .payloads(coordinate)
            .maybe_today(today)
            .call()
            .await?;
        let snapshot = self
            .normalizer
            .normalize(&payloads.daily, payloads.hourly.as_ref())?;
        Ok(snapshot)
    }

    /// Like [`Dashboard::snapshot`], but sequenced against other selections on
    /// this client: if another `select` starts before this one finishes, this
    /// one resolves to [`Selection::Superseded`], errors included. In-flight
    /// requests are not cancelled.
    #[builder(start_fn = select)]
    #[doc(hidden)]
    pub async fn build_select(
        &self,
        #[builder(start_fn)] coordinate: Coordinate,
        today: Option<NaiveDate>,
    ) -> Result<Selection, DashboardError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self
            .snapshot(coordinate)
            .maybe_today(today)
            .call()
            .await;

        let latest = self.generation.load(Ordering::SeqCst);
        if latest != ticket {
            info!(
                "Discarding result of selection {} in favour of {}",
                ticket, latest
            );
            return Ok(Selection::Superseded);
        }
        result.map(Selection::Current)
    }
}
