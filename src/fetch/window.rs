//! The date range requested from both sources.

use crate::utils::to_date_key;
use chrono::{Days, NaiveDate};

/// An inclusive date range ending `lag` days before today.
///
/// The climate source publishes with a delay of a few days, so the window is
/// shifted back far enough that its last day normally has data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RequestWindow {
    /// Window of `days` calendar days whose last day is `today - lag_days`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use solar_dash::RequestWindow;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let window = RequestWindow::ending_before(today, 3, 8);
    /// assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    /// assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    /// ```
    pub fn ending_before(today: NaiveDate, lag_days: u32, days: u32) -> Self {
        let end = today
            .checked_sub_days(Days::new(u64::from(lag_days)))
            .unwrap_or(NaiveDate::MIN);
        let start = end
            .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// `(start, end)` as `YYYYMMDD`, the climate source's format.
    pub fn compact(&self) -> (String, String) {
        (to_date_key(self.start), to_date_key(self.end))
    }

    /// `(start, end)` as `YYYY-MM-DD`, the satellite source's format.
    pub fn iso(&self) -> (String, String) {
        (
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
        )
    }
}
