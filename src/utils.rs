use chrono::NaiveDate;

const DATE_KEY_FORMAT: &str = "%Y%m%d";

/// Rounds to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Parses a `YYYYMMDD` key. Rejects anything that is not exactly eight ASCII digits.
pub(crate) fn parse_date_key(key: &str) -> Option<NaiveDate> {
    if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

pub(crate) fn to_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Formats a `YYYYMMDD` key as `DD/MM/YYYY`.
///
/// Returns `N/A` unless the key is exactly eight ASCII digits naming a real
/// calendar date, so `"20241399"` is `N/A` as well.
///
/// ```
/// use solar_dash::format_date_key;
///
/// assert_eq!(format_date_key("20240115"), "15/01/2024");
/// assert_eq!(format_date_key("2024011"), "N/A");
/// assert_eq!(format_date_key("2024-1-1"), "N/A");
/// assert_eq!(format_date_key("20241399"), "N/A");
/// ```
pub fn format_date_key(key: &str) -> String {
    parse_date_key(key)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// `MM/DD` label used on the series axis. Falls back to the raw key.
pub(crate) fn series_label(key: &str) -> String {
    parse_date_key(key)
        .map(|d| d.format("%m/%d").to_string())
        .unwrap_or_else(|| key.to_string())
}

/// `YYYY-MM-DD`, the prefix hourly stamps of that day start with.
pub(crate) fn iso_date(key: &str) -> Option<String> {
    parse_date_key(key).map(|d| d.format("%Y-%m-%d").to_string())
}
