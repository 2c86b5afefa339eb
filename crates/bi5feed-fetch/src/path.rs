//! Archive resource path construction.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

/// Root of the public Dukascopy data feed.
pub const DEFAULT_ROOT: &str = "https://datafeed.dukascopy.com/datafeed";

/// File name suffix of an hour file.
const HOUR_SUFFIX: &str = "h_ticks.bi5";

/// Builds the resource path for a specific hour's tick data.
///
/// Path format: `{root}/{symbol}/{YEAR}/{MONTH}/{DAY}/{HOUR}h_ticks.bi5`
///
/// Note: the archive uses 0-indexed months (January = 00). The symbol is
/// inserted as given; the public feed expects upper case.
///
/// # Example
///
/// ```
/// use bi5feed_fetch::path::{DEFAULT_ROOT, hour_path};
/// use chrono::{TimeZone, Utc};
///
/// let hour = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let path = hour_path(DEFAULT_ROOT, "EURUSD", hour);
/// assert_eq!(path, "https://datafeed.dukascopy.com/datafeed/EURUSD/2024/00/15/12h_ticks.bi5");
/// ```
#[must_use]
pub fn hour_path(root: &str, symbol: &str, hour: DateTime<Utc>) -> String {
    format!(
        "{}/{}/{}/{:02}/{:02}/{:02}{}",
        root.trim_end_matches('/'),
        symbol,
        hour.year(),
        hour.month0(),
        hour.day(),
        hour.hour(),
        HOUR_SUFFIX
    )
}

/// Builds the resource path of the first hour (`00h`) of `date`.
#[must_use]
pub fn day_path(root: &str, symbol: &str, date: NaiveDate) -> String {
    hour_path(root, symbol, Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Extracts the hour start timestamp from a resource path.
///
/// Accepts any root; only the trailing `{YEAR}/{MONTH}/{DAY}/{HOUR}h_ticks.bi5`
/// components are inspected.
#[must_use]
pub fn hour_from_path(path: &str) -> Option<DateTime<Utc>> {
    let mut parts = path.rsplit('/');

    let hour: u32 = parts.next()?.strip_suffix(HOUR_SUFFIX)?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let month0: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;

    Utc.with_ymd_and_hms(year, month0 + 1, day, hour, 0, 0)
        .single()
}
