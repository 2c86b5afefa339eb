//! Date ranges and hour iteration.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::DateRangeError;

/// A range of dates for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns an iterator over all hours in the date range.
    pub fn hours(&self) -> HourIterator {
        HourIterator::new(self.start, self.end)
    }

    /// Returns the number of whole days between start and end.
    ///
    /// A single-day range has a width of zero.
    #[must_use]
    pub fn width_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Iterator over all hours in a date range.
#[derive(Debug, Clone)]
pub struct HourIterator {
    current: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl HourIterator {
    /// Creates a new hour iterator for the given date range.
    fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let start_dt = Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN));
        // End at 23:00 of the end date (last hour of the day)
        let end_dt = Utc.from_utc_datetime(&end.and_time(NaiveTime::MIN)) + TimeDelta::hours(23);

        Self {
            current: start_dt,
            end: end_dt,
        }
    }
}

impl Iterator for HourIterator {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            return None;
        }

        let result = self.current;
        self.current += TimeDelta::hours(1);
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current > self.end {
            return (0, Some(0));
        }
        let hours = (self.end - self.current).num_hours() as usize + 1;
        (hours, Some(hours))
    }
}

impl ExactSizeIterator for HourIterator {}
