//! Search for the earliest day with archived data.

use bi5feed_fetch::FileFetcher;
use bi5feed_fetch::path::{DEFAULT_ROOT, day_path};
use bi5feed_types::{DateRange, Result};
use chrono::{NaiveDate, TimeDelta};
use tracing::debug;

/// Configuration for an [`AvailabilityLocator`].
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Archive root prepended to every resource path.
    pub root: String,
    /// Lower search bound, assumed to predate every symbol's history.
    pub earliest: NaiveDate,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            earliest: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}

/// Binary-searches the archive for the first day holding a symbol's data.
///
/// Relies on the archive being append-only: once a day exists, every later
/// day exists too.
#[derive(Debug)]
pub struct AvailabilityLocator<F> {
    fetcher: F,
    config: LocatorConfig,
}

impl<F: FileFetcher> AvailabilityLocator<F> {
    /// Creates a locator with the default configuration.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, LocatorConfig::default())
    }

    /// Creates a locator with the given configuration.
    #[must_use]
    pub const fn with_config(fetcher: F, config: LocatorConfig) -> Self {
        Self { fetcher, config }
    }

    /// Returns the locator configuration.
    #[must_use]
    pub const fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Finds the first day with data between the configured earliest day and
    /// `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if `today` precedes the configured earliest day.
    pub async fn find_first(&self, symbol: &str, today: NaiveDate) -> Result<NaiveDate> {
        let range = DateRange::new(self.config.earliest, today)?;
        Ok(self.find_first_available(symbol, range).await)
    }

    /// Finds the first day with data inside `range`.
    ///
    /// `range.start` is assumed to have no data and `range.end` to have
    /// data. The result is accurate to the day: it is the first day whose
    /// `00h` file the archive serves.
    pub async fn find_first_available(&self, symbol: &str, range: DateRange) -> NaiveDate {
        let mut lower = range.start;
        let mut upper = range.end;
        let mut lookups = 0u32;

        while (upper - lower).num_days() > 1 {
            let mid = lower + TimeDelta::days((upper - lower).num_days() / 2);
            lookups += 1;
            if self.exists_at(symbol, mid).await {
                upper = mid;
            } else {
                lower = mid;
            }
        }

        debug!(symbol, %upper, lookups, "located first available day");
        upper
    }

    /// Checks the first hour file of `date`; transport errors count as absent.
    async fn exists_at(&self, symbol: &str, date: NaiveDate) -> bool {
        let path = day_path(&self.config.root, symbol, date);
        match self.fetcher.exists(&path).await {
            Ok(exists) => exists,
            Err(e) => {
                debug!(path = %path, error = %e, "lookup failed, treating as absent");
                false
            }
        }
    }
}
