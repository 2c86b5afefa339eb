//! Stateful cursor over hourly tick files.

use bi5feed_fetch::path::{DEFAULT_ROOT, hour_path};
use bi5feed_fetch::{
    DecompressError, FetchError, FileFetcher, LzmaDecompressor, StreamDecompressor,
};
use bi5feed_types::{FeedError, HourTick, Result};
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::decode::{TICK_SIZE, decode_tick, tick_count};

/// Configuration for an [`HourCursor`].
#[derive(Debug, Clone)]
pub struct CursorConfig {
    /// Archive root prepended to every resource path.
    pub root: String,
    /// Attempts at fetching and decompressing an hour before giving up.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub retry_delay: Duration,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            max_attempts: 5,
            retry_delay: Duration::ZERO,
        }
    }
}

/// Failure of a single fetch-and-decompress attempt.
#[derive(Error, Debug)]
enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decompress(#[from] DecompressError),
}

/// The hour whose buffer is currently loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadedHour {
    symbol: String,
    hour: DateTime<Utc>,
}

/// Yields the ticks of one hour file at a time.
///
/// The cursor owns the decompressed buffer of the hour it last loaded and a
/// read position into it. Each instance is one logical stream; process
/// several symbols concurrently by giving each its own cursor.
///
/// # Example
///
/// ```ignore
/// use bi5feed_fetch::HttpFetcher;
/// use bi5feed_stream::HourCursor;
///
/// let mut cursor = HourCursor::new(HttpFetcher::with_defaults()?);
/// while let Some(quote) = cursor.next_tick(hour, "EURUSD").await? {
///     println!("{} {} {}", quote.tick.timestamp, quote.tick.ask, quote.tick.bid);
///     if quote.is_last_of_hour {
///         break;
///     }
/// }
/// ```
#[derive(Debug)]
pub struct HourCursor<F, D = LzmaDecompressor> {
    fetcher: F,
    decompressor: D,
    config: CursorConfig,
    loaded: Option<LoadedHour>,
    buffer: Vec<u8>,
    position: usize,
}

impl<F: FileFetcher> HourCursor<F> {
    /// Creates a cursor with the LZMA decompressor and default configuration.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self::with_parts(fetcher, LzmaDecompressor, CursorConfig::default())
    }
}

impl<F: FileFetcher, D: StreamDecompressor> HourCursor<F, D> {
    /// Creates a cursor from its collaborators.
    #[must_use]
    pub const fn with_parts(fetcher: F, decompressor: D, config: CursorConfig) -> Self {
        Self {
            fetcher,
            decompressor,
            config,
            loaded: None,
            buffer: Vec::new(),
            position: 0,
        }
    }

    /// Returns the cursor configuration.
    #[must_use]
    pub const fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Returns the hour whose buffer is loaded, if any.
    #[must_use]
    pub fn loaded_hour(&self) -> Option<DateTime<Utc>> {
        self.loaded.as_ref().map(|loaded| loaded.hour)
    }

    /// Returns the number of records not yet consumed from the loaded hour.
    #[must_use]
    pub fn remaining(&self) -> usize {
        tick_count(self.buffer.len().saturating_sub(self.position))
    }

    /// Consumes the cursor, returning its fetcher and decompressor.
    pub fn into_parts(self) -> (F, D) {
        (self.fetcher, self.decompressor)
    }

    /// Returns the next tick of `hour` for `symbol`.
    ///
    /// The hour file is fetched and decompressed when the loaded buffer is
    /// exhausted or belongs to a different symbol or hour. `hour` is
    /// truncated to the start of its hour.
    ///
    /// Returns `Ok(None)` when the hour file holds no ticks; the caller
    /// should move on to the next hour. After the tick flagged
    /// `is_last_of_hour`, another call with the same hour loads it again.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Fetch`] naming the resource path once every
    /// attempt at fetching and decompressing the hour has failed.
    pub async fn next_tick(
        &mut self,
        hour: DateTime<Utc>,
        symbol: &str,
    ) -> Result<Option<HourTick>> {
        let hour = hour.duration_trunc(TimeDelta::hours(1)).unwrap_or(hour);

        if self.position >= self.buffer.len() || !self.is_loaded(symbol, hour) {
            self.load(symbol, hour).await?;
        }
        if self.buffer.is_empty() {
            return Ok(None);
        }

        let (tick, next) = decode_tick(&self.buffer, self.position, hour)
            .map_err(|e| FeedError::Decode(e.to_string()))?;
        self.position = next;

        Ok(Some(HourTick {
            tick,
            is_first_of_hour: next == TICK_SIZE,
            is_last_of_hour: next >= self.buffer.len(),
        }))
    }

    /// Drops the loaded hour so the next call to [`Self::next_tick`] refetches.
    pub fn reset(&mut self) {
        self.position = 0;
        self.buffer = Vec::new();
        self.loaded = None;
    }

    fn is_loaded(&self, symbol: &str, hour: DateTime<Utc>) -> bool {
        self.loaded.as_ref().is_some_and(|loaded| {
            loaded.hour == hour && loaded.symbol == symbol
        })
    }

    /// Loads the hour file, retrying the whole fetch and decompression.
    async fn load(&mut self, symbol: &str, hour: DateTime<Utc>) -> Result<()> {
        self.reset();

        let path = hour_path(&self.config.root, symbol, hour);
        let max_attempts = self.config.max_attempts.max(1);
        let mut reason = String::new();

        for attempt in 1..=max_attempts {
            match self.fetch_hour(&path).await {
                Ok(mut buffer) => {
                    let usable = tick_count(buffer.len()) * TICK_SIZE;
                    if usable != buffer.len() {
                        warn!(
                            path = %path,
                            len = buffer.len(),
                            usable,
                            "hour buffer not record aligned, truncating"
                        );
                        buffer.truncate(usable);
                    }
                    debug!(path = %path, ticks = tick_count(usable), attempt, "loaded hour");

                    self.buffer = buffer;
                    self.loaded = Some(LoadedHour {
                        symbol: symbol.to_string(),
                        hour,
                    });
                    return Ok(());
                }
                Err(e) => {
                    warn!(path = %path, attempt, max_attempts, error = %e, "hour load failed");
                    reason = e.to_string();
                    if attempt < max_attempts && !self.config.retry_delay.is_zero() {
                        tokio::time::sleep(self.config.retry_delay).await;
                    }
                }
            }
        }

        Err(FeedError::Fetch {
            path,
            attempts: max_attempts,
            reason,
        })
    }

    async fn fetch_hour(&self, path: &str) -> std::result::Result<Vec<u8>, LoadError> {
        let compressed = self.fetcher.fetch(path).await?;
        Ok(self.decompressor.decompress(&compressed)?)
    }
}
