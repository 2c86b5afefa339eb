//! Read hourly bi5 tick archives as a stream of ticks.
//!
//! This is a facade crate that re-exports functionality from the bi5feed
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use bi5feed_lib::prelude::*;
//! use chrono::{NaiveDate, Utc};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = HttpFetcher::with_defaults()?;
//!
//!     let locator = AvailabilityLocator::new(fetcher.clone());
//!     let first = locator.find_first("EURUSD", Utc::now().date_naive()).await?;
//!     println!("EURUSD data starts on {first}");
//!
//!     let mut cursor = HourCursor::new(fetcher);
//!     let day = DateRange::single_day(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
//!     for hour in day.hours() {
//!         while let Some(quote) = cursor.next_tick(hour, "EURUSD").await? {
//!             println!("{} {} {}", quote.tick.timestamp, quote.tick.ask, quote.tick.bid);
//!             if quote.is_last_of_hour {
//!                 break;
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use bi5feed_types::*;

// Re-export transport and decompression
pub use bi5feed_fetch::{
    Bi5Header, ClientConfig, DecompressError, FetchError, FileFetcher, HttpFetcher,
    LzmaDecompressor, StreamDecompressor, path,
};

// Re-export decoding, cursor and locator
pub use bi5feed_stream::{
    AvailabilityLocator, CursorConfig, DecodeError, HourCursor, LocatorConfig, TICK_SIZE,
    decode_tick, decode_ticks, tick_count,
};

/// Prelude module for convenient imports.
///
/// ```
/// use bi5feed_lib::prelude::*;
/// ```
pub mod prelude {
    pub use bi5feed_types::{DateRange, FeedError, HourTick, Result, TickRecord};

    pub use bi5feed_fetch::{ClientConfig, FileFetcher, HttpFetcher, LzmaDecompressor};

    pub use bi5feed_stream::{AvailabilityLocator, CursorConfig, HourCursor, LocatorConfig};
}
