//! Tick decoding, hour cursor and availability search for bi5feed.
//!
//! - [`decode_tick`] - Decodes one 20-byte record
//! - [`HourCursor`] - Yields ticks one at a time, loading hour files on demand
//! - [`AvailabilityLocator`] - Finds the earliest day with data for a symbol

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cursor;
mod decode;
mod locate;


pub use cursor::{CursorConfig, HourCursor};
pub use decode::{DecodeError, TICK_SIZE, decode_tick, decode_ticks, tick_count};
pub use locate::{AvailabilityLocator, LocatorConfig};
