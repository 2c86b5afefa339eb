//! Core types for the bi5feed hourly tick archive reader.
//!
//! This crate provides the fundamental data structures used throughout bi5feed:
//!
//! - [`TickRecord`] - A decoded tick with timestamp, raw prices and volumes
//! - [`HourTick`] - A tick paired with its first/last-of-hour flags
//! - [`DateRange`] - Date range for data retrieval and availability search
//! - [`FeedError`] - Errors surfaced by the cursor and locator

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod tick;

pub use date_range::{DateRange, HourIterator};
pub use error::{DateRangeError, FeedError, Result};
pub use tick::{HourTick, TickRecord};
