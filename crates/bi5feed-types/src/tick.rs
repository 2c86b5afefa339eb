//! Tick data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single decoded tick from an hour file.
///
/// Prices are kept exactly as stored in the archive. Converting them to
/// real prices requires the symbol's point value, which is the caller's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// Timestamp of the tick (UTC), hour start plus the stored offset.
    pub timestamp: DateTime<Utc>,
    /// Raw ask (offer) price.
    pub ask: u32,
    /// Raw bid price.
    pub bid: u32,
    /// Volume available at the ask price.
    pub ask_volume: f32,
    /// Volume available at the bid price.
    pub bid_volume: f32,
}

impl TickRecord {
    /// Creates a new tick record.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        ask: u32,
        bid: u32,
        ask_volume: f32,
        bid_volume: f32,
    ) -> Self {
        Self {
            timestamp,
            ask,
            bid,
            ask_volume,
            bid_volume,
        }
    }
}

/// A tick together with its position inside the hour buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourTick {
    /// The decoded tick.
    pub tick: TickRecord,
    /// True for the first record consumed from a freshly loaded hour.
    pub is_first_of_hour: bool,
    /// True when no records remain in the hour after this one.
    pub is_last_of_hour: bool,
}
