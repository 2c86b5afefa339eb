//! Binary tick decoding from the bi5 record format.

use bi5feed_types::TickRecord;
use byteorder::{BigEndian, ByteOrder};
use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Size in bytes of one tick record.
pub const TICK_SIZE: usize = 20;

/// Errors that can occur during tick decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer than [`TICK_SIZE`] bytes remain at the requested offset.
    #[error("record at offset {offset} exceeds buffer of {len} bytes")]
    OutOfRange {
        /// Requested byte offset.
        offset: usize,
        /// Buffer length.
        len: usize,
    },
}

/// Decodes the record at `offset` and returns it with the next offset.
///
/// The bi5 format stores ticks as 20 bytes in big-endian order:
/// - `i32`: milliseconds offset from hour start (bytes 0-3)
/// - `u32`: ask price raw (bytes 4-7)
/// - `u32`: bid price raw (bytes 8-11)
/// - `f32`: ask volume, as raw IEEE-754 bits (bytes 12-15)
/// - `f32`: bid volume, as raw IEEE-754 bits (bytes 16-19)
///
/// # Errors
///
/// Returns [`DecodeError::OutOfRange`] if `offset + 20` exceeds the buffer.
pub fn decode_tick(
    data: &[u8],
    offset: usize,
    hour: DateTime<Utc>,
) -> Result<(TickRecord, usize), DecodeError> {
    let end = offset
        .checked_add(TICK_SIZE)
        .filter(|&end| end <= data.len())
        .ok_or(DecodeError::OutOfRange {
            offset,
            len: data.len(),
        })?;

    Ok((decode_record(&data[offset..end], hour), end))
}

/// Decodes every complete record in `data`.
///
/// A trailing partial record is ignored.
pub fn decode_ticks(data: &[u8], hour: DateTime<Utc>) -> impl Iterator<Item = TickRecord> + '_ {
    data.chunks_exact(TICK_SIZE)
        .map(move |record| decode_record(record, hour))
}

/// Returns the number of complete records in a buffer of `data_len` bytes.
#[must_use]
pub const fn tick_count(data_len: usize) -> usize {
    data_len / TICK_SIZE
}

/// Decodes a single tick from a 20-byte chunk.
#[inline]
fn decode_record(record: &[u8], hour: DateTime<Utc>) -> TickRecord {
    let offset_ms = BigEndian::read_i32(&record[0..4]);
    TickRecord::new(
        hour + TimeDelta::milliseconds(i64::from(offset_ms)),
        BigEndian::read_u32(&record[4..8]),
        BigEndian::read_u32(&record[8..12]),
        f32::from_bits(BigEndian::read_u32(&record[12..16])),
        f32::from_bits(BigEndian::read_u32(&record[16..20])),
    )
}
