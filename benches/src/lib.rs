//! Benchmark fixtures for bi5feed.

use async_trait::async_trait;
use bi5feed_fetch::{FetchError, FileFetcher};
use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;
use std::io::Cursor;

/// Size in bytes of one encoded record.
const RECORD_SIZE: usize = 20;

/// Builds a synthetic hour buffer of `ticks` records spread over the hour.
///
/// Prices drift around 1.10000 at a 5-digit point value so the buffer
/// compresses about as well as a real EURUSD hour.
pub fn synthetic_hour(ticks: usize) -> Vec<u8> {
    let mut data = vec![0u8; ticks * RECORD_SIZE];
    let step = if ticks == 0 { 0 } else { 3_600_000 / ticks };

    for (i, record) in data.chunks_exact_mut(RECORD_SIZE).enumerate() {
        let drift = (i % 37) as u32;
        BigEndian::write_i32(&mut record[0..4], (i * step) as i32);
        BigEndian::write_u32(&mut record[4..8], 110_010 + drift);
        BigEndian::write_u32(&mut record[8..12], 110_000 + drift);
        BigEndian::write_u32(&mut record[12..16], (1.0f32 + (i % 5) as f32).to_bits());
        BigEndian::write_u32(&mut record[16..20], (0.75f32 * (i % 3) as f32).to_bits());
    }
    data
}

/// LZMA-compresses `raw` the way archive hour files are stored.
///
/// # Panics
///
/// Panics if the in-memory compressor fails.
pub fn compress(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    lzma_rs::lzma_compress(&mut Cursor::new(raw), &mut out).expect("in-memory compression");
    out
}

/// Serves the same file for every path.
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    body: Bytes,
}

impl StaticFetcher {
    /// Creates a fetcher answering every request with `body`.
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body: Bytes::from(body),
        }
    }
}

#[async_trait]
impl FileFetcher for StaticFetcher {
    async fn fetch(&self, _path: &str) -> Result<Bytes, FetchError> {
        Ok(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_hour_len() {
        assert_eq!(synthetic_hour(0).len(), 0);
        assert_eq!(synthetic_hour(1_000).len(), 20_000);
    }

    #[test]
    fn test_synthetic_hour_offsets_within_hour() {
        let data = synthetic_hour(5_000);
        let last = BigEndian::read_i32(&data[data.len() - RECORD_SIZE..]);
        assert!(last < 3_600_000);
    }
}
