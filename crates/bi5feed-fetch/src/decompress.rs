//! LZMA decompression for bi5 files.

use byteorder::{ByteOrder, LittleEndian};
use lzma_rs::lzma_decompress;
use std::io::{BufReader, Cursor};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during decompression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressError {
    /// LZMA decompression failed.
    #[error("LZMA decompression failed: {0}")]
    Lzma(String),
}

/// Turns a compressed hour file into raw record bytes.
pub trait StreamDecompressor: Send + Sync {
    /// Decompresses `compressed` into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is malformed.
    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>, DecompressError>;
}

/// Header of an LZMA-alone stream as used by bi5 files.
///
/// Layout: 5 bytes of decoder properties (lc/lp/pb byte and a little-endian
/// dictionary size) followed by the unpacked size as a little-endian `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bi5Header {
    /// Raw decoder properties.
    pub properties: [u8; 5],
    /// Declared unpacked size, `None` when the stream relies on an end marker.
    pub unpacked_size: Option<u64>,
}

impl Bi5Header {
    /// Number of properties bytes at the start of the stream.
    pub const PROPERTIES_LEN: usize = 5;

    /// Total header size in bytes.
    pub const SIZE: usize = 13;

    /// Parses the header at the start of `data`.
    ///
    /// Returns `None` if fewer than [`Self::SIZE`] bytes are available.
    #[must_use]
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < Self::SIZE {
            return None;
        }
        let mut properties = [0u8; Self::PROPERTIES_LEN];
        properties.copy_from_slice(&data[..Self::PROPERTIES_LEN]);
        let size = LittleEndian::read_u64(&data[Self::PROPERTIES_LEN..Self::SIZE]);
        Some(Self {
            properties,
            unpacked_size: (size != u64::MAX).then_some(size),
        })
    }

    /// Returns the dictionary size encoded in the properties.
    #[must_use]
    pub fn dict_size(&self) -> u32 {
        LittleEndian::read_u32(&self.properties[1..])
    }
}

/// [`StreamDecompressor`] for LZMA-compressed bi5 data.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzmaDecompressor;

/// Upper bound on the buffer preallocated from a declared unpacked size.
const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

impl StreamDecompressor for LzmaDecompressor {
    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>, DecompressError> {
        // Hours without ticks are served as empty or truncated files.
        if compressed.len() < Bi5Header::PROPERTIES_LEN {
            debug!(len = compressed.len(), "bi5 payload shorter than header, no ticks");
            return Ok(Vec::new());
        }

        let header = Bi5Header::parse(compressed);
        if let Some(header) = &header {
            debug!(
                dict_size = header.dict_size(),
                unpacked_size = header.unpacked_size,
                "decompressing bi5 payload"
            );
        }
        let capacity = header
            .and_then(|header| header.unpacked_size)
            .map_or(0, |size| size.min(MAX_PREALLOC) as usize);

        let mut decompressed = Vec::with_capacity(capacity);
        let mut reader = BufReader::new(Cursor::new(compressed));

        lzma_decompress(&mut reader, &mut decompressed)
            .map_err(|e| DecompressError::Lzma(e.to_string()))?;

        Ok(decompressed)
    }
}
