//! Archive transport and bi5 decompression for bi5feed.
//!
//! This crate provides the external capabilities the cursor and locator
//! build on:
//!
//! - [`path::hour_path`] - Constructs archive resource paths
//! - [`FileFetcher`] - Fetch or check a resource by path
//! - [`HttpFetcher`] - HTTP fetcher with connection pooling and retries
//! - [`StreamDecompressor`] / [`LzmaDecompressor`] - bi5 decompression

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod decompress;
mod fetcher;
pub mod path;
#[cfg(test)]
mod testing;

pub use client::{ClientConfig, HttpFetcher};
pub use decompress::{Bi5Header, DecompressError, LzmaDecompressor, StreamDecompressor};
pub use fetcher::{FetchError, FileFetcher};
