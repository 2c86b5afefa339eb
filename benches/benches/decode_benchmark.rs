//! Decoding benchmarks for bi5 hour files.
//!
//! Run with: `cargo bench --package bi5feed-bench`

use bi5feed_bench::{StaticFetcher, compress, synthetic_hour};
use bi5feed_fetch::{LzmaDecompressor, StreamDecompressor};
use bi5feed_stream::{CursorConfig, HourCursor, decode_ticks};
use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Tick counts of a quiet, a typical and a busy EURUSD hour.
const HOUR_SIZES: [usize; 3] = [500, 5_000, 50_000];

fn decode_benchmark(c: &mut Criterion) {
    let hour = Utc.with_ymd_and_hms(2024, 1, 2, 14, 0, 0).unwrap();
    let mut group = c.benchmark_group("decode");

    for ticks in HOUR_SIZES {
        let raw = synthetic_hour(ticks);
        group.throughput(Throughput::Elements(ticks as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ticks), &raw, |b, raw| {
            b.iter(|| decode_ticks(black_box(raw), hour).map(|t| u64::from(t.ask)).sum::<u64>());
        });
    }
    group.finish();
}

fn decompress_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for ticks in HOUR_SIZES {
        let compressed = compress(&synthetic_hour(ticks));
        group.throughput(Throughput::Elements(ticks as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ticks), &compressed, |b, data| {
            b.iter(|| LzmaDecompressor.decompress(black_box(data)).unwrap().len());
        });
    }
    group.finish();
}

fn cursor_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let hour = Utc.with_ymd_and_hms(2024, 1, 2, 14, 0, 0).unwrap();
    let mut group = c.benchmark_group("cursor_drain");

    for ticks in HOUR_SIZES {
        let fetcher = StaticFetcher::new(compress(&synthetic_hour(ticks)));
        group.throughput(Throughput::Elements(ticks as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ticks), &fetcher, |b, fetcher| {
            b.to_async(&runtime).iter(move || async move {
                let config = CursorConfig::default();
                let mut cursor = HourCursor::with_parts(fetcher.clone(), LzmaDecompressor, config);
                let mut count = 0usize;
                while let Some(quote) = cursor.next_tick(hour, "EURUSD").await.unwrap() {
                    count += 1;
                    if quote.is_last_of_hour {
                        break;
                    }
                }
                count
            });
        });
    }
    group.finish();
}

criterion_group!(benches, decode_benchmark, decompress_benchmark, cursor_benchmark);
criterion_main!(benches);
