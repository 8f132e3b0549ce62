//! Filter pipeline benchmarks.
//!
//! Normalization runs once per transcript load (never per keystroke), so
//! these numbers gate perceived load time rather than interactivity.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `normalize` | Canonical pipeline over whole raw texts of growing size |
//! | `normalize_cues` | Per-cue application + seam cleanup over cue lists |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench normalize_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cuesearch::{normalize, normalize_cues};
use std::hint::black_box;

fn raw_cues(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 4 {
            0 => format!("<v Speaker {i}> Well, this is cue number {i}."),
            1 => format!("Speaker {i}: and it just keeps going"),
            2 => format!("cue {i} has&nbsp;entities [applause] and  spaces everywhere. "),
            _ => format!("Then a break.<br>And cue {i} ends here"),
        })
        .collect()
}

fn normalize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for count in [100usize, 1_000, 5_000] {
        let raw = raw_cues(count).join("\n");
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &raw, |b, raw| {
            b.iter(|| normalize(black_box(raw)))
        });
    }
    group.finish();
}

fn normalize_cues_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_cues");
    for count in [100usize, 1_000, 5_000] {
        let cues = raw_cues(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &cues, |b, cues| {
            b.iter(|| normalize_cues(black_box(cues)))
        });
    }
    group.finish();
}

criterion_group!(benches, normalize_bench, normalize_cues_bench);
criterion_main!(benches);
