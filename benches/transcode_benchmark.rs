use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use romsplit_rs::romsplit::{SizeSet, TranscodeMode, transcode_bytes};

fn generate_rom(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

fn bench_transcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode");
    for &size in SizeSet::Standard.accepted() {
        let data = generate_rom(size);
        let label = format!("{}KiB", size / 1024);
        group.bench_with_input(BenchmarkId::new("merge", &label), &data, |b, data| {
            b.iter(|| transcode_bytes(black_box(data), TranscodeMode::Merge, false))
        });
        group.bench_with_input(BenchmarkId::new("split", &label), &data, |b, data| {
            b.iter(|| transcode_bytes(black_box(data), TranscodeMode::Split, false))
        });
        group.bench_with_input(BenchmarkId::new("split_widen", &label), &data, |b, data| {
            b.iter(|| transcode_bytes(black_box(data), TranscodeMode::Split, true))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transcode);
criterion_main!(benches);
