//! Block transform benchmarks.

use basejpeg::consts::DCTSIZE2;
use basejpeg::dct::forward_dct_8x8;
use basejpeg::quant::{quantize_block, QuantTables};
use basejpeg::types::{Component, FloatBlock};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// Generate pseudo-random level-shifted samples
fn generate_test_block() -> FloatBlock {
    let mut block = [0.0f32; DCTSIZE2];
    for (i, v) in block.iter_mut().enumerate() {
        *v = ((i * 73 + 17) % 256) as f32 - 128.0;
    }
    block
}

fn bench_forward_dct(c: &mut Criterion) {
    let samples = generate_test_block();

    let mut group = c.benchmark_group("dct");
    group.throughput(Throughput::Elements(1)); // 1 block

    group.bench_function("forward_8x8", |b| {
        b.iter(|| {
            let mut block = samples;
            forward_dct_8x8(black_box(&mut block));
            block
        })
    });

    group.finish();
}

fn bench_dct_quantize(c: &mut Criterion) {
    let samples = generate_test_block();
    let tables = QuantTables::build(75);

    let mut group = c.benchmark_group("dct");
    group.throughput(Throughput::Elements(1));

    group.bench_function("forward_and_quantize", |b| {
        b.iter(|| {
            let mut block = samples;
            forward_dct_8x8(&mut block);
            quantize_block(black_box(&block), tables.table(Component::Y))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_forward_dct, bench_dct_quantize);
criterion_main!(benches);
