use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ori_finder::{kmer, search, skew};

fn make_genome(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn bench_frequency_map(c: &mut Criterion) {
    let genome = make_genome(100_000);

    c.bench_function("frequency_map_100k_k9", |b| {
        b.iter(|| {
            black_box(kmer::frequency_map(black_box(&genome), 9).unwrap());
        })
    });
}

fn bench_approximate_frequency_map(c: &mut Criterion) {
    let window = make_genome(500);

    c.bench_function("approximate_frequency_map_500bp_k9_d1", |b| {
        b.iter(|| {
            black_box(kmer::approximate_frequency_map(black_box(&window), 9, 1, true).unwrap());
        })
    });
}

fn bench_approximate_pattern_matching(c: &mut Criterion) {
    let genome = make_genome(100_000);
    let pattern = genome[5_000..5_009].to_vec();

    c.bench_function("approximate_pattern_matching_100k_d2", |b| {
        b.iter(|| {
            black_box(search::approximate_pattern_matching(black_box(&genome), black_box(&pattern), 2));
        })
    });
}

fn bench_skew(c: &mut Criterion) {
    let genome = make_genome(1_000_000);

    c.bench_function("minimum_skew_1m", |b| {
        b.iter(|| {
            black_box(skew::minimum_skew(black_box(&genome)).unwrap());
        })
    });
}

fn bench_symbol_array(c: &mut Criterion) {
    let genome = make_genome(1_000_000);

    c.bench_function("symbol_array_1m", |b| {
        b.iter(|| {
            black_box(skew::symbol_array(black_box(&genome), b'C'));
        })
    });
}

criterion_group!(
    benches,
    bench_frequency_map,
    bench_approximate_frequency_map,
    bench_approximate_pattern_matching,
    bench_skew,
    bench_symbol_array
);
criterion_main!(benches);
