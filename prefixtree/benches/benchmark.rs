extern crate criterion;

use self::criterion::*;
use prefixtree::{build_tree, CodeBook};
use std::collections::BTreeMap;

/// deterministic pseudo-random weights, one per symbol
fn gen_weights(num_symbols: u64) -> BTreeMap<u64, u64> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..num_symbols)
        .map(|symbol| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (symbol, state % 10_000)
        })
        .collect()
}

fn tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");
    for num_symbols in &[16_u64, 256, 4096] {
        let weights = gen_weights(*num_symbols);
        group.throughput(Throughput::Elements(*num_symbols));
        group.bench_with_input(
            BenchmarkId::new("build_tree", num_symbols),
            &weights,
            |b, i| {
                b.iter(|| build_tree(i).unwrap());
            },
        );
        let tree = build_tree(&weights).unwrap();
        group.bench_with_input(
            BenchmarkId::new("code_book_from_tree", num_symbols),
            &tree,
            |b, i| {
                b.iter(|| CodeBook::from_tree(i));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, tree_build);
criterion_main!(benches);
