extern crate criterion;

use self::criterion::*;
use huffcode::count_bytes;
use huffcode::HuffmanCode;

// input is the number of repeats per symbol
fn gen_fibo_distribution(fibo_counts: &[u64]) -> Vec<u8> {
    use std::io::Read;
    let mut all_bytes = Vec::new();

    for (num, repeat) in fibo_counts.iter().enumerate() {
        std::io::repeat(num as u8)
            .take(*repeat)
            .read_to_end(&mut all_bytes)
            .unwrap();
    }
    all_bytes
}

fn get_test_inputs() -> Vec<Vec<u8>> {
    vec![
        gen_fibo_distribution(&[1, 1, 2, 3, 5, 8, 13, 21]),
        gen_fibo_distribution(&[10, 10, 20, 30, 50, 80, 130, 210, 340, 550, 890, 1440]),
        (0..=u8::MAX).cycle().take(64 * 1024).collect(),
    ]
}

fn build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_code");
    for input in get_test_inputs() {
        let input_bytes = input.len() as u64;
        group.throughput(Throughput::Bytes(input_bytes));
        group.bench_with_input(
            BenchmarkId::new("from_weights", input_bytes),
            &input,
            |b, i| {
                let weights = count_bytes(i);
                b.iter(|| HuffmanCode::from_weights(&weights));
            },
        );
    }
    group.finish();
}

fn round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");
    for input in get_test_inputs() {
        let input_bytes = input.len() as u64;
        group.throughput(Throughput::Bytes(input_bytes));
        let huffman = HuffmanCode::from_weights(&count_bytes(&input));
        group.bench_with_input(BenchmarkId::new("encode", input_bytes), &input, |b, i| {
            b.iter(|| huffman.encode(i).unwrap());
        });
        let bits = huffman.encode(&input).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", input_bytes), &bits, |b, i| {
            b.iter(|| huffman.decode(i).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, build, round_trip);
criterion_main!(benches);
