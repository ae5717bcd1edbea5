use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffcode::Huffman;

const SAMPLE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. ";

fn criterion_benchmark(c: &mut Criterion) {
    let text = SAMPLE.repeat(100);

    c.bench_function("encode", |b| {
        let huffman = Huffman::from_text(&text).unwrap();
        b.iter_with_large_drop(|| huffman.encode(black_box(&text)).unwrap());
    });

    c.bench_function("decode", |b| {
        let huffman = Huffman::from_text(&text).unwrap();
        let bits = huffman.encode(&text).unwrap();
        b.iter_with_large_drop(|| huffman.decode(black_box(&bits)).unwrap());
    });

    c.bench_function("build_tree", |b| {
        let freq = huffcode::count_frequencies(&text);
        b.iter(|| huffcode::build_tree(black_box(&freq)).unwrap());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
