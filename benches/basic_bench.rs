use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dynamic_bitset::{BitSet, Radix};
use std::hint::black_box;

fn striped(len: usize, step: usize) -> BitSet {
    (0..len).map(|i| i % step == 0).collect()
}

fn bench_bit_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_access");

    group.bench_function("set_bit", |b| {
        let mut set = BitSet::filled(4096, false);
        let mut i = 0;
        b.iter(|| {
            set.set_bit(black_box(true), i % 4096).ok();
            i += 7;
        });
    });

    group.bench_function("get_bit", |b| {
        let set = striped(4096, 3);
        let mut i = 0;
        b.iter(|| {
            black_box(set.get(i % 4096));
            i += 7;
        });
    });

    group.bench_function("push_back", |b| {
        b.iter(|| {
            let mut set = BitSet::new();
            for i in 0..1024 {
                set.push_back(black_box(i % 3 == 0));
            }
            set
        });
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in &[64, 512, 4096] {
        let set = striped(*size, 2);

        group.bench_with_input(BenchmarkId::new("bits", size), &set, |b, set| {
            b.iter(|| {
                for bit in set {
                    black_box(bit);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("ones_rev", size), &set, |b, set| {
            b.iter(|| {
                for index in set.ones().rev() {
                    black_box(index);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("cursor", size), &set, |b, set| {
            b.iter(|| {
                let mut cursor = set.begin();
                while cursor != set.end() {
                    black_box(cursor.get().ok());
                    cursor.offset_up().ok();
                }
            });
        });
    }

    group.finish();
}

fn bench_bulk_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_operations");

    for size in &[64, 512, 4096] {
        let a = striped(*size, 2);
        let b = striped(*size + 17, 3);

        group.bench_with_input(BenchmarkId::new("and", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a & *b));
        });

        group.bench_with_input(BenchmarkId::new("xor", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a ^ *b));
        });

        group.bench_with_input(BenchmarkId::new("left_shift", size), &a, |bench, a| {
            bench.iter(|| black_box(a << 45));
        });

        group.bench_with_input(BenchmarkId::new("rotate_right", size), &a, |bench, a| {
            bench.iter(|| {
                let mut set = a.clone();
                set.rotate_right(black_box(45));
                set
            });
        });
    }

    group.finish();
}

fn bench_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");

    for size in &[64, 512, 4096] {
        let set = striped(*size, 5);

        group.bench_with_input(BenchmarkId::new("insert_front", size), &set, |b, set| {
            b.iter(|| {
                let mut set = set.clone();
                set.insert(true, black_box(0)).ok();
                set
            });
        });

        group.bench_with_input(BenchmarkId::new("erase_middle", size), &set, |b, set| {
            b.iter(|| {
                let mut set = set.clone();
                set.erase(black_box(set.len() / 2)).ok();
                set
            });
        });
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for digits in &[20, 100, 400] {
        let text: String = (0..*digits).map(|i| char::from(b'1' + (i % 9) as u8)).collect();
        let set = BitSet::from_radix_str(&text, Radix::Decimal).unwrap();

        group.bench_with_input(BenchmarkId::new("parse_decimal", digits), &text, |b, text| {
            b.iter(|| BitSet::from_radix_str(black_box(text), Radix::Decimal));
        });

        group.bench_with_input(BenchmarkId::new("to_decimal", digits), &set, |b, set| {
            b.iter(|| black_box(set.to_decimal_string()));
        });

        group.bench_with_input(BenchmarkId::new("to_hex", digits), &set, |b, set| {
            b.iter(|| black_box(set.to_hex_string()));
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    let set = striped(4096, 4);

    group.bench_function("clone", |b| {
        b.iter(|| {
            black_box(set.clone());
        });
    });

    group.bench_function("subset_concat", |b| {
        b.iter(|| {
            let low = set.subset(0, 1000).ok();
            let high = set.subset(1000, 4096).ok();
            black_box(low.zip(high).map(|(l, h)| l.concat(&h)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_bit_access,
    bench_iteration,
    bench_bulk_operations,
    bench_positional,
    bench_codec,
    bench_clone,
);

criterion_main!(benches);
