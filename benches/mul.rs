use criterion::{criterion_group, criterion_main, Criterion};
use decint::BigInt;
use std::hint::black_box;

/// Build an operand of roughly `39 * 2^squarings` decimal digits.
fn wide_operand(squarings: u32) -> BigInt {
    let mut x = BigInt::from(u128::MAX);
    for _ in 0..squarings {
        x = &x * &x;
    }
    x
}

fn bench_mul(c: &mut Criterion) {
    for squarings in [0, 2, 4] {
        let x = wide_operand(squarings);
        let name = format!("karatsuba_mul/{}_digits", x.digit_count());
        c.bench_function(&name, |bencher| {
            bencher.iter(|| black_box(&x) * black_box(&x));
        });
    }
}

fn bench_add(c: &mut Criterion) {
    let x = wide_operand(4);
    let name = format!("add/{}_digits", x.digit_count());
    c.bench_function(&name, |bencher| {
        bencher.iter(|| black_box(&x) + black_box(&x));
    });
}

criterion_group!(benches, bench_mul, bench_add);
criterion_main!(benches);
