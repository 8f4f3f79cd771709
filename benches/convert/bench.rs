use criterion::{black_box, criterion_group, criterion_main, Criterion};

use r64_bigint::BigInt;
use r64_real::to_real64;

// one literal per conversion tier
const FAST_PATH: &str = "1017.89";
const SCALED_PATH: &str = "2.2250738585072011e-308";
const EXACT_PATH: &str = "2.470328229206232720882843964341106861825299013071623822127928412503377536351043e-324";

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse literal", |b| {
        b.iter(|| r64_literal::parse(black_box(SCALED_PATH.as_bytes())).unwrap());
    });

    c.bench_function("to_real64 fast path", |b| {
        b.iter(|| to_real64(black_box(FAST_PATH.as_bytes())).unwrap());
    });

    c.bench_function("to_real64 scaled path", |b| {
        b.iter(|| to_real64(black_box(SCALED_PATH.as_bytes())).unwrap());
    });

    c.bench_function("to_real64 exact path", |b| {
        b.iter(|| to_real64(black_box(EXACT_PATH.as_bytes())).unwrap());
    });

    let dividend = BigInt::power_of_ten(300);
    let divisor = BigInt::power_of_five(77);
    c.bench_function("bigint div_rem 300/77", |b| {
        b.iter(|| black_box(&dividend).div_rem(black_box(&divisor)).unwrap());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
