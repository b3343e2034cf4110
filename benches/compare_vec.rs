#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use growvec::{Global, GrowExact, Vector};

/// A 64-byte plain-data value.
#[derive(Debug, Default, Clone, Copy)]
#[repr(C)]
struct HeavyPod {
    values: [u64; 8],
}

impl HeavyPod {
    fn new(seed: u64) -> Self {
        Self {
            values: [seed; 8],
        }
    }
}

fn bench_push<T: Copy>(c: &mut Criterion, name: &str, values: &[T]) {
    let count = values.len();

    c.bench_function(&format!("growvec push {count} {name}"), |b| {
        b.iter(|| {
            let mut buf = Vector::<T>::new();
            for value in values {
                buf.push(black_box(*value));
            }
            buf
        });
    });

    if count <= 1000 {
        c.bench_function(&format!("growvec exact push {count} {name}"), |b| {
            b.iter(|| {
                let mut buf = Vector::<T, Global, GrowExact>::new();
                for value in values {
                    buf.push(black_box(*value));
                }
                buf
            });
        });
    }

    c.bench_function(
        &format!("growvec with_capacity({count}) push {count} {name}"),
        |b| {
            b.iter(|| {
                let mut buf = Vector::<T>::with_capacity(count);
                for value in values {
                    buf.push(black_box(*value));
                }
                buf
            });
        },
    );

    c.bench_function(&format!("stdvec push {count} {name}"), |b| {
        b.iter(|| {
            let mut buf = Vec::<T>::new();
            for value in values {
                buf.push(black_box(*value));
            }
            buf
        });
    });
}

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 10_000;

    let mut rng = StdRng::seed_from_u64(0x5eed);

    for count in [SMALL_COUNT, LARGE_COUNT] {
        let ints: Vec<i32> = (0..count).map(|_| rng.gen()).collect();
        let longs: Vec<i64> = (0..count).map(|_| rng.gen()).collect();
        let floats: Vec<f32> = (0..count).map(|_| rng.gen()).collect();
        let doubles: Vec<f64> = (0..count).map(|_| rng.gen()).collect();
        let pods: Vec<HeavyPod> = (0..count).map(|_| HeavyPod::new(rng.gen())).collect();

        bench_push(c, "i32", &ints);
        bench_push(c, "i64", &longs);
        bench_push(c, "f32", &floats);
        bench_push(c, "f64", &doubles);
        bench_push(c, "64-byte pods", &pods);

        c.bench_function(&format!("growvec extend {count} values"), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                buf.extend(black_box(0..count));
                buf
            });
        });

        c.bench_function(&format!("stdvec extend {count} values"), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                buf.extend(black_box(0..count));
                buf
            });
        });

        c.bench_function(&format!("growvec extend from slice {count} values"), |b| {
            b.iter(|| {
                let mut buf = Vector::<i64>::new();
                buf.extend_from_slice(black_box(&longs));
                buf
            });
        });

        c.bench_function(
            &format!("growvec extend from copy slice {count} values"),
            |b| {
                b.iter(|| {
                    let mut buf = Vector::<i64>::new();
                    buf.extend_from_copy_slice(black_box(&longs));
                    buf
                });
            },
        );

        c.bench_function(&format!("stdvec extend from slice {count} values"), |b| {
            b.iter(|| {
                let mut buf = Vec::<i64>::new();
                buf.extend_from_slice(black_box(&longs));
                buf
            });
        });

        if count == SMALL_COUNT {
            c.bench_function(&format!("growvec insert front {count} values"), |b| {
                b.iter(|| {
                    let mut buf = Vector::<i32>::new();
                    for value in &ints {
                        buf.insert(0, black_box(*value));
                    }
                    buf
                });
            });
        }
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
