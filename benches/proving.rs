//! Sign and Prove benchmarks across file sizes, block sizes, and
//! challenge counts.

use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use por_crypto::keygen::setup;
use por_crypto::{challenger, prover, signer};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::Write;

fn generate_temp_file(size: usize, seed: u64) -> std::path::PathBuf {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; size];
    rng.fill_bytes(&mut data);

    let mut path = std::env::temp_dir();
    path.push(format!("por-bench-{}-{}.bin", std::process::id(), seed));
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(&data).unwrap();
    path
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign");

    for (size_kb, label) in [(10, "10KB"), (1024, "1MB")] {
        let path = generate_temp_file(size_kb * 1024, 42);
        let mut rng = StdRng::seed_from_u64(por_crypto::config::TEST_RANDOM_SEED);
        let s = 64;
        let km = setup(s, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(label), &path, |bencher, path| {
            bencher.iter(|| black_box(signer::sign(path, s, &km.sk, &km.name, &km.u).unwrap()));
        });
    }

    group.finish();
}

fn bench_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("prove");
    group.sample_size(20);

    let path = generate_temp_file(100 * 1024, 7);
    let mut rng = StdRng::seed_from_u64(por_crypto::config::TEST_RANDOM_SEED);
    let s = 64;
    let km = setup(s, &mut rng).unwrap();
    let tags = signer::sign(&path, s, &km.sk, &km.name, &km.u).unwrap();
    let n = tags.len() as u64;

    for num_challenges in [2, 10, 50] {
        let q = challenger::challenge(n, num_challenges, &mut rng).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_challenges),
            &q,
            |bencher, q| {
                bencher.iter(|| black_box(prover::prove(q, &tags, &path, s).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sign, bench_prove);
