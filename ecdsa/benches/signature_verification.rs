use criterion::{criterion_group, BatchSize, Criterion};
use rand::{thread_rng, Rng};
use simple_ecdsa::{CurveId, SignerIdentity};
use std::hint::black_box;

fn benchmark_signature_verify(c: &mut Criterion) {
    let mut msg = [0u8; 32];
    thread_rng().fill(&mut msg);
    c.bench_function(
        &format!("{}/msg_len={}", module_path!(), msg.len()),
        |b| {
            b.iter_batched(
                || {
                    let identity = SignerIdentity::new(&mut thread_rng(), CurveId::P256);
                    let signature = identity.sign(&msg).unwrap();
                    (identity.public_key(), signature)
                },
                |(public_key, signature)| {
                    black_box(SignerIdentity::verify(
                        &public_key,
                        CurveId::P256,
                        &msg,
                        &signature,
                    ));
                },
                BatchSize::SmallInput,
            );
        },
    );
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_signature_verify
}
