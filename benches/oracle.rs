use std::hint::black_box;

use cavp_oracle::{
    apply_cipher, resolve_aead, resolve_cipher, seal_aead, AeadDescriptorRef,
    CipherDescriptorRef, Direction,
};
use criterion::{criterion_group, BatchSize, Bencher, BenchmarkId, Criterion};
use rand::{rng, Rng};

fn payload_sizes() -> &'static [usize] {
    let ci = std::env::var("CI").ok();
    if ci.is_some_and(|ci| ci == "true") {
        return &[4096];
    }

    &[512, 4096, 65536]
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng().fill(bytes.as_mut_slice());
    bytes
}

struct CipherBenches {
    descriptor: CipherDescriptorRef,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl From<CipherDescriptorRef> for CipherBenches {
    fn from(descriptor: CipherDescriptorRef) -> Self {
        Self {
            descriptor,
            key: random_bytes(descriptor.key_len()),
            iv: random_bytes(descriptor.iv_len),
        }
    }
}

impl CipherBenches {
    fn run_benches(&self, c: &mut Criterion) {
        for direction in [Direction::Encrypt, Direction::Decrypt] {
            bench_over_payload_sizes(
                c,
                &format!("{direction:?} with {}", self.descriptor.identifier),
                |b, &payload_size| {
                    b.iter_batched(
                        || random_bytes(payload_size),
                        |input| {
                            let output = apply_cipher(
                                self.descriptor,
                                direction,
                                &self.key,
                                &self.iv,
                                &input,
                            )
                            .unwrap();
                            black_box(output);
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_seal(c: &mut Criterion, descriptor: AeadDescriptorRef) {
    let key = random_bytes(descriptor.key_len());
    bench_over_payload_sizes(
        c,
        &format!("seal with {}", descriptor.identifier),
        |b, &payload_size| {
            b.iter_batched(
                || random_bytes(payload_size),
                |plaintext| {
                    let sealed = seal_aead(descriptor, &key, &plaintext, &[], 0).unwrap();
                    black_box(sealed);
                },
                BatchSize::SmallInput,
            );
        },
    );
}

fn bench_over_payload_sizes<F>(c: &mut Criterion, name: &str, mut bench: F)
where
    F: FnMut(&mut Bencher, &usize),
{
    let mut group = c.benchmark_group(name);
    for payload_size in payload_sizes() {
        group.throughput(criterion::Throughput::Bytes(*payload_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(payload_size),
            payload_size,
            &mut bench,
        );
    }
}

fn cipher_benches(c: &mut Criterion) {
    for identifier in ["aes-128-ecb", "aes-256-cbc", "aes-128-ctr", "des-ede3-cbc"] {
        let ctx = CipherBenches::from(resolve_cipher(identifier).unwrap());
        ctx.run_benches(c);
    }
}

fn aead_benches(c: &mut Criterion) {
    for identifier in ["aes-128-gcm", "aes-256-gcm"] {
        bench_seal(c, resolve_aead(identifier).unwrap());
    }
}

criterion_group!(benches, cipher_benches, aead_benches);
