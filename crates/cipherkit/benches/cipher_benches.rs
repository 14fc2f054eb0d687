use std::hint::black_box;

use cipherkit::{caesar_decrypt, caesar_encrypt, vigenere_decrypt, vigenere_encrypt, CaesarKey, VigenereKey};
use criterion::{criterion_group, criterion_main, Criterion};

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog, 7 times in a row!";

fn bench_caesar_encrypt(c: &mut Criterion) {
    c.bench_function("caesar_encrypt", |b| {
        b.iter(|| caesar_encrypt(black_box(SAMPLE), black_box(13)))
    });
}

fn bench_caesar_decrypt(c: &mut Criterion) {
    let ciphertext = caesar_encrypt(SAMPLE, 13).unwrap();

    c.bench_function("caesar_decrypt", |b| {
        b.iter(|| caesar_decrypt(black_box(&ciphertext), black_box(13)))
    });
}

fn bench_vigenere_encrypt(c: &mut Criterion) {
    c.bench_function("vigenere_encrypt", |b| {
        b.iter(|| vigenere_encrypt(black_box(SAMPLE), black_box("FORTIFICATION")))
    });
}

fn bench_vigenere_decrypt(c: &mut Criterion) {
    let ciphertext = vigenere_encrypt(SAMPLE, "FORTIFICATION").unwrap();

    c.bench_function("vigenere_decrypt", |b| {
        b.iter(|| vigenere_decrypt(black_box(&ciphertext), black_box("FORTIFICATION")))
    });
}

fn bench_caesar_key_validation(c: &mut Criterion) {
    c.bench_function("caesar_key_validation", |b| {
        b.iter(|| CaesarKey::new(black_box(13)))
    });
}

fn bench_vigenere_key_validation(c: &mut Criterion) {
    c.bench_function("vigenere_key_validation", |b| {
        b.iter(|| VigenereKey::new(black_box("fortification")))
    });
}

criterion_group!(
    benches,
    bench_caesar_encrypt,
    bench_caesar_decrypt,
    bench_vigenere_encrypt,
    bench_vigenere_decrypt,
    bench_caesar_key_validation,
    bench_vigenere_key_validation
);
criterion_main!(benches);
