//! Benchmarks for the rotor cipher machine.
//!
//! Measures machine construction, encrypt/decrypt throughput, and
//! encrypt throughput scaling from 3 to 4 rotors.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{catalog, Enigma, Plugboard, Setting};

/// Plaintext used consistently across all benchmarks.
const BENCH_TEXT: &str =
    "This is a string for testing the encryption and decryption capability of the enigma code";

/// Plug pairs used consistently across all benchmarks.
const BENCH_PAIRS: [(char, char); 3] = [('A', 'G'), ('T', 'F'), ('H', 'K')];

fn bench_machine(positions: &str) -> Enigma {
    let settings: Vec<Setting> = positions.chars().map(Setting::Letter).collect();
    Enigma::new(
        catalog::ukw_b(),
        Plugboard::new(&BENCH_PAIRS).unwrap(),
        [catalog::rotor_i(), catalog::rotor_ii(), catalog::rotor_iii()],
        &settings,
    )
    .unwrap()
}

/// Benchmarks machine construction.
///
/// Measures the full validation path: wiring bijectivity, reflector
/// involution, plugboard pair checks and position normalization.
fn bench_machine_setup(c: &mut Criterion) {
    c.bench_function("machine_setup", |b| {
        b.iter(|| {
            let machine = bench_machine(black_box("DAZ"));
            black_box(machine);
        });
    });
}

/// Benchmarks `encrypt()` throughput on the reference sentence.
///
/// The machine is constructed once and state advances naturally between
/// iterations, reflecting real-world streaming behavior.
fn bench_encrypt(c: &mut Criterion) {
    let mut machine = bench_machine("DAZ");

    let mut group = c.benchmark_group("encrypt_sentence");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));

    group.bench_function("3_rotors", |b| {
        b.iter(|| machine.encrypt(black_box(BENCH_TEXT)).unwrap());
    });

    group.finish();
}

/// Benchmarks `decrypt()` throughput.
///
/// Decrypt resets the rotor positions on every call, so each iteration
/// covers reset plus the full signal path per symbol.
fn bench_decrypt(c: &mut Criterion) {
    let mut machine = bench_machine("DAZ");
    let ciphertext = machine.encrypt(BENCH_TEXT).unwrap();

    let mut group = c.benchmark_group("decrypt_sentence");
    group.throughput(Throughput::Bytes(ciphertext.len() as u64));

    group.bench_function("3_rotors", |b| {
        b.iter(|| machine.decrypt(black_box(&ciphertext)).unwrap());
    });

    group.finish();
}

/// Benchmarks `encrypt()` across rotor stack sizes.
///
/// Compares the 3-rotor machine with the 4-rotor variant to show the
/// per-rotor cost of the signal path.
fn bench_encrypt_rotor_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_rotor_scaling");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));

    for rotor_count in [3usize, 4] {
        let mut machine = if rotor_count == 3 {
            bench_machine("DAZ")
        } else {
            Enigma::with_fourth_rotor(
                catalog::ukw_b(),
                Plugboard::new(&BENCH_PAIRS).unwrap(),
                [catalog::rotor_i(), catalog::rotor_ii(), catalog::rotor_iii()],
                catalog::rotor_iv(),
                &"DAZJ".chars().map(Setting::Letter).collect::<Vec<_>>(),
            )
            .unwrap()
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(rotor_count),
            &rotor_count,
            |b, _| {
                b.iter(|| machine.encrypt(black_box(BENCH_TEXT)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_machine_setup,
    bench_encrypt,
    bench_decrypt,
    bench_encrypt_rotor_scaling,
);
criterion_main!(benches);
