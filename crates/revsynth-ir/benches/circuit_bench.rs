//! Benchmarks for revsynth-ir circuit operations
//!
//! Run with: cargo bench -p revsynth-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use revsynth_ir::{Circuit, QubitId};

/// Benchmark circuit creation.
fn bench_circuit_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_creation");

    for num_qubits in &[2, 5, 10, 20, 50] {
        group.bench_with_input(
            BenchmarkId::new("with_size", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| Circuit::with_size(black_box("bench"), black_box(n)));
            },
        );
    }

    group.finish();
}

/// Benchmark adding gates to a circuit.
fn bench_gate_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_addition");

    group.bench_function("x_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10);
        b.iter(|| {
            circuit.x(black_box(QubitId(0))).unwrap();
        });
    });

    group.bench_function("cx_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10);
        b.iter(|| {
            circuit
                .cx(black_box(QubitId(0)), black_box(QubitId(1)))
                .unwrap();
        });
    });

    group.bench_function("mcx_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10);
        b.iter(|| {
            circuit
                .mcx([black_box(QubitId(0)), black_box(QubitId(1))], QubitId(2))
                .unwrap();
        });
    });

    group.finish();
}

/// Benchmark a CNOT-chain circuit resembling a Bennett-strategy
/// compute/uncompute ladder.
fn bench_cnot_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot_chain");

    for num_qubits in &[3, 5, 10, 20, 50, 100] {
        group.bench_with_input(
            BenchmarkId::new("create", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut circuit = Circuit::with_size("chain", n);
                    for i in 0..n - 1 {
                        circuit.cx(QubitId(i), QubitId(i + 1)).unwrap();
                    }
                    black_box(circuit)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark circuit depth calculation.
fn bench_circuit_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_depth");

    for num_qubits in &[5, 10, 20, 50] {
        let mut circuit = Circuit::with_size("bench", *num_qubits);

        for _layer in 0..5 {
            for i in 0..*num_qubits {
                circuit.x(QubitId(i)).unwrap();
            }
            for i in (0..*num_qubits - 1).step_by(2) {
                circuit.cx(QubitId(i), QubitId(i + 1)).unwrap();
            }
        }

        group.bench_with_input(
            BenchmarkId::new("depth", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(circuit.depth()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_circuit_creation,
    bench_gate_addition,
    bench_cnot_chain,
    bench_circuit_depth,
);

criterion_main!(benches);
