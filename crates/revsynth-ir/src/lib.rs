//! Revsynth Circuit Intermediate Representation
//!
//! This crate provides the concrete `QuantumNetwork` sink (§6) that the
//! reversible-logic synthesis core writes gates into, plus the reversible
//! circuit IR backing it.
//!
//! # Overview
//!
//! The circuit uses a DAG (Directed Acyclic Graph) representation
//! internally, threaded on qubit wires in program order; the high-level
//! [`Circuit`] builder is the capability set the synthesis driver is
//! written against.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`], a dense monotonically-assigned index.
//! - **Gates**: [`StandardGate`] (`X`, `CX`, `Mcx`) and [`CustomGate`] for
//!   gates synthesized from an arbitrary truth table.
//! - **Instructions**: [`Instruction`] combining a gate with its controls
//!   and targets.
//! - **DAG**: [`CircuitDag`] for the internal graph representation.
//! - **Circuit**: [`Circuit`], the high-level builder API.
//!
//! # Example: Toffoli-based AND
//!
//! ```rust
//! use revsynth_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("and_gate", 3);
//! circuit.mcx([QubitId(0), QubitId(1)], QubitId(2)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.depth(), 1);
//! ```

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod synth_adapter;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex};
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, GateKind, StandardGate};
pub use instruction::Instruction;
pub use qubit::QubitId;
