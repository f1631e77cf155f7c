//! Hierarchical reversible/quantum circuit synthesis.
//!
//! Translates a classical combinational logic network (a DAG of
//! Boolean gates) into a reversible circuit of NOT/CNOT/Toffoli/MCX
//! gates, by composing three coupled pieces:
//!
//! - A [`strategy::MappingStrategy`] (Bennett, Bennett in-place, or
//!   pebbling) decides, per logic node, when it is computed,
//!   uncomputed, or collapsed in place.
//! - An [`ancilla::AncillaPool`] hands out and recycles the qubits
//!   those decisions need.
//! - [`expander::expand_node`] and [`expander::expand_node_inplace`]
//!   turn one logic node's Boolean function into gates.
//!
//! [`driver::SynthesisDriver`] ties the three together against two
//! abstract collaborators, [`network::LogicNetwork`] (the source) and
//! [`network::QuantumNetwork`] (the sink) — concrete implementations
//! live in the `revsynth-logic` and `revsynth-ir` crates respectively,
//! which depend on this crate rather than the other way around, so a
//! type that forgets a required operation fails to compile here.

pub mod action;
pub mod ancilla;
pub mod driver;
pub mod error;
pub mod expander;
pub mod network;
pub mod strategy;

pub use action::{Action, Step};
pub use ancilla::AncillaPool;
pub use driver::{Parameters, Stats, SynthesisDriver};
pub use error::{SynthError, SynthResult};
pub use expander::{expand_node, expand_node_inplace};
pub use network::{Edge, LogicNetwork, QuantumNetwork, SingleTargetGateSynthesis};
pub use strategy::{
    BennettInPlaceStrategy, BennettStrategy, MappingStrategy, PebbleSolver, PebblingStrategy,
    DEFAULT_PEBBLE_LIMIT,
};
