//! Error types for reversible logic synthesis (§7).

use thiserror::Error;

/// Errors that can occur while synthesizing a reversible circuit from a
/// classical logic network.
///
/// Propagation policy: [`SynthError::CapabilityMissing`] and
/// [`SynthError::SolverFailure`] halt synthesis; an
/// [`SynthError::InplaceTargetMismatch`] is logged to the `tracing` error
/// sink and synthesis continues (§7: "a strategy bug, not a user bug").
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// A capability the chosen strategy needs was not supplied at
    /// construction. The `LogicNetwork`/`QuantumNetwork` capability sets
    /// themselves are enforced by Rust's trait system at compile time
    /// (§9's "compile-time error if any dispatch forgets it"); this
    /// variant is reserved for capabilities that are only known at
    /// runtime, chiefly a `Pebbling` strategy requested without a
    /// [`crate::strategy::PebbleSolver`].
    #[error("required capability missing: {0}")]
    CapabilityMissing(&'static str),

    /// During in-place expansion, none of the fan-in controls equal the
    /// target qubit. Soft error: logged, synthesis continues (§7).
    #[error("in-place target mismatch on node {node}: no fan-in control equals the target qubit")]
    InplaceTargetMismatch {
        /// Index of the node being in-place expanded.
        node: u32,
    },

    /// The pebbling strategy's SAT-based collaborator found no feasible
    /// schedule within the configured pebble limit.
    #[error("pebble solver found no feasible schedule within the pebble limit ({limit})")]
    SolverFailure {
        /// The pebble limit that could not be satisfied.
        limit: u32,
    },

    /// An internal invariant was violated (double-compute of a live node,
    /// uncompute of an unmapped node, release of a still-mapped qubit).
    /// Debug-only: guarded by `debug_assert!` at the call site, this
    /// variant exists so tests can assert on the failure directly instead
    /// of catching a panic.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
