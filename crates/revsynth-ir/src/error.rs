//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("qubit {qubit:?} not found in circuit (gate: {gate_name})")]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Name of the gate being applied.
        gate_name: String,
    },

    /// Invalid DAG structure.
    #[error("invalid DAG structure: {0}")]
    InvalidDag(String),

    /// Invalid node index.
    #[error("invalid node index")]
    InvalidNode,

    /// Duplicate qubit in operation.
    #[error("duplicate qubit {qubit:?} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate being applied.
        gate_name: String,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
