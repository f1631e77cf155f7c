//! Errors raised while building a [`crate::Network`].

use thiserror::Error;

/// Errors that can occur while constructing a logic network.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogicError {
    /// An edge referenced a node index past the end of the node table.
    #[error("fan-in references out-of-range node {index}")]
    DanglingEdge {
        /// The out-of-range index that was referenced.
        index: u32,
    },
    /// A LUT's truth table length did not match `2^fanins.len()`.
    #[error("LUT truth table has {got} entries, expected {expected} for {arity} fan-ins")]
    LutTableSizeMismatch {
        /// Number of fan-ins the LUT was given.
        arity: usize,
        /// `2^arity`.
        expected: usize,
        /// Actual truth table length supplied.
        got: usize,
    },
    /// A LUT fan-in was complemented; the truth-table fast path (§4.4)
    /// requires non-complemented fan-ins by precondition (§9, Open
    /// Question (b)).
    #[error("LUT fan-in {index} is complemented, which is unsupported")]
    ComplementedLutFanin {
        /// Position of the offending fan-in in the LUT's fan-in list.
        index: usize,
    },
}

/// Result type for logic-network construction.
pub type LogicResult<T> = Result<T, LogicError>;
