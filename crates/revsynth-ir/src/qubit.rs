//! Qubit identifiers.

use std::fmt;

/// Dense, non-negative index into a [`crate::circuit::Circuit`]'s qubit
/// vector (§3). Indices are assigned monotonically in allocation order;
/// freed indices are reused LIFO by the ancilla pool, never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

impl From<QubitId> for usize {
    fn from(id: QubitId) -> Self {
        id.0 as usize
    }
}
