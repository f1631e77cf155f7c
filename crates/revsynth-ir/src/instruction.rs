//! Circuit instructions: a gate plus the qubits it acts on.

use crate::gate::{Gate, GateKind, StandardGate};
use crate::qubit::QubitId;

/// A single reversible gate application, split into its controls and its
/// target(s) (§6: `add_gate(kind, controls, targets)`).
///
/// The synthesis core only ever emits single-target gates, so `targets` is
/// almost always a single qubit; it is kept as a `Vec` rather than a scalar
/// so a [`crate::circuit::CircuitDag`] consumer can treat custom multi-qubit
/// gates uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The gate being applied.
    pub gate: Gate,
    /// Control qubits, in the order they were supplied.
    pub controls: Vec<QubitId>,
    /// Target qubit(s).
    pub targets: Vec<QubitId>,
}

impl Instruction {
    /// Build an instruction directly from a gate kind, controls and targets.
    pub fn new(
        gate: impl Into<Gate>,
        controls: impl IntoIterator<Item = QubitId>,
        targets: impl IntoIterator<Item = QubitId>,
    ) -> Self {
        Self {
            gate: gate.into(),
            controls: controls.into_iter().collect(),
            targets: targets.into_iter().collect(),
        }
    }

    /// `X(target)`: an uncontrolled NOT.
    pub fn x(target: QubitId) -> Self {
        Self::new(StandardGate::X, [], [target])
    }

    /// `CX(control, target)`: a CNOT.
    pub fn cx(control: QubitId, target: QubitId) -> Self {
        Self::new(StandardGate::CX, [control], [target])
    }

    /// `MCX(controls, target)`: a multi-controlled NOT (Toffoli when there
    /// are exactly two controls).
    pub fn mcx(controls: impl IntoIterator<Item = QubitId>, target: QubitId) -> Self {
        Self::new(StandardGate::Mcx, controls, [target])
    }

    /// A gate synthesized from an arbitrary truth table by the
    /// single-target-gate synthesis callback (§6).
    pub fn custom(
        gate: crate::gate::CustomGate,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> Self {
        Self::new(gate, controls, [target])
    }

    /// All qubits this instruction touches, controls first then targets —
    /// the order the DAG builder and the benchmark harness iterate in.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls.iter().copied().chain(self.targets.iter().copied())
    }

    /// Number of controls.
    pub fn num_controls(&self) -> usize {
        self.controls.len()
    }

    /// The name of the underlying gate.
    pub fn name(&self) -> &str {
        self.gate.name()
    }

    /// `true` if this is a plain `X`.
    pub fn is_x(&self) -> bool {
        matches!(self.gate.kind, GateKind::Standard(StandardGate::X))
    }

    /// `true` if this is a `CX`.
    pub fn is_cx(&self) -> bool {
        matches!(self.gate.kind, GateKind::Standard(StandardGate::CX))
    }

    /// `true` if this is an `MCX` (includes the 2-control Toffoli case).
    pub fn is_mcx(&self) -> bool {
        matches!(self.gate.kind, GateKind::Standard(StandardGate::Mcx))
    }

    /// `true` if this is a synthesized custom gate.
    pub fn is_custom(&self) -> bool {
        matches!(self.gate.kind, GateKind::Custom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_instruction() {
        let inst = Instruction::x(QubitId(0));
        assert!(inst.is_x());
        assert_eq!(inst.controls.len(), 0);
        assert_eq!(inst.targets, vec![QubitId(0)]);
    }

    #[test]
    fn test_cx_instruction() {
        let inst = Instruction::cx(QubitId(0), QubitId(1));
        assert!(inst.is_cx());
        assert_eq!(inst.controls, vec![QubitId(0)]);
        assert_eq!(inst.targets, vec![QubitId(1)]);
    }

    #[test]
    fn test_mcx_instruction() {
        let inst = Instruction::mcx([QubitId(0), QubitId(1)], QubitId(2));
        assert!(inst.is_mcx());
        assert_eq!(inst.num_controls(), 2);
        assert_eq!(inst.targets, vec![QubitId(2)]);
        let qs: Vec<_> = inst.qubits().collect();
        assert_eq!(qs, vec![QubitId(0), QubitId(1), QubitId(2)]);
    }

    #[test]
    fn test_custom_instruction() {
        let gate = crate::gate::CustomGate::new("lut", 3);
        let inst = Instruction::custom(gate, [QubitId(0), QubitId(1)], QubitId(2));
        assert!(inst.is_custom());
        assert_eq!(inst.name(), "lut");
    }
}
