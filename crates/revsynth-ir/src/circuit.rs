//! High-level circuit builder: the concrete `QuantumNetwork` sink (§6).

use crate::dag::CircuitDag;
use crate::error::IrResult;
use crate::gate::{CustomGate, Gate};
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// A reversible circuit: the concrete sink the synthesis driver writes
/// gates into.
///
/// Exposes exactly the `QuantumNetwork` capability set of §6 —
/// `num_qubits`, `add_qubit`, `add_gate` plus the `X`/`CX` convenience
/// overloads — backed by a [`CircuitDag`] so depth and structural
/// integrity can be inspected after synthesis.
#[derive(Clone)]
pub struct Circuit {
    name: String,
    dag: CircuitDag,
    next_qubit_id: u32,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dag: CircuitDag::new(),
            next_qubit_id: 0,
        }
    }

    /// Create a circuit pre-populated with `num_qubits` qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        circuit
    }

    /// Allocate and append a fresh qubit, returning its index.
    ///
    /// Qubit indices are assigned monotonically and never reused by this
    /// method — reuse of a freed index is the ancilla pool's job
    /// (§4.3), not the network's.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.next_qubit_id);
        self.next_qubit_id += 1;
        self.dag.add_qubit(id);
        id
    }

    /// Number of qubits allocated so far.
    pub fn num_qubits(&self) -> usize {
        self.dag.num_qubits()
    }

    /// Append a gate with explicit controls and targets (§6:
    /// `add_gate(kind, controls, targets)`).
    pub fn add_gate(
        &mut self,
        gate: impl Into<Gate>,
        controls: impl IntoIterator<Item = QubitId>,
        targets: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::new(gate, controls, targets))?;
        Ok(self)
    }

    /// Append an uncontrolled `X` (NOT) on `target`.
    pub fn x(&mut self, target: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::x(target))?;
        Ok(self)
    }

    /// Append a `CX` (CNOT) from `control` to `target`.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::cx(control, target))?;
        Ok(self)
    }

    /// Append an `MCX` (Toffoli for two controls) with the given controls
    /// onto `target`.
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::mcx(controls, target))?;
        Ok(self)
    }

    /// Append a gate synthesized by the single-target-gate synthesis
    /// callback (§6) from an arbitrary truth table.
    pub fn add_custom_gate(
        &mut self,
        gate: CustomGate,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::custom(gate, controls, target))?;
        Ok(self)
    }

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the circuit depth.
    pub fn depth(&self) -> usize {
        self.dag.depth()
    }

    /// Get a reference to the underlying DAG.
    pub fn dag(&self) -> &CircuitDag {
        &self.dag
    }

    /// Iterate over emitted gate instructions in program order.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.dag.topological_ops().map(|(_, inst)| inst)
    }
}
