//! DAG-based circuit representation.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// Node index type for the circuit DAG.
pub type NodeIndex = PetNodeIndex<u32>;

/// A node in the circuit DAG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DagNode {
    /// Input node for a qubit wire.
    In(QubitId),
    /// Output node for a qubit wire.
    Out(QubitId),
    /// Operation node containing an instruction.
    Op(Instruction),
}

impl DagNode {
    /// Check if this is an input node.
    #[inline]
    pub fn is_input(&self) -> bool {
        matches!(self, DagNode::In(_))
    }

    /// Check if this is an output node.
    #[inline]
    pub fn is_output(&self) -> bool {
        matches!(self, DagNode::Out(_))
    }

    /// Check if this is an operation node.
    #[inline]
    pub fn is_op(&self) -> bool {
        matches!(self, DagNode::Op(_))
    }

    /// Get the instruction if this is an operation node.
    #[inline]
    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            DagNode::Op(inst) => Some(inst),
            _ => None,
        }
    }
}

/// An edge in the circuit DAG, carrying the qubit wire it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DagEdge {
    /// The wire this edge represents.
    pub wire: QubitId,
}

/// DAG-based representation of a growing reversible circuit.
///
/// The circuit is append-only: the synthesis driver never removes or
/// rewrites an emitted gate, it only adds qubits (via the ancilla pool,
/// §4.3) and appends instructions (via the node expander, §4.4/§4.5).
/// Nodes are either input nodes, output nodes, or operation nodes; each
/// qubit wire has exactly one input and one output node, with operation
/// nodes threaded in program order in between.
///
/// ## Performance
///
/// The DAG maintains a `wire_front` index mapping each qubit to the last
/// node before its output node, giving O(1) predecessor lookups in
/// `apply()` instead of scanning the output node's incoming edges.
#[derive(Debug, Clone)]
pub struct CircuitDag {
    graph: DiGraph<DagNode, DagEdge, u32>,
    qubit_inputs: FxHashMap<QubitId, NodeIndex>,
    qubit_outputs: FxHashMap<QubitId, NodeIndex>,
    wire_front: FxHashMap<QubitId, NodeIndex>,
}

impl CircuitDag {
    /// Create a new empty circuit DAG.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::default(),
            qubit_inputs: FxHashMap::default(),
            qubit_outputs: FxHashMap::default(),
            wire_front: FxHashMap::default(),
        }
    }

    /// Add a qubit to the circuit. A no-op if the qubit already exists.
    pub fn add_qubit(&mut self, qubit: QubitId) {
        if self.qubit_inputs.contains_key(&qubit) {
            return;
        }
        let in_node = self.graph.add_node(DagNode::In(qubit));
        let out_node = self.graph.add_node(DagNode::Out(qubit));
        self.graph.add_edge(in_node, out_node, DagEdge { wire: qubit });
        self.qubit_inputs.insert(qubit, in_node);
        self.qubit_outputs.insert(qubit, out_node);
        self.wire_front.insert(qubit, in_node);
    }

    /// Apply an instruction to the circuit, threading it onto each qubit it
    /// touches in program order.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<NodeIndex> {
        let gate_name = instruction.name().to_string();

        let mut seen = rustc_hash::FxHashSet::default();
        for qubit in instruction.qubits() {
            if !self.qubit_inputs.contains_key(&qubit) {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        let op_node = self.graph.add_node(DagNode::Op(instruction.clone()));

        for qubit in instruction.qubits() {
            let out_node = self.qubit_outputs[&qubit];
            let prev_node = self.wire_front[&qubit];

            let edge_id = self
                .graph
                .edges_directed(prev_node, Direction::Outgoing)
                .find(|e| e.weight().wire == qubit && e.target() == out_node)
                .map(|e| e.id());

            let eid = edge_id.ok_or_else(|| {
                IrError::InvalidDag(format!(
                    "missing edge from predecessor to output for qubit {qubit:?}"
                ))
            })?;
            self.graph.remove_edge(eid);
            self.graph.add_edge(prev_node, op_node, DagEdge { wire: qubit });
            self.graph.add_edge(op_node, out_node, DagEdge { wire: qubit });
            self.wire_front.insert(qubit, op_node);
        }

        Ok(op_node)
    }

    /// Iterate over operations in topological (here: program) order.
    pub fn topological_ops(&self) -> impl Iterator<Item = (NodeIndex, &Instruction)> {
        petgraph::algo::toposort(&self.graph, None)
            .expect("DAG must be acyclic")
            .into_iter()
            .filter_map(|idx| self.graph[idx].instruction().map(|inst| (idx, inst)))
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Get an instruction by node index.
    #[inline]
    pub fn get_instruction(&self, node: NodeIndex) -> Option<&Instruction> {
        self.graph.node_weight(node).and_then(|n| n.instruction())
    }

    /// Number of qubits in the circuit, including ancillae and freed ones
    /// (qubit indices are never reclaimed from the DAG itself, only from
    /// the ancilla pool's free list — §3).
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubit_inputs.len()
    }

    /// Number of operation nodes.
    #[inline]
    pub fn num_ops(&self) -> usize {
        let io_nodes = 2 * self.qubit_inputs.len();
        self.graph.node_count().saturating_sub(io_nodes)
    }

    /// Circuit depth (longest path of operation nodes through the DAG).
    pub fn depth(&self) -> usize {
        let node_count = self.graph.node_count();
        let mut depths: FxHashMap<NodeIndex, usize> =
            FxHashMap::with_capacity_and_hasher(node_count, Default::default());
        let mut max_depth = 0usize;

        for node in petgraph::algo::toposort(&self.graph, None).expect("DAG must be acyclic") {
            let max_pred_depth = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| depths.get(&e.source()).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);

            let node_depth = if self.graph[node].is_op() {
                max_pred_depth + 1
            } else {
                max_pred_depth
            };

            max_depth = max_depth.max(node_depth);
            depths.insert(node, node_depth);
        }

        max_depth
    }

    /// Iterate over qubits.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubit_inputs.keys().copied()
    }

    /// Get a reference to the underlying graph.
    pub fn graph(&self) -> &DiGraph<DagNode, DagEdge, u32> {
        &self.graph
    }

    /// Verify the structural integrity of the DAG: acyclic, every qubit has
    /// matching In/Out nodes, every wire forms a single In-to-Out path, and
    /// every node is reachable.
    pub fn verify_integrity(&self) -> IrResult<()> {
        if petgraph::algo::is_cyclic_directed(&self.graph) {
            return Err(IrError::InvalidDag("graph contains a cycle".into()));
        }

        for &qubit in self.qubit_inputs.keys() {
            if !self.qubit_outputs.contains_key(&qubit) {
                return Err(IrError::InvalidDag(format!(
                    "qubit {qubit:?} has an In node but no Out node"
                )));
            }
        }

        for (&qubit, &in_node) in &self.qubit_inputs {
            let out_node = self.qubit_outputs[&qubit];
            let mut current = in_node;
            let mut steps = 0;
            let max_steps = self.graph.node_count();

            while current != out_node {
                let next = self
                    .graph
                    .edges_directed(current, Direction::Outgoing)
                    .find(|e| e.weight().wire == qubit)
                    .map(|e| e.target());

                current = next.ok_or_else(|| {
                    IrError::InvalidDag(format!(
                        "wire for qubit {qubit:?} is broken at node {current:?}"
                    ))
                })?;

                steps += 1;
                if steps > max_steps {
                    return Err(IrError::InvalidDag(format!(
                        "wire for qubit {qubit:?} has too many steps"
                    )));
                }
            }
        }

        let topo_nodes = petgraph::algo::toposort(&self.graph, None).unwrap_or_default();
        if topo_nodes.len() != self.graph.node_count() {
            return Err(IrError::InvalidDag("unreachable node found in DAG".into()));
        }

        Ok(())
    }
}

impl Default for CircuitDag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dag() {
        let dag = CircuitDag::new();
        assert_eq!(dag.num_qubits(), 0);
        assert_eq!(dag.num_ops(), 0);
        assert_eq!(dag.depth(), 0);
    }

    #[test]
    fn test_add_qubits() {
        let mut dag = CircuitDag::new();
        dag.add_qubit(QubitId(0));
        dag.add_qubit(QubitId(1));
        assert_eq!(dag.num_qubits(), 2);
    }

    #[test]
    fn test_apply_gate() {
        let mut dag = CircuitDag::new();
        dag.add_qubit(QubitId(0));

        dag.apply(Instruction::x(QubitId(0))).unwrap();

        assert_eq!(dag.num_ops(), 1);
        assert_eq!(dag.depth(), 1);
    }

    #[test]
    fn test_cnot_chain_depth() {
        let mut dag = CircuitDag::new();
        dag.add_qubit(QubitId(0));
        dag.add_qubit(QubitId(1));
        dag.add_qubit(QubitId(2));

        dag.apply(Instruction::cx(QubitId(0), QubitId(1))).unwrap();
        dag.apply(Instruction::cx(QubitId(1), QubitId(2))).unwrap();

        assert_eq!(dag.num_ops(), 2);
        assert_eq!(dag.depth(), 2);
    }

    #[test]
    fn test_parallel_gates_depth() {
        let mut dag = CircuitDag::new();
        dag.add_qubit(QubitId(0));
        dag.add_qubit(QubitId(1));

        dag.apply(Instruction::x(QubitId(0))).unwrap();
        dag.apply(Instruction::x(QubitId(1))).unwrap();

        assert_eq!(dag.num_ops(), 2);
        assert_eq!(dag.depth(), 1);
    }

    #[test]
    fn test_qubit_not_found() {
        let mut dag = CircuitDag::new();
        dag.add_qubit(QubitId(0));

        let result = dag.apply(Instruction::cx(QubitId(0), QubitId(99)));

        assert!(result.is_err());
        match result {
            Err(IrError::QubitNotFound { qubit, gate_name }) => {
                assert_eq!(qubit, QubitId(99));
                assert_eq!(gate_name, "cx");
            }
            _ => panic!("expected QubitNotFound error"),
        }
    }

    #[test]
    fn test_verify_integrity_empty() {
        CircuitDag::new().verify_integrity().unwrap();
    }

    #[test]
    fn test_verify_integrity_with_toffoli() {
        let mut dag = CircuitDag::new();
        dag.add_qubit(QubitId(0));
        dag.add_qubit(QubitId(1));
        dag.add_qubit(QubitId(2));
        dag.apply(Instruction::mcx([QubitId(0), QubitId(1)], QubitId(2)))
            .unwrap();

        dag.verify_integrity().unwrap();
    }
}
