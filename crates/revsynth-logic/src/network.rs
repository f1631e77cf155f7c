//! A gate-inverter-graph classical logic network: primary inputs and
//! constants feed AND/OR/XOR/XOR3/MAJ/k-LUT gates through signed
//! (possibly complemented) fan-in edges, terminating in primary
//! outputs.
//!
//! Grounded on the `Network`/`Gate`/`Signal` design of a gate-inverter
//! graph: a flat node table addressed by dense index, canonical
//! constants at the front of the table, and signed edges that fold a
//! NOT into the edge itself rather than allocating an inverter node.

use std::cell::Cell;

use revsynth_synth::{Edge as SynthEdge, LogicNetwork};

use crate::error::{LogicError, LogicResult};

/// Index of a node within one [`Network`]. Indices `0` and `1` are
/// reserved for `constant(false)` and `constant(true)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// A signed fan-in reference within this crate's node table.
pub type Edge = SynthEdge<NodeId>;

/// What a node computes.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The constant `false`.
    ConstFalse,
    /// The constant `true`.
    ConstTrue,
    /// A primary input, with its declaration-order index.
    Input(usize),
    /// Binary AND.
    And(Edge, Edge),
    /// Binary OR.
    Or(Edge, Edge),
    /// Binary XOR.
    Xor(Edge, Edge),
    /// Ternary XOR.
    Xor3(Edge, Edge, Edge),
    /// Ternary majority.
    Maj(Edge, Edge, Edge),
    /// A k-input lookup table: fan-ins (assumed non-complemented, per
    /// precondition) plus a `2^k`-entry truth table.
    Lut(Vec<Edge>, Vec<bool>),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    /// Structural fan-out: number of gates referencing this node as a
    /// fan-in. Primary-output references do not count (only gate
    /// fan-in references drive the Bennett-in-place reference count,
    /// §4.2.2).
    fanout: u32,
    /// Runtime reference-counting workspace for the in-place strategy
    /// (`clear_values`/`set_value`/`decr_value`/`get_value`).
    value: Cell<u32>,
}

/// A classical combinational logic network, built bottom-up via the
/// `and`/`or`/`xor`/`xor3`/`maj`/`lut` builder methods and terminated
/// with `add_output`.
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    inputs: Vec<NodeId>,
    outputs: Vec<NodeId>,
}

const CONST_FALSE: NodeId = NodeId(0);
const CONST_TRUE: NodeId = NodeId(1);

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// An empty network with both constants pre-allocated as distinct
    /// nodes (index 0 and 1).
    pub fn new() -> Self {
        Self {
            nodes: vec![
                Node {
                    kind: NodeKind::ConstFalse,
                    fanout: 0,
                    value: Cell::new(0),
                },
                Node {
                    kind: NodeKind::ConstTrue,
                    fanout: 0,
                    value: Cell::new(0),
                },
            ],
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            fanout: 0,
            value: Cell::new(0),
        });
        id
    }

    fn bump_fanout(&mut self, edge: Edge) {
        self.nodes[edge.node.0 as usize].fanout += 1;
    }

    fn check_in_range(&self, edge: Edge) -> LogicResult<()> {
        if (edge.node.0 as usize) < self.nodes.len() {
            Ok(())
        } else {
            Err(LogicError::DanglingEdge { index: edge.node.0 })
        }
    }

    /// Allocate a fresh primary input.
    pub fn add_input(&mut self) -> NodeId {
        let index = self.inputs.len();
        let id = self.push(NodeKind::Input(index));
        self.inputs.push(id);
        id
    }

    /// Append a binary AND gate.
    pub fn and(&mut self, a: Edge, b: Edge) -> LogicResult<NodeId> {
        self.check_in_range(a)?;
        self.check_in_range(b)?;
        let id = self.push(NodeKind::And(a, b));
        self.bump_fanout(a);
        self.bump_fanout(b);
        Ok(id)
    }

    /// Append a binary OR gate.
    pub fn or(&mut self, a: Edge, b: Edge) -> LogicResult<NodeId> {
        self.check_in_range(a)?;
        self.check_in_range(b)?;
        let id = self.push(NodeKind::Or(a, b));
        self.bump_fanout(a);
        self.bump_fanout(b);
        Ok(id)
    }

    /// Append a binary XOR gate.
    pub fn xor(&mut self, a: Edge, b: Edge) -> LogicResult<NodeId> {
        self.check_in_range(a)?;
        self.check_in_range(b)?;
        let id = self.push(NodeKind::Xor(a, b));
        self.bump_fanout(a);
        self.bump_fanout(b);
        Ok(id)
    }

    /// Append a ternary XOR gate.
    pub fn xor3(&mut self, a: Edge, b: Edge, c: Edge) -> LogicResult<NodeId> {
        self.check_in_range(a)?;
        self.check_in_range(b)?;
        self.check_in_range(c)?;
        let id = self.push(NodeKind::Xor3(a, b, c));
        self.bump_fanout(a);
        self.bump_fanout(b);
        self.bump_fanout(c);
        Ok(id)
    }

    /// Append a ternary majority gate.
    pub fn maj(&mut self, a: Edge, b: Edge, c: Edge) -> LogicResult<NodeId> {
        self.check_in_range(a)?;
        self.check_in_range(b)?;
        self.check_in_range(c)?;
        let id = self.push(NodeKind::Maj(a, b, c));
        self.bump_fanout(a);
        self.bump_fanout(b);
        self.bump_fanout(c);
        Ok(id)
    }

    /// Append a k-input lookup table. `fanins` must be non-complemented
    /// (§9, Open Question (b)) and `table.len()` must equal
    /// `2^fanins.len()`.
    pub fn lut(&mut self, fanins: Vec<Edge>, table: Vec<bool>) -> LogicResult<NodeId> {
        for e in &fanins {
            self.check_in_range(*e)?;
        }
        for (index, e) in fanins.iter().enumerate() {
            if e.complemented {
                return Err(LogicError::ComplementedLutFanin { index });
            }
        }
        let expected = 1usize << fanins.len();
        if table.len() != expected {
            return Err(LogicError::LutTableSizeMismatch {
                arity: fanins.len(),
                expected,
                got: table.len(),
            });
        }
        for e in &fanins {
            self.bump_fanout(*e);
        }
        let id = self.push(NodeKind::Lut(fanins, table));
        Ok(id)
    }

    /// Mark `node` as driving a primary output. Does not affect
    /// structural fan-out (§4.2.2: only gate fan-in references count).
    pub fn add_output(&mut self, node: NodeId) -> LogicResult<()> {
        self.check_in_range(Edge::new(node, false))?;
        self.outputs.push(node);
        Ok(())
    }

    fn node(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0 as usize].kind
    }

    /// Topological order of all non-constant, non-input nodes
    /// reachable from the primary outputs, dependencies first.
    fn topo_gates(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut visited = vec![false; self.nodes.len()];
        let mut stack: Vec<(NodeId, bool)> =
            self.outputs.iter().map(|&n| (n, false)).collect();

        while let Some((id, expanded)) = stack.pop() {
            if visited[id.0 as usize] {
                continue;
            }
            if expanded {
                visited[id.0 as usize] = true;
                if !matches!(self.node(id), NodeKind::ConstFalse | NodeKind::ConstTrue | NodeKind::Input(_)) {
                    order.push(id);
                }
                continue;
            }
            stack.push((id, true));
            for fanin in self.fanins_of(id) {
                if !visited[fanin.node.0 as usize] {
                    stack.push((fanin.node, false));
                }
            }
        }

        order
    }

    fn fanins_of(&self, id: NodeId) -> Vec<Edge> {
        match self.node(id) {
            NodeKind::ConstFalse | NodeKind::ConstTrue | NodeKind::Input(_) => vec![],
            NodeKind::And(a, b) | NodeKind::Or(a, b) | NodeKind::Xor(a, b) => vec![*a, *b],
            NodeKind::Xor3(a, b, c) | NodeKind::Maj(a, b, c) => vec![*a, *b, *c],
            NodeKind::Lut(fanins, _) => fanins.clone(),
        }
    }
}

impl LogicNetwork for Network {
    type Node = NodeId;

    fn primary_inputs(&self) -> Vec<NodeId> {
        self.inputs.clone()
    }

    fn gates(&self) -> Vec<NodeId> {
        self.topo_gates()
    }

    fn primary_outputs(&self) -> Vec<NodeId> {
        self.outputs.clone()
    }

    fn is_constant(&self, n: NodeId) -> bool {
        matches!(self.node(n), NodeKind::ConstFalse | NodeKind::ConstTrue)
    }

    fn is_pi(&self, n: NodeId) -> bool {
        matches!(self.node(n), NodeKind::Input(_))
    }

    fn is_and(&self, n: NodeId) -> bool {
        matches!(self.node(n), NodeKind::And(..))
    }

    fn is_or(&self, n: NodeId) -> bool {
        matches!(self.node(n), NodeKind::Or(..))
    }

    fn is_xor(&self, n: NodeId) -> bool {
        matches!(self.node(n), NodeKind::Xor(..))
    }

    fn is_xor3(&self, n: NodeId) -> bool {
        matches!(self.node(n), NodeKind::Xor3(..))
    }

    fn is_maj(&self, n: NodeId) -> bool {
        matches!(self.node(n), NodeKind::Maj(..))
    }

    fn has_node_function(&self, n: NodeId) -> bool {
        matches!(self.node(n), NodeKind::Lut(..))
    }

    fn fanins(&self, n: NodeId) -> Vec<Edge> {
        self.fanins_of(n)
    }

    fn node_index(&self, n: NodeId) -> u32 {
        n.0
    }

    fn index_to_node(&self, index: u32) -> NodeId {
        NodeId(index)
    }

    fn fanout_size(&self, n: NodeId) -> u32 {
        self.nodes[n.0 as usize].fanout
    }

    fn clear_values(&self) {
        for node in &self.nodes {
            node.value.set(0);
        }
    }

    fn set_value(&self, n: NodeId, value: u32) {
        self.nodes[n.0 as usize].value.set(value);
    }

    fn decr_value(&self, n: NodeId) -> u32 {
        let cell = &self.nodes[n.0 as usize].value;
        let new = cell.get().saturating_sub(1);
        cell.set(new);
        new
    }

    fn get_value(&self, n: NodeId) -> u32 {
        self.nodes[n.0 as usize].value.get()
    }

    fn constant_value(&self, n: NodeId) -> bool {
        matches!(self.node(n), NodeKind::ConstTrue)
    }

    fn get_constant(&self, value: bool) -> NodeId {
        if value {
            CONST_TRUE
        } else {
            CONST_FALSE
        }
    }

    fn node_function(&self, n: NodeId) -> Vec<bool> {
        match self.node(n) {
            NodeKind::Lut(_, table) => table.clone(),
            _ => vec![],
        }
    }
}
