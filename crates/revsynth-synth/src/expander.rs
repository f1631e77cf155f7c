//! Node expanders (§4.4, §4.5): translate one logic node's Boolean
//! function into a sequence of gates XORed into a target qubit.
//!
//! Both expanders emit `t ← t ⊕ f(fanins)`, which is why the very same
//! routine serves compute (t starts at |0⟩) and uncompute/in-place
//! collapse (t starts at |f⟩) — applying it twice is the identity.
//! Dispatch is a cascaded match over gate kind; the first matching arm
//! wins and the match is checked exhaustively against the trait's
//! classification methods, which is the Rust rendering of §9's
//! "cascaded 'if this kind is supported, and this node is of that
//! kind' must remain observable and non-overlapping" note.

use crate::error::{SynthError, SynthResult};
use crate::network::{Edge, LogicNetwork, QuantumNetwork, SingleTargetGateSynthesis};

/// Resolve a signed edge to the physical qubit currently holding its
/// child node's value.
fn edge_qubit<L: LogicNetwork>(edge: Edge<L::Node>, qubit_of: &impl Fn(L::Node) -> u32) -> u32 {
    qubit_of(edge.node)
}

/// Expand `node`'s Boolean function into `target` (§4.4). `qubit_of`
/// resolves a fan-in node to its currently-mapped qubit; `stg`
/// synthesizes an arbitrary LUT whose truth table is not pure parity.
pub fn expand_node<L, Q>(
    network: &L,
    node: L::Node,
    target: u32,
    qubit_of: impl Fn(L::Node) -> u32,
    qnet: &mut Q,
    stg: &dyn SingleTargetGateSynthesis<Q>,
) -> SynthResult<()>
where
    L: LogicNetwork,
    Q: QuantumNetwork,
{
    let fanins = network.fanins(node);

    if network.is_and(node) {
        let (c1, c2) = (fanins[0], fanins[1]);
        let (q1, q2) = (edge_qubit::<L>(c1, &qubit_of), edge_qubit::<L>(c2, &qubit_of));
        if c1.complemented {
            qnet.x(q1);
        }
        if c2.complemented {
            qnet.x(q2);
        }
        qnet.mcx(&[q1, q2], target);
        if c1.complemented {
            qnet.x(q1);
        }
        if c2.complemented {
            qnet.x(q2);
        }
        return Ok(());
    }

    if network.is_or(node) {
        let (c1, c2) = (fanins[0], fanins[1]);
        let (q1, q2) = (edge_qubit::<L>(c1, &qubit_of), edge_qubit::<L>(c2, &qubit_of));
        if !c1.complemented {
            qnet.x(q1);
        }
        if !c2.complemented {
            qnet.x(q2);
        }
        qnet.mcx(&[q1, q2], target);
        qnet.x(target);
        if !c1.complemented {
            qnet.x(q1);
        }
        if !c2.complemented {
            qnet.x(q2);
        }
        return Ok(());
    }

    if network.is_xor(node) {
        let (c1, c2) = (fanins[0], fanins[1]);
        let inv = c1.complemented ^ c2.complemented;
        qnet.cx(edge_qubit::<L>(c1, &qubit_of), target);
        qnet.cx(edge_qubit::<L>(c2, &qubit_of), target);
        if inv {
            qnet.x(target);
        }
        return Ok(());
    }

    if network.is_xor3(node) {
        let (c1, c2, c3) = (fanins[0], fanins[1], fanins[2]);
        let inv = c1.complemented ^ c2.complemented ^ c3.complemented;

        // Constant-fold: if the first fan-in is constant, its
        // contribution is a fixed bit rather than a qubit, so the
        // gadget degenerates to a 2-input XOR with that bit folded
        // into the inversion (§4.4).
        if network.is_constant(c1.node) {
            let folded_inv = inv ^ network.constant_value(c1.node);
            qnet.cx(edge_qubit::<L>(c2, &qubit_of), target);
            qnet.cx(edge_qubit::<L>(c3, &qubit_of), target);
            if folded_inv {
                qnet.x(target);
            }
            return Ok(());
        }

        qnet.cx(edge_qubit::<L>(c1, &qubit_of), target);
        qnet.cx(edge_qubit::<L>(c2, &qubit_of), target);
        qnet.cx(edge_qubit::<L>(c3, &qubit_of), target);
        if inv {
            qnet.x(target);
        }
        return Ok(());
    }

    if network.is_maj(node) {
        let (c1, c2, c3) = (fanins[0], fanins[1], fanins[2]);

        if network.is_constant(c1.node) {
            // The first fan-in's effective Boolean contribution folds
            // its own polarity bit with the constant's value; this
            // generalizes §4.4's literal "when p1 is set" rule to
            // networks where constant(true) is not the same node as
            // constant(false) (§9's "Constant handling subtlety").
            let effective = network.constant_value(c1.node) ^ c1.complemented;
            if effective {
                return expand_or::<L, Q>(&[c2, c3], &qubit_of, target, qnet);
            }
            return expand_and::<L, Q>(&[c2, c3], &qubit_of, target, qnet);
        }

        let (q1, q2, q3) = (
            edge_qubit::<L>(c1, &qubit_of),
            edge_qubit::<L>(c2, &qubit_of),
            edge_qubit::<L>(c3, &qubit_of),
        );
        // Control 2 inverts oppositely to the usual polarity rule
        // (§4.4).
        let (f1, f2, f3) = (c1.complemented, !c2.complemented, c3.complemented);
        if f1 {
            qnet.x(q1);
        }
        if f2 {
            qnet.x(q2);
        }
        if f3 {
            qnet.x(q3);
        }

        qnet.cx(q1, q2);
        qnet.cx(q3, q1);
        qnet.cx(q3, target);
        qnet.mcx(&[q1, q2], target);
        qnet.cx(q3, q1);
        qnet.cx(q1, q2);

        if f1 {
            qnet.x(q1);
        }
        if f2 {
            qnet.x(q2);
        }
        if f3 {
            qnet.x(q3);
        }
        return Ok(());
    }

    if network.has_node_function(node) {
        let table = network.node_function(node);
        let controls: Vec<u32> = fanins
            .iter()
            .map(|e| {
                debug_assert!(!e.complemented, "LUT fan-ins must be non-complemented");
                edge_qubit::<L>(*e, &qubit_of)
            })
            .collect();

        if is_parity(&table) {
            for &q in &controls {
                if q != target {
                    qnet.cx(q, target);
                }
            }
        } else {
            let mut qubits = controls;
            qubits.push(target);
            stg.synthesize(qnet, &table, &qubits);
        }
        return Ok(());
    }

    Err(SynthError::InvariantViolation(format!(
        "node {:?} matched no known gate kind",
        network.node_index(node)
    )))
}

/// Shared AND gadget, used both directly and by MAJ's constant-fold.
fn expand_and<L: LogicNetwork, Q: QuantumNetwork>(
    controls: &[Edge<L::Node>],
    qubit_of: &impl Fn(L::Node) -> u32,
    target: u32,
    qnet: &mut Q,
) -> SynthResult<()> {
    let (c1, c2) = (controls[0], controls[1]);
    let (q1, q2) = (edge_qubit::<L>(c1, qubit_of), edge_qubit::<L>(c2, qubit_of));
    if c1.complemented {
        qnet.x(q1);
    }
    if c2.complemented {
        qnet.x(q2);
    }
    qnet.mcx(&[q1, q2], target);
    if c1.complemented {
        qnet.x(q1);
    }
    if c2.complemented {
        qnet.x(q2);
    }
    Ok(())
}

/// Shared OR gadget, used both directly and by MAJ's constant-fold.
fn expand_or<L: LogicNetwork, Q: QuantumNetwork>(
    controls: &[Edge<L::Node>],
    qubit_of: &impl Fn(L::Node) -> u32,
    target: u32,
    qnet: &mut Q,
) -> SynthResult<()> {
    let (c1, c2) = (controls[0], controls[1]);
    let (q1, q2) = (edge_qubit::<L>(c1, qubit_of), edge_qubit::<L>(c2, qubit_of));
    if !c1.complemented {
        qnet.x(q1);
    }
    if !c2.complemented {
        qnet.x(q2);
    }
    qnet.mcx(&[q1, q2], target);
    qnet.x(target);
    if !c1.complemented {
        qnet.x(q1);
    }
    if !c2.complemented {
        qnet.x(q2);
    }
    Ok(())
}

/// True iff `table` is exactly the parity function over its support
/// (§4.4's LUT fast path): `table[i] == popcount(i) % 2`.
fn is_parity(table: &[bool]) -> bool {
    table
        .iter()
        .enumerate()
        .all(|(i, &bit)| bit == (i.count_ones() % 2 == 1))
}

/// In-place expansion for XOR/XOR3 onto a target qubit that already
/// holds one fan-in's value (§4.5). Used identically for both
/// `ComputeInplace` and `UncomputeInplace` — the gadget is its own
/// inverse by construction.
pub fn expand_node_inplace<L, Q>(
    network: &L,
    node: L::Node,
    target_node: L::Node,
    target: u32,
    qubit_of: impl Fn(L::Node) -> u32,
    qnet: &mut Q,
) -> SynthResult<()>
where
    L: LogicNetwork,
    Q: QuantumNetwork,
{
    let fanins = network.fanins(node);

    if network.is_xor(node) {
        let (c1, c2) = (fanins[0], fanins[1]);
        let inv = c1.complemented ^ c2.complemented;
        let other = if c1.node == target_node {
            c2
        } else if c2.node == target_node {
            c1
        } else {
            return Err(SynthError::InplaceTargetMismatch {
                node: network.node_index(node),
            });
        };
        qnet.cx(edge_qubit::<L>(other, &qubit_of), target);
        if inv {
            qnet.x(target);
        }
        return Ok(());
    }

    if network.is_xor3(node) {
        let (c1, c2, c3) = (fanins[0], fanins[1], fanins[2]);
        let inv = c1.complemented ^ c2.complemented ^ c3.complemented;

        if network.is_constant(c1.node) {
            let folded_inv = inv ^ network.constant_value(c1.node);
            let other = if c2.node == target_node {
                c3
            } else if c3.node == target_node {
                c2
            } else {
                return Err(SynthError::InplaceTargetMismatch {
                    node: network.node_index(node),
                });
            };
            qnet.cx(edge_qubit::<L>(other, &qubit_of), target);
            if folded_inv {
                qnet.x(target);
            }
            return Ok(());
        }

        let (a, b) = if c1.node == target_node {
            (c2, c3)
        } else if c2.node == target_node {
            (c1, c3)
        } else if c3.node == target_node {
            (c1, c2)
        } else {
            return Err(SynthError::InplaceTargetMismatch {
                node: network.node_index(node),
            });
        };
        qnet.cx(edge_qubit::<L>(a, &qubit_of), target);
        qnet.cx(edge_qubit::<L>(b, &qubit_of), target);
        if inv {
            qnet.x(target);
        }
        return Ok(());
    }

    Err(SynthError::InvariantViolation(format!(
        "in-place expansion requested for non-XOR-class node {:?}",
        network.node_index(node)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Edge;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct N(u32);

    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Const(bool),
        Pi,
        And,
        Or,
        Xor,
        Xor3,
        Maj,
        Lut,
    }

    struct Toy {
        kinds: Vec<Kind>,
        fanins: Vec<Vec<(u32, bool)>>,
        table: Vec<Vec<bool>>,
    }

    impl Toy {
        fn node(&self, i: u32) -> N {
            N(i)
        }
    }

    impl LogicNetwork for Toy {
        type Node = N;
        fn primary_inputs(&self) -> Vec<N> {
            (0..self.kinds.len() as u32)
                .filter(|&i| self.kinds[i as usize] == Kind::Pi)
                .map(N)
                .collect()
        }
        fn gates(&self) -> Vec<N> {
            (0..self.kinds.len() as u32)
                .filter(|&i| {
                    !matches!(self.kinds[i as usize], Kind::Pi | Kind::Const(_))
                })
                .map(N)
                .collect()
        }
        fn primary_outputs(&self) -> Vec<N> {
            vec![]
        }
        fn is_constant(&self, n: N) -> bool {
            matches!(self.kinds[n.0 as usize], Kind::Const(_))
        }
        fn is_pi(&self, n: N) -> bool {
            self.kinds[n.0 as usize] == Kind::Pi
        }
        fn is_and(&self, n: N) -> bool {
            self.kinds[n.0 as usize] == Kind::And
        }
        fn is_or(&self, n: N) -> bool {
            self.kinds[n.0 as usize] == Kind::Or
        }
        fn is_xor(&self, n: N) -> bool {
            self.kinds[n.0 as usize] == Kind::Xor
        }
        fn is_xor3(&self, n: N) -> bool {
            self.kinds[n.0 as usize] == Kind::Xor3
        }
        fn is_maj(&self, n: N) -> bool {
            self.kinds[n.0 as usize] == Kind::Maj
        }
        fn has_node_function(&self, n: N) -> bool {
            self.kinds[n.0 as usize] == Kind::Lut
        }
        fn fanins(&self, n: N) -> Vec<Edge<N>> {
            self.fanins[n.0 as usize]
                .iter()
                .map(|&(i, c)| Edge::new(self.node(i), c))
                .collect()
        }
        fn node_index(&self, n: N) -> u32 {
            n.0
        }
        fn index_to_node(&self, index: u32) -> N {
            N(index)
        }
        fn fanout_size(&self, _n: N) -> u32 {
            0
        }
        fn clear_values(&self) {}
        fn set_value(&self, _n: N, _value: u32) {}
        fn decr_value(&self, _n: N) -> u32 {
            0
        }
        fn get_value(&self, _n: N) -> u32 {
            0
        }
        fn constant_value(&self, n: N) -> bool {
            match self.kinds[n.0 as usize] {
                Kind::Const(v) => v,
                _ => false,
            }
        }
        fn get_constant(&self, value: bool) -> N {
            self.node(
                (0..self.kinds.len() as u32)
                    .find(|&i| self.kinds[i as usize] == Kind::Const(value))
                    .expect("constant present"),
            )
        }
        fn node_function(&self, n: N) -> Vec<bool> {
            self.table[n.0 as usize].clone()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        X(u32),
        Cx(u32, u32),
        Mcx(Vec<u32>, u32),
    }

    #[derive(Default)]
    struct RecordingQnet {
        next: u32,
        ops: Vec<Op>,
    }

    impl QuantumNetwork for RecordingQnet {
        fn num_qubits(&self) -> usize {
            self.next as usize
        }
        fn add_qubit(&mut self) -> u32 {
            let q = self.next;
            self.next += 1;
            q
        }
        fn x(&mut self, target: u32) {
            self.ops.push(Op::X(target));
        }
        fn cx(&mut self, control: u32, target: u32) {
            self.ops.push(Op::Cx(control, target));
        }
        fn mcx(&mut self, controls: &[u32], target: u32) {
            self.ops.push(Op::Mcx(controls.to_vec(), target));
        }
    }

    fn identity_qubit_of(n: N) -> u32 {
        n.0
    }

    struct NoStg;
    impl SingleTargetGateSynthesis<RecordingQnet> for NoStg {
        fn synthesize(&self, _qnet: &mut RecordingQnet, _tt: &[bool], _qubits: &[u32]) {
            panic!("stg callback should not be invoked for a parity LUT");
        }
    }

    #[test]
    fn and_gate_emits_single_toffoli_with_no_complements() {
        let net = Toy {
            kinds: vec![Kind::Pi, Kind::Pi, Kind::And],
            fanins: vec![vec![], vec![], vec![(0, false), (1, false)]],
            table: vec![vec![], vec![], vec![]],
        };
        let mut qnet = RecordingQnet::default();
        expand_node(&net, N(2), 2, identity_qubit_of, &mut qnet, &NoStg).unwrap();
        assert_eq!(qnet.ops, vec![Op::Mcx(vec![0, 1], 2)]);
    }

    #[test]
    fn or_with_one_complemented_fanin_brackets_toffoli_with_xs() {
        // OR(¬a, b): p1=true so c1 is NOT flipped; p2=false so c2 IS flipped.
        let net = Toy {
            kinds: vec![Kind::Pi, Kind::Pi, Kind::Or],
            fanins: vec![vec![], vec![], vec![(0, true), (1, false)]],
            table: vec![vec![], vec![], vec![]],
        };
        let mut qnet = RecordingQnet::default();
        expand_node(&net, N(2), 2, identity_qubit_of, &mut qnet, &NoStg).unwrap();
        assert_eq!(
            qnet.ops,
            vec![
                Op::X(1),
                Op::Mcx(vec![0, 1], 2),
                Op::X(2),
                Op::X(1),
            ]
        );
    }

    #[test]
    fn maj_constant_folds_to_and() {
        // MAJ(const(false), a, b) with p1=false (effective bit = false) -> AND(a,b).
        let net = Toy {
            kinds: vec![Kind::Const(false), Kind::Pi, Kind::Pi, Kind::Maj],
            fanins: vec![
                vec![],
                vec![],
                vec![],
                vec![(0, false), (1, false), (2, false)],
            ],
            table: vec![vec![], vec![], vec![], vec![]],
        };
        let mut qnet = RecordingQnet::default();
        expand_node(&net, N(3), 3, identity_qubit_of, &mut qnet, &NoStg).unwrap();
        assert_eq!(qnet.ops, vec![Op::Mcx(vec![1, 2], 3)]);
    }

    #[test]
    fn lut_parity_emits_cnots_with_no_stg_call() {
        // 2-input parity (XOR) expressed as a LUT node.
        let net = Toy {
            kinds: vec![Kind::Pi, Kind::Pi, Kind::Lut],
            fanins: vec![vec![], vec![], vec![(0, false), (1, false)]],
            table: vec![vec![], vec![], vec![false, true, true, false]],
        };
        let mut qnet = RecordingQnet::default();
        expand_node(&net, N(2), 2, identity_qubit_of, &mut qnet, &NoStg).unwrap();
        assert_eq!(qnet.ops, vec![Op::Cx(0, 2), Op::Cx(1, 2)]);
    }

    #[test]
    fn xor_inplace_reports_mismatch_when_target_absent() {
        let net = Toy {
            kinds: vec![Kind::Pi, Kind::Pi, Kind::Xor],
            fanins: vec![vec![], vec![], vec![(0, false), (1, false)]],
            table: vec![vec![], vec![], vec![]],
        };
        let mut qnet = RecordingQnet::default();
        let result =
            expand_node_inplace(&net, N(2), N(99), 7, identity_qubit_of, &mut qnet);
        assert!(matches!(
            result,
            Err(SynthError::InplaceTargetMismatch { node: 2 })
        ));
    }

    #[test]
    fn xor_inplace_compute_and_uncompute_are_the_same_routine() {
        let net = Toy {
            kinds: vec![Kind::Pi, Kind::Pi, Kind::Xor],
            fanins: vec![vec![], vec![], vec![(0, false), (1, false)]],
            table: vec![vec![], vec![], vec![]],
        };
        let mut qnet = RecordingQnet::default();
        // target_node = node 0 (a), whose qubit (0) is reused for g.
        expand_node_inplace(&net, N(2), N(0), 0, identity_qubit_of, &mut qnet).unwrap();
        expand_node_inplace(&net, N(2), N(0), 0, identity_qubit_of, &mut qnet).unwrap();
        assert_eq!(qnet.ops, vec![Op::Cx(1, 0), Op::Cx(1, 0)]);
    }

    #[test]
    fn is_parity_detects_three_input_parity_and_rejects_non_parity() {
        assert!(is_parity(&[false, true, true, false, true, false, false, true]));
        assert!(!is_parity(&[true, true, true, true]));
    }
}
