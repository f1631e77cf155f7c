//! Synthesis driver (§4.6): the state machine that turns a mapping
//! strategy's step stream into gates on a [`QuantumNetwork`].

use std::time::Duration;

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::ancilla::AncillaPool;
use crate::error::{SynthError, SynthResult};
use crate::expander::{expand_node, expand_node_inplace};
use crate::network::{LogicNetwork, QuantumNetwork, SingleTargetGateSynthesis};
use crate::strategy::MappingStrategy;

/// Driver configuration (§4.7).
#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    /// Pebble limit passed to a [`crate::strategy::PebblingStrategy`]
    /// via `set_pebble_limit`; `0` means unbounded. Ignored by
    /// strategies that don't implement it.
    pub pebble_limit: u32,
    /// Emit one `[i] compute `/`[i] uncompute ` line per step to
    /// stdout (§6's verbose trace format).
    pub verbose: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        // Preserved from the source even though it is only observable
        // when a `PebblingStrategy` is actually selected (§9, Open
        // Question (a)): a caller who never calls `set_pebble_limit`
        // still gets this bound rather than an unbounded search.
        Self {
            pebble_limit: 50,
            verbose: false,
        }
    }
}

/// Run statistics produced by a synthesis run (§4.7).
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    /// Wall-clock duration of the full run.
    pub time_total: Duration,
    /// Qubits allocated via the ancilla pool beyond inputs/constants.
    pub required_ancillae: u32,
}

/// Drives a [`MappingStrategy`]'s step stream against a [`LogicNetwork`]
/// source and a [`QuantumNetwork`] sink.
pub struct SynthesisDriver<'a, Q: QuantumNetwork> {
    qnet: &'a mut Q,
    params: Parameters,
}

impl<'a, Q: QuantumNetwork> SynthesisDriver<'a, Q> {
    /// Build a driver writing into `qnet` with the given parameters.
    pub fn new(qnet: &'a mut Q, params: Parameters) -> Self {
        Self { qnet, params }
    }

    /// Run `strategy` over `network`, using `stg` for any LUT whose
    /// truth table is not pure parity.
    pub fn run<L>(
        &mut self,
        network: &L,
        strategy: &dyn MappingStrategy<L>,
        stg: &dyn SingleTargetGateSynthesis<Q>,
    ) -> SynthResult<Stats>
    where
        L: LogicNetwork,
    {
        let start = std::time::Instant::now();
        let mut pool = AncillaPool::new();
        let mut node_to_qubit: FxHashMap<L::Node, u32> = FxHashMap::default();

        // 1. Prepare inputs.
        for pi in network.primary_inputs() {
            let q = self.qnet.add_qubit();
            debug!(node = ?network.node_index(pi), qubit = q, "mapped primary input");
            node_to_qubit.insert(pi, q);
        }

        // 2. Prepare constants. §9's "Constant handling subtlety":
        // some networks represent constant(true) and constant(false)
        // as the same node; this check must be preserved exactly.
        let const_false = network.get_constant(false);
        let const_true = network.get_constant(true);

        if network.fanout_size(const_false) > 0 {
            let q = self.qnet.add_qubit();
            node_to_qubit.insert(const_false, q);
            debug!(qubit = q, "mapped constant(false)");
        }
        if const_false != const_true && network.fanout_size(const_true) > 0 {
            let q = self.qnet.add_qubit();
            node_to_qubit.insert(const_true, q);
            self.qnet.x(q);
            debug!(qubit = q, "mapped constant(true)");
        }

        // 3 & 4. Build strategy, drive steps.
        let mut step_error = None;
        strategy.for_each_step(network, &mut |step| {
            if step_error.is_some() {
                return;
            }
            if let Err(e) = self.apply_step(network, &mut node_to_qubit, &mut pool, step, stg) {
                step_error = Some(e);
            }
        })?;
        if let Some(e) = step_error {
            return Err(e);
        }

        // 5. Finalise.
        Ok(Stats {
            time_total: start.elapsed(),
            required_ancillae: pool.required_ancillae(),
        })
    }

    fn apply_step<L: LogicNetwork>(
        &mut self,
        network: &L,
        node_to_qubit: &mut FxHashMap<L::Node, u32>,
        pool: &mut AncillaPool,
        step: crate::action::Step<L::Node>,
        stg: &dyn SingleTargetGateSynthesis<Q>,
    ) -> SynthResult<()> {
        let node = step.node;

        match step.action {
            Action::Compute => {
                let q = pool.request(self.qnet);
                node_to_qubit.insert(node, q);
                if self.params.verbose {
                    println!("[i] compute node={} qubit={}", network.node_index(node), q);
                }
                trace!(node = ?network.node_index(node), qubit = q, "compute");
                let qubit_of = |n: L::Node| {
                    *node_to_qubit.get(&n).unwrap_or_else(|| {
                        panic!("fan-in {:?} not yet mapped", network.node_index(n))
                    })
                };
                expand_node(network, node, q, qubit_of, self.qnet, stg)?;
            }
            Action::Uncompute => {
                let q = *node_to_qubit
                    .get(&node)
                    .ok_or_else(|| {
                        SynthError::InvariantViolation(format!(
                            "uncompute of unmapped node {:?}",
                            network.node_index(node)
                        ))
                    })?;
                if self.params.verbose {
                    println!("[i] uncompute node={} qubit={}", network.node_index(node), q);
                }
                trace!(node = ?network.node_index(node), qubit = q, "uncompute");
                let qubit_of = |n: L::Node| {
                    *node_to_qubit.get(&n).unwrap_or_else(|| {
                        panic!("fan-in {:?} not yet mapped", network.node_index(n))
                    })
                };
                expand_node(network, node, q, qubit_of, self.qnet, stg)?;
                pool.release(q);
                node_to_qubit.remove(&node);
            }
            Action::ComputeInplace { target } => {
                let q = *node_to_qubit.get(&target).ok_or_else(|| {
                    SynthError::InvariantViolation(format!(
                        "in-place compute target {:?} not mapped",
                        network.node_index(target)
                    ))
                })?;
                node_to_qubit.insert(node, q);
                if self.params.verbose {
                    println!(
                        "[i] compute node={} qubit={} target={}",
                        network.node_index(node),
                        q,
                        network.node_index(target)
                    );
                }
                trace!(node = ?network.node_index(node), qubit = q, target = ?network.node_index(target), "compute-inplace");
                let qubit_of = |n: L::Node| {
                    *node_to_qubit.get(&n).unwrap_or_else(|| {
                        panic!("fan-in {:?} not yet mapped", network.node_index(n))
                    })
                };
                match expand_node_inplace(network, node, target, q, qubit_of, self.qnet) {
                    Ok(()) => {}
                    Err(SynthError::InplaceTargetMismatch { node }) => {
                        warn!(node, "in-place target mismatch");
                    }
                    Err(e) => return Err(e),
                }
            }
            Action::UncomputeInplace { target } => {
                let q = *node_to_qubit.get(&node).ok_or_else(|| {
                    SynthError::InvariantViolation(format!(
                        "in-place uncompute of unmapped node {:?}",
                        network.node_index(node)
                    ))
                })?;
                if self.params.verbose {
                    println!(
                        "[i] uncompute node={} qubit={} target={}",
                        network.node_index(node),
                        q,
                        network.node_index(target)
                    );
                }
                trace!(node = ?network.node_index(node), qubit = q, target = ?network.node_index(target), "uncompute-inplace");
                let qubit_of = |n: L::Node| {
                    *node_to_qubit.get(&n).unwrap_or_else(|| {
                        panic!("fan-in {:?} not yet mapped", network.node_index(n))
                    })
                };
                match expand_node_inplace(network, node, target, q, qubit_of, self.qnet) {
                    Ok(()) => {}
                    Err(SynthError::InplaceTargetMismatch { node }) => {
                        warn!(node, "in-place target mismatch");
                    }
                    Err(e) => return Err(e),
                }
                // §9: the source never explicitly restores
                // NodeToQubit[target] after UncomputeInplace; the
                // pairing with the immediately preceding
                // ComputeInplace is implicit. We make it explicit here
                // (documented choice, emitted gate sequence unchanged).
                node_to_qubit.remove(&node);
                node_to_qubit.insert(target, q);
            }
        }
        Ok(())
    }
}
