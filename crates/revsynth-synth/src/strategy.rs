//! Mapping strategies (§4.2): deciding, for each gate node, whether it
//! gets a fresh compute/uncompute pair or collapses in place.
//!
//! All three strategies expose the same `for_each_step` walk so the
//! driver (§4.6) can stay strategy-agnostic; `set_pebble_limit` is a
//! no-op sentinel on the two strategies that don't use it (§9,
//! "Capability probing on LogicNetwork", option (a): "define a single
//! interface with all operations, with unsupported ones returning a
//! sentinel").

use crate::action::{Action, Step};
use crate::error::{SynthError, SynthResult};
use crate::network::LogicNetwork;

/// A mapping strategy: yields the full step stream for a network exactly
/// once, in execution order (§4.2).
pub trait MappingStrategy<L: LogicNetwork> {
    /// Visit every step in execution order. Only the pebbling strategy
    /// can fail (`SolverFailure`); the others are infallible.
    fn for_each_step(
        &self,
        network: &L,
        visitor: &mut dyn FnMut(Step<L::Node>),
    ) -> SynthResult<()>;

    /// Configure the pebble limit. Only [`PebblingStrategy`] honors
    /// this; every other strategy accepts and ignores it.
    fn set_pebble_limit(&mut self, _limit: u32) {}
}

/// Strict Bennett strategy (§4.2.1): compute every gate forward, then
/// uncompute every non-driver gate in reverse order, so a gate's value
/// stays live on its qubit until every one of its fan-outs has been
/// computed (the nested tweedledum insertion pattern — uncomputes are
/// appended in a second, reversed pass rather than interleaved with the
/// computes that still depend on them).
#[derive(Debug, Default, Clone, Copy)]
pub struct BennettStrategy;

impl<L: LogicNetwork> MappingStrategy<L> for BennettStrategy {
    fn for_each_step(
        &self,
        network: &L,
        visitor: &mut dyn FnMut(Step<L::Node>),
    ) -> SynthResult<()> {
        let gates = network.gates();
        let mut uncomputes = Vec::new();

        for n in gates {
            visitor(Step::new(n, Action::Compute));
            if !network.is_primary_output(n) {
                uncomputes.push(Step::new(n, Action::Uncompute));
            }
        }
        for step in uncomputes.into_iter().rev() {
            visitor(step);
        }
        Ok(())
    }
}

/// Bennett in-place strategy (§4.2.2): reference-counts each node's
/// remaining fan-out and collapses XOR-class gates onto a spent fan-in
/// instead of allocating a fresh ancilla.
///
/// Like [`BennettStrategy`], every uncompute (plain or in-place) is
/// deferred to a second, reversed pass: a gate's qubit — whether it's a
/// fresh ancilla or a fan-in's qubit reused in place — must stay live
/// until every fan-out that reads it has been computed, not just the
/// fan-outs that happen to precede it in the reverse-count tie-break.
#[derive(Debug, Default, Clone, Copy)]
pub struct BennettInPlaceStrategy;

impl<L: LogicNetwork> MappingStrategy<L> for BennettInPlaceStrategy {
    fn for_each_step(
        &self,
        network: &L,
        visitor: &mut dyn FnMut(Step<L::Node>),
    ) -> SynthResult<()> {
        network.clear_values();
        for n in network.primary_inputs() {
            network.set_value(n, network.fanout_size(n));
        }
        for n in network.gates() {
            network.set_value(n, network.fanout_size(n));
        }

        let gates = network.gates();
        let mut uncomputes = Vec::new();

        for n in gates {
            // First fan-in (in iteration order) whose counter hits zero
            // wins as the in-place target — an observable tie-break
            // (§4.2.2).
            let mut target = None;
            for fanin in network.fanins(n) {
                let child = network.get_node(fanin);
                let remaining = network.decr_value(child);
                if remaining == 0 && target.is_none() {
                    target = Some(child);
                }
            }

            let is_xor_class = network.is_xor(n) || network.is_xor3(n);
            if let Some(target) = target {
                if !network.is_primary_output(n) && is_xor_class {
                    visitor(Step::new(n, Action::ComputeInplace { target }));
                    uncomputes.push(Step::new(n, Action::UncomputeInplace { target }));
                    continue;
                }
            }

            visitor(Step::new(n, Action::Compute));
            if !network.is_primary_output(n) {
                uncomputes.push(Step::new(n, Action::Uncompute));
            }
        }
        for step in uncomputes.into_iter().rev() {
            visitor(step);
        }
        Ok(())
    }
}

/// Default pebble limit used when the caller never calls
/// `set_pebble_limit` (§9, Open Question (a)). Preserved from the
/// source; meaningful only in that it bounds the *default* search the
/// collaborator performs, not a synthesis-level semantic.
pub const DEFAULT_PEBBLE_LIMIT: u32 = 50;

/// An abstract SAT-based pebble-game solver (§4.2.3, §9 "Pebbling as a
/// collaborator"). Out of scope for this crate: given a network and a
/// pebble limit, it returns an ordered step stream that respects at
/// most `limit` simultaneously-live qubits, or fails.
pub trait PebbleSolver<L: LogicNetwork> {
    /// Solve for a step stream honoring `limit` simultaneously live
    /// nodes, or report that none exists.
    fn solve(&self, network: &L, limit: u32) -> SynthResult<Vec<Step<L::Node>>>;
}

/// Pebbling strategy (§4.2.3): delegates step-sequence construction to
/// an external [`PebbleSolver`] and replays whatever it returns. A
/// limit of `0` is unbounded and degenerates into Bennett.
pub struct PebblingStrategy<S> {
    solver: S,
    limit: u32,
}

impl<S> PebblingStrategy<S> {
    /// Build a pebbling strategy over `solver`, using the default
    /// pebble limit until [`MappingStrategy::set_pebble_limit`] is
    /// called.
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            limit: DEFAULT_PEBBLE_LIMIT,
        }
    }
}

impl<L: LogicNetwork, S: PebbleSolver<L>> MappingStrategy<L> for PebblingStrategy<S> {
    fn for_each_step(
        &self,
        network: &L,
        visitor: &mut dyn FnMut(Step<L::Node>),
    ) -> SynthResult<()> {
        let steps = self.solver.solve(network, self.limit)?;
        for step in steps {
            visitor(step);
        }
        Ok(())
    }

    fn set_pebble_limit(&mut self, limit: u32) {
        self.limit = limit;
    }
}

/// Capability check for a caller about to select [`PebblingStrategy`]
/// without actually having a [`PebbleSolver`] implementation on hand —
/// the one case of §7's `CapabilityMissing` that Rust's trait system
/// cannot catch at compile time, because the decision of *which*
/// strategy to instantiate is a runtime configuration choice.
pub fn require_pebble_solver<T>(solver: Option<T>) -> SynthResult<T> {
    solver.ok_or(SynthError::CapabilityMissing("pebble solver"))
}
