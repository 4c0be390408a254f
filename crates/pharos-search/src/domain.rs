//! The seam between the engine and a concrete problem.

use std::hash::Hash;

use pharos_core::{Field, Metric, Op, PuzzleState};

/// A finite search domain: states, an operator table, a goal test, and the
/// value accounting.
///
/// The engine only ever touches a domain through this trait, so any problem
/// with value-equal, hashable states and a finite operator set can ride the
/// same five strategies.
pub trait SearchDomain {
    /// State snapshot. Equality/hashing define duplicate detection.
    type State: Clone + Eq + Hash;
    /// Operator. Cheap to copy; compared for the goal test.
    type Op: Copy + PartialEq;

    /// The root state searches start from.
    fn initial(&self) -> Self::State;

    /// The operator table, in the order successors are generated during an
    /// expansion.
    fn operators(&self) -> &[Self::Op];

    /// Apply `op` to `state`; `None` when the operator is invalid there.
    fn apply(&self, state: &Self::State, op: Self::Op) -> Option<Self::State>;

    /// Whether `state`, produced by `produced_by` (`None` for the root),
    /// satisfies the goal.
    fn is_goal(&self, state: &Self::State, produced_by: Option<Self::Op>) -> bool;

    /// Accumulated value after applying `op` under a parent worth
    /// `parent_value`. Values are rewards: bigger is better.
    fn step_value(&self, parent_value: i32, op: Self::Op) -> i32;

    /// Heuristic estimate for applying `op` at `parent`, under the given
    /// metric. Must already include `parent_value` so greedy search can use
    /// it alone.
    fn estimate(
        &self,
        parent: &Self::State,
        parent_value: i32,
        op: Self::Op,
        metric: Metric,
    ) -> i32;
}

impl SearchDomain for Field {
    type State = PuzzleState;
    type Op = Op;

    fn initial(&self) -> PuzzleState {
        self.initial_state()
    }

    fn operators(&self) -> &[Op] {
        &Op::ALL
    }

    fn apply(&self, state: &PuzzleState, op: Op) -> Option<PuzzleState> {
        Field::apply(self, state, op)
    }

    fn is_goal(&self, state: &PuzzleState, produced_by: Option<Op>) -> bool {
        Field::is_goal(self, state, produced_by)
    }

    fn step_value(&self, parent_value: i32, op: Op) -> i32 {
        Field::step_value(self, parent_value, op)
    }

    fn estimate(&self, parent: &PuzzleState, parent_value: i32, op: Op, metric: Metric) -> i32 {
        Field::estimate(self, parent, parent_value, op, metric)
    }
}
