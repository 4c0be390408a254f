//! The puzzle domain model: grid bounds, hazard cells, component cells, the
//! beacon, and the operator semantics over them.

use std::collections::{BTreeSet, HashSet};

use crate::geom::{Metric, Point, Range};
use crate::op::Op;
use crate::state::PuzzleState;

/// Immutable per-run puzzle configuration.
///
/// Construction happens once, from validated scenario input; nothing here
/// mutates during a search. Malformed instances (start or beacon outside the
/// bounds, overlapping cells) are the scenario layer's job to reject.
#[derive(Clone, Debug)]
pub struct Field {
    bounds: Range,
    start: Point,
    beacon: Point,
    components: BTreeSet<Point>,
    hazards: HashSet<Point>,
}

impl Field {
    /// Create a field of `width` × `height` cells.
    pub fn new(
        width: i32,
        height: i32,
        start: Point,
        beacon: Point,
        components: impl IntoIterator<Item = Point>,
        hazards: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            bounds: Range::new(0, 0, width, height),
            start,
            beacon,
            components: components.into_iter().collect(),
            hazards: hazards.into_iter().collect(),
        }
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// The rover's starting cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The beacon cell.
    #[inline]
    pub fn beacon(&self) -> Point {
        self.beacon
    }

    /// Whether `p` is a hazard cell.
    #[inline]
    pub fn is_hazard(&self, p: Point) -> bool {
        self.hazards.contains(&p)
    }

    /// The root state: rover on the start cell, every component uncollected,
    /// beacon unlit.
    pub fn initial_state(&self) -> PuzzleState {
        PuzzleState::new(self.start, self.components.clone(), false)
    }

    /// Apply `op` to `state`, returning the successor, or `None` when the
    /// operator is invalid there.
    ///
    /// Move validity is judged at the destination cell: it must lie inside
    /// the bounds and must not be a hazard. Collect requires standing on an
    /// uncollected component; ignite requires standing on the beacon, unlit,
    /// with every component collected.
    pub fn apply(&self, state: &PuzzleState, op: Op) -> Option<PuzzleState> {
        match op {
            Op::Collect => {
                if !state.remaining.contains(&state.pos) {
                    return None;
                }
                let mut remaining = state.remaining.clone();
                remaining.remove(&state.pos);
                Some(PuzzleState::new(state.pos, remaining, state.lit))
            }
            Op::Ignite => {
                if state.pos != self.beacon || state.lit || !state.remaining.is_empty() {
                    return None;
                }
                Some(PuzzleState::new(state.pos, state.remaining.clone(), true))
            }
            mv => {
                let dest = state.pos + mv.delta()?;
                if !self.bounds.contains(dest) || self.hazards.contains(&dest) {
                    return None;
                }
                Some(PuzzleState::new(dest, state.remaining.clone(), state.lit))
            }
        }
    }

    /// Goal test for a state and the operator that produced it.
    ///
    /// Only an ignite that just happened counts: standing on the beacon with
    /// nothing left to collect is not a goal until the rover ignites it.
    pub fn is_goal(&self, state: &PuzzleState, produced_by: Option<Op>) -> bool {
        produced_by == Some(Op::Ignite)
            && state.pos == self.beacon
            && state.remaining.is_empty()
    }

    /// Accumulated value after applying `op` under a parent worth
    /// `parent_value`. Reward accounting: bigger is better.
    #[inline]
    pub fn step_value(&self, parent_value: i32, op: Op) -> i32 {
        parent_value + op.reward()
    }

    /// Heuristic estimate of applying `op` at `parent`'s position.
    ///
    /// For a move, the metric distance from the tentative destination to the
    /// nearest remaining component (or to the beacon once all are collected)
    /// is charged against the inherited value, so moves that close in on a
    /// target score higher. Collect and ignite carry the inherited value
    /// through unchanged. Ties among equally-near components resolve to the
    /// first found in `remaining`'s iteration order.
    pub fn estimate(&self, parent: &PuzzleState, parent_value: i32, op: Op, metric: Metric) -> i32 {
        let Some(d) = op.delta() else {
            return parent_value;
        };
        let dest = parent.pos + d;
        let dist = if parent.remaining.is_empty() {
            metric.dist(dest, self.beacon)
        } else {
            let mut best = i32::MAX;
            for &c in &parent.remaining {
                let dd = metric.dist(dest, c);
                if dd < best {
                    best = dd;
                }
            }
            best
        };
        parent_value - dist
    }

    /// Replay a plan from the initial state.
    ///
    /// Returns the resulting state, or `None` at the first operator that is
    /// invalid where it is applied.
    pub fn replay(&self, ops: &[Op]) -> Option<PuzzleState> {
        let mut state = self.initial_state();
        for &op in ops {
            state = self.apply(&state, op)?;
        }
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3×3 field: start top-left, beacon bottom-right, one component in the
    /// middle of the top row, one hazard in the center.
    fn small() -> Field {
        Field::new(
            3,
            3,
            Point::new(0, 0),
            Point::new(2, 2),
            [Point::new(1, 0)],
            [Point::new(1, 1)],
        )
    }

    #[test]
    fn moves_are_checked_at_the_destination() {
        let f = small();
        let s = f.initial_state();

        // Off-grid destinations.
        assert!(f.apply(&s, Op::Up).is_none());
        assert!(f.apply(&s, Op::Left).is_none());

        // Hazard at (1, 1) blocks the move, not the cell we stand on.
        assert!(f.is_hazard(Point::new(1, 1)));
        let below = f.apply(&s, Op::Down).unwrap();
        assert_eq!(below.pos, Point::new(0, 1));
        assert!(f.apply(&below, Op::Right).is_none());

        // A legal move shifts the position and nothing else.
        let right = f.apply(&s, Op::Right).unwrap();
        assert_eq!(right.pos, Point::new(1, 0));
        assert_eq!(right.remaining, s.remaining);
        assert!(!right.lit);
    }

    #[test]
    fn collect_requires_an_uncollected_component() {
        let f = small();
        let s = f.initial_state();
        assert!(f.apply(&s, Op::Collect).is_none());

        let on_comp = f.apply(&s, Op::Right).unwrap();
        let collected = f.apply(&on_comp, Op::Collect).unwrap();
        assert!(collected.remaining.is_empty());
        assert_eq!(collected.pos, on_comp.pos);

        // A second collect on the same cell is invalid.
        assert!(f.apply(&collected, Op::Collect).is_none());
    }

    #[test]
    fn ignite_preconditions() {
        let f = small();

        // On the beacon but components remain.
        let blocked = PuzzleState::new(f.beacon(), [Point::new(1, 0)].into(), false);
        assert!(f.apply(&blocked, Op::Ignite).is_none());

        // Everything collected but not on the beacon.
        let away = PuzzleState::new(Point::new(0, 0), [].into(), false);
        assert!(f.apply(&away, Op::Ignite).is_none());

        // Ready: lights up exactly once.
        let ready = PuzzleState::new(f.beacon(), [].into(), false);
        let lit = f.apply(&ready, Op::Ignite).unwrap();
        assert!(lit.lit);
        assert!(f.apply(&lit, Op::Ignite).is_none());
    }

    #[test]
    fn goal_only_via_ignite() {
        let f = small();
        let ready = PuzzleState::new(f.beacon(), [].into(), false);
        // Arriving by movement is not a goal, even with everything collected.
        assert!(!f.is_goal(&ready, Some(Op::Down)));
        assert!(!f.is_goal(&ready, None));

        let lit = f.apply(&ready, Op::Ignite).unwrap();
        assert!(f.is_goal(&lit, Some(Op::Ignite)));
    }

    #[test]
    fn step_value_accumulates_rewards() {
        let f = small();
        assert_eq!(f.step_value(0, Op::Up), -1);
        assert_eq!(f.step_value(-3, Op::Collect), 147);
        assert_eq!(f.step_value(147, Op::Ignite), 15_147);
    }

    #[test]
    fn estimate_targets_nearest_component_from_the_tentative_cell() {
        let f = Field::new(
            5,
            5,
            Point::new(0, 0),
            Point::new(4, 4),
            [Point::new(3, 0), Point::new(0, 3)],
            [],
        );
        let s = f.initial_state();

        // Moving right lands on (1, 0): nearest component is (3, 0) at
        // Manhattan distance 2.
        assert_eq!(f.estimate(&s, 0, Op::Right, Metric::Manhattan), -2);
        // Moving down lands on (0, 1): nearest is (0, 3) at distance 2.
        assert_eq!(f.estimate(&s, 0, Op::Down, Metric::Manhattan), -2);
        // Chebyshev shrinks diagonal-ish distances.
        assert_eq!(f.estimate(&s, 0, Op::Right, Metric::Chebyshev), -2);

        // The inherited value rides along.
        assert_eq!(f.estimate(&s, 10, Op::Right, Metric::Manhattan), 8);
    }

    #[test]
    fn estimate_falls_back_to_the_beacon_and_skips_non_moves() {
        let f = small();
        let cleared = PuzzleState::new(Point::new(2, 1), [].into(), false);
        // Down from (2, 1) is (2, 2), the beacon itself.
        assert_eq!(f.estimate(&cleared, 5, Op::Down, Metric::Manhattan), 5);
        // Up from (2, 1) is (2, 0), two steps away.
        assert_eq!(f.estimate(&cleared, 5, Op::Up, Metric::Manhattan), 3);
        // Collect/ignite estimates are just the inherited value.
        assert_eq!(f.estimate(&cleared, 5, Op::Collect, Metric::Manhattan), 5);
        assert_eq!(f.estimate(&cleared, 5, Op::Ignite, Metric::Chebyshev), 5);
    }

    #[test]
    fn replay_walks_a_plan_and_rejects_bad_ones() {
        let f = small();
        assert_eq!(f.initial_state().pos, f.start());
        let plan = [
            Op::Right,
            Op::Collect,
            Op::Right,
            Op::Down,
            Op::Down,
            Op::Ignite,
        ];
        let end = f.replay(&plan).unwrap();
        assert!(end.lit);
        assert!(end.remaining.is_empty());
        assert_eq!(end.pos, f.beacon());

        // First op invalid: moving up leaves the grid.
        assert!(f.replay(&[Op::Up]).is_none());
        // Collect before reaching the component.
        assert!(f.replay(&[Op::Collect]).is_none());
    }
}
