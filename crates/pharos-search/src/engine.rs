//! The shared frontier-expansion skeleton and the strategy selector.

use std::collections::HashSet;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

use pharos_core::Metric;

use crate::domain::SearchDomain;
use crate::frontier::Frontier;
use crate::node::Node;
use crate::solution::Solution;

/// Search strategy selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// FIFO frontier, insertion order only.
    BreadthFirst,
    /// LIFO frontier, insertion order only.
    DepthFirst,
    /// Max-heap on accumulated value.
    UniformCost,
    /// Max-heap on the heuristic estimate alone.
    Greedy(Metric),
    /// Max-heap on estimate + step value, the parent's inherited value
    /// counted exactly once.
    AStar(Metric),
}

impl Strategy {
    fn frontier<S, O>(self) -> Frontier<S, O> {
        match self {
            Strategy::BreadthFirst => Frontier::fifo(),
            Strategy::DepthFirst => Frontier::lifo(),
            Strategy::UniformCost | Strategy::Greedy(_) | Strategy::AStar(_) => Frontier::best(),
        }
    }
}

/// Error returned for an unrecognized strategy token.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown strategy `{0}`, expected one of bf, df, uc, gr1, gr2, as1, as2")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bf" => Ok(Strategy::BreadthFirst),
            "df" => Ok(Strategy::DepthFirst),
            "uc" => Ok(Strategy::UniformCost),
            "gr1" => Ok(Strategy::Greedy(Metric::Manhattan)),
            "gr2" => Ok(Strategy::Greedy(Metric::Chebyshev)),
            "as1" => Ok(Strategy::AStar(Metric::Manhattan)),
            "as2" => Ok(Strategy::AStar(Metric::Chebyshev)),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Run a search over `domain` with the given strategy.
///
/// Returns the reconstructed solution when a popped node satisfies the goal
/// test, or `None` when the frontier empties first. Exhaustion is the
/// expected outcome for an unsolvable instance, not an error.
///
/// Successor states enter the explored set when they are generated, not when
/// they are expanded, so no state is ever enqueued twice; with a finite state
/// space that bounds the run. Duplicate detection is per run: each call owns
/// a fresh explored set.
pub fn search<D: SearchDomain>(domain: &D, strategy: Strategy) -> Option<Solution<D::Op>> {
    log::debug!("{strategy:?}: starting search");
    let root = Rc::new(Node::root(domain.initial()));

    let mut explored: HashSet<D::State> = HashSet::new();
    explored.insert(root.state.clone());

    let mut frontier = strategy.frontier();
    frontier.push(root, 0);

    let mut expanded = 0usize;

    while let Some(node) = frontier.pop() {
        expanded += 1;

        if domain.is_goal(&node.state, node.op) {
            log::debug!(
                "{strategy:?}: goal at depth {} after {expanded} expansions",
                node.depth
            );
            return Some(Solution::reconstruct(&node, expanded));
        }

        for &op in domain.operators() {
            let Some(state) = domain.apply(&node.state, op) else {
                continue;
            };
            if explored.contains(&state) {
                continue;
            }

            let value = domain.step_value(node.value, op);
            let priority = match strategy {
                Strategy::BreadthFirst | Strategy::DepthFirst => 0,
                Strategy::UniformCost => value,
                Strategy::Greedy(m) => domain.estimate(&node.state, node.value, op, m),
                // The estimate already carries the parent's inherited value;
                // the step term must not add it a second time.
                Strategy::AStar(m) => {
                    domain.estimate(&node.state, node.value, op, m) + value - node.value
                }
            };

            explored.insert(state.clone());
            let child = Node::child(state, Rc::clone(&node), op, value);
            frontier.push(Rc::new(child), priority);
        }
    }

    log::debug!("{strategy:?}: frontier exhausted after {expanded} expansions");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharos_core::{Field, Op, Point};

    #[test]
    fn strategy_tokens_parse() {
        assert_eq!("bf".parse(), Ok(Strategy::BreadthFirst));
        assert_eq!("df".parse(), Ok(Strategy::DepthFirst));
        assert_eq!("uc".parse(), Ok(Strategy::UniformCost));
        assert_eq!("gr1".parse(), Ok(Strategy::Greedy(Metric::Manhattan)));
        assert_eq!("gr2".parse(), Ok(Strategy::Greedy(Metric::Chebyshev)));
        assert_eq!("as1".parse(), Ok(Strategy::AStar(Metric::Manhattan)));
        assert_eq!("as2".parse(), Ok(Strategy::AStar(Metric::Chebyshev)));
        assert!("astar".parse::<Strategy>().is_err());
    }

    #[test]
    fn trivial_instance_solves_immediately_after_ignite() {
        // Start on the beacon with nothing to collect: the only useful op is
        // ignite, found at depth 1.
        let f = Field::new(2, 2, Point::ZERO, Point::ZERO, [], []);
        let sol = search(&f, Strategy::BreadthFirst).unwrap();
        assert_eq!(sol.ops, vec![Op::Ignite]);
        assert_eq!(sol.value, 15_000);
    }

    #[test]
    fn hazard_wall_yields_no_solution() {
        // The beacon sits behind a full hazard column.
        let f = Field::new(
            3,
            3,
            Point::new(0, 0),
            Point::new(2, 1),
            [],
            [Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)],
        );
        assert!(search(&f, Strategy::BreadthFirst).is_none());
        assert!(search(&f, Strategy::DepthFirst).is_none());
        assert!(search(&f, Strategy::UniformCost).is_none());
    }
}
