//! The puzzle's search state: rover position, uncollected components, and
//! the beacon flag.

use std::collections::BTreeSet;

use crate::geom::Point;

/// Immutable snapshot of the rover's situation.
///
/// Two states are equal iff position, remaining set, and lit flag all match;
/// this triple is the identity the engine uses for duplicate-state
/// elimination. `remaining` is an ordered set so hashing and the heuristic
/// nearest-target tie-break are deterministic.
///
/// Invariants: `remaining` only ever shrinks, and `lit` transitions
/// false→true exactly once, via an ignite at the beacon with `remaining`
/// empty. Both are enforced by [`Field::apply`](crate::Field::apply), the
/// only successor constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleState {
    pub pos: Point,
    pub remaining: BTreeSet<Point>,
    pub lit: bool,
}

impl PuzzleState {
    /// Create a state.
    pub fn new(pos: Point, remaining: BTreeSet<Point>, lit: bool) -> Self {
        Self {
            pos,
            remaining,
            lit,
        }
    }
}
