//! The fixed operator table: the rover's atomic actions, their movement
//! deltas, and their reward values.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geom::Point;

/// An atomic rover action: one of the four directional moves, collecting a
/// component, or igniting the beacon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Op {
    Up,
    Down,
    Left,
    Right,
    Collect,
    Ignite,
}

impl Op {
    /// All operators in expansion order: the four moves in a fixed order,
    /// then ignite, then collect.
    pub const ALL: [Op; 6] = [
        Op::Up,
        Op::Down,
        Op::Left,
        Op::Right,
        Op::Ignite,
        Op::Collect,
    ];

    /// Movement delta for the directional moves; `None` for collect/ignite.
    #[inline]
    pub const fn delta(self) -> Option<Point> {
        match self {
            Op::Up => Some(Point::new(0, -1)),
            Op::Down => Some(Point::new(0, 1)),
            Op::Left => Some(Point::new(-1, 0)),
            Op::Right => Some(Point::new(1, 0)),
            Op::Collect | Op::Ignite => None,
        }
    }

    /// Reward contributed by applying this operator.
    ///
    /// The accounting is reward-like (bigger is better): moves cost a point,
    /// collecting and igniting pay out. Every priority queue in the engine
    /// pops the maximum accordingly.
    #[inline]
    pub const fn reward(self) -> i32 {
        match self {
            Op::Collect => 150,
            Op::Ignite => 15_000,
            Op::Up | Op::Down | Op::Left | Op::Right => -1,
        }
    }

    /// Wire name used by the scenario format and the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            Op::Up => "up",
            Op::Down => "down",
            Op::Left => "left",
            Op::Right => "right",
            Op::Collect => "collect",
            Op::Ignite => "ignite",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an operator name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown operator `{0}`")]
pub struct ParseOpError(pub String);

impl FromStr for Op {
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Op::Up),
            "down" => Ok(Op::Down),
            "left" => Ok(Op::Left),
            "right" => Ok(Op::Right),
            "collect" => Ok(Op::Collect),
            "ignite" => Ok(Op::Ignite),
            other => Err(ParseOpError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_order_moves_then_ignite_then_collect() {
        assert_eq!(
            Op::ALL,
            [
                Op::Up,
                Op::Down,
                Op::Left,
                Op::Right,
                Op::Ignite,
                Op::Collect
            ]
        );
    }

    #[test]
    fn deltas() {
        assert_eq!(Op::Up.delta(), Some(Point::new(0, -1)));
        assert_eq!(Op::Down.delta(), Some(Point::new(0, 1)));
        assert_eq!(Op::Left.delta(), Some(Point::new(-1, 0)));
        assert_eq!(Op::Right.delta(), Some(Point::new(1, 0)));
        assert_eq!(Op::Collect.delta(), None);
        assert_eq!(Op::Ignite.delta(), None);
    }

    #[test]
    fn rewards() {
        assert_eq!(Op::Up.reward(), -1);
        assert_eq!(Op::Right.reward(), -1);
        assert_eq!(Op::Collect.reward(), 150);
        assert_eq!(Op::Ignite.reward(), 15_000);
    }

    #[test]
    fn name_round_trip() {
        for op in Op::ALL {
            assert_eq!(op.to_string().parse::<Op>(), Ok(op));
        }
        assert!("jump".parse::<Op>().is_err());
    }
}
