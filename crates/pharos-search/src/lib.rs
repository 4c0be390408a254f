//! **pharos-search** — Generalized state-space search over finite domains.
//!
//! Five strategies share one frontier-expansion skeleton, parameterized by
//! frontier discipline and per-successor priority:
//!
//! | Strategy | Frontier | Priority |
//! |---|---|---|
//! | breadth-first | FIFO queue | unused |
//! | depth-first | LIFO stack | unused |
//! | uniform-cost | max-heap | accumulated value |
//! | greedy best-first | max-heap | heuristic estimate |
//! | A\*-style best-first | max-heap | estimate + step value, parent value counted once |
//!
//! # Values are rewards
//!
//! The accounting model is reward-like: bigger is better, and every
//! priority-queue strategy pops the **maximum** priority node. Porting any of
//! this onto a min-queue without negating priorities silently inverts the
//! behavior of every informed strategy.
//!
//! Domains plug in through [`SearchDomain`]; the grid puzzle's
//! [`Field`](pharos_core::Field) is the bundled implementation.

mod domain;
mod engine;
mod frontier;
mod node;
mod solution;

pub use domain::SearchDomain;
pub use engine::{ParseStrategyError, Strategy, search};
pub use node::Node;
pub use solution::Solution;
