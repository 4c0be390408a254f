//! **pharos-scenario** — Collaborators around the puzzle core: the textual
//! scenario wire format, random instance generation, and ASCII rendering of
//! solution traces.
//!
//! Validation lives here by design: a [`Scenario`] that parses is safe to
//! hand to the search engine, which never re-checks its input.

mod random;
mod render;
mod scenario;

pub use random::generate;
pub use render::{snapshot, trace};
pub use scenario::{Scenario, ScenarioError};
