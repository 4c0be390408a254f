//! Random scenario generation.

use std::collections::HashSet;

use rand::Rng;
use rand::RngExt;

use pharos_core::Point;

use crate::Scenario;

/// Generate a random solvable-shaped scenario.
///
/// Grid 5–15 cells on a side, 5–10 components, 2–25 hazard cells, every
/// placed cell distinct. The hazard count is clamped to the cells left over
/// after the rover, the beacon, and the components are placed, so placement
/// always terminates.
pub fn generate(rng: &mut impl Rng) -> Scenario {
    let rows: i32 = rng.random_range(5..=15);
    let cols: i32 = rng.random_range(5..=15);
    let n_components: usize = rng.random_range(5..=10);

    let free = (rows * cols) as usize - 2 - n_components;
    let n_hazards: usize = rng.random_range(2..=25.min(free));

    let total = 2 + n_components + n_hazards;
    let mut taken: HashSet<Point> = HashSet::new();
    let mut cells: Vec<Point> = Vec::with_capacity(total);
    while cells.len() < total {
        let p = Point::new(rng.random_range(0..cols), rng.random_range(0..rows));
        if taken.insert(p) {
            cells.push(p);
        }
    }

    Scenario {
        rows,
        cols,
        start: cells[0],
        beacon: cells[1],
        components: cells[2..2 + n_components].to_vec(),
        hazards: cells[2 + n_components..].to_vec(),
    }
}
