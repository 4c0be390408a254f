//! ASCII rendering of scenarios and solution traces.
//!
//! Symbols: `*` empty, `R` rover, `W` rover on the beacon or a component,
//! `C` component, `H` hazard, `B` unlit beacon, `X` lit beacon.

use pharos_core::{Op, Point, PuzzleState};

use crate::Scenario;

/// Render the scenario's initial configuration.
pub fn snapshot(sc: &Scenario) -> String {
    frame(sc, &sc.to_field().initial_state())
}

/// Render one frame per applied operator, separated by rules, starting from
/// the initial configuration.
///
/// Returns `None` if the plan is invalid for the scenario.
pub fn trace(sc: &Scenario, ops: &[Op]) -> Option<String> {
    let field = sc.to_field();
    let mut state = field.initial_state();
    let mut out = frame(sc, &state);
    for &op in ops {
        state = field.apply(&state, op)?;
        out.push_str("------\n");
        out.push_str(&frame(sc, &state));
    }
    Some(out)
}

fn frame(sc: &Scenario, state: &PuzzleState) -> String {
    let mut out = String::new();
    for y in 0..sc.rows {
        for x in 0..sc.cols {
            if x != 0 {
                out.push('|');
            }
            out.push(cell_char(sc, state, Point::new(x, y)));
        }
        out.push('\n');
    }
    out
}

fn cell_char(sc: &Scenario, state: &PuzzleState, p: Point) -> char {
    if p == state.pos {
        let special = p == sc.beacon || state.remaining.contains(&p);
        return if special { 'W' } else { 'R' };
    }
    if state.remaining.contains(&p) {
        'C'
    } else if p == sc.beacon {
        if state.lit { 'X' } else { 'B' }
    } else if sc.hazards.contains(&p) {
        'H'
    } else {
        '*'
    }
}
