//! The textual scenario format and its validation.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use pharos_core::{Field, Point};

/// Parse/validation failure for the scenario wire format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("expected 5 `;`-separated sections, found {0}")]
    SectionCount(usize),

    #[error("invalid integer `{0}`")]
    BadInt(String),

    #[error("expected a single (row, col) pair in the {section} section")]
    BadPair { section: &'static str },

    #[error("expected an even number of coordinates in the {section} section")]
    OddCoordinates { section: &'static str },

    #[error("grid size must be positive, got {rows}x{cols}")]
    BadSize { rows: i32, cols: i32 },

    #[error("cell ({row}, {col}) lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: i32,
        cols: i32,
    },

    #[error("cell ({row}, {col}) is used more than once")]
    Overlap { row: i32, col: i32 },
}

/// A textual puzzle instance.
///
/// Wire format: `rows,cols;sr,sc;br,bc;c0r,c0c,...;h0r,h0c,...`: grid size,
/// rover start, beacon, component cells, hazard cells, with every coordinate
/// given as a (row, col) pair. The component and hazard sections may be
/// empty. Points are stored in x/y screen space (x = col, y = row), matching
/// the rest of the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub beacon: Point,
    pub components: Vec<Point>,
    pub hazards: Vec<Point>,
}

impl Scenario {
    /// Build the immutable domain model for this instance.
    pub fn to_field(&self) -> Field {
        Field::new(
            self.cols,
            self.rows,
            self.start,
            self.beacon,
            self.components.iter().copied(),
            self.hazards.iter().copied(),
        )
    }
}

fn ints(section: &str) -> Result<Vec<i32>, ScenarioError> {
    if section.is_empty() {
        return Ok(Vec::new());
    }
    section
        .split(',')
        .map(|tok| {
            tok.trim()
                .parse()
                .map_err(|_| ScenarioError::BadInt(tok.to_string()))
        })
        .collect()
}

/// Interpret a flat (row, col) coordinate list as points in x/y space.
fn points(section: &str, name: &'static str) -> Result<Vec<Point>, ScenarioError> {
    let vals = ints(section)?;
    if vals.len() % 2 != 0 {
        return Err(ScenarioError::OddCoordinates { section: name });
    }
    Ok(vals
        .chunks_exact(2)
        .map(|rc| Point::new(rc[1], rc[0]))
        .collect())
}

fn pair(section: &str, name: &'static str) -> Result<Point, ScenarioError> {
    let vals = ints(section)?;
    if vals.len() != 2 {
        return Err(ScenarioError::BadPair { section: name });
    }
    Ok(Point::new(vals[1], vals[0]))
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sections: Vec<&str> = s.trim().split(';').collect();
        if sections.len() != 5 {
            return Err(ScenarioError::SectionCount(sections.len()));
        }

        let size = pair(sections[0], "size")?;
        // The size section reads rows-first, like everything else.
        let (rows, cols) = (size.y, size.x);
        if rows < 1 || cols < 1 {
            return Err(ScenarioError::BadSize { rows, cols });
        }

        let scenario = Scenario {
            rows,
            cols,
            start: pair(sections[1], "start")?,
            beacon: pair(sections[2], "beacon")?,
            components: points(sections[3], "components")?,
            hazards: points(sections[4], "hazards")?,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

impl Scenario {
    fn validate(&self) -> Result<(), ScenarioError> {
        let mut taken = HashSet::new();
        let cells = [self.start, self.beacon]
            .into_iter()
            .chain(self.components.iter().copied())
            .chain(self.hazards.iter().copied());
        for p in cells {
            if p.x < 0 || p.x >= self.cols || p.y < 0 || p.y >= self.rows {
                return Err(ScenarioError::OutOfBounds {
                    row: p.y,
                    col: p.x,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            if !taken.insert(p) {
                return Err(ScenarioError::Overlap { row: p.y, col: p.x });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.rows, self.cols)?;
        write!(f, ";{},{}", self.start.y, self.start.x)?;
        write!(f, ";{},{}", self.beacon.y, self.beacon.x)?;
        for group in [&self.components, &self.hazards] {
            f.write_str(";")?;
            for (i, p) in group.iter().enumerate() {
                if i != 0 {
                    f.write_str(",")?;
                }
                write!(f, "{},{}", p.y, p.x)?;
            }
        }
        Ok(())
    }
}
