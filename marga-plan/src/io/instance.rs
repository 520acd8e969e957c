//! Instance block format.
//!
//! One instance is:
//!
//! ```text
//! M N
//! <M lines of N space-separated 0/1 tokens>     (0 = free, 1 = obstacle)
//! D1 D2 F1 F2 orientation
//! ```
//!
//! with `orientation` one of `nord`, `est`, `sud`, `ouest`. A document
//! holds any number of instances followed by a `0 0` sentinel line
//! (tolerated missing at end-of-input). Blank lines are ignored
//! everywhere.
//!
//! The reader validates well-formedness; out-of-range start/goal
//! coordinates are NOT a parse error — the planner answers those with
//! the failure sentinel.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::core::{Corner, Orientation};
use crate::error::{PlanError, Result};
use crate::grid::ObstacleGrid;
use crate::planning::RouteResult;

/// One route query: a grid plus start/goal corners and a starting facing.
#[derive(Clone, Debug)]
pub struct Instance {
    /// Obstacle grid the query runs against
    pub grid: ObstacleGrid,
    /// Start corner (D1, D2)
    pub start: Corner,
    /// Starting orientation
    pub orientation: Orientation,
    /// Goal corner (F1, F2)
    pub goal: Corner,
}

/// Read every instance block from `reader`, in document order.
pub fn read_instances<R: BufRead>(reader: R) -> Result<Vec<Instance>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    let mut instances = Vec::new();
    let mut at = 0;

    while at < lines.len() {
        let header = fields::<usize>(&lines[at], 2, "instance header")?;
        at += 1;
        let (rows, cols) = (header[0], header[1]);
        if rows == 0 && cols == 0 {
            break;
        }
        if rows == 0 || cols == 0 {
            return Err(PlanError::Parse(format!(
                "degenerate grid dimensions {} {}",
                rows, cols
            )));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            let line = lines
                .get(at)
                .ok_or_else(|| PlanError::Parse(format!("missing grid row {}", r)))?;
            at += 1;
            let row = fields::<u8>(line, cols, "grid row")?;
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    other => {
                        return Err(PlanError::Parse(format!(
                            "cell ({}, {}) is {}, expected 0 or 1",
                            r, c, other
                        )))
                    }
                }
            }
        }
        // Shape was enforced row by row
        let grid = ObstacleGrid::from_cells(rows, cols, cells)
            .ok_or_else(|| PlanError::Parse("inconsistent grid shape".into()))?;

        let line = lines
            .get(at)
            .ok_or_else(|| PlanError::Parse("missing query line".into()))?;
        at += 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 5 {
            return Err(PlanError::Parse(format!(
                "query line has {} fields, expected 'D1 D2 F1 F2 orientation'",
                tokens.len()
            )));
        }
        let mut coords = [0i32; 4];
        for (slot, token) in coords.iter_mut().zip(&tokens) {
            *slot = token
                .parse()
                .map_err(|_| PlanError::Parse(format!("bad coordinate '{}'", token)))?;
        }
        let orientation = Orientation::from_token(tokens[4])
            .ok_or_else(|| PlanError::Parse(format!("unknown orientation '{}'", tokens[4])))?;

        instances.push(Instance {
            grid,
            start: Corner::new(coords[0], coords[1]),
            orientation,
            goal: Corner::new(coords[2], coords[3]),
        });
    }

    Ok(instances)
}

/// Write instance blocks followed by the `0 0` sentinel.
pub fn write_instances<W: Write>(writer: &mut W, instances: &[Instance]) -> Result<()> {
    for instance in instances {
        let grid = &instance.grid;
        writeln!(writer, "{} {}", grid.rows(), grid.cols())?;
        for r in 0..grid.rows() {
            let row: Vec<&str> = (0..grid.cols())
                .map(|c| if grid.is_obstacle(r as i32, c as i32) { "1" } else { "0" })
                .collect();
            writeln!(writer, "{}", row.join(" "))?;
        }
        writeln!(
            writer,
            "{} {} {} {} {}",
            instance.start.i,
            instance.start.j,
            instance.goal.i,
            instance.goal.j,
            instance.orientation.token()
        )?;
    }
    writeln!(writer, "0 0")?;
    Ok(())
}

/// Result line for one query: `-1`, or the command count followed by
/// the command tokens.
pub fn format_result(result: &RouteResult) -> String {
    if !result.success {
        return "-1".to_string();
    }
    let mut line = result.len().to_string();
    for command in &result.commands {
        line.push(' ');
        line.push_str(command.token());
    }
    line
}

/// Parse exactly `expect` whitespace-separated values from a line.
fn fields<T: FromStr>(line: &str, expect: usize, what: &str) -> Result<Vec<T>> {
    let parsed: std::result::Result<Vec<T>, _> = line
        .split_whitespace()
        .map(|token| token.parse::<T>())
        .collect();
    match parsed {
        Ok(values) if values.len() == expect => Ok(values),
        Ok(values) => Err(PlanError::Parse(format!(
            "{} has {} fields, expected {}",
            what,
            values.len(),
            expect
        ))),
        Err(_) => Err(PlanError::Parse(format!("unparsable {}: '{}'", what, line))),
    }
}
