//! `GridMaze`: a 4-connected grid with walls, parsed from an ASCII map.
//!
//! Unit move costs make it a convenient world for comparing strategies:
//! breadth-first and uniform-cost agree on path length, and A* with
//! Manhattan agrees on cost. Depth-first keeps revisiting the cell it just
//! left on cyclic maps, so give it an expansion budget.

use std::collections::HashSet;
use std::convert::Infallible;

use thiserror::Error;

use redo_search::SearchDomain;

/// A cell coordinate `(col, row)`.
pub type Cell = (i32, i32);

/// Malformed ASCII map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// No `S` cell in the map.
    #[error("map has no start cell (`S`)")]
    MissingStart,
    /// No `G` cell in the map.
    #[error("map has no goal cell (`G`)")]
    MissingGoal,
    /// A character other than `#`, `.`, space, `S`, or `G`.
    #[error("unknown map character `{ch}` at column {col}, row {row}")]
    UnknownCell {
        ch: char,
        col: usize,
        row: usize,
    },
}

/// A rectangular maze. Rows grow downward; columns grow rightward.
#[derive(Debug, Clone)]
pub struct GridMaze {
    width: i32,
    height: i32,
    walls: HashSet<Cell>,
    start: Cell,
    goal: Cell,
}

impl GridMaze {
    /// Parse a maze from ASCII art: `#` wall, `.` or space open, `S` start,
    /// `G` goal. Lines may have different lengths; short lines are open on
    /// the right.
    ///
    /// # Errors
    ///
    /// Returns [`MapError`] for unknown characters or a missing `S`/`G`.
    pub fn from_ascii(map: &str) -> Result<Self, MapError> {
        let mut walls = HashSet::new();
        let mut start = None;
        let mut goal = None;
        let mut width = 0usize;
        let mut height = 0usize;

        for (row, line) in map.lines().enumerate() {
            height = row + 1;
            width = width.max(line.chars().count());
            for (col, ch) in line.chars().enumerate() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let cell = (col as i32, row as i32);
                match ch {
                    '#' => {
                        walls.insert(cell);
                    }
                    '.' | ' ' => {}
                    'S' => start = Some(cell),
                    'G' => goal = Some(cell),
                    other => {
                        return Err(MapError::UnknownCell {
                            ch: other,
                            col,
                            row,
                        })
                    }
                }
            }
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        Ok(Self {
            width: width as i32,
            height: height as i32,
            walls,
            start: start.ok_or(MapError::MissingStart)?,
            goal: goal.ok_or(MapError::MissingGoal)?,
        })
    }

    /// The `S` cell.
    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The `G` cell.
    #[must_use]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    fn open(&self, (x, y): Cell) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height && !self.walls.contains(&(x, y))
    }
}

impl SearchDomain for GridMaze {
    type State = Cell;
    type Error = Infallible;

    fn successors(&self, &(x, y): &Cell) -> Result<Vec<(Cell, f64)>, Infallible> {
        let moves = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        Ok(moves
            .iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&cell| self.open(cell))
            .map(|cell| (cell, 1.0))
            .collect())
    }

    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.goal
    }
}
