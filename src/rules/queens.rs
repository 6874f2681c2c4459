/*
queens.rs

Copyright 2025 Hervé Quatremain

This file is part of Brainplay.

Brainplay is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Brainplay is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Brainplay. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Queens game: place one queen per row, column, and colored region.
//!
//! Two queens cannot touch each other, diagonals included.
//! Placing a queen is never refused: the conflicts are computed after each move so that the
//! interface can highlight them, and the board stays editable.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use super::{Puzzle, Validation};
use crate::grid::Position;

/// Queens board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueensBoard {
    size: usize,

    /// Region identifier of each cell, in row-major order.
    regions: Vec<usize>,

    /// Whether a queen is placed on the cell, in row-major order.
    queens: Vec<bool>,

    /// Column of the queen in each row of the solution that seeded the regions.
    /// Empty when the board was not built by the generator.
    solution: Vec<usize>,
}

/// Player actions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueensMove {
    /// Place a queen on an empty cell, or remove the queen from an occupied cell.
    Toggle(Position),

    /// Move a queen to an empty cell.
    Drag { from: Position, to: Position },
}

/// Conflicts detected on a board.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Conflicts {
    /// Rows with more than one queen.
    pub rows: BTreeSet<usize>,

    /// Columns with more than one queen.
    pub cols: BTreeSet<usize>,

    /// Regions with more than one queen.
    pub regions: BTreeSet<usize>,

    /// Queens that touch another queen.
    pub adjacent: BTreeSet<Position>,
}

impl Conflicts {
    /// Whether there is no conflict at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
            && self.cols.is_empty()
            && self.regions.is_empty()
            && self.adjacent.is_empty()
    }
}

impl QueensBoard {
    /// Create a [`QueensBoard`] object without any queen.
    ///
    /// Return None if the number of cells does not match the board size, or if a region
    /// identifier is not lower than the board size.
    pub fn new(size: usize, regions: Vec<usize>) -> Option<Self> {
        if regions.len() != size * size || regions.iter().any(|r| *r >= size) {
            return None;
        }
        Some(Self {
            size,
            regions,
            queens: vec![false; size * size],
            solution: Vec::new(),
        })
    }

    /// Create a [`QueensBoard`] object from generated regions and the solution that seeded them.
    pub(crate) fn with_solution(size: usize, regions: Vec<usize>, solution: Vec<usize>) -> Self {
        debug_assert_eq!(regions.len(), size * size);
        Self {
            size,
            regions,
            queens: vec![false; size * size],
            solution,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the region identifiers in row-major order.
    pub fn regions(&self) -> &[usize] {
        &self.regions
    }

    /// Return the region of the given cell.
    pub fn region(&self, pos: Position) -> Option<usize> {
        if !pos.is_inside(self.size) {
            return None;
        }
        Some(self.regions[pos.index(self.size)])
    }

    /// Return the solution that seeded the regions, as one queen position per row.
    pub fn solution(&self) -> Vec<Position> {
        self.solution
            .iter()
            .enumerate()
            .map(|(row, col)| Position::new(row, *col))
            .collect()
    }

    /// Whether a queen is placed on the cell.
    pub fn has_queen(&self, pos: Position) -> bool {
        pos.is_inside(self.size) && self.queens[pos.index(self.size)]
    }

    /// Return the positions of all the queens.
    pub fn queens(&self) -> Vec<Position> {
        self.queens
            .iter()
            .enumerate()
            .filter(|(_, q)| **q)
            .map(|(i, _)| Position::from_index(i, self.size))
            .collect()
    }

    /// Compute the row, column, region, and adjacency conflicts.
    pub fn conflicts(&self) -> Conflicts {
        let queens: Vec<Position> = self.queens();
        let mut rows: HashMap<usize, usize> = HashMap::new();
        let mut cols: HashMap<usize, usize> = HashMap::new();
        let mut regions: HashMap<usize, usize> = HashMap::new();
        for q in &queens {
            *rows.entry(q.row).or_default() += 1;
            *cols.entry(q.col).or_default() += 1;
            *regions.entry(self.regions[q.index(self.size)]).or_default() += 1;
        }

        let crowded = |counts: HashMap<usize, usize>| -> BTreeSet<usize> {
            counts
                .into_iter()
                .filter(|(_, n)| *n > 1)
                .map(|(k, _)| k)
                .collect()
        };

        Conflicts {
            rows: crowded(rows),
            cols: crowded(cols),
            regions: crowded(regions),
            adjacent: queens
                .iter()
                .filter(|q| queens.iter().any(|other| q.touches(other)))
                .copied()
                .collect(),
        }
    }

    /// Return the queens involved in at least one conflict.
    pub fn conflicting_cells(&self) -> BTreeSet<Position> {
        let conflicts: Conflicts = self.conflicts();
        self.queens()
            .into_iter()
            .filter(|q| {
                conflicts.rows.contains(&q.row)
                    || conflicts.cols.contains(&q.col)
                    || conflicts.regions.contains(&self.regions[q.index(self.size)])
                    || conflicts.adjacent.contains(q)
            })
            .collect()
    }
}

impl Puzzle for QueensBoard {
    type Move = QueensMove;

    fn validate_move(&self, mv: &QueensMove) -> Validation<Self> {
        let mut board: QueensBoard = self.clone();
        match *mv {
            QueensMove::Toggle(pos) => {
                if !pos.is_inside(self.size) {
                    return Validation::ignored(board);
                }
                let i: usize = pos.index(self.size);
                board.queens[i] = !board.queens[i];
            }
            QueensMove::Drag { from, to } => {
                if from == to
                    || !to.is_inside(self.size)
                    || !self.has_queen(from)
                    || self.has_queen(to)
                {
                    return Validation::ignored(board);
                }
                board.queens[from.index(self.size)] = false;
                board.queens[to.index(self.size)] = true;
            }
        }
        Validation::accepted(board)
    }

    fn is_solved(&self) -> bool {
        let queens: Vec<Position> = self.queens();
        if queens.len() != self.size || !self.conflicts().is_empty() {
            return false;
        }
        // Each region holds exactly one queen
        let mut per_region: Vec<usize> = vec![0; self.size];
        for q in &queens {
            per_region[self.regions[q.index(self.size)]] += 1;
        }
        per_region.iter().all(|n| *n == 1)
    }
}

impl fmt::Display for QueensBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| {
                    let i: usize = row * self.size + col;
                    if self.queens[i] {
                        'Q'
                    } else {
                        char::from(b'A' + (self.regions[i] % 26) as u8)
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
