/*
digits.rs

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

//! Digits game: clear pairs of cells that sum to the target.
//!
//! Only the cells that touch an empty cell (diagonals included) can be selected.
//! At the beginning of the game, only the center cell is empty, so the playable area grows from
//! the center as the player clears pairs.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{Puzzle, Validation};
use crate::grid::Position;

/// Digits board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DigitBoard {
    size: usize,
    target: u8,

    /// Cells in row-major order. `None` is an empty cell.
    cells: Vec<Option<u8>>,
}

/// Selection of two cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DigitMove {
    pub first: Position,
    pub second: Position,
}

impl DigitMove {
    pub fn new(first: Position, second: Position) -> Self {
        Self { first, second }
    }
}

impl DigitBoard {
    /// Create a [`DigitBoard`] object from its cells.
    ///
    /// Return None if the number of cells does not match the board size.
    pub fn from_cells(size: usize, target: u8, cells: Vec<Option<u8>>) -> Option<Self> {
        if cells.len() != size * size {
            return None;
        }
        Some(Self {
            size,
            target,
            cells,
        })
    }

    /// Create a [`DigitBoard`] object from cells that the caller already sized.
    pub(crate) fn with_cells(size: usize, target: u8, cells: Vec<Option<u8>>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self {
            size,
            target,
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    /// Return the value of a cell, or None if the cell is empty or outside the board.
    pub fn get(&self, pos: Position) -> Option<u8> {
        if !pos.is_inside(self.size) {
            return None;
        }
        self.cells[pos.index(self.size)]
    }

    /// Return the cells in row-major order.
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    /// Number of cells that still hold a value.
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether the cell holds a value and touches an empty cell.
    pub fn is_available(&self, pos: Position) -> bool {
        self.get(pos).is_some()
            && pos
                .surrounding(self.size)
                .iter()
                .any(|p| self.cells[p.index(self.size)].is_none())
    }

    /// Return the cells that the player can select.
    pub fn available_cells(&self) -> HashSet<Position> {
        (0..self.cells.len())
            .map(|i| Position::from_index(i, self.size))
            .filter(|p| self.is_available(*p))
            .collect()
    }

    /// Whether the two values sum to the target.
    pub fn is_pair(&self, a: u8, b: u8) -> bool {
        u16::from(a) + u16::from(b) == u16::from(self.target)
    }

    /// Whether at least one available pair sums to the target.
    pub fn has_available_pair(&self) -> bool {
        let available: Vec<u8> = self
            .available_cells()
            .iter()
            .filter_map(|p| self.get(*p))
            .collect();
        available.iter().enumerate().any(|(i, a)| {
            available[i + 1..]
                .iter()
                .any(|b| self.is_pair(*a, *b))
        })
    }
}

impl Puzzle for DigitBoard {
    type Move = DigitMove;

    fn validate_move(&self, mv: &DigitMove) -> Validation<Self> {
        if mv.first == mv.second
            || !self.is_available(mv.first)
            || !self.is_available(mv.second)
        {
            return Validation::ignored(self.clone());
        }
        let (Some(a), Some(b)) = (self.get(mv.first), self.get(mv.second)) else {
            return Validation::ignored(self.clone());
        };
        if !self.is_pair(a, b) {
            return Validation::mistake(self.clone(), false);
        }
        let mut board: DigitBoard = self.clone();
        board.cells[mv.first.index(self.size)] = None;
        board.cells[mv.second.index(self.size)] = None;
        Validation::accepted(board)
    }

    fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}

impl fmt::Display for DigitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row
                .iter()
                .map(|c| match c {
                    Some(v) => format!("{v:>2}"),
                    None => " .".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
