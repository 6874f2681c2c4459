/*
schulte.rs

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

//! Schulte table: click the numbers in ascending order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Puzzle, Validation};
use crate::grid::Position;

/// Cell of a Schulte table.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SchulteCell {
    pub value: u32,
    pub found: bool,
}

/// Schulte table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SchulteBoard {
    size: usize,
    cells: Vec<SchulteCell>,

    /// Value that the player must click next, starting at 1.
    next: u32,
}

impl SchulteBoard {
    /// Create a [`SchulteBoard`] object from the cell values in row-major order.
    ///
    /// Return None if the values are not a permutation of `1..=size*size`.
    pub fn from_values(size: usize, values: &[u32]) -> Option<Self> {
        let mut sorted: Vec<u32> = values.to_vec();
        sorted.sort_unstable();
        if sorted.len() != size * size || sorted.iter().zip(1..).any(|(v, i)| *v != i) {
            return None;
        }
        Some(Self::with_values(size, values))
    }

    /// Create a [`SchulteBoard`] object from values that the caller already checked.
    pub(crate) fn with_values(size: usize, values: &[u32]) -> Self {
        Self {
            size,
            cells: values
                .iter()
                .map(|v| SchulteCell {
                    value: *v,
                    found: false,
                })
                .collect(),
            next: 1,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the value the player must look for.
    pub fn next_value(&self) -> u32 {
        self.next
    }

    /// Return the cell at the given position.
    pub fn get(&self, pos: Position) -> Option<&SchulteCell> {
        if !pos.is_inside(self.size) {
            return None;
        }
        self.cells.get(pos.index(self.size))
    }

    /// Return the cells in row-major order.
    pub fn cells(&self) -> &[SchulteCell] {
        &self.cells
    }

    /// Return the position of the cell holding the given value.
    pub fn position_of(&self, value: u32) -> Option<Position> {
        self.cells
            .iter()
            .position(|c| c.value == value)
            .map(|i| Position::from_index(i, self.size))
    }
}

impl Puzzle for SchulteBoard {
    type Move = Position;

    fn validate_move(&self, pos: &Position) -> Validation<Self> {
        let Some(cell) = self.get(*pos) else {
            return Validation::ignored(self.clone());
        };
        // Clicking again on a number that was already found has no effect
        if cell.found || self.is_solved() {
            return Validation::ignored(self.clone());
        }
        if cell.value != self.next {
            return Validation::mistake(self.clone(), false);
        }
        let mut board: SchulteBoard = self.clone();
        board.cells[pos.index(self.size)].found = true;
        board.next += 1;
        Validation::accepted(board)
    }

    fn is_solved(&self) -> bool {
        self.next as usize > self.size * self.size
    }
}

impl fmt::Display for SchulteBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|c| format!("{:>2}", c.value)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> SchulteBoard {
        SchulteBoard::from_values(2, &[3, 1, 4, 2]).expect("not a permutation")
    }

    #[test]
    fn clicking_in_order_solves_the_board() {
        let mut b: SchulteBoard = board();
        for value in 1..=4 {
            assert!(!b.is_solved());
            let pos: Position = b.position_of(value).expect("missing value");
            let v = b.validate_move(&pos);
            assert!(v.changed);
            assert!(!v.mistake);
            b = v.board;
        }
        assert!(b.is_solved());
        assert_eq!(b.next_value(), 5);
        assert!(b.cells().iter().all(|c| c.found));
    }

    #[test]
    fn wrong_value_is_a_mistake() {
        let b: SchulteBoard = board();
        let v = b.validate_move(&Position::new(0, 0));
        assert!(v.mistake);
        assert!(!v.changed);
        assert_eq!(v.board.next_value(), 1);
    }

    #[test]
    fn found_number_click_is_ignored_not_a_mistake() {
        // A found number is not the expected one, but clicking it again never costs a mistake
        let b: SchulteBoard = board().validate_move(&Position::new(0, 1)).board;
        let v = b.validate_move(&Position::new(0, 1));
        assert!(!v.mistake);
        assert!(!v.changed);
        assert_eq!(v.board.next_value(), b.next_value());
    }

    #[test]
    fn outside_click_is_ignored() {
        let v = board().validate_move(&Position::new(5, 0));
        assert!(!v.mistake);
        assert!(!v.changed);
    }

    #[test]
    fn from_values_rejects_duplicates() {
        assert!(SchulteBoard::from_values(2, &[1, 1, 2, 3]).is_none());
        assert!(SchulteBoard::from_values(2, &[1, 2, 3]).is_none());
        assert!(SchulteBoard::from_values(2, &[0, 1, 2, 3]).is_none());
    }
}
