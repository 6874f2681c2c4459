/*
grid.rs

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

//! Cell positions on the square boards shared by all the games.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offsets of the four orthogonal neighbors.
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Offsets of the eight surrounding neighbors (orthogonal and diagonal).
const SURROUNDING: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Position of a cell in a square board.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build the position from an index in a row-major vector.
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Return the index of the position in a row-major vector.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Whether the position is inside a board of the given size.
    pub fn is_inside(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Return the four orthogonal neighbors that are inside the board.
    pub fn orthogonal(&self, size: usize) -> Vec<Position> {
        self.offsets(&ORTHOGONAL, size)
    }

    /// Return the eight surrounding neighbors that are inside the board.
    pub fn surrounding(&self, size: usize) -> Vec<Position> {
        self.offsets(&SURROUNDING, size)
    }

    /// Whether the two positions touch, diagonally included.
    pub fn touches(&self, other: &Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    fn offsets(&self, offsets: &[(isize, isize)], size: usize) -> Vec<Position> {
        offsets
            .iter()
            .filter_map(|(dr, dc)| {
                let row: usize = self.row.checked_add_signed(*dr)?;
                let col: usize = self.col.checked_add_signed(*dc)?;
                let p: Position = Position { row, col };
                if p.is_inside(size) { Some(p) } else { None }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_surrounding_neighbors() {
        let p: Position = Position::new(0, 0);
        assert_eq!(p.surrounding(4).len(), 3);
        assert_eq!(p.orthogonal(4).len(), 2);
    }

    #[test]
    fn center_has_eight_surrounding_neighbors() {
        let p: Position = Position::new(3, 3);
        assert_eq!(p.surrounding(7).len(), 8);
        assert_eq!(p.orthogonal(7).len(), 4);
    }

    #[test]
    fn index_conversion() {
        let p: Position = Position::from_index(17, 7);
        assert_eq!(p, Position::new(2, 3));
        assert_eq!(p.index(7), 17);
    }

    #[test]
    fn touches_includes_diagonals() {
        let p: Position = Position::new(2, 2);
        assert!(p.touches(&Position::new(1, 1)));
        assert!(p.touches(&Position::new(2, 3)));
        assert!(!p.touches(&Position::new(2, 2)));
        assert!(!p.touches(&Position::new(4, 2)));
    }
}
