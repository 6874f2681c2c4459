/*
tango.rs

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

//! Tango game: fill the 6x6 grid with suns and moons.
//!
//! Every row and column holds three suns and three moons, and no line can have three identical
//! symbols in a row.
//! The cells that are filled when the game starts are locked.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use strum_macros::FromRepr;

use super::{Puzzle, Validation};
use crate::grid::Position;

/// Width and height of the board.
pub const TANGO_SIZE: usize = 6;

/// Number of each symbol in a complete row or column.
pub const SYMBOLS_PER_LINE: usize = TANGO_SIZE / 2;

/// Value of a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, FromRepr)]
#[repr(u8)]
pub enum TangoCell {
    #[default]
    Empty = 0,
    Moon = 1,
    Sun = 2,
}

/// Mouse button used to click a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    /// Cycles between empty and sun.
    Primary,

    /// Cycles between empty and moon.
    Secondary,
}

/// Click on a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TangoMove {
    pub pos: Position,
    pub button: Button,
}

impl TangoMove {
    pub fn new(pos: Position, button: Button) -> Self {
        Self { pos, button }
    }
}

/// Tango board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TangoBoard {
    /// Cells in row-major order.
    cells: Vec<TangoCell>,

    /// Cells that were filled when the game started, and that the player cannot change.
    locked: Vec<bool>,

    /// Complete board the puzzle was built from.
    /// Empty when the board was not built by the generator.
    solution: Vec<TangoCell>,
}

impl TangoBoard {
    /// Create a [`TangoBoard`] object from the initial cells. Non-empty cells are locked.
    ///
    /// Return None if the number of cells is not 36.
    pub fn new(cells: Vec<TangoCell>) -> Option<Self> {
        if cells.len() != TANGO_SIZE * TANGO_SIZE {
            return None;
        }
        Some(Self::with_solution(cells, Vec::new()))
    }

    /// Create a [`TangoBoard`] object from generated cells and the complete board they come from.
    pub(crate) fn with_solution(cells: Vec<TangoCell>, solution: Vec<TangoCell>) -> Self {
        let locked: Vec<bool> = cells.iter().map(|c| *c != TangoCell::Empty).collect();
        Self {
            cells,
            locked,
            solution,
        }
    }

    /// Return the complete board the puzzle was built from.
    pub fn solution(&self) -> &[TangoCell] {
        &self.solution
    }

    /// Return the cell at the given position.
    pub fn get(&self, pos: Position) -> Option<TangoCell> {
        if !pos.is_inside(TANGO_SIZE) {
            return None;
        }
        Some(self.cells[pos.index(TANGO_SIZE)])
    }

    /// Return the cells in row-major order.
    pub fn cells(&self) -> &[TangoCell] {
        &self.cells
    }

    /// Whether the player can change the cell.
    pub fn is_editable(&self, pos: Position) -> bool {
        pos.is_inside(TANGO_SIZE) && !self.locked[pos.index(TANGO_SIZE)]
    }

    /// Number of empty cells.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c == TangoCell::Empty).count()
    }

    /// Return the cells that break a rule.
    ///
    /// A cell is reported when it is part of three identical consecutive symbols, or when its
    /// symbol appears more than three times in its row or column.
    pub fn errors(&self) -> BTreeSet<Position> {
        let mut errors: BTreeSet<Position> = BTreeSet::new();
        let rows = (0..TANGO_SIZE).map(|r| (0..TANGO_SIZE).map(move |c| Position::new(r, c)));
        let cols = (0..TANGO_SIZE).map(|c| (0..TANGO_SIZE).map(move |r| Position::new(r, c)));
        for line in rows
            .map(|l| l.collect::<Vec<Position>>())
            .chain(cols.map(|l| l.collect::<Vec<Position>>()))
        {
            self.line_errors(&line, &mut errors);
        }
        errors
    }

    fn line_errors(&self, line: &[Position], errors: &mut BTreeSet<Position>) {
        let values: Vec<TangoCell> = line.iter().map(|p| self.cells[p.index(TANGO_SIZE)]).collect();

        for (i, w) in values.windows(3).enumerate() {
            if w[0] != TangoCell::Empty && w[0] == w[1] && w[1] == w[2] {
                errors.extend(&line[i..i + 3]);
            }
        }

        for symbol in [TangoCell::Moon, TangoCell::Sun] {
            if values.iter().filter(|v| **v == symbol).count() > SYMBOLS_PER_LINE {
                errors.extend(
                    line.iter()
                        .zip(&values)
                        .filter(|(_, v)| **v == symbol)
                        .map(|(p, _)| *p),
                );
            }
        }
    }
}

impl Puzzle for TangoBoard {
    type Move = TangoMove;

    fn validate_move(&self, mv: &TangoMove) -> Validation<Self> {
        if !self.is_editable(mv.pos) {
            return Validation::ignored(self.clone());
        }
        let i: usize = mv.pos.index(TANGO_SIZE);
        let symbol: TangoCell = match mv.button {
            Button::Primary => TangoCell::Sun,
            Button::Secondary => TangoCell::Moon,
        };
        let mut board: TangoBoard = self.clone();
        board.cells[i] = if self.cells[i] == symbol {
            TangoCell::Empty
        } else {
            symbol
        };
        if board.cells[i] != TangoCell::Empty && board.errors().contains(&mv.pos) {
            return Validation::mistake(board, true);
        }
        Validation::accepted(board)
    }

    fn is_solved(&self) -> bool {
        self.empty_cells() == 0 && self.errors().is_empty()
    }
}

impl fmt::Display for TangoBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(TANGO_SIZE) {
            let line: String = row
                .iter()
                .map(|c| match c {
                    TangoCell::Empty => '.',
                    TangoCell::Moon => 'M',
                    TangoCell::Sun => 'S',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse a board where `M` is a moon, `S` a sun, and any other character an empty cell.
    fn parse(rows: &[&str]) -> TangoBoard {
        let cells: Vec<TangoCell> = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|c| match c {
                'M' => TangoCell::Moon,
                'S' => TangoCell::Sun,
                _ => TangoCell::Empty,
            })
            .collect();
        TangoBoard::new(cells).expect("wrong number of cells")
    }

    const SOLVED: [&str; 6] = ["MMSMSS", "SSMSMM", "MSMMSS", "SMSSMM", "MMSSMS", "SSMMSM"];

    #[test]
    fn solved_board() {
        let board: TangoBoard = parse(&SOLVED);
        assert!(board.errors().is_empty());
        assert!(board.is_solved());
        assert!(board.is_solved());
    }

    #[test]
    fn three_in_a_row_is_flagged() {
        let board: TangoBoard = parse(&["SSS...", "......", "......", "......", "......", "......"]);
        assert_eq!(
            board.errors(),
            BTreeSet::from([Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)])
        );
    }

    #[test]
    fn three_in_a_column_is_flagged() {
        let board: TangoBoard = parse(&["M.....", "M.....", "M.....", "......", "......", "......"]);
        assert_eq!(board.errors().len(), 3);
    }

    #[test]
    fn too_many_symbols_in_a_line() {
        let board: TangoBoard = parse(&["SSMSS.", "......", "......", "......", "......", "......"]);
        // The first row holds four suns
        let errors: BTreeSet<Position> = board.errors();
        assert!(errors.contains(&Position::new(0, 0)));
        assert!(!errors.contains(&Position::new(0, 2)));
    }

    #[test]
    fn click_cycles_between_empty_and_symbol() {
        let board: TangoBoard = parse(&["......"; 6]);
        let pos: Position = Position::new(2, 2);
        let v = board.validate_move(&TangoMove::new(pos, Button::Primary));
        assert_eq!(v.board.get(pos), Some(TangoCell::Sun));
        let v = v.board.validate_move(&TangoMove::new(pos, Button::Primary));
        assert_eq!(v.board.get(pos), Some(TangoCell::Empty));
        let v = v.board.validate_move(&TangoMove::new(pos, Button::Secondary));
        assert_eq!(v.board.get(pos), Some(TangoCell::Moon));
        let v = v.board.validate_move(&TangoMove::new(pos, Button::Primary));
        assert_eq!(v.board.get(pos), Some(TangoCell::Sun));
    }

    #[test]
    fn locked_cells_are_ignored() {
        let board: TangoBoard = parse(&SOLVED);
        let v = board.validate_move(&TangoMove::new(Position::new(0, 0), Button::Primary));
        assert!(!v.changed);
        assert_eq!(v.board, board);
    }

    #[test]
    fn move_creating_an_error_is_a_mistake() {
        let board: TangoBoard = parse(&["SS....", "......", "......", "......", "......", "......"]);
        let v = board.validate_move(&TangoMove::new(Position::new(0, 2), Button::Primary));
        assert!(v.mistake);
        assert!(v.changed);
        assert_eq!(v.board.errors().len(), 3);
    }

    #[test]
    fn filling_the_last_cell_solves_the_board() {
        let mut rows: [&str; 6] = SOLVED;
        rows[5] = "SSMMS.";
        let board: TangoBoard = parse(&rows);
        assert!(!board.is_solved());
        let v = board.validate_move(&TangoMove::new(Position::new(5, 5), Button::Secondary));
        assert!(!v.mistake);
        assert!(v.board.is_solved());
    }
}
