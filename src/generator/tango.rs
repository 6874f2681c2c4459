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

//! Generate a board for the tango game.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::rules::tango::{SYMBOLS_PER_LINE, TANGO_SIZE, TangoBoard, TangoCell};
use crate::settings::TangoSettings;

/// Max number of cell placements before falling back to the predefined board.
const MAX_ITERATIONS: usize = 100_000;

/// Predefined complete board (1 is a moon, 2 is a sun).
const FALLBACK_BOARD: [[u8; TANGO_SIZE]; TANGO_SIZE] = [
    [1, 1, 2, 1, 2, 2],
    [2, 2, 1, 2, 1, 1],
    [1, 2, 1, 1, 2, 2],
    [2, 1, 2, 2, 1, 1],
    [1, 1, 2, 2, 1, 2],
    [2, 2, 1, 1, 2, 1],
];

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum FillError {
    /// No possible board.
    NoBoard,

    /// No board found before the iteration limit.
    IterationsExceeded,
}

/// Fill a board cell by cell, in row-major order.
pub struct Filler {
    /// Number of iterations it took to fill the last board.
    pub iteration: usize,
}

impl Default for Filler {
    fn default() -> Self {
        Self::new()
    }
}

impl Filler {
    /// Create a [`Filler`] object.
    pub fn new() -> Self {
        Self { iteration: 0 }
    }

    /// Return a complete random board.
    ///
    /// # Errors
    ///
    /// The method returns an error if the number of iterations exceeds [`MAX_ITERATIONS`].
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<TangoCell>, FillError> {
        self.iteration = 0;
        let res: Result<Vec<TangoCell>, FillError> = self.fill(&[], rng);
        debug!("Tango board: {} iterations", self.iteration);
        res
    }

    /// Recursively fill the next cell.
    fn fill<R: Rng + ?Sized>(
        &mut self,
        cells: &[TangoCell],
        rng: &mut R,
    ) -> Result<Vec<TangoCell>, FillError> {
        if cells.len() == TANGO_SIZE * TANGO_SIZE {
            return Ok(cells.to_vec());
        }
        self.iteration += 1;
        if self.iteration > MAX_ITERATIONS {
            return Err(FillError::IterationsExceeded);
        }

        let mut symbols: [TangoCell; 2] = [TangoCell::Moon, TangoCell::Sun];
        symbols.shuffle(rng);
        for symbol in symbols {
            if !Self::can_place(cells, symbol) {
                continue;
            }
            let mut next: Vec<TangoCell> = cells.to_vec();
            next.push(symbol);
            match self.fill(&next, rng) {
                Ok(board) => return Ok(board),
                Err(FillError::IterationsExceeded) => return Err(FillError::IterationsExceeded),
                Err(FillError::NoBoard) => (),
            }
        }
        Err(FillError::NoBoard)
    }

    /// Whether the symbol can be placed in the next cell.
    fn can_place(cells: &[TangoCell], symbol: TangoCell) -> bool {
        let index: usize = cells.len();
        let (row, col) = (index / TANGO_SIZE, index % TANGO_SIZE);
        let at = |r: usize, c: usize| cells[r * TANGO_SIZE + c];

        // At most three of each symbol per line
        let in_row: usize = (0..col).filter(|c| at(row, *c) == symbol).count();
        let in_col: usize = (0..row).filter(|r| at(*r, col) == symbol).count();
        if in_row >= SYMBOLS_PER_LINE || in_col >= SYMBOLS_PER_LINE {
            return false;
        }

        // No three identical symbols in a row, ending at this cell
        if col >= 2 && at(row, col - 1) == symbol && at(row, col - 2) == symbol {
            return false;
        }
        if row >= 2 && at(row - 1, col) == symbol && at(row - 2, col) == symbol {
            return false;
        }
        true
    }
}

/// Return the predefined complete board.
fn fallback_board() -> Vec<TangoCell> {
    FALLBACK_BOARD
        .iter()
        .flatten()
        .map(|v| TangoCell::from_repr(*v).unwrap_or_default())
        .collect()
}

/// Return a complete random board.
pub fn complete_board<R: Rng + ?Sized>(rng: &mut R) -> Vec<TangoCell> {
    match Filler::new().generate(rng) {
        Ok(cells) => cells,
        Err(e) => {
            warn!("Cannot generate a tango board ({e:?}), using the predefined one");
            fallback_board()
        }
    }
}

/// Generate a random board.
pub fn generate(settings: &TangoSettings) -> TangoBoard {
    generate_with(settings, &mut rand::rng())
}

/// Generate a random board with the given random generator.
pub fn generate_with<R: Rng + ?Sized>(settings: &TangoSettings, rng: &mut R) -> TangoBoard {
    let solution: Vec<TangoCell> = complete_board(rng);

    let mut positions: Vec<usize> = (0..solution.len()).collect();
    positions.shuffle(rng);
    let mut cells: Vec<TangoCell> = solution.clone();
    for i in positions.iter().take(settings.cells_to_clear()) {
        cells[*i] = TangoCell::Empty;
    }
    debug!(
        "Tango board complexity {}: {} cells cleared",
        settings.complexity(),
        settings.cells_to_clear()
    );
    TangoBoard::with_solution(cells, solution)
}
