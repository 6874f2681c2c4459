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

//! Generate a board for the digits game.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::rules::digits::DigitBoard;
use crate::settings::DigitSettings;

/// Number of cells for each value, indexed by `(target, size)`.
///
/// Complementary values (that sum to the target) have the same count, so that every value has a
/// partner somewhere on the board. The counts sum to `size * size - 1`.
fn distribution(target: u8, size: usize) -> &'static [(u8, usize)] {
    match (target, size) {
        (6, 7) => &[(1, 8), (2, 8), (3, 16), (4, 8), (5, 8)],
        (7, 7) => &[(1, 8), (2, 8), (3, 8), (4, 8), (5, 8), (6, 8)],
        (8, 7) => &[(1, 8), (2, 8), (3, 6), (4, 4), (5, 6), (6, 8), (7, 8)],
        (8, 9) => &[(1, 12), (2, 12), (3, 12), (4, 8), (5, 12), (6, 12), (7, 12)],
        (9, 9) => &[
            (1, 10),
            (2, 10),
            (3, 10),
            (4, 10),
            (5, 10),
            (6, 10),
            (7, 10),
            (8, 10),
        ],
        (10, 9) => &[
            (1, 10),
            (2, 10),
            (3, 10),
            (4, 8),
            (5, 4),
            (6, 8),
            (7, 10),
            (8, 10),
            (9, 10),
        ],
        // DigitSettings only accepts the pairs above
        _ => &[],
    }
}

/// Return the list of values to place on the board, before shuffling.
pub fn values(settings: &DigitSettings) -> Vec<u8> {
    distribution(settings.target(), settings.size())
        .iter()
        .flat_map(|(value, count)| std::iter::repeat_n(*value, *count))
        .collect()
}

/// Generate a random board.
pub fn generate(settings: &DigitSettings) -> DigitBoard {
    generate_with(settings, &mut rand::rng())
}

/// Generate a random board with the given random generator.
pub fn generate_with<R: Rng + ?Sized>(settings: &DigitSettings, rng: &mut R) -> DigitBoard {
    let size: usize = settings.size();
    let center: usize = (size / 2) * size + size / 2;

    let mut values: Vec<u8> = values(settings);
    values.shuffle(rng);
    debug!(
        "Digits board {}: {} values, center cell {center}",
        settings.props(),
        values.len()
    );

    let mut values = values.into_iter();
    let cells: Vec<Option<u8>> = (0..size * size)
        .map(|i| if i == center { None } else { values.next() })
        .collect();

    DigitBoard::with_cells(size, settings.target(), cells)
}
