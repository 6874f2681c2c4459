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

//! Generate a Schulte table.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::rules::schulte::SchulteBoard;
use crate::settings::SchulteSettings;

/// Generate a random table.
pub fn generate(settings: &SchulteSettings) -> SchulteBoard {
    generate_with(settings, &mut rand::rng())
}

/// Generate a random table with the given random generator.
pub fn generate_with<R: Rng + ?Sized>(settings: &SchulteSettings, rng: &mut R) -> SchulteBoard {
    let size: usize = settings.size();
    let mut values: Vec<u32> = (1..=(size * size) as u32).collect();
    values.shuffle(rng);
    debug!("Schulte table {}: {values:?}", settings.props());
    SchulteBoard::with_values(size, &values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Puzzle;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn clicking_in_order_wins() {
        let settings: SchulteSettings = SchulteSettings::new(4).expect("invalid settings");
        let mut board: SchulteBoard = generate(&settings);
        for value in 1..=16 {
            let pos = board.position_of(value).expect("missing value");
            board = board.validate_move(&pos).board;
        }
        assert!(board.is_solved());
    }

    proptest! {
        #[test]
        fn board_is_a_permutation(seed in any::<u64>(), size in 3usize..=9) {
            let settings: SchulteSettings = SchulteSettings::new(size).expect("invalid settings");
            let board: SchulteBoard = generate_with(&settings, &mut StdRng::seed_from_u64(seed));
            let mut values: Vec<u32> = board.cells().iter().map(|c| c.value).collect();
            values.sort_unstable();
            let expected: Vec<u32> = (1..=(size * size) as u32).collect();
            prop_assert_eq!(values, expected);
            prop_assert!(board.cells().iter().all(|c| !c.found));
        }
    }
}
