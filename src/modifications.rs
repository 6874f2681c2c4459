/*
modifications.rs

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

//! Gameplay modifiers.
//!
//! The player can turn off the assist highlighting of each game in the settings.
//! Turning off an assist activates the matching [`Modification`], which is recorded with the
//! score so that the scores can be filtered later.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::catalog::GameId;
use crate::saver::Persistence;

/// Setting key: highlight the cells that can be selected in the digits game.
pub const SHOW_AVAILABLE_CELLS: &str = "show-available-cells";

/// Setting key: highlight the numbers already found in the Schulte table.
pub const SHOW_FOUND_CELLS: &str = "show-found-cells";

/// Setting key: highlight the conflicting queens.
pub const SHOW_CONFLICTS: &str = "show-conflicts";

/// Setting key: highlight the cells that break a tango rule.
pub const SHOW_ERRORS: &str = "show-errors";

/// Gameplay modifier.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Modification {
    /// The selectable cells are not highlighted (digits).
    HideAvailableCells,

    /// The numbers already found are not highlighted (Schulte).
    HideFoundCells,

    /// The conflicting queens are not highlighted (queens).
    HideConflicts,

    /// The rule violations are not highlighted (tango).
    HideErrors,
}

impl Modification {
    /// All the modifiers.
    pub const ALL: [Modification; 4] = [
        Modification::HideAvailableCells,
        Modification::HideFoundCells,
        Modification::HideConflicts,
        Modification::HideErrors,
    ];

    /// Return the setting that controls the modifier.
    pub fn setting_key(&self) -> &'static str {
        match self {
            Modification::HideAvailableCells => SHOW_AVAILABLE_CELLS,
            Modification::HideFoundCells => SHOW_FOUND_CELLS,
            Modification::HideConflicts => SHOW_CONFLICTS,
            Modification::HideErrors => SHOW_ERRORS,
        }
    }

    /// Return the game the modifier applies to.
    pub fn game_id(&self) -> GameId {
        match self {
            Modification::HideAvailableCells => GameId::Digits,
            Modification::HideFoundCells => GameId::Schulte,
            Modification::HideConflicts => GameId::Queens,
            Modification::HideErrors => GameId::Tango,
        }
    }
}

/// Return the modifiers that are active for the game, according to the settings.
///
/// The assists are enabled by default, so a missing setting does not activate any modifier.
pub fn active_modifications<P: Persistence + ?Sized>(game_id: GameId, store: &P) -> Vec<Modification> {
    Modification::ALL
        .iter()
        .filter(|m| m.game_id() == game_id && !store.get_bool(m.setting_key(), true))
        .copied()
        .collect()
}
