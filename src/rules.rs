/*
rules.rs

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

//! Move validation and win detection.
//!
//! Each game has its own board type that implements the [`Puzzle`] trait.
//! Boards are never modified in place: validating a move returns a new board in a
//! [`Validation`] object, and the caller replaces its board with it.
//! Keeping the previous boards gives undo for free (see [`crate::round::Round`]).
//!
//! Invalid moves (selecting a cell that cannot be selected, editing a locked cell...) are
//! silently ignored.
//! Mistakes (a valid selection with a wrong outcome) are reported in the [`Validation`] object
//! so that the caller can update the mistake counter.

pub mod digits;
pub mod queens;
pub mod schulte;
pub mod tango;

/// Result of the validation of a move.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation<B> {
    /// Board after the move.
    /// When the move is ignored or is a mistake, this is a copy of the original board.
    pub board: B,

    /// Whether the move was a mistake.
    pub mistake: bool,

    /// Whether the move changed the board.
    pub changed: bool,
}

impl<B> Validation<B> {
    /// The move is not allowed and has no effect.
    pub fn ignored(board: B) -> Self {
        Self {
            board,
            mistake: false,
            changed: false,
        }
    }

    /// The move is valid and produced a new board.
    pub fn accepted(board: B) -> Self {
        Self {
            board,
            mistake: false,
            changed: true,
        }
    }

    /// The move is valid but wrong.
    pub fn mistake(board: B, changed: bool) -> Self {
        Self {
            board,
            mistake: true,
            changed,
        }
    }
}

/// Board of a game that the player can interact with.
pub trait Puzzle: Clone {
    /// Player action.
    type Move;

    /// Evaluate the move against the board and return the resulting board.
    fn validate_move(&self, mv: &Self::Move) -> Validation<Self>;

    /// Whether the board is in its winning state.
    fn is_solved(&self) -> bool;
}
