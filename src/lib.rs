/*
lib.rs

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

//! Board generation, move validation, session lifecycle, and achievements for the Brainplay
//! brain-training games.
//!
//! * [`generator`] creates the boards of the four games.
//! * [`rules`] validates the moves and detects the wins.
//! * [`round`] plays one board and reports to the session controller in [`game`].
//! * [`achievements`] records the wins and unlocks the tiers of the [`catalog`].
//! * [`saver`] persists the user data and the settings.

pub mod achievements;
pub mod catalog;
pub mod cli_options;
pub mod game;
pub mod generator;
pub mod grid;
pub mod input_errors;
pub mod modifications;
pub mod profile;
pub mod round;
pub mod rules;
pub mod saver;
pub mod settings;
