/*
generator.rs

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

//! Generate random boards for the games.
//!
//! Each module provides a `generate` function that uses the thread random generator, and a
//! `generate_with` function that takes the random generator to use, so that a seeded generator
//! can reproduce a board.
//!
//! * [`digits`] expands a fixed distribution of values for the target and board size, shuffles
//!   it, and leaves the center cell empty.
//! * [`schulte`] shuffles the numbers from 1 to size².
//! * [`queens`] solves a random N-queens placement and grows one region around each queen.
//! * [`tango`] builds a complete board by backtracking and clears some cells according to the
//!   complexity level.
//!
//! The backtracking generators stop after a fixed number of iterations and fall back to a
//! predefined board. This should not happen for the supported board sizes.

pub mod digits;
pub mod queens;
pub mod schulte;
pub mod tango;
