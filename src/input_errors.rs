/*
input_errors.rs

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

//! Manage the player's mistake counter.

use log::debug;

use serde::{Deserialize, Serialize};

/// Manage the mistake counter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InputErrors {
    // Number of mistakes.
    count: usize,

    // Number of mistakes that loses the game, or None if the game cannot be lost.
    limit: Option<usize>,
}

impl InputErrors {
    /// Create an [`InputErrors`] object.
    pub fn new(limit: Option<usize>) -> Self {
        Self { count: 0, limit }
    }

    /// Reset the counter.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Return the number of mistakes.
    pub fn get_errors(&self) -> usize {
        self.count
    }

    /// Return the number of mistakes the player can still make before losing.
    pub fn remaining(&self) -> Option<usize> {
        self.limit.map(|l| l.saturating_sub(self.count))
    }

    /// Whether the player has not made any mistake so far.
    pub fn is_perfect(&self) -> bool {
        self.count == 0
    }

    /// Whether the player reached the mistake limit.
    pub fn is_exhausted(&self) -> bool {
        self.limit.is_some_and(|l| self.count >= l)
    }

    /// Count a mistake and return whether the limit is reached.
    pub fn add_mistake(&mut self) -> bool {
        self.count += 1;
        debug!("Mistake: error count + 1 = {}", self.count);
        self.is_exhausted()
    }
}
