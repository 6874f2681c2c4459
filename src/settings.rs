/*
settings.rs

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

//! Per-game board settings.
//!
//! Each game has a closed settings object that is validated when it is created, so that the
//! generators never have to deal with unsupported parameters.
//! The settings also build the canonical `gameProps` key that identifies the board variant in
//! the achievement catalog and in the user records.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Supported targets for the digits game.
pub const DIGIT_TARGETS: [u8; 5] = [6, 7, 8, 9, 10];

/// Supported board sizes for the Schulte table.
pub const SCHULTE_SIZES: std::ops::RangeInclusive<usize> = 3..=9;

/// Supported board sizes for the queens game.
pub const QUEENS_SIZES: std::ops::RangeInclusive<usize> = 4..=8;

/// Supported complexity levels for the tango game.
pub const TANGO_COMPLEXITIES: std::ops::RangeInclusive<u8> = 1..=5;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum SettingsError {
    /// The digits target is not supported.
    UnsupportedTarget(u8),

    /// The board size is not supported for the digits target.
    SizeMismatch { target: u8, size: usize },

    /// The board size is outside the supported range.
    UnsupportedSize(usize),

    /// The tango complexity is outside the supported range.
    UnsupportedComplexity(u8),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::UnsupportedTarget(t) => write!(f, "unsupported target {t}"),
            SettingsError::SizeMismatch { target, size } => {
                write!(f, "board size {size} cannot be used with target {target}")
            }
            SettingsError::UnsupportedSize(s) => write!(f, "unsupported board size {s}"),
            SettingsError::UnsupportedComplexity(c) => write!(f, "unsupported complexity {c}"),
        }
    }
}

impl Error for SettingsError {}

/// Settings for the digits (sum-pairing) game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct DigitSettings {
    target: u8,
    size: usize,
}

impl DigitSettings {
    /// Create a [`DigitSettings`] object.
    ///
    /// Targets 6 and 7 use a 7x7 board, targets 9 and 10 use a 9x9 board, and target 8 can use
    /// both.
    pub fn new(target: u8, size: usize) -> Result<Self, SettingsError> {
        let allowed: &[usize] = match target {
            6 | 7 => &[7],
            8 => &[7, 9],
            9 | 10 => &[9],
            _ => return Err(SettingsError::UnsupportedTarget(target)),
        };
        if !allowed.contains(&size) {
            return Err(SettingsError::SizeMismatch { target, size });
        }
        Ok(Self { target, size })
    }

    /// Create the settings with the default board size for the target.
    pub fn with_target(target: u8) -> Result<Self, SettingsError> {
        let size: usize = if target >= 9 { 9 } else { 7 };
        Self::new(target, size)
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the board variant key, such as `"7x6"`.
    pub fn props(&self) -> String {
        format!("{}x{}", self.size, self.target)
    }
}

/// Settings for the Schulte table.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SchulteSettings {
    size: usize,
}

impl SchulteSettings {
    /// Create a [`SchulteSettings`] object.
    pub fn new(size: usize) -> Result<Self, SettingsError> {
        if !SCHULTE_SIZES.contains(&size) {
            return Err(SettingsError::UnsupportedSize(size));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the board variant key, such as `"5x5"`.
    pub fn props(&self) -> String {
        format!("{0}x{0}", self.size)
    }
}

/// Settings for the queens game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct QueensSettings {
    size: usize,
}

impl QueensSettings {
    /// Create a [`QueensSettings`] object.
    pub fn new(size: usize) -> Result<Self, SettingsError> {
        if !QUEENS_SIZES.contains(&size) {
            return Err(SettingsError::UnsupportedSize(size));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the board variant key, such as `"6x6"`.
    pub fn props(&self) -> String {
        format!("{0}x{0}", self.size)
    }
}

/// Settings for the tango game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct TangoSettings {
    complexity: u8,
}

impl TangoSettings {
    /// Create a [`TangoSettings`] object.
    pub fn new(complexity: u8) -> Result<Self, SettingsError> {
        if !TANGO_COMPLEXITIES.contains(&complexity) {
            return Err(SettingsError::UnsupportedComplexity(complexity));
        }
        Ok(Self { complexity })
    }

    pub fn complexity(&self) -> u8 {
        self.complexity
    }

    /// Number of cells that are cleared from the complete board.
    pub fn cells_to_clear(&self) -> usize {
        self.complexity as usize * 4
    }

    /// Return the board variant key, such as `"3"`.
    pub fn props(&self) -> String {
        self.complexity.to_string()
    }
}
