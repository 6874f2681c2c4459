/*
profile.rs

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

//! Per-user progress: achievements and game records.
//!
//! The main object, [`UserData`], holds the unlocked achievement tiers and the full list of the
//! games the user won.
//! It is saved after every change and restored when the user profile is selected.
//! See the [`crate::saver`] module that saves and restores the [`UserData`] object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::GameId;
use crate::modifications::Modification;

/// Number of entries returned for a scoreboard.
pub const BOARD_SIZE: usize = 10;

/// Progress of the user for an achievement of the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    pub game_id: GameId,
    pub game_props: String,

    /// Unlocked status of each tier, in the order of the catalog thresholds.
    unlocked_tiers: Vec<bool>,
}

impl UserAchievement {
    /// Create a [`UserAchievement`] object with all the tiers locked.
    pub fn new(game_id: GameId, game_props: &str, tiers: usize) -> Self {
        Self {
            game_id,
            game_props: game_props.to_string(),
            unlocked_tiers: vec![false; tiers],
        }
    }

    /// Return the unlocked status of each tier.
    pub fn unlocked_tiers(&self) -> &[bool] {
        &self.unlocked_tiers
    }

    /// Whether the tier is unlocked.
    pub fn is_unlocked(&self, tier: usize) -> bool {
        self.unlocked_tiers.get(tier).copied().unwrap_or(false)
    }

    /// Unlock the tier and return whether it was locked before.
    ///
    /// Tiers are never locked again.
    pub fn unlock(&mut self, tier: usize) -> bool {
        if tier >= self.unlocked_tiers.len() {
            self.unlocked_tiers.resize(tier + 1, false);
        }
        let newly: bool = !self.unlocked_tiers[tier];
        self.unlocked_tiers[tier] = true;
        newly
    }

    /// Make sure there is a status for each tier of the catalog.
    pub fn ensure_tiers(&mut self, tiers: usize) {
        if self.unlocked_tiers.len() < tiers {
            self.unlocked_tiers.resize(tiers, false);
        }
    }
}

/// Game that the user won.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserGameRecord {
    pub game_id: GameId,
    pub game_props: String,

    /// Elapsed seconds, or number of correct answers for the count-based games.
    pub score: u64,

    /// Whether the game was won without any mistake.
    pub is_perfect: bool,

    /// Gameplay modifiers that were active during the game.
    #[serde(rename = "modification", default)]
    pub modifications: Vec<Modification>,

    /// Completion timestamp.
    pub played: DateTime<Utc>,
}

/// Persisted data of a user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub username: String,

    #[serde(default)]
    achievements: Vec<UserAchievement>,

    #[serde(default)]
    game_records: Vec<UserGameRecord>,
}

impl UserData {
    /// Create a [`UserData`] object for a new user.
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            achievements: Vec::new(),
            game_records: Vec::new(),
        }
    }

    /// Return the progress of all the achievements.
    pub fn achievements(&self) -> &[UserAchievement] {
        &self.achievements
    }

    /// Return the progress for the given achievement.
    pub fn achievement(&self, game_id: GameId, game_props: &str) -> Option<&UserAchievement> {
        self.achievements
            .iter()
            .find(|a| a.game_id == game_id && a.game_props == game_props)
    }

    /// Return the progress for the given achievement, creating it if needed.
    pub fn achievement_mut(
        &mut self,
        game_id: GameId,
        game_props: &str,
        tiers: usize,
    ) -> &mut UserAchievement {
        let index: usize = match self
            .achievements
            .iter()
            .position(|a| a.game_id == game_id && a.game_props == game_props)
        {
            Some(i) => i,
            None => {
                self.achievements
                    .push(UserAchievement::new(game_id, game_props, tiers));
                self.achievements.len() - 1
            }
        };
        let achievement: &mut UserAchievement = &mut self.achievements[index];
        achievement.ensure_tiers(tiers);
        achievement
    }

    /// Return all the game records, in the order they were added.
    pub fn game_records(&self) -> &[UserGameRecord] {
        &self.game_records
    }

    /// Add a record.
    pub fn add_record(&mut self, record: UserGameRecord) {
        self.game_records.push(record);
    }

    /// Return the records for the given game variant, in the order they were added.
    pub fn records(&self, game_id: GameId, game_props: &str) -> Vec<&UserGameRecord> {
        self.game_records
            .iter()
            .filter(|r| r.game_id == game_id && r.game_props == game_props)
            .collect()
    }

    /// Return the best records for the given game variant, best first.
    ///
    /// At most [`BOARD_SIZE`] records are returned. Records with the same score are sorted by
    /// date, the oldest first.
    pub fn best_records(&self, game_id: GameId, game_props: &str) -> Vec<&UserGameRecord> {
        let order = game_id.score_order();
        let mut records: Vec<&UserGameRecord> = self.records(game_id, game_props);
        records.sort_by(|a, b| {
            if order.is_better(a.score, b.score) {
                std::cmp::Ordering::Less
            } else if order.is_better(b.score, a.score) {
                std::cmp::Ordering::Greater
            } else {
                a.played.cmp(&b.played)
            }
        });
        records.truncate(BOARD_SIZE);
        records
    }

    /// Return the best score for the given game variant.
    pub fn best_score(&self, game_id: GameId, game_props: &str) -> Option<u64> {
        self.best_records(game_id, game_props)
            .first()
            .map(|r| r.score)
    }

    /// Whether the user has no record and no achievement.
    pub fn is_empty(&self) -> bool {
        self.game_records.is_empty() && self.achievements.is_empty()
    }
}
