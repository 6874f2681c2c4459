/*
achievements.rs

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

//! Record the won games and unlock the achievement tiers.
//!
//! When the player wins a game, the [`AchievementEngine`] object:
//!
//! 1. Appends a [`UserGameRecord`] to the user data.
//! 2. Evaluates the catalog entry of the variant and, for a perfect run, the entry of the perfect
//!    variant (same size, [`crate::catalog::PERFECT_TARGET`] target).
//! 3. Unlocks each tier whose requirement the score reaches. A tier that is already unlocked
//!    stays unlocked, whatever the score.
//! 4. Saves the user data once, with the record and the tiers together.

use chrono::{DateTime, Utc};
use log::{debug, info};
use std::error::Error;

use crate::catalog::{self, AchievementEntry, GameId, ScoreOrder, TierName};
use crate::modifications::Modification;
use crate::profile::{UserData, UserGameRecord};
use crate::saver::Persistence;

/// Won game to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub game_id: GameId,
    pub game_props: String,
    pub score: u64,
    pub is_perfect: bool,
    pub modifications: Vec<Modification>,
}

/// Newly unlocked tier, with the notification text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockedTier {
    pub game_id: GameId,
    pub game_props: String,

    /// Index of the tier in the catalog thresholds.
    pub tier: usize,
    pub title: String,
    pub description: String,
}

impl UnlockedTier {
    /// Return the name of the tier.
    pub fn tier_name(&self) -> Option<TierName> {
        TierName::from_repr(self.tier)
    }
}

/// Achievement and record engine for the current user.
pub struct AchievementEngine<P: Persistence> {
    store: P,
    user: UserData,
}

impl<P: Persistence> AchievementEngine<P> {
    /// Create an [`AchievementEngine`] object and load the data of the user.
    ///
    /// A user with no saved data starts with an empty profile.
    pub fn new(store: P, username: &str) -> Result<Self, Box<dyn Error>> {
        let user: UserData = Self::load(&store, username)?;
        Ok(Self { store, user })
    }

    fn load(store: &P, username: &str) -> Result<UserData, Box<dyn Error>> {
        match store.load_user_data(username)? {
            Some(data) => {
                debug!(
                    "Loaded user {username}: {} records",
                    data.game_records().len()
                );
                Ok(data)
            }
            None => {
                debug!("New user {username}");
                Ok(UserData::new(username))
            }
        }
    }

    /// Switch to another user.
    ///
    /// The data of the previous user is already saved after its last change.
    pub fn switch_user(&mut self, username: &str) -> Result<(), Box<dyn Error>> {
        self.user = Self::load(&self.store, username)?;
        Ok(())
    }

    /// Return the name of the current user.
    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// Return the data of the current user.
    pub fn user(&self) -> &UserData {
        &self.user
    }

    /// Return the storage.
    pub fn store(&self) -> &P {
        &self.store
    }

    /// Return the storage, for changing the settings.
    pub fn store_mut(&mut self) -> &mut P {
        &mut self.store
    }

    /// Save the data of the current user.
    fn save(&mut self) -> Result<(), Box<dyn Error>> {
        let username: String = self.user.username.clone();
        self.store.save_user_data(&username, &self.user)
    }

    /// Record the won game and return the tiers it unlocks.
    ///
    /// # Errors
    ///
    /// The method returns an error if the user data cannot be saved. The in-memory data of the
    /// user is updated anyway, record and tiers alike, so the next successful save persists
    /// both.
    pub fn record_and_check_achievements(
        &mut self,
        result: &GameResult,
    ) -> Result<Vec<UnlockedTier>, Box<dyn Error>> {
        self.record_at(result, Utc::now())
    }

    /// Record the won game with the given completion timestamp.
    pub fn record_at(
        &mut self,
        result: &GameResult,
        played: DateTime<Utc>,
    ) -> Result<Vec<UnlockedTier>, Box<dyn Error>> {
        self.user.add_record(UserGameRecord {
            game_id: result.game_id,
            game_props: result.game_props.clone(),
            score: result.score,
            is_perfect: result.is_perfect,
            modifications: result.modifications.clone(),
            played,
        });
        debug!(
            "Recorded {} {}: score {} (perfect: {})",
            result.game_id, result.game_props, result.score, result.is_perfect
        );

        let mut keys: Vec<String> = vec![result.game_props.clone()];
        if result.is_perfect
            && let Some(key) = catalog::perfect_variant(&result.game_props)
            && key != result.game_props
        {
            keys.push(key);
        }

        let mut unlocked: Vec<UnlockedTier> = Vec::new();
        for key in keys {
            let Some(entry) = catalog::find(result.game_id, &key) else {
                continue;
            };
            unlocked.extend(self.unlock_tiers(entry, result.score));
        }

        for tier in &unlocked {
            info!("Achievement unlocked: {}: {}", tier.title, tier.description);
        }
        self.save()?;
        Ok(unlocked)
    }

    /// Unlock the tiers of the catalog entry that the score reaches.
    fn unlock_tiers(&mut self, entry: &AchievementEntry, score: u64) -> Vec<UnlockedTier> {
        let order: ScoreOrder = entry.game_id.score_order();
        let achievement = self.user.achievement_mut(
            entry.game_id,
            entry.game_props,
            entry.requirements.len(),
        );

        let mut unlocked: Vec<UnlockedTier> = Vec::new();
        for (tier, requirement) in entry.requirements.iter().enumerate() {
            if order.reaches(score, *requirement) && achievement.unlock(tier) {
                unlocked.push(UnlockedTier {
                    game_id: entry.game_id,
                    game_props: entry.game_props.to_string(),
                    tier,
                    title: entry.title(tier),
                    description: entry.description(tier),
                });
            }
        }
        unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saver::memory::MemoryStore;

    fn result(game_id: GameId, game_props: &str, score: u64, is_perfect: bool) -> GameResult {
        GameResult {
            game_id,
            game_props: game_props.to_string(),
            score,
            is_perfect,
            modifications: Vec::new(),
        }
    }

    fn engine() -> AchievementEngine<MemoryStore> {
        AchievementEngine::new(MemoryStore::new(), "alice").expect("cannot load the user")
    }

    #[test]
    fn every_win_is_recorded() {
        let mut engine = engine();
        // No tier reachable with that time
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Digits, "7x6", 1000, false))
            .expect("cannot record");
        assert!(unlocked.is_empty());
        assert_eq!(engine.user().game_records().len(), 1);
        assert_eq!(engine.store().saves, 1);
        let saved: Option<UserData> = engine
            .store()
            .load_user_data("alice")
            .expect("cannot load");
        assert_eq!(saved.map(|d| d.game_records().len()), Some(1));
    }

    #[test]
    fn time_based_tiers() {
        let mut engine = engine();
        // Digits 7x6 requirements: 90, 150, 240
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Digits, "7x6", 150, false))
            .expect("cannot record");
        let tiers: Vec<usize> = unlocked.iter().map(|u| u.tier).collect();
        assert_eq!(tiers, vec![1, 2]);
        assert_eq!(unlocked[0].tier_name(), Some(TierName::Silver));
        assert_eq!(unlocked[0].title, "Silver Digits 7x6");
        assert_eq!(
            engine
                .user()
                .achievement(GameId::Digits, "7x6")
                .map(|a| a.unlocked_tiers().to_vec()),
            Some(vec![false, true, true])
        );
        assert_eq!(engine.store().saves, 1);
    }

    #[test]
    fn worse_score_does_not_lock_tiers() {
        let mut engine = engine();
        engine
            .record_and_check_achievements(&result(GameId::Schulte, "4x4", 8, false))
            .expect("cannot record");
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Schulte, "4x4", 500, false))
            .expect("cannot record");
        assert!(unlocked.is_empty());
        assert_eq!(
            engine
                .user()
                .achievement(GameId::Schulte, "4x4")
                .map(|a| a.unlocked_tiers().to_vec()),
            Some(vec![true, true, true])
        );
    }

    #[test]
    fn tier_is_reported_once() {
        let mut engine = engine();
        let first = engine
            .record_and_check_achievements(&result(GameId::Queens, "4x4", 25, false))
            .expect("cannot record");
        assert_eq!(first.len(), 2);
        let second = engine
            .record_and_check_achievements(&result(GameId::Queens, "4x4", 20, false))
            .expect("cannot record");
        assert!(second.is_empty());
        assert_eq!(engine.user().game_records().len(), 2);
    }

    #[test]
    fn perfect_run_evaluates_the_perfect_variant() {
        let mut engine = engine();
        // Digits 7x100 requirements: 120, 200, 300
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Digits, "7x8", 250, true))
            .expect("cannot record");
        let keys: Vec<(&str, usize)> = unlocked
            .iter()
            .map(|u| (u.game_props.as_str(), u.tier))
            .collect();
        assert_eq!(keys, vec![("7x8", 2), ("7x100", 2)]);
        assert_eq!(unlocked[1].title, "Bronze Digits 7x100 (perfect)");
    }

    #[test]
    fn imperfect_run_skips_the_perfect_variant() {
        let mut engine = engine();
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Digits, "7x8", 100, false))
            .expect("cannot record");
        assert!(unlocked.iter().all(|u| u.game_props == "7x8"));
        assert!(engine.user().achievement(GameId::Digits, "7x100").is_none());
    }

    #[test]
    fn perfect_variant_without_catalog_entry() {
        let mut engine = engine();
        // There is no "9x100" entry for Schulte
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Schulte, "9x9", 10, true))
            .expect("cannot record");
        assert!(unlocked.is_empty());
        // Tango keys have no target part
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Tango, "1", 15, true))
            .expect("cannot record");
        assert_eq!(unlocked.len(), 3);
    }

    #[test]
    fn count_based_tiers() {
        let mut engine = engine();
        // Syllables requirements: 40, 30, 20
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Syllables, "60", 30, false))
            .expect("cannot record");
        let tiers: Vec<usize> = unlocked.iter().map(|u| u.tier).collect();
        assert_eq!(tiers, vec![1, 2]);
        assert_eq!(
            unlocked[0].description,
            "Score at least 30 in Syllables 60"
        );
    }

    #[test]
    fn unknown_variant_is_only_recorded() {
        let mut engine = engine();
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Schulte, "9x9", 1, false))
            .expect("cannot record");
        assert!(unlocked.is_empty());
        assert_eq!(engine.user().records(GameId::Schulte, "9x9").len(), 1);
    }

    #[test]
    fn switch_user() {
        let mut engine = engine();
        engine
            .record_and_check_achievements(&result(GameId::Tango, "2", 30, false))
            .expect("cannot record");
        engine.switch_user("bob").expect("cannot switch");
        assert_eq!(engine.username(), "bob");
        assert!(engine.user().is_empty());
        engine.switch_user("alice").expect("cannot switch");
        assert_eq!(engine.user().game_records().len(), 1);
    }

    #[test]
    fn save_failure_is_reported() {
        let mut store: MemoryStore = MemoryStore::new();
        store.fail_saves = true;
        let mut engine = AchievementEngine::new(store, "carol").expect("cannot load the user");
        assert!(
            engine
                .record_and_check_achievements(&result(GameId::Queens, "5x5", 10, false))
                .is_err()
        );
        assert_eq!(engine.user().game_records().len(), 1);
    }

    #[test]
    fn tiers_survive_a_failed_save() {
        let mut store: MemoryStore = MemoryStore::new();
        store.fail_saves = true;
        let mut engine = AchievementEngine::new(store, "dave").expect("cannot load the user");
        assert!(
            engine
                .record_and_check_achievements(&result(GameId::Queens, "4x4", 5, false))
                .is_err()
        );
        assert_eq!(
            engine
                .user()
                .achievement(GameId::Queens, "4x4")
                .map(|a| a.unlocked_tiers().to_vec()),
            Some(vec![true, true, true])
        );

        // The next save persists the first record together with its tiers
        engine.store_mut().fail_saves = false;
        let unlocked = engine
            .record_and_check_achievements(&result(GameId::Queens, "4x4", 500, false))
            .expect("cannot record");
        assert!(unlocked.is_empty());
        let saved: UserData = engine
            .store()
            .load_user_data("dave")
            .expect("cannot load")
            .expect("no saved data");
        assert_eq!(saved.game_records().len(), 2);
        assert_eq!(
            saved
                .achievement(GameId::Queens, "4x4")
                .map(|a| a.unlocked_tiers().to_vec()),
            Some(vec![true, true, true])
        );
    }
}
