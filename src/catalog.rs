/*
catalog.rs

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

//! Static achievement catalog.
//!
//! The catalog lists, for every game and board variant (the `gameProps` key), the ordered tier
//! thresholds that a score must reach to unlock each tier.
//! Thresholds are ordered from the hardest tier to the easiest one, so index 0 is always the
//! [`TierName::Gold`] tier.
//!
//! The catalog is shipped data: users never modify it.
//! Their progress is stored separately, in [`crate::profile::UserAchievement`] objects.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

/// Target value that replaces the board target in the key of the perfect-run achievements.
pub const PERFECT_TARGET: u32 = 100;

/// Games of the suite.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    /// Clear pairs of adjacent cells that sum to the target.
    Digits,

    /// Click the numbers in ascending order.
    Schulte,

    /// Place one queen per row, column, and region.
    Queens,

    /// Fill the grid with suns and moons.
    Tango,

    /// Read as many syllables as possible. The board is managed outside of this crate, only the
    /// scores are recorded.
    #[value(skip)]
    Syllables,
}

/// How scores of a game compare.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScoreOrder {
    /// The score is a duration in seconds: the smaller the better.
    LowerIsBetter,

    /// The score is a count of correct answers: the larger the better.
    HigherIsBetter,
}

impl ScoreOrder {
    /// Whether the score reaches the tier requirement.
    ///
    /// A score equal to the requirement unlocks the tier.
    pub fn reaches(&self, score: u64, requirement: u64) -> bool {
        match self {
            ScoreOrder::LowerIsBetter => score <= requirement,
            ScoreOrder::HigherIsBetter => score >= requirement,
        }
    }

    /// Whether the first score is better than the second one.
    pub fn is_better(&self, score: u64, other: u64) -> bool {
        match self {
            ScoreOrder::LowerIsBetter => score < other,
            ScoreOrder::HigherIsBetter => score > other,
        }
    }
}

impl GameId {
    /// Return how the scores of the game compare.
    pub fn score_order(&self) -> ScoreOrder {
        match self {
            GameId::Syllables => ScoreOrder::HigherIsBetter,
            _ => ScoreOrder::LowerIsBetter,
        }
    }

    /// Maximum number of mistakes before the game is lost, or None if the game cannot be lost.
    pub fn mistake_limit(&self) -> Option<usize> {
        match self {
            GameId::Digits | GameId::Schulte => Some(3),
            _ => None,
        }
    }
}

/// Names of the tiers, in the order of the catalog thresholds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr, Display)]
#[repr(usize)]
pub enum TierName {
    Gold,
    Silver,
    Bronze,
}

/// Achievement definition for a game variant.
#[derive(Debug, Clone, Copy)]
pub struct AchievementEntry {
    /// Game the achievement belongs to.
    pub game_id: GameId,

    /// Board variant key, such as `"7x6"`.
    pub game_props: &'static str,

    /// Tier thresholds, hardest tier first.
    pub requirements: &'static [u64],
}

impl AchievementEntry {
    /// Whether this achievement rewards runs without mistakes.
    pub fn is_perfect_variant(&self) -> bool {
        perfect_target(self.game_props) == Some(PERFECT_TARGET)
    }

    /// Build the notification title for the given tier.
    pub fn title(&self, tier: usize) -> String {
        let tier_name: String = match TierName::from_repr(tier) {
            Some(t) => t.to_string(),
            None => format!("Tier {}", tier + 1),
        };
        let template: &str = if self.is_perfect_variant() {
            "{tier} {game} {props} (perfect)"
        } else {
            "{tier} {game} {props}"
        };
        formatx::formatx!(
            template,
            tier = tier_name,
            game = self.game_id,
            props = self.game_props
        )
        .unwrap_or_else(|_| template.to_string())
    }

    /// Build the notification description for the given tier.
    pub fn description(&self, tier: usize) -> String {
        let requirement: u64 = self.requirements.get(tier).copied().unwrap_or_default();
        let template: &str = match (self.game_id.score_order(), self.is_perfect_variant()) {
            (ScoreOrder::HigherIsBetter, _) => "Score at least {requirement} in {game} {props}",
            (ScoreOrder::LowerIsBetter, true) => {
                "Solve {game} in {requirement} seconds or less without a single mistake"
            }
            (ScoreOrder::LowerIsBetter, false) => {
                "Solve {game} {props} in {requirement} seconds or less"
            }
        };
        formatx::formatx!(
            template,
            requirement = requirement,
            game = self.game_id,
            props = self.game_props
        )
        .unwrap_or_else(|_| template.to_string())
    }
}

/// Achievement catalog.
static CATALOG: &[AchievementEntry] = &[
    // Digits: "<size>x<target>"
    AchievementEntry { game_id: GameId::Digits, game_props: "7x6", requirements: &[90, 150, 240] },
    AchievementEntry { game_id: GameId::Digits, game_props: "7x7", requirements: &[100, 170, 260] },
    AchievementEntry { game_id: GameId::Digits, game_props: "7x8", requirements: &[110, 180, 280] },
    AchievementEntry { game_id: GameId::Digits, game_props: "9x8", requirements: &[200, 320, 480] },
    AchievementEntry { game_id: GameId::Digits, game_props: "9x9", requirements: &[220, 350, 520] },
    AchievementEntry { game_id: GameId::Digits, game_props: "9x10", requirements: &[240, 380, 560] },
    AchievementEntry { game_id: GameId::Digits, game_props: "7x100", requirements: &[120, 200, 300] },
    AchievementEntry { game_id: GameId::Digits, game_props: "9x100", requirements: &[260, 420, 600] },
    // Schulte: "<size>x<size>"
    AchievementEntry { game_id: GameId::Schulte, game_props: "3x3", requirements: &[5, 10, 20] },
    AchievementEntry { game_id: GameId::Schulte, game_props: "4x4", requirements: &[10, 20, 35] },
    AchievementEntry { game_id: GameId::Schulte, game_props: "5x5", requirements: &[20, 35, 60] },
    AchievementEntry { game_id: GameId::Schulte, game_props: "6x6", requirements: &[35, 60, 90] },
    AchievementEntry { game_id: GameId::Schulte, game_props: "7x7", requirements: &[60, 90, 140] },
    AchievementEntry { game_id: GameId::Schulte, game_props: "4x100", requirements: &[12, 25, 40] },
    AchievementEntry { game_id: GameId::Schulte, game_props: "5x100", requirements: &[25, 45, 75] },
    AchievementEntry { game_id: GameId::Schulte, game_props: "6x100", requirements: &[45, 75, 110] },
    // Queens: "<size>x<size>"
    AchievementEntry { game_id: GameId::Queens, game_props: "4x4", requirements: &[10, 30, 60] },
    AchievementEntry { game_id: GameId::Queens, game_props: "5x5", requirements: &[20, 45, 90] },
    AchievementEntry { game_id: GameId::Queens, game_props: "6x6", requirements: &[40, 90, 150] },
    AchievementEntry { game_id: GameId::Queens, game_props: "7x7", requirements: &[60, 120, 200] },
    AchievementEntry { game_id: GameId::Queens, game_props: "8x8", requirements: &[90, 180, 300] },
    // Tango: "<complexity>"
    AchievementEntry { game_id: GameId::Tango, game_props: "1", requirements: &[20, 40, 60] },
    AchievementEntry { game_id: GameId::Tango, game_props: "2", requirements: &[40, 70, 100] },
    AchievementEntry { game_id: GameId::Tango, game_props: "3", requirements: &[60, 100, 150] },
    AchievementEntry { game_id: GameId::Tango, game_props: "4", requirements: &[90, 140, 200] },
    AchievementEntry { game_id: GameId::Tango, game_props: "5", requirements: &[120, 180, 260] },
    // Syllables: "<duration in seconds>", the score is the number of syllables read
    AchievementEntry { game_id: GameId::Syllables, game_props: "60", requirements: &[40, 30, 20] },
];

/// Return the whole catalog.
pub fn entries() -> &'static [AchievementEntry] {
    CATALOG
}

/// Look up the achievement for the given game and variant.
pub fn find(game_id: GameId, game_props: &str) -> Option<&'static AchievementEntry> {
    CATALOG
        .iter()
        .find(|e| e.game_id == game_id && e.game_props == game_props)
}

/// Return the target part of a `"<size>x<target>"` key.
fn perfect_target(game_props: &str) -> Option<u32> {
    game_props
        .rsplit_once('x')
        .and_then(|(_, target)| target.parse::<u32>().ok())
}

/// Return the perfect-run key for the given variant key, or None if the variant key has no
/// target part.
///
/// The last component of the key is replaced by [`PERFECT_TARGET`]: `"7x6"` gives `"7x100"`.
pub fn perfect_variant(game_props: &str) -> Option<String> {
    game_props
        .rsplit_once('x')
        .map(|(size, _)| format!("{size}x{PERFECT_TARGET}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_are_ordered_hardest_first() {
        for entry in entries() {
            let order: ScoreOrder = entry.game_id.score_order();
            for pair in entry.requirements.windows(2) {
                assert!(
                    order.is_better(pair[0], pair[1]),
                    "{} {} is not ordered hardest first",
                    entry.game_id,
                    entry.game_props
                );
            }
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<(GameId, &str)> =
            entries().iter().map(|e| (e.game_id, e.game_props)).collect();
        keys.sort();
        let len: usize = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), len);
    }

    #[test]
    fn perfect_variant_key() {
        assert_eq!(perfect_variant("7x6").as_deref(), Some("7x100"));
        assert_eq!(perfect_variant("5x5").as_deref(), Some("5x100"));
        assert_eq!(perfect_variant("3"), None);
        assert!(find(GameId::Digits, "7x100").is_some_and(|e| e.is_perfect_variant()));
        assert!(find(GameId::Queens, "6x100").is_none());
    }

    #[test]
    fn comparison_direction_per_game() {
        // A time equal to the threshold unlocks the tier
        assert!(GameId::Digits.score_order().reaches(150, 150));
        assert!(!GameId::Digits.score_order().reaches(151, 150));
        // A count equal to the threshold unlocks the tier
        assert!(GameId::Syllables.score_order().reaches(30, 30));
        assert!(!GameId::Syllables.score_order().reaches(29, 30));
    }

    #[test]
    fn notification_texts() {
        let entry: &AchievementEntry = find(GameId::Digits, "7x6").expect("missing entry");
        assert_eq!(entry.title(0), "Gold Digits 7x6");
        assert_eq!(entry.description(1), "Solve Digits 7x6 in 150 seconds or less");
        let perfect: &AchievementEntry = find(GameId::Digits, "7x100").expect("missing entry");
        assert_eq!(perfect.title(2), "Bronze Digits 7x100 (perfect)");
    }
}
