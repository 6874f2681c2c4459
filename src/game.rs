/*
game.rs

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

//! Manage the lifecycle of a game session.
//!
//! The [`GameController`] object is a small state machine:
//!
//! ```text
//! Idle --start_game--> Playing --end_game--> Win | Lose
//! Win | Lose --start_game--> Playing
//! any --reset--> Idle
//! ```
//!
//! Each call to [`GameController::start_game`] produces a new, strictly increasing `started_at`
//! timestamp that identifies the run, and drops the context and the modifiers of the previous
//! run. [`GameController::end_game`] only acts from the `Playing` status and leaves it, so the
//! record and achievement processing of a win happens at most once per run, even if the end of
//! the game is reported several times.

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::achievements::{AchievementEngine, GameResult, UnlockedTier};
use crate::catalog::GameId;
use crate::modifications::Modification;
use crate::saver::Persistence;

/// Status of the session.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Playing,
    Win,
    Lose,
}

/// How a game ended.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Status::Win,
            Outcome::Lose => Status::Lose,
        }
    }
}

/// Game variant the session belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameContext {
    pub game_id: GameId,
    pub game_props: String,

    /// Whether no mistake was made so far.
    pub is_perfect: bool,
}

/// Session controller.
#[derive(Debug, Default)]
pub struct GameController {
    status: Status,

    /// Live score reported by the game, replaced by the final score at the end of the game.
    score: u64,

    context: Option<GameContext>,
    modifications: Vec<Modification>,

    /// Identifier of the current run.
    started_at: Option<DateTime<Utc>>,
}

impl GameController {
    /// Create a [`GameController`] object in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run.
    ///
    /// The game context and the modifiers of the previous run are dropped. Set them after
    /// starting.
    pub fn start_game(&mut self) -> DateTime<Utc> {
        let mut now: DateTime<Utc> = Utc::now();
        if let Some(previous) = self.started_at
            && now <= previous
        {
            now = previous + TimeDelta::nanoseconds(1);
        }
        debug!("Session {} -> {} at {now}", self.status, Status::Playing);
        self.status = Status::Playing;
        self.score = 0;
        self.context = None;
        self.modifications.clear();
        self.started_at = Some(now);
        now
    }

    /// Set the variant of the current run and whether it is still perfect.
    pub fn set_game_context(&mut self, game_id: GameId, game_props: &str, is_perfect: bool) {
        debug!("Session context: {game_id} {game_props} (perfect: {is_perfect})");
        self.context = Some(GameContext {
            game_id,
            game_props: game_props.to_string(),
            is_perfect,
        });
    }

    /// Set the gameplay modifiers active for the current run.
    pub fn set_modifications(&mut self, modifications: Vec<Modification>) {
        self.modifications = modifications;
    }

    /// Report the live score.
    pub fn update_score(&mut self, score: u64) {
        self.score = score;
    }

    /// End the current run.
    ///
    /// Nothing happens if no run is in progress. For a win, the game is recorded and the newly
    /// unlocked tiers are returned, once per run. A run without game context is not recorded.
    /// Storage failures are logged and do not prevent the transition.
    pub fn end_game<P: Persistence>(
        &mut self,
        outcome: Outcome,
        score: u64,
        engine: &mut AchievementEngine<P>,
    ) -> Vec<UnlockedTier> {
        if self.status != Status::Playing {
            debug!("Ignoring the end of the game: session is {}", self.status);
            return Vec::new();
        }

        // Leaving Playing is what makes the processing happen once per run
        debug!("Session {} -> {outcome} (score {score})", self.status);
        self.status = outcome.into();
        self.score = score;

        if outcome == Outcome::Lose {
            return Vec::new();
        }
        let Some(context) = &self.context else {
            debug!("No game context: the run is not recorded");
            return Vec::new();
        };

        let result: GameResult = GameResult {
            game_id: context.game_id,
            game_props: context.game_props.clone(),
            score,
            is_perfect: context.is_perfect,
            modifications: self.modifications.clone(),
        };
        match engine.record_and_check_achievements(&result) {
            Ok(unlocked) => unlocked,
            Err(e) => {
                warn!(
                    "Cannot save the result of {} {}: {e}",
                    result.game_id, result.game_props
                );
                Vec::new()
            }
        }
    }

    /// Go back to the idle state and forget the current run.
    pub fn reset(&mut self) {
        debug!("Session {} -> {}", self.status, Status::Idle);
        self.status = Status::Idle;
        self.score = 0;
        self.context = None;
        self.modifications.clear();
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn context(&self) -> Option<&GameContext> {
        self.context.as_ref()
    }

    pub fn modifications(&self) -> &[Modification] {
        &self.modifications
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}
