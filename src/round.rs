/*
round.rs

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

//! Manage the puzzle being played.
//!
//! A [`Round`] object holds the current board, the previous boards for undo, the mistake
//! counter, and the clock. Each move produces a new board (see [`Puzzle::validate_move`]), so
//! the history is simply the list of the replaced boards.
//!
//! The round reports to the [`GameController`]: it sets the game context when it starts, sets
//! it again with `is_perfect` cleared at the first mistake, and reports the elapsed time as
//! the live score. Once the round is over, [`Round::finish`] ends the session.

use log::debug;
use std::time::{Duration, Instant};

use crate::achievements::{AchievementEngine, UnlockedTier};
use crate::catalog::GameId;
use crate::game::{GameController, Outcome};
use crate::input_errors::InputErrors;
use crate::rules::{Puzzle, Validation};
use crate::saver::Persistence;

/// Result of a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// The move had no effect.
    Ignored,

    /// The move was valid.
    Accepted,

    /// The move was a mistake.
    Mistake,

    /// The move solved the puzzle.
    Won,

    /// The move was the mistake that loses the game.
    Lost,
}

/// Puzzle being played.
#[derive(Debug)]
pub struct Round<P: Puzzle> {
    game_id: GameId,
    game_props: String,
    board: P,

    /// Boards replaced by the moves, oldest first.
    history: Vec<P>,

    input_errors: InputErrors,

    /// Time when the round started, moved forward by the pauses.
    start_time: Instant,

    /// The elapsed time when the player paused the round.
    pause_duration: Option<Duration>,

    outcome: Option<Outcome>,

    /// The elapsed time when the round was won or lost.
    final_duration: Option<Duration>,
}

impl<P: Puzzle> Round<P> {
    /// Start a round with the given board.
    pub fn new(
        game_id: GameId,
        game_props: &str,
        board: P,
        controller: &mut GameController,
    ) -> Self {
        controller.start_game();
        controller.set_game_context(game_id, game_props, true);
        Self {
            game_id,
            game_props: game_props.to_string(),
            board,
            history: Vec::new(),
            input_errors: InputErrors::new(game_id.mistake_limit()),
            start_time: Instant::now(),
            pause_duration: None,
            outcome: None,
            final_duration: None,
        }
    }

    pub fn board(&self) -> &P {
        &self.board
    }

    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    pub fn game_props(&self) -> &str {
        &self.game_props
    }

    pub fn input_errors(&self) -> &InputErrors {
        &self.input_errors
    }

    /// Return how the round ended, or None if it is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_paused(&self) -> bool {
        self.pause_duration.is_some()
    }

    /// Play a move.
    ///
    /// Moves are ignored while the round is paused or once it is over.
    pub fn play(&mut self, mv: &P::Move, controller: &mut GameController) -> RoundEvent {
        if self.outcome.is_some() || self.is_paused() {
            return RoundEvent::Ignored;
        }

        let validation: Validation<P> = self.board.validate_move(mv);
        if validation.changed {
            let previous: P = std::mem::replace(&mut self.board, validation.board);
            self.history.push(previous);
        }
        controller.update_score(self.elapsed_secs());

        if validation.mistake {
            if self.input_errors.is_perfect() {
                controller.set_game_context(self.game_id, &self.game_props, false);
            }
            if self.input_errors.add_mistake() {
                debug!("Mistake limit reached");
                self.end(Outcome::Lose);
                return RoundEvent::Lost;
            }
            return RoundEvent::Mistake;
        }
        if !validation.changed {
            return RoundEvent::Ignored;
        }
        if self.board.is_solved() {
            self.end(Outcome::Win);
            debug!("Puzzle solved in {}s", self.elapsed_secs());
            return RoundEvent::Won;
        }
        RoundEvent::Accepted
    }

    /// Stop the clock and keep the outcome.
    fn end(&mut self, outcome: Outcome) {
        self.final_duration = Some(self.elapsed());
        self.outcome = Some(outcome);
    }

    /// Restore the board that the last move replaced.
    ///
    /// Mistakes are not refunded. Return whether a move was undone.
    pub fn undo(&mut self) -> bool {
        if self.outcome.is_some() || self.is_paused() {
            return false;
        }
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                true
            }
            None => false,
        }
    }

    /// Number of moves that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Pause the clock.
    pub fn pause(&mut self) {
        if self.pause_duration.is_none() {
            // Keep the played time so far, so that the pause time can be deduced on resume
            self.pause_duration = Some(self.start_time.elapsed());
        }
    }

    /// Resume the clock.
    pub fn resume(&mut self) {
        if let Some(d) = self.pause_duration.take() {
            self.start_time += self.start_time.elapsed() - d;
        }
    }

    /// Return the played time, pauses excluded.
    ///
    /// The clock stops when the round is won or lost.
    pub fn elapsed(&self) -> Duration {
        match (self.final_duration, self.pause_duration) {
            (Some(d), _) | (None, Some(d)) => d,
            (None, None) => self.start_time.elapsed(),
        }
    }

    /// Return the played time in seconds, which is the score of the timed games.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// End the session once the round is over and return the unlocked tiers.
    ///
    /// Nothing happens while the round is in progress.
    pub fn finish<S: Persistence>(
        &self,
        controller: &mut GameController,
        engine: &mut AchievementEngine<S>,
    ) -> Vec<UnlockedTier> {
        match self.outcome {
            Some(outcome) => controller.end_game(outcome, self.elapsed_secs(), engine),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Status;
    use crate::grid::Position;
    use crate::rules::digits::{DigitBoard, DigitMove};
    use crate::rules::queens::{QueensBoard, QueensMove};
    use crate::rules::schulte::SchulteBoard;
    use crate::saver::memory::MemoryStore;

    fn schulte() -> SchulteBoard {
        SchulteBoard::from_values(2, &[3, 1, 4, 2]).expect("invalid board")
    }

    #[test]
    fn schulte_win() {
        let mut controller: GameController = GameController::new();
        let mut round: Round<SchulteBoard> =
            Round::new(GameId::Schulte, "2x2", schulte(), &mut controller);
        assert_eq!(controller.status(), Status::Playing);
        assert_eq!(round.play(&Position::new(0, 1), &mut controller), RoundEvent::Accepted);
        assert_eq!(round.play(&Position::new(1, 1), &mut controller), RoundEvent::Accepted);
        assert_eq!(round.play(&Position::new(0, 0), &mut controller), RoundEvent::Accepted);
        assert_eq!(round.play(&Position::new(1, 0), &mut controller), RoundEvent::Won);
        assert_eq!(round.outcome(), Some(Outcome::Win));
        assert_eq!(round.play(&Position::new(1, 0), &mut controller), RoundEvent::Ignored);
        assert!(controller.context().is_some_and(|c| c.is_perfect));
    }

    #[test]
    fn clock_stops_when_the_round_is_won() {
        let mut controller: GameController = GameController::new();
        let mut round: Round<SchulteBoard> =
            Round::new(GameId::Schulte, "2x2", schulte(), &mut controller);
        for pos in [(0, 1), (1, 1), (0, 0), (1, 0)] {
            round.play(&Position::new(pos.0, pos.1), &mut controller);
        }
        assert_eq!(round.outcome(), Some(Outcome::Win));
        let at_win: Duration = round.elapsed();

        // The host may wait before reporting the end of the game
        std::thread::sleep(Duration::from_millis(1100));
        assert_eq!(round.elapsed(), at_win);

        let mut engine: AchievementEngine<MemoryStore> =
            AchievementEngine::new(MemoryStore::new(), "alice").expect("cannot load the user");
        round.finish(&mut controller, &mut engine);
        assert_eq!(controller.score(), at_win.as_secs());
        let records = engine.user().records(GameId::Schulte, "2x2");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].score, at_win.as_secs());
    }

    #[test]
    fn first_mistake_clears_perfection() {
        let mut controller: GameController = GameController::new();
        let mut round: Round<SchulteBoard> =
            Round::new(GameId::Schulte, "2x2", schulte(), &mut controller);
        assert_eq!(round.play(&Position::new(0, 0), &mut controller), RoundEvent::Mistake);
        assert!(controller.context().is_some_and(|c| !c.is_perfect));
        assert_eq!(round.input_errors().get_errors(), 1);
    }

    #[test]
    fn third_mistake_loses() {
        let mut controller: GameController = GameController::new();
        let mut round: Round<SchulteBoard> =
            Round::new(GameId::Schulte, "2x2", schulte(), &mut controller);
        let wrong: Position = Position::new(1, 0);
        assert_eq!(round.play(&wrong, &mut controller), RoundEvent::Mistake);
        assert_eq!(round.play(&wrong, &mut controller), RoundEvent::Mistake);
        assert_eq!(round.play(&wrong, &mut controller), RoundEvent::Lost);
        assert_eq!(round.outcome(), Some(Outcome::Lose));

        let mut engine: AchievementEngine<MemoryStore> =
            AchievementEngine::new(MemoryStore::new(), "alice").expect("cannot load the user");
        assert!(round.finish(&mut controller, &mut engine).is_empty());
        assert_eq!(controller.status(), Status::Lose);
        assert!(engine.user().game_records().is_empty());
    }

    #[test]
    fn queens_cannot_be_lost() {
        let regions: Vec<usize> = vec![0, 0, 1, 1, 0, 1, 1, 1, 2, 2, 3, 1, 2, 3, 3, 3];
        let board: QueensBoard = QueensBoard::new(4, regions).expect("invalid board");
        let mut controller: GameController = GameController::new();
        let mut round: Round<QueensBoard> =
            Round::new(GameId::Queens, "4x4", board, &mut controller);
        for _ in 0..10 {
            assert_eq!(
                round.play(&QueensMove::Toggle(Position::new(0, 0)), &mut controller),
                RoundEvent::Accepted
            );
        }
        assert_eq!(round.outcome(), None);
    }

    #[test]
    fn undo_restores_the_previous_board() {
        let cells: Vec<Option<u8>> = vec![
            Some(1), Some(5), Some(2),
            Some(3), None, Some(4),
            Some(2), Some(4), Some(5),
        ];
        let board: DigitBoard = DigitBoard::from_cells(3, 6, cells).expect("invalid board");
        let mut controller: GameController = GameController::new();
        let mut round: Round<DigitBoard> =
            Round::new(GameId::Digits, "3x6", board.clone(), &mut controller);
        assert!(!round.undo());

        let mv: DigitMove = DigitMove::new(Position::new(0, 0), Position::new(0, 1));
        assert_eq!(round.play(&mv, &mut controller), RoundEvent::Accepted);
        assert_eq!(round.history_len(), 1);
        assert!(round.undo());
        assert_eq!(round.board(), &board);

        // A rejected pair does not change the board
        let wrong: DigitMove = DigitMove::new(Position::new(0, 0), Position::new(0, 2));
        assert_eq!(round.play(&wrong, &mut controller), RoundEvent::Mistake);
        assert_eq!(round.history_len(), 0);
        assert_eq!(round.input_errors().get_errors(), 1);
    }

    #[test]
    fn moves_are_ignored_while_paused() {
        let mut controller: GameController = GameController::new();
        let mut round: Round<SchulteBoard> =
            Round::new(GameId::Schulte, "2x2", schulte(), &mut controller);
        round.pause();
        assert!(round.is_paused());
        let frozen: Duration = round.elapsed();
        assert_eq!(round.play(&Position::new(0, 1), &mut controller), RoundEvent::Ignored);
        assert_eq!(round.elapsed(), frozen);
        round.resume();
        assert!(!round.is_paused());
        assert!(round.elapsed() >= frozen);
        assert_eq!(round.play(&Position::new(0, 1), &mut controller), RoundEvent::Accepted);
    }
}
