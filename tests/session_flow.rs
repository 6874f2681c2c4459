/*
session_flow.rs

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

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use tempfile::TempDir;

use brainplay::achievements::{AchievementEngine, GameResult, UnlockedTier};
use brainplay::catalog::{GameId, ScoreOrder};
use brainplay::game::{GameController, Outcome, Status};
use brainplay::generator;
use brainplay::modifications::{Modification, SHOW_FOUND_CELLS, active_modifications};
use brainplay::round::{Round, RoundEvent};
use brainplay::rules::queens::{QueensBoard, QueensMove};
use brainplay::rules::schulte::SchulteBoard;
use brainplay::saver::memory::MemoryStore;
use brainplay::saver::{FileStore, Persistence};
use brainplay::settings::{QueensSettings, SchulteSettings};

fn engine() -> AchievementEngine<MemoryStore> {
    AchievementEngine::new(MemoryStore::new(), "alice").expect("cannot load the user")
}

fn schulte_board(seed: u64) -> SchulteBoard {
    let settings: SchulteSettings = SchulteSettings::new(4).expect("invalid settings");
    generator::schulte::generate_with(&settings, &mut StdRng::seed_from_u64(seed))
}

/// Click the numbers in order until the round is over.
fn solve_schulte(round: &mut Round<SchulteBoard>, controller: &mut GameController) -> RoundEvent {
    let mut event: RoundEvent = RoundEvent::Ignored;
    while round.outcome().is_none() {
        let board: &SchulteBoard = round.board();
        let Some(pos) = board.position_of(board.next_value()) else {
            break;
        };
        event = round.play(&pos, controller);
    }
    event
}

#[test]
fn perfect_schulte_win_unlocks_both_variants() {
    let mut engine = engine();
    let mut controller: GameController = GameController::new();
    let mut round: Round<SchulteBoard> =
        Round::new(GameId::Schulte, "4x4", schulte_board(7), &mut controller);

    assert_eq!(solve_schulte(&mut round, &mut controller), RoundEvent::Won);
    let unlocked: Vec<UnlockedTier> = round.finish(&mut controller, &mut engine);
    assert_eq!(controller.status(), Status::Win);

    // Done well under 10 seconds: every tier of "4x4" and of the perfect "4x100" variant
    let keys: Vec<(&str, usize)> = unlocked
        .iter()
        .map(|u| (u.game_props.as_str(), u.tier))
        .collect();
    assert_eq!(
        keys,
        vec![("4x4", 0), ("4x4", 1), ("4x4", 2), ("4x100", 0), ("4x100", 1), ("4x100", 2)]
    );

    let records = engine.user().records(GameId::Schulte, "4x4");
    assert_eq!(records.len(), 1);
    assert!(records[0].is_perfect);
}

#[test]
fn duplicate_end_of_game_is_processed_once() {
    let mut engine = engine();
    let mut controller: GameController = GameController::new();
    let mut round: Round<SchulteBoard> =
        Round::new(GameId::Schulte, "4x4", schulte_board(11), &mut controller);
    solve_schulte(&mut round, &mut controller);

    assert!(!round.finish(&mut controller, &mut engine).is_empty());
    assert!(round.finish(&mut controller, &mut engine).is_empty());
    assert!(controller.end_game(Outcome::Win, 1, &mut engine).is_empty());
    assert_eq!(engine.user().game_records().len(), 1);
}

#[test]
fn imperfect_win_only_unlocks_the_normal_variant() {
    let mut engine = engine();
    let mut controller: GameController = GameController::new();
    let board: SchulteBoard = schulte_board(3);
    let Some(wrong) = board.position_of(2) else {
        panic!("no cell holds 2");
    };
    let mut round: Round<SchulteBoard> = Round::new(GameId::Schulte, "4x4", board, &mut controller);
    assert_eq!(round.play(&wrong, &mut controller), RoundEvent::Mistake);
    assert_eq!(solve_schulte(&mut round, &mut controller), RoundEvent::Won);

    let unlocked: Vec<UnlockedTier> = round.finish(&mut controller, &mut engine);
    assert_eq!(unlocked.len(), 3);
    assert!(unlocked.iter().all(|u| u.game_props == "4x4"));
    assert!(!engine.user().game_records()[0].is_perfect);
}

#[test]
fn session_without_context_is_not_recorded() {
    let mut engine = engine();
    let mut controller: GameController = GameController::new();
    controller.start_game();
    assert!(controller.end_game(Outcome::Win, 2, &mut engine).is_empty());
    assert_eq!(controller.status(), Status::Win);
    assert!(engine.user().is_empty());
}

#[test]
fn queens_round_through_the_file_store() {
    let dir: TempDir = TempDir::new().expect("cannot create a temporary directory");
    let mut store: FileStore = FileStore::new(dir.path().to_path_buf()).expect("cannot open store");
    store
        .set_setting("show-conflicts", json!(false))
        .expect("cannot save the setting");
    let mut engine: AchievementEngine<FileStore> =
        AchievementEngine::new(store, "bob").expect("cannot load the user");

    let settings: QueensSettings = QueensSettings::new(5).expect("invalid settings");
    let board: QueensBoard =
        generator::queens::generate_with(&settings, &mut StdRng::seed_from_u64(42));
    let mut controller: GameController = GameController::new();
    let mut round: Round<QueensBoard> =
        Round::new(GameId::Queens, &settings.props(), board, &mut controller);
    controller.set_modifications(active_modifications(GameId::Queens, engine.store()));
    let solution = round.board().solution();
    for queen in solution {
        round.play(&QueensMove::Toggle(queen), &mut controller);
    }
    assert_eq!(round.outcome(), Some(Outcome::Win));
    round.finish(&mut controller, &mut engine);

    // Reload the profile from the files
    let store: FileStore = FileStore::new(dir.path().to_path_buf()).expect("cannot open store");
    let engine: AchievementEngine<FileStore> =
        AchievementEngine::new(store, "bob").expect("cannot load the user");
    let records = engine.user().records(GameId::Queens, "5x5");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].modifications, vec![Modification::HideConflicts]);
    assert_eq!(
        engine
            .user()
            .achievement(GameId::Queens, "5x5")
            .map(|a| a.unlocked_tiers().to_vec()),
        Some(vec![true, true, true])
    );
}

#[test]
fn assist_setting_only_affects_its_game() {
    let mut store: MemoryStore = MemoryStore::new();
    store
        .set_setting(SHOW_FOUND_CELLS, json!(false))
        .expect("cannot save the setting");
    assert_eq!(
        active_modifications(GameId::Schulte, &store),
        vec![Modification::HideFoundCells]
    );
    assert!(active_modifications(GameId::Tango, &store).is_empty());
}

#[test]
fn digits_run_unlocks_the_tiers_its_score_reaches() {
    // Digits "7x6" thresholds, hardest first: 90, 150, 240
    let mut engine = engine();
    let mut controller: GameController = GameController::new();
    controller.start_game();
    controller.set_game_context(GameId::Digits, "7x6", false);
    let unlocked: Vec<UnlockedTier> = controller.end_game(Outcome::Win, 180, &mut engine);
    let tiers: Vec<usize> = unlocked.iter().map(|u| u.tier).collect();
    assert_eq!(tiers, vec![2]);
    assert_eq!(
        engine
            .user()
            .achievement(GameId::Digits, "7x6")
            .map(|a| a.unlocked_tiers().to_vec()),
        Some(vec![false, false, true])
    );

    // A faster run later unlocks the 150 seconds tier, the others are untouched
    controller.start_game();
    controller.set_game_context(GameId::Digits, "7x6", false);
    controller.end_game(Outcome::Win, 150, &mut engine);
    assert_eq!(
        engine
            .user()
            .achievement(GameId::Digits, "7x6")
            .map(|a| a.unlocked_tiers().to_vec()),
        Some(vec![false, true, true])
    );
}

#[test]
fn tier_thresholds_follow_their_order() {
    // A 180 seconds run against the [150, 200] thresholds reaches the second tier only
    let requirements: [u64; 2] = [150, 200];
    let tiers: Vec<bool> = requirements
        .iter()
        .map(|r| ScoreOrder::LowerIsBetter.reaches(180, *r))
        .collect();
    assert_eq!(tiers, vec![false, true]);

    // The threshold itself is reached
    assert!(ScoreOrder::LowerIsBetter.reaches(150, 150));
    assert!(ScoreOrder::HigherIsBetter.reaches(30, 30));
    assert!(!ScoreOrder::HigherIsBetter.reaches(29, 30));
}

proptest! {
    #[test]
    fn unlocked_tiers_never_lock_again(scores in proptest::collection::vec(0u64..400, 1..20)) {
        let mut engine = engine();
        let mut previous: Vec<bool> = vec![false; 3];
        for score in scores {
            let result: GameResult = GameResult {
                game_id: GameId::Digits,
                game_props: "7x6".to_string(),
                score,
                is_perfect: false,
                modifications: Vec::new(),
            };
            engine.record_and_check_achievements(&result).expect("cannot record");
            let current: Vec<bool> = engine
                .user()
                .achievement(GameId::Digits, "7x6")
                .map(|a| a.unlocked_tiers().to_vec())
                .unwrap_or_else(|| vec![false; 3]);
            for (before, after) in previous.iter().zip(&current) {
                prop_assert!(!*before || *after);
            }
            previous = current;
        }
    }
}
