/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! List the achievements:
//!
//! ```text
//! $ brainplay --ls
//! digits     7x6     90 150 240
//! digits     7x7     100 170 260
//! ...
//! ```
//!
//! Print two queens boards:
//!
//! ```text
//! $ brainplay --game queens --size 5 --count 2
//! ```
//!
//! Play a Schulte table to a win for the `alice` profile and list the best scores:
//!
//! ```text
//! $ brainplay --game schulte --size 4 --autoplay --user alice
//! $ brainplay --scores --user alice
//! ```

use clap::{CommandFactory, Parser};
use log::debug;
use std::collections::BTreeSet;
use std::env;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::achievements::AchievementEngine;
use crate::catalog::{self, GameId};
use crate::game::GameController;
use crate::generator;
use crate::grid::Position;
use crate::modifications::active_modifications;
use crate::rules::Puzzle;
use crate::rules::digits::{DigitBoard, DigitMove};
use crate::rules::queens::{QueensBoard, QueensMove};
use crate::rules::schulte::SchulteBoard;
use crate::rules::tango::{Button, TANGO_SIZE, TangoBoard, TangoCell, TangoMove};
use crate::round::Round;
use crate::saver::{FileStore, Persistence};
use crate::settings::{DigitSettings, QueensSettings, SchulteSettings, SettingsError, TangoSettings};

pub const COPYRIGHT_NOTICE: &str = "
Copyright 2025 Hervé Quatremain

Brainplay is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.";

/// Generate and play the Brainplay puzzles from the command line.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the achievements
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Game to generate boards for
    #[arg(value_enum, short, long, group = "generate")]
    game: Option<GameId>,

    /// Board size (digits, schulte, and queens)
    #[arg(short, long, requires = "generate")]
    size: Option<usize>,

    /// Sum of the pairs to clear (digits)
    #[arg(short, long, default_value_t = 6, requires = "generate")]
    target: u8,

    /// Number of cells to fill, from 1 to 5 (tango)
    #[arg(short = 'x', long, default_value_t = 3, requires = "generate")]
    complexity: u8,

    /// Number of boards to generate
    #[arg(short, long, default_value_t = 1, requires = "generate")]
    count: usize,

    /// Play the generated board to the end and record the result
    #[arg(short, long, default_value_t = false, requires = "generate")]
    autoplay: bool,

    /// Name of the user profile
    #[arg(short, long, default_value = "player")]
    user: String,

    /// List the best scores of the user
    #[arg(long, default_value_t = false)]
    scores: bool,

    /// Directory where the user data and the settings are stored
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Return the default data directory.
fn default_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("XDG_DATA_HOME")
        && !dir.is_empty()
    {
        return PathBuf::from(dir).join("brainplay");
    }
    let home: String = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".local/share/brainplay")
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if args.ls {
        list_catalog();
        return 0;
    }

    if !args.scores && args.game.is_none() {
        let _ = Args::command().print_help();
        return 2;
    }

    let data_dir: PathBuf = args.data_dir.clone().unwrap_or_else(default_data_dir);
    if args.scores || args.autoplay {
        match open_engine(data_dir, &args.user) {
            Ok(mut engine) => {
                if args.scores {
                    print_scores(&engine);
                    return 0;
                }
                run_game(&args, Some(&mut engine))
            }
            Err(e) => {
                eprintln!("Cannot load the profile of {}: {e}", args.user);
                1
            }
        }
    } else {
        run_game::<FileStore>(&args, None)
    }
}

fn open_engine(data_dir: PathBuf, user: &str) -> Result<AchievementEngine<FileStore>, Box<dyn Error>> {
    let store: FileStore = FileStore::new(data_dir)?;
    AchievementEngine::new(store, user)
}

/// Print the achievement catalog.
fn list_catalog() {
    for entry in catalog::entries() {
        let requirements: Vec<String> = entry.requirements.iter().map(|r| r.to_string()).collect();
        println!(
            "{:<10} {:<7} {}",
            entry.game_id.to_string().to_lowercase(),
            entry.game_props,
            requirements.join(" ")
        );
    }
}

/// Print the best records and the unlocked tiers of the user.
fn print_scores<P: Persistence>(engine: &AchievementEngine<P>) {
    let user = engine.user();
    let variants: BTreeSet<(GameId, String)> = user
        .game_records()
        .iter()
        .map(|r| (r.game_id, r.game_props.clone()))
        .collect();
    if variants.is_empty() {
        println!("No game recorded for {}", user.username);
        return;
    }
    for (game_id, game_props) in variants {
        println!("{game_id} {game_props}");
        for (i, record) in user.best_records(game_id, &game_props).iter().enumerate() {
            println!(
                "  {:>2}. {:>5}{}  {}",
                i + 1,
                record.score,
                if record.is_perfect { " *" } else { "  " },
                record.played.format("%Y-%m-%d %H:%M")
            );
        }
        if let Some(achievement) = user.achievement(game_id, &game_props)
            && let Some(entry) = catalog::find(game_id, &game_props)
        {
            for (tier, unlocked) in achievement.unlocked_tiers().iter().enumerate() {
                if *unlocked {
                    println!("  {}", entry.title(tier));
                }
            }
        }
    }
}

/// Generate the boards of the selected game and print or play them.
fn run_game<P: Persistence>(args: &Args, mut engine: Option<&mut AchievementEngine<P>>) -> u8 {
    let Some(game_id) = args.game else {
        return 2;
    };
    let mut ret: u8 = 0;
    for i in 0..args.count {
        debug!("Board {i}");
        if i > 0 {
            println!();
        }
        let res: Result<u8, SettingsError> = match game_id {
            GameId::Digits => {
                let settings: Result<DigitSettings, SettingsError> = match args.size {
                    Some(size) => DigitSettings::new(args.target, size),
                    None => DigitSettings::with_target(args.target),
                };
                settings.map(|s| {
                    let board: DigitBoard = generator::digits::generate(&s);
                    show(game_id, &s.props(), board, next_digit_move, engine.as_deref_mut())
                })
            }
            GameId::Schulte => SchulteSettings::new(args.size.unwrap_or(5)).map(|s| {
                let board: SchulteBoard = generator::schulte::generate(&s);
                show(game_id, &s.props(), board, next_schulte_move, engine.as_deref_mut())
            }),
            GameId::Queens => QueensSettings::new(args.size.unwrap_or(6)).map(|s| {
                let board: QueensBoard = generator::queens::generate(&s);
                show(game_id, &s.props(), board, next_queens_move, engine.as_deref_mut())
            }),
            GameId::Tango => TangoSettings::new(args.complexity).map(|s| {
                let board: TangoBoard = generator::tango::generate(&s);
                show(game_id, &s.props(), board, next_tango_move, engine.as_deref_mut())
            }),
            GameId::Syllables => {
                eprintln!("No board generator for {game_id}");
                return 1;
            }
        };
        match res {
            Ok(r) => ret = ret.max(r),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    }
    ret
}

/// Print the board, and play it if an engine is provided.
fn show<B, F, P>(
    game_id: GameId,
    game_props: &str,
    board: B,
    next_move: F,
    engine: Option<&mut AchievementEngine<P>>,
) -> u8
where
    B: Puzzle + fmt::Display,
    F: Fn(&B) -> Option<B::Move>,
    P: Persistence,
{
    println!("{game_id} {game_props}");
    println!("{board}");
    let Some(engine) = engine else {
        return 0;
    };

    let mut controller: GameController = GameController::new();
    let mut round: Round<B> = Round::new(game_id, game_props, board, &mut controller);
    controller.set_modifications(active_modifications(game_id, engine.store()));
    while round.outcome().is_none() {
        let Some(mv) = next_move(round.board()) else {
            println!("No more moves:\n{}", round.board());
            controller.reset();
            return 1;
        };
        round.play(&mv, &mut controller);
    }
    for tier in round.finish(&mut controller, engine) {
        println!("Achievement unlocked: {}: {}", tier.title, tier.description);
    }
    println!("{}: {} in {}s", controller.status(), game_props, controller.score());
    0
}

/// Return the first pair of available cells that sum to the target.
fn next_digit_move(board: &DigitBoard) -> Option<DigitMove> {
    let mut available: Vec<Position> = board.available_cells().into_iter().collect();
    available.sort();
    for (i, first) in available.iter().enumerate() {
        for second in &available[i + 1..] {
            if let (Some(a), Some(b)) = (board.get(*first), board.get(*second))
                && board.is_pair(a, b)
            {
                return Some(DigitMove::new(*first, *second));
            }
        }
    }
    None
}

fn next_schulte_move(board: &SchulteBoard) -> Option<Position> {
    board.position_of(board.next_value())
}

fn next_queens_move(board: &QueensBoard) -> Option<QueensMove> {
    board
        .solution()
        .into_iter()
        .find(|p| !board.has_queen(*p))
        .map(QueensMove::Toggle)
}

fn next_tango_move(board: &TangoBoard) -> Option<TangoMove> {
    board
        .solution()
        .iter()
        .enumerate()
        .map(|(i, symbol)| (Position::from_index(i, TANGO_SIZE), *symbol))
        .find(|(p, symbol)| board.is_editable(*p) && board.get(*p) != Some(*symbol))
        .map(|(p, symbol)| {
            let button: Button = match symbol {
                TangoCell::Moon => Button::Secondary,
                _ => Button::Primary,
            };
            TangoMove::new(p, button)
        })
}
