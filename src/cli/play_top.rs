//! Interactive play loop front-end.
//!
//! Alternates a human column prompt with an engine reply, rendering the board
//! between moves. All input validation happens here: malformed, out-of-range,
//! or full-column input is re-prompted and never reaches `make_move`.

use std::io::{self, BufRead, Write};

use crate::board::board_types::{column_of, Color, GameStatus, MoveMask, COLUMNS};
use crate::board::position::Position;
use crate::engines::engine_iterative::IterativeEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::search::board_scoring::WIN_SCORE;
use crate::utils::render_position::render_position;

#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    pub engine_depth: u8,
    pub movetime_ms: u64,
    pub human_plays_first: bool,
    pub color: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            engine_depth: 42,
            movetime_ms: 500,
            human_plays_first: true,
            color: true,
        }
    }
}

/// Run the play loop on stdin/stdout.
pub fn run_stdio_loop(config: PlayConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play_loop(&mut stdin.lock(), &mut stdout.lock(), config)
}

/// Run the play loop over arbitrary reader/writer, for tests and embedding.
pub fn run_play_loop(
    input: &mut impl BufRead,
    out: &mut impl Write,
    config: PlayConfig,
) -> io::Result<()> {
    let mut position = Position::new();
    let mut engine = IterativeEngine::new(config.engine_depth);
    let params = GoParams {
        depth: None,
        movetime_ms: Some(config.movetime_ms),
    };

    loop {
        writeln!(out, "{}", render_position(&position, config.color))?;
        if position.is_game_over() {
            break;
        }

        let human_turn = (position.move_count() % 2 == 0) == config.human_plays_first;
        if human_turn {
            match prompt_for_move(input, out, &position)? {
                Some(mv) => position.make_move(mv),
                None => {
                    writeln!(out, "Exiting game.")?;
                    return Ok(());
                }
            }
        } else {
            let reply = engine
                .choose_move(&position, &params)
                .map_err(io::Error::other)?;
            let Some(mv) = reply.best_move else {
                break;
            };
            writeln!(
                out,
                "Engine plays column {} ({}, depth {})",
                column_of(mv) + 1,
                describe_score(reply.score.unwrap_or(0), position.move_count()),
                reply.info_lines.len()
            )?;
            position.make_move(mv);
        }
    }

    let verdict = match position.status() {
        GameStatus::Won(Color::Yellow) => "Yellow wins!",
        GameStatus::Won(Color::Red) => "Red wins!",
        GameStatus::Draw => "Draw.",
        GameStatus::Ongoing => "Game stopped.",
    };
    writeln!(out, "{verdict}")?;
    Ok(())
}

/// Prompt until the user supplies a playable column or input ends.
///
/// Mirrors the lenient reading of the original CLI: surrounding non-digit
/// noise is stripped before parsing.
fn prompt_for_move(
    input: &mut impl BufRead,
    out: &mut impl Write,
    position: &Position,
) -> io::Result<Option<MoveMask>> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_column(&line) {
            Some(column) => match position.landing_square(column) {
                Some(mv) => return Ok(Some(mv)),
                None => writeln!(out, "That column is filled up, try another.")?,
            },
            None => writeln!(out, "Please enter a valid column number.")?,
        }
    }
}

/// Parse a 1-based column choice into a 0-based column index.
pub fn parse_column(line: &str) -> Option<usize> {
    let trimmed = line.trim_matches(|c: char| !c.is_ascii_digit());
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let column: usize = trimmed.parse().ok()?;
    if (1..=COLUMNS).contains(&column) {
        Some(column - 1)
    } else {
        None
    }
}

/// Human-readable score: centipawn-style positional scores, or moves-to-win
/// once the search proves a forced result.
pub fn describe_score(score: i32, move_count: usize) -> String {
    if score.abs() >= WIN_SCORE - 42 {
        let plies_left = (WIN_SCORE - score.abs()) as usize - move_count;
        let moves = (plies_left + 1) / 2;
        if score > 0 {
            format!("winning in {moves}")
        } else {
            format!("losing in {moves}")
        }
    } else {
        format!("score {:.2}", f64::from(score) / 100.0)
    }
}
