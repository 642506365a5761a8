//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other without terminal
//! I/O, with an optional seeded random opening prefix for variety. Colors
//! alternate between games so both players see both sides.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::board::board_types::{split_moves, Color, GameStatus, MoveMask};
use crate::board::position::Position;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::utils::stat_utils::WldCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Player1Win,
    Player2Win,
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Random opening plies before the engines take over (kept even so the
    /// side to move is unchanged).
    pub opening_plies: usize,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opening_plies: 4,
            go_params: GoParams {
                depth: Some(4),
                movetime_ms: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub counts: WldCounts,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn player1_avg_move_time_ms(&self) -> f64 {
        avg_ms(self.player1_total_time_ns, self.player1_moves)
    }

    pub fn player2_avg_move_time_ms(&self) -> f64 {
        avg_ms(self.player2_total_time_ns, self.player2_moves)
    }

    pub fn report(&self) -> String {
        format!(
            "games={} p1_wins={} p2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.counts.wins,
            self.counts.losses,
            self.counts.draws,
            self.player1_avg_move_time_ms(),
            self.player2_avg_move_time_ms(),
        )
    }
}

fn avg_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1e6
    }
}

/// Play one game. `player1_is_yellow` decides the color split; the outcome
/// is reported player-relative, not color-relative.
pub fn play_engine_match(
    player1: &mut dyn Engine,
    player2: &mut dyn Engine,
    player1_is_yellow: bool,
    config: &MatchConfig,
    rng: &mut StdRng,
    stats: &mut MatchSeriesStats,
) -> Result<MatchOutcome, String> {
    let mut position = Position::new();
    player1.new_game();
    player2.new_game();

    // Drop an even number of random opening stones, never into a line that
    // already decides the game.
    for _ in 0..(config.opening_plies & !1) {
        if position.is_game_over() {
            break;
        }
        let moves: Vec<MoveMask> = split_moves(position.legal_moves()).collect();
        let mv = moves[rng.random_range(0..moves.len())];
        position.make_move(mv);
    }

    loop {
        match position.status() {
            GameStatus::Won(color) => {
                let player1_won = (color == Color::Yellow) == player1_is_yellow;
                return Ok(if player1_won {
                    MatchOutcome::Player1Win
                } else {
                    MatchOutcome::Player2Win
                });
            }
            GameStatus::Draw => return Ok(MatchOutcome::Draw),
            GameStatus::Ongoing => {}
        }

        let yellow_to_move = position.side_to_move == Color::Yellow;
        let player1_to_move = yellow_to_move == player1_is_yellow;

        let started = Instant::now();
        let output = if player1_to_move {
            player1.choose_move(&position, &config.go_params)?
        } else {
            player2.choose_move(&position, &config.go_params)?
        };
        let elapsed = started.elapsed().as_nanos();

        if player1_to_move {
            stats.player1_moves += 1;
            stats.player1_total_time_ns += elapsed;
        } else {
            stats.player2_moves += 1;
            stats.player2_total_time_ns += elapsed;
        }

        let mv = output
            .best_move
            .ok_or_else(|| format!("{} returned no move", if player1_to_move { player1.name() } else { player2.name() }))?;
        if mv & position.legal_moves() == 0 {
            return Err("engine returned an illegal move".to_owned());
        }
        position.make_move(mv);
    }
}

/// Play a series, alternating colors per game, and tally the outcomes from
/// player 1's perspective. The tallies feed directly into
/// `stat_utils::sprt` / `stat_utils::elo_estimate`.
pub fn play_engine_match_series(
    player1: &mut dyn Engine,
    player2: &mut dyn Engine,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String> {
    let mut stats = MatchSeriesStats::default();

    for game in 0..config.games {
        let mut rng = StdRng::seed_from_u64(config.base_seed.wrapping_add(u64::from(game)));
        let player1_is_yellow = game % 2 == 0;

        let outcome = play_engine_match(
            player1,
            player2,
            player1_is_yellow,
            &config.per_game,
            &mut rng,
            &mut stats,
        )?;

        stats.games += 1;
        match outcome {
            MatchOutcome::Player1Win => stats.counts.wins += 1,
            MatchOutcome::Player2Win => stats.counts.losses += 1,
            MatchOutcome::Draw => stats.counts.draws += 1,
        }
    }

    Ok(stats)
}
