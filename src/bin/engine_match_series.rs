//! Standalone engine-vs-engine series runner.
//!
//! Plays two engine configurations against each other with seeded random
//! openings and reports series stats plus an SPRT verdict and Elo estimate
//! for player 1.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- [games] [depth1] [depth2]`

use drop_four::engines::engine_iterative::IterativeEngine;
use drop_four::engines::engine_trait::GoParams;
use drop_four::utils::match_harness::{play_engine_match_series, MatchConfig, MatchSeriesConfig};
use drop_four::utils::stat_utils::{elo_estimate, sprt, SprtState};

fn main() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let games: u16 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(20);
    let depth1: u8 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(6);
    let depth2: u8 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(5);

    let mut player1 = IterativeEngine::new(depth1);
    let mut player2 = IterativeEngine::new(depth2);

    let stats = play_engine_match_series(
        &mut player1,
        &mut player2,
        &MatchSeriesConfig {
            games,
            base_seed: 1234,
            per_game: MatchConfig {
                opening_plies: 4,
                go_params: GoParams {
                    depth: None,
                    movetime_ms: None,
                },
            },
        },
    )?;

    println!("{}", stats.report());

    let test = sprt(stats.counts, 0.0, 0.05, 20.0, 0.05);
    let estimate = elo_estimate(stats.counts);
    println!(
        "llr {:.3} in [{:.3}, {:.3}]  elo {:.1} +- {:.1}  los {:.3}",
        test.llr, test.lower_bound, test.upper_bound, estimate.elo, estimate.elo95, estimate.los
    );
    match test.state {
        SprtState::Accepted => println!("sprt: player 1 accepted as stronger"),
        SprtState::Rejected => println!("sprt: player 1 rejected as stronger"),
        SprtState::Continue => println!("sprt: inconclusive, play more games"),
    }

    Ok(())
}
