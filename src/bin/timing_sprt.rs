//! Sequential timing test for search performance.
//!
//! Repeatedly times fixed-depth searches from the empty board, scores each
//! sample as a win (faster than the target), loss (slower), or draw against
//! a target milliseconds-per-search, and folds the tallies into an SPRT plus
//! an Elo-style confidence estimate until the test reaches a verdict.
//!
//! Run with:
//! `cargo run --release --bin timing_sprt -- <target_ms> [depth] [runs_per_sample]`

use std::time::Instant;

use drop_four::board::position::Position;
use drop_four::search::board_scoring::CellWeightScorer;
use drop_four::search::negamax::search;
use drop_four::utils::stat_utils::{elo_estimate, sprt, SprtState, WldCounts};

const ELO0: f64 = 0.0;
const ELO1: f64 = 100.0;
const ALPHA: f64 = 0.05;
const BETA: f64 = 0.05;

fn main() {
    let mut args = std::env::args().skip(1);
    let target_ms: f64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100.0);
    let depth: u8 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(8);
    let runs: u32 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(8);

    println!(
        "timing sprt started {} (target {target_ms} ms, depth {depth}, {runs} runs/sample)",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let mut sample_times_ms: Vec<f64> = Vec::new();

    loop {
        let started = Instant::now();
        for _ in 0..runs {
            let mut position = Position::new();
            let outcome = search(&mut position, &CellWeightScorer, depth);
            std::hint::black_box(outcome.nodes);
        }
        sample_times_ms.push(started.elapsed().as_secs_f64() * 1000.0 / f64::from(runs));

        // One pseudo-count per bucket keeps the draw model defined.
        let counts = WldCounts::new(
            1 + sample_times_ms.iter().filter(|&&t| t < target_ms).count() as u64,
            1 + sample_times_ms.iter().filter(|&&t| t > target_ms).count() as u64,
            1 + sample_times_ms.iter().filter(|&&t| t == target_ms).count() as u64,
        );

        let test = sprt(counts, ELO0, ALPHA, ELO1, BETA);
        let estimate = elo_estimate(counts);

        let mut sorted = sample_times_ms.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let median = sorted[sorted.len() / 2];
        let mean = sample_times_ms.iter().sum::<f64>() / sample_times_ms.len() as f64;
        let stdev = (sample_times_ms
            .iter()
            .map(|t| (t - mean).powi(2))
            .sum::<f64>()
            / sample_times_ms.len() as f64)
            .sqrt();

        println!(
            "confidence {:.1}%  ({:.1} ms +- {:.1} ms)  pElo {:.1} +- {:.1}  (+{}-{}={})",
            50.0 + 50.0 * test.llr / test.upper_bound,
            median,
            2.0 * stdev,
            estimate.elo,
            estimate.elo95,
            counts.wins,
            counts.losses,
            counts.draws,
        );

        match test.state {
            SprtState::Accepted => {
                println!("accepted: search is faster than {target_ms} ms at depth {depth}");
                break;
            }
            SprtState::Rejected => {
                println!("rejected: search is slower than {target_ms} ms at depth {depth}");
                break;
            }
            SprtState::Continue => {}
        }
    }
}
