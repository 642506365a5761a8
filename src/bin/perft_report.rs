//! Performance report for move generation and search.
//!
//! Prints a `depth / time (ms) / nodes / nps` table for the raw perft walk
//! and for the full alpha-beta search, both from the empty board.
//!
//! Run with: `cargo run --release --bin perft_report [max_depth]`

use std::time::Instant;

use drop_four::board::perft::perft;
use drop_four::board::position::Position;
use drop_four::search::board_scoring::CellWeightScorer;
use drop_four::search::negamax::search;

fn main() {
    let max_depth: u8 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(9);

    println!("perft (raw move generation)");
    print_header();
    for depth in 1..=max_depth {
        let mut position = Position::new();
        let started = Instant::now();
        let nodes = perft(&mut position, depth);
        print_row(depth, started.elapsed().as_secs_f64(), nodes);
    }

    println!();
    println!("search (alpha-beta with transposition table)");
    print_header();
    for depth in 1..=max_depth {
        let mut position = Position::new();
        let started = Instant::now();
        let outcome = search(&mut position, &CellWeightScorer, depth);
        print_row(depth, started.elapsed().as_secs_f64(), outcome.nodes);
    }
}

fn print_header() {
    println!("{:>6}{:>12}{:>12}{:>11}", "depth", "time (ms)", "nodes", "nps");
}

fn print_row(depth: u8, seconds: f64, nodes: u64) {
    let nps = if seconds > 0.0 {
        (nodes as f64 / seconds).round() as u64
    } else {
        0
    };
    println!(
        "{:>6}{:>12}{:>12}{:>11}",
        depth,
        (seconds * 1000.0).round() as u64,
        nodes,
        nps
    );
}
