//! Crate root module declarations for the Drop Four engine project.
//!
//! This file exposes all top-level subsystems (board representation, search,
//! engines, the interactive CLI, and utility helpers) so binaries, tests, and
//! external tooling can import stable module paths.

pub mod board {
    pub mod board_types;
    pub mod perft;
    pub mod position;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
    pub mod transposition_table;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod cli {
    pub mod play_top;
}

pub mod utils {
    pub mod match_harness;
    pub mod render_position;
    pub mod stat_utils;
}
