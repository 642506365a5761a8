//! Engine abstraction layer used by the CLI and the match harness.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::board::board_types::MoveMask;
use crate::board::position::Position;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Hard depth limit; engines fall back to their configured depth.
    pub depth: Option<u8>,
    /// Wall-clock budget applied between iterative-deepening iterations.
    /// Searches are synchronous and are never interrupted in flight.
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<MoveMask>,
    /// Score from the side to move, when the engine computed one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
