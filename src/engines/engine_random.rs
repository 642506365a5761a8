//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used as a baseline in
//! the match harness and for integration testing.

use rand::prelude::IndexedRandom;

use crate::board::board_types::{split_moves, MoveMask};
use crate::board::position::Position;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "DropFour Random"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let legal_moves: Vec<MoveMask> = split_moves(position.legal_moves()).collect();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;
        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_engine_returns_a_legal_move() {
        let position = Position::from_columns(&[3, 3, 3]).expect("moves are legal");
        let mut engine = RandomEngine::new();

        for _ in 0..20 {
            let out = engine
                .choose_move(&position, &GoParams::default())
                .expect("engine should produce output");
            let mv = out.best_move.expect("board is not full");
            assert_ne!(mv & position.legal_moves(), 0);
        }
    }

    #[test]
    fn random_engine_reports_no_move_on_a_full_board() {
        let mut position = Position::new();
        position.yellow_bitboard = 0x16b736e848408;
        position.red_bitboard = 0x9084815b3b76;

        let out = RandomEngine::new()
            .choose_move(&position, &GoParams::default())
            .expect("engine should produce output");
        assert!(out.best_move.is_none());
    }
}
