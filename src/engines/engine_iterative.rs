//! Iterative-deepening search engine.
//!
//! Wraps the core negamax alpha-beta search with depth-progressive calls
//! under an optional wall-clock budget. The budget is enforced between
//! iterations only: each `search` call runs to completion, and the deepest
//! completed result is the answer.

use std::time::Instant;

use crate::board::board_types::{column_of, ROWS, COLUMNS};
use crate::board::position::Position;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::search::board_scoring::{CellWeightScorer, WIN_SCORE};
use crate::search::negamax::search;

/// Any score of at least this magnitude is a proven forced result; deepening
/// further cannot change it.
const DECIDED_MARGIN: i32 = WIN_SCORE - (ROWS * COLUMNS) as i32;

pub struct IterativeEngine {
    default_depth: u8,
    scorer: CellWeightScorer,
}

impl IterativeEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            scorer: CellWeightScorer,
        }
    }
}

impl Engine for IterativeEngine {
    fn name(&self) -> &str {
        "DropFour Iterative"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut scratch = position.clone();
        if scratch.legal_moves() == 0 {
            return Ok(EngineOutput::default());
        }

        // A search deeper than the number of empty cells cannot reach new
        // positions, so cap the deepening there.
        let remaining = (ROWS * COLUMNS - scratch.move_count()) as u8;
        let depth_limit = params.depth.unwrap_or(self.default_depth).max(1).min(remaining);

        let started = Instant::now();
        let mut out = EngineOutput::default();

        for depth in 1..=depth_limit {
            // Fresh transposition table per top-level call; entries are only
            // valid within one traversal.
            let outcome = search(&mut scratch, &self.scorer, depth);

            let best = outcome
                .principal_variation
                .first()
                .copied()
                .ok_or("search returned an empty line for a playable position")?;
            out.best_move = Some(best);
            out.score = Some(outcome.score);
            out.info_lines.push(format!(
                "info depth {} score {} nodes {} column {}",
                depth,
                outcome.score,
                outcome.nodes,
                column_of(best) + 1
            ));

            if outcome.score.abs() >= DECIDED_MARGIN {
                break;
            }
            if let Some(budget_ms) = params.movetime_ms {
                if started.elapsed().as_millis() as u64 >= budget_ms {
                    break;
                }
            }
        }

        Ok(out)
    }
}
