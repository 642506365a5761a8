//! Pluggable static evaluation interfaces and the baseline implementation.
//!
//! Search remains modular by delegating static position scoring to this
//! trait, allowing alternate heuristics to be swapped without altering search
//! code. Scores are always Yellow-minus-Red; the search applies the
//! side-to-move sign itself.

use crate::board::board_types::Color;
use crate::board::position::Position;

/// Magnitude base for decided positions. A win found after `n` stones scores
/// `WIN_SCORE - n`, so faster wins rank higher. Must exceed any reachable
/// static score (below 42 * 120) by a wide margin.
pub const WIN_SCORE: i32 = 1 << 16;

/// Window sentinel for alpha-beta bounds. Never produced by a scorer and
/// strictly beyond any win score.
pub const INFINITY: i32 = 1 << 30;

/// Static scorer over a position, from Yellow's perspective.
pub trait BoardScorer {
    fn score(&self, position: &Position) -> i32;
}

/// Per-cell positional weights: cells nearer the center of the board are
/// worth more. Indexed by bit number, so every sentinel entry is zero.
#[rustfmt::skip]
const CELL_WEIGHTS: [i32; 49] = [
    0, 23, 31,  49,  49, 31, 23,
    0, 31, 43,  61,  61, 43, 31,
    0, 49, 61,  88,  88, 61, 49,
    0, 81, 93, 120, 120, 93, 81,
    0, 49, 61,  88,  88, 61, 49,
    0, 31, 43,  61,  61, 43, 31,
    0, 23, 31,  49,  49, 31, 23,
];

/// Cell-weight material count: the sum of weights under Yellow's stones
/// minus the sum under Red's.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellWeightScorer;

impl CellWeightScorer {
    #[inline]
    fn weigh(mut mask: u64) -> i32 {
        let mut total = 0;
        while mask != 0 {
            total += CELL_WEIGHTS[mask.trailing_zeros() as usize];
            mask &= mask - 1;
        }
        total
    }
}

impl BoardScorer for CellWeightScorer {
    #[inline]
    fn score(&self, position: &Position) -> i32 {
        Self::weigh(position.yellow_bitboard) - Self::weigh(position.red_bitboard)
    }
}

/// Sign applied to a Yellow-perspective score so that "higher is better for
/// the side to move" holds (the negamax invariant).
#[inline]
pub fn side_relative(score: i32, side_to_move: Color) -> i32 {
    score * side_to_move.sign()
}
