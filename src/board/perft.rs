//! Raw move-generation performance walk.
//!
//! Counts leaf nodes of the legal-move tree using make/unmake only, with no
//! evaluation or pruning. Used by the benchmark tooling and as a correctness
//! reference for move generation.

use crate::board::board_types::{split_moves, GameStatus};
use crate::board::position::Position;

/// Count the leaves of the legal-move tree to the given depth.
///
/// Terminal positions (win or full board) are leaves regardless of remaining
/// depth. From the empty board the counts are 7^d up to depth 6; the first
/// wins and the first full column appear at depth 7.
pub fn perft(position: &mut Position, depth: u8) -> u64 {
    if depth == 0 || position.status() != GameStatus::Ongoing {
        return 1;
    }

    let mut nodes = 0;
    for mv in split_moves(position.legal_moves()) {
        position.make_move(mv);
        nodes += perft(position, depth - 1);
        position.unmake_move();
    }
    nodes
}
