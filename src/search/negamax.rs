//! Negamax alpha-beta search with a caller-owned transposition table.
//!
//! The position is mutated in place (make, recurse, unmake) rather than
//! cloned per node; every `make_move` is balanced by an `unmake_move` before
//! the child result is examined, including on cutoff exits.

use crate::board::board_types::{split_moves, GameStatus, MoveMask};
use crate::board::position::Position;
use crate::search::board_scoring::{side_relative, BoardScorer, INFINITY, WIN_SCORE};
use crate::search::transposition_table::{Bound, TTEntry, TranspositionTable};

/// Result of one search call, from the perspective of the side to move at
/// the root.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub score: i32,
    pub principal_variation: Vec<MoveMask>,
    /// Leaf returns in the traversal; children pruned by a cutoff are never
    /// visited and never counted.
    pub nodes: u64,
}

/// Depth-limited search with a fresh transposition table.
///
/// Each top-level call owns its own empty table: entries are only valid
/// within the one traversal that produced them. Non-positive depth
/// degenerates to a single static evaluation rather than an error.
pub fn search(
    position: &mut Position,
    scorer: &impl BoardScorer,
    max_depth: u8,
) -> SearchOutcome {
    let mut table = TranspositionTable::new();
    search_with_table(position, scorer, max_depth, &mut table)
}

/// Depth-limited search against a table the caller owns.
///
/// The table must not be reused across positions searched under a different
/// root; callers that want reuse across calls are responsible for clearing.
pub fn search_with_table(
    position: &mut Position,
    scorer: &impl BoardScorer,
    max_depth: u8,
    table: &mut TranspositionTable,
) -> SearchOutcome {
    negamax(position, scorer, max_depth, -INFINITY, INFINITY, table)
}

fn negamax(
    position: &mut Position,
    scorer: &impl BoardScorer,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    table: &mut TranspositionTable,
) -> SearchOutcome {
    let key = position.key();

    if let Some(entry) = table.probe(&key, depth) {
        // Bound-only entries are reusable only when they still close the
        // current window; anything looser must be re-searched.
        let usable = match entry.bound {
            Bound::Exact => true,
            Bound::Lower => entry.score >= beta,
            Bound::Upper => entry.score <= alpha,
        };
        if usable {
            return SearchOutcome {
                score: entry.score,
                principal_variation: entry.principal_variation.clone(),
                nodes: 1,
            };
        }
    }

    match position.status() {
        GameStatus::Won(_) => {
            // Only the previous mover can have completed a line, so a
            // decided position is always lost for the side to move. Nearer
            // wins carry larger magnitudes.
            return SearchOutcome {
                score: -(WIN_SCORE - position.move_count() as i32),
                principal_variation: Vec::new(),
                nodes: 1,
            };
        }
        GameStatus::Draw => {
            return SearchOutcome {
                score: 0,
                principal_variation: Vec::new(),
                nodes: 1,
            };
        }
        GameStatus::Ongoing => {}
    }

    if depth == 0 {
        return SearchOutcome {
            score: side_relative(scorer.score(position), position.side_to_move),
            principal_variation: Vec::new(),
            nodes: 1,
        };
    }

    let alpha_entry = alpha;
    let mut best_score = -INFINITY;
    let mut best_line: Vec<MoveMask> = Vec::new();
    let mut nodes = 0u64;

    for mv in split_moves(position.legal_moves()) {
        position.make_move(mv);
        let child = negamax(position, scorer, depth - 1, -beta, -alpha, table);
        position.unmake_move();

        nodes += child.nodes;
        let child_score = -child.score;

        if child_score > best_score {
            best_score = child_score;
            best_line.clear();
            best_line.push(mv);
            best_line.extend(child.principal_variation);

            if child_score > alpha {
                alpha = child_score;
            }
            if alpha >= beta {
                break;
            }
        }
    }

    let bound = if best_score <= alpha_entry {
        Bound::Upper
    } else if best_score >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    table.store(
        key,
        TTEntry {
            score: best_score,
            principal_variation: best_line.clone(),
            depth,
            bound,
        },
    );

    SearchOutcome {
        score: best_score,
        principal_variation: best_line,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_types::column_of;
    use crate::search::board_scoring::CellWeightScorer;

    /// Reference traversal: full negamax with no pruning and no table.
    /// Pruning and caching must never change the score or the line, only
    /// the node count.
    fn plain_negamax(
        position: &mut Position,
        scorer: &CellWeightScorer,
        depth: u8,
    ) -> SearchOutcome {
        match position.status() {
            GameStatus::Won(_) => {
                return SearchOutcome {
                    score: -(WIN_SCORE - position.move_count() as i32),
                    principal_variation: Vec::new(),
                    nodes: 1,
                };
            }
            GameStatus::Draw => {
                return SearchOutcome {
                    score: 0,
                    principal_variation: Vec::new(),
                    nodes: 1,
                };
            }
            GameStatus::Ongoing => {}
        }
        if depth == 0 {
            return SearchOutcome {
                score: side_relative(scorer.score(position), position.side_to_move),
                principal_variation: Vec::new(),
                nodes: 1,
            };
        }

        let mut best = SearchOutcome {
            score: -INFINITY,
            principal_variation: Vec::new(),
            nodes: 0,
        };
        for mv in split_moves(position.legal_moves()) {
            position.make_move(mv);
            let child = plain_negamax(position, scorer, depth - 1);
            position.unmake_move();

            best.nodes += child.nodes;
            let child_score = -child.score;
            if child_score > best.score {
                best.score = child_score;
                best.principal_variation.clear();
                best.principal_variation.push(mv);
                best.principal_variation
                    .extend(child.principal_variation);
            }
        }
        best
    }

    #[test]
    fn depth_zero_returns_static_evaluation_only() {
        let mut position = Position::from_columns(&[3]).expect("moves are legal");
        let outcome = search(&mut position, &CellWeightScorer, 0);
        // Red to move, so Yellow's +81 shows up negated.
        assert_eq!(outcome.score, -81);
        assert!(outcome.principal_variation.is_empty());
        assert_eq!(outcome.nodes, 1);
    }

    #[test]
    fn depth_one_from_the_empty_board_visits_seven_nodes() {
        let mut position = Position::new();
        let outcome = search(&mut position, &CellWeightScorer, 1);
        assert_eq!(outcome.nodes, 7);
        assert_eq!(outcome.principal_variation.len(), 1);
        // The first center-column move wins the tie-break.
        assert_eq!(column_of(outcome.principal_variation[0]), 3);
    }

    #[test]
    fn immediate_win_is_found_at_depth_one_with_winning_magnitude() {
        // Yellow has three stacked in column 3 and is to move.
        let mut position =
            Position::from_columns(&[3, 0, 3, 0, 3, 1]).expect("moves are legal");
        let outcome = search(&mut position, &CellWeightScorer, 1);

        assert_eq!(outcome.principal_variation[0], 1 << 25);
        assert_eq!(outcome.score, WIN_SCORE - 7);
    }

    #[test]
    fn search_blocks_an_opponent_win_at_depth_two() {
        // Red threatens a vertical four in column 0; Yellow has no win of
        // its own, so the only non-losing move is the block.
        let mut position =
            Position::from_columns(&[1, 0, 3, 0, 5, 0]).expect("moves are legal");
        for depth in 2..=4 {
            let outcome = search(&mut position, &CellWeightScorer, depth);
            assert_eq!(
                outcome.principal_variation[0],
                1 << 4,
                "depth {depth} must block column 0"
            );
        }
    }

    #[test]
    fn lost_positions_still_return_a_score_and_empty_line() {
        let mut position = Position::from_columns(&[3, 0, 3, 0, 3, 0, 3])
            .expect("moves are legal");
        let outcome = search(&mut position, &CellWeightScorer, 6);
        assert_eq!(outcome.score, -(WIN_SCORE - 7));
        assert!(outcome.principal_variation.is_empty());
        assert_eq!(outcome.nodes, 1);
    }

    #[test]
    fn drawn_full_board_scores_zero() {
        let mut position = Position::new();
        position.yellow_bitboard = 0x16b736e848408;
        position.red_bitboard = 0x9084815b3b76;
        let outcome = search(&mut position, &CellWeightScorer, 4);
        assert_eq!(outcome.score, 0);
        assert!(outcome.principal_variation.is_empty());
    }

    #[test]
    fn pruning_and_caching_never_change_the_result() {
        let scorer = CellWeightScorer;
        let fixtures: [&[usize]; 3] = [&[], &[1, 0, 3, 0, 5, 0], &[3, 3, 2, 4, 4, 2, 5]];

        for columns in fixtures {
            let mut position = Position::from_columns(columns).expect("moves are legal");
            for depth in 1..=5 {
                let pruned = search(&mut position, &scorer, depth);
                let full = plain_negamax(&mut position, &scorer, depth);
                assert_eq!(pruned.score, full.score, "score at depth {depth}");
                assert_eq!(
                    pruned.principal_variation, full.principal_variation,
                    "line at depth {depth}"
                );
                assert!(pruned.nodes <= full.nodes);
            }
        }
    }

    #[test]
    fn search_restores_the_position_it_was_given() {
        let mut position =
            Position::from_columns(&[2, 3, 3]).expect("moves are legal");
        let key = position.key();
        let side = position.side_to_move;
        let _ = search(&mut position, &CellWeightScorer, 6);
        assert_eq!(position.key(), key);
        assert_eq!(position.side_to_move, side);
        assert_eq!(position.move_count(), 3);
    }

    #[test]
    fn caller_owned_tables_are_isolated_between_calls() {
        let mut table = TranspositionTable::new();
        let mut position = Position::new();
        let first = search_with_table(&mut position, &CellWeightScorer, 3, &mut table);
        assert!(!table.is_empty());

        table.clear();
        let second = search_with_table(&mut position, &CellWeightScorer, 3, &mut table);
        assert_eq!(first.score, second.score);
        assert_eq!(first.principal_variation, second.principal_variation);
        assert_eq!(first.nodes, second.nodes);
    }
}
