//! Core incremental board state representation.
//!
//! `Position` is the central model for the engine. It stores one occupancy
//! bitboard per player, the side to move, and the move history stack used by
//! make/unmake style workflows in the search and the CLI.

use crate::board::board_types::*;

/// Transposition identity of a position: the pair of occupancy masks.
///
/// Two positions reached by different move orders are interchangeable for
/// caching purposes exactly when both masks agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub yellow: u64,
    pub red: u64,
}

/// Incremental game state optimized for fast move making/unmaking.
///
/// The search mutates a single `Position` in place; every `make_move` must be
/// balanced by an `unmake_move` on every exit path. That contract, not
/// cloning, is what keeps recursion allocation-free.
#[derive(Debug, Clone)]
pub struct Position {
    // Occupancy per player. Sentinel bits belong to neither mask.
    pub yellow_bitboard: u64,
    pub red_bitboard: u64,

    pub side_to_move: Color,

    // Make/unmake stack of single-bit move masks.
    pub move_history: Vec<MoveMask>,

    // Lazily computed terminal status, invalidated on every mutation.
    cached_status: Option<GameStatus>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            yellow_bitboard: 0,
            red_bitboard: 0,
            side_to_move: Color::Yellow,
            move_history: Vec::with_capacity(ROWS * COLUMNS),
            cached_status: None,
        }
    }
}

impl Position {
    /// Empty board, Yellow to move.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask of every landing square: the lowest empty playable cell of each
    /// non-full column. Returns 0 when the board is full.
    ///
    /// Shifting the occupancy (sentinels included) up by one bit lands on the
    /// cell above the top piece of each column; a full column shifts into the
    /// next column's sentinel and is masked away.
    #[inline]
    pub fn legal_moves(&self) -> u64 {
        let pieces = self.yellow_bitboard | self.red_bitboard | SENTINEL_MASK;
        (pieces << UP) & !pieces & BOARD_MASK
    }

    /// Landing square for a 0-based column, if the column is not full.
    #[inline]
    pub fn landing_square(&self, column: usize) -> Option<MoveMask> {
        let landing = self.legal_moves() & column_mask(column);
        if landing == 0 {
            None
        } else {
            Some(landing)
        }
    }

    /// Apply a move for the side to move.
    ///
    /// `mv` must be a single bit taken from the current `legal_moves()`; this
    /// is a caller contract and is only checked in debug builds.
    #[inline]
    pub fn make_move(&mut self, mv: MoveMask) {
        debug_assert_eq!(mv.count_ones(), 1, "move must be a single-bit mask");
        debug_assert_ne!(mv & self.legal_moves(), 0, "move must be legal");

        match self.side_to_move {
            Color::Yellow => self.yellow_bitboard |= mv,
            Color::Red => self.red_bitboard |= mv,
        }
        self.move_history.push(mv);
        self.side_to_move = self.side_to_move.opposite();
        self.cached_status = None;
    }

    /// Revert the most recent `make_move`.
    ///
    /// Must never be called more often than `make_move`; checked in debug
    /// builds only.
    #[inline]
    pub fn unmake_move(&mut self) {
        debug_assert!(!self.move_history.is_empty(), "no move to unmake");

        if let Some(mv) = self.move_history.pop() {
            self.side_to_move = self.side_to_move.opposite();
            match self.side_to_move {
                Color::Yellow => self.yellow_bitboard &= !mv,
                Color::Red => self.red_bitboard &= !mv,
            }
            self.cached_status = None;
        }
    }

    /// Terminal status of the position, memoized until the next mutation.
    ///
    /// A win is only ever attributable to the player who just moved; the draw
    /// check runs after the win checks so a board-filling winning move still
    /// reports the win.
    #[inline]
    pub fn status(&mut self) -> GameStatus {
        match self.cached_status {
            Some(status) => status,
            None => {
                let status = self.compute_status();
                self.cached_status = Some(status);
                status
            }
        }
    }

    #[inline]
    pub fn is_game_over(&mut self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    /// Status recomputed from the masks alone (no memoization).
    pub fn compute_status(&self) -> GameStatus {
        if Self::has_four(self.yellow_bitboard) {
            return GameStatus::Won(Color::Yellow);
        }
        if Self::has_four(self.red_bitboard) {
            return GameStatus::Won(Color::Red);
        }
        if (self.yellow_bitboard | self.red_bitboard) == PLAYABLE_MASK {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    /// Whether a player mask contains four in a row on any axis.
    ///
    /// One check per axis suffices: a run found scanning one way is the same
    /// run found scanning the other way. Sentinel bits are never set in a
    /// player mask, so chains cannot wrap between columns.
    #[inline]
    pub fn has_four(mask: u64) -> bool {
        for dir in [UP, RIGHT, UP_RIGHT, DOWN_RIGHT] {
            if mask & (mask >> dir) & (mask >> (2 * dir)) & (mask >> (3 * dir)) != 0 {
                return true;
            }
        }
        false
    }

    /// Transposition key: the pair of occupancy masks.
    #[inline]
    pub fn key(&self) -> PositionKey {
        PositionKey {
            yellow: self.yellow_bitboard,
            red: self.red_bitboard,
        }
    }

    /// Number of stones on the board.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Build a position by dropping one stone per listed column in order,
    /// colors alternating from Yellow. Returns `None` if a column is full.
    ///
    /// Convenience for tests, benches, and opening playouts; the moves still
    /// go through regular generation and `make_move`.
    pub fn from_columns(columns: &[usize]) -> Option<Self> {
        let mut position = Self::new();
        for &column in columns {
            let mv = position.landing_square(column)?;
            position.make_move(mv);
        }
        Some(position)
    }
}
