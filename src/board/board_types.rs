//! Core types and geometry constants for the bitboard representation.
//!
//! The 7x6 playing grid is embedded in a 7x7 bit grid: within each column the
//! lowest bit is a permanently occupied sentinel, so dropping a piece is a
//! single shift of the occupancy instead of per-column height bookkeeping.
//! Bit `i` maps to column `i / 7`, row `i % 7` (row 0 is the sentinel).

/// A move is a mask with exactly one bit set: the landing square.
pub type MoveMask = u64;

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;

/// Bits per column in the embedding (six playable rows plus the sentinel).
pub const COLUMN_SPAN: usize = 7;

// Shift offsets for the four canonical line axes. Shifting right by an offset
// moves a mask one step along the axis; the sentinel row absorbs any chain
// that would otherwise wrap between columns.
pub const UP: u32 = 1;
pub const RIGHT: u32 = 7;
pub const UP_RIGHT: u32 = 8;
pub const DOWN_RIGHT: u32 = 6;

/// All 49 bits of the embedding.
pub const BOARD_MASK: u64 = (1u64 << 49) - 1;

/// The always-occupied sentinel bit at the bottom of each column.
pub const SENTINEL_MASK: u64 = {
    let mut mask = 0u64;
    let mut col = 0;
    while col < COLUMNS {
        mask |= 1u64 << (col * COLUMN_SPAN);
        col += 1;
    }
    mask
};

/// The 42 playable cells.
pub const PLAYABLE_MASK: u64 = BOARD_MASK & !SENTINEL_MASK;

/// Side to move. Yellow moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Yellow,
    Red,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Yellow => Color::Red,
            Color::Red => Color::Yellow,
        }
    }

    /// Negamax sign: static scores are Yellow-minus-Red, so Red negates.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Yellow => 1,
            Color::Red => -1,
        }
    }
}

/// Terminal status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(Color),
    Draw,
}

/// Column (0-based) a move mask lands in.
#[inline]
pub fn column_of(mv: MoveMask) -> usize {
    mv.trailing_zeros() as usize / COLUMN_SPAN
}

/// Playable row (1-based; row 0 is the sentinel) a move mask lands in.
#[inline]
pub fn row_of(mv: MoveMask) -> usize {
    mv.trailing_zeros() as usize % COLUMN_SPAN
}

/// Mask covering every bit of the given column, sentinel included.
#[inline]
pub fn column_mask(column: usize) -> u64 {
    0x7fu64 << (column * COLUMN_SPAN)
}

/// Iterate the single-bit moves of a mask in ascending bit order.
///
/// The order is load-bearing for the search: tie-breaks between equal lines
/// resolve to the lowest bit, so enumeration must stay column-major from the
/// low rows up.
#[inline]
pub fn split_moves(mask: u64) -> MoveIter {
    MoveIter { remaining: mask }
}

pub struct MoveIter {
    remaining: u64,
}

impl Iterator for MoveIter {
    type Item = MoveMask;

    #[inline]
    fn next(&mut self) -> Option<MoveMask> {
        if self.remaining == 0 {
            return None;
        }
        let mv = self.remaining & self.remaining.wrapping_neg();
        self.remaining &= self.remaining - 1;
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_mask_covers_bottom_of_each_column() {
        assert_eq!(SENTINEL_MASK.count_ones(), 7);
        for col in 0..COLUMNS {
            assert_ne!(SENTINEL_MASK & (1 << (col * COLUMN_SPAN)), 0);
        }
        assert_eq!(SENTINEL_MASK & PLAYABLE_MASK, 0);
        assert_eq!(PLAYABLE_MASK.count_ones(), 42);
    }

    #[test]
    fn split_moves_yields_ascending_single_bits() {
        let mask: MoveMask = (1 << 3) | (1 << 10) | (1 << 46);
        let moves: Vec<MoveMask> = split_moves(mask).collect();
        assert_eq!(moves, vec![1 << 3, 1 << 10, 1 << 46]);
        assert!(moves.iter().all(|m| m.count_ones() == 1));
    }

    #[test]
    fn bit_index_maps_to_column_and_row() {
        let mv: MoveMask = 1 << 25; // column 3, row 4
        assert_eq!(column_of(mv), 3);
        assert_eq!(row_of(mv), 4);
        assert_ne!(column_mask(3) & mv, 0);
        assert_eq!(column_mask(2) & mv, 0);
    }
}
