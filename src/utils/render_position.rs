//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the occupancy bitboards for the
//! play loop, tests, and diagnostics in text environments. Columns run left
//! to right, rows print from the top playable row down.

use crate::board::board_types::{COLUMNS, COLUMN_SPAN, ROWS};
use crate::board::position::Position;

pub const YELLOW_GLYPH: char = '@';
pub const RED_GLYPH: char = '-';
pub const EMPTY_GLYPH: char = ' ';

const ANSI_CLEAR: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RED: &str = "\x1b[31m";

/// Render the board to a string, one `| x |`-framed row per playable row and
/// a centered column-number footer. With `color` set, piece glyphs are
/// wrapped in bold ANSI color codes.
pub fn render_position(position: &Position, color: bool) -> String {
    let mut out = String::new();

    for row in (1..=ROWS).rev() {
        out.push('|');
        for column in 0..COLUMNS {
            let bit = 1u64 << (column * COLUMN_SPAN + row);
            out.push(' ');
            if position.yellow_bitboard & bit != 0 {
                push_glyph(&mut out, YELLOW_GLYPH, ANSI_YELLOW, color);
            } else if position.red_bitboard & bit != 0 {
                push_glyph(&mut out, RED_GLYPH, ANSI_RED, color);
            } else {
                out.push(EMPTY_GLYPH);
            }
            out.push_str(" |");
        }
        out.push('\n');
    }

    // Footer centered under the 2 + 7 * 4 wide frame.
    let footer: Vec<String> = (1..=COLUMNS).map(|c| c.to_string()).collect();
    let footer = footer.join("   ");
    let width = 2 + COLUMNS * 4;
    let pad = (width - footer.len()) / 2;
    out.push_str(&" ".repeat(pad));
    out.push_str(&footer);
    out
}

fn push_glyph(out: &mut String, glyph: char, ansi: &str, color: bool) {
    if color {
        out.push_str(ANSI_BOLD);
        out.push_str(ansi);
        out.push(glyph);
        out.push_str(ANSI_CLEAR);
    } else {
        out.push(glyph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_renders_six_rows_and_a_footer() {
        let rendered = render_position(&Position::new(), false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        for row in &lines[..6] {
            assert_eq!(*row, "|   |   |   |   |   |   |   |");
        }
        assert_eq!(lines[6].trim(), "1   2   3   4   5   6   7");
    }

    #[test]
    fn stones_appear_in_the_right_cells() {
        let position = Position::from_columns(&[3, 3]).expect("moves are legal");
        let rendered = render_position(&position, false);
        let lines: Vec<&str> = rendered.lines().collect();

        // Bottom row is printed last before the footer.
        assert_eq!(lines[5], "|   |   |   | @ |   |   |   |");
        assert_eq!(lines[4], "|   |   |   | - |   |   |   |");
        assert_eq!(lines[3], "|   |   |   |   |   |   |   |");
    }

    #[test]
    fn color_mode_wraps_glyphs_in_ansi_sequences() {
        let position = Position::from_columns(&[0]).expect("moves are legal");
        let rendered = render_position(&position, true);
        assert!(rendered.contains("\x1b[33m@\x1b[0m"));
    }
}
