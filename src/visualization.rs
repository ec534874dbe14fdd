//! Terminal rendering of boards.
//!
//! [`board_tiles`] projects a board into a plain tile grid with no notion
//! of formatting; [`render_ansi`] is the swappable presentation layer that
//! turns tiles into colored terminal output.

use crossterm::style::{Color, Stylize};

use crate::grid::{Board, BORDER, COLS, EMPTY, ROWS};
use crate::pieces::PIECE_COUNT;

/// ANSI 256-color background codes per piece identity (A-L).
///
/// The mapping is stable to keep colors consistent across renders.
const PIECE_COLORS: [u8; PIECE_COUNT] = [196, 208, 226, 46, 51, 21, 129, 201, 94, 22, 250, 63];

/// One rendered cell of the playable board area.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Empty,
    Border,
    Piece(u8),
}

/// Projects the playable 14x20 area into tiles.
pub fn board_tiles(board: &Board) -> Vec<Vec<Tile>> {
    (0..ROWS as i32)
        .map(|row| {
            (0..COLS as i32)
                .map(|col| match board.cell(row, col) {
                    EMPTY => Tile::Empty,
                    BORDER => Tile::Border,
                    piece => Tile::Piece(piece),
                })
                .collect()
        })
        .collect()
}

/// Background color for a piece identity.
pub fn piece_color(piece: u8) -> Color {
    Color::AnsiValue(PIECE_COLORS[piece as usize])
}

/// Renders a board for the terminal: two columns per cell, border as a
/// filled block, pieces as colored background.
pub fn render_ansi(board: &Board) -> String {
    let mut out = String::new();
    for row in board_tiles(board) {
        for tile in row {
            match tile {
                Tile::Empty => out.push_str("  "),
                Tile::Border => out.push_str("XX"),
                Tile::Piece(piece) => {
                    out.push_str(&format!("{}", "  ".on(piece_color(piece))));
                }
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceCatalog;

    #[test]
    fn test_tiles_reflect_cell_values() {
        let catalog = PieceCatalog::built_in();
        let mut board = Board::from_shape_text("X\n");
        assert!(board.place_piece(&catalog, 3, 0, 1, 0));

        let tiles = board_tiles(&board);
        assert_eq!(tiles.len(), ROWS);
        assert_eq!(tiles[0].len(), COLS);
        assert_eq!(tiles[0][0], Tile::Border);
        assert_eq!(tiles[0][1], Tile::Empty);
        assert_eq!(tiles[3][0], Tile::Piece(3));
        assert_eq!(tiles[13][19], Tile::Empty);
    }

    #[test]
    fn test_piece_colors_are_distinct() {
        let mut colors = PIECE_COLORS.to_vec();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), PIECE_COUNT);
    }

    #[test]
    fn test_render_empty_board_has_no_escapes() {
        let output = render_ansi(&Board::default_template());
        assert!(!output.contains('\u{1b}'));
        assert_eq!(output.lines().count(), ROWS);
        for line in output.lines() {
            assert_eq!(line.chars().count(), 2 * COLS);
        }
        insta::assert_snapshot!("empty_default_board", output);
    }

    #[test]
    fn test_render_colors_placed_pieces() {
        let catalog = PieceCatalog::built_in();
        let mut board = Board::default_template();
        assert!(board.place_piece(&catalog, 0, 0, 0, 0));

        let output = render_ansi(&board);
        assert!(output.contains("\u{1b}[48;5;196m"));
    }
}
