//! Piece catalog: the twelve puzzle pieces and their orientation variants.
//!
//! A catalog is loaded once (from the embedded game data or a file), after
//! which it is read-only. The solver receives it by reference; there is no
//! global piece table.

use std::fmt;

use crate::geometry::{all_orientations, Footprint};
use crate::grid::{MAX_FOOTPRINT_COLS, MAX_FOOTPRINT_ROWS};

/// Number of pieces in the puzzle, identified 0-11 (rendered as A-L).
pub const PIECE_COUNT: usize = 12;

/// Default piece shapes shipped with the game.
const DEFAULT_PIECES: &str = include_str!("../gamedata/pieces");

/// One orientation of a piece.
#[derive(Debug)]
pub struct PieceVariant {
    pub footprint: Footprint,
}

/// Read-only catalog: for each piece identity, its orientation variants in
/// a fixed order.
///
/// The variant order is a contract (it determines solver expansion order
/// and the meaning of variant indices in solution files); it comes from
/// [`all_orientations`], which sorts deterministically.
#[derive(Debug)]
pub struct PieceCatalog {
    pieces: Vec<Vec<PieceVariant>>,
}

impl PieceCatalog {
    /// Parses a catalog from its text form: 12 blocks of `#`/`.` rows
    /// separated by blank lines, one block per piece in identity order.
    ///
    /// Short rows within a block are padded with uncovered cells.
    pub fn from_text(text: &str) -> Result<Self, CatalogError> {
        let mut pieces = Vec::with_capacity(PIECE_COUNT);
        let mut block: Vec<&str> = Vec::new();

        for line in text.lines().chain(std::iter::once("")) {
            if line.trim().is_empty() {
                if !block.is_empty() {
                    pieces.push(parse_piece(pieces.len(), &block)?);
                    block.clear();
                }
            } else {
                block.push(line.trim_end());
            }
        }

        if pieces.len() != PIECE_COUNT {
            return Err(CatalogError::PieceCount {
                found: pieces.len(),
            });
        }

        Ok(Self { pieces })
    }

    /// The catalog embedded in the binary (`gamedata/pieces`).
    pub fn built_in() -> Self {
        Self::from_text(DEFAULT_PIECES).expect("embedded piece catalog is valid")
    }

    /// Orientation variants of a piece, in ascending variant-index order.
    pub fn variants(&self, piece: usize) -> &[PieceVariant] {
        &self.pieces[piece]
    }
}

impl std::ops::Index<usize> for PieceCatalog {
    type Output = [PieceVariant];

    fn index(&self, piece: usize) -> &[PieceVariant] {
        &self.pieces[piece]
    }
}

/// Parses one piece block and expands it into its orientation variants.
fn parse_piece(piece: usize, lines: &[&str]) -> Result<Vec<PieceVariant>, CatalogError> {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        let mut row = Vec::with_capacity(width);
        for ch in line.chars() {
            match ch {
                '#' => row.push(1),
                '.' | ' ' => row.push(0),
                _ => return Err(CatalogError::BadCell { piece, ch }),
            }
        }
        row.resize(width, 0);
        rows.push(row);
    }

    let base = Footprint::from_rows(rows).ok_or(CatalogError::EmptyPiece { piece })?;
    if base.area() == 0 {
        return Err(CatalogError::EmptyPiece { piece });
    }

    let variants = all_orientations(&base);
    for footprint in &variants {
        if footprint.rows() > MAX_FOOTPRINT_ROWS || footprint.cols() > MAX_FOOTPRINT_COLS {
            return Err(CatalogError::Oversized {
                piece,
                rows: footprint.rows(),
                cols: footprint.cols(),
            });
        }
    }

    Ok(variants
        .into_iter()
        .map(|footprint| PieceVariant { footprint })
        .collect())
}

/// Display letter for a piece identity (0 -> 'A', 11 -> 'L').
pub fn piece_letter(piece: usize) -> char {
    char::from(b'A' + piece as u8)
}

/// A malformed piece catalog, with the reason as data.
#[derive(Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog did not contain exactly [`PIECE_COUNT`] piece blocks.
    PieceCount { found: usize },
    /// A piece block contained a character other than `#`, `.` or space.
    BadCell { piece: usize, ch: char },
    /// A piece block had no covered cells.
    EmptyPiece { piece: usize },
    /// A piece orientation exceeds the margin the grid reserves for
    /// bounds-free placement checks.
    Oversized {
        piece: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PieceCount { found } => {
                write!(f, "expected {PIECE_COUNT} pieces, found {found}")
            }
            Self::BadCell { piece, ch } => {
                write!(f, "piece {}: invalid cell character '{ch}'", piece_letter(*piece))
            }
            Self::EmptyPiece { piece } => {
                write!(f, "piece {}: no covered cells", piece_letter(*piece))
            }
            Self::Oversized { piece, rows, cols } => {
                write!(
                    f,
                    "piece {}: {rows}x{cols} footprint exceeds {MAX_FOOTPRINT_ROWS}x{MAX_FOOTPRINT_COLS}",
                    piece_letter(*piece)
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}
