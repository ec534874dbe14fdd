//! File I/O: board files, piece catalogs, and solution files.
//!
//! A board file comes in two layouts:
//!
//! - shape: up to 14 lines of up to 20 characters, `X` marking border
//!   cells (see [`Board::from_shape_text`]),
//! - prefill: placement records, 4 integers per line, applied to the
//!   default board template in order. This is the layout the generator
//!   emits and the solution files use.
//!
//! A file whose first non-empty line is 4 integers is read as prefill.
//!
//! Solution files hold 48 integers: 12 records of (piece, variant, coarse
//! row, coarse col), 4 values per line, space-separated, with a newline
//! after every line but the last.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::grid::{Board, COARSE_COLS, COARSE_ROWS, PlacementRecord};
use crate::pieces::{CatalogError, PieceCatalog, PIECE_COUNT};

/// A board or catalog that could not be loaded, with the reason as data.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read at all.
    Io { path: PathBuf, source: io::Error },
    /// A piece catalog file parsed but was malformed.
    Catalog {
        path: PathBuf,
        source: CatalogError,
    },
    /// A prefill line was malformed or its placement does not fit.
    Prefill { line: usize, reason: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Catalog { path, source } => {
                write!(f, "invalid piece catalog '{}': {source}", path.display())
            }
            Self::Prefill { line, reason } => {
                write!(f, "invalid placement on line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Catalog { source, .. } => Some(source),
            Self::Prefill { .. } => None,
        }
    }
}

/// Loads a board file, detecting the shape or prefill layout.
pub fn load_board(path: &Path, catalog: &PieceCatalog) -> Result<Board, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_prefill(&text) {
        parse_prefill(&text, catalog)
    } else {
        Ok(Board::from_shape_text(&text))
    }
}

/// Loads a piece catalog file.
pub fn load_catalog(path: &Path) -> Result<PieceCatalog, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    PieceCatalog::from_text(&text).map_err(|source| LoadError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

/// True if the first non-empty line consists of 4 integers.
fn is_prefill(text: &str) -> bool {
    match text.lines().find(|line| !line.trim().is_empty()) {
        Some(line) => {
            let fields: Vec<&str> = line.split_whitespace().collect();
            fields.len() == 4 && fields.iter().all(|f| f.parse::<u32>().is_ok())
        }
        None => false,
    }
}

/// Applies prefill records to the default board template, in file order.
pub fn parse_prefill(text: &str, catalog: &PieceCatalog) -> Result<Board, LoadError> {
    let mut board = Board::default_template();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let record = parse_record(line).ok_or_else(|| LoadError::Prefill {
            line: line_no,
            reason: format!("expected 4 integers, got '{}'", line.trim()),
        })?;

        check_record(&record, catalog).map_err(|reason| LoadError::Prefill {
            line: line_no,
            reason,
        })?;

        let placed = board.place_piece(
            catalog,
            record.piece as usize,
            record.variant as usize,
            record.coarse_row as usize,
            record.coarse_col as usize,
        );
        if !placed {
            return Err(LoadError::Prefill {
                line: line_no,
                reason: format!(
                    "piece {} variant {} does not fit at ({}, {})",
                    record.piece, record.variant, record.coarse_row, record.coarse_col
                ),
            });
        }
    }

    Ok(board)
}

fn parse_record(line: &str) -> Option<PlacementRecord> {
    let mut fields = line.split_whitespace();
    let piece = fields.next()?.parse().ok()?;
    let variant = fields.next()?.parse().ok()?;
    let coarse_row = fields.next()?.parse().ok()?;
    let coarse_col = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(PlacementRecord {
        piece,
        variant,
        coarse_row,
        coarse_col,
    })
}

fn check_record(record: &PlacementRecord, catalog: &PieceCatalog) -> Result<(), String> {
    if record.piece as usize >= PIECE_COUNT {
        return Err(format!("piece {} out of range", record.piece));
    }
    if record.variant as usize >= catalog[record.piece as usize].len() {
        return Err(format!(
            "piece {} has no variant {}",
            record.piece, record.variant
        ));
    }
    if record.coarse_row as usize >= COARSE_ROWS || record.coarse_col as usize >= COARSE_COLS {
        return Err(format!(
            "anchor ({}, {}) off the coarse grid",
            record.coarse_row, record.coarse_col
        ));
    }
    Ok(())
}

/// Formats a board's placement records in the solution-file layout.
pub fn solution_text(board: &Board) -> String {
    let lines: Vec<String> = board
        .placements()
        .iter()
        .map(|record| {
            format!(
                "{} {} {} {}",
                record.piece, record.variant, record.coarse_row, record.coarse_col
            )
        })
        .collect();
    lines.join("\n")
}

/// Writes a completed board's records as a solution file.
pub fn write_solution(board: &Board, path: &Path) -> io::Result<()> {
    fs::write(path, solution_text(board))
}
