//! Difficulty-banded puzzle generation.
//!
//! A puzzle is a prefill board: the default template with some pieces
//! already placed, to be completed with the rest. Candidates are sampled
//! from previously saved solutions (a subset of one solution's placements
//! is always consistent), solved, and accepted once the measured move
//! count lands in the requested level's band and the solution is unique.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::grid::{Board, PlacementRecord};
use crate::pieces::{PieceCatalog, PIECE_COUNT};
use crate::pruning::Pruner;
use crate::solver::{solve, Collector, SearchLimits};

/// Hardest supported level.
pub const MAX_LEVEL: u8 = 20;

/// Prefilled pieces at level 0, before the per-level reduction.
const INIT_PIECE_COUNT: f64 = 9.0;
const MIN_PIECES_TO_SELECT: f64 = 2.3;
const MAX_PIECES_TO_SELECT: f64 = 11.0;

/// Candidate boards probed before giving up on a level.
const ATTEMPT_BUDGET: usize = 200;
/// Move budget while probing a candidate.
const PROBE_MOVE_BUDGET: usize = 200_000;

/// An accepted puzzle: the prefill board (its placement records are the
/// puzzle definition) and the move count its solve measured.
pub struct GeneratedPuzzle {
    pub board: Board,
    pub moves: usize,
}

/// Move-count band for a difficulty level (1 = easiest).
///
/// Bands are consecutive: each level starts where the previous one ended
/// and widens geometrically.
pub fn difficulty_range(level: u8) -> (usize, usize) {
    let mut low = 7.0_f64;
    let mut high = 20.0 + low / 2.2;
    for _ in 1..level {
        low = high;
        high = low + low / 2.2;
    }
    (low.round() as usize, high.round() as usize)
}

/// Generates a puzzle of the requested level from saved solutions.
///
/// Sampling is driven entirely by `seed`; the same inputs produce the
/// same puzzle.
pub fn generate(
    catalog: &PieceCatalog,
    pruner: &Pruner,
    solutions_dir: &Path,
    level: u8,
    seed: u64,
) -> Result<GeneratedPuzzle, GenerateError> {
    let pools = load_solutions(solutions_dir)?;
    if pools.is_empty() {
        return Err(GenerateError::NoSolutions {
            dir: solutions_dir.to_path_buf(),
        });
    }

    let (low, high) = difficulty_range(level.min(MAX_LEVEL));
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pieces_to_select =
        (INIT_PIECE_COUNT - f64::from(level) / 3.0).clamp(MIN_PIECES_TO_SELECT, MAX_PIECES_TO_SELECT);
    let mut tried: FxHashSet<Vec<PlacementRecord>> = FxHashSet::default();

    for _ in 0..ATTEMPT_BUDGET {
        let pool = &pools[rng.random_range(0..pools.len())];
        let count = (pieces_to_select.round() as usize).min(pool.len());

        let mut selection = pool.clone();
        selection.shuffle(&mut rng);
        selection.truncate(count);
        selection.sort_by_key(|r| (r.piece, r.variant, r.coarse_row, r.coarse_col));
        if !tried.insert(selection.clone()) {
            continue;
        }

        let Some(board) = prefill_board(catalog, &selection) else {
            continue;
        };

        let mut sink = Collector::new();
        let report = solve(
            catalog,
            board.clone(),
            pruner,
            SearchLimits {
                max_moves: Some(PROBE_MOVE_BUDGET),
                max_solutions: Some(2),
            },
            &mut sink,
        );

        if report.solutions_found == 0 {
            continue;
        }
        if report.solutions_found == 1 && (low..=high).contains(&report.moves) {
            return Ok(GeneratedPuzzle {
                board,
                moves: report.moves,
            });
        }

        // steer the prefill size toward the band: fewer prefilled pieces
        // makes the puzzle harder
        if report.moves < low {
            pieces_to_select -= 0.1;
        } else if report.moves > high {
            pieces_to_select += 0.1;
        }
        pieces_to_select = pieces_to_select.clamp(MIN_PIECES_TO_SELECT, MAX_PIECES_TO_SELECT);
    }

    Err(GenerateError::Exhausted {
        attempts: ATTEMPT_BUDGET,
    })
}

/// Applies a record subset to the default template. `None` if a record
/// does not fit (a corrupt solution file).
fn prefill_board(catalog: &PieceCatalog, records: &[PlacementRecord]) -> Option<Board> {
    let mut board = Board::default_template();
    for record in records {
        let placed = board.place_piece(
            catalog,
            record.piece as usize,
            record.variant as usize,
            record.coarse_row as usize,
            record.coarse_col as usize,
        );
        if !placed {
            return None;
        }
    }
    Some(board)
}

/// Loads every parseable solution file from the directory, in path order
/// so sampling is reproducible.
fn load_solutions(dir: &Path) -> Result<Vec<Vec<PlacementRecord>>, GenerateError> {
    let entries = fs::read_dir(dir).map_err(|source| GenerateError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut pools = Vec::new();
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|source| GenerateError::Io {
            path: path.clone(),
            source,
        })?;
        if let Some(records) = parse_solution(&text) {
            pools.push(records);
        }
    }
    Ok(pools)
}

/// Parses a solution file: 12 records of 4 integers.
fn parse_solution(text: &str) -> Option<Vec<PlacementRecord>> {
    let values: Vec<u8> = text
        .split_whitespace()
        .map(|field| field.parse().ok())
        .collect::<Option<Vec<u8>>>()?;
    if values.len() != 4 * PIECE_COUNT {
        return None;
    }

    Some(
        values
            .chunks_exact(4)
            .map(|chunk| PlacementRecord {
                piece: chunk[0],
                variant: chunk[1],
                coarse_row: chunk[2],
                coarse_col: chunk[3],
            })
            .collect(),
    )
}

/// Generation failed; the reason is data, not a panic.
#[derive(Debug)]
pub enum GenerateError {
    Io { path: PathBuf, source: io::Error },
    /// The solutions directory held no parseable solution file.
    NoSolutions { dir: PathBuf },
    /// No candidate met the band within the attempt budget.
    Exhausted { attempts: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::NoSolutions { dir } => {
                write!(
                    f,
                    "no solutions in '{}'; run 'solve --all' first",
                    dir.display()
                )
            }
            Self::Exhausted { attempts } => {
                write!(f, "no puzzle met the difficulty band in {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
