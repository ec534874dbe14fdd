//! Tile-fitting puzzle solver.
//!
//! Twelve colored pieces must be fitted onto an irregularly bordered
//! 14x20 board so every open cell is covered. The solver runs a bounded
//! depth-first search over piece placements, renders boards in the
//! terminal, and can derive new puzzles of a chosen difficulty from saved
//! solutions.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use tilefit::generator;
use tilefit::grid::Board;
use tilefit::persistence;
use tilefit::pieces::PieceCatalog;
use tilefit::pruning::Pruner;
use tilefit::solver::{self, SearchLimits, SolutionSink, SolutionWriter};
use tilefit::visualization;

/// Directory where all-solutions mode stores its findings.
const SOLUTIONS_DIR: &str = "solutions";

/// Solves and generates tile-fitting puzzles.
#[derive(Parser)]
#[command(name = "tilefit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board file and show a sample solution.
    Solve {
        boardfile: PathBuf,
        /// Move budget before the search gives up.
        #[arg(short = 'm', long = "max-moves", default_value_t = solver::DEFAULT_MOVE_BUDGET)]
        max_moves: usize,
        /// Find every solution and save each one under solutions/.
        #[arg(long)]
        all: bool,
        /// Piece catalog file (defaults to the built-in set).
        #[arg(long)]
        pieces: Option<PathBuf>,
    },
    /// Load a board file and render it.
    Printboard {
        boardfile: PathBuf,
        /// Piece catalog file (defaults to the built-in set).
        #[arg(long)]
        pieces: Option<PathBuf>,
    },
    /// Generate a puzzle of the given difficulty from saved solutions.
    Generate {
        /// Difficulty level, 1-20.
        #[arg(default_value_t = 1)]
        level: u8,
        /// Directory of saved solution files to sample from.
        #[arg(long, default_value = SOLUTIONS_DIR)]
        solutions_dir: PathBuf,
        /// Random seed for reproducible generation.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            boardfile,
            max_moves,
            all,
            pieces,
        } => run_solve(&boardfile, max_moves, all, pieces.as_deref()),
        Command::Printboard { boardfile, pieces } => run_printboard(&boardfile, pieces.as_deref()),
        Command::Generate {
            level,
            solutions_dir,
            seed,
        } => run_generate(level, &solutions_dir, seed),
    }
}

/// Loads the requested catalog, or the built-in one. A load failure is
/// reported and ends the run cleanly.
fn load_catalog(path: Option<&Path>) -> Option<PieceCatalog> {
    match path {
        Some(path) => match persistence::load_catalog(path) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                eprintln!("Error: {e}");
                None
            }
        },
        None => Some(PieceCatalog::built_in()),
    }
}

fn load_board(path: &Path, catalog: &PieceCatalog) -> Option<Board> {
    match persistence::load_board(path, catalog) {
        Ok(board) => Some(board),
        Err(e) => {
            eprintln!("Error: {e}");
            None
        }
    }
}

fn run_solve(boardfile: &Path, max_moves: usize, all: bool, pieces: Option<&Path>) {
    let Some(catalog) = load_catalog(pieces) else {
        return;
    };
    let Some(board) = load_board(boardfile, &catalog) else {
        return;
    };

    println!();
    println!("{}", boardfile.display());
    println!();
    println!("{}", visualization::render_ansi(&board));

    let limits = if all {
        SearchLimits::unbounded()
    } else {
        SearchLimits::capped(max_moves)
    };
    let mut sink = CliSink {
        solutions: Vec::new(),
        writer: all.then(|| SolutionWriter::new(SOLUTIONS_DIR)),
    };

    let report = solver::solve(&catalog, board, &Pruner::default(), limits, &mut sink);

    println!(
        "Found {} solutions using {} moves.",
        report.solutions_found, report.moves
    );
    if let Some(first) = sink.solutions.first() {
        println!();
        println!("Sample solution:");
        println!("{}", visualization::render_ansi(first));
    }
}

fn run_printboard(boardfile: &Path, pieces: Option<&Path>) {
    let Some(catalog) = load_catalog(pieces) else {
        return;
    };
    let Some(board) = load_board(boardfile, &catalog) else {
        return;
    };
    println!("{}", visualization::render_ansi(&board));
}

fn run_generate(level: u8, solutions_dir: &Path, seed: u64) {
    let catalog = PieceCatalog::built_in();
    match generator::generate(&catalog, &Pruner::default(), solutions_dir, level, seed) {
        Ok(puzzle) => {
            println!(
                "Generated a level {level} puzzle ({} moves to solve):",
                puzzle.moves
            );
            println!();
            println!("{}", visualization::render_ansi(&puzzle.board));
            // the records are the puzzle file: feed them back to `solve`
            println!("{}", persistence::solution_text(&puzzle.board));
        }
        Err(e) => eprintln!("Error: {e}"),
    }
}

/// Prints the running solution count and forwards to the all-solutions
/// writer when one is attached.
struct CliSink {
    solutions: Vec<Board>,
    writer: Option<SolutionWriter>,
}

impl SolutionSink for CliSink {
    fn accept(&mut self, board: &Board) {
        self.solutions.push(board.clone());
        println!("Solutions found: {}", self.solutions.len());
        if let Some(writer) = &mut self.writer {
            writer.accept(board);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_arguments() {
        let cli = Cli::try_parse_from(["tilefit", "solve", "board", "-m", "500"]).unwrap();
        match cli.command {
            Command::Solve {
                boardfile,
                max_moves,
                all,
                pieces,
            } => {
                assert_eq!(boardfile, PathBuf::from("board"));
                assert_eq!(max_moves, 500);
                assert!(!all);
                assert!(pieces.is_none());
            }
            _ => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn test_solve_defaults() {
        let cli = Cli::try_parse_from(["tilefit", "solve", "board"]).unwrap();
        match cli.command {
            Command::Solve { max_moves, .. } => {
                assert_eq!(max_moves, solver::DEFAULT_MOVE_BUDGET);
            }
            _ => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn test_solve_requires_a_board_file() {
        assert!(Cli::try_parse_from(["tilefit", "solve"]).is_err());
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["tilefit", "generate"]).unwrap();
        match cli.command {
            Command::Generate {
                level,
                solutions_dir,
                seed,
            } => {
                assert_eq!(level, 1);
                assert_eq!(solutions_dir, PathBuf::from(SOLUTIONS_DIR));
                assert_eq!(seed, 0);
            }
            _ => panic!("parsed the wrong subcommand"),
        }
    }
}
