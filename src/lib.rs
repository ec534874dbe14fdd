//! Tile-Fitting Puzzle Solver Library
//!
//! Core functionality for a fixed-shape tiling puzzle: twelve pieces, each
//! with several rotation/reflection variants, are placed on a bordered
//! 14x20 grid by a bounded explicit-stack backtracking search with
//! dead-end pruning. Board and catalog files, solution persistence,
//! terminal rendering and difficulty-banded puzzle generation sit around
//! the core.

pub mod generator;
pub mod geometry;
pub mod grid;
pub mod persistence;
pub mod pieces;
pub mod pruning;
pub mod solver;
pub mod visualization;

pub use grid::{Board, CoarseGrid, PlacementRecord};
pub use pieces::PieceCatalog;
pub use pruning::Pruner;
pub use solver::{solve, SearchLimits, SearchReport, SolutionSink};
