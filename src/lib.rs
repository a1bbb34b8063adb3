// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validation, canonicalization and solving of scanned Rubik's Cube states.
//!
//! A capture front-end reads the colors of the six faces. This crate turns
//! those readings into a move sequence that solves the cube:
//!
//! ```text
//! CubeState ──validate_cube_state──▶ ValidatedCubeState ──canonicalize──▶ CanonicalCubeString
//!                                                                           │ (stored as text)
//!                                                                           ▼
//!              MoveSequence ◀──Solver── validate_cube_string ◀── solve_cube_string
//! ```
//!
//! # Architecture
//!
//! ## Validation layer
//!
//! - [`validation`]: the two structural validators, for the color-keyed state
//!   and for the face-letter string
//! - [`canonical`]: the canonical 54-facelet string and the canonicalizer
//! - [`state`]: raw and validated cube states, and the scan session
//! - [`capture`]: HSV color classification for capture front-ends
//! - [`persist`]: the JSON and text files passed between stages
//!
//! ## Solver
//!
//! - [`solver`]: the [`Solver`] trait, the adapter and the native solver
//! - [`cubie`]: the cubie model, reachability checks and coordinates
//! - [`memo`]: Tier 1, immutable move and pruning tables shared by all searches
//! - [`context`]: Tier 2, the mutable state of one search
//! - [`search`]: two-phase iterative deepening
//!
//! # References
//!
//! - Kociemba, H. "Two-Phase Algorithm Details."
//!   <https://kociemba.org/math/imptwophase.htm>

pub mod canonical;
pub mod capture;
pub mod context;
pub mod cubie;
pub mod geometry;
pub mod memo;
pub mod persist;
pub mod search;
pub mod solver;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use canonical::{canonicalize, CanonicalCubeString};
pub use geometry::{ColorLabel, FaceKey, Move, MoveSequence};
pub use solver::{solve_cube_string, SolveError, Solver, SolverConfig, TwoPhaseSolver};
pub use state::{CubeState, ValidatedCubeState};
pub use validation::{validate_cube_state, validate_cube_string, StructuralError};
