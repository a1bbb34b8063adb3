// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The solver adapter.
//!
//! [`solve_cube_string`] is the single entry point between a stored cube
//! string and a [`Solver`]. It re-validates the string, hands it to the
//! solver, and sorts failures into three kinds:
//!
//! - the string is malformed (the solver is never called);
//! - the solver says the cube cannot be reached from the solved state;
//! - anything else the solver reports, passed on verbatim.
//!
//! There are no retries.

pub mod config;
pub mod two_phase;

pub use config::SolverConfig;
pub use two_phase::TwoPhaseSolver;

use crate::canonical::CanonicalCubeString;
use crate::geometry::MoveSequence;
use crate::validation::string::read_cube_string;
use crate::validation::StructuralError;
use thiserror::Error;

/// How a solver reports that it did not produce a solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverFailure {
    /// The cube cannot be reached from the solved state.
    #[error("{0}")]
    Unsolvable(String),

    /// Any other failure: limits exceeded, timeouts, internal errors.
    #[error("{0}")]
    Internal(String),
}

/// A combinatorial solver over canonical cube strings.
///
/// Closures with the same signature are solvers, which keeps test doubles
/// short.
pub trait Solver {
    fn solve(&self, cube: &CanonicalCubeString) -> Result<MoveSequence, SolverFailure>;
}

impl<F> Solver for F
where
    F: Fn(&CanonicalCubeString) -> Result<MoveSequence, SolverFailure>,
{
    fn solve(&self, cube: &CanonicalCubeString) -> Result<MoveSequence, SolverFailure> {
        self(cube)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The string failed structural validation; the solver was not invoked.
    #[error("invalid cube string: {0}")]
    InvalidCubeString(#[from] StructuralError),

    /// The string is well formed but describes an impossible cube.
    #[error("cube cannot be solved: {reason}")]
    Rejected { reason: String },

    /// The solver failed for some other reason.
    #[error("solver failed: {message}")]
    Solver { message: String },
}

impl From<SolverFailure> for SolveError {
    fn from(failure: SolverFailure) -> Self {
        match failure {
            SolverFailure::Unsolvable(reason) => SolveError::Rejected { reason },
            SolverFailure::Internal(message) => SolveError::Solver { message },
        }
    }
}

/// Validate `cube_string` and solve it.
///
/// # Examples
///
/// ```
/// use cube_solver::canonical::CanonicalCubeString;
/// use cube_solver::geometry::MoveSequence;
/// use cube_solver::solver::{solve_cube_string, SolveError, SolverFailure};
///
/// let never_called = |_: &CanonicalCubeString| -> Result<MoveSequence, SolverFailure> {
///     unreachable!()
/// };
/// assert!(matches!(
///     solve_cube_string("UUU", &never_called),
///     Err(SolveError::InvalidCubeString(_))
/// ));
/// ```
pub fn solve_cube_string(
    cube_string: &str,
    solver: &dyn Solver,
) -> Result<MoveSequence, SolveError> {
    let cube = CanonicalCubeString::from_facelets_unchecked(read_cube_string(cube_string)?);

    match solver.solve(&cube) {
        Ok(moves) => {
            log::info!("solution ({} moves): {}", moves.len(), moves);
            Ok(moves)
        }
        Err(failure) => {
            log::warn!("solver failed: {}", failure);
            Err(failure.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    type Outcome = Result<MoveSequence, SolverFailure>;

    #[test]
    fn test_invalid_string_never_reaches_solver() {
        let calls = Cell::new(0);
        let solver = |_: &CanonicalCubeString| -> Outcome {
            calls.set(calls.get() + 1);
            Ok(MoveSequence::default())
        };
        assert_eq!(
            solve_cube_string(&SOLVED[..53], &solver),
            Err(SolveError::InvalidCubeString(StructuralError::StringLength {
                found: 53
            }))
        );
        assert!(matches!(
            solve_cube_string(&SOLVED.replace('B', "X"), &solver),
            Err(SolveError::InvalidCubeString(
                StructuralError::InvalidCharacter { .. }
            ))
        ));
        assert_eq!(calls.get(), 0);

        assert_eq!(solve_cube_string(SOLVED, &solver), Ok(MoveSequence::default()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failure_kinds() {
        let unsolvable = |_: &CanonicalCubeString| -> Outcome {
            Err(SolverFailure::Unsolvable("one edge has to be flipped".into()))
        };
        assert_eq!(
            solve_cube_string(SOLVED, &unsolvable),
            Err(SolveError::Rejected {
                reason: "one edge has to be flipped".into()
            })
        );

        let broken = |_: &CanonicalCubeString| -> Outcome {
            Err(SolverFailure::Internal("out of memory".into()))
        };
        let err = solve_cube_string(SOLVED, &broken).unwrap_err();
        assert_eq!(
            err,
            SolveError::Solver {
                message: "out of memory".into()
            }
        );
        assert_eq!(err.to_string(), "solver failed: out of memory");
    }

    #[test]
    fn test_adapter_agrees_with_string_validator() {
        let seen = Cell::new(None);
        let solver = |cube: &CanonicalCubeString| -> Outcome {
            seen.set(Some(*cube));
            Ok(MoveSequence::default())
        };
        let inputs = [
            SOLVED.to_string(),
            SOLVED[..53].to_string(),
            SOLVED.replace('B', "b"),
            SOLVED.replacen('U', "R", 1),
        ];
        for input in &inputs {
            let expected = crate::validation::validate_cube_string(input);
            match solve_cube_string(input, &solver) {
                Err(SolveError::InvalidCubeString(err)) => assert_eq!(expected, Err(err)),
                other => {
                    assert_eq!(expected, Ok(()));
                    assert_eq!(other, Ok(MoveSequence::default()));
                }
            }
        }
        assert_eq!(seen.get().map(|cube| cube.to_string()), Some(SOLVED.to_string()));
    }

    #[test]
    fn test_solution_passed_through() {
        let moves: MoveSequence = "R U R' U'".parse().unwrap();
        let expected = moves.clone();
        let solver = move |_: &CanonicalCubeString| -> Outcome { Ok(moves.clone()) };
        assert_eq!(solve_cube_string(SOLVED, &solver), Ok(expected));
    }
}
