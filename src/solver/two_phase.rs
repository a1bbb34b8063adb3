// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The native solver: cubie verification followed by the two-phase search.

use crate::canonical::CanonicalCubeString;
use crate::context::SearchContext;
use crate::cubie::CubieCube;
use crate::geometry::{Move, MoveSequence};
use crate::memo::MemoizedData;
use crate::search;
use crate::solver::{Solver, SolverConfig, SolverFailure};

/// Kociemba's two-phase algorithm over the shared tables.
///
/// The tables are built on the first solve in the process.
#[derive(Debug, Clone, Default)]
pub struct TwoPhaseSolver {
    config: SolverConfig,
}

impl TwoPhaseSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Solver for TwoPhaseSolver {
    fn solve(&self, cube: &CanonicalCubeString) -> Result<MoveSequence, SolverFailure> {
        let start = CubieCube::from_facelets(cube)
            .and_then(|cubie| cubie.verify().map(|()| cubie))
            .map_err(|err| {
                log::debug!("cube rejected: {}", err.kind());
                SolverFailure::Unsolvable(err.to_string())
            })?;

        let mut ctx = SearchContext::new(MemoizedData::shared(), start, self.config.clone());
        let path =
            search::solve(&mut ctx).map_err(|err| SolverFailure::Internal(err.to_string()))?;
        Ok(path.into_iter().filter_map(Move::from_index).collect())
    }
}
