// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the shared move and pruning tables
//! - Tier 2 (DYNAMIC): the cube being solved, the current move path, the
//!   clock and the node counters of one search
//!
//! Every solve builds its own context over the same shared MEMO data, so
//! concurrent solves need no locking.

use crate::cubie::CubieCube;
use crate::memo::MemoizedData;
use crate::solver::SolverConfig;
use crate::state::{Counters, Statistics};
use std::time::Instant;

/// Check the clock once every this many nodes.
const CLOCK_INTERVAL: u32 = 1 << 12;

#[derive(Debug)]
pub struct SearchContext<'a> {
    /// Immutable precomputed data (Tier 1)
    pub memo: &'a MemoizedData,
    /// The cube being solved.
    pub start: CubieCube,
    /// Move indices of the current phase-1 path followed by the phase-2 path.
    pub path: Vec<usize>,
    pub config: SolverConfig,
    pub statistics: Statistics,
    deadline: Option<Instant>,
    timed_out: bool,
    nodes_since_clock: u32,
}

impl<'a> SearchContext<'a> {
    pub fn new(memo: &'a MemoizedData, start: CubieCube, config: SolverConfig) -> Self {
        let deadline = config.timeout.map(|t| Instant::now() + t);
        Self {
            memo,
            start,
            path: Vec::with_capacity(config.max_length),
            config,
            statistics: Statistics::new(),
            deadline,
            timed_out: false,
            nodes_since_clock: 0,
        }
    }

    /// Count a node and report whether the search should stop.
    pub fn visit(&mut self, counter: Counters) -> bool {
        self.statistics.increment_counter(counter);
        if self.timed_out {
            return true;
        }
        self.nodes_since_clock += 1;
        if self.nodes_since_clock >= CLOCK_INTERVAL {
            self.nodes_since_clock = 0;
            if let Some(deadline) = self.deadline {
                self.timed_out = Instant::now() >= deadline;
            }
        }
        self.timed_out
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// The start cube with the current path applied.
    pub fn current_cube(&self) -> CubieCube {
        let mut cube = self.start;
        for &m in &self.path {
            cube.apply_index(m);
        }
        cube
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_zero_timeout_trips_on_clock_check() {
        let memo = MemoizedData::shared();
        let config = SolverConfig {
            timeout: Some(Duration::ZERO),
            ..SolverConfig::default()
        };
        let mut ctx = SearchContext::new(memo, CubieCube::solved(), config);
        let mut stopped = false;
        for _ in 0..CLOCK_INTERVAL {
            stopped = ctx.visit(Counters::Phase1Nodes);
        }
        assert!(stopped);
        assert!(ctx.timed_out());
        assert_eq!(
            ctx.statistics.get(Counters::Phase1Nodes),
            CLOCK_INTERVAL as u64
        );
    }

    #[test]
    fn test_current_cube_follows_path() {
        let memo = MemoizedData::shared();
        let mut ctx = SearchContext::new(memo, CubieCube::solved(), SolverConfig::default());
        ctx.path.extend([3, 5]); // R R'
        assert!(ctx.current_cube().is_solved());
        ctx.path.push(0); // U
        assert!(!ctx.current_cube().is_solved());
        assert!(!ctx.visit(Counters::Phase2Nodes));
    }
}
