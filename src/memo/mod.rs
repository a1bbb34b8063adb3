// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! The move and pruning tables the two-phase search reads. They depend on
//! nothing but the geometry of the cube, so they are computed once per
//! process and shared by every search.

pub mod moves;
pub mod pruning;

pub use moves::{MovesMemo, PHASE2_MOVES};
pub use pruning::PruningMemo;

use std::sync::OnceLock;
use std::time::Instant;

/// All immutable precomputed data.
///
/// About 4 MB in total, dominated by the phase-2 move tables and the four
/// pruning tables (~1 MB each).
#[derive(Debug, Clone)]
pub struct MemoizedData {
    pub moves: MovesMemo,
    pub pruning: PruningMemo,
}

static SHARED: OnceLock<MemoizedData> = OnceLock::new();

impl MemoizedData {
    /// Compute all tables. Takes a second or so in an optimized build.
    pub fn new() -> Self {
        log::info!("building move and pruning tables");
        let start = Instant::now();

        let moves = MovesMemo::initialize();
        log::debug!("move tables built in {:?}", start.elapsed());
        let pruning = PruningMemo::initialize(&moves);

        log::info!("tables built in {:?}", start.elapsed());
        Self { moves, pruning }
    }

    /// The process-wide tables, built on first use.
    pub fn shared() -> &'static MemoizedData {
        SHARED.get_or_init(MemoizedData::new)
    }
}

impl Default for MemoizedData {
    fn default() -> Self {
        Self::new()
    }
}
