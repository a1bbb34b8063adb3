// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-phase iterative-deepening search.
//!
//! Phase 1 brings the cube into the subgroup ⟨U, D, R2, L2, F2, B2⟩, where
//! every corner and edge is oriented and the four slice edges are in the
//! slice. Phase 2 solves the cube using only moves of that subgroup.
//!
//! For each phase-1 depth in increasing order, every phase-1 solution of
//! exactly that length is handed to phase 2, which searches up to
//! `min(max_phase2_depth, max_length - depth1)` moves. The first complete
//! solution found is returned; it is short but not necessarily optimal.
//!
//! Moves are pruned when they turn the same face as the previous move, or
//! the opposite face of a previous move with a higher face index (U then D
//! is searched, D then U is not).

use crate::context::SearchContext;
use crate::geometry::constants::{
    NCORNER_PERM, NFLIP, NMOVES, NMOVES_PHASE2, NTWIST, NUD_EDGE_PERM,
};
use crate::memo::{MemoizedData, PHASE2_MOVES};
use crate::state::Counters;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no solution within {max_length} moves")]
    NoSolution { max_length: usize },

    #[error("timed out")]
    TimedOut,
}

/// Phase-1 coordinates.
#[derive(Debug, Clone, Copy)]
struct Phase1 {
    twist: usize,
    flip: usize,
    slice: usize,
}

/// Phase-2 coordinates.
#[derive(Debug, Clone, Copy)]
struct Phase2 {
    corners: usize,
    ud_edges: usize,
    slice_perm: usize,
}

impl Phase1 {
    fn bound(self, memo: &MemoizedData) -> usize {
        let pruning = &memo.pruning;
        pruning.slice_twist[self.slice * NTWIST + self.twist]
            .max(pruning.slice_flip[self.slice * NFLIP + self.flip]) as usize
    }

    fn apply(self, memo: &MemoizedData, m: usize) -> Self {
        let moves = &memo.moves;
        Self {
            twist: moves.twist[self.twist * NMOVES + m] as usize,
            flip: moves.flip[self.flip * NMOVES + m] as usize,
            slice: moves.slice[self.slice * NMOVES + m] as usize,
        }
    }
}

impl Phase2 {
    fn bound(self, memo: &MemoizedData) -> usize {
        let pruning = &memo.pruning;
        pruning.corners[self.slice_perm * NCORNER_PERM + self.corners]
            .max(pruning.ud_edges[self.slice_perm * NUD_EDGE_PERM + self.ud_edges])
            as usize
    }

    /// `k` indexes [`PHASE2_MOVES`].
    fn apply(self, memo: &MemoizedData, k: usize) -> Self {
        let moves = &memo.moves;
        Self {
            corners: moves.corners[self.corners * NMOVES_PHASE2 + k] as usize,
            ud_edges: moves.ud_edges[self.ud_edges * NMOVES_PHASE2 + k] as usize,
            slice_perm: moves.slice_perm[self.slice_perm * NMOVES_PHASE2 + k] as usize,
        }
    }
}

/// Whether move `m` may follow the last move of the path.
fn allowed_after(path: &[usize], m: usize) -> bool {
    match path.last() {
        None => true,
        Some(&last) => {
            let (face, last_face) = (m / 3, last / 3);
            face != last_face && face + 3 != last_face
        }
    }
}

/// Search for a solution of `ctx.start`; returns move indices.
///
/// The start cube must pass [`crate::cubie::CubieCube::verify`].
pub fn solve(ctx: &mut SearchContext) -> Result<Vec<usize>, SearchError> {
    let start = ctx.start;
    let coords = Phase1 {
        twist: start.twist(),
        flip: start.flip(),
        slice: start.slice(),
    };
    let result = deepen(ctx, coords);
    log::debug!("search finished: {}", ctx.statistics);
    result
}

fn deepen(ctx: &mut SearchContext, coords: Phase1) -> Result<Vec<usize>, SearchError> {
    let max_length = ctx.config.max_length;
    for depth1 in coords.bound(ctx.memo)..=max_length {
        log::debug!("phase 1 depth {}", depth1);
        ctx.path.clear();
        if phase1(ctx, coords, depth1) {
            return Ok(ctx.path.clone());
        }
        if ctx.timed_out() {
            return Err(SearchError::TimedOut);
        }
    }
    Err(SearchError::NoSolution { max_length })
}

fn phase1(ctx: &mut SearchContext, coords: Phase1, togo: usize) -> bool {
    if togo == 0 {
        // Only a bound of 0 reaches here, so the cube is in the subgroup.
        // A phase-2 move last means a shorter phase-1 path was already tried.
        if let Some(last) = ctx.path.last() {
            if PHASE2_MOVES.contains(last) {
                return false;
            }
        }
        return phase2_start(ctx);
    }
    if ctx.visit(Counters::Phase1Nodes) {
        return false;
    }
    let memo = ctx.memo;
    for m in 0..NMOVES {
        if !allowed_after(&ctx.path, m) {
            continue;
        }
        let next = coords.apply(memo, m);
        if next.bound(memo) >= togo {
            continue;
        }
        ctx.path.push(m);
        if phase1(ctx, next, togo - 1) {
            return true;
        }
        ctx.path.pop();
        if ctx.timed_out() {
            return false;
        }
    }
    false
}

fn phase2_start(ctx: &mut SearchContext) -> bool {
    if ctx.visit(Counters::Phase2Probes) {
        return false;
    }
    let cube = ctx.current_cube();
    let coords = Phase2 {
        corners: cube.corners(),
        ud_edges: cube.ud_edges(),
        slice_perm: cube.slice_perm(),
    };
    let limit = ctx
        .config
        .max_phase2_depth
        .min(ctx.config.max_length.saturating_sub(ctx.path.len()));
    for depth2 in coords.bound(ctx.memo)..=limit {
        if phase2(ctx, coords, depth2) {
            return true;
        }
        if ctx.timed_out() {
            return false;
        }
    }
    false
}

fn phase2(ctx: &mut SearchContext, coords: Phase2, togo: usize) -> bool {
    if togo == 0 {
        // A bound of 0 means every phase-2 coordinate is solved.
        return true;
    }
    if ctx.visit(Counters::Phase2Nodes) {
        return false;
    }
    let memo = ctx.memo;
    for (k, &m) in PHASE2_MOVES.iter().enumerate() {
        if !allowed_after(&ctx.path, m) {
            continue;
        }
        let next = coords.apply(memo, k);
        if next.bound(memo) >= togo {
            continue;
        }
        ctx.path.push(m);
        if phase2(ctx, next, togo - 1) {
            return true;
        }
        ctx.path.pop();
        if ctx.timed_out() {
            return false;
        }
    }
    false
}
