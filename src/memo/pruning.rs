// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pruning tables: exact distances to the goal in a pair of coordinates.
//!
//! Each table is a breadth-first search from the solved pair over the
//! corresponding move tables. The distance in a pair of coordinates never
//! exceeds the distance of the full cube, so the tables give admissible
//! lower bounds for iterative deepening.

use crate::geometry::constants::{
    NCORNER_PERM, NFLIP, NMOVES, NMOVES_PHASE2, NSLICE, NSLICE_PERM, NTWIST, NUD_EDGE_PERM,
};
use crate::memo::MovesMemo;

const UNSET: u8 = u8::MAX;

/// MEMO data for search bounds.
///
/// - `slice_twist[slice * NTWIST + twist]`: phase-1 moves ignoring flip
/// - `slice_flip[slice * NFLIP + flip]`: phase-1 moves ignoring twist
/// - `corners[slice_perm * NCORNER_PERM + corners]`: phase-2 moves ignoring U/D edges
/// - `ud_edges[slice_perm * NUD_EDGE_PERM + ud_edges]`: phase-2 moves ignoring corners
#[derive(Debug, Clone)]
pub struct PruningMemo {
    pub slice_twist: Vec<u8>,
    pub slice_flip: Vec<u8>,
    pub corners: Vec<u8>,
    pub ud_edges: Vec<u8>,
}

impl PruningMemo {
    pub fn initialize(moves: &MovesMemo) -> Self {
        Self {
            slice_twist: breadth_first(NSLICE, NTWIST, NMOVES, &moves.slice, &moves.twist),
            slice_flip: breadth_first(NSLICE, NFLIP, NMOVES, &moves.slice, &moves.flip),
            corners: breadth_first(
                NSLICE_PERM,
                NCORNER_PERM,
                NMOVES_PHASE2,
                &moves.slice_perm,
                &moves.corners,
            ),
            ud_edges: breadth_first(
                NSLICE_PERM,
                NUD_EDGE_PERM,
                NMOVES_PHASE2,
                &moves.slice_perm,
                &moves.ud_edges,
            ),
        }
    }
}

/// Distances from `(0, 0)` in the product of two coordinates.
///
/// `outer_moves` and `inner_moves` are move tables with `ncolumns` columns;
/// the entry for `(a, b)` is stored at `a * inner_size + b`.
fn breadth_first(
    outer_size: usize,
    inner_size: usize,
    ncolumns: usize,
    outer_moves: &[u16],
    inner_moves: &[u16],
) -> Vec<u8> {
    let mut table = vec![UNSET; outer_size * inner_size];
    table[0] = 0;
    let mut frontier = vec![0usize];
    let mut depth = 0u8;
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &index in &frontier {
            let (outer, inner) = (index / inner_size, index % inner_size);
            for m in 0..ncolumns {
                let a = outer_moves[outer * ncolumns + m] as usize;
                let b = inner_moves[inner * ncolumns + m] as usize;
                let neighbour = a * inner_size + b;
                if table[neighbour] == UNSET {
                    table[neighbour] = depth + 1;
                    next.push(neighbour);
                }
            }
        }
        log::trace!("pruning depth {}: {} entries", depth + 1, next.len());
        frontier = next;
        depth += 1;
    }
    table
}
