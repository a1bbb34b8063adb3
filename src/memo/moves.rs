// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Move tables: how each face turn changes each coordinate.
//!
//! Every table is a flat `Vec<u16>` laid out as `coord * ncolumns + move`.
//! Phase-1 tables have a column for each of the 18 moves; phase-2 tables
//! have a column for each of the 10 moves in [`PHASE2_MOVES`].

use crate::cubie::CubieCube;
use crate::geometry::constants::{
    NCORNER_PERM, NFLIP, NMOVES, NMOVES_PHASE2, NSLICE, NSLICE_PERM, NTWIST, NUD_EDGE_PERM,
};

/// Move indices (see [`crate::geometry::Move::index`]) that keep a cube in
/// ⟨U, D, R2, L2, F2, B2⟩: U U2 U' R2 F2 D D2 D' L2 B2.
pub const PHASE2_MOVES: [usize; NMOVES_PHASE2] = [0, 1, 2, 4, 7, 9, 10, 11, 13, 16];

/// MEMO data for coordinate transitions.
///
/// # Memory Layout
///
/// | table        | rows   | columns | bytes   |
/// |--------------|--------|---------|---------|
/// | `twist`      | 2187   | 18      | ~79 KB  |
/// | `flip`       | 2048   | 18      | ~74 KB  |
/// | `slice`      | 495    | 18      | ~18 KB  |
/// | `corners`    | 40320  | 10      | ~806 KB |
/// | `ud_edges`   | 40320  | 10      | ~806 KB |
/// | `slice_perm` | 24     | 10      | <1 KB   |
#[derive(Debug, Clone)]
pub struct MovesMemo {
    pub twist: Vec<u16>,
    pub flip: Vec<u16>,
    pub slice: Vec<u16>,
    pub corners: Vec<u16>,
    pub ud_edges: Vec<u16>,
    pub slice_perm: Vec<u16>,
}

impl MovesMemo {
    pub fn initialize() -> Self {
        let all_moves: Vec<usize> = (0..NMOVES).collect();
        Self {
            twist: build(NTWIST, &all_moves, CubieCube::set_twist, CubieCube::twist),
            flip: build(NFLIP, &all_moves, CubieCube::set_flip, CubieCube::flip),
            slice: build(NSLICE, &all_moves, CubieCube::set_slice, CubieCube::slice),
            corners: build(
                NCORNER_PERM,
                &PHASE2_MOVES,
                CubieCube::set_corners,
                CubieCube::corners,
            ),
            ud_edges: build(
                NUD_EDGE_PERM,
                &PHASE2_MOVES,
                CubieCube::set_ud_edges,
                CubieCube::ud_edges,
            ),
            slice_perm: build(
                NSLICE_PERM,
                &PHASE2_MOVES,
                CubieCube::set_slice_perm,
                CubieCube::slice_perm,
            ),
        }
    }
}

/// Tabulate `get(set(coord) * move)` for every coordinate and listed move.
fn build(
    size: usize,
    moves: &[usize],
    set: fn(&mut CubieCube, usize),
    get: fn(&CubieCube) -> usize,
) -> Vec<u16> {
    let mut table = Vec::with_capacity(size * moves.len());
    let mut cube = CubieCube::solved();
    for coord in 0..size {
        set(&mut cube, coord);
        for &m in moves {
            let mut turned = cube;
            turned.apply_index(m);
            table.push(get(&turned) as u16);
        }
    }
    table
}
