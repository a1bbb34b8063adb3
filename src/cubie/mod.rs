// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The cubie-level cube model.
//!
//! A cube is described by where each corner and edge cubie sits and how it is
//! oriented there:
//!
//! - `cp[i]`: the corner cubie at corner position `i`
//! - `co[i]`: its twist, 0..3
//! - `ep[i]`: the edge cubie at edge position `i`
//! - `eo[i]`: its flip, 0..2
//!
//! Face turns act by multiplication with one of six basic cubes. This is the
//! representation the two-phase search works on, and the place where the
//! reachability of a cube string is decided.

pub mod coords;
pub mod errors;
pub mod facelets;

pub use errors::CubieError;

use crate::geometry::{Move, MoveSequence, NCORNERS, NEDGES};

pub const CORNER_NAMES: [&str; NCORNERS] = ["URF", "UFL", "ULB", "UBR", "DFR", "DLF", "DBL", "DRB"];

pub const EDGE_NAMES: [&str; NEDGES] = [
    "UR", "UF", "UL", "UB", "DR", "DF", "DL", "DB", "FR", "FL", "BL", "BR",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieCube {
    pub(crate) cp: [u8; NCORNERS],
    pub(crate) co: [u8; NCORNERS],
    pub(crate) ep: [u8; NEDGES],
    pub(crate) eo: [u8; NEDGES],
}

/// Clockwise quarter turns of U, R, F, D, L, B, as "replaced by" permutations.
const BASIC_MOVES: [CubieCube; 6] = [
    // U
    CubieCube {
        cp: [3, 0, 1, 2, 4, 5, 6, 7],
        co: [0, 0, 0, 0, 0, 0, 0, 0],
        ep: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
        eo: [0; NEDGES],
    },
    // R
    CubieCube {
        cp: [4, 1, 2, 0, 7, 5, 6, 3],
        co: [2, 0, 0, 1, 1, 0, 0, 2],
        ep: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
        eo: [0; NEDGES],
    },
    // F
    CubieCube {
        cp: [1, 5, 2, 3, 0, 4, 6, 7],
        co: [1, 2, 0, 0, 2, 1, 0, 0],
        ep: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
        eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    },
    // D
    CubieCube {
        cp: [0, 1, 2, 3, 5, 6, 7, 4],
        co: [0, 0, 0, 0, 0, 0, 0, 0],
        ep: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
        eo: [0; NEDGES],
    },
    // L
    CubieCube {
        cp: [0, 2, 6, 3, 4, 1, 5, 7],
        co: [0, 1, 2, 0, 0, 2, 1, 0],
        ep: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
        eo: [0; NEDGES],
    },
    // B
    CubieCube {
        cp: [0, 1, 3, 7, 4, 5, 2, 6],
        co: [0, 0, 1, 2, 0, 0, 2, 1],
        ep: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
        eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    },
];

impl CubieCube {
    pub const fn solved() -> Self {
        Self {
            cp: [0, 1, 2, 3, 4, 5, 6, 7],
            co: [0; NCORNERS],
            ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            eo: [0; NEDGES],
        }
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// Replace `self` by `self * other` (apply `other` after `self`).
    pub fn multiply(&mut self, other: &CubieCube) {
        let mut cp = [0; NCORNERS];
        let mut co = [0; NCORNERS];
        for c in 0..NCORNERS {
            let from = other.cp[c] as usize;
            cp[c] = self.cp[from];
            co[c] = (self.co[from] + other.co[c]) % 3;
        }
        let mut ep = [0; NEDGES];
        let mut eo = [0; NEDGES];
        for e in 0..NEDGES {
            let from = other.ep[e] as usize;
            ep[e] = self.ep[from];
            eo[e] = (self.eo[from] + other.eo[e]) % 2;
        }
        *self = Self { cp, co, ep, eo };
    }

    /// Apply a move given by its index in 0..18 (see [`Move::index`]).
    pub(crate) fn apply_index(&mut self, index: usize) {
        let basic = &BASIC_MOVES[index / 3];
        for _ in 0..=index % 3 {
            self.multiply(basic);
        }
    }

    pub fn apply_move(&mut self, m: Move) {
        self.apply_index(m.index());
    }

    pub fn apply_sequence(&mut self, moves: &MoveSequence) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// Parity of the corner permutation (0 even, 1 odd).
    pub fn corner_parity(&self) -> u8 {
        permutation_parity(&self.cp)
    }

    /// Parity of the edge permutation (0 even, 1 odd).
    pub fn edge_parity(&self) -> u8 {
        permutation_parity(&self.ep)
    }

    /// Check that this cube can be reached from the solved cube.
    ///
    /// Checks, in order: every edge once, even total flip, every corner
    /// once, total twist divisible by three, equal corner and edge parity.
    pub fn verify(&self) -> Result<(), CubieError> {
        let mut edge_count = [0usize; NEDGES];
        for &e in &self.ep {
            edge_count[e as usize] += 1;
        }
        if let Some(e) = edge_count.iter().position(|&n| n != 1) {
            return Err(CubieError::DuplicateEdge {
                edge: EDGE_NAMES[e],
                count: edge_count[e],
            });
        }
        if self.eo.iter().map(|&o| o as usize).sum::<usize>() % 2 != 0 {
            return Err(CubieError::Flip);
        }

        let mut corner_count = [0usize; NCORNERS];
        for &c in &self.cp {
            corner_count[c as usize] += 1;
        }
        if let Some(c) = corner_count.iter().position(|&n| n != 1) {
            return Err(CubieError::DuplicateCorner {
                corner: CORNER_NAMES[c],
                count: corner_count[c],
            });
        }
        let twist = self.co.iter().map(|&o| o as usize).sum::<usize>() % 3;
        if twist != 0 {
            return Err(CubieError::Twist { twist });
        }

        if self.edge_parity() != self.corner_parity() {
            return Err(CubieError::Parity);
        }
        Ok(())
    }
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::solved()
    }
}

/// Parity of a permutation given as a slice of distinct values, by counting
/// inversions.
fn permutation_parity(perm: &[u8]) -> u8 {
    let mut inversions = 0usize;
    for i in (1..perm.len()).rev() {
        for j in 0..i {
            if perm[j] > perm[i] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}
