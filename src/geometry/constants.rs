// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the 3×3 cube.
//!
//! The facelet layout constants describe the 54-character canonical string.
//! The coordinate sizes describe the spaces the two-phase search works in.
//!
//! # Canonical layout
//!
//! ```text
//!              |U1 U2 U3|
//!              |U4 U5 U6|
//!              |U7 U8 U9|
//!     |L1 L2 L3|F1 F2 F3|R1 R2 R3|B1 B2 B3|
//!     |L4 L5 L6|F4 F5 F6|R4 R5 R6|B4 B5 B6|
//!     |L7 L8 L9|F7 F8 F9|R7 R8 R9|B7 B8 B9|
//!              |D1 D2 D3|
//!              |D4 D5 D6|
//!              |D7 D8 D9|
//! ```
//!
//! The string lists the faces in the order U, R, F, D, L, B, each face
//! row-major, so `U1` is index 0 and `B9` is index 53.

/// Number of faces on the cube.
pub const NFACES: usize = 6;

/// Number of facelets on one face.
pub const FACE_SIZE: usize = 9;

/// Number of facelets on the whole cube.
pub const NFACELETS: usize = NFACES * FACE_SIZE;

/// Index of the center facelet within a face grid.
pub const CENTER_INDEX: usize = 4;

/// Number of corner cubies.
pub const NCORNERS: usize = 8;

/// Number of edge cubies.
pub const NEDGES: usize = 12;

/// Number of face turns in the half-turn metric (6 faces × 3 powers).
pub const NMOVES: usize = NFACES * 3;

/// Number of face turns that keep a cube inside the phase-2 subgroup
/// ⟨U, D, R2, L2, F2, B2⟩.
pub const NMOVES_PHASE2: usize = 10;

/// Compute factorial at compile time.
const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Compute binomial coefficient (n choose k) at compile time.
///
/// Returns 0 when `k > n`, which the slice coordinate relies on.
pub const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else if k == 0 || k == n {
        1
    } else {
        factorial(n) / (factorial(k) * factorial(n - k))
    }
}

/// 3^7 corner orientations (the eighth is determined by the others).
pub const NTWIST: usize = 2187;

/// 2^11 edge orientations (the twelfth is determined by the others).
pub const NFLIP: usize = 2048;

/// Positions of the four UD-slice edges, ignoring their order: C(12, 4).
pub const NSLICE: usize = choose(NEDGES, 4);

/// Permutations of the eight corners.
pub const NCORNER_PERM: usize = factorial(NCORNERS);

/// Permutations of the eight U- and D-layer edges inside phase 2.
pub const NUD_EDGE_PERM: usize = factorial(8);

/// Permutations of the four UD-slice edges inside phase 2.
pub const NSLICE_PERM: usize = factorial(4);
