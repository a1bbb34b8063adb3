// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coordinates: small integers that index the move and pruning tables.
//!
//! Phase 1 uses `twist`, `flip` and `slice` (which four positions hold the
//! UD-slice edges). Phase 2 uses `corners`, `ud_edges` and `slice_perm`,
//! which are only meaningful once every slice edge is back in the slice.
//! All coordinates of the solved cube are 0.
//!
//! Each setter builds *some* cube with the given coordinate, leaving the
//! unrelated cubies in a fixed arrangement.

use crate::cubie::CubieCube;
use crate::geometry::{choose, NCORNERS, NEDGES};

/// Edges FR, FL, BL, BR start at this edge index.
const FIRST_SLICE_EDGE: u8 = 8;

/// Rotate `a[0..=r]` one step to the left.
fn rotate_left(a: &mut [u8], r: usize) {
    a[..=r].rotate_left(1);
}

/// Rotate `a[0..=r]` one step to the right.
fn rotate_right(a: &mut [u8], r: usize) {
    a[..=r].rotate_right(1);
}

/// Index of a permutation of `0..n` in `0..n!`.
fn permutation_index(perm: &mut [u8]) -> usize {
    let mut b = 0;
    for j in (1..perm.len()).rev() {
        let mut k = 0;
        while perm[j] as usize != j {
            rotate_left(perm, j);
            k += 1;
        }
        b = (j + 1) * b + k;
    }
    b
}

/// Inverse of [`permutation_index`]: writes the permutation into `perm`.
fn set_permutation_index(perm: &mut [u8], mut index: usize) {
    for (i, p) in perm.iter_mut().enumerate() {
        *p = i as u8;
    }
    for j in 0..perm.len() {
        let mut k = index % (j + 1);
        index /= j + 1;
        while k > 0 {
            rotate_right(perm, j);
            k -= 1;
        }
    }
}

impl CubieCube {
    /// Corner orientation, 0..2187.
    pub fn twist(&self) -> usize {
        self.co[..NCORNERS - 1]
            .iter()
            .fold(0, |t, &o| 3 * t + o as usize)
    }

    pub fn set_twist(&mut self, mut twist: usize) {
        let mut total = 0;
        for i in (0..NCORNERS - 1).rev() {
            self.co[i] = (twist % 3) as u8;
            total += self.co[i];
            twist /= 3;
        }
        self.co[NCORNERS - 1] = (3 - total % 3) % 3;
    }

    /// Edge orientation, 0..2048.
    pub fn flip(&self) -> usize {
        self.eo[..NEDGES - 1]
            .iter()
            .fold(0, |t, &o| 2 * t + o as usize)
    }

    pub fn set_flip(&mut self, mut flip: usize) {
        let mut total = 0;
        for i in (0..NEDGES - 1).rev() {
            self.eo[i] = (flip % 2) as u8;
            total += self.eo[i];
            flip /= 2;
        }
        self.eo[NEDGES - 1] = total % 2;
    }

    /// Positions of the four slice edges, ignoring their order, 0..495.
    pub fn slice(&self) -> usize {
        let mut a = 0;
        let mut x = 0;
        for j in (0..NEDGES).rev() {
            if self.ep[j] >= FIRST_SLICE_EDGE {
                a += choose(NEDGES - 1 - j, x + 1);
                x += 1;
            }
        }
        a
    }

    pub fn set_slice(&mut self, mut slice: usize) {
        let mut slice_edge = FIRST_SLICE_EDGE;
        let mut other_edge = 0;
        let mut x = 4;
        for j in 0..NEDGES {
            let c = choose(NEDGES - 1 - j, x);
            if x > 0 && slice >= c {
                self.ep[j] = slice_edge;
                slice_edge += 1;
                slice -= c;
                x -= 1;
            } else {
                self.ep[j] = other_edge;
                other_edge += 1;
            }
        }
    }

    /// Corner permutation, 0..40320.
    pub fn corners(&self) -> usize {
        let mut perm = self.cp;
        permutation_index(&mut perm)
    }

    pub fn set_corners(&mut self, index: usize) {
        set_permutation_index(&mut self.cp, index);
    }

    /// Permutation of the eight U- and D-layer edges, 0..40320.
    ///
    /// Phase 2 only.
    pub fn ud_edges(&self) -> usize {
        let mut perm = [0; 8];
        perm.copy_from_slice(&self.ep[..8]);
        permutation_index(&mut perm)
    }

    pub fn set_ud_edges(&mut self, index: usize) {
        set_permutation_index(&mut self.ep[..8], index);
        for (j, e) in self.ep[8..].iter_mut().enumerate() {
            *e = FIRST_SLICE_EDGE + j as u8;
        }
    }

    /// Permutation of the four slice edges within the slice, 0..24.
    ///
    /// Phase 2 only.
    pub fn slice_perm(&self) -> usize {
        let mut perm = [0; 4];
        for (p, &e) in perm.iter_mut().zip(&self.ep[8..]) {
            *p = e - FIRST_SLICE_EDGE;
        }
        permutation_index(&mut perm)
    }

    pub fn set_slice_perm(&mut self, index: usize) {
        let mut perm = [0; 4];
        set_permutation_index(&mut perm, index);
        for (j, e) in self.ep[..8].iter_mut().enumerate() {
            *e = j as u8;
        }
        for (e, p) in self.ep[8..].iter_mut().zip(perm) {
            *e = FIRST_SLICE_EDGE + p;
        }
    }

    /// True when the cube is in ⟨U, D, R2, L2, F2, B2⟩.
    pub fn in_phase2(&self) -> bool {
        self.twist() == 0 && self.flip() == 0 && self.slice() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{MoveSequence, NCORNER_PERM, NFLIP, NSLICE, NSLICE_PERM, NTWIST};

    fn scrambled(moves: &str) -> CubieCube {
        let mut cube = CubieCube::solved();
        cube.apply_sequence(&moves.parse::<MoveSequence>().unwrap());
        cube
    }

    #[test]
    fn test_solved_coordinates_are_zero() {
        let cube = CubieCube::solved();
        assert_eq!(cube.twist(), 0);
        assert_eq!(cube.flip(), 0);
        assert_eq!(cube.slice(), 0);
        assert_eq!(cube.corners(), 0);
        assert_eq!(cube.ud_edges(), 0);
        assert_eq!(cube.slice_perm(), 0);
        assert!(cube.in_phase2());
    }

    #[test]
    fn test_orientation_coordinates_round_trip() {
        let mut cube = CubieCube::solved();
        for twist in [0, 1, 728, 1500, NTWIST - 1] {
            cube.set_twist(twist);
            assert_eq!(cube.twist(), twist);
            assert_eq!(cube.co.iter().map(|&o| o as usize).sum::<usize>() % 3, 0);
        }
        for flip in [0, 1, 1023, NFLIP - 1] {
            cube.set_flip(flip);
            assert_eq!(cube.flip(), flip);
            assert_eq!(cube.eo.iter().map(|&o| o as usize).sum::<usize>() % 2, 0);
        }
    }

    #[test]
    fn test_slice_round_trip() {
        let mut cube = CubieCube::solved();
        for slice in 0..NSLICE {
            cube.set_slice(slice);
            assert_eq!(cube.slice(), slice);
        }
    }

    #[test]
    fn test_permutation_coordinates_round_trip() {
        let mut cube = CubieCube::solved();
        for index in [0, 1, 5039, 20000, NCORNER_PERM - 1] {
            cube.set_corners(index);
            assert_eq!(cube.corners(), index);
            cube.set_ud_edges(index);
            assert_eq!(cube.ud_edges(), index);
        }
        for index in 0..NSLICE_PERM {
            cube.set_slice_perm(index);
            assert_eq!(cube.slice_perm(), index);
        }
    }

    #[test]
    fn test_phase2_moves_stay_in_subgroup() {
        let cube = scrambled("U R2 D' F2 L2 B2 U2 D");
        assert!(cube.in_phase2());
        assert_ne!(cube.corners(), 0);
    }

    #[test]
    fn test_quarter_turns_leave_subgroup() {
        assert!(!scrambled("R").in_phase2());
        assert!(!scrambled("F").in_phase2());
        assert_ne!(scrambled("F").flip(), 0);
        assert_ne!(scrambled("R").twist(), 0);
    }
}
