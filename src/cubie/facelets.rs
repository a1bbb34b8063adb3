// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Conversion between facelet strings and the cubie model.
//!
//! Corners are numbered URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB and edges UR,
//! UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR. The tables below list, for each
//! position, the string indices of its stickers, starting with the U or D
//! sticker (or the F/B sticker for slice edges) and going clockwise.

use crate::canonical::CanonicalCubeString;
use crate::cubie::{CubieCube, CubieError, CORNER_NAMES, EDGE_NAMES};
use crate::geometry::{FaceKey, CENTER_INDEX, NCORNERS, NEDGES, NFACELETS};
use strum::IntoEnumIterator;

use FaceKey::{B, D, F, L, R, U};

pub(crate) const CORNER_FACELETS: [[usize; 3]; NCORNERS] = [
    [8, 9, 20],   // URF: U9 R1 F3
    [6, 18, 38],  // UFL: U7 F1 L3
    [0, 36, 47],  // ULB: U1 L1 B3
    [2, 45, 11],  // UBR: U3 B1 R3
    [29, 26, 15], // DFR: D3 F9 R7
    [27, 44, 24], // DLF: D1 L9 F7
    [33, 53, 42], // DBL: D7 B9 L7
    [35, 17, 51], // DRB: D9 R9 B7
];

pub(crate) const CORNER_COLORS: [[FaceKey; 3]; NCORNERS] = [
    [U, R, F],
    [U, F, L],
    [U, L, B],
    [U, B, R],
    [D, F, R],
    [D, L, F],
    [D, B, L],
    [D, R, B],
];

pub(crate) const EDGE_FACELETS: [[usize; 2]; NEDGES] = [
    [5, 10],  // UR: U6 R2
    [7, 19],  // UF: U8 F2
    [3, 37],  // UL: U4 L2
    [1, 46],  // UB: U2 B2
    [32, 16], // DR: D6 R8
    [28, 25], // DF: D2 F8
    [30, 43], // DL: D4 L8
    [34, 52], // DB: D8 B8
    [23, 12], // FR: F6 R4
    [21, 41], // FL: F4 L6
    [50, 39], // BL: B6 L4
    [48, 14], // BR: B4 R6
];

pub(crate) const EDGE_COLORS: [[FaceKey; 2]; NEDGES] = [
    [U, R],
    [U, F],
    [U, L],
    [U, B],
    [D, R],
    [D, F],
    [D, L],
    [D, B],
    [F, R],
    [F, L],
    [B, L],
    [B, R],
];

impl CubieCube {
    /// Read the cubie model off a facelet string.
    ///
    /// Fails if a center is off its face or if some position's stickers do
    /// not match any cubie. The result may still be unreachable (duplicate
    /// cubies, bad twist, flip or parity); see [`CubieCube::verify`].
    pub fn from_facelets(cube: &CanonicalCubeString) -> Result<Self, CubieError> {
        let f = cube.facelets();

        for face in FaceKey::iter() {
            let found = f[face.facelet(CENTER_INDEX)];
            if found != face {
                return Err(CubieError::CenterMismatch { face, found });
            }
        }

        let mut result = CubieCube::solved();
        for (i, stickers) in CORNER_FACELETS.iter().enumerate() {
            let invalid = CubieError::InvalidCorner {
                position: CORNER_NAMES[i],
            };
            let ori = (0..3)
                .find(|&o| matches!(f[stickers[o]], U | D))
                .ok_or(invalid.clone())?;
            let seen = [0, 1, 2].map(|n| f[stickers[(ori + n) % 3]]);
            let corner = CORNER_COLORS
                .iter()
                .position(|colors| *colors == seen)
                .ok_or(invalid)?;
            result.cp[i] = corner as u8;
            result.co[i] = ori as u8;
        }

        for (i, stickers) in EDGE_FACELETS.iter().enumerate() {
            let (a, b) = (f[stickers[0]], f[stickers[1]]);
            let found = EDGE_COLORS.iter().enumerate().find_map(|(j, colors)| {
                if colors == &[a, b] {
                    Some((j, 0))
                } else if colors == &[b, a] {
                    Some((j, 1))
                } else {
                    None
                }
            });
            let (edge, ori) = found.ok_or(CubieError::InvalidEdge {
                position: EDGE_NAMES[i],
            })?;
            result.ep[i] = edge as u8;
            result.eo[i] = ori;
        }

        Ok(result)
    }

    /// The facelet string of this cube.
    ///
    /// Only meaningful for cubes whose `cp` and `ep` are permutations, which
    /// holds for every cube built from moves or accepted by `verify`.
    pub fn to_facelets(&self) -> CanonicalCubeString {
        let mut f = [U; NFACELETS];
        for face in FaceKey::iter() {
            f[face.facelet(CENTER_INDEX)] = face;
        }
        for (i, stickers) in CORNER_FACELETS.iter().enumerate() {
            let corner = self.cp[i] as usize;
            let ori = self.co[i] as usize;
            for n in 0..3 {
                f[stickers[(n + ori) % 3]] = CORNER_COLORS[corner][n];
            }
        }
        for (i, stickers) in EDGE_FACELETS.iter().enumerate() {
            let edge = self.ep[i] as usize;
            let ori = self.eo[i] as usize;
            for n in 0..2 {
                f[stickers[(n + ori) % 2]] = EDGE_COLORS[edge][n];
            }
        }
        CanonicalCubeString::from_facelets_unchecked(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MoveSequence;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    fn parse(s: &str) -> CanonicalCubeString {
        s.parse().unwrap()
    }

    fn swapped(a: usize, b: usize) -> CanonicalCubeString {
        let mut chars: Vec<char> = SOLVED.chars().collect();
        chars.swap(a, b);
        parse(&chars.into_iter().collect::<String>())
    }

    #[test]
    fn test_solved_string_is_solved_cube() {
        let cube = CubieCube::from_facelets(&parse(SOLVED)).unwrap();
        assert_eq!(cube, CubieCube::solved());
        assert_eq!(cube.to_facelets().to_string(), SOLVED);
    }

    #[test]
    fn test_facelet_tables_cover_every_sticker_once() {
        let mut seen = [0; NFACELETS];
        for stickers in CORNER_FACELETS.iter() {
            for &s in stickers {
                seen[s] += 1;
            }
        }
        for stickers in EDGE_FACELETS.iter() {
            for &s in stickers {
                seen[s] += 1;
            }
        }
        for face in FaceKey::iter() {
            seen[face.facelet(CENTER_INDEX)] += 1;
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_single_turn_facelets() {
        let mut cube = CubieCube::solved();
        cube.apply_sequence(&"U".parse::<MoveSequence>().unwrap());
        // A clockwise U turn brings the F stickers to the top row of L, etc.
        assert_eq!(
            cube.to_facelets().to_string(),
            "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"
        );
    }

    #[test]
    fn test_round_trip_after_moves() {
        let mut cube = CubieCube::solved();
        cube.apply_sequence(&"R U F' D2 L B' U2 R'".parse::<MoveSequence>().unwrap());
        let back = CubieCube::from_facelets(&cube.to_facelets()).unwrap();
        assert_eq!(back, cube);
    }

    #[test]
    fn test_center_mismatch() {
        // Swap the U and R centers.
        assert_eq!(
            CubieCube::from_facelets(&swapped(4, 13)),
            Err(CubieError::CenterMismatch {
                face: U,
                found: R
            })
        );
    }

    #[test]
    fn test_corner_stickers_from_two_corners() {
        // U1 belongs to ULB, R1 to URF: after the swap neither triple is a corner.
        assert_eq!(
            CubieCube::from_facelets(&swapped(0, 9)),
            Err(CubieError::InvalidCorner { position: "URF" })
        );
    }

    #[test]
    fn test_corner_needs_its_u_or_d_sticker() {
        // U and D stickers of URF and DRB exchanged: the side stickers still
        // read R,F and R,B.
        assert_eq!(
            CubieCube::from_facelets(&swapped(8, 35)),
            Err(CubieError::InvalidCorner { position: "URF" })
        );
    }

    #[test]
    fn test_edge_stickers_from_two_edges() {
        // U2 (UB edge) with F4 (FL edge).
        assert_eq!(
            CubieCube::from_facelets(&swapped(1, 21)),
            Err(CubieError::InvalidEdge { position: "UB" })
        );
    }
}
