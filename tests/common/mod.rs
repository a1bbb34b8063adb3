// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use cube_solver::cubie::CubieCube;
use cube_solver::geometry::{ColorLabel, FaceKey, MoveSequence, FACE_SIZE};
use cube_solver::state::CubeState;
use cube_solver::CanonicalCubeString;
use strum::IntoEnumIterator;

pub const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Center colors of [`CubeState::solved`], in face order U R F D L B.
pub const SOLVED_CENTERS: [ColorLabel; 6] = {
    use ColorLabel::*;
    [W, R, G, Y, O, B]
};

/// The cube string of the solved cube after `moves`.
pub fn scrambled_string(moves: &str) -> CanonicalCubeString {
    let mut cube = CubieCube::solved();
    cube.apply_sequence(&moves.parse().expect("valid scramble"));
    cube.to_facelets()
}

/// Apply `solution` to the cube given by `cube_string`.
pub fn apply_solution(
    cube_string: &CanonicalCubeString,
    solution: &MoveSequence,
) -> CanonicalCubeString {
    let mut cube = CubieCube::from_facelets(cube_string).expect("reachable cube");
    cube.apply_sequence(solution);
    cube.to_facelets()
}

/// Paint a cube string with colors: face letter `f` becomes `centers[f]`.
///
/// This is what a scan of a physical cube looks like when the face whose
/// center is `centers[f]` was held up as face `f`.
pub fn paint(cube_string: &CanonicalCubeString, centers: [ColorLabel; 6]) -> CubeState {
    let mut state = CubeState::new();
    for face in FaceKey::iter() {
        let mut grid = [ColorLabel::W; FACE_SIZE];
        for (i, slot) in grid.iter_mut().enumerate() {
            *slot = centers[cube_string.facelet(face.facelet(i)).as_usize()];
        }
        state.set_face(face, grid);
    }
    state
}
