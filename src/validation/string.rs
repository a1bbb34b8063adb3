// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural validation of a 54-character cube string.
//!
//! Strings reach the solver from storage, where they may have been truncated
//! or edited by hand, so they are checked independently of how they were
//! produced. Only the counting invariant is checked here; whether the string
//! describes a reachable cube is left to the solver.

use crate::geometry::{FaceKey, FACE_SIZE, NFACELETS, NFACES};
use crate::validation::StructuralError;
use strum::IntoEnumIterator;

/// Check that `cube_string` has the shape of a canonical cube string.
///
/// 1. exactly 54 characters;
/// 2. every character is one of U, R, F, D, L, B;
/// 3. every face letter occurs nine times.
///
/// # Examples
///
/// ```
/// use cube_solver::validation::{validate_cube_string, StructuralError};
///
/// let solved = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
/// assert!(validate_cube_string(solved).is_ok());
/// assert_eq!(
///     validate_cube_string(&solved[1..]),
///     Err(StructuralError::StringLength { found: 53 })
/// );
/// ```
pub fn validate_cube_string(cube_string: &str) -> Result<(), StructuralError> {
    read_cube_string(cube_string).map(|_| ())
}

/// As [`validate_cube_string`], keeping the parsed facelets.
pub(crate) fn read_cube_string(
    cube_string: &str,
) -> Result<[FaceKey; NFACELETS], StructuralError> {
    check_string(cube_string).map_err(|err| {
        log::warn!("cube string rejected ({}): {}", err.kind(), err);
        err
    })
}

/// Parse a cube string into face keys, checking it on the way.
pub(crate) fn check_string(cube_string: &str) -> Result<[FaceKey; NFACELETS], StructuralError> {
    let found = cube_string.chars().count();
    if found != NFACELETS {
        return Err(StructuralError::StringLength { found });
    }

    let mut facelets = [FaceKey::U; NFACELETS];
    let mut counts = [0usize; NFACES];
    for (index, character) in cube_string.chars().enumerate() {
        let face = FaceKey::from_char(character)
            .ok_or(StructuralError::InvalidCharacter { index, character })?;
        facelets[index] = face;
        counts[face.as_usize()] += 1;
    }

    for face in FaceKey::iter() {
        let count = counts[face.as_usize()];
        if count != FACE_SIZE {
            return Err(StructuralError::FaceLetterCount { face, count });
        }
    }
    Ok(facelets)
}
