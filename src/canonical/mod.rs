// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The canonical cube string and the canonicalizer.
//!
//! The solver does not know about sticker colors. It expects each facelet to
//! be named by the face whose center has the same color, laid out face-major
//! in order U, R, F, D, L, B and row-major within each face.

use crate::geometry::{FaceKey, FACE_SIZE, NFACELETS};
use crate::state::ValidatedCubeState;
use crate::validation::{string::check_string, StructuralError};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A 54-facelet cube description over the alphabet U, R, F, D, L, B in which
/// every letter occurs nine times.
///
/// Values come either from [`canonicalize`] or from parsing, which runs the
/// string validator. The counting invariant holds for every value; physical
/// realizability does not have to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalCubeString {
    facelets: [FaceKey; NFACELETS],
}

impl CanonicalCubeString {
    /// The solved cube: nine of each letter in layout order.
    pub fn solved() -> Self {
        let mut facelets = [FaceKey::U; NFACELETS];
        for (facelet, face) in facelets
            .iter_mut()
            .zip(FaceKey::iter().flat_map(|face| [face; FACE_SIZE]))
        {
            *facelet = face;
        }
        Self { facelets }
    }

    /// Wrap facelets that are known to satisfy the counting invariant.
    ///
    /// Used by the cubie model, whose facelet images of permutations always
    /// carry nine of each letter.
    pub(crate) fn from_facelets_unchecked(facelets: [FaceKey; NFACELETS]) -> Self {
        debug_assert!(FaceKey::iter()
            .all(|face| facelets.iter().filter(|&&f| f == face).count() == FACE_SIZE));
        Self { facelets }
    }

    pub fn facelets(&self) -> &[FaceKey; NFACELETS] {
        &self.facelets
    }

    /// The face letter at position `index` (0..54).
    pub fn facelet(&self, index: usize) -> FaceKey {
        self.facelets[index]
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }
}

impl FromStr for CanonicalCubeString {
    type Err = StructuralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_string(s).map(|facelets| Self { facelets })
    }
}

impl fmt::Display for CanonicalCubeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.facelets {
            write!(f, "{}", face.as_char())?;
        }
        Ok(())
    }
}

/// Convert a validated color-keyed state into the face-letter string.
///
/// Each facelet's color is replaced by the face whose center shows that
/// color, visiting faces in order U, R, F, D, L, B and facelets in stored
/// order. The color map was fixed during validation, so this is pure,
/// deterministic and cannot fail.
///
/// # Examples
///
/// ```
/// use cube_solver::canonical::canonicalize;
/// use cube_solver::state::CubeState;
/// use cube_solver::validation::validate_cube_state;
///
/// let state = validate_cube_state(&CubeState::solved()).unwrap();
/// assert_eq!(
///     canonicalize(&state).to_string(),
///     "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
/// );
/// ```
pub fn canonicalize(state: &ValidatedCubeState) -> CanonicalCubeString {
    let map = state.color_map();
    let mut facelets = [FaceKey::U; NFACELETS];
    let colors = state.grids().iter().flat_map(|grid| grid.iter());
    for (slot, &color) in facelets.iter_mut().zip(colors) {
        *slot = map.face_of(color);
    }
    CanonicalCubeString { facelets }
}
