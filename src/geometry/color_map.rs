// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The color→face bijection read off the center facelets.
//!
//! Centers never move, so the color of a face's center names that face. With
//! six distinct centers the mapping is a bijection between [`ColorLabel`] and
//! [`FaceKey`]; it is built once per validation pass and carried with the
//! validated state so canonicalization never recomputes it.

use crate::geometry::{ColorLabel, FaceKey};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};

/// Two faces whose centers show the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterClash {
    pub color: ColorLabel,
    pub first: FaceKey,
    pub second: FaceKey,
}

/// A complete mapping from each color to the face whose center shows it.
///
/// # Examples
///
/// ```
/// use cube_solver::geometry::{ColorFaceMap, ColorLabel, FaceKey};
///
/// let map = ColorFaceMap::from_centers([
///     ColorLabel::W, ColorLabel::R, ColorLabel::G,
///     ColorLabel::Y, ColorLabel::O, ColorLabel::B,
/// ]).unwrap();
/// assert_eq!(map.face_of(ColorLabel::G), FaceKey::F);
/// assert_eq!(map.color_of(FaceKey::L), ColorLabel::O);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorFaceMap {
    /// Indexed by `ColorLabel as usize`.
    faces: [FaceKey; ColorLabel::COUNT],
    /// Indexed by `FaceKey as usize`.
    colors: [ColorLabel; FaceKey::COUNT],
}

impl ColorFaceMap {
    /// Build the mapping from the six center colors, given in face order
    /// U, R, F, D, L, B.
    ///
    /// Fails on the first color seen on two centers. Six distinct centers
    /// over six colors cover every color, so success yields a bijection.
    pub fn from_centers(centers: [ColorLabel; FaceKey::COUNT]) -> Result<Self, CenterClash> {
        let mut owner: [Option<FaceKey>; ColorLabel::COUNT] = [None; ColorLabel::COUNT];
        for (face, &color) in FaceKey::iter().zip(centers.iter()) {
            if let Some(first) = owner[color.as_usize()] {
                return Err(CenterClash {
                    color,
                    first,
                    second: face,
                });
            }
            owner[color.as_usize()] = Some(face);
        }

        let mut faces = [FaceKey::U; ColorLabel::COUNT];
        for (slot, face) in faces.iter_mut().zip(owner) {
            // Every color has an owner: six distinct values drawn from six.
            *slot = face.unwrap_or(FaceKey::U);
        }
        Ok(Self {
            faces,
            colors: centers,
        })
    }

    /// The face whose center shows `color`.
    pub fn face_of(&self, color: ColorLabel) -> FaceKey {
        self.faces[color.as_usize()]
    }

    /// The center color of `face`.
    pub fn color_of(&self, face: FaceKey) -> ColorLabel {
        self.colors[face.as_usize()]
    }
}

impl fmt::Display for ColorFaceMap {
    /// Format as `W→U R→R ...` in face order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in FaceKey::iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}→{}", self.color_of(face), face)?;
        }
        Ok(())
    }
}
