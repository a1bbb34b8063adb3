// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for structural validation.

use crate::geometry::{CenterClash, ColorLabel, FaceKey};
use strum_macros::{EnumCount as EnumCountMacro, IntoStaticStr};
use thiserror::Error;

/// A structural problem with a cube state or a cube string.
///
/// Structural errors are always recoverable: the caller re-scans the cube or
/// re-enters the data. The first six variants come from the state validator,
/// the last three from the string validator.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro, IntoStaticStr)]
pub enum StructuralError {
    /// The state does not have exactly six face entries.
    #[error("invalid number of faces: found {found}, must be exactly 6")]
    FaceCount { found: usize },

    /// Six entries, but not the six face keys U, R, F, D, L, B.
    #[error(
        "missing or extra faces (missing {missing:?}, unexpected {unexpected:?}); required: U, R, F, D, L, B"
    )]
    FaceSet {
        missing: Vec<FaceKey>,
        unexpected: Vec<String>,
    },

    /// A face grid without exactly nine facelets.
    #[error("face {face} has {found} colors (should be 9)")]
    GridSize { face: FaceKey, found: usize },

    /// A facelet label that is not one of W, R, O, Y, G, B.
    #[error("invalid color '{label}' in face {face} at position {index}")]
    InvalidColor {
        face: FaceKey,
        index: usize,
        label: String,
    },

    /// A color that does not occur exactly nine times over the whole cube.
    #[error("color {color} appears {count} times (should be 9)")]
    ColorCount { color: ColorLabel, count: usize },

    /// Two faces share a center color.
    #[error("center colors are not unique: {color} is the center of both {first} and {second}")]
    DuplicateCenter {
        color: ColorLabel,
        first: FaceKey,
        second: FaceKey,
    },

    /// A cube string that is not 54 characters long.
    #[error("invalid length {found}: cube string must be exactly 54 characters")]
    StringLength { found: usize },

    /// A cube string character outside U, R, F, D, L, B.
    #[error("invalid character '{character}' at position {index}: only U, R, F, D, L, B allowed")]
    InvalidCharacter { index: usize, character: char },

    /// A face letter that does not occur exactly nine times in a cube string.
    #[error("face {face} appears {count} times (should be 9)")]
    FaceLetterCount { face: FaceKey, count: usize },
}

impl StructuralError {
    /// Short name of the violated rule, e.g. `"ColorCount"`, for logs.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl From<CenterClash> for StructuralError {
    fn from(clash: CenterClash) -> Self {
        StructuralError::DuplicateCenter {
            color: clash.color,
            first: clash.first,
            second: clash.second,
        }
    }
}
