// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sticker colors as reported by the capture front-end.
//!
//! A scanned cube uses six colors. Which color belongs to which face is not
//! fixed: it is read off the center facelets (see [`ColorFaceMap`]).
//!
//! [`ColorFaceMap`]: crate::geometry::ColorFaceMap

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, FromRepr};

/// The raw label written for a facelet the classifier could not recognise.
pub const UNKNOWN_LABEL: &str = "?";

/// One of the six sticker colors.
///
/// The declaration order W, R, O, Y, G, B is the order in which color counts
/// are checked and reported.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCountMacro,
    EnumIter,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum ColorLabel {
    W,
    R,
    O,
    Y,
    G,
    B,
}

impl ColorLabel {
    /// Parse a single label character (case-sensitive, as stored).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'W' => Some(ColorLabel::W),
            'R' => Some(ColorLabel::R),
            'O' => Some(ColorLabel::O),
            'Y' => Some(ColorLabel::Y),
            'G' => Some(ColorLabel::G),
            'B' => Some(ColorLabel::B),
            _ => None,
        }
    }

    /// Parse a raw label as it appears in a stored cube state.
    ///
    /// Only the exact one-letter labels are accepted; `"?"`, `"w"` and
    /// `"WW"` are all rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ColorLabel::W => 'W',
            ColorLabel::R => 'R',
            ColorLabel::O => 'O',
            ColorLabel::Y => 'Y',
            ColorLabel::G => 'G',
            ColorLabel::B => 'B',
        }
    }

    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// The raw label string for this color.
    pub fn label(self) -> String {
        self.as_char().to_string()
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
