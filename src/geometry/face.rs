// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face keys.
//!
//! Faces are named by position (Up, Right, Front, Down, Left, Back), not by
//! color. The declaration order U, R, F, D, L, B is the layout order of the
//! canonical cube string, and the numbering of the solver's move set.

use crate::geometry::constants::FACE_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, FromRepr};

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
pub enum FaceKey {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl FaceKey {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(FaceKey::U),
            'R' => Some(FaceKey::R),
            'F' => Some(FaceKey::F),
            'D' => Some(FaceKey::D),
            'L' => Some(FaceKey::L),
            'B' => Some(FaceKey::B),
            _ => None,
        }
    }

    /// Parse a face key as it appears in a stored cube state (`"U"`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            FaceKey::U => 'U',
            FaceKey::R => 'R',
            FaceKey::F => 'F',
            FaceKey::D => 'D',
            FaceKey::L => 'L',
            FaceKey::B => 'B',
        }
    }

    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// The face on the other side of the cube.
    ///
    /// The numbering puts opposite faces three apart.
    pub fn opposite(self) -> Self {
        match self {
            FaceKey::U => FaceKey::D,
            FaceKey::R => FaceKey::L,
            FaceKey::F => FaceKey::B,
            FaceKey::D => FaceKey::U,
            FaceKey::L => FaceKey::R,
            FaceKey::B => FaceKey::F,
        }
    }

    /// Index into the canonical string of this face's facelet `i` (0..9).
    pub fn facelet(self, i: usize) -> usize {
        debug_assert!(i < FACE_SIZE);
        self.as_usize() * FACE_SIZE + i
    }
}

impl fmt::Display for FaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
