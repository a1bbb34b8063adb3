// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a structurally valid cube string is not a reachable cube.

use crate::geometry::FaceKey;
use strum_macros::{EnumCount as EnumCountMacro, IntoStaticStr};
use thiserror::Error;

/// A cube string that passes the counting checks but cannot be obtained
/// from the solved cube by face turns.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro, IntoStaticStr)]
pub enum CubieError {
    /// A center sticker is not on its own face.
    #[error("center of face {face} is {found}; every center must name its own face")]
    CenterMismatch { face: FaceKey, found: FaceKey },

    /// The stickers at a corner position do not belong to any corner cubie.
    #[error("the stickers at corner {position} do not form a corner")]
    InvalidCorner { position: &'static str },

    /// The stickers at an edge position do not belong to any edge cubie.
    #[error("the stickers at edge {position} do not form an edge")]
    InvalidEdge { position: &'static str },

    /// Not all twelve edges appear exactly once.
    #[error("edge {edge} appears {count} times; every edge must appear exactly once")]
    DuplicateEdge { edge: &'static str, count: usize },

    /// The edge orientations do not sum to an even number.
    #[error("one edge has to be flipped")]
    Flip,

    /// Not all eight corners appear exactly once.
    #[error("corner {corner} appears {count} times; every corner must appear exactly once")]
    DuplicateCorner { corner: &'static str, count: usize },

    /// The corner orientations do not sum to a multiple of three.
    #[error("one corner has to be twisted (total twist is {twist} mod 3)")]
    Twist { twist: usize },

    /// Corner and edge permutations have different parities.
    #[error("two corners or two edges have to be exchanged")]
    Parity,
}

impl CubieError {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}
