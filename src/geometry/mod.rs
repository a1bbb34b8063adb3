// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cube geometry: the vocabulary shared by every other module.
//!
//! - ColorLabel: the six sticker colors
//! - FaceKey: the six face positions, in canonical layout order
//! - ColorFaceMap: the center-derived bijection between the two
//! - Move, MoveSequence: face turns in standard notation
//! - constants: facelet layout and coordinate sizes

pub mod color;
pub mod color_map;
pub mod constants;
pub mod face;
pub mod moves;

// Re-export for convenience
pub use color::{ColorLabel, UNKNOWN_LABEL};
pub use color_map::{CenterClash, ColorFaceMap};
pub use constants::*;
pub use face::FaceKey;
pub use moves::{Move, MoveParseError, MoveSequence, Power};
