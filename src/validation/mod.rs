// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural validation.
//!
//! Two independent validators guard the two representations of a cube:
//!
//! - [`validate_cube_state`]: the color-keyed state from the capture
//!   front-end, before canonicalization;
//! - [`validate_cube_string`]: the face-letter string, whenever it is loaded
//!   from storage.
//!
//! Both return `Ok` or the first [`StructuralError`] found, and never panic,
//! so callers can loop on re-scan or re-entry.

pub mod errors;
pub mod state;
pub mod string;

pub use errors::StructuralError;
pub use state::validate_cube_state;
pub use string::validate_cube_string;
