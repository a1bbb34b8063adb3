// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cube state as captured, and as validated.
//!
//! - CubeState: raw face → labels map from the capture front-end or a file
//! - ValidatedCubeState: typed, immutable, produced by the state validator
//! - ScanSession: caller-owned progress while faces are captured one by one
//! - Statistics: node counters for one solver search

pub mod cube_state;
pub mod session;
pub mod statistics;

pub use cube_state::{CubeState, FaceletGrid, ValidatedCubeState};
pub use session::{CaptureError, ScanSession};
pub use statistics::{Counters, Statistics};
