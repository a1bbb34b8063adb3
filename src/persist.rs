// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Files passed between the pipeline stages.
//!
//! - cube state: JSON object `{"U": ["W", ...], ...}`
//! - cube string: the 54 face letters, plain text
//! - solution: space-separated moves, plain text
//!
//! Loading a cube string only trims surrounding whitespace. It is not
//! validated here; the solver adapter does that.

use crate::canonical::CanonicalCubeString;
use crate::geometry::MoveSequence;
use crate::state::CubeState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CUBE_STATE_FILE: &str = "cube_state.json";
pub const CUBE_STRING_FILE: &str = "cube_string.txt";
pub const SOLUTION_FILE: &str = "solution.txt";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path) -> impl FnOnce(serde_json::Error) -> Self + '_ {
        move |source| PersistError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True when the file did not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

pub fn save_cube_state(path: &Path, state: &CubeState) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(state).map_err(PersistError::json(path))?;
    fs::write(path, json).map_err(PersistError::io(path))?;
    log::info!("saved cube state to {}", path.display());
    Ok(())
}

pub fn load_cube_state(path: &Path) -> Result<CubeState, PersistError> {
    let json = fs::read_to_string(path).map_err(PersistError::io(path))?;
    serde_json::from_str(&json).map_err(PersistError::json(path))
}

pub fn save_cube_string(path: &Path, cube: &CanonicalCubeString) -> Result<(), PersistError> {
    fs::write(path, cube.to_string()).map_err(PersistError::io(path))?;
    log::info!("saved cube string to {}", path.display());
    Ok(())
}

/// The raw stored string, trimmed.
pub fn load_cube_string(path: &Path) -> Result<String, PersistError> {
    let text = fs::read_to_string(path).map_err(PersistError::io(path))?;
    Ok(text.trim().to_string())
}

pub fn save_solution(path: &Path, solution: &MoveSequence) -> Result<(), PersistError> {
    fs::write(path, solution.to_string()).map_err(PersistError::io(path))?;
    log::info!("saved solution to {}", path.display());
    Ok(())
}
