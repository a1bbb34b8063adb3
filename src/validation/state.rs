// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural validation of a captured cube state.

use crate::geometry::{ColorFaceMap, ColorLabel, FaceKey, CENTER_INDEX, FACE_SIZE, NFACES};
use crate::state::{CubeState, FaceletGrid, ValidatedCubeState};
use crate::validation::StructuralError;
use strum::{EnumCount, IntoEnumIterator};

/// Check a captured cube state and, if it is well formed, return its typed,
/// immutable form.
///
/// Checks run in order and stop at the first violation:
///
/// 1. exactly six faces;
/// 2. the face keys are exactly U, R, F, D, L, B;
/// 3. every face has nine facelets;
/// 4. every facelet is one of W, R, O, Y, G, B;
/// 5. every color occurs nine times;
/// 6. the six centers are pairwise distinct.
///
/// Faces are visited in layout order for checks 3–6, so the reported face
/// or color is deterministic. Check 3 covers every face before check 4 looks
/// at any label: a short grid on B is reported ahead of a bad label on U.
/// Validation never panics and has no side effects beyond a `warn` log line
/// on failure.
///
/// # Examples
///
/// ```
/// use cube_solver::state::CubeState;
/// use cube_solver::validation::validate_cube_state;
///
/// assert!(validate_cube_state(&CubeState::solved()).is_ok());
/// assert!(validate_cube_state(&CubeState::new()).is_err());
/// ```
pub fn validate_cube_state(state: &CubeState) -> Result<ValidatedCubeState, StructuralError> {
    let result = check_state(state);
    if let Err(err) = &result {
        log::warn!("cube state rejected ({}): {}", err.kind(), err);
    }
    result
}

fn check_state(state: &CubeState) -> Result<ValidatedCubeState, StructuralError> {
    if state.len() != NFACES {
        return Err(StructuralError::FaceCount { found: state.len() });
    }

    let missing: Vec<FaceKey> = FaceKey::iter()
        .filter(|&face| state.face(face).is_none())
        .collect();
    let unexpected: Vec<String> = state
        .keys()
        .filter(|key| FaceKey::from_key(key).is_none())
        .map(String::from)
        .collect();
    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(StructuralError::FaceSet { missing, unexpected });
    }

    let mut raw: Vec<&[String]> = Vec::with_capacity(NFACES);
    for face in FaceKey::iter() {
        let Some(labels) = state.face(face) else {
            return Err(StructuralError::FaceSet {
                missing: vec![face],
                unexpected: Vec::new(),
            });
        };
        if labels.len() != FACE_SIZE {
            return Err(StructuralError::GridSize {
                face,
                found: labels.len(),
            });
        }
        raw.push(labels);
    }

    let mut counts = [0usize; ColorLabel::COUNT];
    let mut grids: [FaceletGrid; NFACES] = [[ColorLabel::W; FACE_SIZE]; NFACES];
    for (face, labels) in FaceKey::iter().zip(&raw) {
        for (index, label) in labels.iter().enumerate() {
            let color = ColorLabel::from_label(label).ok_or_else(|| StructuralError::InvalidColor {
                face,
                index,
                label: label.clone(),
            })?;
            counts[color.as_usize()] += 1;
            grids[face.as_usize()][index] = color;
        }
    }

    for color in ColorLabel::iter() {
        let count = counts[color.as_usize()];
        if count != FACE_SIZE {
            return Err(StructuralError::ColorCount { color, count });
        }
    }

    let centers = grids.map(|grid| grid[CENTER_INDEX]);
    let color_map = ColorFaceMap::from_centers(centers)?;
    log::debug!("center colors: {}", color_map);

    Ok(ValidatedCubeState::new(grids, color_map))
}
