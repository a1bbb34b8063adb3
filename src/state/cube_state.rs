// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cube states, raw and validated.
//!
//! A [`CubeState`] is whatever the capture front-end (or a stored file)
//! produced: a map from face key to a list of color labels. It may be missing
//! faces, carry extra keys, or contain unknown labels, and it is only ever
//! inspected through the state validator.
//!
//! A [`ValidatedCubeState`] can only be obtained from
//! [`validate_cube_state`](crate::validation::validate_cube_state). It holds
//! typed grids in face order together with the center-derived color map, and
//! is immutable.

use crate::geometry::{ColorFaceMap, ColorLabel, FaceKey, FACE_SIZE, NFACES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum::IntoEnumIterator;

/// Nine color labels of one face, row-major; index 4 is the center.
pub type FaceletGrid = [ColorLabel; FACE_SIZE];

/// Raw per-face color observations.
///
/// Serializes as a JSON object `{"U": ["W", ...], "R": [...], ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubeState {
    faces: BTreeMap<String, Vec<String>>,
}

impl CubeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The solved test fixture: uniform faces W, R, G, Y, O, B on
    /// U, R, F, D, L, B.
    pub fn solved() -> Self {
        use ColorLabel::*;
        let mut state = Self::new();
        for (face, color) in FaceKey::iter().zip([W, R, G, Y, O, B]) {
            state.set_face(face, [color; FACE_SIZE]);
        }
        state
    }

    /// Build a state from `(face key, labels)` pairs where each label is a
    /// single character, e.g. `("U", "WWWWWWWWW")`.
    ///
    /// Every character becomes its own raw label, so unknown markers and
    /// invalid letters survive for the validator to report.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = Self::new();
        for (key, labels) in rows {
            state.insert_raw(key, labels.chars().map(String::from).collect());
        }
        state
    }

    /// Record a fully classified face.
    pub fn set_face(&mut self, face: FaceKey, colors: FaceletGrid) {
        self.insert_raw(
            face.as_char().to_string(),
            colors.iter().map(|c| c.label()).collect(),
        );
    }

    /// Record raw labels under an arbitrary key, replacing any previous entry.
    pub fn insert_raw(&mut self, key: impl Into<String>, labels: Vec<String>) {
        self.faces.insert(key.into(), labels);
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.faces.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.faces.get(key).map(Vec::as_slice)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Vec<String>> {
        self.faces.get_mut(key)
    }

    /// Labels recorded for a face, if any.
    pub fn face(&self, face: FaceKey) -> Option<&[String]> {
        self.get(face.as_char().to_string().as_str())
    }

    /// Number of face entries (valid or not).
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterate over `(key, labels)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.faces.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.faces.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Vec<String>)> for CubeState {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CubeState {
    /// One line per face in face order (then any unexpected keys), labels
    /// separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<String> = FaceKey::iter().map(|k| k.as_char().to_string()).collect();
        let ordered = known
            .iter()
            .map(String::as_str)
            .chain(self.keys().filter(|k| !known.iter().any(|n| n == k)));
        for key in ordered {
            if let Some(labels) = self.get(key) {
                writeln!(f, "{}: {}", key, labels.join(" "))?;
            }
        }
        Ok(())
    }
}

/// A cube state that passed every structural check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedCubeState {
    grids: [FaceletGrid; NFACES],
    color_map: ColorFaceMap,
}

impl ValidatedCubeState {
    /// Only the state validator constructs these.
    pub(crate) fn new(grids: [FaceletGrid; NFACES], color_map: ColorFaceMap) -> Self {
        Self { grids, color_map }
    }

    pub fn grid(&self, face: FaceKey) -> &FaceletGrid {
        &self.grids[face.as_usize()]
    }

    /// Grids in face order U, R, F, D, L, B.
    pub fn grids(&self) -> &[FaceletGrid; NFACES] {
        &self.grids
    }

    pub fn color_map(&self) -> &ColorFaceMap {
        &self.color_map
    }

    /// Convert back into the raw form, e.g. for persistence.
    pub fn to_cube_state(&self) -> CubeState {
        let mut state = CubeState::new();
        for face in FaceKey::iter() {
            state.set_face(face, *self.grid(face));
        }
        state
    }
}
