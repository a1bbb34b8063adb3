// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face-by-face scan progress.
//!
//! A `ScanSession` is owned by the caller (the capture loop) and passed to
//! whatever records faces, so scan progress never lives in ambient state.
//! Faces are recorded in layout order U, R, F, D, L, B.

use crate::geometry::{ColorLabel, FaceKey, FACE_SIZE, NFACES, UNKNOWN_LABEL};
use crate::state::CubeState;
use thiserror::Error;

/// Errors from recording a face into a session.
///
/// None of these change the session; the caller re-scans or re-enters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("all 6 faces have already been scanned")]
    SessionComplete,

    #[error("face {face} needs 9 facelets, got {found}")]
    WrongLength { face: FaceKey, found: usize },

    #[error("invalid color '{character}' for face {face}: use W, R, O, Y, G, B")]
    InvalidCharacter { face: FaceKey, character: char },

    #[error("cannot calibrate {color} without samples")]
    NoSamples { color: ColorLabel },
}

#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    /// Number of faces recorded so far; also the index of the next face.
    face_index: usize,
    state: CubeState,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The face the front-end should ask for next, or `None` when complete.
    pub fn current_face(&self) -> Option<FaceKey> {
        FaceKey::from_repr(self.face_index as u8)
    }

    pub fn faces_scanned(&self) -> usize {
        self.face_index
    }

    pub fn is_complete(&self) -> bool {
        self.face_index == NFACES
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn into_state(self) -> CubeState {
        self.state
    }

    /// Accept the classifier's reading for the current face.
    ///
    /// Unrecognised facelets are stored as [`UNKNOWN_LABEL`]; they are
    /// rejected later by the state validator, not here.
    pub fn confirm_face(
        &mut self,
        detected: &[Option<ColorLabel>],
    ) -> Result<FaceKey, CaptureError> {
        let face = self.current_face().ok_or(CaptureError::SessionComplete)?;
        if detected.len() != FACE_SIZE {
            return Err(CaptureError::WrongLength {
                face,
                found: detected.len(),
            });
        }
        let labels = detected
            .iter()
            .map(|c| c.map_or_else(|| UNKNOWN_LABEL.to_string(), ColorLabel::label))
            .collect();
        self.record(face, labels);
        Ok(face)
    }

    /// Accept a typed-in face such as `"wwrgbyoow"` (case-insensitive).
    pub fn enter_manual(&mut self, input: &str) -> Result<FaceKey, CaptureError> {
        let face = self.current_face().ok_or(CaptureError::SessionComplete)?;
        let input = input.trim().to_uppercase();
        let found = input.chars().count();
        if found != FACE_SIZE {
            return Err(CaptureError::WrongLength { face, found });
        }
        let mut labels = Vec::with_capacity(FACE_SIZE);
        for character in input.chars() {
            let color = ColorLabel::from_char(character)
                .ok_or(CaptureError::InvalidCharacter { face, character })?;
            labels.push(color.label());
        }
        self.record(face, labels);
        Ok(face)
    }

    fn record(&mut self, face: FaceKey, labels: Vec<String>) {
        log::debug!("scanned face {}: {}", face, labels.join(" "));
        self.state.insert_raw(face.as_char().to_string(), labels);
        self.face_index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColorLabel::*;

    #[test]
    fn test_faces_come_in_layout_order() {
        let mut session = ScanSession::new();
        let mut order = String::new();
        while let Some(face) = session.current_face() {
            order.push(face.as_char());
            session.enter_manual("WWWWWWWWW").unwrap();
        }
        assert_eq!(order, "URFDLB");
        assert!(session.is_complete());
        assert_eq!(session.faces_scanned(), 6);
    }

    #[test]
    fn test_manual_entry_is_case_insensitive() {
        let mut session = ScanSession::new();
        assert_eq!(session.enter_manual(" wroygbwro \n"), Ok(FaceKey::U));
        assert_eq!(
            session.state().face(FaceKey::U).unwrap().concat(),
            "WROYGBWRO"
        );
    }

    #[test]
    fn test_bad_manual_entry_does_not_advance() {
        let mut session = ScanSession::new();
        assert_eq!(
            session.enter_manual("WWWW"),
            Err(CaptureError::WrongLength {
                face: FaceKey::U,
                found: 4
            })
        );
        assert_eq!(
            session.enter_manual("WWWWXWWWW"),
            Err(CaptureError::InvalidCharacter {
                face: FaceKey::U,
                character: 'X'
            })
        );
        assert_eq!(session.current_face(), Some(FaceKey::U));
        assert!(session.state().is_empty());
    }

    #[test]
    fn test_confirm_face_marks_unknowns() {
        let mut session = ScanSession::new();
        let detected = [Some(W), None, Some(W), Some(W), Some(W), Some(W), Some(W), Some(W), None];
        session.confirm_face(&detected).unwrap();
        let labels = session.state().face(FaceKey::U).unwrap();
        assert_eq!(labels[1], UNKNOWN_LABEL);
        assert_eq!(labels[8], UNKNOWN_LABEL);
        assert_eq!(session.current_face(), Some(FaceKey::R));
    }

    #[test]
    fn test_complete_session_rejects_more_faces() {
        let mut session = ScanSession::new();
        for _ in 0..6 {
            session.confirm_face(&[Some(G); 9]).unwrap();
        }
        assert_eq!(session.current_face(), None);
        assert_eq!(
            session.enter_manual("GGGGGGGGG"),
            Err(CaptureError::SessionComplete)
        );
    }
}
