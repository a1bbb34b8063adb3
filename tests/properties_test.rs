// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Properties of the validators and the canonicalizer over generated scans.

mod common;

use common::{paint, SOLVED_CENTERS};
use cube_solver::cubie::CubieCube;
use cube_solver::geometry::{ColorLabel, FaceKey, Move, MoveSequence, CENTER_INDEX, FACE_SIZE};
use cube_solver::validation::{validate_cube_state, validate_cube_string, StructuralError};
use cube_solver::{canonicalize, CanonicalCubeString, CubeState};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn any_scramble() -> impl Strategy<Value = MoveSequence> {
    prop::collection::vec(0usize..18, 0..25)
        .prop_map(|indices| indices.into_iter().filter_map(Move::from_index).collect())
}

fn any_centers() -> impl Strategy<Value = [ColorLabel; 6]> {
    Just(ColorLabel::iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|colors| {
            let mut centers = SOLVED_CENTERS;
            centers.copy_from_slice(&colors);
            centers
        })
}

fn any_face() -> impl Strategy<Value = FaceKey> {
    (0u8..6).prop_map(|i| FaceKey::from_repr(i).unwrap())
}

fn cube_of(moves: &MoveSequence) -> CanonicalCubeString {
    let mut cube = CubieCube::solved();
    cube.apply_sequence(moves);
    cube.to_facelets()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn canonicalize_inverts_painting(moves in any_scramble(), centers in any_centers()) {
        let cube = cube_of(&moves);
        let scan = paint(&cube, centers);
        let validated = validate_cube_state(&scan).unwrap();
        prop_assert_eq!(canonicalize(&validated), cube);
        prop_assert_eq!(canonicalize(&validated), canonicalize(&validated));
    }

    #[test]
    fn canonical_strings_are_valid(moves in any_scramble(), centers in any_centers()) {
        let scan = paint(&cube_of(&moves), centers);
        let text = canonicalize(&validate_cube_state(&scan).unwrap()).to_string();
        prop_assert_eq!(validate_cube_string(&text), Ok(()));
        prop_assert!(text.chars().skip(CENTER_INDEX).step_by(FACE_SIZE).eq("URFDLB".chars()));
    }

    #[test]
    fn validated_state_round_trips(moves in any_scramble(), centers in any_centers()) {
        let scan = paint(&cube_of(&moves), centers);
        let validated = validate_cube_state(&scan).unwrap();
        prop_assert_eq!(validated.to_cube_state(), scan);
    }

    #[test]
    fn state_validation_is_repeatable(
        moves in any_scramble(),
        centers in any_centers(),
        face in any_face(),
        mutation in 0usize..4,
    ) {
        let mut scan = paint(&cube_of(&moves), centers);
        match mutation {
            0 => {}
            1 => {
                scan.remove(&face.to_string());
            }
            2 => {
                let labels = scan.get_mut(&face.to_string()).unwrap();
                labels[0] = if labels[0] == "W" { "R" } else { "W" }.to_string();
            }
            _ => {
                let other = FaceKey::from_repr((face as u8 + 1) % 6).unwrap();
                let center = scan.face(face).unwrap()[CENTER_INDEX].clone();
                scan.get_mut(&other.to_string()).unwrap()[CENTER_INDEX] = center;
            }
        }
        let before = scan.clone();
        let first = validate_cube_state(&scan);
        let second = validate_cube_state(&scan);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.is_ok(), mutation == 0);
        prop_assert_eq!(scan, before);
    }

    #[test]
    fn missing_face_is_rejected(missing in any_face()) {
        let mut scan = CubeState::solved();
        scan.remove(&missing.to_string());
        prop_assert_eq!(
            validate_cube_state(&scan).unwrap_err(),
            StructuralError::FaceCount { found: 5 }
        );
    }

    #[test]
    fn renamed_face_is_rejected(renamed in any_face(), key in "[a-z]{1,3}") {
        let mut scan = CubeState::solved();
        let labels = scan.remove(&renamed.to_string()).unwrap();
        scan.insert_raw(key.clone(), labels);
        prop_assert_eq!(
            validate_cube_state(&scan).unwrap_err(),
            StructuralError::FaceSet { missing: vec![renamed], unexpected: vec![key] }
        );
    }

    #[test]
    fn wrong_grid_size_is_rejected(face in any_face(), extra in any::<bool>()) {
        let mut scan = CubeState::solved();
        let labels = scan.get_mut(&face.to_string()).unwrap();
        if extra {
            labels.push("W".to_string());
        } else {
            labels.pop();
        }
        prop_assert_eq!(
            validate_cube_state(&scan).unwrap_err(),
            StructuralError::GridSize { face, found: if extra { 10 } else { 8 } }
        );
    }

    #[test]
    fn recolored_facelet_breaks_counts(
        moves in any_scramble(),
        face in any_face(),
        index in (0usize..FACE_SIZE).prop_filter("not the center", |&i| i != CENTER_INDEX),
        shift in 1usize..6,
    ) {
        let mut scan = paint(&cube_of(&moves), SOLVED_CENTERS);
        let labels = scan.get_mut(&face.to_string()).unwrap();
        let old = ColorLabel::from_label(&labels[index]).unwrap();
        let new = ColorLabel::from_repr(((old.as_usize() + shift) % 6) as u8).unwrap();
        labels[index] = new.label();

        let err = validate_cube_state(&scan).unwrap_err();
        let expected_color = old.min(new);
        let expected_count = if expected_color == old { 8 } else { 10 };
        prop_assert_eq!(
            err,
            StructuralError::ColorCount { color: expected_color, count: expected_count }
        );
    }

    #[test]
    fn duplicate_center_is_rejected(first in 0u8..6, offset in 1u8..6) {
        let first = FaceKey::from_repr(first).unwrap();
        let second = FaceKey::from_repr((first as u8 + offset) % 6).unwrap();
        // Swap the second face's center with a facelet of the first face's
        // color, keeping every color count at nine.
        let mut scan = CubeState::solved();
        let first_color = scan.face(first).unwrap()[CENTER_INDEX].clone();
        let second_color = scan.face(second).unwrap()[CENTER_INDEX].clone();
        scan.get_mut(&second.to_string()).unwrap()[CENTER_INDEX] = first_color.clone();
        scan.get_mut(&first.to_string()).unwrap()[0] = second_color;

        let (lo, hi) = if first < second { (first, second) } else { (second, first) };
        prop_assert_eq!(
            validate_cube_state(&scan).unwrap_err(),
            StructuralError::DuplicateCenter {
                color: ColorLabel::from_label(&first_color).unwrap(),
                first: lo,
                second: hi,
            }
        );
    }
}
