// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face turns in standard notation.
//!
//! A move is a face letter, optionally followed by `2` (half turn) or `'`
//! (counter-clockwise quarter turn). Move sequences print space separated,
//! which is also the format solutions are stored in.

use crate::geometry::{FaceKey, NMOVES};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How far a face is turned, clockwise, in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Power {
    Quarter = 1,
    Half = 2,
    Inverse = 3,
}

impl Power {
    pub fn quarter_turns(self) -> usize {
        self as usize
    }

    fn suffix(self) -> &'static str {
        match self {
            Power::Quarter => "",
            Power::Half => "2",
            Power::Inverse => "'",
        }
    }

    fn inverse(self) -> Self {
        match self {
            Power::Quarter => Power::Inverse,
            Power::Half => Power::Half,
            Power::Inverse => Power::Quarter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: FaceKey,
    pub power: Power,
}

impl Move {
    pub fn new(face: FaceKey, power: Power) -> Self {
        Self { face, power }
    }

    /// Move number in 0..18: `3 * face + (quarter turns - 1)`.
    ///
    /// This is the column order of every move table.
    pub fn index(self) -> usize {
        3 * self.face.as_usize() + self.power.quarter_turns() - 1
    }

    /// Inverse of [`Move::index`]. Returns `None` for `index >= 18`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NMOVES {
            return None;
        }
        let face = FaceKey::from_repr((index / 3) as u8)?;
        let power = match index % 3 {
            0 => Power::Quarter,
            1 => Power::Half,
            _ => Power::Inverse,
        };
        Some(Self { face, power })
    }

    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            power: self.power.inverse(),
        }
    }

    /// All 18 moves in index order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..NMOVES).filter_map(Move::from_index)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.power.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move '{0}': expected a face letter U, R, F, D, L, B with optional 2 or '")]
pub struct MoveParseError(pub String);

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(FaceKey::from_char)
            .ok_or_else(|| MoveParseError(s.to_string()))?;
        let power = match chars.as_str() {
            "" | "1" => Power::Quarter,
            "2" | "2'" => Power::Half,
            "'" | "3" => Power::Inverse,
            _ => return Err(MoveParseError(s.to_string())),
        };
        Ok(Self { face, power })
    }
}

/// A sequence of moves, as returned by a solver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    pub fn new(moves: Vec<Move>) -> Self {
        Self(moves)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.0.iter()
    }

    /// The sequence that undoes this one.
    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().map(|m| m.inverse()).collect())
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

impl FromStr for MoveSequence {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(Move::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
