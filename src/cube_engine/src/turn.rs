//! The six face turns and the table that maps each onto the grid.

use crate::{
    cubelet::Plane,
    face::{Axis, FaceSelector, SliceIndex},
};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Unknown move code {0:?}, expected one of R, L, F, B, D or U")]
    UnknownCode(char),
    #[error("Expected a single move letter but got {0:?}")]
    NotSingleLetter(String),
}

/// A clockwise quarter turn of one outer face, in Singmaster notation.
///
/// All moves on one axis turn the same way about it, so R, B and U are
/// clockwise seen from their own face while L, F and D are counter-clockwise
/// seen from theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    R,
    L,
    F,
    B,
    D,
    U,
}

impl Move {
    pub const ALL: [Move; 6] = [Move::R, Move::L, Move::F, Move::B, Move::D, Move::U];

    /// The face this move turns and the plane it turns in.
    ///
    /// | move | axis | index | plane |
    /// |------|------|-------|-------|
    /// | R    | X    | 2     | YZ    |
    /// | L    | X    | 0     | YZ    |
    /// | F    | Z    | 0     | XY    |
    /// | B    | Z    | 2     | XY    |
    /// | D    | Y    | 2     | XZ    |
    /// | U    | Y    | 0     | XZ    |
    #[must_use]
    pub const fn dispatch(self) -> (FaceSelector, Plane) {
        match self {
            Move::R => (FaceSelector::new(Axis::X, SliceIndex::LAST), Plane::YZ),
            Move::L => (FaceSelector::new(Axis::X, SliceIndex::FIRST), Plane::YZ),
            Move::F => (FaceSelector::new(Axis::Z, SliceIndex::FIRST), Plane::XY),
            Move::B => (FaceSelector::new(Axis::Z, SliceIndex::LAST), Plane::XY),
            Move::D => (FaceSelector::new(Axis::Y, SliceIndex::LAST), Plane::XZ),
            Move::U => (FaceSelector::new(Axis::Y, SliceIndex::FIRST), Plane::XZ),
        }
    }

    #[must_use]
    pub const fn selector(self) -> FaceSelector {
        self.dispatch().0
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Move::R => 'R',
            Move::L => 'L',
            Move::F => 'F',
            Move::B => 'B',
            Move::D => 'D',
            Move::U => 'U',
        }
    }
}

impl TryFrom<char> for Move {
    type Error = MoveError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'R' => Ok(Move::R),
            'L' => Ok(Move::L),
            'F' => Ok(Move::F),
            'B' => Ok(Move::B),
            'D' => Ok(Move::D),
            'U' => Ok(Move::U),
            _ => Err(MoveError::UnknownCode(code)),
        }
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Move::try_from(code),
            _ => Err(MoveError::NotSingleLetter(s.to_owned())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
