//! Addressing of the nine cells that make up one plane of the grid.

use crate::{
    cube::CubeletId,
    cubelet::{Cubelet, Plane},
    matrix::Matrix3,
};
use itertools::iproduct;
use thiserror::Error;

/// A spatial axis of the grid. X runs left to right, Y runs top to bottom and
/// Z runs front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Slice index must be 0, 1 or 2 but got {0}")]
    IndexOutOfRange(usize),
}

/// A coordinate along one axis, always in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceIndex(u8);

impl SliceIndex {
    pub const FIRST: SliceIndex = SliceIndex(0);
    pub const MIDDLE: SliceIndex = SliceIndex(1);
    pub const LAST: SliceIndex = SliceIndex(2);

    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for SliceIndex {
    type Error = SelectorError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(SliceIndex::FIRST),
            1 => Ok(SliceIndex::MIDDLE),
            2 => Ok(SliceIndex::LAST),
            _ => Err(SelectorError::IndexOutOfRange(index)),
        }
    }
}

/// One plane of the grid: the cells whose `axis` coordinate equals `index`.
///
/// The two remaining axes, in X, Y, Z order, become the row and the column of
/// the face, both ascending. Extraction and insertion share this addressing
/// through [`FaceSelector::position`], which makes one the inverse of the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceSelector {
    axis: Axis,
    index: SliceIndex,
}

impl FaceSelector {
    #[must_use]
    pub const fn new(axis: Axis, index: SliceIndex) -> Self {
        FaceSelector { axis, index }
    }

    /// # Errors
    ///
    /// If `index` is not 0, 1 or 2.
    pub fn try_new(axis: Axis, index: usize) -> Result<Self, SelectorError> {
        Ok(FaceSelector::new(axis, SliceIndex::try_from(index)?))
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        self.axis
    }

    #[must_use]
    pub const fn index(self) -> SliceIndex {
        self.index
    }

    /// The grid position `[x, y, z]` of the cell at `row`, `col` of this face.
    #[must_use]
    pub const fn position(self, row: usize, col: usize) -> [usize; 3] {
        let fixed = self.index.get();
        match self.axis {
            Axis::X => [fixed, row, col],
            Axis::Y => [row, fixed, col],
            Axis::Z => [row, col, fixed],
        }
    }

    /// Every selector of the grid, nine in total.
    pub fn all() -> impl Iterator<Item = FaceSelector> {
        iproduct!(Axis::ALL, [SliceIndex::FIRST, SliceIndex::MIDDLE, SliceIndex::LAST])
            .map(|(axis, index)| FaceSelector::new(axis, index))
    }
}

/// Handles of the nine cubelets on one face, valid for a single turn.
pub(crate) type FaceView = Matrix3<CubeletId>;

/// Reorient every cubelet of `face` for a quarter turn in `plane`. The view
/// holds handles, so the cubelets are updated where the cube stores them.
pub(crate) fn flip_all(cubelets: &mut [Cubelet], face: &FaceView, plane: Plane) {
    for id in face.iter().flatten() {
        cubelets[id.index()].flip(plane);
    }
}
