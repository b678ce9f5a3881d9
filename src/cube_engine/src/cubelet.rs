//! The 27 unit pieces of the cube and the stickers they carry.

use crate::face::Axis;
use serde::{Deserialize, Serialize};
use std::mem;

/// A sticker color. `None` marks a cubelet face without a sticker.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    None,
    White,
    Yellow,
    Blue,
    Green,
    Red,
    Orange,
}

impl Color {
    /// Every color that can actually be printed on a sticker.
    pub const REAL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Orange,
    ];

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Color::None)
    }
}

/// What kind of piece a cubelet is, by how many stickers it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeletKind {
    Center,
    Edge,
    Corner,
    /// The hidden piece at the geometric center of the cube.
    Core,
}

impl CubeletKind {
    pub const ALL: [CubeletKind; 4] = [
        CubeletKind::Center,
        CubeletKind::Edge,
        CubeletKind::Corner,
        CubeletKind::Core,
    ];

    /// Number of non-`None` sticker fields a cubelet of this kind carries.
    #[must_use]
    pub const fn sticker_count(self) -> usize {
        match self {
            CubeletKind::Core => 0,
            CubeletKind::Center => 1,
            CubeletKind::Edge => 2,
            CubeletKind::Corner => 3,
        }
    }

    /// Number of cubelets of this kind in a 3x3x3 cube.
    #[must_use]
    pub const fn population(self) -> usize {
        match self {
            CubeletKind::Core => 1,
            CubeletKind::Center => 6,
            CubeletKind::Edge => 12,
            CubeletKind::Corner => 8,
        }
    }

    /// Number of cubelets of this kind showing any one real color.
    #[must_use]
    pub const fn cubelets_per_color(self) -> usize {
        match self {
            CubeletKind::Core => 0,
            CubeletKind::Center => 1,
            CubeletKind::Edge | CubeletKind::Corner => 4,
        }
    }

    /// The kind of cubelet that belongs at grid position `[x, y, z]`, decided
    /// by how many of its coordinates lie on the outside of the cube.
    #[must_use]
    pub fn for_position(position: [usize; 3]) -> Self {
        match position.iter().filter(|&&c| c != 1).count() {
            0 => CubeletKind::Core,
            1 => CubeletKind::Center,
            2 => CubeletKind::Edge,
            _ => CubeletKind::Corner,
        }
    }
}

/// The plane a face turn happens in. Flipping a cubelet for a turn in this
/// plane exchanges its two stickers that lie along the plane's axes and
/// leaves the third one alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Turns about Z exchange the x and y stickers.
    XY,
    /// Turns about X exchange the y and z stickers.
    YZ,
    /// Turns about Y exchange the x and z stickers.
    XZ,
}

impl Plane {
    /// The two sticker axes a turn in this plane exchanges.
    #[must_use]
    pub const fn swapped_axes(self) -> (Axis, Axis) {
        match self {
            Plane::XY => (Axis::X, Axis::Y),
            Plane::YZ => (Axis::Y, Axis::Z),
            Plane::XZ => (Axis::X, Axis::Z),
        }
    }

    /// The axis a turn in this plane rotates about.
    #[must_use]
    pub const fn normal(self) -> Axis {
        match self {
            Plane::XY => Axis::Z,
            Plane::YZ => Axis::X,
            Plane::XZ => Axis::Y,
        }
    }
}

/// One unit piece of the cube with a sticker field per axis. Each field is
/// the color on the side of the cubelet perpendicular to that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cubelet {
    kind: CubeletKind,
    x: Color,
    y: Color,
    z: Color,
}

impl Cubelet {
    #[must_use]
    pub const fn new(kind: CubeletKind, x: Color, y: Color, z: Color) -> Self {
        Cubelet { kind, x, y, z }
    }

    #[must_use]
    pub const fn core() -> Self {
        Cubelet::new(CubeletKind::Core, Color::None, Color::None, Color::None)
    }

    #[must_use]
    pub const fn kind(&self) -> CubeletKind {
        self.kind
    }

    #[must_use]
    pub const fn sticker(&self, axis: Axis) -> Color {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// The sticker fields in `[x, y, z]` order.
    #[must_use]
    pub const fn stickers(&self) -> [Color; 3] {
        [self.x, self.y, self.z]
    }

    /// Number of fields holding a real color.
    #[must_use]
    pub fn sticker_count(&self) -> usize {
        self.stickers().iter().filter(|c| !c.is_none()).count()
    }

    /// Reorient this cubelet for a quarter turn in `plane`.
    ///
    /// # Panics
    ///
    /// If this is the core, or a center whose sticker lies on one of the
    /// exchanged axes. Neither can be on a turning face of a valid cube.
    pub(crate) fn flip(&mut self, plane: Plane) {
        match self.kind {
            CubeletKind::Core => panic!("The core cubelet is never part of a face"),
            CubeletKind::Center => {
                let (a, b) = plane.swapped_axes();
                assert!(
                    self.sticker(a).is_none() && self.sticker(b).is_none(),
                    "Center cubelet {:?} has a sticker in the {plane:?} plane of its own turn",
                    self.stickers(),
                );
            }
            CubeletKind::Edge | CubeletKind::Corner => match plane {
                Plane::XY => mem::swap(&mut self.x, &mut self.y),
                Plane::YZ => mem::swap(&mut self.y, &mut self.z),
                Plane::XZ => mem::swap(&mut self.x, &mut self.z),
            },
        }
    }
}
