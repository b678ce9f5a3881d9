//! The cube state and the face turn.

use crate::{
    cubelet::{Color, Cubelet, CubeletKind},
    face::{Axis, FaceSelector, FaceView, flip_all},
    matrix::{Matrix3, rotate_cw},
    scheme::{ColorScheme, SchemeError},
    turn::{Move, MoveError},
};
use itertools::{Itertools, iproduct};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::{array, collections::HashMap};
use thiserror::Error;

/// Stickers of each real color on a whole cube.
pub const STICKERS_PER_COLOR: usize = 9;

/// Every cubelet of a cube, indexed `[x][y][z]`.
pub type Layout = [[[Cubelet; 3]; 3]; 3];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Expected {expected} cubelets but got {actual}")]
    WrongCubeletCount { expected: usize, actual: usize },
    #[error(
        "The {kind:?} cubelet at {position:?} must carry {expected} stickers but carries {actual}"
    )]
    StickerCount {
        position: [usize; 3],
        kind: CubeletKind,
        expected: usize,
        actual: usize,
    },
    #[error("Expected {expected} {kind:?} cubelets but got {actual}")]
    KindCount {
        kind: CubeletKind,
        expected: usize,
        actual: usize,
    },
    #[error("The cubelet at {position:?} must be a {expected:?} cubelet but is a {actual:?} cubelet")]
    MisplacedCubelet {
        position: [usize; 3],
        expected: CubeletKind,
        actual: CubeletKind,
    },
    #[error("The cubelet at {position:?} has a sticker on its hidden {axis:?} side")]
    HiddenSticker { position: [usize; 3], axis: Axis },
    #[error("Expected {expected} {color:?} stickers but got {actual}")]
    ColorCount {
        color: Color,
        expected: usize,
        actual: usize,
    },
    #[error("Expected {color:?} on {expected} {kind:?} cubelets but found it on {actual}")]
    ColorDistribution {
        color: Color,
        kind: CubeletKind,
        expected: usize,
        actual: usize,
    },
}

/// Handle of a cubelet owned by a [`Cube`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CubeletId(u8);

impl CubeletId {
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A 3x3x3 cube.
///
/// The cube owns its 27 cubelets for its whole lifetime. The grid only stores
/// handles to them, so a turn moves handles between cells and reorients the
/// cubelets in place; no cubelet is ever created, copied into the grid or
/// dropped after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Layout", into = "Layout")]
pub struct Cube {
    cubelets: [Cubelet; 27],
    grid: [[[CubeletId; 3]; 3]; 3],
}

impl Cube {
    /// Create a cube from a fully populated layout.
    ///
    /// # Errors
    ///
    /// If any cubelet disagrees with its kind or position, or a real color
    /// doesn't appear on exactly one center, four edges and four corners. See [`LayoutError`].
    pub fn new(layout: Layout) -> Result<Self, LayoutError> {
        validate(&layout)?;
        debug!("Created a cube from a validated layout");
        Ok(Self::from_layout(&layout))
    }

    /// Create a cube from 27 cubelets listed in `[x][y][z]` order, with `z`
    /// varying fastest.
    ///
    /// # Errors
    ///
    /// If there aren't exactly 27 cubelets, or the layout they form is
    /// invalid.
    pub fn try_from_cubelets<I: IntoIterator<Item = Cubelet>>(
        cubelets: I,
    ) -> Result<Self, LayoutError> {
        let flat: [Cubelet; 27] = cubelets
            .into_iter()
            .collect_vec()
            .try_into()
            .map_err(|rejected: Vec<Cubelet>| LayoutError::WrongCubeletCount {
                expected: 27,
                actual: rejected.len(),
            })?;
        Self::new(array::from_fn(|x| {
            array::from_fn(|y| array::from_fn(|z| flat[flat_index([x, y, z])]))
        }))
    }

    /// Create a solved cube painted with `scheme`.
    ///
    /// # Errors
    ///
    /// If `scheme` doesn't use six distinct real colors.
    pub fn solved(scheme: &ColorScheme) -> Result<Self, SchemeError> {
        scheme.validate()?;
        let layout = solved_layout(scheme);
        debug_assert_eq!(validate(&layout), Ok(()));
        Ok(Self::from_layout(&layout))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_layout(layout: &Layout) -> Self {
        Cube {
            cubelets: array::from_fn(|i| {
                let [x, y, z] = [i / 9, i / 3 % 3, i % 3];
                layout[x][y][z]
            }),
            grid: array::from_fn(|x| {
                array::from_fn(|y| array::from_fn(|z| CubeletId(flat_index([x, y, z]) as u8)))
            }),
        }
    }

    /// Turn the face named by the Singmaster letter `code` a quarter turn
    /// clockwise.
    ///
    /// # Errors
    ///
    /// If `code` isn't one of R, L, F, B, D or U. The cube is left unchanged.
    pub fn rotate(&mut self, code: char) -> Result<(), MoveError> {
        let mv = Move::try_from(code).inspect_err(|_| {
            warn!("Rejected unknown move code {code:?}");
        })?;
        self.apply(mv);
        Ok(())
    }

    /// Turn one face a quarter turn clockwise: extract it, rotate it,
    /// reorient its cubelets and put it back.
    pub fn apply(&mut self, mv: Move) {
        let (selector, plane) = mv.dispatch();
        debug_assert_eq!(plane.normal(), selector.axis());
        let mut face = self.extract_face(selector);
        trace!("Extracted face {selector:?} for {mv}: {face:?}");
        rotate_cw(&mut face);
        flip_all(&mut self.cubelets, &face, plane);
        self.insert_face(selector, &face);
        debug!("Applied {mv}");
    }

    /// The handles of the nine cubelets on `selector`, row by column.
    pub(crate) fn extract_face(&self, selector: FaceSelector) -> FaceView {
        array::from_fn(|row| {
            array::from_fn(|col| {
                let [x, y, z] = selector.position(row, col);
                self.grid[x][y][z]
            })
        })
    }

    /// Store `face` into the cells of `selector`, using the same addressing
    /// as [`Cube::extract_face`].
    pub(crate) fn insert_face(&mut self, selector: FaceSelector, face: &FaceView) {
        for (row, col) in iproduct!(0..3, 0..3) {
            let [x, y, z] = selector.position(row, col);
            self.grid[x][y][z] = face[row][col];
        }
    }

    /// The cubelet currently at `[x, y, z]`, or `None` if a coordinate is out
    /// of range.
    #[must_use]
    pub fn cubelet(&self, position: [usize; 3]) -> Option<&Cubelet> {
        let [x, y, z] = position;
        let id = self.grid.get(x)?.get(y)?.get(z)?;
        Some(&self.cubelets[id.index()])
    }

    /// Every position with the cubelet currently there, in `[x][y][z]` order.
    pub fn cubelets(&self) -> impl Iterator<Item = ([usize; 3], &Cubelet)> {
        iproduct!(0..3, 0..3, 0..3)
            .map(move |(x, y, z)| ([x, y, z], &self.cubelets[self.grid[x][y][z].index()]))
    }

    /// A copy of the current arrangement.
    #[must_use]
    pub fn layout(&self) -> Layout {
        array::from_fn(|x| {
            array::from_fn(|y| array::from_fn(|z| self.cubelets[self.grid[x][y][z].index()]))
        })
    }

    /// The outward stickers of the face turned by `face`, addressed like the
    /// face itself: rows and columns follow the two remaining axes in X, Y, Z
    /// order.
    #[must_use]
    pub fn face_colors(&self, face: Move) -> Matrix3<Color> {
        let selector = face.selector();
        self.extract_face(selector)
            .map(|row| row.map(|id| self.cubelets[id.index()].sticker(selector.axis())))
    }

    /// How many stickers of each real color the cube carries.
    #[must_use]
    pub fn color_counts(&self) -> HashMap<Color, usize> {
        color_counts(self.cubelets.iter())
    }

    /// Whether every outer face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Move::ALL
            .iter()
            .all(|&face| self.face_colors(face).iter().flatten().all_equal())
    }
}

impl Default for Cube {
    /// A solved cube in the default color scheme.
    fn default() -> Self {
        Self::from_layout(&solved_layout(&ColorScheme::default()))
    }
}

/// Two cubes are equal when every cell holds an identical cubelet.
impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.layout() == other.layout()
    }
}

impl Eq for Cube {}

impl TryFrom<Layout> for Cube {
    type Error = LayoutError;

    fn try_from(layout: Layout) -> Result<Self, Self::Error> {
        Cube::new(layout)
    }
}

impl From<Cube> for Layout {
    fn from(cube: Cube) -> Self {
        cube.layout()
    }
}

fn solved_layout(scheme: &ColorScheme) -> Layout {
    let sticker = |coordinate: usize, low: Move, high: Move| match coordinate {
        0 => scheme.color(low),
        2 => scheme.color(high),
        _ => Color::None,
    };
    array::from_fn(|x| {
        array::from_fn(|y| {
            array::from_fn(|z| {
                Cubelet::new(
                    CubeletKind::for_position([x, y, z]),
                    sticker(x, Move::L, Move::R),
                    sticker(y, Move::U, Move::D),
                    sticker(z, Move::F, Move::B),
                )
            })
        })
    })
}

const fn flat_index([x, y, z]: [usize; 3]) -> usize {
    x * 9 + y * 3 + z
}

fn color_counts<'a>(cubelets: impl Iterator<Item = &'a Cubelet>) -> HashMap<Color, usize> {
    cubelets
        .flat_map(Cubelet::stickers)
        .filter(|color| !color.is_none())
        .counts()
}

fn validate(layout: &Layout) -> Result<(), LayoutError> {
    let cells = move || {
        iproduct!(0..3, 0..3, 0..3).map(move |(x, y, z)| ([x, y, z], &layout[x][y][z]))
    };

    for (position, cubelet) in cells() {
        let expected = cubelet.kind().sticker_count();
        let actual = cubelet.sticker_count();
        if actual != expected {
            return Err(LayoutError::StickerCount {
                position,
                kind: cubelet.kind(),
                expected,
                actual,
            });
        }
    }

    let kinds = cells().map(|(_, cubelet)| cubelet.kind()).counts();
    for kind in CubeletKind::ALL {
        let actual = kinds.get(&kind).copied().unwrap_or(0);
        if actual != kind.population() {
            return Err(LayoutError::KindCount {
                kind,
                expected: kind.population(),
                actual,
            });
        }
    }

    for (position, cubelet) in cells() {
        let expected = CubeletKind::for_position(position);
        if cubelet.kind() != expected {
            return Err(LayoutError::MisplacedCubelet {
                position,
                expected,
                actual: cubelet.kind(),
            });
        }
        for axis in Axis::ALL {
            if position[axis as usize] == 1 && !cubelet.sticker(axis).is_none() {
                return Err(LayoutError::HiddenSticker { position, axis });
            }
        }
    }

    let colors = color_counts(cells().map(|(_, cubelet)| cubelet));
    for color in Color::REAL {
        let actual = colors.get(&color).copied().unwrap_or(0);
        if actual != STICKERS_PER_COLOR {
            return Err(LayoutError::ColorCount {
                color,
                expected: STICKERS_PER_COLOR,
                actual,
            });
        }
    }

    let placements = cells()
        .flat_map(|(_, cubelet)| {
            cubelet
                .stickers()
                .into_iter()
                .filter(|color| !color.is_none())
                .map(move |color| (color, cubelet.kind()))
        })
        .counts();
    for (color, kind) in iproduct!(Color::REAL, CubeletKind::ALL) {
        let expected = kind.cubelets_per_color();
        let actual = placements.get(&(color, kind)).copied().unwrap_or(0);
        if actual != expected {
            return Err(LayoutError::ColorDistribution {
                color,
                kind,
                expected,
                actual,
            });
        }
    }

    Ok(())
}
