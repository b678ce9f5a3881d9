//! State and face turns of a 3x3x3 cube.
//!
//! A [`Cube`] owns its 27 [`Cubelet`]s and lets them be moved only by
//! clockwise quarter turns of its outer faces. Each turn lifts the nine
//! cubelets of one face out of the grid, rotates them as a 3x3 matrix,
//! exchanges the two stickers of every cubelet that changed direction, and
//! writes the face back.
//!
//! ```
//! use cube_engine::{Cube, Move};
//!
//! let mut cube = Cube::default();
//! cube.rotate('R').unwrap();
//! assert!(!cube.is_solved());
//! for _ in 0..3 {
//!     cube.apply(Move::R);
//! }
//! assert!(cube.is_solved());
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cube;
pub mod cubelet;
pub mod face;
pub mod matrix;
pub mod scheme;
pub mod turn;

pub use cube::{Cube, Layout, LayoutError, STICKERS_PER_COLOR};
pub use cubelet::{Color, Cubelet, CubeletKind, Plane};
pub use face::{Axis, FaceSelector, SelectorError, SliceIndex};
pub use scheme::{ColorScheme, SchemeError};
pub use turn::{Move, MoveError};
