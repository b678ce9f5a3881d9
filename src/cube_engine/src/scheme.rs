//! Face colors of a solved cube, loadable from TOML.

use crate::{cubelet::Color, turn::Move};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("Could not read color scheme {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid color scheme: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not serialize color scheme: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Face {face} has no color")]
    NoneColor { face: Move },
    #[error("Faces {first} and {second} are both {color:?}")]
    DuplicateColor {
        color: Color,
        first: Move,
        second: Move,
    },
}

/// The color of every outer face of a solved cube.
///
/// ```toml
/// right = "red"
/// left = "orange"
/// up = "white"
/// down = "yellow"
/// front = "green"
/// back = "blue"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScheme {
    pub right: Color,
    pub left: Color,
    pub up: Color,
    pub down: Color,
    pub front: Color,
    pub back: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            right: Color::Red,
            left: Color::Orange,
            up: Color::White,
            down: Color::Yellow,
            front: Color::Green,
            back: Color::Blue,
        }
    }
}

impl ColorScheme {
    /// Parse and validate a scheme.
    ///
    /// # Errors
    ///
    /// If `s` is not a valid scheme, see [`SchemeError`].
    pub fn from_toml_str(s: &str) -> Result<Self, SchemeError> {
        let scheme = toml::from_str::<ColorScheme>(s)?;
        scheme.validate()?;
        Ok(scheme)
    }

    /// Read, parse and validate a scheme file.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or is not a valid scheme.
    pub fn load(path: &Path) -> Result<Self, SchemeError> {
        let contents = fs::read_to_string(path).map_err(|source| SchemeError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// # Errors
    ///
    /// If TOML serialization fails.
    pub fn to_toml_string(&self) -> Result<String, SchemeError> {
        Ok(toml::to_string(self)?)
    }

    /// The color of the face turned by `face`.
    #[must_use]
    pub const fn color(&self, face: Move) -> Color {
        match face {
            Move::R => self.right,
            Move::L => self.left,
            Move::U => self.up,
            Move::D => self.down,
            Move::F => self.front,
            Move::B => self.back,
        }
    }

    /// Check that all six faces carry distinct real colors.
    ///
    /// # Errors
    ///
    /// On the first face without a color or the first repeated color.
    pub fn validate(&self) -> Result<(), SchemeError> {
        for (i, &face) in Move::ALL.iter().enumerate() {
            let color = self.color(face);
            if color.is_none() {
                return Err(SchemeError::NoneColor { face });
            }
            if let Some(&first) = Move::ALL[..i].iter().find(|&&m| self.color(m) == color) {
                return Err(SchemeError::DuplicateColor {
                    color,
                    first,
                    second: face,
                });
            }
        }
        Ok(())
    }
}
