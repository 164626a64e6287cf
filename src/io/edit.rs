//! Textual tile edits applied to a collage in command-line order
//!
//! Edits use a colon-separated form, with tile coordinates always last:
//! - `replace:PATH:COL:ROW`
//! - `colorize:COMPONENT:COL:ROW`
//! - `greyscale:COL:ROW` (or `grayscale:COL:ROW`)
//!
//! Fields are split from the right, so a replacement path may itself contain
//! colons.

use crate::collage::ArtCollage;
use crate::io::error::{CollageError, Result, invalid_parameter};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A single operation on one tile of a collage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileEdit {
    /// Replace the tile with a scaled copy of another image
    Replace {
        /// Image to load into the tile
        path: PathBuf,
        /// Tile column
        col: u32,
        /// Tile row
        row: u32,
    },
    /// Keep only one color channel in the tile
    Colorize {
        /// Component name, passed through unvalidated
        component: String,
        /// Tile column
        col: u32,
        /// Tile row
        row: u32,
    },
    /// Convert the tile to greyscale
    Greyscale {
        /// Tile column
        col: u32,
        /// Tile row
        row: u32,
    },
}

impl TileEdit {
    /// Apply the edit to `collage`
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying collage operation
    pub fn apply(&self, collage: &mut ArtCollage) -> Result<()> {
        match self {
            Self::Replace { path, col, row } => collage.replace_tile(path, *col, *row),
            Self::Colorize {
                component,
                col,
                row,
            } => collage.colorize_tile(component, *col, *row),
            Self::Greyscale { col, row } => collage.greyscale_tile(*col, *row),
        }
    }
}

impl fmt::Display for TileEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace { path, col, row } => {
                write!(f, "replace:{}:{col}:{row}", path.display())
            }
            Self::Colorize {
                component,
                col,
                row,
            } => write!(f, "colorize:{component}:{col}:{row}"),
            Self::Greyscale { col, row } => write!(f, "greyscale:{col}:{row}"),
        }
    }
}

impl FromStr for TileEdit {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| malformed(s, "expected KIND:...:COL:ROW"))?;

        match kind {
            "replace" | "colorize" => {
                let mut fields = rest.rsplitn(3, ':');
                let row = parse_coordinate(s, fields.next())?;
                let col = parse_coordinate(s, fields.next())?;
                let argument = fields
                    .next()
                    .filter(|argument| !argument.is_empty())
                    .ok_or_else(|| malformed(s, "missing argument before COL:ROW"))?;

                Ok(if kind == "replace" {
                    Self::Replace {
                        path: PathBuf::from(argument),
                        col,
                        row,
                    }
                } else {
                    Self::Colorize {
                        component: argument.to_string(),
                        col,
                        row,
                    }
                })
            }
            "greyscale" | "grayscale" => {
                let (col, row) = rest
                    .split_once(':')
                    .ok_or_else(|| malformed(s, "expected greyscale:COL:ROW"))?;
                Ok(Self::Greyscale {
                    col: parse_coordinate(s, Some(col))?,
                    row: parse_coordinate(s, Some(row))?,
                })
            }
            _ => Err(malformed(
                s,
                "unknown edit kind, expected replace, colorize or greyscale",
            )),
        }
    }
}

fn parse_coordinate(edit: &str, field: Option<&str>) -> Result<u32> {
    let field = field.ok_or_else(|| malformed(edit, "missing tile coordinate"))?;
    field
        .parse()
        .map_err(|_parse_error| malformed(edit, &format!("'{field}' is not a tile coordinate")))
}

fn malformed(edit: &str, reason: &str) -> CollageError {
    invalid_parameter("edit", &edit, &reason)
}
