//! Tiled photomosaic collages built by nearest-neighbor resampling
//!
//! An original image is downsampled into a square grid of tiles. Individual
//! tiles can then be replaced with other images, reduced to a single color
//! channel, or converted to greyscale.

#![forbid(unsafe_code)]

/// Collage engine, tile geometry and pixel transforms
pub mod collage;
/// Input/output operations and error handling
pub mod io;

pub use collage::{ArtCollage, ColorComponent, TileGeometry, TileValidation};
pub use io::error::{CollageError, Result};
