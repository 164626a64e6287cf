//! Tile geometry and nearest-neighbor coordinate mapping
//!
//! A collage is a square of `collage_dimension x collage_dimension` tiles, each
//! `tile_dimension` pixels on a side. Two mapping rules connect collage pixels
//! to source pixels:
//! - whole-image scaling, where the collage is one stretched copy of the source
//! - tile-relative scaling, where every tile holds its own full copy of the source
//!
//! Both use integer floor division with every multiplication performed first.

use crate::io::configuration::MAX_COLLAGE_SIDE;
use crate::io::error::{Result, invalid_parameter};
use std::ops::Range;

/// Pixel bounds of one tile inside the collage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBounds {
    /// Collage columns covered by the tile
    pub x: Range<u32>,
    /// Collage rows covered by the tile
    pub y: Range<u32>,
}

impl TileBounds {
    /// Iterate every `(x, y)` collage pixel in the tile, column-major
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.x
            .clone()
            .flat_map(move |x| self.y.clone().map(move |y| (x, y)))
    }
}

/// Validated tile and collage dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    tile_dimension: u32,
    collage_dimension: u32,
}

impl TileGeometry {
    /// Create a geometry from tile side length and tiles per side
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the collage side would
    /// exceed [`MAX_COLLAGE_SIDE`].
    pub fn new(tile_dimension: u32, collage_dimension: u32) -> Result<Self> {
        if tile_dimension == 0 {
            return Err(invalid_parameter(
                "tile_dimension",
                &tile_dimension,
                &"must be positive",
            ));
        }
        if collage_dimension == 0 {
            return Err(invalid_parameter(
                "collage_dimension",
                &collage_dimension,
                &"must be positive",
            ));
        }

        let side = u64::from(tile_dimension) * u64::from(collage_dimension);
        if side > u64::from(MAX_COLLAGE_SIDE) {
            return Err(invalid_parameter(
                "collage_side",
                &side,
                &format!("exceeds maximum of {MAX_COLLAGE_SIDE} pixels"),
            ));
        }

        Ok(Self {
            tile_dimension,
            collage_dimension,
        })
    }

    /// Side length of one tile in pixels
    pub const fn tile_dimension(&self) -> u32 {
        self.tile_dimension
    }

    /// Number of tiles per collage side
    pub const fn collage_dimension(&self) -> u32 {
        self.collage_dimension
    }

    /// Side length of the whole collage in pixels
    pub const fn side(&self) -> u32 {
        self.tile_dimension * self.collage_dimension
    }

    /// Whether `(col, row)` addresses a tile inside the grid
    pub const fn contains_tile(&self, col: u32, row: u32) -> bool {
        col < self.collage_dimension && row < self.collage_dimension
    }

    /// Pixel bounds of tile `(col, row)`, or `None` if it lies outside the grid
    pub fn tile_bounds(&self, col: u32, row: u32) -> Option<TileBounds> {
        self.contains_tile(col, row).then(|| {
            let x0 = col * self.tile_dimension;
            let y0 = row * self.tile_dimension;
            TileBounds {
                x: x0..x0 + self.tile_dimension,
                y: y0..y0 + self.tile_dimension,
            }
        })
    }

    /// Source coordinate for whole-image scaling along one axis
    ///
    /// Maps collage coordinate `dest` to `dest * source_len / side`.
    pub fn scale_to_source(&self, dest: u32, source_len: u32) -> u32 {
        scale(u64::from(dest), source_len, self.side())
    }

    /// Source coordinate for tile-relative scaling along one axis
    ///
    /// Maps collage coordinate `dest` to
    /// `(dest mod tile_dimension) * collage_dimension * source_len / side`,
    /// so each tile spans the whole source.
    pub fn tile_to_source(&self, dest: u32, source_len: u32) -> u32 {
        let offset = u64::from(dest % self.tile_dimension) * u64::from(self.collage_dimension);
        scale(offset, source_len, self.side())
    }
}

fn scale(numerator: u64, source_len: u32, side: u32) -> u32 {
    // Inputs are bounded by the collage side, so the quotient is below `source_len`
    (numerator * u64::from(source_len) / u64::from(side)) as u32
}
