//! The collage engine: an original image resampled into a grid of tiles
//!
//! The engine owns two buffers. The original is loaded once and never
//! modified; the collage is a square of `tile_dimension * collage_dimension`
//! pixels that every operation rewrites in place. Tile edits read the current
//! collage pixels, so operations compose in call order.

use crate::collage::pixel::{ColorComponent, isolate_channel, to_grey};
use crate::collage::tiles::{TileBounds, TileGeometry};
use crate::io::configuration::{DEFAULT_COLLAGE_DIMENSION, DEFAULT_TILE_DIMENSION};
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::io::image::{load_rgb, save_rgb};
use crate::io::viewer::Viewer;
use image::{Rgb, RgbImage};
use log::{debug, warn};
use std::path::Path;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// How tile operations treat inputs that select no pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileValidation {
    /// Out-of-range tiles and unknown color components are silent no-ops
    #[default]
    Lenient,
    /// Out-of-range tiles and unknown color components are errors
    Strict,
}

/// Tiled photomosaic built from a single original image
#[derive(Debug, Clone)]
pub struct ArtCollage {
    original: RgbImage,
    collage: RgbImage,
    geometry: TileGeometry,
    validation: TileValidation,
}

impl ArtCollage {
    /// Load `path` with the default 4x4 grid of 100 pixel tiles
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::ImageLoad`] if the image cannot be loaded, or
    /// [`CollageError::InvalidParameter`] if it is empty.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with(path, DEFAULT_TILE_DIMENSION, DEFAULT_COLLAGE_DIMENSION)
    }

    /// Load `path` with explicit tile and collage dimensions
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::ImageLoad`] if the image cannot be loaded, or
    /// [`CollageError::InvalidParameter`] if a dimension is zero, the collage
    /// would be too large, or the image is empty.
    pub fn open_with(path: &Path, tile_dimension: u32, collage_dimension: u32) -> Result<Self> {
        let geometry = TileGeometry::new(tile_dimension, collage_dimension)?;
        let original = load_rgb(path)?;
        Self::build(original, geometry)
    }

    /// Build a collage from an in-memory original
    ///
    /// The collage starts as a whole-image rescale of the original, without
    /// tiling; call [`Self::make_collage`] to repeat it in every tile.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::InvalidParameter`] if a dimension is zero, the
    /// collage would be too large, or the original is empty.
    pub fn from_image(
        original: RgbImage,
        tile_dimension: u32,
        collage_dimension: u32,
    ) -> Result<Self> {
        let geometry = TileGeometry::new(tile_dimension, collage_dimension)?;
        Self::build(original, geometry)
    }

    fn build(original: RgbImage, geometry: TileGeometry) -> Result<Self> {
        ensure_not_empty("original", &original)?;

        let side = geometry.side();
        let mut collage = RgbImage::from_pixel(side, side, BLACK);
        for (col, row, pixel) in collage.enumerate_pixels_mut() {
            let source_x = geometry.scale_to_source(col, original.width());
            let source_y = geometry.scale_to_source(row, original.height());
            *pixel = original
                .get_pixel_checked(source_x, source_y)
                .copied()
                .unwrap_or(BLACK);
        }

        debug!(
            "Built {side}x{side} collage ({0}x{0} tiles of {1}px) from {2}x{3} original",
            geometry.collage_dimension(),
            geometry.tile_dimension(),
            original.width(),
            original.height()
        );

        Ok(Self {
            original,
            collage,
            geometry,
            validation: TileValidation::default(),
        })
    }

    /// Switch how out-of-range tiles and unknown components are handled
    #[must_use]
    pub fn with_validation(mut self, validation: TileValidation) -> Self {
        self.validation = validation;
        self
    }

    /// Current validation mode
    pub const fn validation(&self) -> TileValidation {
        self.validation
    }

    /// Number of tiles per collage side
    pub const fn collage_dimension(&self) -> u32 {
        self.geometry.collage_dimension()
    }

    /// Side length of one tile in pixels
    pub const fn tile_dimension(&self) -> u32 {
        self.geometry.tile_dimension()
    }

    /// The original image, as loaded
    pub const fn original_image(&self) -> &RgbImage {
        &self.original
    }

    /// The collage in its current state
    pub const fn collage_image(&self) -> &RgbImage {
        &self.collage
    }

    /// Consume the engine and keep only the collage buffer
    pub fn into_collage(self) -> RgbImage {
        self.collage
    }

    /// Render the original through `viewer`
    ///
    /// # Errors
    ///
    /// Propagates any error from the viewer
    pub fn show_original(&self, viewer: &mut impl Viewer) -> Result<()> {
        viewer.show("original", &self.original)
    }

    /// Render the collage through `viewer`
    ///
    /// # Errors
    ///
    /// Propagates any error from the viewer
    pub fn show_collage(&self, viewer: &mut impl Viewer) -> Result<()> {
        viewer.show("collage", &self.collage)
    }

    /// Encode the collage to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// image cannot be written
    pub fn save_collage(&self, path: &Path) -> Result<()> {
        save_rgb(&self.collage, path)
    }

    /// Fill every tile with a full downscaled copy of the original
    pub fn make_collage(&mut self) {
        let geometry = self.geometry;
        let original = &self.original;
        for (x, y, pixel) in self.collage.enumerate_pixels_mut() {
            *pixel = sample_tile_relative(&geometry, original, x, y);
        }
        debug!(
            "Tiled original into {0}x{0} collage",
            geometry.collage_dimension()
        );
    }

    /// Replace tile `(collage_col, collage_row)` with the image at `path`
    ///
    /// The replacement is scaled to fill the tile. Pixels outside the tile are
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::ImageLoad`] if the image cannot be loaded, in
    /// which case the collage is unchanged. In strict mode an out-of-range
    /// tile is [`CollageError::TileOutOfRange`].
    pub fn replace_tile(&mut self, path: &Path, collage_col: u32, collage_row: u32) -> Result<()> {
        let replacement = load_rgb(path)?;
        self.replace_tile_with_image(&replacement, collage_col, collage_row)
    }

    /// Replace tile `(collage_col, collage_row)` with an in-memory image
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::InvalidParameter`] if the replacement is empty.
    /// In strict mode an out-of-range tile is [`CollageError::TileOutOfRange`].
    pub fn replace_tile_with_image(
        &mut self,
        replacement: &RgbImage,
        collage_col: u32,
        collage_row: u32,
    ) -> Result<()> {
        ensure_not_empty("replacement", replacement)?;
        let Some(bounds) = self.target_tile(collage_col, collage_row)? else {
            return Ok(());
        };

        let geometry = self.geometry;
        for (x, y) in bounds.pixels() {
            let sample = sample_tile_relative(&geometry, replacement, x, y);
            if let Some(pixel) = self.collage.get_pixel_mut_checked(x, y) {
                *pixel = sample;
            }
        }
        debug!("Replaced tile ({collage_col}, {collage_row})");
        Ok(())
    }

    /// Keep only the named color channel in tile `(collage_col, collage_row)`
    ///
    /// `component` must be exactly `red`, `green` or `blue`. Other names leave
    /// the collage unchanged.
    ///
    /// # Errors
    ///
    /// In strict mode an unknown component is
    /// [`CollageError::InvalidParameter`] and an out-of-range tile is
    /// [`CollageError::TileOutOfRange`].
    pub fn colorize_tile(
        &mut self,
        component: &str,
        collage_col: u32,
        collage_row: u32,
    ) -> Result<()> {
        match ColorComponent::from_name(component) {
            Some(parsed) => self.colorize_tile_with(parsed, collage_col, collage_row),
            None if self.validation == TileValidation::Strict => Err(invalid_parameter(
                "component",
                &component,
                &"expected red, green or blue",
            )),
            None => {
                warn!("Ignoring unknown color component '{component}'");
                Ok(())
            }
        }
    }

    /// Keep only `component` in tile `(collage_col, collage_row)`
    ///
    /// # Errors
    ///
    /// In strict mode an out-of-range tile is [`CollageError::TileOutOfRange`].
    pub fn colorize_tile_with(
        &mut self,
        component: ColorComponent,
        collage_col: u32,
        collage_row: u32,
    ) -> Result<()> {
        self.map_tile(collage_col, collage_row, |pixel| {
            isolate_channel(pixel, component)
        })?;
        debug!("Colorized tile ({collage_col}, {collage_row}) to {component}");
        Ok(())
    }

    /// Convert tile `(collage_col, collage_row)` to greyscale by luma
    ///
    /// # Errors
    ///
    /// In strict mode an out-of-range tile is [`CollageError::TileOutOfRange`].
    pub fn greyscale_tile(&mut self, collage_col: u32, collage_row: u32) -> Result<()> {
        self.map_tile(collage_col, collage_row, to_grey)?;
        debug!("Greyscaled tile ({collage_col}, {collage_row})");
        Ok(())
    }

    fn map_tile(
        &mut self,
        collage_col: u32,
        collage_row: u32,
        transform: impl Fn(Rgb<u8>) -> Rgb<u8>,
    ) -> Result<()> {
        let Some(bounds) = self.target_tile(collage_col, collage_row)? else {
            return Ok(());
        };
        for (x, y) in bounds.pixels() {
            if let Some(pixel) = self.collage.get_pixel_mut_checked(x, y) {
                *pixel = transform(*pixel);
            }
        }
        Ok(())
    }

    // `None` means the tile selects no pixels and the operation is a no-op
    fn target_tile(&self, collage_col: u32, collage_row: u32) -> Result<Option<TileBounds>> {
        match self.geometry.tile_bounds(collage_col, collage_row) {
            Some(bounds) => Ok(Some(bounds)),
            None if self.validation == TileValidation::Strict => {
                Err(CollageError::TileOutOfRange {
                    col: collage_col,
                    row: collage_row,
                    collage_dimension: self.geometry.collage_dimension(),
                })
            }
            None => {
                debug!(
                    "Tile ({collage_col}, {collage_row}) is outside the {0}x{0} grid, nothing to do",
                    self.geometry.collage_dimension()
                );
                Ok(None)
            }
        }
    }
}

fn sample_tile_relative(geometry: &TileGeometry, source: &RgbImage, x: u32, y: u32) -> Rgb<u8> {
    let source_x = geometry.tile_to_source(x, source.width());
    let source_y = geometry.tile_to_source(y, source.height());
    source
        .get_pixel_checked(source_x, source_y)
        .copied()
        .unwrap_or(BLACK)
}

fn ensure_not_empty(parameter: &'static str, image: &RgbImage) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(invalid_parameter(
            parameter,
            &format!("{}x{}", image.width(), image.height()),
            &"image has no pixels",
        ));
    }
    Ok(())
}
