//! Command-line interface for building a collage and applying tile edits

use crate::collage::{ArtCollage, TileValidation};
use crate::io::configuration::{
    DEFAULT_COLLAGE_DIMENSION, DEFAULT_TILE_DIMENSION, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::edit::TileEdit;
use crate::io::error::Result;
use crate::io::progress::EditProgress;
use crate::io::viewer::SnapshotViewer;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "artcollage")]
#[command(
    author,
    version,
    about = "Build a tiled photomosaic collage and edit individual tiles"
)]
/// Command-line arguments for the collage tool
pub struct Cli {
    /// Original image to build the collage from
    #[arg(value_name = "ORIGINAL")]
    pub original: PathBuf,

    /// Side length of one tile in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_DIMENSION)]
    pub tile_dimension: u32,

    /// Number of tiles per collage side
    #[arg(short, long, default_value_t = DEFAULT_COLLAGE_DIMENSION)]
    pub collage_dimension: u32,

    /// Output path (defaults to <original>_collage.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tile edit, repeatable and applied in order:
    /// replace:PATH:COL:ROW, colorize:COMPONENT:COL:ROW or greyscale:COL:ROW
    #[arg(short, long = "edit", value_name = "EDIT")]
    pub edits: Vec<TileEdit>,

    /// Keep the plain rescale instead of tiling the original
    #[arg(long)]
    pub no_mosaic: bool,

    /// Fail on out-of-range tiles and unknown color components
    #[arg(long)]
    pub strict: bool,

    /// Write original and collage snapshots into this directory
    #[arg(long, value_name = "DIR")]
    pub snapshots: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validation mode selected by `--strict`
    pub const fn validation(&self) -> TileValidation {
        if self.strict {
            TileValidation::Strict
        } else {
            TileValidation::Lenient
        }
    }

    /// Where the finished collage is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.original))
    }
}

/// Builds a collage from CLI arguments, applies edits and writes the result
pub struct CollageRunner {
    cli: Cli,
}

impl CollageRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full pipeline and return the path written
    ///
    /// # Errors
    ///
    /// Returns an error if the original or a replacement image cannot be
    /// loaded, a dimension or edit is invalid, or the output cannot be saved
    pub fn run(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let collage = self.build()?;

        if let Some(directory) = &self.cli.snapshots {
            let mut viewer = SnapshotViewer::new(directory);
            collage.show_original(&mut viewer)?;
            collage.show_collage(&mut viewer)?;
        }

        let output_path = self.cli.output_path();
        collage.save_collage(&output_path)?;
        info!(
            "Wrote {0}x{0} collage to '{1}' in {2:.2?}",
            collage.collage_image().width(),
            output_path.display(),
            start_time.elapsed()
        );
        Ok(output_path)
    }

    /// Build the collage and apply every edit without writing anything
    ///
    /// # Errors
    ///
    /// Returns an error if an image cannot be loaded or an edit fails
    pub fn build(&self) -> Result<ArtCollage> {
        let mut collage = ArtCollage::open_with(
            &self.cli.original,
            self.cli.tile_dimension,
            self.cli.collage_dimension,
        )?
        .with_validation(self.cli.validation());

        let mosaic_steps = usize::from(!self.cli.no_mosaic);
        let progress = EditProgress::new(
            mosaic_steps + self.cli.edits.len(),
            self.cli.should_show_progress(),
        );

        if !self.cli.no_mosaic {
            progress.start_step("tiling");
            collage.make_collage();
            progress.complete_step();
        }

        for edit in &self.cli.edits {
            let description = edit.to_string();
            progress.start_step(&description);
            if let Err(error) = edit.apply(&mut collage) {
                progress.finish();
                return Err(error);
            }
            progress.complete_step();
            progress.suspend(|| info!("Applied {description}"));
        }

        progress.finish();
        Ok(collage)
    }
}

/// Default output path: `<stem>_collage.png` next to the original
pub fn default_output_path(original: &Path) -> PathBuf {
    let stem = original.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
        stem.to_string_lossy()
    );

    if let Some(parent) = original.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
