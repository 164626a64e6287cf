//! Display collaborators for rendering collage buffers

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::Result;
use crate::io::image::save_rgb;
use image::RgbImage;
use log::info;
use std::path::PathBuf;

/// Renders an image buffer somewhere a person can look at it
pub trait Viewer {
    /// Show `image` under the given title
    ///
    /// # Errors
    ///
    /// Returns an error if the viewer cannot render the image
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()>;
}

/// Viewer that records what it was asked to show and renders nothing
#[derive(Debug, Default)]
pub struct NullViewer {
    shown: Vec<String>,
}

impl NullViewer {
    /// Create a viewer with an empty history
    pub const fn new() -> Self {
        Self { shown: Vec::new() }
    }

    /// Titles passed to [`Viewer::show`], in call order
    pub fn shown(&self) -> &[String] {
        &self.shown
    }
}

impl Viewer for NullViewer {
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()> {
        info!("{title}: {}x{}", image.width(), image.height());
        self.shown.push(title.to_string());
        Ok(())
    }
}

/// Headless viewer that writes each shown image as a PNG snapshot
#[derive(Debug, Clone)]
pub struct SnapshotViewer {
    directory: PathBuf,
}

impl SnapshotViewer {
    /// Write snapshots into `directory`, created on first use
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Destination path for a snapshot with the given title
    pub fn snapshot_path(&self, title: &str) -> PathBuf {
        let file_name: String = title
            .chars()
            .map(|ch| {
                if ch.is_alphanumeric() || ch == '-' || ch == '_' {
                    ch
                } else {
                    '_'
                }
            })
            .collect();
        self.directory
            .join(format!("{file_name}.{OUTPUT_EXTENSION}"))
    }
}

impl Viewer for SnapshotViewer {
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()> {
        let path = self.snapshot_path(title);
        save_rgb(image, &path)?;
        info!("{title}: snapshot written to '{}'", path.display());
        Ok(())
    }
}
