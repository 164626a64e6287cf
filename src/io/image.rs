//! Image loading and PNG export over the `image` crate

use crate::io::error::{CollageError, Result};
use image::RgbImage;
use log::debug;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB
///
/// Any format the `image` crate can decode is accepted. Alpha channels are
/// discarded.
///
/// # Errors
///
/// Returns [`CollageError::ImageLoad`] if the file is missing, unreadable,
/// of an unsupported format or corrupt.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgb = img.to_rgb8();
    debug!(
        "Loaded '{}' ({}x{})",
        path.display(),
        rgb.width(),
        rgb.height()
    );
    Ok(rgb)
}

/// Save an RGB image, creating missing parent directories
///
/// The encoding is chosen from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_rgb(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image
        .save(output_path)
        .map_err(|e| CollageError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    debug!(
        "Saved {}x{} image to '{}'",
        image.width(),
        image.height(),
        output_path.display()
    );
    Ok(())
}
