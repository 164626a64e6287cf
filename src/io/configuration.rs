//! Collage defaults and runtime limits

/// Default side length of one tile in pixels
pub const DEFAULT_TILE_DIMENSION: u32 = 100;

/// Default number of tiles per collage side
pub const DEFAULT_COLLAGE_DIMENSION: u32 = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed collage side length in pixels
pub const MAX_COLLAGE_SIDE: u32 = 16_384;

// Perceptual luma weights (ITU-R BT.601)
/// Weight of the red channel in the luma formula
pub const LUMA_RED_WEIGHT: f64 = 0.299;
/// Weight of the green channel in the luma formula
pub const LUMA_GREEN_WEIGHT: f64 = 0.587;
/// Weight of the blue channel in the luma formula
pub const LUMA_BLUE_WEIGHT: f64 = 0.114;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_collage";
/// Extension used for collage output and viewer snapshots
pub const OUTPUT_EXTENSION: &str = "png";

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
