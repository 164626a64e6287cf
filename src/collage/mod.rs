//! Collage construction and per-tile editing
//!
//! This module contains:
//! - The collage engine owning the original and collage buffers
//! - Tile geometry and nearest-neighbor coordinate mapping
//! - Pure pixel transforms for channel isolation and luma

/// The collage engine and its tile operations
pub mod engine;
/// Channel isolation and luma transforms
pub mod pixel;
/// Tile bounds and source coordinate mapping
pub mod tiles;

pub use engine::{ArtCollage, TileValidation};
pub use pixel::ColorComponent;
pub use tiles::TileGeometry;
