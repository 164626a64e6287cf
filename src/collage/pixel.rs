//! Pure per-pixel color transforms used by tile recoloring

use crate::io::configuration::{LUMA_BLUE_WEIGHT, LUMA_GREEN_WEIGHT, LUMA_RED_WEIGHT};
use crate::io::error::{CollageError, invalid_parameter};
use image::Rgb;
use std::fmt;
use std::str::FromStr;

/// A single RGB channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorComponent {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl ColorComponent {
    /// All components in channel order
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Look up a component by its exact lowercase name
    ///
    /// Returns `None` for anything other than `red`, `green` or `blue`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }

    /// Lowercase name of the component
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl fmt::Display for ColorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorComponent {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| invalid_parameter("component", &s, &"expected red, green or blue"))
    }
}

/// Keep one channel of a pixel and zero the other two
pub fn isolate_channel(pixel: Rgb<u8>, component: ColorComponent) -> Rgb<u8> {
    let mut isolated = Rgb([0, 0, 0]);
    let index = component.index();
    if let (Some(dst), Some(&src)) = (isolated.0.get_mut(index), pixel.0.get(index)) {
        *dst = src;
    }
    isolated
}

/// Perceptual luma of a pixel, rounded to the nearest integer
///
/// The weighted sum is evaluated left to right without fused multiply-add.
#[allow(clippy::suboptimal_flops)]
pub fn luma(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let y = LUMA_RED_WEIGHT * f64::from(r)
        + LUMA_GREEN_WEIGHT * f64::from(g)
        + LUMA_BLUE_WEIGHT * f64::from(b);
    y.round().clamp(0.0, 255.0) as u8
}

/// Grey pixel with all three channels set to the pixel's luma
pub fn to_grey(pixel: Rgb<u8>) -> Rgb<u8> {
    let y = luma(pixel);
    Rgb([y, y, y])
}
