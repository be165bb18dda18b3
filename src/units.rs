//! Unit conversions between inches, wall percentages and surface pixels
//!
//! Frame positions are stored as percentages of the wall (0-100 on each
//! axis). Physical sizes stay in inches. A rendering surface maps the
//! percentage space onto its current pixel size.

use serde::{Deserialize, Serialize};

use crate::layout::Wall;

/// Convert a physical length to a percentage of a wall dimension
pub fn inches_to_percent(value: f64, wall_dimension: f64) -> f64 {
    value / wall_dimension * 100.0
}

/// Convert a wall percentage to pixels on a surface axis
pub fn percent_to_pixels(percent: f64, surface_px: f64) -> f64 {
    percent / 100.0 * surface_px
}

/// Convert pixels on a surface axis to a wall percentage
///
/// Divides by `surface_px`; use [`checked_pixels_to_percent`] when the
/// surface may not have been measured yet.
pub fn pixels_to_percent(px: f64, surface_px: f64) -> f64 {
    px / surface_px * 100.0
}

/// Like [`pixels_to_percent`], but `None` for an unmeasured (zero) axis
pub fn checked_pixels_to_percent(px: f64, surface_px: f64) -> Option<f64> {
    if surface_px > 0.0 {
        Some(pixels_to_percent(px, surface_px))
    } else {
        None
    }
}

/// Pixel size of the surface the wall is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface that has not been laid out yet
    pub fn unmeasured() -> Self {
        Self::default()
    }

    /// Both axes have a positive size
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Size a surface to a container, keeping the wall's aspect ratio
    ///
    /// The height follows the container width and is capped at `max_height`;
    /// the width is then recomputed from the capped height.
    pub fn fit(wall: &Wall, container_width: f64, max_height: f64) -> Self {
        let aspect = wall.height / wall.width;
        let height = (container_width * aspect).min(max_height);
        Self {
            width: height / aspect,
            height,
        }
    }

    /// Convert a percentage-space point to pixels
    pub fn to_pixels(&self, x_percent: f64, y_percent: f64) -> (f64, f64) {
        (
            percent_to_pixels(x_percent, self.width),
            percent_to_pixels(y_percent, self.height),
        )
    }

    /// Convert a pixel point to percentage space, `None` if unmeasured
    pub fn to_percent(&self, x_px: f64, y_px: f64) -> Option<(f64, f64)> {
        Some((
            checked_pixels_to_percent(x_px, self.width)?,
            checked_pixels_to_percent(y_px, self.height)?,
        ))
    }
}
