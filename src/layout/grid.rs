//! Deterministic grid layout generator
//!
//! Used whenever no richer layout source is available. Frames are laid out
//! on a grid centered on the wall; a cell that lands on an obstacle is nudged
//! through a fixed list of offsets, and left where it was if nothing safe
//! turns up. The generator always returns exactly the requested number of
//! frames.

use super::config::LayoutConfig;
use super::types::{Analysis, Frame, FrameSize, Layout, Orientation, Wall, WallAnalysis};
use super::validator::PlacementValidator;
use crate::units::inches_to_percent;

pub const GRID_LAYOUT_NAME: &str = "Classic Grid";
const GRID_DESCRIPTION: &str = "A balanced grid arrangement with evenly spaced frames";
const GRID_REASON: &str = "Grid placement avoiding obstacles and maintaining safe clearances";

const GRID_TIPS: [&str; 4] = [
    "Maintain consistent spacing between all frames",
    "Avoid placing frames over outlets, switches, or doorways",
    "Keep frames at eye level (57-60 inches from floor to center)",
    "Maintain 6-inch clearance from architectural features",
];

/// How a grid cell ended up where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPlacement {
    /// The centered grid position was safe
    Preferred,
    /// Moved by one of the search offsets
    Shifted,
    /// No safe offset found; kept the preferred (unsafe) position
    Fallback,
}

/// Position chosen for one grid cell, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCell {
    pub x: f64,
    pub y: f64,
    pub placement: CellPlacement,
}

/// Grid dimensions for `count` frames: `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`
pub fn grid_shape(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);
    (cols, rows)
}

/// Lays out frames on a centered grid
#[derive(Debug, Clone)]
pub struct GridGenerator {
    config: LayoutConfig,
}

impl GridGenerator {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Generate the fallback analysis for a wall
    ///
    /// `count` of `None` or zero uses the configured default.
    pub fn generate(&self, wall: &Wall, count: Option<usize>) -> Analysis {
        let count = match count {
            Some(n) if n > 0 => n,
            _ => self.config.frame_count.max(1),
        };
        let _span = tracing::debug_span!(
            "grid_generate",
            count,
            wall_width = wall.width,
            wall_height = wall.height
        )
        .entered();

        let layout = self.layout(wall, count);
        Analysis {
            layouts: vec![layout],
            wall_analysis: Some(wall_summary(count)),
        }
    }

    /// Generate just the grid layout with exactly `count` frames
    pub fn layout(&self, wall: &Wall, count: usize) -> Layout {
        let validator = self.config.validator(*wall);
        let (frame_w, frame_h) = self.config.frame_size;

        let mut layout = Layout::new(GRID_LAYOUT_NAME, GRID_DESCRIPTION);
        layout.aesthetic_tips = GRID_TIPS.iter().map(|t| t.to_string()).collect();
        layout.frames = (0..count)
            .map(|i| {
                let cell = self.place_cell(&validator, i, count);
                if cell.placement == CellPlacement::Fallback {
                    tracing::debug!(
                        index = i,
                        x = cell.x,
                        y = cell.y,
                        "no safe offset for grid cell, keeping preferred position"
                    );
                }
                Frame::new(
                    format!("frame-{}", i),
                    cell.x,
                    cell.y,
                    frame_w,
                    frame_h,
                    Orientation::Portrait,
                    FrameSize::Medium,
                )
                .with_reason(GRID_REASON)
            })
            .collect();
        layout
    }

    /// Centered top-left position of cell `index` in a grid of `count`, in percent
    pub fn preferred_position(&self, wall: &Wall, index: usize, count: usize) -> (f64, f64) {
        let (cols, rows) = grid_shape(count.max(1));
        let (frame_w, frame_h) = self.config.frame_size;
        let spacing = self.config.spacing;
        let col = (index % cols) as f64;
        let row = (index / cols) as f64;

        let grid_w = cols as f64 * frame_w + (cols as f64 - 1.0) * spacing;
        let grid_h = rows as f64 * frame_h + (rows as f64 - 1.0) * spacing;
        let left = (wall.width - grid_w) / 2.0 + col * (frame_w + spacing);
        let top = (wall.height - grid_h) / 2.0 + row * (frame_h + spacing);

        (
            inches_to_percent(left, wall.width),
            inches_to_percent(top, wall.height),
        )
    }

    /// Pick a position for one cell, searching offsets if the preferred one is unsafe
    pub fn place_cell(
        &self,
        validator: &PlacementValidator,
        index: usize,
        count: usize,
    ) -> PlacedCell {
        let (frame_w, frame_h) = self.config.frame_size;
        let (x, y) = self.preferred_position(validator.wall(), index, count);

        if validator.is_safe_at(x, y, frame_w, frame_h) {
            return PlacedCell {
                x,
                y,
                placement: CellPlacement::Preferred,
            };
        }

        let (x_min, x_max) = self.config.x_range;
        let (y_min, y_max) = self.config.y_range;
        for dx in &self.config.horizontal_offsets {
            for dy in &self.config.vertical_offsets {
                let test_x = clamp_lenient(x + dx, x_min, x_max);
                let test_y = clamp_lenient(y + dy, y_min, y_max);
                if validator.is_safe_at(test_x, test_y, frame_w, frame_h) {
                    return PlacedCell {
                        x: test_x,
                        y: test_y,
                        placement: CellPlacement::Shifted,
                    };
                }
            }
        }

        PlacedCell {
            x,
            y,
            placement: CellPlacement::Fallback,
        }
    }
}

/// Clamp that never panics: a NaN bound is ignored and a reversed range
/// resolves to `max`
fn clamp_lenient(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

fn wall_summary(count: usize) -> WallAnalysis {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    WallAnalysis {
        features: strings(&[
            "Standard wall suitable for frame arrangement",
            "Avoiding common obstacle zones",
        ]),
        constraints: strings(&[
            "Avoiding top 10% (moldings/outlets)",
            "Avoiding bottom 15% (furniture/baseboards)",
            "Avoiding edge areas (doorways/corners)",
            "Maintaining safe viewing height",
        ]),
        suggestions: strings(&[
            "Consider the lighting when positioning frames",
            "Leave appropriate borders around the arrangement",
            "Avoid placing frames over outlets or switches",
            "Maintain clearance from architectural features",
        ]),
        optimal_frame_count: count,
        eye_level_recommendation: "57-60 inches from floor to center of frames".to_string(),
        style_recommendation: "Classic grid layout suitable for traditional and modern spaces"
            .to_string(),
    }
}
