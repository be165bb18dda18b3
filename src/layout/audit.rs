//! On-demand placement audit for a whole layout.
//!
//! Palette edits (size or orientation swaps, imported layouts) don't
//! re-validate placement. This pass reports every frame that is currently
//! unsafe and every pair of frames that overlap, without moving anything.

use std::fmt;

use super::types::Layout;
use super::validator::{PlacementValidator, Verdict};

/// A placement problem found by the audit
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementWarning {
    pub category: WarningCategory,
    pub frame_id: String,
    pub message: String,
}

/// Category of placement problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCategory {
    Obstacle,
    ViewingBand,
    Overlap,
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningCategory::Obstacle => write!(f, "obstacle"),
            WarningCategory::ViewingBand => write!(f, "viewing-band"),
            WarningCategory::Overlap => write!(f, "overlap"),
        }
    }
}

impl fmt::Display for PlacementWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Run all placement checks on a layout
pub fn audit(layout: &Layout, validator: &PlacementValidator) -> Vec<PlacementWarning> {
    let mut warnings = Vec::new();
    check_placements(layout, validator, &mut warnings);
    check_overlaps(layout, validator, &mut warnings);
    warnings
}

fn check_placements(
    layout: &Layout,
    validator: &PlacementValidator,
    warnings: &mut Vec<PlacementWarning>,
) {
    let wall = validator.wall();
    for frame in &layout.frames {
        match validator.check(&frame.rect(wall)) {
            Verdict::Safe => {}
            Verdict::Obstacle { index } => {
                let zone = &validator.obstacles().zones[index];
                let name = zone
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("obstacle #{}", index + 1));
                warnings.push(PlacementWarning {
                    category: WarningCategory::Obstacle,
                    frame_id: frame.id.clone(),
                    message: format!("\"{}\" is within clearance of {}", frame.id, name),
                });
            }
            Verdict::ViewingBand => {
                let band = validator.obstacles().viewing_band;
                warnings.push(PlacementWarning {
                    category: WarningCategory::ViewingBand,
                    frame_id: frame.id.clone(),
                    message: format!(
                        "\"{}\" leaves the viewing band ({}%-{}% of wall height)",
                        frame.id, band.top, band.bottom
                    ),
                });
            }
        }
    }
}

fn check_overlaps(
    layout: &Layout,
    validator: &PlacementValidator,
    warnings: &mut Vec<PlacementWarning>,
) {
    let wall = validator.wall();
    let rects: Vec<_> = layout.frames.iter().map(|f| f.rect(wall)).collect();
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].intersects(&rects[j]) {
                let (a, b) = (&layout.frames[i].id, &layout.frames[j].id);
                warnings.push(PlacementWarning {
                    category: WarningCategory::Overlap,
                    frame_id: b.clone(),
                    message: format!("\"{}\" overlaps \"{}\"", b, a),
                });
            }
        }
    }
}
