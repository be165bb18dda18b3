//! Placement validation against obstacle zones and the viewing band

use super::obstacles::ObstacleModel;
use super::types::{frame_rect, BoundingBox, Wall};

/// Default clearance around obstacle zones, in percentage points
pub const DEFAULT_CLEARANCE_MARGIN: f64 = 2.0;

/// Outcome of checking one candidate placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    /// Overlaps the obstacle at this index (after margin expansion)
    Obstacle { index: usize },
    /// Leaves the comfortable viewing band
    ViewingBand,
}

impl Verdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }
}

/// Decides whether a frame placement is safe on a given wall
///
/// Pure: the same wall, obstacles and candidate always give the same verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementValidator {
    wall: Wall,
    obstacles: ObstacleModel,
    margin: f64,
}

impl PlacementValidator {
    pub fn new(wall: Wall, obstacles: ObstacleModel) -> Self {
        Self {
            wall,
            obstacles,
            margin: DEFAULT_CLEARANCE_MARGIN,
        }
    }

    /// Set the clearance margin in percentage points
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    pub fn obstacles(&self) -> &ObstacleModel {
        &self.obstacles
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Check a percentage-space rectangle
    ///
    /// Obstacles are tested in order and the first conflict wins; the
    /// viewing band is checked only when no obstacle conflicts.
    pub fn check(&self, rect: &BoundingBox) -> Verdict {
        for (index, zone) in self.obstacles.zones.iter().enumerate() {
            if rect.intersects(&zone.bounds().expand(self.margin)) {
                return Verdict::Obstacle { index };
            }
        }

        if !self.obstacles.viewing_band.admits(rect.y, rect.bottom()) {
            return Verdict::ViewingBand;
        }

        Verdict::Safe
    }

    /// Check a frame of the given physical size with its top-left at `(x, y)` percent
    pub fn check_at(&self, x: f64, y: f64, width_in: f64, height_in: f64) -> Verdict {
        self.check(&frame_rect(x, y, width_in, height_in, &self.wall))
    }

    pub fn is_safe(&self, rect: &BoundingBox) -> bool {
        self.check(rect).is_safe()
    }

    pub fn is_safe_at(&self, x: f64, y: f64, width_in: f64, height_in: f64) -> bool {
        self.check_at(x, y, width_in, height_in).is_safe()
    }
}
