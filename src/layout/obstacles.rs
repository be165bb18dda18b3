//! Obstacle zones frames have to stay clear of
//!
//! Zones live in wall percentage space. The default set approximates the
//! hazards found on most walls: ceiling molding, furniture and baseboards,
//! and door frames or corners at both edges.

use serde::{Deserialize, Serialize};

use super::types::BoundingBox;

/// A percentage-space rectangle frames must clear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleZone {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Optional label for overlays ("molding", "sofa", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ObstacleZone {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

/// Default zones: top molding band, bottom furniture band, both edges
pub fn default_zones() -> Vec<ObstacleZone> {
    vec![
        ObstacleZone::new(0.0, 0.0, 100.0, 10.0).with_label("ceiling molding"),
        ObstacleZone::new(0.0, 85.0, 100.0, 15.0).with_label("furniture and baseboards"),
        ObstacleZone::new(0.0, 0.0, 5.0, 100.0).with_label("left edge"),
        ObstacleZone::new(95.0, 0.0, 5.0, 100.0).with_label("right edge"),
    ]
}

/// Comfortable vertical range for frames, in percent of wall height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewingBand {
    pub top: f64,
    pub bottom: f64,
}

impl ViewingBand {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether a box with these vertical edges sits inside the band
    pub fn admits(&self, top: f64, bottom: f64) -> bool {
        top >= self.top && bottom <= self.bottom
    }
}

impl Default for ViewingBand {
    fn default() -> Self {
        Self::new(15.0, 85.0)
    }
}

/// The exclusion zones plus the viewing band for one wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleModel {
    #[serde(default = "default_zones")]
    pub zones: Vec<ObstacleZone>,
    #[serde(default)]
    pub viewing_band: ViewingBand,
}

impl Default for ObstacleModel {
    fn default() -> Self {
        Self {
            zones: default_zones(),
            viewing_band: ViewingBand::default(),
        }
    }
}

impl ObstacleModel {
    /// Use the supplied zones, or the defaults when none were supplied
    ///
    /// An explicitly empty list is respected: no rectangles, but the
    /// viewing band still applies.
    pub fn from_zones(zones: Option<Vec<ObstacleZone>>) -> Self {
        Self {
            zones: zones.unwrap_or_else(default_zones),
            viewing_band: ViewingBand::default(),
        }
    }

    pub fn with_viewing_band(mut self, band: ViewingBand) -> Self {
        self.viewing_band = band;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zones() {
        let zones = default_zones();
        assert_eq!(zones.len(), 4);
        assert_eq!(zones[0].bounds(), BoundingBox::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(zones[1].bounds(), BoundingBox::new(0.0, 85.0, 100.0, 15.0));
        assert_eq!(zones[2].bounds(), BoundingBox::new(0.0, 0.0, 5.0, 100.0));
        assert_eq!(zones[3].bounds(), BoundingBox::new(95.0, 0.0, 5.0, 100.0));
    }

    #[test]
    fn test_from_zones_fallback() {
        assert_eq!(ObstacleModel::from_zones(None).zones.len(), 4);
        assert!(ObstacleModel::from_zones(Some(vec![])).zones.is_empty());
        let custom = vec![ObstacleZone::new(40.0, 40.0, 10.0, 10.0)];
        assert_eq!(ObstacleModel::from_zones(Some(custom.clone())).zones, custom);
    }

    #[test]
    fn test_viewing_band_admits() {
        let band = ViewingBand::default();
        assert!(band.admits(15.0, 85.0));
        assert!(!band.admits(14.9, 50.0));
        assert!(!band.admits(20.0, 85.1));
    }
}
