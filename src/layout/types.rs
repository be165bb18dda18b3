//! Core types for the layout engine

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::inches_to_percent;

use super::error::LayoutError;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box contains a point (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Check if this bounding box intersects another (touching edges don't count)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Grow the box outward by `margin` on every side
    pub fn expand(&self, margin: f64) -> BoundingBox {
        BoundingBox::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

/// The physical wall frames are hung on, in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub width: f64,
    pub height: f64,
}

impl Wall {
    /// Create a wall, rejecting non-positive or non-finite dimensions
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(LayoutError::InvalidWall { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Frame orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// The other orientation
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Landscape => Orientation::Portrait,
            Orientation::Portrait => Orientation::Landscape,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
        }
    }
}

/// Template size class of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSize {
    Small,
    Medium,
    Large,
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSize::Small => write!(f, "small"),
            FrameSize::Medium => write!(f, "medium"),
            FrameSize::Large => write!(f, "large"),
        }
    }
}

/// A single picture frame placed on the wall
///
/// `x`/`y` are percentages of the wall width/height and locate the top-left
/// corner. `width`/`height` are physical inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
    pub size: FrameSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_reason: Option<String>,
}

impl Frame {
    pub fn new(
        id: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        orientation: Orientation,
        size: FrameSize,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            orientation,
            size,
            placement_reason: None,
        }
    }

    /// Attach a human-readable placement reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.placement_reason = Some(reason.into());
        self
    }

    /// The frame's footprint in wall percentage space
    pub fn rect(&self, wall: &Wall) -> BoundingBox {
        frame_rect(self.x, self.y, self.width, self.height, wall)
    }

    fn check(&self) -> Result<(), LayoutError> {
        if self.id.is_empty() {
            return Err(LayoutError::invalid_frame(&self.id, "empty id"));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(LayoutError::invalid_frame(&self.id, "width must be positive"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(LayoutError::invalid_frame(&self.id, "height must be positive"));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(LayoutError::invalid_frame(&self.id, "position is not a number"));
        }
        Ok(())
    }
}

/// Percentage-space footprint of a frame at `(x, y)` with a physical size
pub fn frame_rect(x: f64, y: f64, width_in: f64, height_in: f64, wall: &Wall) -> BoundingBox {
    BoundingBox::new(
        x,
        y,
        inches_to_percent(width_in, wall.width),
        inches_to_percent(height_in, wall.height),
    )
}

/// A named candidate arrangement of frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub aesthetic_tips: Vec<String>,
}

impl Layout {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            frames: vec![],
            aesthetic_tips: vec![],
        }
    }

    /// Look up a frame by id
    pub fn frame(&self, id: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.id == id)
    }

    /// Check that an externally produced layout is well formed
    ///
    /// Requires at least one frame, unique non-empty ids, positive finite
    /// sizes and finite positions.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.frames.is_empty() {
            return Err(LayoutError::EmptyLayout {
                name: self.name.clone(),
            });
        }
        let mut seen = HashSet::new();
        for frame in &self.frames {
            frame.check()?;
            if !seen.insert(frame.id.as_str()) {
                return Err(LayoutError::DuplicateFrameId {
                    id: frame.id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Summary of the wall that accompanies a set of layouts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WallAnalysis {
    pub features: Vec<String>,
    pub constraints: Vec<String>,
    pub suggestions: Vec<String>,
    pub optimal_frame_count: usize,
    pub eye_level_recommendation: String,
    pub style_recommendation: String,
}

/// A set of candidate layouts plus the wall summary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub layouts: Vec<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_analysis: Option<WallAnalysis>,
}

impl Analysis {
    /// Decode an analysis document from JSON
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Encode as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(id: &str) -> Frame {
        Frame::new(id, 20.0, 20.0, 16.0, 20.0, Orientation::Portrait, FrameSize::Medium)
    }

    #[test]
    fn test_bounding_box_expand() {
        let b = BoundingBox::new(0.0, 0.0, 100.0, 10.0).expand(2.0);
        assert_eq!(b, BoundingBox::new(-2.0, -2.0, 104.0, 14.0));
        assert_eq!(b.bottom(), 12.0);
    }

    #[test]
    fn test_bounding_box_touching_does_not_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_wall_rejects_non_positive() {
        assert!(Wall::new(0.0, 96.0).is_err());
        assert!(Wall::new(120.0, -1.0).is_err());
        assert!(Wall::new(f64::NAN, 96.0).is_err());
        assert!(Wall::new(120.0, 96.0).is_ok());
    }

    #[test]
    fn test_frame_rect_uses_wall_dimensions() {
        let wall = Wall::new(160.0, 100.0).unwrap();
        let rect = frame("a").rect(&wall);
        assert_eq!(rect, BoundingBox::new(20.0, 20.0, 10.0, 20.0));
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let mut layout = Layout::new("dup", "");
        layout.frames = vec![frame("a"), frame("a")];
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::DuplicateFrameId { .. })
        ));
    }

    #[test]
    fn test_validate_bad_size() {
        let mut layout = Layout::new("bad", "");
        let mut f = frame("a");
        f.height = 0.0;
        layout.frames = vec![f];
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidFrame { .. })
        ));
    }

    #[test]
    fn test_validate_empty() {
        assert!(matches!(
            Layout::new("empty", "").validate(),
            Err(LayoutError::EmptyLayout { .. })
        ));
    }

    #[test]
    fn test_frame_json_field_names() {
        let json = serde_json::to_string(&frame("a").with_reason("centered")).unwrap();
        assert!(json.contains(r#""placementReason":"centered""#));
        assert!(json.contains(r#""orientation":"portrait""#));
        assert!(json.contains(r#""size":"medium""#));
    }

    #[test]
    fn test_analysis_from_json() {
        let source = r#"{
            "layouts": [{
                "name": "Gallery Wall",
                "description": "Dynamic",
                "frames": [{
                    "id": "f1", "x": 30, "y": 30, "width": 12, "height": 16,
                    "orientation": "portrait", "size": "medium"
                }],
                "aestheticTips": ["Keep spacing even"]
            }],
            "wallAnalysis": { "optimalFrameCount": 1 }
        }"#;
        let analysis = Analysis::from_json(source).unwrap();
        assert_eq!(analysis.layouts.len(), 1);
        assert_eq!(analysis.layouts[0].frames[0].placement_reason, None);
        assert_eq!(analysis.layouts[0].aesthetic_tips.len(), 1);
        assert_eq!(analysis.wall_analysis.unwrap().optimal_frame_count, 1);
    }
}
