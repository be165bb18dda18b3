//! Configuration for the layout engine

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::obstacles::ObstacleModel;
use super::types::Wall;
use super::validator::{PlacementValidator, DEFAULT_CLEARANCE_MARGIN};

/// Errors that can occur when loading a layout configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read layout config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse layout config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid layout config: {0}")]
    Invalid(String),
}

/// Configuration options for layout generation and validation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Frames generated when the caller doesn't ask for a count
    pub frame_count: usize,

    /// Physical size of generated frames in inches (width, height)
    pub frame_size: (f64, f64),

    /// Gap between neighbouring grid cells in inches
    pub spacing: f64,

    /// Horizontal offsets tried when a grid cell is unsafe (outer loop)
    pub horizontal_offsets: Vec<f64>,

    /// Vertical offsets tried for each horizontal offset (inner loop)
    pub vertical_offsets: Vec<f64>,

    /// Clamp range for searched x positions, in percent
    pub x_range: (f64, f64),

    /// Clamp range for searched y positions, in percent
    pub y_range: (f64, f64),

    /// Extra clearance around every obstacle zone, in percentage points
    pub clearance_margin: f64,

    /// Exclusion zones and viewing band
    pub obstacles: ObstacleModel,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            frame_count: 6,
            frame_size: (16.0, 20.0),
            spacing: 6.0,
            horizontal_offsets: vec![-10.0, 10.0, -20.0, 20.0, -30.0, 30.0],
            vertical_offsets: vec![-5.0, 5.0, -10.0, 10.0, -15.0, 15.0],
            x_range: (10.0, 80.0),
            y_range: (20.0, 70.0),
            clearance_margin: DEFAULT_CLEARANCE_MARGIN,
            obstacles: ObstacleModel::default(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a configuration from a TOML string; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let (w, h) = self.frame_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "frame_size must be positive, got {} x {}",
                w, h
            )));
        }
        if !(self.spacing.is_finite() && self.clearance_margin.is_finite()) {
            return Err(ConfigError::Invalid(
                "spacing and clearance_margin must be numbers".to_string(),
            ));
        }
        if self.spacing < 0.0 || self.clearance_margin < 0.0 {
            return Err(ConfigError::Invalid(
                "spacing and clearance_margin cannot be negative".to_string(),
            ));
        }
        let offsets = self.horizontal_offsets.iter().chain(&self.vertical_offsets);
        if offsets.copied().any(|d| !d.is_finite()) {
            return Err(ConfigError::Invalid(
                "search offsets must be numbers".to_string(),
            ));
        }
        for (name, (min, max)) in [("x_range", self.x_range), ("y_range", self.y_range)] {
            if !(min.is_finite() && max.is_finite()) {
                return Err(ConfigError::Invalid(format!("{} must be numbers", name)));
            }
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "{} must be ordered (min, max), got ({}, {})",
                    name, min, max
                )));
            }
        }
        Ok(())
    }

    /// Set the default frame count
    pub fn with_frame_count(mut self, count: usize) -> Self {
        self.frame_count = count;
        self
    }

    /// Set the generated frame size
    pub fn with_frame_size(mut self, width: f64, height: f64) -> Self {
        self.frame_size = (width, height);
        self
    }

    /// Set the spacing between grid cells
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the clearance margin around obstacles
    pub fn with_clearance_margin(mut self, margin: f64) -> Self {
        self.clearance_margin = margin;
        self
    }

    /// Replace the obstacle model
    pub fn with_obstacles(mut self, obstacles: ObstacleModel) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Build a validator for a wall using this configuration
    pub fn validator(&self, wall: Wall) -> PlacementValidator {
        PlacementValidator::new(wall, self.obstacles.clone()).with_margin(self.clearance_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.frame_count, 6);
        assert_eq!(config.frame_size, (16.0, 20.0));
        assert_eq!(config.spacing, 6.0);
        assert_eq!(config.horizontal_offsets.len(), 6);
        assert_eq!(config.vertical_offsets.len(), 6);
        assert_eq!(config.x_range, (10.0, 80.0));
        assert_eq!(config.y_range, (20.0, 70.0));
        assert_eq!(config.clearance_margin, 2.0);
        assert_eq!(config.obstacles.zones.len(), 4);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_frame_size(12.0, 16.0)
            .with_spacing(3.0)
            .with_clearance_margin(1.0);

        assert_eq!(config.frame_size, (12.0, 16.0));
        assert_eq!(config.spacing, 3.0);
        assert_eq!(config.validator(Wall::new(100.0, 100.0).unwrap()).margin(), 1.0);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = LayoutConfig::from_toml_str(
            r#"
            frame_count = 4
            spacing = 4.0

            [obstacles]
            zones = [{ x = 40.0, y = 30.0, width = 20.0, height = 10.0, label = "tv" }]
            viewing_band = { top = 20.0, bottom = 80.0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.frame_count, 4);
        assert_eq!(config.spacing, 4.0);
        assert_eq!(config.frame_size, (16.0, 20.0));
        assert_eq!(config.obstacles.zones.len(), 1);
        assert_eq!(config.obstacles.zones[0].label.as_deref(), Some("tv"));
        assert_eq!(config.obstacles.viewing_band.top, 20.0);
    }

    #[test]
    fn test_from_toml_rejects_bad_size() {
        let err = LayoutConfig::from_toml_str("frame_size = [0.0, 20.0]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_toml_rejects_nan_range() {
        let err = LayoutConfig::from_toml_str("x_range = [nan, 80.0]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("x_range")));
    }

    #[test]
    fn test_from_toml_rejects_reversed_range() {
        let err = LayoutConfig::from_toml_str("y_range = [70.0, 20.0]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_toml_rejects_non_finite_offsets() {
        let err = LayoutConfig::from_toml_str("vertical_offsets = [5.0, inf]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = LayoutConfig::from_toml_str("spacing = nan").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_toml_parse_error() {
        let err = LayoutConfig::from_toml_str("frame_count = \"six\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
