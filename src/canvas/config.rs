//! Configuration for the interactive canvas

/// Configuration options for pointer-driven editing
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Grid pitch in surface pixels
    pub grid_pitch: f64,

    /// Whether dragged frames snap to the grid
    pub snap_to_grid: bool,

    /// Where palette-added frames appear, in wall percent (x, y)
    pub new_frame_position: (f64, f64),
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_pitch: 20.0,
            snap_to_grid: true,
            new_frame_position: (40.0, 40.0),
        }
    }
}

impl CanvasConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snapping grid pitch
    pub fn with_grid_pitch(mut self, pitch: f64) -> Self {
        self.grid_pitch = pitch;
        self
    }

    /// Enable or disable grid snapping
    pub fn with_snap_to_grid(mut self, snap: bool) -> Self {
        self.snap_to_grid = snap;
        self
    }

    /// Set the position used for newly added frames
    pub fn with_new_frame_position(mut self, x: f64, y: f64) -> Self {
        self.new_frame_position = (x, y);
        self
    }
}
