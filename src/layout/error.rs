//! Error types for the layout engine

use thiserror::Error;

/// Errors raised while building or checking layout values
///
/// Placement itself never fails; these only come from constructing a wall
/// or from checking layouts handed in by an external source.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Wall dimensions must be positive and finite
    #[error("invalid wall dimensions {width} x {height} (inches must be positive)")]
    InvalidWall { width: f64, height: f64 },

    /// A frame with an unusable field
    #[error("invalid frame '{id}': {reason}")]
    InvalidFrame { id: String, reason: String },

    /// Two frames in one layout share an id
    #[error("duplicate frame id '{id}'")]
    DuplicateFrameId { id: String },

    /// A layout without frames
    #[error("layout '{name}' has no frames")]
    EmptyLayout { name: String },
}

impl LayoutError {
    /// Create an invalid frame error
    pub fn invalid_frame(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFrame {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Id of the offending frame, if the error is about one
    pub fn frame_id(&self) -> Option<&str> {
        match self {
            Self::InvalidFrame { id, .. } | Self::DuplicateFrameId { id } => Some(id),
            _ => None,
        }
    }
}
