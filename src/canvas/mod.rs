//! Interactive placement engine
//!
//! Maps pointer input on a rendering surface to frame moves. The canvas
//! keeps a working copy of the layout's frames so drags can be previewed
//! without touching the caller's layout; the caller only sees changes
//! through the commit callback, which fires once per finished gesture or
//! palette edit.
//!
//! All pointer coordinates are surface pixels relative to the surface's
//! top-left corner. The surface size is whatever was last passed to
//! [`Canvas::resize`], so a resize in the middle of a drag is picked up by
//! the next move event.

pub mod config;
mod palette;

pub use config::CanvasConfig;

use std::fmt;

use crate::layout::{BoundingBox, Frame, PlacementValidator, Point, Wall};
use crate::units::{percent_to_pixels, SurfaceSize};

type CommitCallback = Box<dyn FnMut(&[Frame])>;

/// An in-progress drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Frame being dragged
    pub frame_id: String,
    /// Pointer position minus the frame's top-left, in pixels at grab time
    pub offset: Point,
    /// Frame position (percent) when the drag started
    pub origin: Point,
}

/// Pointer-driven frame editor over a working copy of a layout's frames
pub struct Canvas {
    validator: PlacementValidator,
    config: CanvasConfig,
    surface: SurfaceSize,
    frames: Vec<Frame>,
    drag: Option<DragSession>,
    hovered: Option<String>,
    selected: Option<String>,
    next_id: usize,
    on_commit: Option<CommitCallback>,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("surface", &self.surface)
            .field("frames", &self.frames.len())
            .field("drag", &self.drag)
            .field("hovered", &self.hovered)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    /// Create an empty canvas; the surface starts unmeasured
    pub fn new(validator: PlacementValidator, config: CanvasConfig) -> Self {
        Self {
            validator,
            config,
            surface: SurfaceSize::unmeasured(),
            frames: vec![],
            drag: None,
            hovered: None,
            selected: None,
            next_id: 0,
            on_commit: None,
        }
    }

    /// Register the callback that receives the full frame list on every commit
    pub fn on_commit(&mut self, callback: impl FnMut(&[Frame]) + 'static) {
        self.on_commit = Some(Box::new(callback));
    }

    /// Replace the working copy after the owning layout changed
    ///
    /// Any drag in progress is dropped without a commit. Selection and hover
    /// survive only if their frame is still present.
    pub fn reset(&mut self, frames: Vec<Frame>) {
        self.frames = frames;
        self.drag = None;
        if let Some(id) = &self.selected {
            if !self.contains(id) {
                self.selected = None;
            }
        }
        if let Some(id) = &self.hovered {
            if !self.contains(id) {
                self.hovered = None;
            }
        }
    }

    /// Record the surface's current pixel size
    pub fn resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn wall(&self) -> &Wall {
        self.validator.wall()
    }

    pub fn validator(&self) -> &PlacementValidator {
        &self.validator
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The working copy, in drawing order (last is topmost)
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, id: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.id == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.frames.iter().any(|f| f.id == id)
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Id of the frame being dragged, if any
    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_ref().map(|d| d.frame_id.as_str())
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Select a frame by id, or clear the selection
    ///
    /// Unknown ids clear the selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.filter(|id| self.contains(id)).map(str::to_string);
    }

    /// A frame's footprint in surface pixels
    pub fn frame_rect_px(&self, frame: &Frame) -> BoundingBox {
        let rect = frame.rect(self.validator.wall());
        let (x, y) = self.surface.to_pixels(rect.x, rect.y);
        BoundingBox::new(
            x,
            y,
            percent_to_pixels(rect.width, self.surface.width),
            percent_to_pixels(rect.height, self.surface.height),
        )
    }

    /// The topmost frame under a pixel position
    ///
    /// Later frames win ties. Always `None` while the surface is unmeasured.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Frame> {
        if !self.surface.is_measured() {
            return None;
        }
        let point = Point::new(x, y);
        self.frames
            .iter()
            .rev()
            .find(|frame| self.frame_rect_px(frame).contains(point))
    }

    /// Snap a pixel position to the grid and clamp it to the surface
    pub fn snap(&self, x: f64, y: f64) -> (f64, f64) {
        let pitch = self.config.grid_pitch;
        let (x, y) = if self.config.snap_to_grid && pitch > 0.0 {
            ((x / pitch).round() * pitch, (y / pitch).round() * pitch)
        } else {
            (x, y)
        };
        (
            x.clamp(0.0, self.surface.width.max(0.0)),
            y.clamp(0.0, self.surface.height.max(0.0)),
        )
    }

    /// Pointer pressed: select and grab the frame under it, or clear selection
    ///
    /// Returns the id of the grabbed frame.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<String> {
        if !self.surface.is_measured() {
            return None;
        }
        let Some(frame) = self.hit_test(x, y) else {
            self.selected = None;
            return None;
        };

        let rect = self.frame_rect_px(frame);
        let mut origin = Point::new(frame.x, frame.y);
        let frame_id = frame.id.clone();

        // A second press mid-drag: regrabbing the same frame keeps its
        // grab-time origin, grabbing another one finishes the first drag.
        if let Some(previous) = self.drag.take() {
            if previous.frame_id == frame_id {
                origin = previous.origin;
            } else {
                tracing::trace!(frame = %previous.frame_id, "drag finished by new grab");
                self.commit();
            }
        }

        let session = DragSession {
            frame_id,
            offset: Point::new(x - rect.x, y - rect.y),
            origin,
        };
        tracing::trace!(frame = %session.frame_id, "drag started");
        self.selected = Some(session.frame_id.clone());
        let id = session.frame_id.clone();
        self.drag = Some(session);
        Some(id)
    }

    /// Pointer moved: drag the grabbed frame, or update the hover indicator
    ///
    /// Returns whether anything visible changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if self.drag.is_some() {
            return self.drag_to(x, y);
        }
        let hovered = self.hit_test(x, y).map(|f| f.id.clone());
        if hovered == self.hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }

    fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let Some(session) = &self.drag else {
            return false;
        };
        if !self.surface.is_measured() {
            return false;
        }

        let (px, py) = self.snap(x - session.offset.x, y - session.offset.y);
        let Some((new_x, new_y)) = self.surface.to_percent(px, py) else {
            return false;
        };
        let Some(frame) = self.frames.iter_mut().find(|f| f.id == session.frame_id) else {
            return false;
        };

        if !self
            .validator
            .is_safe_at(new_x, new_y, frame.width, frame.height)
        {
            tracing::trace!(frame = %frame.id, x = new_x, y = new_y, "drag target unsafe");
            return false;
        }
        if frame.x == new_x && frame.y == new_y {
            return false;
        }
        frame.x = new_x;
        frame.y = new_y;
        true
    }

    /// Pointer released: finish the drag and commit the working copy
    pub fn pointer_up(&mut self) {
        if let Some(session) = self.drag.take() {
            tracing::trace!(frame = %session.frame_id, "drag finished");
            self.commit();
        }
    }

    /// Pointer left the surface: cancel the drag and clear hover
    ///
    /// The dragged frame goes back to where it was grabbed, and the restored
    /// working copy is committed.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
        let Some(session) = self.drag.take() else {
            return;
        };
        if let Some(frame) = self.frames.iter_mut().find(|f| f.id == session.frame_id) {
            frame.x = session.origin.x;
            frame.y = session.origin.y;
        }
        tracing::trace!(frame = %session.frame_id, "drag cancelled");
        self.commit();
    }

    fn commit(&mut self) {
        if let Some(callback) = &mut self.on_commit {
            callback(&self.frames);
        }
    }
}
