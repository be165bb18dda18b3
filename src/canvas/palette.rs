//! Palette edits: add, delete, resize and re-orient frames
//!
//! These don't re-validate placement. A frame that becomes unsafe after a
//! size or orientation change stays where it is; run
//! [`crate::layout::audit`] to find it. Every successful edit commits the
//! working copy.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::Canvas;
use crate::layout::templates::{lookup, FrameTemplate, FRAME_TEMPLATES};
use crate::layout::{Frame, FrameSize, Orientation};

impl Canvas {
    /// Add a frame from the (size, orientation) template; returns its new id
    pub fn add_frame(&mut self, size: FrameSize, orientation: Orientation) -> String {
        self.add_from_template(lookup(size, orientation))
    }

    /// Add a frame using a randomly chosen template
    pub fn add_random_frame<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let template = FRAME_TEMPLATES
            .choose(rng)
            .copied()
            .unwrap_or_else(|| lookup(FrameSize::Medium, Orientation::Portrait));
        self.add_from_template(template)
    }

    fn add_from_template(&mut self, template: FrameTemplate) -> String {
        let id = self.fresh_id();
        let (x, y) = self.config.new_frame_position;
        self.frames.push(Frame::new(
            id.clone(),
            x,
            y,
            template.width,
            template.height,
            template.orientation,
            template.size,
        ));
        tracing::debug!(frame = %id, template = template.label, "frame added");
        self.commit();
        id
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = format!("custom-{}", self.next_id);
            self.next_id += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Remove a frame; clears the selection if it was selected
    ///
    /// Returns false if no frame has that id.
    pub fn delete_frame(&mut self, id: &str) -> bool {
        let Some(index) = self.frames.iter().position(|f| f.id == id) else {
            return false;
        };
        self.frames.remove(index);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
        if self.dragging() == Some(id) {
            self.drag = None;
        }
        self.commit();
        true
    }

    /// Swap a frame to the template for a new size, keeping its orientation
    pub fn change_size(&mut self, id: &str, size: FrameSize) -> bool {
        let Some(frame) = self.frames.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        let template = lookup(size, frame.orientation);
        frame.width = template.width;
        frame.height = template.height;
        frame.size = size;
        self.commit();
        true
    }

    /// Swap a frame to the template for a new orientation, keeping its size
    pub fn change_orientation(&mut self, id: &str, orientation: Orientation) -> bool {
        let Some(frame) = self.frames.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        let template = lookup(frame.size, orientation);
        frame.width = template.width;
        frame.height = template.height;
        frame.orientation = orientation;
        self.commit();
        true
    }

    /// Remove every frame
    pub fn clear_all(&mut self) {
        self.frames.clear();
        self.selected = None;
        self.hovered = None;
        self.drag = None;
        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasConfig;
    use crate::layout::{LayoutConfig, Wall};
    use crate::units::SurfaceSize;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn canvas() -> Canvas {
        let validator = LayoutConfig::default().validator(Wall::new(120.0, 96.0).unwrap());
        let mut canvas = Canvas::new(validator, CanvasConfig::default());
        canvas.resize(SurfaceSize::new(600.0, 480.0));
        canvas
    }

    #[test]
    fn test_add_frame_uses_template() {
        let mut c = canvas();
        let id = c.add_frame(FrameSize::Medium, Orientation::Landscape);
        let frame = c.frame(&id).unwrap();
        assert_eq!((frame.width, frame.height), (16.0, 12.0));
        assert_eq!((frame.x, frame.y), (40.0, 40.0));
        assert_eq!(frame.size, FrameSize::Medium);
        assert_eq!(frame.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_add_frame_ids_are_unique() {
        let mut c = canvas();
        let existing = Frame::new(
            "custom-0",
            20.0,
            20.0,
            8.0,
            10.0,
            Orientation::Portrait,
            FrameSize::Small,
        );
        c.reset(vec![existing]);
        let a = c.add_frame(FrameSize::Small, Orientation::Portrait);
        let b = c.add_frame(FrameSize::Small, Orientation::Portrait);
        assert_ne!(a, "custom-0");
        assert_ne!(a, b);
        assert_eq!(c.frames().len(), 3);
    }

    #[test]
    fn test_add_random_frame_is_seeded() {
        let mut first = canvas();
        let mut second = canvas();
        let mut rng_a = SmallRng::seed_from_u64(9);
        let mut rng_b = SmallRng::seed_from_u64(9);
        for _ in 0..5 {
            first.add_random_frame(&mut rng_a);
            second.add_random_frame(&mut rng_b);
        }
        assert_eq!(first.frames(), second.frames());
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut c = canvas();
        let a = c.add_frame(FrameSize::Large, Orientation::Portrait);
        let b = c.add_frame(FrameSize::Small, Orientation::Portrait);
        c.select(Some(&a));
        assert!(c.delete_frame(&b));
        assert_eq!(c.selected(), Some(a.as_str()));
        assert!(c.delete_frame(&a));
        assert_eq!(c.selected(), None);
        assert!(!c.delete_frame(&a));
    }

    #[test]
    fn test_change_orientation_keeps_position() {
        let mut c = canvas();
        let id = c.add_frame(FrameSize::Large, Orientation::Portrait);
        c.select(Some(&id));
        assert!(c.change_orientation(&id, Orientation::Landscape));
        let frame = c.frame(&id).unwrap();
        assert_eq!((frame.width, frame.height), (20.0, 16.0));
        assert_eq!(frame.size, FrameSize::Large);
        assert_eq!((frame.x, frame.y), (40.0, 40.0));
    }

    #[test]
    fn test_change_size_may_leave_frame_unsafe() {
        let mut c = canvas();
        c.reset(vec![Frame::new(
            "a",
            40.0,
            64.0,
            8.0,
            10.0,
            Orientation::Portrait,
            FrameSize::Small,
        )]);
        assert!(c.validator().is_safe_at(40.0, 64.0, 8.0, 10.0));
        assert!(c.change_size("a", FrameSize::Large));
        let frame = c.frame("a").unwrap();
        assert_eq!((frame.width, frame.height), (16.0, 20.0));
        assert_eq!((frame.x, frame.y), (40.0, 64.0));
        assert!(!c.validator().is_safe_at(frame.x, frame.y, frame.width, frame.height));
    }

    #[test]
    fn test_unknown_id_edits_are_ignored() {
        let mut c = canvas();
        assert!(!c.change_size("nope", FrameSize::Large));
        assert!(!c.change_orientation("nope", Orientation::Landscape));
    }

    #[test]
    fn test_clear_all_commits_empty_list() {
        let mut c = canvas();
        c.add_frame(FrameSize::Large, Orientation::Portrait);
        c.add_frame(FrameSize::Large, Orientation::Landscape);
        let last_len = Rc::new(Cell::new(usize::MAX));
        let sink = Rc::clone(&last_len);
        c.on_commit(move |frames| sink.set(frames.len()));
        c.clear_all();
        assert!(c.frames().is_empty());
        assert_eq!(last_len.get(), 0);
    }
}
