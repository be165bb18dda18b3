//! Fixed frame templates used by the palette

use super::types::{FrameSize, Orientation};

/// A stock frame size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTemplate {
    pub size: FrameSize,
    pub orientation: Orientation,
    /// Width in inches
    pub width: f64,
    /// Height in inches
    pub height: f64,
    pub label: &'static str,
}

const fn template(
    size: FrameSize,
    orientation: Orientation,
    width: f64,
    height: f64,
    label: &'static str,
) -> FrameTemplate {
    FrameTemplate {
        size,
        orientation,
        width,
        height,
        label,
    }
}

/// Every (size, orientation) pair, in palette order
pub const FRAME_TEMPLATES: [FrameTemplate; 6] = [
    template(FrameSize::Small, Orientation::Portrait, 8.0, 10.0, "Small Portrait"),
    template(FrameSize::Small, Orientation::Landscape, 10.0, 8.0, "Small Landscape"),
    template(FrameSize::Medium, Orientation::Portrait, 12.0, 16.0, "Medium Portrait"),
    template(FrameSize::Medium, Orientation::Landscape, 16.0, 12.0, "Medium Landscape"),
    template(FrameSize::Large, Orientation::Portrait, 16.0, 20.0, "Large Portrait"),
    template(FrameSize::Large, Orientation::Landscape, 20.0, 16.0, "Large Landscape"),
];

/// Look up the template for a size class and orientation
///
/// The table is total over both enums, so this always finds an entry.
pub fn lookup(size: FrameSize, orientation: Orientation) -> FrameTemplate {
    let index = match (size, orientation) {
        (FrameSize::Small, Orientation::Portrait) => 0,
        (FrameSize::Small, Orientation::Landscape) => 1,
        (FrameSize::Medium, Orientation::Portrait) => 2,
        (FrameSize::Medium, Orientation::Landscape) => 3,
        (FrameSize::Large, Orientation::Portrait) => 4,
        (FrameSize::Large, Orientation::Landscape) => 5,
    };
    FRAME_TEMPLATES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_table() {
        for t in FRAME_TEMPLATES {
            assert_eq!(lookup(t.size, t.orientation), t);
        }
    }

    #[test]
    fn test_medium_landscape() {
        let t = lookup(FrameSize::Medium, Orientation::Landscape);
        assert_eq!((t.width, t.height), (16.0, 12.0));
    }

    #[test]
    fn test_orientation_swaps_dimensions() {
        for size in [FrameSize::Small, FrameSize::Medium, FrameSize::Large] {
            let p = lookup(size, Orientation::Portrait);
            let l = lookup(size, Orientation::Landscape);
            assert_eq!((p.width, p.height), (l.height, l.width));
            assert!(p.height > p.width);
        }
    }
}
