//! Drawing the wall: scene snapshots to draw commands, draw commands to SVG
//!
//! `render` is what an interactive host calls after each state change.
//! `to_svg` turns the same commands into a document for export or printing.

pub mod config;
pub mod draw;
pub mod svg;

pub use config::{DrawStyle, SvgConfig};
pub use draw::{render, DrawCommand, RectRole, Scene, TextAnchor};
pub use svg::{to_svg, WallImage};
