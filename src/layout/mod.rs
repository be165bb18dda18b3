//! Layout engine: frame data model, obstacle checks and grid generation
//!
//! Everything here works in wall percentage space with physical frame sizes
//! in inches. Nothing in this module knows about pixels.

pub mod audit;
pub mod config;
pub mod error;
pub mod grid;
pub mod obstacles;
pub mod templates;
pub mod types;
pub mod validator;

pub use audit::{audit, PlacementWarning, WarningCategory};
pub use config::{ConfigError, LayoutConfig};
pub use error::LayoutError;
pub use grid::{GridGenerator, GRID_LAYOUT_NAME};
pub use obstacles::{default_zones, ObstacleModel, ObstacleZone, ViewingBand};
pub use templates::{FrameTemplate, FRAME_TEMPLATES};
pub use types::*;
pub use validator::{PlacementValidator, Verdict, DEFAULT_CLEARANCE_MARGIN};

use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one layout at random, for the "surprise me" action
///
/// Returns `None` for an empty slice. Pass a seeded RNG for reproducible picks.
pub fn pick<'a, R: Rng + ?Sized>(layouts: &'a [Layout], rng: &mut R) -> Option<&'a Layout> {
    layouts.choose(rng)
}
