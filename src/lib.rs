//! Picframe - wall picture-frame layout engine
//!
//! Generates obstacle-aware frame arrangements for a wall, validates
//! placements against exclusion zones and an eye-level viewing band, and
//! lets a pointer-driven canvas move, add and reshape frames.
//!
//! # Example
//!
//! ```rust
//! use picframe::{plan, PlanConfig};
//! use picframe::layout::Wall;
//!
//! let wall = Wall::new(120.0, 96.0).unwrap();
//! let analysis = plan(&wall, Some(4), None, &PlanConfig::default());
//! assert_eq!(analysis.layouts[0].name, "Classic Grid");
//! assert_eq!(analysis.layouts[0].frames.len(), 4);
//! ```

pub mod canvas;
pub mod layout;
pub mod renderer;
pub mod units;

pub use canvas::{Canvas, CanvasConfig};
pub use layout::{
    pick, Analysis, Frame, GridGenerator, Layout, LayoutConfig, LayoutError, PlacementValidator,
    Wall,
};
pub use renderer::{render, to_svg, DrawCommand, DrawStyle, Scene, SvgConfig, WallImage};
pub use units::SurfaceSize;

use thiserror::Error;

/// Errors from the planning entry points
#[derive(Debug, Error)]
pub enum PlanError {
    /// Invalid wall or layout data
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// External layouts could not be decoded
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for the complete planning pipeline
#[derive(Debug, Clone, Default)]
pub struct PlanConfig {
    /// Grid generation, obstacles and clearance
    pub layout: LayoutConfig,
    /// Pointer editing behaviour
    pub canvas: CanvasConfig,
    /// Drawing colors and overlays
    pub style: DrawStyle,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl PlanConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the canvas configuration
    pub fn with_canvas(mut self, config: CanvasConfig) -> Self {
        self.canvas = config;
        self
    }

    /// Set the drawing style
    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Placement validator for a wall under this configuration
    pub fn validator(&self, wall: Wall) -> PlacementValidator {
        self.layout.validator(wall)
    }

    /// Interactive canvas for a wall, seeded with a layout's frames
    pub fn canvas(&self, wall: Wall, layout: &Layout) -> Canvas {
        let mut canvas = Canvas::new(self.validator(wall), self.canvas.clone());
        canvas.reset(layout.frames.clone());
        canvas
    }
}

/// Produce candidate layouts for a wall
///
/// External layouts (from an analysis service, a saved file) are checked
/// with [`Layout::validate`]; malformed ones are dropped with a warning. If
/// nothing usable remains, the grid generator supplies a single fallback
/// layout with `count` frames.
pub fn plan(
    wall: &Wall,
    count: Option<usize>,
    external: Option<Analysis>,
    config: &PlanConfig,
) -> Analysis {
    if let Some(external) = external {
        let layouts: Vec<Layout> = external
            .layouts
            .into_iter()
            .filter(|layout| match layout.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(layout = %layout.name, error = %e, "dropping external layout");
                    false
                }
            })
            .collect();

        if !layouts.is_empty() {
            return Analysis {
                layouts,
                wall_analysis: external.wall_analysis,
            };
        }
        tracing::debug!("no usable external layouts, generating grid");
    }

    GridGenerator::new(config.layout.clone()).generate(wall, count)
}

/// Like [`plan`], for a wall given in inches and layouts given as JSON
pub fn plan_from_json(
    width: f64,
    height: f64,
    count: Option<usize>,
    external: Option<&str>,
    config: &PlanConfig,
) -> Result<Analysis, PlanError> {
    let wall = Wall::new(width, height)?;
    let external = external.map(Analysis::from_json).transpose()?;
    Ok(plan(&wall, count, external, config))
}

/// Render one layout as a standalone SVG document
///
/// The layout is drawn with a title panel on a surface of the given size.
pub fn export_svg(
    wall: Wall,
    layout: &Layout,
    surface: SurfaceSize,
    image: Option<&WallImage>,
    config: &PlanConfig,
) -> String {
    let validator = config.validator(wall);
    let scene = Scene::from_layout(layout, &validator, surface);
    let commands = render(&scene, &config.style);
    to_svg(&commands, surface, &config.svg, image)
}
