//! Configuration for scene drawing and SVG output

/// Colors and line widths used when drawing a scene
///
/// Colors are CSS color strings so they can go straight into SVG attributes
/// or a canvas 2D context.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub show_grid: bool,
    pub grid_stroke: String,

    pub show_obstacles: bool,
    pub obstacle_fill: String,
    pub obstacle_stroke: String,
    pub obstacle_text: String,
    /// Text drawn in the middle of each obstacle zone
    pub obstacle_label: String,

    pub frame_fill: String,
    pub frame_stroke: String,
    pub frame_stroke_width: f64,
    pub hovered_fill: String,
    pub selected_fill: String,
    /// Stroke for hovered and selected frames
    pub highlight_stroke: String,
    pub hovered_stroke_width: f64,
    pub selected_stroke_width: f64,

    pub label_fill: String,
    pub label_font_size: f64,
    pub id_fill: String,
    pub id_font_size: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_stroke: "rgba(0, 0, 0, 0.1)".to_string(),
            show_obstacles: true,
            obstacle_fill: "rgba(255, 0, 0, 0.1)".to_string(),
            obstacle_stroke: "rgba(255, 0, 0, 0.3)".to_string(),
            obstacle_text: "rgba(255, 0, 0, 0.7)".to_string(),
            obstacle_label: "AVOID".to_string(),
            frame_fill: "rgba(255, 255, 255, 0.9)".to_string(),
            frame_stroke: "#e5e7eb".to_string(),
            frame_stroke_width: 2.0,
            hovered_fill: "rgba(147, 51, 234, 0.2)".to_string(),
            selected_fill: "rgba(147, 51, 234, 0.3)".to_string(),
            highlight_stroke: "#9333ea".to_string(),
            hovered_stroke_width: 3.0,
            selected_stroke_width: 4.0,
            label_fill: "#374151".to_string(),
            label_font_size: 12.0,
            id_fill: "#6b7280".to_string(),
            id_font_size: 10.0,
        }
    }
}

impl DrawStyle {
    /// Create a new style with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the snapping grid
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Show or hide obstacle overlays
    pub fn with_obstacles(mut self, show: bool) -> Self {
        self.show_obstacles = show;
        self
    }

    /// Style for exported images: no grid, no obstacle overlay
    pub fn for_export() -> Self {
        Self::default().with_grid(false).with_obstacles(false)
    }
}

/// How exported wall images are written
///
/// Every element carries a class (`wall`, `grid`, `obstacle`, `frame`,
/// `hovered`, `selected`, `panel`, `label`) so a print stylesheet can
/// restyle an export, e.g. hide `.pf-label` text or thicken `.pf-frame`
/// outlines. The prefix keeps those names from clashing with the page the
/// SVG is inlined into.
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Emit the `<?xml ..?>` prolog, for writing a `.svg` file
    pub standalone: bool,

    /// One element per line; off for inlining into HTML
    pub pretty_print: bool,

    /// Prepended to every class name; `None` writes bare names
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("pf-".to_string()),
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output for inlining into a page: no prolog, no line breaks
    pub fn inline() -> Self {
        Self::default().with_standalone(false).with_pretty_print(false)
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Use `prefix` for element classes, e.g. `"wall-"` gives `wall-frame`
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
