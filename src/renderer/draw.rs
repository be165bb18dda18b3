//! Scene description and draw command generation
//!
//! `render` is a pure function from a scene snapshot to a flat list of draw
//! commands in surface pixels. The host calls it after any state change and
//! replays the commands on whatever surface it owns.

use crate::canvas::Canvas;
use crate::layout::{BoundingBox, Frame, Layout, ObstacleModel, PlacementValidator, Point, Wall};
use crate::units::{percent_to_pixels, SurfaceSize};

use super::config::DrawStyle;

/// Upper bound on grid lines per axis
const MAX_GRID_LINES: usize = 1000;

/// What a rectangle command depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectRole {
    Obstacle,
    Frame,
    HoveredFrame,
    SelectedFrame,
    /// Title panel drawn on exported images
    Panel,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// A single drawing instruction, in surface pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// The wall photo, stretched over these bounds
    WallImage { bounds: BoundingBox },
    Line {
        from: Point,
        to: Point,
        stroke: String,
        width: f64,
    },
    Rect {
        id: Option<String>,
        role: RectRole,
        bounds: BoundingBox,
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    Text {
        position: Point,
        content: String,
        font_size: f64,
        fill: String,
        anchor: TextAnchor,
    },
}

/// A read-only snapshot of everything needed to draw the wall
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    pub wall: &'a Wall,
    pub surface: SurfaceSize,
    pub frames: &'a [Frame],
    pub obstacles: &'a ObstacleModel,
    /// Snapping grid pitch in pixels, if a grid should be drawn
    pub grid_pitch: Option<f64>,
    pub hovered: Option<&'a str>,
    pub selected: Option<&'a str>,
    /// Layout name shown in a title panel
    pub title: Option<&'a str>,
}

impl<'a> Scene<'a> {
    /// Snapshot the interactive canvas, including hover and selection
    pub fn from_canvas(canvas: &'a Canvas) -> Self {
        let config = canvas.config();
        Self {
            wall: canvas.wall(),
            surface: canvas.surface(),
            frames: canvas.frames(),
            obstacles: canvas.validator().obstacles(),
            grid_pitch: config.snap_to_grid.then_some(config.grid_pitch),
            hovered: canvas.hovered(),
            selected: canvas.selected(),
            title: None,
        }
    }

    /// A static view of a layout, titled with its name
    pub fn from_layout(
        layout: &'a Layout,
        validator: &'a PlacementValidator,
        surface: SurfaceSize,
    ) -> Self {
        Self {
            wall: validator.wall(),
            surface,
            frames: &layout.frames,
            obstacles: validator.obstacles(),
            grid_pitch: None,
            hovered: None,
            selected: None,
            title: Some(&layout.name),
        }
    }
}

/// Turn a scene into draw commands, back to front
///
/// An unmeasured surface produces no commands.
pub fn render(scene: &Scene<'_>, style: &DrawStyle) -> Vec<DrawCommand> {
    let surface = scene.surface;
    if !surface.is_measured() {
        return vec![];
    }

    let mut commands = vec![DrawCommand::WallImage {
        bounds: BoundingBox::new(0.0, 0.0, surface.width, surface.height),
    }];

    if style.show_grid {
        if let Some(pitch) = scene.grid_pitch.filter(|p| *p > 0.0) {
            draw_grid(surface, pitch, style, &mut commands);
        }
    }
    if style.show_obstacles {
        draw_obstacles(scene, style, &mut commands);
    }
    for frame in scene.frames {
        draw_frame(scene, frame, style, &mut commands);
    }
    if let Some(title) = scene.title {
        draw_title(title, scene.frames.len(), &mut commands);
    }

    commands
}

fn draw_grid(surface: SurfaceSize, pitch: f64, style: &DrawStyle, out: &mut Vec<DrawCommand>) {
    let line = |from: Point, to: Point| DrawCommand::Line {
        from,
        to,
        stroke: style.grid_stroke.clone(),
        width: 1.0,
    };

    for i in 0..grid_line_count(surface.width, pitch) {
        let x = i as f64 * pitch;
        out.push(line(Point::new(x, 0.0), Point::new(x, surface.height)));
    }
    for i in 0..grid_line_count(surface.height, pitch) {
        let y = i as f64 * pitch;
        out.push(line(Point::new(0.0, y), Point::new(surface.width, y)));
    }
}

/// Lines at 0, pitch, 2*pitch.. up to `extent`, capped at [`MAX_GRID_LINES`]
fn grid_line_count(extent: f64, pitch: f64) -> usize {
    let count = (extent / pitch).floor();
    if !count.is_finite() || count < 0.0 {
        return 0;
    }
    (count as usize).saturating_add(1).min(MAX_GRID_LINES)
}

fn draw_obstacles(scene: &Scene<'_>, style: &DrawStyle, out: &mut Vec<DrawCommand>) {
    for zone in &scene.obstacles.zones {
        let bounds = to_pixels(&zone.bounds(), scene.surface);
        out.push(DrawCommand::Rect {
            id: None,
            role: RectRole::Obstacle,
            bounds,
            fill: style.obstacle_fill.clone(),
            stroke: style.obstacle_stroke.clone(),
            stroke_width: 1.0,
        });
        out.push(DrawCommand::Text {
            position: bounds.center(),
            content: style.obstacle_label.clone(),
            font_size: 10.0,
            fill: style.obstacle_text.clone(),
            anchor: TextAnchor::Middle,
        });
    }
}

fn draw_frame(scene: &Scene<'_>, frame: &Frame, style: &DrawStyle, out: &mut Vec<DrawCommand>) {
    let bounds = to_pixels(&frame.rect(scene.wall), scene.surface);
    let id = frame.id.as_str();

    let (role, fill, stroke, stroke_width) = if scene.selected == Some(id) {
        (
            RectRole::SelectedFrame,
            &style.selected_fill,
            &style.highlight_stroke,
            style.selected_stroke_width,
        )
    } else if scene.hovered == Some(id) {
        (
            RectRole::HoveredFrame,
            &style.hovered_fill,
            &style.highlight_stroke,
            style.hovered_stroke_width,
        )
    } else {
        (
            RectRole::Frame,
            &style.frame_fill,
            &style.frame_stroke,
            style.frame_stroke_width,
        )
    };

    out.push(DrawCommand::Rect {
        id: Some(frame.id.clone()),
        role,
        bounds,
        fill: fill.clone(),
        stroke: stroke.clone(),
        stroke_width,
    });

    let center = bounds.center();
    out.push(DrawCommand::Text {
        position: center,
        content: format!("{} {}", frame.size, frame.orientation),
        font_size: style.label_font_size,
        fill: style.label_fill.clone(),
        anchor: TextAnchor::Middle,
    });
    out.push(DrawCommand::Text {
        position: Point::new(center.x, center.y + 15.0),
        content: frame.id.clone(),
        font_size: style.id_font_size,
        fill: style.id_fill.clone(),
        anchor: TextAnchor::Middle,
    });
}

fn draw_title(title: &str, frame_count: usize, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::Rect {
        id: None,
        role: RectRole::Panel,
        bounds: BoundingBox::new(10.0, 10.0, 250.0, 50.0),
        fill: "rgba(255, 255, 255, 0.95)".to_string(),
        stroke: "#000000".to_string(),
        stroke_width: 2.0,
    });
    out.push(DrawCommand::Text {
        position: Point::new(20.0, 32.0),
        content: title.to_string(),
        font_size: 18.0,
        fill: "#000000".to_string(),
        anchor: TextAnchor::Start,
    });
    out.push(DrawCommand::Text {
        position: Point::new(20.0, 50.0),
        content: format!("{} frames", frame_count),
        font_size: 12.0,
        fill: "#666666".to_string(),
        anchor: TextAnchor::Start,
    });
}

fn to_pixels(rect: &BoundingBox, surface: SurfaceSize) -> BoundingBox {
    BoundingBox::new(
        percent_to_pixels(rect.x, surface.width),
        percent_to_pixels(rect.y, surface.height),
        percent_to_pixels(rect.width, surface.width),
        percent_to_pixels(rect.height, surface.height),
    )
}
