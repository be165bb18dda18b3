//! SVG export of draw commands

use std::fs;
use std::io;
use std::path::Path;

use base64::Engine;

use crate::layout::BoundingBox;
use crate::units::SurfaceSize;

use super::draw::{DrawCommand, RectRole, TextAnchor};
use super::SvgConfig;

/// Background used when no wall photo is embedded
const WALL_PLACEHOLDER_FILL: &str = "#f5f5f4";

/// A wall photo to embed in exported SVG
#[derive(Debug, Clone, PartialEq)]
pub struct WallImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl WallImage {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Read an image file, guessing its MIME type from the extension
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let mime = match ext.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("svg") => "image/svg+xml",
            _ => "image/png",
        };
        Ok(Self::new(mime, bytes))
    }

    /// `data:` URI with the base64-encoded image
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Accumulates wall, grid, obstacle, frame and label elements in paint order
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add an embedded image stretched over `bounds`
    pub fn add_image(&mut self, bounds: &BoundingBox, href: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<image class="{}wall" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none" href="{}"/>"#,
            self.indent_str(),
            prefix,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            escape_xml(href)
        ));
    }

    /// Add a rectangle element
    pub fn add_rect(
        &mut self,
        id: Option<&str>,
        bounds: &BoundingBox,
        class: &str,
        styles: &str,
    ) {
        let prefix = self.prefix();
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let class_list = class
            .split_whitespace()
            .map(|c| format!("{}{}", prefix, c))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<rect{} class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            id_attr,
            class_list,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            styles
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<line class="{}grid" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            prefix,
            x1,
            y1,
            x2,
            y2,
            styles
        ));
    }

    /// Add a text element
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, anchor: TextAnchor, styles: &str) {
        let prefix = self.prefix();
        let anchor_str = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
        };

        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" text-anchor="{}"{}>{}</text>"#,
            self.indent_str(),
            prefix,
            x,
            y,
            anchor_str,
            styles,
            escape_xml(text)
        ));
    }

    /// Wrap the elements in an `<svg>` root whose viewBox is the surface in pixels
    pub fn build(self, surface: SurfaceSize) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = surface.width,
            h = surface.height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render draw commands to an SVG document sized to the surface
///
/// The wall image command embeds `image` when given; otherwise it becomes a
/// flat placeholder rectangle.
pub fn to_svg(
    commands: &[DrawCommand],
    surface: SurfaceSize,
    config: &SvgConfig,
    image: Option<&WallImage>,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for command in commands {
        match command {
            DrawCommand::WallImage { bounds } => match image {
                Some(image) => builder.add_image(bounds, &image.data_uri()),
                None => builder.add_rect(
                    None,
                    bounds,
                    "wall",
                    &format!(r#" fill="{}""#, WALL_PLACEHOLDER_FILL),
                ),
            },
            DrawCommand::Line {
                from,
                to,
                stroke,
                width,
            } => builder.add_line(
                from.x,
                from.y,
                to.x,
                to.y,
                &format_stroke(stroke, *width),
            ),
            DrawCommand::Rect {
                id,
                role,
                bounds,
                fill,
                stroke,
                stroke_width,
            } => {
                let styles = format!(
                    r#" fill="{}"{}"#,
                    escape_xml(fill),
                    format_stroke(stroke, *stroke_width)
                );
                builder.add_rect(id.as_deref(), bounds, role_class(*role), &styles);
            }
            DrawCommand::Text {
                position,
                content,
                font_size,
                fill,
                anchor,
            } => builder.add_text(
                content,
                position.x,
                position.y,
                *anchor,
                &format!(r#" font-size="{}" fill="{}""#, font_size, escape_xml(fill)),
            ),
        }
    }

    builder.build(surface)
}

fn role_class(role: RectRole) -> &'static str {
    match role {
        RectRole::Obstacle => "obstacle",
        RectRole::Frame => "frame",
        RectRole::HoveredFrame => "frame hovered",
        RectRole::SelectedFrame => "frame selected",
        RectRole::Panel => "panel",
    }
}

fn format_stroke(stroke: &str, width: f64) -> String {
    format!(
        r#" stroke="{}" stroke-width="{}""#,
        escape_xml(stroke),
        width
    )
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    fn compact() -> SvgConfig {
        SvgConfig::inline()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_data_uri() {
        let image = WallImage::new("image/png", b"hello".to_vec());
        assert_eq!(image.data_uri(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_frame_rect_snapshot() {
        let commands = vec![
            DrawCommand::Rect {
                id: Some("frame-0".to_string()),
                role: RectRole::SelectedFrame,
                bounds: BoundingBox::new(240.0, 144.0, 80.0, 100.0),
                fill: "rgba(147, 51, 234, 0.3)".to_string(),
                stroke: "#9333ea".to_string(),
                stroke_width: 4.0,
            },
            DrawCommand::Text {
                position: Point::new(280.0, 194.0),
                content: "medium portrait".to_string(),
                font_size: 12.0,
                fill: "#374151".to_string(),
                anchor: TextAnchor::Middle,
            },
        ];
        let svg = to_svg(&commands, SurfaceSize::new(600.0, 480.0), &compact(), None);
        insta::assert_snapshot!(svg, @r##"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="480" viewBox="0 0 600 480"><rect id="frame-0" class="pf-frame pf-selected" x="240" y="144" width="80" height="100" fill="rgba(147, 51, 234, 0.3)" stroke="#9333ea" stroke-width="4"/><text class="pf-label" x="280" y="194" text-anchor="middle" font-size="12" fill="#374151">medium portrait</text></svg>"##);
    }

    #[test]
    fn test_wall_placeholder_and_image() {
        let commands = vec![DrawCommand::WallImage {
            bounds: BoundingBox::new(0.0, 0.0, 600.0, 480.0),
        }];
        let surface = SurfaceSize::new(600.0, 480.0);

        let plain = to_svg(&commands, surface, &compact(), None);
        assert!(plain.contains(r#"class="pf-wall""#));
        assert!(plain.contains(WALL_PLACEHOLDER_FILL));
        assert!(!plain.contains("<image"));

        let image = WallImage::new("image/jpeg", vec![0xff, 0xd8, 0xff]);
        let embedded = to_svg(&commands, surface, &compact(), Some(&image));
        assert!(embedded.contains(r#"href="data:image/jpeg;base64,/9j/""#));
    }

    #[test]
    fn test_standalone_pretty_output() {
        let svg = to_svg(&[], SurfaceSize::new(100.0, 50.0), &SvgConfig::default(), None);
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains("viewBox=\"0 0 100 50\">\n</svg>"));
    }

    #[test]
    fn test_class_prefix_applies_to_every_class() {
        let commands = vec![DrawCommand::Rect {
            id: Some("a".to_string()),
            role: RectRole::HoveredFrame,
            bounds: BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            fill: "none".to_string(),
            stroke: "#9333ea".to_string(),
            stroke_width: 3.0,
        }];
        let surface = SurfaceSize::new(100.0, 100.0);

        let prefixed = to_svg(&commands, surface, &SvgConfig::inline(), None);
        assert!(prefixed.contains(r#"class="pf-frame pf-hovered""#));

        let bare = to_svg(
            &commands,
            surface,
            &SvgConfig::inline().without_class_prefix(),
            None,
        );
        assert!(bare.contains(r#"class="frame hovered""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let commands = vec![DrawCommand::Text {
            position: Point::new(20.0, 32.0),
            content: "Kids & <pets>".to_string(),
            font_size: 18.0,
            fill: "#000000".to_string(),
            anchor: TextAnchor::Start,
        }];
        let svg = to_svg(&commands, SurfaceSize::new(600.0, 480.0), &compact(), None);
        assert!(svg.contains(">Kids &amp; &lt;pets&gt;</text>"));
        assert!(svg.contains(r#"text-anchor="start""#));
    }
}
