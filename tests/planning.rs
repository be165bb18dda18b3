//! Integration tests for planning with external layouts, config files and export

use std::path::Path;

use pretty_assertions::assert_eq;

use picframe::layout::{audit, LayoutConfig, ViewingBand};
use picframe::{
    export_svg, plan, plan_from_json, Analysis, DrawStyle, PlanConfig, SurfaceSize, Wall,
    WallImage,
};

const GALLERY: &str = include_str!("fixtures/gallery.json");

#[test]
fn test_external_layouts_are_sanitized() {
    let analysis = plan_from_json(120.0, 96.0, None, Some(GALLERY), &PlanConfig::default())
        .expect("Should plan");

    let names: Vec<_> = analysis.layouts.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Gallery Pair"]);

    let pair = &analysis.layouts[0];
    assert_eq!(
        pair.frame("left").and_then(|f| f.placement_reason.as_deref()),
        Some("Left of the sofa center line")
    );
    assert_eq!(pair.aesthetic_tips, vec!["Align the top edges".to_string()]);

    let wall_analysis = analysis.wall_analysis.expect("wall analysis kept");
    assert_eq!(wall_analysis.optimal_frame_count, 2);
    assert!(wall_analysis.constraints.is_empty());
}

#[test]
fn test_external_layout_passes_audit() {
    let config = PlanConfig::default();
    let analysis = Analysis::from_json(GALLERY).unwrap();
    let wall = Wall::new(120.0, 96.0).unwrap();
    let warnings = audit(&analysis.layouts[0], &config.validator(wall));
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
}

#[test]
fn test_config_file_drives_grid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/narrow-band.toml");
    let layout = LayoutConfig::from_file(&path).expect("Should load config");
    assert_eq!(layout.frame_count, 4);
    assert_eq!(layout.frame_size, (12.0, 16.0));
    assert_eq!(layout.clearance_margin, 4.0);
    assert_eq!(layout.obstacles.viewing_band, ViewingBand::new(20.0, 80.0));
    assert_eq!(layout.obstacles.zones.len(), 4);

    let config = PlanConfig::new().with_layout(layout);
    let wall = Wall::new(120.0, 96.0).unwrap();
    let analysis = plan(&wall, None, None, &config);
    let frames = &analysis.layouts[0].frames;
    assert_eq!(frames.len(), 4);
    assert!(frames.iter().all(|f| (f.width, f.height) == (12.0, 16.0)));
}

#[test]
fn test_analysis_json_round_trip_keeps_camel_case() {
    let wall = Wall::new(120.0, 96.0).unwrap();
    let analysis = plan(&wall, Some(2), None, &PlanConfig::default());
    let json = analysis.to_json().unwrap();
    assert!(json.contains("\"placementReason\""));
    assert!(json.contains("\"aestheticTips\""));
    assert!(json.contains("\"optimalFrameCount\": 2"));
    let decoded = Analysis::from_json(&json).unwrap();
    assert_eq!(decoded.layouts[0].name, analysis.layouts[0].name);
    assert_eq!(decoded.layouts[0].frames.len(), 2);
    assert_eq!(decoded.wall_analysis, analysis.wall_analysis);
}

#[test]
fn test_export_embeds_wall_photo() {
    let config = PlanConfig::new().with_style(DrawStyle::for_export());
    let wall = Wall::new(120.0, 96.0).unwrap();
    let analysis = plan_from_json(120.0, 96.0, None, Some(GALLERY), &config).unwrap();
    let image = WallImage::new("image/png", vec![0x89, b'P', b'N', b'G']);

    let surface = SurfaceSize::fit(&wall, 800.0, 600.0);
    let svg = export_svg(wall, &analysis.layouts[0], surface, Some(&image), &config);

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("data:image/png;base64,iVBORw=="));
    assert!(svg.contains(r#"id="left""#));
    assert!(svg.contains(">Gallery Pair</text>"));
    assert!(!svg.contains("AVOID"));
}
