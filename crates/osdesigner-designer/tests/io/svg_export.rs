use osdesigner_designer::grid::GridConfig;
use osdesigner_designer::screw_holes::PerimeterPosition;
use osdesigner_designer::svg_export::{export_frame_svg, hole_arc_path, svg_file_name};

#[test]
fn test_outer_width_includes_borders() {
    let svg = export_frame_svg(&GridConfig::default());
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("width=\"340mm\""));
    assert!(svg.contains("height=\"340mm\""));
    assert!(svg.contains("viewBox=\"0 0 340 340\""));
}

#[test]
fn test_groups_and_element_counts() {
    let svg = export_frame_svg(&GridConfig::default());
    for group in ["outer-frame-edges", "inner-frame-edges", "screw-holes"] {
        assert!(svg.contains(&format!("<g id=\"{}\">", group)));
    }
    // Two sides per axis, one segment per cell, outer and inner
    assert_eq!(svg.matches("<line").count(), 64);
    // Perimeter intersections only
    assert_eq!(svg.matches("<path").count(), 32);
    assert!(!svg.contains("fill=\"#"));
}

#[test]
fn test_rectangular_grid() {
    let grid = GridConfig::new(3, 5, 6.0, 0.5, 2.0).unwrap();
    let svg = export_frame_svg(&grid);
    assert!(svg.contains("viewBox=\"0 0 130 240\""));
    assert_eq!(svg.matches("<line").count(), 4 * (3 + 5));
    assert_eq!(svg.matches("<path").count(), 2 * (3 + 5));
    assert_eq!(svg_file_name(&grid), "outer-frame-3x5-130x240mm.svg");
}

#[test]
fn test_segments_stop_short_of_holes() {
    let svg = export_frame_svg(&GridConfig::default());
    // First top segment runs from the first hole to the second, pulled in by r = 2
    assert!(svg.contains("<line x1=\"12\" y1=\"0\" x2=\"48\" y2=\"0\""));
    assert!(svg.contains("<line x1=\"12\" y1=\"10\" x2=\"48\" y2=\"10\""));
}

#[test]
fn test_corner_and_edge_arcs() {
    let corner = hole_arc_path(PerimeterPosition::TopLeft, 10.0, 10.0, 2.0);
    assert_eq!(corner, "M 12 10 A 2 2 0 1 0 10 12");

    let edge = hole_arc_path(PerimeterPosition::Top, 50.0, 10.0, 2.0);
    assert_eq!(edge, "M 48 10 A 2 2 0 0 1 52 10");
}
