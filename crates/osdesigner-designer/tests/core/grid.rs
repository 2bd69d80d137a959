use osdesigner_core::{Axis, ValidationError};
use osdesigner_designer::grid::GridConfig;

#[test]
fn test_default_config() {
    let grid = GridConfig::default();
    assert_eq!(grid.width_units, 8);
    assert_eq!(grid.height_units, 8);
    assert_eq!(grid.screw_diameter_mm, 4.0);
    assert_eq!(grid.border_left_right_cm, 1.0);
    assert_eq!(grid.border_top_bottom_cm, 1.0);
    assert_eq!(grid.border_color, "#ffffff");
    assert!(grid.validate().is_ok());
}

#[test]
fn test_rejects_out_of_range() {
    assert!(matches!(
        GridConfig::new(0, 8, 4.0, 1.0, 1.0),
        Err(ValidationError::GridSize { .. })
    ));
    assert!(matches!(
        GridConfig::new(8, 17, 4.0, 1.0, 1.0),
        Err(ValidationError::GridSize { .. })
    ));
    assert!(matches!(
        GridConfig::new(8, 8, 0.5, 1.0, 1.0),
        Err(ValidationError::ScrewDiameter { .. })
    ));
    assert!(matches!(
        GridConfig::new(8, 8, 4.0, 10.5, 1.0),
        Err(ValidationError::BorderWidth { .. })
    ));
}

#[test]
fn test_apply_is_all_or_nothing() {
    let mut grid = GridConfig::default();
    let mut bad = GridConfig::default();
    bad.screw_diameter_mm = 25.0;

    assert!(grid.apply(bad).is_err());
    assert_eq!(grid, GridConfig::default());
}

#[test]
fn test_apply_reports_reset() {
    let mut grid = GridConfig::default();

    let borders = GridConfig::new(8, 8, 4.0, 2.0, 0.0).unwrap();
    assert!(!grid.apply(borders).unwrap().reset);
    assert_eq!(grid.border_left_right_cm, 2.0);

    let resized = GridConfig::new(10, 8, 4.0, 2.0, 0.0).unwrap();
    assert!(grid.apply(resized).unwrap().reset);

    let screws = GridConfig::new(10, 8, 5.0, 2.0, 0.0).unwrap();
    assert!(grid.apply(screws).unwrap().reset);
}

#[test]
fn test_edges_are_uniform_per_axis() {
    let grid = GridConfig::new(4, 12, 4.0, 1.0, 1.0).unwrap();
    assert_eq!(grid.edge(Axis::X, 0), 0.0);
    assert_eq!(grid.edge(Axis::X, 4), 160.0);
    assert_eq!(grid.edge(Axis::Y, 12), 480.0);

    let mut previous = -1.0;
    for i in 0..=12 {
        let edge = grid.edge(Axis::Y, i);
        assert!(edge > previous);
        previous = edge;
    }
    assert_eq!(grid.span(Axis::X, 1, 3), 120.0);
}

#[test]
fn test_outer_dimensions() {
    let grid = GridConfig::new(8, 4, 4.0, 1.0, 2.5).unwrap();
    assert_eq!(grid.outer_width_mm(), 340.0);
    assert_eq!(grid.outer_height_mm(), 210.0);
    assert_eq!(grid.screw_radius_mm(), 2.0);
}

#[test]
fn test_project_info_display() {
    let info = GridConfig::default().info().to_string();
    assert!(info.contains("8 x 8 units (32cm x 32cm)"));
    assert!(info.contains("Frame size: 340mm x 340mm"));
}
