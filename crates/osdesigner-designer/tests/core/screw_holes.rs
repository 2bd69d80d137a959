use osdesigner_core::Orientation;
use osdesigner_designer::grid::GridConfig;
use osdesigner_designer::screw_holes::{PerimeterPosition, ScrewHoleMap};
use osdesigner_designer::shapes::{CatalogShape, PlacedShape};

fn placed(x: u32, y: u32, width: u32, height: u32) -> PlacedShape {
    CatalogShape {
        id: 0,
        width,
        height,
        color: "#9b59b6".to_string(),
        orientation: Orientation::Horizontal,
        name: None,
        library_id: None,
    }
    .into_placed(0, x, y)
}

#[test]
fn test_every_intersection_is_listed() {
    let grid = GridConfig::new(3, 2, 4.0, 1.0, 1.0).unwrap();
    let empty: Vec<PlacedShape> = Vec::new();
    let map = ScrewHoleMap::derive(&grid, &empty);
    assert_eq!(map.len(), 12);
    assert_eq!(map.visible_count(), 12);
    assert!(map.get(3, 2).is_some());
    assert!(map.get(4, 0).is_none());
}

#[test]
fn test_boundary_holes_stay_visible() {
    let grid = GridConfig::default();
    let shapes = vec![placed(0, 0, 2, 2)];
    let map = ScrewHoleMap::derive(&grid, &shapes);

    assert!(map.is_occluded(1, 1));
    assert!(!map.is_occluded(2, 0));
    assert!(!map.is_occluded(2, 2));
    assert!(!map.is_occluded(0, 1));
    assert_eq!(map.occluded_count(), 1);
}

#[test]
fn test_large_shape_hides_interior() {
    let grid = GridConfig::default();
    let shapes = vec![placed(1, 1, 4, 3)];
    let map = ScrewHoleMap::derive(&grid, &shapes);
    // (4 - 1) x (3 - 1) interior intersections
    assert_eq!(map.occluded_count(), 6);
}

#[test]
fn test_rederived_after_removal() {
    let grid = GridConfig::default();
    let mut shapes = vec![placed(0, 0, 2, 2), placed(4, 4, 3, 3)];
    assert_eq!(ScrewHoleMap::derive(&grid, &shapes).occluded_count(), 5);

    shapes.remove(1);
    assert_eq!(ScrewHoleMap::derive(&grid, &shapes).occluded_count(), 1);
}

#[test]
fn test_display_marks_hidden_holes() {
    let grid = GridConfig::new(2, 2, 4.0, 1.0, 1.0).unwrap();
    let shapes = vec![placed(0, 0, 2, 2)];
    let text = ScrewHoleMap::derive(&grid, &shapes).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains('.'));
    assert!(!lines[0].contains('.'));
}

#[test]
fn test_perimeter_holes_on_default_grid() {
    let grid = GridConfig::default();
    let mut corners = 0;
    let mut edges = 0;
    for row in 0..=8 {
        for col in 0..=8 {
            match PerimeterPosition::classify(&grid, col, row) {
                Some(p) if p.is_corner() => corners += 1,
                Some(_) => edges += 1,
                None => {}
            }
        }
    }
    assert_eq!(corners, 4);
    assert_eq!(edges, 28);
}
