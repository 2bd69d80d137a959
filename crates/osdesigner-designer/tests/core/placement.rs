use osdesigner_core::{Orientation, PlacementError};
use osdesigner_designer::placement::PlacementEngine;
use osdesigner_designer::shapes::CatalogShape;

fn shape(id: u64, width: u32, height: u32) -> CatalogShape {
    CatalogShape {
        id,
        width,
        height,
        color: "#3498DB".to_string(),
        orientation: Orientation::Horizontal,
        name: None,
        library_id: None,
    }
}

#[test]
fn test_example_scenario() {
    let mut engine = PlacementEngine::new(8, 8);

    let tall = shape(0, 2, 3);
    assert!(engine.can_place(&tall, 0, 0, None));
    let tall_id = engine.try_place(tall, 0, 0).unwrap().placement_id;

    let small = shape(1, 1, 1);
    assert!(!engine.can_place(&small, 1, 1, None));
    assert!(engine.can_place(&small, 2, 0, None));
    let small_id = engine.try_place(small, 2, 0).unwrap().placement_id;

    let returned = engine.remove(tall_id).unwrap();
    assert_eq!((returned.width, returned.height), (2, 3));
    assert_eq!(engine.len(), 1);
    let remaining = engine.placement(small_id).unwrap();
    assert_eq!((remaining.x, remaining.y), (2, 0));
}

#[test]
fn test_flush_against_edges() {
    let engine = PlacementEngine::new(8, 6);
    let s = shape(0, 3, 2);
    assert!(engine.can_place(&s, 5, 0, None));
    assert!(!engine.can_place(&s, 6, 0, None));
    assert!(engine.can_place(&s, 0, 4, None));
    assert!(!engine.can_place(&s, 0, 5, None));
    assert!(!engine.can_place(&s, -1, 0, None));
    assert!(!engine.can_place(&s, 0, -1, None));
}

#[test]
fn test_ignore_allows_dragging_in_place() {
    let mut engine = PlacementEngine::new(8, 8);
    let id = engine.try_place(shape(0, 2, 2), 0, 0).unwrap().placement_id;

    assert!(!engine.can_fit(2, 2, 1, 1, None));
    assert!(engine.can_fit(2, 2, 1, 1, Some(id)));

    engine.try_move(id, 1, 1).unwrap();
    let moved = engine.placement(id).unwrap();
    assert_eq!((moved.x, moved.y), (1, 1));
}

#[test]
fn test_checked_move_rejects_overlap() {
    let mut engine = PlacementEngine::new(8, 8);
    let a = engine.try_place(shape(0, 2, 2), 0, 0).unwrap().placement_id;
    engine.try_place(shape(1, 2, 2), 4, 0).unwrap();

    let err = engine.try_move(a, 3, 0).unwrap_err();
    assert!(matches!(err, PlacementError::PreconditionViolated { x: 3, y: 0, .. }));
    let unchanged = engine.placement(a).unwrap();
    assert_eq!((unchanged.x, unchanged.y), (0, 0));

    assert_eq!(
        engine.try_move(99, 0, 0),
        Err(PlacementError::NotFound { placement_id: 99 })
    );
}

#[test]
fn test_unchecked_place_trusts_caller() {
    let mut engine = PlacementEngine::new(4, 4);
    engine.place(shape(0, 2, 2), 0, 0);
    engine.place(shape(1, 2, 2), 1, 1);
    assert_eq!(engine.len(), 2);
}

#[test]
fn test_remove_unknown_placement() {
    let mut engine = PlacementEngine::new(4, 4);
    assert_eq!(
        engine.remove(7).unwrap_err(),
        PlacementError::NotFound { placement_id: 7 }
    );
}

#[test]
fn test_clear_returns_shapes() {
    let mut engine = PlacementEngine::new(8, 8);
    assert!(engine.clear().is_empty());

    engine.try_place(shape(0, 1, 1), 0, 0).unwrap();
    engine.try_place(shape(1, 1, 1), 1, 0).unwrap();
    let shapes = engine.clear();
    assert_eq!(shapes.iter().map(|s| s.id).collect::<Vec<_>>(), vec![0, 1]);
    assert!(engine.is_empty());
}

#[test]
fn test_placement_ids_are_unique() {
    let mut engine = PlacementEngine::new(8, 8);
    let a = engine.try_place(shape(0, 1, 1), 0, 0).unwrap().placement_id;
    engine.remove(a).unwrap();
    let b = engine.try_place(shape(0, 1, 1), 0, 0).unwrap().placement_id;
    assert_ne!(a, b);
}

#[test]
fn test_used_colors() {
    let mut engine = PlacementEngine::new(8, 8);
    engine.try_place(shape(0, 1, 1), 0, 0).unwrap();
    engine.try_place(shape(1, 1, 1), 1, 0).unwrap();
    let mut red = shape(2, 1, 1);
    red.color = "#E74C3C".to_string();
    engine.try_place(red, 2, 0).unwrap();

    assert_eq!(engine.used_colors(), vec!["#3498db", "#e74c3c"]);
}
