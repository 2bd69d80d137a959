use osdesigner_core::{DocumentEvent, Orientation, PlacementError, ValidationError};
use osdesigner_designer::designer_state::{Confirmation, DesignerState};
use osdesigner_designer::grid::GridConfig;

const BLUE: Option<&str> = Some("#3498db");

#[test]
fn test_designer_state_new() {
    let state = DesignerState::new();
    assert_eq!(state.grid(), &GridConfig::default());
    assert!(state.catalog().is_empty());
    assert!(state.placements().is_empty());
    assert_eq!(state.palette().len(), 10);
    assert!(!state.is_modified);
}

#[test]
fn test_place_moves_shape_out_of_catalog() {
    let mut state = DesignerState::new();
    let id = state.create_shape(2, 3, BLUE, Orientation::Vertical).unwrap();
    assert_eq!(state.catalog().len(), 1);

    let placement = state.place_from_catalog(id, 0, 0).unwrap();
    assert!(state.catalog().is_empty());
    assert_eq!(state.placements().len(), 1);
    assert!(state.is_modified);

    state.delete_placement(placement).unwrap();
    assert!(state.placements().is_empty());
    let returned = state.catalog().iter().next().unwrap();
    assert_eq!((returned.width, returned.height), (2, 3));
}

#[test]
fn test_failed_placement_keeps_shape_in_catalog() {
    let mut state = DesignerState::new();
    let a = state.create_shape(2, 2, BLUE, Orientation::Horizontal).unwrap();
    let b = state.create_shape(2, 2, BLUE, Orientation::Horizontal).unwrap();
    state.place_from_catalog(a, 0, 0).unwrap();

    assert!(!state.can_place_shape(b, 1, 1));
    let err = state.place_from_catalog(b, 1, 1).unwrap_err();
    assert!(matches!(
        err,
        osdesigner_core::Error::Placement(PlacementError::PreconditionViolated { .. })
    ));
    assert!(state.catalog().get(b).is_some());
    assert_eq!(state.placements().len(), 1);
}

#[test]
fn test_move_placement() {
    let mut state = DesignerState::new();
    let id = state.create_shape(1, 1, BLUE, Orientation::Horizontal).unwrap();
    let placement = state.place_from_catalog(id, 0, 0).unwrap();

    assert!(state.can_move_placement(placement, 7, 7));
    state.move_placement(placement, 7, 7).unwrap();
    assert!(state.move_placement(placement, 8, 0).is_err());

    let placed = state.placements().placement(placement).unwrap();
    assert_eq!((placed.x, placed.y), (7, 7));
}

#[test]
fn test_invalid_shape_is_rejected() {
    let mut state = DesignerState::new();
    let err = state.create_shape(9, 1, BLUE, Orientation::Horizontal).unwrap_err();
    assert!(err.is_validation_error());
    let err = state.create_shape(1, 1, None, Orientation::Horizontal).unwrap_err();
    assert!(matches!(
        err,
        osdesigner_core::Error::Validation(ValidationError::MissingColor)
    ));
    assert!(state.catalog().is_empty());
}

#[test]
fn test_grid_resize_requires_confirmation() {
    let mut state = DesignerState::new();
    let id = state.create_shape(1, 1, BLUE, Orientation::Horizontal).unwrap();
    state.place_from_catalog(id, 0, 0).unwrap();
    state.create_shape(2, 1, BLUE, Orientation::Horizontal).unwrap();

    let resized = GridConfig::new(10, 10, 4.0, 1.0, 1.0).unwrap();
    let err = state
        .apply_grid_config(resized.clone(), Confirmation::Pending)
        .unwrap_err();
    assert!(err.is_confirmation_required());
    assert_eq!(state.grid().width_units, 8);
    assert_eq!(state.placements().len(), 1);

    let outcome = state
        .apply_grid_config(resized, Confirmation::Confirmed)
        .unwrap();
    assert!(outcome.reset);
    assert_eq!(state.grid().width_units, 10);
    assert!(state.placements().is_empty());
    assert!(state.catalog().is_empty());
}

#[test]
fn test_border_change_keeps_shapes() {
    let mut state = DesignerState::new();
    let id = state.create_shape(1, 1, BLUE, Orientation::Horizontal).unwrap();
    state.place_from_catalog(id, 3, 3).unwrap();

    let borders = GridConfig::new(8, 8, 4.0, 2.0, 3.0)
        .unwrap()
        .with_border_color("#000000");
    let outcome = state
        .apply_grid_config(borders, Confirmation::Pending)
        .unwrap();
    assert!(!outcome.reset);
    assert_eq!(state.placements().len(), 1);
    assert_eq!(state.grid().border_color, "#000000");
}

#[test]
fn test_resize_of_empty_grid_needs_no_confirmation() {
    let mut state = DesignerState::new();
    let resized = GridConfig::new(4, 4, 6.0, 1.0, 1.0).unwrap();
    assert!(state
        .apply_grid_config(resized, Confirmation::Pending)
        .unwrap()
        .reset);
}

#[test]
fn test_invalid_config_leaves_state_untouched() {
    let mut state = DesignerState::new();
    let mut bad = GridConfig::default();
    bad.width_units = 20;
    let err = state
        .apply_grid_config(bad, Confirmation::Confirmed)
        .unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(state.grid(), &GridConfig::default());
    assert!(!state.is_modified);
}

#[test]
fn test_clear_grid() {
    let mut state = DesignerState::new();
    assert_eq!(state.clear_grid(Confirmation::Pending).unwrap(), 0);

    for x in 0..3 {
        let id = state.create_shape(1, 1, BLUE, Orientation::Horizontal).unwrap();
        state.place_from_catalog(id, x, 0).unwrap();
    }

    let err = state.clear_grid(Confirmation::Pending).unwrap_err();
    assert!(err.is_confirmation_required());
    assert_eq!(state.placements().len(), 3);

    assert_eq!(state.clear_grid(Confirmation::Confirmed).unwrap(), 3);
    assert!(state.placements().is_empty());
    assert_eq!(state.catalog().len(), 3);
}

#[test]
fn test_library_lifecycle() {
    let mut state = DesignerState::new();
    let battery = state
        .add_library_shape("Battery", 3, 1, Some("#e74c3c"), Orientation::Horizontal)
        .unwrap();

    // Placing from the library leaves the catalog alone
    let placement = state.place_from_library(battery, 0, 0).unwrap();
    assert!(state.catalog().is_empty());
    let placed = state.placements().placement(placement).unwrap();
    assert_eq!(placed.shape.label(), "Battery (3x1)");

    // Library shapes are discarded on delete
    state.delete_placement(placement).unwrap();
    assert!(state.catalog().is_empty());

    let queued = state.queue_library_shape(battery).unwrap();
    assert_eq!(state.catalog().get(queued).unwrap().library_id, Some(battery));

    let err = state
        .remove_library_shape(battery, Confirmation::Pending)
        .unwrap_err();
    assert!(err.is_confirmation_required());
    state
        .remove_library_shape(battery, Confirmation::Confirmed)
        .unwrap();
    assert!(state.library().is_empty());
    // The queued copy survives its template
    assert!(state.catalog().get(queued).is_some());
}

#[test]
fn test_place_from_library_checks_fit() {
    let mut state = DesignerState::new();
    let wide = state
        .add_library_shape("Ruler", 6, 1, Some("#95a5a6"), Orientation::Horizontal)
        .unwrap();
    assert!(state.place_from_library(wide, 3, 0).is_err());
    assert!(state.placements().is_empty());
}

#[test]
fn test_events_are_published() {
    let mut state = DesignerState::new();
    let mut rx = state.subscribe();

    let id = state.create_shape(1, 1, BLUE, Orientation::Horizontal).unwrap();
    let placement = state.place_from_catalog(id, 2, 3).unwrap();
    state.delete_placement(placement).unwrap();
    let spare = state.create_shape(1, 1, BLUE, Orientation::Horizontal).unwrap();
    assert!(state.remove_shape(spare).is_some());
    // Removing an absent shape is silent
    assert!(state.remove_shape(spare).is_none());

    assert_eq!(rx.try_recv().unwrap(), DocumentEvent::ShapeCreated(id));
    assert_eq!(
        rx.try_recv().unwrap(),
        DocumentEvent::ShapePlaced {
            placement_id: placement,
            x: 2,
            y: 3
        }
    );
    assert_eq!(rx.try_recv().unwrap(), DocumentEvent::ShapeRemoved(placement));
    assert_eq!(rx.try_recv().unwrap(), DocumentEvent::ShapeCreated(spare));
    assert_eq!(rx.try_recv().unwrap(), DocumentEvent::ShapeDeleted(spare));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_screw_holes_follow_placements() {
    let mut state = DesignerState::new();
    let id = state.create_shape(2, 2, BLUE, Orientation::Horizontal).unwrap();
    let placement = state.place_from_catalog(id, 0, 0).unwrap();
    assert!(state.screw_holes().is_occluded(1, 1));

    state.move_placement(placement, 2, 2).unwrap();
    let holes = state.screw_holes();
    assert!(!holes.is_occluded(1, 1));
    assert!(holes.is_occluded(3, 3));
}

#[test]
fn test_grid_colors() {
    let mut state = DesignerState::new();
    let a = state.create_shape(1, 1, Some("#ABCDEF"), Orientation::Horizontal).unwrap();
    let b = state.create_shape(1, 1, Some("#abcdef"), Orientation::Horizontal).unwrap();
    state.place_from_catalog(a, 0, 0).unwrap();
    state.place_from_catalog(b, 1, 0).unwrap();
    assert_eq!(state.grid_colors(), vec!["#abcdef"]);
}
