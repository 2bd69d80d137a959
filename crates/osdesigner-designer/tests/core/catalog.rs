use osdesigner_core::{Orientation, ValidationError};
use osdesigner_designer::catalog::ShapeCatalog;
use osdesigner_designer::grid::GridConfig;
use osdesigner_designer::library::{LibraryEntry, ShapeLibrary};

const BLUE: Option<&str> = Some("#3498db");

#[test]
fn test_orientation_swaps_dimensions() {
    let grid = GridConfig::default();
    let mut catalog = ShapeCatalog::new();

    let horizontal = catalog
        .create(&grid, 3, 5, BLUE, Orientation::Horizontal)
        .unwrap()
        .clone();
    assert_eq!((horizontal.width, horizontal.height), (5, 3));

    let vertical = catalog
        .create(&grid, 3, 5, BLUE, Orientation::Vertical)
        .unwrap()
        .clone();
    assert_eq!((vertical.width, vertical.height), (3, 5));

    let vertical = catalog
        .create(&grid, 5, 3, BLUE, Orientation::Vertical)
        .unwrap()
        .clone();
    assert_eq!((vertical.width, vertical.height), (3, 5));
}

#[test]
fn test_create_validates_against_grid() {
    let grid = GridConfig::new(4, 6, 4.0, 1.0, 1.0).unwrap();
    let mut catalog = ShapeCatalog::new();

    assert!(matches!(
        catalog.create(&grid, 0, 1, BLUE, Orientation::Horizontal),
        Err(ValidationError::ShapeDimensions { .. })
    ));
    assert!(matches!(
        catalog.create(&grid, 5, 1, BLUE, Orientation::Horizontal),
        Err(ValidationError::ShapeDimensions { .. })
    ));
    assert!(catalog.create(&grid, 4, 6, BLUE, Orientation::Vertical).is_ok());
    assert_eq!(
        catalog.create(&grid, 1, 1, None, Orientation::Horizontal),
        Err(ValidationError::MissingColor)
    );
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_remove_is_idempotent() {
    let grid = GridConfig::default();
    let mut catalog = ShapeCatalog::new();
    let id = catalog
        .create(&grid, 1, 1, BLUE, Orientation::Horizontal)
        .unwrap()
        .id;

    assert!(catalog.remove(id).is_some());
    assert!(catalog.remove(id).is_none());
    assert!(catalog.is_empty());
}

#[test]
fn test_catalog_keeps_insertion_order() {
    let grid = GridConfig::default();
    let mut catalog = ShapeCatalog::new();
    for w in 1..=4 {
        catalog.create(&grid, w, 1, BLUE, Orientation::Horizontal).unwrap();
    }
    let widths: Vec<u32> = catalog.iter().map(|s| s.width).collect();
    assert_eq!(widths, vec![1, 2, 3, 4]);
}

#[test]
fn test_library_add_and_merge() {
    let mut library = ShapeLibrary::new();
    assert_eq!(
        library
            .add("  ", 1, 1, BLUE, Orientation::Horizontal)
            .unwrap_err(),
        ValidationError::MissingName
    );

    let battery = library
        .add(" Battery ", 1, 3, Some("#e74c3c"), Orientation::Horizontal)
        .unwrap()
        .clone();
    assert_eq!(battery.name, "Battery");
    assert_eq!((battery.width, battery.height), (3, 1));

    let entries = vec![
        LibraryEntry {
            name: "BATTERY".to_string(),
            width: 2,
            height: 2,
            color: "#000000".to_string(),
            orientation: Orientation::Horizontal,
        },
        LibraryEntry {
            name: "Pliers".to_string(),
            width: 1,
            height: 4,
            color: "#2ecc71".to_string(),
            orientation: Orientation::Vertical,
        },
        LibraryEntry {
            name: String::new(),
            width: 1,
            height: 1,
            color: "#2ecc71".to_string(),
            orientation: Orientation::Horizontal,
        },
    ];
    assert_eq!(library.merge(entries), 1);
    assert_eq!(library.len(), 2);
    assert!(library.find_by_name("pliers").is_some());
}

#[test]
fn test_library_shape_into_catalog() {
    let mut library = ShapeLibrary::new();
    let template = library
        .add("Tape", 2, 2, Some("#f1c40f"), Orientation::Horizontal)
        .unwrap()
        .clone();

    let mut catalog = ShapeCatalog::new();
    let shape = catalog.add_from_library(&template).clone();
    assert_eq!(shape.name.as_deref(), Some("Tape"));
    assert_eq!(shape.library_id, Some(template.id));

    // Library shapes are not kept when returned from the grid
    let placed = shape.into_placed(0, 0, 0);
    catalog.remove(placed.shape.id);
    assert!(!catalog.return_shape(placed.into_shape()));
    assert!(catalog.is_empty());
}
