use osdesigner_designer::designer_state::DesignerState;
use osdesigner_designer::grid::GridConfig;
use osdesigner_designer::solid::{SolidProgram, StlOptions, UnavailableKernel};

fn hole_area(radius: f64, segments: usize) -> f64 {
    let n = segments as f64;
    0.5 * n * radius * radius * (2.0 * std::f64::consts::PI / n).sin()
}

#[test]
fn test_program_for_frame() {
    let grid = GridConfig::new(2, 2, 4.0, 1.0, 1.0).unwrap();
    let program = SolidProgram::frame(&grid, &StlOptions::default()).unwrap();
    assert_eq!(program.holes.len(), 8);
    assert!(program.cutout.is_some());
    assert_eq!(program.file_name(), "frame-100x100x3mm.stl");
}

#[test]
fn test_missing_kernel_is_reported() {
    let state = DesignerState::new();
    let err = state
        .export_stl_with(&StlOptions::default(), &UnavailableKernel)
        .unwrap_err();
    assert!(err.is_dependency_unavailable());
}

#[test]
fn test_bad_thickness_is_rejected() {
    let state = DesignerState::new();
    let options = StlOptions {
        thickness_mm: 0.0,
        ..StlOptions::default()
    };
    let err = state.export_stl_with(&options, &UnavailableKernel).unwrap_err();
    assert!(err.is_validation_error());
}

#[cfg(feature = "csg")]
mod csg {
    use super::*;
    use osdesigner_designer::solid::{default_kernel, CYLINDER_SEGMENTS, StlFormat};

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected * 0.01;
        assert!(
            (actual - expected).abs() < tolerance,
            "volume {} not within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_filled_panel_volume() {
        let grid = GridConfig::new(1, 1, 4.0, 1.0, 1.0).unwrap();
        let state = DesignerState::with_grid(grid);
        let options = StlOptions {
            fill_center: true,
            ..StlOptions::default()
        };
        let kernel = default_kernel().unwrap();
        let mesh = state.frame_mesh(&options, kernel.as_ref()).unwrap();

        // 60 x 60 x 3 plate with four through holes
        let expected = 60.0 * 60.0 * 3.0 - 4.0 * hole_area(2.0, CYLINDER_SEGMENTS) * 3.0;
        // Outward-facing normals give a positive volume
        assert!(mesh.signed_volume() > 0.0);
        assert_close(mesh.signed_volume(), expected);

        let size = mesh.size();
        assert!((size.x - 60.0).abs() < 1e-3);
        assert!((size.z - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_frame_volume() {
        let grid = GridConfig::new(2, 2, 4.0, 1.0, 1.0).unwrap();
        let state = DesignerState::with_grid(grid);
        let kernel = default_kernel().unwrap();
        let mesh = state
            .frame_mesh(&StlOptions::default(), kernel.as_ref())
            .unwrap();

        // Border ring minus the parts of the perimeter holes inside it:
        // four half holes on the edges and four three-quarter holes at corners
        let ring = 100.0 * 100.0 * 3.0 - 80.0 * 80.0 * 3.0;
        let expected = ring - 5.0 * hole_area(2.0, CYLINDER_SEGMENTS) * 3.0;
        assert!(mesh.signed_volume() > 0.0);
        assert_close(mesh.signed_volume(), expected);
    }

    #[test]
    fn test_binary_stl_layout() {
        let state = DesignerState::with_grid(GridConfig::new(1, 1, 4.0, 1.0, 1.0).unwrap());
        let export = state.export_stl(&StlOptions::default()).unwrap();

        assert_eq!(export.file_name, "frame-60x60x3mm.stl");
        assert!(export.triangle_count > 0);
        assert_eq!(export.bytes.len(), 84 + 50 * export.triangle_count);
        let count = u32::from_le_bytes([
            export.bytes[80],
            export.bytes[81],
            export.bytes[82],
            export.bytes[83],
        ]);
        assert_eq!(count as usize, export.triangle_count);
    }

    #[test]
    fn test_ascii_stl() {
        let state = DesignerState::with_grid(GridConfig::new(1, 1, 4.0, 1.0, 1.0).unwrap());
        let options = StlOptions {
            format: StlFormat::Ascii,
            ..StlOptions::default()
        };
        let export = state.export_stl(&options).unwrap();
        let text = String::from_utf8(export.bytes).unwrap();
        assert!(text.starts_with("solid frame"));
        assert_eq!(text.matches("facet normal").count(), export.triangle_count);
    }
}
