//! # Solid Export
//!
//! Builds the 3D frame as a sequence of primitive and boolean operations and
//! hands it to a solid geometry kernel for evaluation.
//!
//! The sequence is:
//! 1. A box of `outer width x outer height x thickness`
//! 2. In frame mode, subtract the inner grid area
//! 3. Subtract a cylinder at every screw hole (perimeter holes only in
//!    frame mode, all holes otherwise)
//!
//! Cutting tools extend 0.5 mm past both faces of the panel so no boolean
//! operation works on coincident faces.

pub mod kernel;

#[cfg(feature = "csg")]
pub mod csg;

pub use kernel::{default_kernel, Polygon3, SolidKernel, UnavailableKernel};

use crate::grid::GridConfig;
use crate::mesh::Mesh3D;
use nalgebra::{Point3, Vector3};
use osdesigner_core::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Segments used to approximate each screw-hole cylinder
pub const CYLINDER_SEGMENTS: usize = 48;

/// Distance cutting tools extend past each face of the panel
pub const CUT_OVERSHOOT_MM: f64 = 0.5;

/// Default panel thickness
pub const DEFAULT_THICKNESS_MM: f64 = 3.0;

/// Vertex welding tolerance applied to the evaluated solid
pub const WELD_TOLERANCE_MM: f64 = 1e-4;

/// STL encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    #[default]
    Binary,
    Ascii,
}

/// Options for the solid export
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StlOptions {
    pub thickness_mm: f64,
    /// Keep the centre solid and drill every hole instead of cutting a frame
    pub fill_center: bool,
    pub format: StlFormat,
}

impl Default for StlOptions {
    fn default() -> Self {
        Self {
            thickness_mm: DEFAULT_THICKNESS_MM,
            fill_center: false,
            format: StlFormat::Binary,
        }
    }
}

/// Axis-aligned box given by its minimum corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub min: Point3<f64>,
    pub size: Vector3<f64>,
}

/// Cylinder along +Z starting at `base`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub base: Point3<f64>,
    pub radius: f64,
    pub height: f64,
    pub segments: usize,
}

/// The primitive and boolean operations that produce the frame solid
#[derive(Debug, Clone, PartialEq)]
pub struct SolidProgram {
    /// Starting solid
    pub body: Cuboid,
    /// Inner area removed in frame mode
    pub cutout: Option<Cuboid>,
    /// Screw holes, subtracted in order
    pub holes: Vec<Cylinder>,
    pub width_mm: f64,
    pub height_mm: f64,
    pub thickness_mm: f64,
}

impl SolidProgram {
    /// Build the program for `grid`
    pub fn frame(grid: &GridConfig, options: &StlOptions) -> std::result::Result<Self, ValidationError> {
        let thickness = options.thickness_mm;
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(ValidationError::PanelThickness { value: thickness });
        }

        let width = grid.outer_width_mm();
        let height = grid.outer_height_mm();
        let border_x = grid.border_x_mm();
        let border_y = grid.border_y_mm();

        let body = Cuboid {
            min: Point3::origin(),
            size: Vector3::new(width, height, thickness),
        };

        let cutout = (!options.fill_center).then(|| Cuboid {
            min: Point3::new(border_x, border_y, -CUT_OVERSHOOT_MM),
            size: Vector3::new(
                width - 2.0 * border_x,
                height - 2.0 * border_y,
                thickness + 2.0 * CUT_OVERSHOOT_MM,
            ),
        });

        let mut holes = Vec::new();
        for row in 0..=grid.height_units {
            for col in 0..=grid.width_units {
                if !options.fill_center && !grid.is_perimeter(col, row) {
                    continue;
                }
                let (cx, cy) = grid.hole_center_mm(col, row);
                holes.push(Cylinder {
                    base: Point3::new(cx, cy, -CUT_OVERSHOOT_MM),
                    radius: grid.screw_radius_mm(),
                    height: thickness + 2.0 * CUT_OVERSHOOT_MM,
                    segments: CYLINDER_SEGMENTS,
                });
            }
        }

        debug!(
            "Solid program {}x{}x{}mm, cutout: {}, holes: {}",
            width,
            height,
            thickness,
            cutout.is_some(),
            holes.len()
        );

        Ok(Self {
            body,
            cutout,
            holes,
            width_mm: width,
            height_mm: height,
            thickness_mm: thickness,
        })
    }

    /// Suggested file name, e.g. `frame-340x340x3mm.stl`
    pub fn file_name(&self) -> String {
        format!(
            "frame-{}x{}x{}mm.stl",
            self.width_mm, self.height_mm, self.thickness_mm
        )
    }
}

/// Evaluate the frame solid for `grid` into a welded triangle mesh
pub fn build_frame_mesh(
    grid: &GridConfig,
    options: &StlOptions,
    kernel: &dyn SolidKernel,
) -> Result<Mesh3D> {
    let program = SolidProgram::frame(grid, options)?;
    let polygons = kernel.evaluate(&program)?;
    let mesh = Mesh3D::from_polygons(&polygons, WELD_TOLERANCE_MM);
    info!(
        "Built frame solid with {} ({} polygons, {} triangles)",
        kernel.name(),
        polygons.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Serialized STL output
#[derive(Debug, Clone)]
pub struct StlExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub triangle_count: usize,
}

/// Evaluate and serialize the frame solid for `grid`
pub fn export_frame_stl(
    grid: &GridConfig,
    options: &StlOptions,
    kernel: &dyn SolidKernel,
) -> Result<StlExport> {
    let file_name = SolidProgram::frame(grid, options)?.file_name();
    let mesh = build_frame_mesh(grid, options, kernel)?;

    let mut bytes = Vec::new();
    match options.format {
        StlFormat::Binary => mesh.write_binary_stl(&mut bytes)?,
        StlFormat::Ascii => mesh.write_ascii_stl(&mut bytes, "frame")?,
    }
    info!(
        "Exported {} ({} triangles, {} bytes)",
        file_name,
        mesh.triangle_count(),
        bytes.len()
    );

    Ok(StlExport {
        file_name,
        bytes,
        triangle_count: mesh.triangle_count(),
    })
}
