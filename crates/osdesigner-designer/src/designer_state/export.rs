//! Geometry export for designer state.

use super::DesignerState;
use crate::mesh::Mesh3D;
use crate::solid::{build_frame_mesh, default_kernel, export_frame_stl, SolidKernel, StlExport, StlOptions};
use crate::svg_export::{export_frame_svg, svg_file_name};
use osdesigner_core::Result;

impl DesignerState {
    /// Frame outline as an SVG document
    pub fn export_svg(&self) -> String {
        export_frame_svg(&self.grid)
    }

    pub fn svg_file_name(&self) -> String {
        svg_file_name(&self.grid)
    }

    /// Frame solid as a mesh, evaluated with `kernel`
    pub fn frame_mesh(&self, options: &StlOptions, kernel: &dyn SolidKernel) -> Result<Mesh3D> {
        build_frame_mesh(&self.grid, options, kernel)
    }

    /// Frame solid as STL using the built-in kernel.
    ///
    /// Fails with `DependencyUnavailable` when no solid engine is compiled in.
    pub fn export_stl(&self, options: &StlOptions) -> Result<StlExport> {
        let kernel = default_kernel()?;
        self.export_stl_with(options, kernel.as_ref())
    }

    /// Frame solid as STL using `kernel`
    pub fn export_stl_with(&self, options: &StlOptions, kernel: &dyn SolidKernel) -> Result<StlExport> {
        export_frame_stl(&self.grid, options, kernel)
    }
}
