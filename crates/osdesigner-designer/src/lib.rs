//! # OS Designer
//!
//! Grid placement engine and frame geometry export for open-source organizer
//! panels. A panel is a grid of 40 mm cells with screw holes at every grid
//! line intersection; rectangular shapes are placed on whole cells and the
//! surrounding frame is exported as an SVG outline or an STL solid.
//!
//! ## Core Components
//!
//! - **Grid**: configuration, validation and the cell to millimetre mapping
//! - **Catalog / Library**: unplaced shapes and reusable named templates
//! - **Placement**: bounds and overlap checks, place/move/remove
//! - **Screw holes**: hole visibility derived from the current placements
//! - **Export**: SVG frame outline, CSG frame solid, STL serialization
//! - **Files**: project and library JSON formats
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (one open design)
//!   ├── GridConfig
//!   ├── ShapeCatalog ──place──> PlacementEngine ──derive──> ScrewHoleMap
//!   ├── ShapeLibrary
//!   └── EventDispatcher
//!
//! GridConfig ──> svg_export ──> SVG
//!            └─> SolidProgram ──SolidKernel──> Mesh3D ──> STL
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use osdesigner_designer::{Confirmation, DesignerState};
//! use osdesigner_core::Orientation;
//!
//! let mut state = DesignerState::new();
//! let id = state.create_shape(2, 3, Some("#3498db"), Orientation::Vertical)?;
//! state.place_from_catalog(id, 0, 0)?;
//! let svg = state.export_svg();
//! ```

pub mod catalog;
pub mod export_worker;
pub mod grid;
pub mod library;
pub mod mesh;
pub mod palette;
pub mod placement;
pub mod screw_holes;
pub mod serialization;
pub mod shapes;
pub mod solid;
pub mod svg_export;

// Document state
pub mod designer_state;

pub use catalog::ShapeCatalog;
pub use export_worker::{ExportHandle, ExportJob, ExportOutcome, ExportOutput, ExportWorker, GridSnapshot};
pub use grid::{ApplyOutcome, GridConfig, ProjectInfo};
pub use library::{LibraryEntry, ShapeLibrary};
pub use mesh::{Mesh3D, Triangle3D};
pub use palette::{default_palette, normalize_palette, PALETTE_SIZE};
pub use placement::PlacementEngine;
pub use screw_holes::{PerimeterPosition, ScrewHole, ScrewHoleMap};
pub use serialization::{LibraryFile, ProjectFile, ProjectSettings};
pub use shapes::{CatalogShape, LibraryShape, PlacedShape};
pub use solid::{
    build_frame_mesh, default_kernel, export_frame_stl, SolidKernel, SolidProgram, StlExport,
    StlFormat, StlOptions,
};
pub use svg_export::{export_frame_svg, svg_file_name};

pub use designer_state::{Confirmation, DesignerState};
