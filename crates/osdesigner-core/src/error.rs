//! Error handling for OS Designer
//!
//! Provides the error types for every layer of the designer:
//! - Validation errors (user input out of range)
//! - Placement errors (unknown placement, violated placement precondition)
//! - Format errors (malformed project or library files)
//! - Dependency errors (solid-geometry engine not available)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Raised when user supplied values fall outside their allowed ranges.
/// The triggering operation is aborted without changing any state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Grid dimensions out of range
    #[error("Grid size must be between {min} and {max} (got {width}x{height})")]
    GridSize {
        /// Requested width in grid units.
        width: i64,
        /// Requested height in grid units.
        height: i64,
        /// Smallest allowed size.
        min: u32,
        /// Largest allowed size.
        max: u32,
    },

    /// Screw diameter out of range
    #[error("Screw diameter must be between {min} and {max}mm (got {value})")]
    ScrewDiameter {
        /// Requested diameter in millimetres.
        value: f64,
        /// Smallest allowed diameter.
        min: f64,
        /// Largest allowed diameter.
        max: f64,
    },

    /// Border width out of range
    #[error("Outer frame widths must be between {min} and {max} cm (got {left_right} x {top_bottom})")]
    BorderWidth {
        /// Left/right border in centimetres.
        left_right: f64,
        /// Top/bottom border in centimetres.
        top_bottom: f64,
        /// Smallest allowed border.
        min: f64,
        /// Largest allowed border.
        max: f64,
    },

    /// Shape dimensions out of range for the current grid
    #[error("Width must be between 1 and {max_width}, height must be between 1 and {max_height} (got {width}x{height})")]
    ShapeDimensions {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
        /// Largest allowed width.
        max_width: u32,
        /// Largest allowed height.
        max_height: u32,
    },

    /// No color was supplied
    #[error("Please select a color")]
    MissingColor,

    /// No name was supplied for a library shape
    #[error("Please enter a name for the library shape")]
    MissingName,

    /// Panel thickness is not a positive finite number
    #[error("Panel thickness must be greater than 0mm (got {value})")]
    PanelThickness {
        /// Requested thickness in millimetres.
        value: f64,
    },
}

/// Placement error type
///
/// Represents failures of placement engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No placement carries the given id
    #[error("Placement {placement_id} not found")]
    NotFound {
        /// The unknown placement id.
        placement_id: u64,
    },

    /// A checked place/move found the target position occupied or out of bounds
    #[error("Cannot place {width}x{height} shape at ({x}, {y}): out of bounds or overlapping")]
    PreconditionViolated {
        /// Target column.
        x: i64,
        /// Target row.
        y: i64,
        /// Shape width in grid units.
        width: u32,
        /// Shape height in grid units.
        height: u32,
    },

    /// No catalog shape carries the given id
    #[error("Shape {shape_id} not found in catalog")]
    ShapeNotFound {
        /// The unknown shape id.
        shape_id: u64,
    },

    /// No library shape carries the given id
    #[error("Library shape {library_id} not found")]
    LibraryShapeNotFound {
        /// The unknown library id.
        library_id: u64,
    },
}

/// Format error type
///
/// Represents malformed project or library files. Imports that fail with a
/// format error leave the current document untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The file is not valid JSON or does not match the expected shape
    #[error("Invalid {kind} file: {reason}")]
    Malformed {
        /// The kind of file ("project" or "library").
        kind: String,
        /// The parser message.
        reason: String,
    },

    /// A required section is missing
    #[error("Invalid {kind} file format: missing '{section}'")]
    MissingSection {
        /// The kind of file ("project" or "library").
        kind: String,
        /// The missing key.
        section: String,
    },
}

/// Main error type for OS Designer
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// User input out of range
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A destructive action needs explicit confirmation
    #[error("Confirmation required: {action}")]
    ConfirmationRequired {
        /// Description of the destructive action.
        action: String,
    },

    /// Malformed project or library file
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Placement engine failure
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// An external capability needed by the operation is not available
    #[error("{capability} is not available")]
    DependencyUnavailable {
        /// The missing capability.
        capability: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a confirmation-required error for the given action
    pub fn confirmation_required(action: impl Into<String>) -> Self {
        Error::ConfirmationRequired {
            action: action.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if the operation was refused pending confirmation
    pub fn is_confirmation_required(&self) -> bool {
        matches!(self, Error::ConfirmationRequired { .. })
    }

    /// Check if this is a file format error
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Check if an external capability was missing
    pub fn is_dependency_unavailable(&self) -> bool {
        matches!(self, Error::DependencyUnavailable { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
