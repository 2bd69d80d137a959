//! # OS Designer Core
//!
//! Core types shared by every OS Designer crate:
//! - the error taxonomy used by all mutating operations
//! - grid unit constants and millimetre conversions
//! - document events published after each state change

pub mod error;
pub mod event;
pub mod units;

pub use error::{Error, FormatError, PlacementError, Result, ValidationError};
pub use event::{DocumentEvent, EventDispatcher};
pub use units::{Axis, Orientation};
