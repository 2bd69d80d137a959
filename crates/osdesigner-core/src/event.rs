//! Document event system
//!
//! Provides:
//! - Event types for every mutation of a designer document
//! - Event dispatcher for publishing events to subscribers
//!
//! Observers re-derive screw-hole visibility and previews from the document
//! whenever an event arrives; events never carry incremental patches.

use tokio::sync::broadcast;

/// Document event types
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    /// Grid configuration applied
    GridConfigChanged {
        /// True when placements and the catalog were reset.
        reset: bool,
    },
    /// Shape added to the catalog
    ShapeCreated(u64),
    /// Shape removed from the catalog
    ShapeDeleted(u64),
    /// Shape added to the library
    LibraryChanged,
    /// Shape placed on the grid
    ShapePlaced {
        /// Placement id.
        placement_id: u64,
        /// Column of the shape origin.
        x: u32,
        /// Row of the shape origin.
        y: u32,
    },
    /// Placement moved
    ShapeMoved {
        /// Placement id.
        placement_id: u64,
        /// New column.
        x: u32,
        /// New row.
        y: u32,
    },
    /// Placement removed from the grid
    ShapeRemoved(u64),
    /// All placements removed
    GridCleared(usize),
    /// Palette colours replaced
    PaletteChanged,
    /// Project loaded from a file
    ProjectLoaded,
}

impl std::fmt::Display for DocumentEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentEvent::GridConfigChanged { reset } => {
                write!(f, "Grid configuration changed (reset: {})", reset)
            }
            DocumentEvent::ShapeCreated(id) => write!(f, "Shape {} created", id),
            DocumentEvent::ShapeDeleted(id) => write!(f, "Shape {} deleted", id),
            DocumentEvent::LibraryChanged => write!(f, "Library changed"),
            DocumentEvent::ShapePlaced { placement_id, x, y } => {
                write!(f, "Placement {} at ({}, {})", placement_id, x, y)
            }
            DocumentEvent::ShapeMoved { placement_id, x, y } => {
                write!(f, "Placement {} moved to ({}, {})", placement_id, x, y)
            }
            DocumentEvent::ShapeRemoved(id) => write!(f, "Placement {} removed", id),
            DocumentEvent::GridCleared(count) => write!(f, "Grid cleared ({} shapes)", count),
            DocumentEvent::PaletteChanged => write!(f, "Palette changed"),
            DocumentEvent::ProjectLoaded => write!(f, "Project loaded"),
        }
    }
}

/// Event dispatcher for publishing events to subscribers
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    tx: broadcast::Sender<DocumentEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<DocumentEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of subscribers that received it. Publishing with
    /// no subscribers is not an error for a document.
    pub fn publish(&self, event: DocumentEvent) -> usize {
        tracing::trace!("document event: {}", event);
        self.tx.send(event).unwrap_or(0)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(100)
    }
}
