//! Background export
//!
//! Runs SVG and STL generation on a worker thread so the document stays
//! responsive. Each job works on a [`GridSnapshot`] captured when it is
//! submitted, so later edits never reach an export in flight. The result is
//! delivered through a channel in one piece.
//!
//! Submitting a new preview cancels the previous one. A cancelled job still
//! finishes any kernel call in progress but reports
//! [`ExportOutcome::Cancelled`] instead of its result.

use crate::grid::GridConfig;
use crate::mesh::Mesh3D;
use crate::shapes::PlacedShape;
use crate::solid::{build_frame_mesh, export_frame_stl, SolidKernel, StlExport, StlOptions};
use crate::svg_export::{export_frame_svg, svg_file_name};
use osdesigner_core::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Immutable copy of the document state needed by an export
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    pub grid: GridConfig,
    pub placements: Vec<PlacedShape>,
}

/// Export job kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportJob {
    /// Frame outline
    Svg,
    /// Serialized STL file
    Stl(StlOptions),
    /// Mesh for on-screen preview; superseded by the next preview
    Preview(StlOptions),
}

/// Finished export
#[derive(Debug, Clone)]
pub enum ExportOutput {
    Svg {
        file_name: String,
        content: String,
    },
    Stl(StlExport),
    Preview(Mesh3D),
}

/// Result delivered by a job
#[derive(Debug)]
pub enum ExportOutcome {
    Completed(ExportOutput),
    /// A newer preview replaced this one, or it was cancelled explicitly
    Cancelled,
    Failed(Error),
}

impl ExportOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ExportOutcome::Cancelled)
    }

    /// Convert into a `Result`, treating cancellation as an error
    pub fn into_result(self) -> Result<ExportOutput> {
        match self {
            ExportOutcome::Completed(output) => Ok(output),
            ExportOutcome::Cancelled => Err(Error::other("Export cancelled")),
            ExportOutcome::Failed(err) => Err(err),
        }
    }
}

/// Handle to a submitted job
#[derive(Debug)]
pub struct ExportHandle {
    rx: Receiver<ExportOutcome>,
    cancel: Arc<AtomicBool>,
}

impl ExportHandle {
    /// Request cancellation
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Block until the job finishes
    pub fn wait(self) -> ExportOutcome {
        self.rx
            .recv()
            .unwrap_or_else(|_| ExportOutcome::Failed(Error::other("Export worker terminated")))
    }

    /// Poll for the result without blocking
    pub fn try_result(&self) -> Option<ExportOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(ExportOutcome::Failed(Error::other(
                "Export worker terminated",
            ))),
        }
    }
}

/// Spawns export jobs on background threads
pub struct ExportWorker {
    kernel: Arc<dyn SolidKernel>,
    preview_token: Option<Arc<AtomicBool>>,
}

impl ExportWorker {
    pub fn new(kernel: Arc<dyn SolidKernel>) -> Self {
        Self {
            kernel,
            preview_token: None,
        }
    }

    /// Start `job` on a snapshot
    pub fn submit(&mut self, snapshot: GridSnapshot, job: ExportJob) -> ExportHandle {
        let cancel = Arc::new(AtomicBool::new(false));

        if let ExportJob::Preview(_) = job {
            if let Some(previous) = self.preview_token.replace(cancel.clone()) {
                debug!("Cancelling superseded preview");
                previous.store(true, Ordering::SeqCst);
            }
        }

        let (tx, rx) = mpsc::channel();
        let kernel = self.kernel.clone();
        let token = cancel.clone();

        thread::spawn(move || {
            let outcome = if token.load(Ordering::SeqCst) {
                ExportOutcome::Cancelled
            } else {
                match run_job(&snapshot, job, kernel.as_ref()) {
                    Ok(_) if token.load(Ordering::SeqCst) => ExportOutcome::Cancelled,
                    Ok(output) => ExportOutcome::Completed(output),
                    Err(err) => {
                        warn!("Export failed: {}", err);
                        ExportOutcome::Failed(err)
                    }
                }
            };
            let _ = tx.send(outcome);
        });

        ExportHandle { rx, cancel }
    }
}

/// Run a job synchronously
pub fn run_job(
    snapshot: &GridSnapshot,
    job: ExportJob,
    kernel: &dyn SolidKernel,
) -> Result<ExportOutput> {
    let grid = &snapshot.grid;
    match job {
        ExportJob::Svg => Ok(ExportOutput::Svg {
            file_name: svg_file_name(grid),
            content: export_frame_svg(grid),
        }),
        ExportJob::Stl(options) => Ok(ExportOutput::Stl(export_frame_stl(grid, &options, kernel)?)),
        ExportJob::Preview(options) => {
            Ok(ExportOutput::Preview(build_frame_mesh(grid, &options, kernel)?))
        }
    }
}
