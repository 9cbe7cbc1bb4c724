//! Capture session: the single session-scoped context object.
//!
//! A [`Session`] owns the catalog, the step queue, the image store, the
//! cursor, and the optional vehicle info for one documentation run. It is
//! the central coordinator between the capture front end and the report
//! composer, keeping all session state behind one handle:
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌──────────────┐
//! │  Capture UI  │───▶│    Session    │───▶│   Composer   │
//! │  (CLI loop)  │    │ queue + store │    │  (report::)  │
//! └──────────────┘    └───────────────┘    └──────────────┘
//! ```
//!
//! Exclusive ownership replaces locking: every mutating operation takes
//! `&mut self`, so the single-writer assumption of the design is a
//! borrow-checker fact rather than a convention.

pub mod builder;

#[cfg(test)]
mod tests;

use log::info;
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::catalog::FlowCatalog;
use crate::error::{ReportError, Result, ResultExt};
use crate::models::{CaptureStep, CapturedPhoto, FlowId, PhotoData, VehicleInfo};
use crate::queue::{build_queue, Queue};
use crate::report::{compose, ComposedReport, ReportOptions};
use crate::store::ImageStore;

pub use builder::SessionBuilder;

/// Capture progress: how far along the queue the session is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    /// Steps confirmed so far
    pub completed: usize,

    /// Total steps in the queue
    pub total: usize,
}

impl Progress {
    /// Returns true when every step has been visited.
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

/// One documentation session: selection, queue, store, cursor, vehicle.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: FlowCatalog,
    selection: Vec<FlowId>,
    queue: Queue,
    store: ImageStore,
    cursor: usize,
    vehicle: VehicleInfo,
}

impl Session {
    /// Creates a builder for configuring a new session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub(crate) fn new(catalog: FlowCatalog, selection: Vec<FlowId>) -> Result<Self> {
        let queue = build_queue(&catalog, &selection)?;
        let mut store = ImageStore::new();
        store.rebuild(&catalog, &selection);
        info!(
            "Session started: {} flow(s), {} step(s)",
            selection.len(),
            queue.len()
        );
        Ok(Self {
            catalog,
            selection,
            queue,
            store,
            cursor: 0,
            vehicle: VehicleInfo::default(),
        })
    }

    /// The catalog this session was built against.
    pub fn catalog(&self) -> &FlowCatalog {
        &self.catalog
    }

    /// Validated selection, in priority order.
    pub fn selection(&self) -> &[FlowId] {
        &self.selection
    }

    /// The linearized capture queue.
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// The image store backing this session.
    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Current capture progress.
    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.cursor,
            total: self.queue.len(),
        }
    }

    /// Steps not yet visited.
    pub fn remaining(&self) -> usize {
        self.queue.len().saturating_sub(self.cursor)
    }

    /// Returns true once the queue is exhausted.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    /// The step waiting for a capture, or `None` when complete.
    pub fn current_step(&self) -> Option<&CaptureStep> {
        self.queue.get(self.cursor)
    }

    /// Confirms a capture for the current head of the queue.
    ///
    /// Writes the photo into the store slot addressed by the current
    /// step and advances the cursor. The cursor only moves on success;
    /// a photo that failed to load upstream never reaches this method,
    /// so the operator re-attempts the same step.
    pub fn record_capture(&mut self, photo: PhotoData) -> Result<Progress> {
        let Some(step) = self.queue.get(self.cursor) else {
            return Err(ReportError::QueueExhausted);
        };
        let capture = CapturedPhoto {
            label: step.label.clone(),
            photo,
        };
        self.store
            .record(&step.flow, step.phase, step.step_index, capture);
        self.cursor += 1;
        Ok(self.progress())
    }

    /// Replaces the selection mid-session.
    ///
    /// Rebuilds the queue and store: captured slots of flows that remain
    /// selected are preserved, entries of deselected flows discarded, and
    /// the cursor restarts at the head of the new queue.
    pub fn reselect<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = FlowId>,
    {
        let selection = self.catalog.validate_selection(ids)?;
        self.queue = build_queue(&self.catalog, &selection)?;
        self.store.rebuild(&self.catalog, &selection);
        self.selection = selection;
        self.cursor = 0;
        Ok(())
    }

    /// Attaches vehicle info for the cover page.
    pub fn set_vehicle_info(&mut self, vehicle: VehicleInfo) {
        self.vehicle = vehicle;
    }

    /// Vehicle info collected so far.
    pub fn vehicle_info(&self) -> &VehicleInfo {
        &self.vehicle
    }

    /// Composes the final PDF report from the completed image store.
    ///
    /// Fails with [`ReportError::IncompleteSession`] while steps remain.
    /// Composition is CPU-bound and runs on the blocking pool.
    pub async fn compose_report(&self, options: ReportOptions) -> Result<ComposedReport> {
        if !self.is_complete() {
            return Err(ReportError::IncompleteSession {
                remaining: self.remaining(),
            });
        }
        let catalog = self.catalog.clone();
        let selection = self.selection.clone();
        let store = self.store.clone();
        let vehicle = self.vehicle.clone();
        task::spawn_blocking(move || compose(&catalog, &selection, &store, &vehicle, &options))
            .await
            .with_context("Task join error")?
    }
}
