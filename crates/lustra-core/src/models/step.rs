//! Capture step model.

use serde::{Deserialize, Serialize};

use super::{FlowId, Phase};

/// One position in the capture queue: a single labeled photo to take.
///
/// The `(flow, phase, step_index)` triple is the addressing key into the
/// image store and is unique within a queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptureStep {
    /// Flow this step belongs to
    pub flow: FlowId,

    /// Phase within the flow
    pub phase: Phase,

    /// Position of the step within its phase (0-indexed)
    pub step_index: usize,

    /// Label describing the photo to take
    pub label: String,
}

impl CaptureStep {
    /// Returns the store addressing key for this step.
    pub fn key(&self) -> (&FlowId, Phase, usize) {
        (&self.flow, self.phase, self.step_index)
    }
}
