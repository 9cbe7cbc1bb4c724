//! Queue builder: linearizes selected flows into one ordered step sequence.
//!
//! Expansion rule: for each selected flow in priority order, every BEFORE
//! label becomes a step, then every CLEANING label (if declared). After
//! all flows' BEFORE/CLEANING steps, a second pass over the same flows in
//! the same order appends an AFTER step for every BEFORE label: the
//! "repeat the initial photos at the end" behavior.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::FlowCatalog;
use crate::error::{ReportError, Result};
use crate::models::{CaptureStep, FlowId, Phase};

/// Ordered sequence of capture steps for one session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Queue {
    steps: Vec<CaptureStep>,
}

impl Queue {
    /// All steps, in capture order.
    pub fn steps(&self) -> &[CaptureStep] {
        &self.steps
    }

    /// Number of steps in the queue.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true when the queue holds no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at a position, if within bounds.
    pub fn get(&self, index: usize) -> Option<&CaptureStep> {
        self.steps.get(index)
    }
}

/// Builds the capture queue for a validated selection.
///
/// `selection` must already be validated and priority-sorted by
/// [`FlowCatalog::validate_selection`]; this function is deterministic
/// with respect to it. An empty selection is refused. Flows without
/// BEFORE labels contribute no steps at all; BEFORE is the anchor phase
/// for AFTER synthesis.
pub fn build_queue(catalog: &FlowCatalog, selection: &[FlowId]) -> Result<Queue> {
    if selection.is_empty() {
        return Err(ReportError::EmptySelection);
    }
    let mut steps = Vec::new();

    for id in selection {
        let Some(flow) = catalog.get(id) else { continue };
        if flow.before.is_empty() {
            continue;
        }
        push_phase(&mut steps, id, Phase::Before, &flow.before);
        push_phase(&mut steps, id, Phase::Cleaning, &flow.cleaning);
    }

    // Second pass: replay the BEFORE labels as AFTER, same flow order,
    // same relative indices.
    for id in selection {
        let Some(flow) = catalog.get(id) else { continue };
        push_phase(&mut steps, id, Phase::After, &flow.before);
    }

    debug!("Built queue with {} steps for {} flow(s)", steps.len(), selection.len());
    Ok(Queue { steps })
}

fn push_phase(steps: &mut Vec<CaptureStep>, flow: &FlowId, phase: Phase, labels: &[String]) {
    for (step_index, label) in labels.iter().enumerate() {
        steps.push(CaptureStep {
            flow: flow.clone(),
            phase,
            step_index,
            label: label.clone(),
        });
    }
}
