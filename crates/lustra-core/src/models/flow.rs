//! Flow identifier and flow definition models.

use serde::{Deserialize, Serialize};

use super::Phase;

/// Identifier of a service flow (e.g. `interior`, `exterior_detailed`).
///
/// Flow ids are plain lowercase strings coming from catalog data. The
/// newtype keeps them from being confused with titles or labels and gives
/// them a stable ordering for use as map keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct FlowId(String);

impl FlowId {
    /// Creates a flow id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FlowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlowId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Definition of a named service flow.
///
/// Definitions are immutable once the catalog is loaded. A flow declares
/// its `BEFORE` labels and optionally `CLEANING` labels; the `AFTER` phase
/// is synthesized from `BEFORE` and never appears in catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowDefinition {
    /// Unique identifier of the flow
    pub id: FlowId,

    /// Human-readable title shown in reports and listings
    pub title: String,

    /// Ordered labels of the BEFORE phase (the anchor phase)
    pub before: Vec<String>,

    /// Ordered labels of the optional CLEANING phase
    #[serde(default)]
    pub cleaning: Vec<String>,
}

impl FlowDefinition {
    /// Returns the declared labels for a phase.
    ///
    /// `After` resolves to the `Before` labels, since the after phase
    /// replays them.
    pub fn labels(&self, phase: Phase) -> &[String] {
        match phase {
            Phase::Before | Phase::After => &self.before,
            Phase::Cleaning => &self.cleaning,
        }
    }

    /// Number of capture steps this flow contributes to a queue.
    ///
    /// A flow without BEFORE labels contributes nothing, even if it
    /// declares a cleaning phase: BEFORE anchors the AFTER synthesis.
    pub fn step_count(&self) -> usize {
        if self.before.is_empty() {
            return 0;
        }
        self.before.len() * 2 + self.cleaning.len()
    }
}
