//! Phase enumeration for capture steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of checklist phases.
///
/// `Before` and `Cleaning` are declared by catalog data; `After` is never
/// declared; it is synthesized by replaying the `Before` labels at the end
/// of the queue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    /// Initial state photos, taken before any work starts
    Before,

    /// Optional in-progress photos during cleaning (flow-dependent)
    Cleaning,

    /// Final state photos mirroring the `Before` labels
    After,
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BEFORE" => Ok(Phase::Before),
            "CLEANING" => Ok(Phase::Cleaning),
            "AFTER" => Ok(Phase::After),
            _ => Err(format!("Invalid phase: {s}")),
        }
    }
}

impl Phase {
    /// Convert to the canonical wire/data representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Before => "BEFORE",
            Phase::Cleaning => "CLEANING",
            Phase::After => "AFTER",
        }
    }

    /// Localized heading used in reports and step prompts.
    pub fn heading(&self) -> &'static str {
        match self {
            Phase::Before => "ANTES",
            Phase::Cleaning => "LIMPIEZA",
            Phase::After => "DESPUÉS",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.heading())
    }
}
