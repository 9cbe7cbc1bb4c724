//! Parameter structures for checklist operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, others later) without framework-specific
//! derives or dependencies.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! Interface layers define wrapper structs with their framework derives
//! (clap's `Args` for the CLI) and convert to these core parameters via
//! `From`/`Into`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde only)    │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Core structures carry plain strings for flow ids; conversion to
//! [`FlowId`] happens at the session boundary so parse-level code stays
//! free of domain types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{FlowId, VehicleInfo};

/// Parameters selecting one or more service flows.
///
/// Used by the steps listing and as part of [`RunReport`]. Order and
/// duplicates do not matter; validation and priority ordering happen in
/// the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectFlows {
    /// Raw flow ids as entered by the operator
    pub flows: Vec<String>,
}

impl SelectFlows {
    /// Converts the raw ids into typed flow ids.
    pub fn flow_ids(&self) -> Vec<FlowId> {
        self.flows.iter().map(FlowId::new).collect()
    }
}

/// Parameters for a full documentation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Selected service flows
    pub selection: SelectFlows,

    /// Directory holding the photos, consumed in sorted filename order
    pub photos_dir: PathBuf,

    /// Target path of the PDF; defaults to a timestamped name in the
    /// current directory when absent
    pub output: Option<PathBuf>,

    /// License plate for the cover page
    pub plate: Option<String>,

    /// Vehicle model for the cover page
    pub model: Option<String>,

    /// Open the PDF with the system viewer after writing it
    pub open: bool,

    /// Copy the PDF path to the clipboard after writing it
    pub share: bool,
}

impl RunReport {
    /// Vehicle info assembled from the optional cover-page fields.
    pub fn vehicle_info(&self) -> VehicleInfo {
        VehicleInfo::new(self.plate.clone(), self.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_flows_maps_raw_ids() {
        let params = SelectFlows {
            flows: vec!["interior".to_string(), "exterior".to_string()],
        };
        let ids = params.flow_ids();
        assert_eq!(ids, [FlowId::new("interior"), FlowId::new("exterior")]);
    }

    #[test]
    fn run_report_normalizes_vehicle_fields() {
        let params = RunReport {
            plate: Some("  ".to_string()),
            model: Some("Seat León".to_string()),
            ..RunReport::default()
        };
        let vehicle = params.vehicle_info();
        assert!(vehicle.plate.is_none());
        assert_eq!(vehicle.model.as_deref(), Some("Seat León"));
    }
}
