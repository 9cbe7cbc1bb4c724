//! Vehicle information collected after the checklist completes.

use serde::{Deserialize, Serialize};

/// Optional vehicle details shown on the report cover page.
///
/// Collected once per session, after the queue completes. Absent or empty
/// fields are simply omitted from rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleInfo {
    /// License plate, if provided
    pub plate: Option<String>,

    /// Vehicle model, if provided
    pub model: Option<String>,
}

impl VehicleInfo {
    /// Creates vehicle info, normalizing empty strings to `None`.
    pub fn new(plate: Option<String>, model: Option<String>) -> Self {
        Self {
            plate: plate.filter(|s| !s.trim().is_empty()),
            model: model.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Returns true when neither field carries a value.
    ///
    /// How the fields render on the cover (prefixes, joining) is report
    /// configuration, see `ReportStrings::vehicle_line`.
    pub fn is_empty(&self) -> bool {
        self.plate.is_none() && self.model.is_none()
    }
}
