//! Flow catalog: the data-driven definition of available service flows.
//!
//! The catalog is configuration, not code. A built-in catalog ships as an
//! embedded JSON asset; deployments may override it wholesale with a JSON
//! file passed explicitly or placed in the XDG config directory. Labels
//! and titles are therefore swappable (localization) without touching the
//! queue builder or the composer.
//!
//! Declaration order in the catalog is the priority order used to
//! sequence multiple selected flows deterministically.

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::models::{FlowDefinition, FlowId};

/// Embedded default catalog.
const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Catalog of service flows plus their mutual-exclusivity pairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowCatalog {
    /// Flow definitions in priority order
    flows: Vec<FlowDefinition>,

    /// Declared conflict pairs: selecting both members is refused
    #[serde(default)]
    conflicts: Vec<(FlowId, FlowId)>,
}

impl FlowCatalog {
    /// Returns the built-in catalog embedded at compile time.
    ///
    /// # Panics
    ///
    /// Panics if the embedded asset is not valid catalog JSON, which a
    /// unit test guards against.
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_CATALOG).expect("embedded catalog asset must be valid")
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReportError::file_system(path, e))?;
        let catalog: Self = serde_json::from_str(&content)?;
        catalog.check_integrity()?;
        debug!("Loaded catalog with {} flows from {}", catalog.flows.len(), path.display());
        Ok(catalog)
    }

    /// Resolves the catalog to use for a session.
    ///
    /// An explicit path wins; otherwise a user catalog found via the XDG
    /// Base Directory specification (`$XDG_CONFIG_HOME/lustra/catalog.json`)
    /// is loaded; otherwise the built-in catalog is used.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let user_catalog = xdg::BaseDirectories::with_prefix("lustra").find_config_file("catalog.json");
        match user_catalog {
            Some(path) => Self::load(&path),
            None => Ok(Self::builtin()),
        }
    }

    /// All flows in priority order.
    pub fn flows(&self) -> &[FlowDefinition] {
        &self.flows
    }

    /// Looks up a flow definition by id.
    pub fn get(&self, id: &FlowId) -> Option<&FlowDefinition> {
        self.flows.iter().find(|f| &f.id == id)
    }

    /// Position of a flow in the priority order.
    ///
    /// Ids not present in the catalog sort to the end, stably.
    pub fn priority_index(&self, id: &FlowId) -> usize {
        self.flows
            .iter()
            .position(|f| &f.id == id)
            .unwrap_or(self.flows.len())
    }

    /// Validates a selection and returns it sorted by priority order.
    ///
    /// The selection is deduplicated first, so input ordering and
    /// repetition never affect the output. Rejects empty selections,
    /// unknown flow ids, and selections containing both members of a
    /// declared exclusivity pair. The conflict is refused here, never
    /// silently corrected.
    pub fn validate_selection<I>(&self, ids: I) -> Result<Vec<FlowId>>
    where
        I: IntoIterator<Item = FlowId>,
    {
        let unique: BTreeSet<FlowId> = ids.into_iter().collect();
        if unique.is_empty() {
            return Err(ReportError::EmptySelection);
        }
        for id in &unique {
            if self.get(id).is_none() {
                return Err(ReportError::UnknownFlow {
                    id: id.to_string(),
                });
            }
        }
        for (first, second) in &self.conflicts {
            if unique.contains(first) && unique.contains(second) {
                return Err(ReportError::ExclusiveConflict {
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }

        let mut sorted: Vec<FlowId> = unique.into_iter().collect();
        sorted.sort_by_key(|id| self.priority_index(id));
        Ok(sorted)
    }

    /// Structural checks applied to catalogs loaded from files.
    fn check_integrity(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for flow in &self.flows {
            if !seen.insert(&flow.id) {
                return Err(ReportError::Configuration {
                    message: format!("Duplicate flow id '{}' in catalog", flow.id),
                });
            }
        }
        for (first, second) in &self.conflicts {
            for id in [first, second] {
                if self.get(id).is_none() {
                    return Err(ReportError::Configuration {
                        message: format!("Conflict pair references unknown flow '{id}'"),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for FlowCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = FlowCatalog::builtin();
        assert_eq!(catalog.flows().len(), 4);
        assert!(catalog.get(&FlowId::from("interior_detailed")).is_some());
    }

    #[test]
    fn builtin_conflicts_reference_known_flows() {
        let catalog = FlowCatalog::builtin();
        catalog.check_integrity().expect("builtin catalog integrity");
    }

    #[test]
    fn selection_sorted_by_priority_regardless_of_input_order() {
        let catalog = FlowCatalog::builtin();
        let a = catalog
            .validate_selection([FlowId::from("exterior"), FlowId::from("interior")])
            .unwrap();
        let b = catalog
            .validate_selection([FlowId::from("interior"), FlowId::from("exterior")])
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a, vec![FlowId::from("interior"), FlowId::from("exterior")]);
    }

    #[test]
    fn empty_selection_is_refused() {
        let catalog = FlowCatalog::builtin();
        let result = catalog.validate_selection(Vec::<FlowId>::new());
        assert!(matches!(result, Err(ReportError::EmptySelection)));
    }

    #[test]
    fn unknown_flow_is_refused() {
        let catalog = FlowCatalog::builtin();
        let result = catalog.validate_selection([FlowId::from("engine_bay")]);
        assert!(matches!(result, Err(ReportError::UnknownFlow { .. })));
    }

    #[test]
    fn exclusive_pair_is_refused_not_corrected() {
        let catalog = FlowCatalog::builtin();
        let result = catalog.validate_selection([
            FlowId::from("interior"),
            FlowId::from("interior_detailed"),
        ]);
        assert!(matches!(result, Err(ReportError::ExclusiveConflict { .. })));
    }
}
