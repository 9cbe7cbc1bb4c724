//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Session;
use crate::{
    catalog::FlowCatalog,
    error::{Result, ResultExt},
    models::FlowId,
};

/// Builder for creating and configuring Session instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    catalog: Option<FlowCatalog>,
    catalog_path: Option<PathBuf>,
    selection: Vec<FlowId>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already-loaded catalog instead of resolving one.
    pub fn with_catalog(mut self, catalog: FlowCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets a custom catalog file path.
    ///
    /// If neither this nor [`with_catalog`](Self::with_catalog) is given,
    /// the XDG config file is used when present, falling back to the
    /// built-in catalog.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the selected flow ids (order does not matter).
    pub fn with_selection<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = FlowId>,
    {
        self.selection = ids.into_iter().collect();
        self
    }

    /// Builds the configured session.
    ///
    /// # Errors
    ///
    /// Returns the catalog's load/parse errors, `EmptySelection` when no
    /// flows were chosen, `UnknownFlow` or `ExclusiveConflict` when the
    /// selection is invalid.
    pub async fn build(self) -> Result<Session> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => {
                let path = self.catalog_path;
                task::spawn_blocking(move || FlowCatalog::resolve(path.as_deref()))
                    .await
                    .with_context("Task join error")??
            }
        };
        let selection = catalog.validate_selection(self.selection)?;
        Session::new(catalog, selection)
    }
}
