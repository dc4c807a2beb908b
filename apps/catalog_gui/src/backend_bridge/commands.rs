//! Backend commands queued from UI to backend worker.

use catalog_core::CatalogSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadCatalog { source: CatalogSource },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadCatalog { .. } => "load_catalog",
        }
    }
}
