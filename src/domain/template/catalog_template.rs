use std::path::PathBuf;

use serde::Serialize;

use crate::domain::template::TemplateMetadata;

/// One discovered template: its parsed metadata plus where it lives.
///
/// A read-only snapshot taken during a catalog scan. `path` points at the
/// template directory; for bundled templates it is the directory path inside
/// the embedded asset tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogTemplate {
    pub metadata: TemplateMetadata,
    pub path: PathBuf,
}

impl CatalogTemplate {
    pub fn new(metadata: TemplateMetadata, path: PathBuf) -> Self {
        Self { metadata, path }
    }

    /// The template's unique name within the catalog.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
