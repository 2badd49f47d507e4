//! Priority-ordered merge of catalog roots plus the bundled fallback.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::{AppError, CatalogTemplate, Diagnostics};
use crate::ports::TemplateCatalog;
use crate::services::catalog_embedded::load_bundled_templates;
use crate::services::catalog_filesystem::scan_catalog_root;

/// The catalog assembled from every configured root.
///
/// Roots are scanned in priority order and the bundled templates come last;
/// the first occurrence of a template name wins and later ones are shadowed.
/// Templates stay in discovery order, which ranking uses as its tie-break.
pub struct MergedCatalog {
    templates: Vec<CatalogTemplate>,
}

impl MergedCatalog {
    /// Scan `roots` in priority order, then append the bundled templates.
    pub fn load(roots: &[PathBuf], diagnostics: &mut Diagnostics) -> Result<Self, AppError> {
        let mut catalog = Self { templates: Vec::new() };
        let mut seen = BTreeSet::new();

        for root in roots {
            for template in scan_catalog_root(root, diagnostics) {
                catalog.admit(template, &mut seen, diagnostics);
            }
        }
        for template in load_bundled_templates()? {
            catalog.admit(template, &mut seen, diagnostics);
        }

        Ok(catalog)
    }

    /// Build a catalog from already-loaded templates, first-wins by name.
    pub fn from_templates(templates: Vec<CatalogTemplate>) -> Self {
        let mut catalog = Self { templates: Vec::new() };
        let mut seen = BTreeSet::new();
        let mut diagnostics = Diagnostics::default();
        for template in templates {
            catalog.admit(template, &mut seen, &mut diagnostics);
        }
        catalog
    }

    fn admit(
        &mut self,
        template: CatalogTemplate,
        seen: &mut BTreeSet<String>,
        diagnostics: &mut Diagnostics,
    ) {
        if seen.contains(template.name()) {
            diagnostics.push_warning(
                template.path.display().to_string(),
                format!("template '{}' shadowed by a higher-priority root", template.name()),
            );
            return;
        }
        seen.insert(template.name().to_string());
        self.templates.push(template);
    }
}

impl TemplateCatalog for MergedCatalog {
    fn templates(&self) -> &[CatalogTemplate] {
        &self.templates
    }

    fn get(&self, name: &str) -> Option<&CatalogTemplate> {
        self.templates.iter().find(|t| t.name() == name)
    }
}
