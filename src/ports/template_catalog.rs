//! Template catalog port definition.

use crate::domain::CatalogTemplate;

/// Trait for accessing the discovered template catalog.
///
/// Implementations keep templates in discovery order, since that order is
/// the tie-break during ranking.
pub trait TemplateCatalog {
    /// All templates in discovery order.
    fn templates(&self) -> &[CatalogTemplate];

    /// Get a template by name.
    fn get(&self, name: &str) -> Option<&CatalogTemplate>;

    /// All template names in discovery order.
    fn names(&self) -> Vec<&str> {
        self.templates().iter().map(|t| t.name()).collect()
    }
}
