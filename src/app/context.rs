use crate::ports::TemplateCatalog;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: TemplateCatalog> {
    catalog: C,
}

impl<C: TemplateCatalog> AppContext<C> {
    /// Create a new application context.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Get a reference to the template catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
