//! podsmith: Select MCP server pod templates and validate their variables.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};

use app::{
    AppContext,
    commands::{list, select, suggest, validate},
};
use services::MergedCatalog;

pub use app::commands::list::{FileInfo, TemplateDetail, TemplateSummary, VariableInfo};
pub use app::commands::suggest::Suggestion;
pub use domain::{
    AppError, Complexity, Diagnostics, Language, ScoredTemplate, SelectionCriteria,
    ValidationReport, VariableError, VariableValues,
};

fn open_catalog(extra_roots: &[PathBuf]) -> Result<MergedCatalog, AppError> {
    let roots = app::config::resolve_catalog_roots(extra_roots)?;
    let mut diagnostics = Diagnostics::default();
    MergedCatalog::load(&roots, &mut diagnostics)
}

/// List templates in the merged catalog, optionally filtered by language.
pub fn list_templates(language: Option<Language>) -> Result<Vec<TemplateSummary>, AppError> {
    let catalog = open_catalog(&[])?;
    let ctx = AppContext::new(catalog);

    list::execute(ctx.catalog(), language)
}

/// Full metadata for a single template.
pub fn template_detail(name: &str) -> Result<TemplateDetail, AppError> {
    let catalog = open_catalog(&[])?;
    let ctx = AppContext::new(catalog);

    list::execute_detail(ctx.catalog(), name)
}

/// Score and rank the whole catalog against `criteria`, best first.
pub fn rank_templates(criteria: &SelectionCriteria) -> Result<Vec<ScoredTemplate>, AppError> {
    let catalog = open_catalog(&[])?;
    let ctx = AppContext::new(catalog);

    select::execute(ctx.catalog(), criteria)
}

/// Best-scoring template for `criteria`, if anything scored above zero.
pub fn select_template(criteria: &SelectionCriteria) -> Result<Option<ScoredTemplate>, AppError> {
    let catalog = open_catalog(&[])?;
    let ctx = AppContext::new(catalog);

    select::execute_best(ctx.catalog(), criteria)
}

/// Detect the language of `script` and rank templates for it.
///
/// When detection fails the suggestion carries the whole catalog unscored,
/// so callers can still present every template.
pub fn suggest_for_script(script: &Path) -> Result<Suggestion, AppError> {
    let catalog = open_catalog(&[])?;
    let ctx = AppContext::new(catalog);

    suggest::execute(ctx.catalog(), script)
}

/// Validate `values` against the variable schema of template `name`.
pub fn validate_values(name: &str, values: &VariableValues) -> Result<ValidationReport, AppError> {
    let catalog = open_catalog(&[])?;
    let ctx = AppContext::new(catalog);

    validate::execute(ctx.catalog(), name, values)
}
