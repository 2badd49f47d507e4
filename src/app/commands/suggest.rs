//! Template suggest command - ranked suggestions for a script.

use std::path::Path;

use crate::domain::{AppError, Language, ScoredTemplate, SelectionCriteria, rank};
use crate::ports::TemplateCatalog;
use crate::services::probe_script;

/// What suggestion found: the detected language and the list to present.
#[derive(Debug)]
pub struct Suggestion {
    pub language: Option<Language>,
    pub templates: Vec<ScoredTemplate>,
}

/// Suggest templates for `script`.
///
/// When detection comes up empty the full catalog is returned unscored;
/// the caller still needs a list to offer a human, just without a ranking.
pub fn execute(catalog: &impl TemplateCatalog, script: &Path) -> Result<Suggestion, AppError> {
    let language = probe_script(script);

    let templates = match language {
        Some(language) => {
            rank(catalog.templates(), &SelectionCriteria::for_language(language))
        }
        None => catalog.templates().iter().cloned().map(ScoredTemplate::unscored).collect(),
    };

    Ok(Suggestion { language, templates })
}
