//! Template select command - rank the catalog against explicit criteria.

use crate::domain::{AppError, ScoredTemplate, SelectionCriteria, rank, select_best};
use crate::ports::TemplateCatalog;

/// Rank the whole catalog against `criteria`, best first.
pub fn execute(
    catalog: &impl TemplateCatalog,
    criteria: &SelectionCriteria,
) -> Result<Vec<ScoredTemplate>, AppError> {
    Ok(rank(catalog.templates(), criteria))
}

/// The best match, or `None` when nothing scored above zero.
pub fn execute_best(
    catalog: &impl TemplateCatalog,
    criteria: &SelectionCriteria,
) -> Result<Option<ScoredTemplate>, AppError> {
    Ok(select_best(catalog.templates(), criteria))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Complexity, Language};
    use crate::services::{MergedCatalog, load_bundled_templates};

    fn bundled_only() -> MergedCatalog {
        MergedCatalog::from_templates(load_bundled_templates().unwrap())
    }

    #[test]
    fn turbo_criteria_pick_the_turbo_template() {
        let catalog = bundled_only();
        let criteria = SelectionCriteria::for_language(Language::TypeScript);

        let best = execute_best(&catalog, &criteria).unwrap().unwrap();
        assert_eq!(best.template.name(), "typescript-turbo");
        assert!(best.reasons.contains(&"Supports TurboRepo optimization".to_string()));
    }

    #[test]
    fn complexity_basic_prefers_the_basic_variant() {
        let catalog = bundled_only();
        let criteria = SelectionCriteria {
            language: Some(Language::TypeScript),
            complexity: Some(Complexity::Basic),
            ..Default::default()
        };

        let best = execute_best(&catalog, &criteria).unwrap().unwrap();
        assert_eq!(best.template.name(), "typescript-basic");
    }

    #[test]
    fn empty_criteria_select_nothing() {
        let catalog = bundled_only();
        assert!(execute_best(&catalog, &SelectionCriteria::default()).unwrap().is_none());
    }

    #[test]
    fn ranked_list_covers_the_whole_catalog() {
        let catalog = bundled_only();
        let ranked =
            execute(&catalog, &SelectionCriteria::for_language(Language::Python)).unwrap();

        assert_eq!(ranked.len(), catalog.templates().len());
        assert_eq!(ranked[0].template.name(), "python-basic");
    }
}
