//! Ranking and best-match selection over a loaded catalog.

use serde::Serialize;

use crate::domain::selection::criteria::SelectionCriteria;
use crate::domain::selection::score::{ScoreBreakdown, score_template};
use crate::domain::template::CatalogTemplate;

/// One catalog entry with the score and rationale it earned.
///
/// Disposable: built fresh per (catalog, criteria) pair and recomputed
/// whenever criteria change, never adjusted incrementally.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTemplate {
    pub template: CatalogTemplate,
    pub score: u32,
    pub reasons: Vec<String>,
}

impl ScoredTemplate {
    /// Wrap an entry without rating it, for listings where no criteria
    /// apply (for instance after language detection came up empty).
    pub fn unscored(template: CatalogTemplate) -> Self {
        Self { template, score: 0, reasons: Vec::new() }
    }
}

/// Score every entry and order descending by score.
///
/// The sort must stay stable: catalog order encodes source priority, and it
/// is the tie-break between equally rated templates.
pub fn rank(catalog: &[CatalogTemplate], criteria: &SelectionCriteria) -> Vec<ScoredTemplate> {
    let mut ranked: Vec<ScoredTemplate> = catalog
        .iter()
        .map(|entry| {
            let ScoreBreakdown { score, reasons } = score_template(&entry.metadata, criteria);
            ScoredTemplate { template: entry.clone(), score, reasons }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// The top-ranked entry, only when it scored strictly above zero.
///
/// `None` means "no suitable template"; callers present that instead of
/// falling back to an arbitrary entry.
pub fn select_best(
    catalog: &[CatalogTemplate],
    criteria: &SelectionCriteria,
) -> Option<ScoredTemplate> {
    rank(catalog, criteria).into_iter().next().filter(|best| best.score > 0)
}
