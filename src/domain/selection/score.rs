//! Pure scoring of one template against selection criteria.
//!
//! Checks are additive and independent, and run in a canonical order that
//! doubles as the reason order. Scoring the same pair twice yields an
//! identical breakdown; nothing is cached or mutated in place.

use crate::domain::Language;
use crate::domain::selection::criteria::{Complexity, SelectionCriteria};
use crate::domain::template::TemplateMetadata;

const LANGUAGE_MATCH: u32 = 100;
const TURBO_REPO: u32 = 20;
const HOT_RELOAD: u32 = 15;
const SHARED_DEPENDENCIES: u32 = 15;
const BUILD_CACHING: u32 = 10;
const TAG_MATCH: u32 = 5;
const COMPLEXITY_MATCH: u32 = 10;
/// Typed variant of the same runtime family: a TypeScript template offered
/// against a generic Node.js request.
const TYPED_FAMILY_BONUS: u32 = 25;

/// A score together with the ordered rationale that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub reasons: Vec<String>,
}

impl ScoreBreakdown {
    fn award(&mut self, points: u32, reason: String) {
        self.score += points;
        self.reasons.push(reason);
    }
}

/// Rate `metadata` against `criteria`.
pub fn score_template(metadata: &TemplateMetadata, criteria: &SelectionCriteria) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    if let Some(language) = criteria.language
        && language == metadata.language
    {
        breakdown.award(LANGUAGE_MATCH, format!("Language match: {}", language));
    }

    let requested = &criteria.optimization;
    let offered = &metadata.optimization;
    if requested.turbo_repo && offered.turbo_repo {
        breakdown.award(TURBO_REPO, "Supports TurboRepo optimization".to_string());
    }
    if requested.hot_reload && offered.hot_reload {
        breakdown.award(HOT_RELOAD, "Supports hot reload".to_string());
    }
    if requested.shared_dependencies && offered.shared_dependencies {
        breakdown.award(SHARED_DEPENDENCIES, "Supports shared dependencies".to_string());
    }
    if requested.build_caching && offered.build_caching {
        breakdown.award(BUILD_CACHING, "Supports build caching".to_string());
    }

    for tag in &criteria.tags {
        if metadata.has_tag(tag) {
            breakdown.award(TAG_MATCH, format!("Tag match: {}", tag));
        }
    }

    if let Some(complexity) = criteria.complexity
        && advertises_complexity(metadata, complexity)
    {
        breakdown.award(COMPLEXITY_MATCH, format!("Complexity match: {}", complexity));
    }

    if criteria.language == Some(Language::NodeJs) && metadata.language == Language::TypeScript {
        breakdown.award(TYPED_FAMILY_BONUS, "TypeScript template for Node.js family".to_string());
    }

    breakdown
}

/// A template advertises a complexity through an explicit tag or its name
/// (`typescript-turbo-advanced` counts as advanced without a tag).
fn advertises_complexity(metadata: &TemplateMetadata, complexity: Complexity) -> bool {
    metadata.has_tag(complexity.as_str()) || metadata.name.contains(complexity.as_str())
}
