use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Language;
use crate::domain::template::OptimizationFlags;

/// Coarse structure axis template authors advertise via tags or names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Advanced,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Basic => "basic",
            Complexity::Advanced => "advanced",
        }
    }

    /// Parse a user-supplied complexity name.
    pub fn from_name(name: &str) -> Option<Complexity> {
        match name.to_lowercase().as_str() {
            "basic" => Some(Complexity::Basic),
            "advanced" => Some(Complexity::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A partial description of the desired template.
///
/// Unset fields do not constrain the match; an all-default value scores
/// every template at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionCriteria {
    pub language: Option<Language>,
    /// Each `true` flag is a request; `false` means "not requested",
    /// never "must not have".
    pub optimization: OptimizationFlags,
    pub tags: Vec<String>,
    pub complexity: Option<Complexity>,
}

impl SelectionCriteria {
    /// Criteria synthesized from a detected language, for suggestion mode.
    ///
    /// Node-family scripts request every optimization so monorepo-ready
    /// templates rank above plain ones; other languages constrain on the
    /// language alone.
    pub fn for_language(language: Language) -> Self {
        let optimization = if language.is_node_family() {
            OptimizationFlags {
                turbo_repo: true,
                hot_reload: true,
                shared_dependencies: true,
                build_caching: true,
            }
        } else {
            OptimizationFlags::default()
        };
        Self { language: Some(language), optimization, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_parses_case_insensitively() {
        assert_eq!(Complexity::from_name("Advanced"), Some(Complexity::Advanced));
        assert_eq!(Complexity::from_name("BASIC"), Some(Complexity::Basic));
        assert_eq!(Complexity::from_name("expert"), None);
    }

    #[test]
    fn node_family_synthesis_requests_every_optimization() {
        let criteria = SelectionCriteria::for_language(Language::TypeScript);
        assert_eq!(criteria.language, Some(Language::TypeScript));
        assert!(criteria.optimization.turbo_repo);
        assert!(criteria.optimization.hot_reload);
        assert!(criteria.optimization.shared_dependencies);
        assert!(criteria.optimization.build_caching);
    }

    #[test]
    fn other_languages_synthesize_language_only() {
        let criteria = SelectionCriteria::for_language(Language::Python);
        assert_eq!(criteria.language, Some(Language::Python));
        assert_eq!(criteria.optimization, OptimizationFlags::default());
        assert!(criteria.tags.is_empty());
        assert!(criteria.complexity.is_none());
    }
}
