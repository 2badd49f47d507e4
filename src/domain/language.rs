use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of languages a template can target.
///
/// Adding a language is a compile-time change: the detector, scorer, and
/// bundled catalog all match exhaustively on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Plain JavaScript on the Node.js runtime.
    NodeJs,
    /// TypeScript (typed variant of the Node.js family).
    TypeScript,
    Python,
    Rust,
    Shell,
}

impl Language {
    /// All supported languages in canonical order.
    pub const ALL: [Language; 5] = [
        Language::NodeJs,
        Language::TypeScript,
        Language::Python,
        Language::Rust,
        Language::Shell,
    ];

    /// Identifier used in template metadata and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::NodeJs => "nodejs",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Shell => "shell",
        }
    }

    /// Parse a language from its identifier.
    pub fn from_name(name: &str) -> Option<Language> {
        match name.to_lowercase().as_str() {
            "nodejs" | "node" | "javascript" => Some(Language::NodeJs),
            "typescript" | "ts" => Some(Language::TypeScript),
            "python" | "py" => Some(Language::Python),
            "rust" | "rs" => Some(Language::Rust),
            "shell" | "sh" | "bash" => Some(Language::Shell),
            _ => None,
        }
    }

    /// Whether this language runs on the Node.js runtime family.
    ///
    /// The scorer prefers typed variants within the same family, and
    /// suggestion mode requests every optimization flag for family members.
    pub fn is_node_family(&self) -> bool {
        matches!(self, Language::NodeJs | Language::TypeScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
