//! Template metadata domain model and its `template.yml` parser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Language;
use crate::domain::template::variable::{TemplateVariable, VariableType};
use crate::domain::validation::compile_anchored_pattern;

/// Filename of the metadata document inside each template directory.
pub const METADATA_FILENAME: &str = "template.yml";

/// Shape violation in a template metadata document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document could not be deserialized; the message names the
    /// offending field or literal.
    #[error("Failed to parse template metadata: {0}")]
    Parse(String),

    /// Template name is not a safe identifier.
    #[error("Template name '{0}' must be alphanumeric with hyphens, underscores, or periods")]
    InvalidName(String),

    /// A variable default contradicts its declared type.
    #[error("Variable '{field}': default value does not match declared type '{expected}'")]
    DefaultTypeMismatch { field: String, expected: VariableType },

    /// A variable's validation pattern does not compile.
    #[error("Variable '{field}': invalid validation pattern: {details}")]
    InvalidPattern { field: String, details: String },
}

/// Build-tool capabilities a template supports, or a caller requests.
///
/// Serialized camelCase (`turboRepo`, `hotReload`, …) to match the authored
/// document vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationFlags {
    pub turbo_repo: bool,
    pub hot_reload: bool,
    pub shared_dependencies: bool,
    pub build_caching: bool,
}

impl OptimizationFlags {
    /// Names of the enabled flags, camelCase as authored in documents.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.turbo_repo {
            names.push("turboRepo");
        }
        if self.hot_reload {
            names.push("hotReload");
        }
        if self.shared_dependencies {
            names.push("sharedDependencies");
        }
        if self.build_caching {
            names.push("buildCaching");
        }
        names
    }
}

/// One file a template renders into the generated pod.
///
/// Parsed and displayed; rendering itself happens outside this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateFileSpec {
    /// Source file within the template directory.
    pub source: String,
    /// Destination path in the generated pod.
    pub destination: String,
}

/// Read-only snapshot of one template's metadata document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    /// Unique identifier within the catalog.
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub version: String,
    /// Target language; exactly one per template.
    pub language: Language,
    #[serde(default)]
    pub optimization: OptimizationFlags,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Declared parameters, keyed by variable name.
    #[serde(default)]
    pub variables: BTreeMap<String, TemplateVariable>,
    #[serde(default)]
    pub files: Vec<TemplateFileSpec>,
}

impl TemplateMetadata {
    /// Parse and shape-check a `template.yml` document.
    pub fn from_yaml(content: &str) -> Result<Self, SchemaError> {
        let metadata: TemplateMetadata =
            serde_yaml::from_str(content).map_err(|e| SchemaError::Parse(e.to_string()))?;
        metadata.ensure_well_formed()?;
        Ok(metadata)
    }

    /// Exact tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Structural checks beyond deserialization: identifier-safe name,
    /// defaults matching their declared type, compilable patterns.
    fn ensure_well_formed(&self) -> Result<(), SchemaError> {
        if !is_valid_template_name(&self.name) {
            return Err(SchemaError::InvalidName(self.name.clone()));
        }

        for (name, variable) in &self.variables {
            if let Some(default) = &variable.default
                && !variable.var_type.admits(default)
            {
                return Err(SchemaError::DefaultTypeMismatch {
                    field: name.clone(),
                    expected: variable.var_type,
                });
            }
            if let Some(pattern) = variable.validation.as_ref().and_then(|v| v.pattern.as_deref())
                && let Err(e) = compile_anchored_pattern(pattern)
            {
                return Err(SchemaError::InvalidPattern {
                    field: name.clone(),
                    details: e.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Template names become directory names; keep them path-safe.
fn is_valid_template_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}
