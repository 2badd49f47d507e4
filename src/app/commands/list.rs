//! Template list command - catalog summaries and per-template detail.

use serde_json::Value;

use crate::domain::{AppError, Language};
use crate::ports::TemplateCatalog;

/// Summary row for one template.
#[derive(Debug, Clone)]
pub struct TemplateSummary {
    pub name: String,
    pub description: String,
    pub version: String,
    pub language: Language,
    pub tags: Vec<String>,
}

/// Detailed information for one template.
#[derive(Debug, Clone)]
pub struct TemplateDetail {
    pub name: String,
    pub description: String,
    pub version: String,
    pub language: Language,
    pub location: String,
    pub optimizations: Vec<&'static str>,
    pub tags: Vec<String>,
    pub variables: Vec<VariableInfo>,
    pub files: Vec<FileInfo>,
}

/// One declared variable, flattened for display.
#[derive(Debug, Clone)]
pub struct VariableInfo {
    pub name: String,
    pub description: String,
    pub var_type: &'static str,
    pub required: bool,
    pub default: Option<Value>,
    pub constraints: Vec<String>,
}

/// One file descriptor from the template's manifest.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub source: String,
    pub destination: String,
}

/// List the catalog, optionally narrowed to one language.
pub fn execute(
    catalog: &impl TemplateCatalog,
    language: Option<Language>,
) -> Result<Vec<TemplateSummary>, AppError> {
    Ok(catalog
        .templates()
        .iter()
        .filter(|t| language.is_none_or(|l| t.metadata.language == l))
        .map(|t| TemplateSummary {
            name: t.metadata.name.clone(),
            description: t.metadata.description.clone(),
            version: t.metadata.version.clone(),
            language: t.metadata.language,
            tags: t.metadata.tags.clone(),
        })
        .collect())
}

/// Detailed information for a single template.
pub fn execute_detail(
    catalog: &impl TemplateCatalog,
    name: &str,
) -> Result<TemplateDetail, AppError> {
    let template = catalog.get(name).ok_or_else(|| AppError::TemplateNotFound {
        name: name.to_string(),
        available: catalog.names().join(", "),
    })?;
    let metadata = &template.metadata;

    let variables = metadata
        .variables
        .iter()
        .map(|(var_name, variable)| VariableInfo {
            name: var_name.clone(),
            description: variable.description.clone(),
            var_type: variable.var_type.as_str(),
            required: variable.required,
            default: variable.default.clone(),
            constraints: describe_constraints(variable),
        })
        .collect();

    Ok(TemplateDetail {
        name: metadata.name.clone(),
        description: metadata.description.clone(),
        version: metadata.version.clone(),
        language: metadata.language,
        location: template.path.display().to_string(),
        optimizations: metadata.optimization.enabled_names(),
        tags: metadata.tags.clone(),
        variables,
        files: metadata
            .files
            .iter()
            .map(|f| FileInfo { source: f.source.clone(), destination: f.destination.clone() })
            .collect(),
    })
}

fn describe_constraints(variable: &crate::domain::TemplateVariable) -> Vec<String> {
    let Some(rules) = &variable.validation else {
        return Vec::new();
    };

    let mut constraints = Vec::new();
    if let Some(pattern) = &rules.pattern {
        constraints.push(format!("pattern: {pattern}"));
    }
    if let Some(min) = rules.min {
        constraints.push(format!("min: {min}"));
    }
    if let Some(max) = rules.max {
        constraints.push(format!("max: {max}"));
    }
    if let Some(options) = &rules.options {
        constraints.push(format!("one of: {}", options.join(", ")));
    }
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MergedCatalog;

    fn bundled_only() -> MergedCatalog {
        MergedCatalog::from_templates(crate::services::load_bundled_templates().unwrap())
    }

    #[test]
    fn lists_every_bundled_template() {
        let catalog = bundled_only();
        let summaries = execute(&catalog, None).unwrap();

        assert!(summaries.len() >= 5);
        assert!(summaries.iter().any(|s| s.name == "python-basic"));
    }

    #[test]
    fn language_filter_narrows_the_list() {
        let catalog = bundled_only();
        let summaries = execute(&catalog, Some(Language::TypeScript)).unwrap();

        assert!(!summaries.is_empty());
        assert!(summaries.iter().all(|s| s.language == Language::TypeScript));
    }

    #[test]
    fn detail_flattens_variables_and_constraints() {
        let catalog = bundled_only();
        let detail = execute_detail(&catalog, "typescript-turbo").unwrap();

        assert_eq!(detail.language, Language::TypeScript);
        assert_eq!(
            detail.optimizations,
            vec!["turboRepo", "hotReload", "sharedDependencies", "buildCaching"]
        );

        let server_name = detail.variables.iter().find(|v| v.name == "serverName").unwrap();
        assert!(server_name.required);
        assert_eq!(server_name.constraints, vec!["pattern: [a-z][a-z0-9-]*"]);

        let features = detail.variables.iter().find(|v| v.name == "features").unwrap();
        assert_eq!(features.var_type, "array");
        assert_eq!(features.constraints, vec!["one of: tools, resources, prompts, logging"]);
    }

    #[test]
    fn detail_for_unknown_template_lists_available_names() {
        let catalog = bundled_only();
        let err = execute_detail(&catalog, "no-such-pod").unwrap_err();

        match err {
            AppError::TemplateNotFound { name, available } => {
                assert_eq!(name, "no-such-pod");
                assert!(available.contains("rust-basic"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
