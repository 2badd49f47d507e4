//! Variable validation command - check caller values against a schema.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::template::value_type_name;
use crate::domain::{AppError, ValidationReport, VariableValues, validate_variables};
use crate::ports::TemplateCatalog;

/// Validate `values` against the named template's variable schema.
pub fn execute(
    catalog: &impl TemplateCatalog,
    template_name: &str,
    values: &VariableValues,
) -> Result<ValidationReport, AppError> {
    let template = catalog.get(template_name).ok_or_else(|| AppError::TemplateNotFound {
        name: template_name.to_string(),
        available: catalog.names().join(", "),
    })?;

    Ok(validate_variables(&template.metadata.variables, values))
}

/// Merge a values file and `--set` assignments; assignments win.
pub fn collect_values(
    file: Option<&Path>,
    assignments: &[String],
) -> Result<VariableValues, AppError> {
    let mut values = match file {
        Some(path) => load_values_file(path)?,
        None => VariableValues::new(),
    };
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        values.insert(key, value);
    }
    Ok(values)
}

/// Load a variable values document, JSON or YAML by extension.
pub fn load_values_file(path: &Path) -> Result<VariableValues, AppError> {
    let values_error = |details: String| AppError::ValuesFile {
        path: path.display().to_string(),
        details,
    };

    let content = fs::read_to_string(path).map_err(|e| values_error(e.to_string()))?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext, "yml" | "yaml"));
    let document: Value = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| values_error(e.to_string()))?
    } else {
        serde_json::from_str(&content).map_err(|e| values_error(e.to_string()))?
    };

    match document {
        Value::Object(map) => Ok(map),
        other => Err(values_error(format!(
            "expected an object of variables, got {}",
            value_type_name(&other)
        ))),
    }
}

/// Parse one `key=value` assignment.
///
/// The value is read as JSON first so numbers, booleans, and arrays come
/// through typed; anything unparseable stays a plain string.
pub fn parse_assignment(assignment: &str) -> Result<(String, Value), AppError> {
    let (key, raw) = assignment
        .split_once('=')
        .ok_or_else(|| AppError::InvalidAssignment(assignment.to_string()))?;
    if key.is_empty() {
        return Err(AppError::InvalidAssignment(assignment.to_string()));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
