//! Variable validation against a template's declared schema.
//!
//! Validation never fails early and never panics: every violation across
//! every field is accumulated into one [`ValidationReport`] so callers can
//! surface all problems at once.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::template::{TemplateVariable, VariableType, value_type_name};

/// A caller-supplied variable set: untyped JSON values keyed by name.
pub type VariableValues = Map<String, Value>;

/// One violation found while validating a variable set.
#[derive(Debug, Clone, Serialize)]
pub struct VariableError {
    /// Name of the offending variable.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// The supplied value, absent when the variable was missing entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Value>,
    /// The type the schema declares for this variable.
    pub expected_type: VariableType,
    /// The pattern that failed, on pattern violations only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Structured outcome of validating a variable set.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<VariableError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<VariableError>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }
}

/// Anchor a schema pattern so the full value must match.
///
/// Double anchoring is harmless when the author already wrote `^...$`.
pub(crate) fn compile_anchored_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Check `values` against `schema`, accumulating every violation.
///
/// Iteration follows schema name order; undeclared values are ignored.
/// Missing variables with a default are skipped, since applying defaults is
/// the caller's job, not the validator's.
pub fn validate_variables(
    schema: &BTreeMap<String, TemplateVariable>,
    values: &VariableValues,
) -> ValidationReport {
    let mut errors = Vec::new();

    for (name, variable) in schema {
        let Some(value) = values.get(name) else {
            if variable.required && variable.default.is_none() {
                errors.push(VariableError {
                    field: name.clone(),
                    message: format!("Variable '{}' is required", name),
                    current_value: None,
                    expected_type: variable.var_type,
                    pattern: None,
                });
            }
            continue;
        };

        if !variable.var_type.admits(value) {
            errors.push(VariableError {
                field: name.clone(),
                message: format!(
                    "Variable '{}' should be of type '{}', got '{}'",
                    name,
                    variable.var_type,
                    value_type_name(value)
                ),
                current_value: Some(value.clone()),
                expected_type: variable.var_type,
                pattern: None,
            });
            continue;
        }

        let Some(rules) = &variable.validation else {
            continue;
        };

        match variable.var_type {
            VariableType::String => {
                check_string(name, variable, value, rules, &mut errors);
            }
            VariableType::Number => {
                check_number(name, variable, value, rules, &mut errors);
            }
            VariableType::Array => {
                check_array_elements(name, variable, value, rules, &mut errors);
            }
            // Type check is the whole contract for these.
            VariableType::Boolean | VariableType::Object => {}
        }
    }

    ValidationReport::from_errors(errors)
}

fn check_string(
    name: &str,
    variable: &TemplateVariable,
    value: &Value,
    rules: &crate::domain::template::VariableValidation,
    errors: &mut Vec<VariableError>,
) {
    let Some(text) = value.as_str() else {
        return;
    };

    if let Some(pattern) = &rules.pattern {
        match compile_anchored_pattern(pattern) {
            Ok(regex) => {
                if !regex.is_match(text) {
                    errors.push(VariableError {
                        field: name.to_string(),
                        message: format!("Variable '{}' does not match required pattern", name),
                        current_value: Some(value.clone()),
                        expected_type: variable.var_type,
                        pattern: Some(pattern.clone()),
                    });
                }
            }
            // Catalog-loaded schemas reject this at parse time; a hand-built
            // schema with a broken pattern still must not panic here.
            Err(_) => {
                errors.push(VariableError {
                    field: name.to_string(),
                    message: format!("Variable '{}' has an invalid validation pattern", name),
                    current_value: Some(value.clone()),
                    expected_type: variable.var_type,
                    pattern: Some(pattern.clone()),
                });
            }
        }
    }

    if let Some(options) = &rules.options
        && !options.iter().any(|option| option == text)
    {
        errors.push(VariableError {
            field: name.to_string(),
            message: format!("Variable '{}' must be one of: {}", name, options.join(", ")),
            current_value: Some(value.clone()),
            expected_type: variable.var_type,
            pattern: None,
        });
    }
}

fn check_number(
    name: &str,
    variable: &TemplateVariable,
    value: &Value,
    rules: &crate::domain::template::VariableValidation,
    errors: &mut Vec<VariableError>,
) {
    let Some(number) = value.as_f64() else {
        return;
    };

    if let Some(min) = rules.min
        && number < min
    {
        errors.push(VariableError {
            field: name.to_string(),
            message: format!("Variable '{}' must be at least {}", name, min),
            current_value: Some(value.clone()),
            expected_type: variable.var_type,
            pattern: None,
        });
    }

    if let Some(max) = rules.max
        && number > max
    {
        errors.push(VariableError {
            field: name.to_string(),
            message: format!("Variable '{}' must be at most {}", name, max),
            current_value: Some(value.clone()),
            expected_type: variable.var_type,
            pattern: None,
        });
    }
}

/// Check every element against `options`, reporting all invalid ones in a
/// single error preserving their original order. An empty array is always
/// valid.
fn check_array_elements(
    name: &str,
    variable: &TemplateVariable,
    value: &Value,
    rules: &crate::domain::template::VariableValidation,
    errors: &mut Vec<VariableError>,
) {
    let (Some(options), Some(elements)) = (&rules.options, value.as_array()) else {
        return;
    };

    let invalid: Vec<String> = elements
        .iter()
        .filter(|element| {
            !element.as_str().is_some_and(|text| options.iter().any(|option| option == text))
        })
        .map(render_element)
        .collect();

    if !invalid.is_empty() {
        errors.push(VariableError {
            field: name.to_string(),
            message: format!(
                "Variable '{}' contains invalid values: {}. Must be one of: {}",
                name,
                invalid.join(", "),
                options.join(", ")
            ),
            current_value: Some(value.clone()),
            expected_type: variable.var_type,
            pattern: None,
        });
    }
}

fn render_element(element: &Value) -> String {
    match element {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
