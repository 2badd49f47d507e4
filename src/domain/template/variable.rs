//! Template variable schema model.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a template variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl VariableType {
    /// Identifier used in template metadata and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::String => "string",
            VariableType::Number => "number",
            VariableType::Boolean => "boolean",
            VariableType::Array => "array",
            VariableType::Object => "object",
        }
    }

    /// Whether a JSON value inhabits this type.
    ///
    /// Arrays are JSON sequences, objects are keyed mappings; `null`
    /// inhabits nothing.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            VariableType::String => value.is_string(),
            VariableType::Number => value.is_number(),
            VariableType::Boolean => value.is_boolean(),
            VariableType::Array => value.is_array(),
            VariableType::Object => value.is_object(),
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime type name of a JSON value, for mismatch messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Constraint rules attached to a variable.
///
/// `pattern` applies to strings, `min`/`max` to numbers, and `options` to
/// strings and to each element of arrays. One field, with interpretation
/// dispatched on the declared [`VariableType`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableValidation {
    /// Anchored regular expression the full string value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Inclusive lower bound for numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound for numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Allowed values, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// One declared parameter of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVariable {
    /// Human-readable description shown in template detail output.
    #[serde(default)]
    pub description: String,
    /// Declared type of the value.
    #[serde(rename = "type")]
    pub var_type: VariableType,
    /// Whether a value (or a default) must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Default applied by the caller when the variable is omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Constraint rules, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<VariableValidation>,
}
