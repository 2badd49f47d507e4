pub mod detection;
pub mod diagnostics;
pub mod error;
pub mod language;
pub mod selection;
pub mod template;
pub mod validation;

pub use diagnostics::Diagnostics;
pub use error::AppError;
pub use language::Language;
pub use selection::{Complexity, ScoredTemplate, SelectionCriteria, rank, select_best};
pub use template::{CatalogTemplate, SchemaError, TemplateMetadata, TemplateVariable};
pub use validation::{ValidationReport, VariableError, VariableValues, validate_variables};
