//! Template schema model: metadata documents and declared variables.

mod catalog_template;
mod metadata;
mod variable;

pub use catalog_template::CatalogTemplate;
pub use metadata::{
    METADATA_FILENAME, OptimizationFlags, SchemaError, TemplateFileSpec, TemplateMetadata,
};
pub use variable::{TemplateVariable, VariableType, VariableValidation, value_type_name};
