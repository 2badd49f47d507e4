mod catalog_embedded;
mod catalog_filesystem;
mod catalog_merged;
mod script_probe;

pub use catalog_embedded::load_bundled_templates;
pub use catalog_filesystem::scan_catalog_root;
pub use catalog_merged::MergedCatalog;
pub use script_probe::probe_script;
