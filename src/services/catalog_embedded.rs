//! Bundled template catalog - loads templates from embedded assets.

use std::path::Path;

use include_dir::{Dir, include_dir};

use crate::domain::template::METADATA_FILENAME;
use crate::domain::{AppError, CatalogTemplate, TemplateMetadata};

/// Templates shipped inside the binary.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

/// Parse every bundled template, in name order.
///
/// Filesystem roots tolerate malformed entries; a malformed bundled
/// template is a packaging bug and fails loudly instead.
pub fn load_bundled_templates() -> Result<Vec<CatalogTemplate>, AppError> {
    let mut templates = Vec::new();

    for entry in CATALOG_DIR.dirs() {
        let dir_name = entry.path().file_name().and_then(|n| n.to_str()).unwrap_or("");

        let Some(metadata_file) = entry.get_file(entry.path().join(METADATA_FILENAME)) else {
            continue;
        };

        let content =
            metadata_file.contents_utf8().ok_or_else(|| AppError::InvalidTemplateMetadata {
                template: dir_name.to_string(),
                reason: format!("{METADATA_FILENAME} is not valid UTF-8"),
            })?;

        let metadata =
            TemplateMetadata::from_yaml(content).map_err(|e| AppError::InvalidTemplateMetadata {
                template: dir_name.to_string(),
                reason: e.to_string(),
            })?;

        templates.push(CatalogTemplate::new(metadata, Path::new("bundled").join(entry.path())));
    }

    templates.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));
    Ok(templates)
}
