//! Filesystem catalog scanning with skip-and-log tolerance.

use std::fs;
use std::path::Path;

use crate::domain::template::METADATA_FILENAME;
use crate::domain::{CatalogTemplate, Diagnostics, TemplateMetadata};

/// Scan one catalog root for template directories.
///
/// Never fails as a whole: an unreadable root yields an empty list plus a
/// diagnostic naming it, and each malformed entry is skipped with a
/// diagnostic while its valid siblings still load. Entries are visited in
/// name order so a scan is deterministic across platforms.
pub fn scan_catalog_root(root: &Path, diagnostics: &mut Diagnostics) -> Vec<CatalogTemplate> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            diagnostics.push_error(
                root.display().to_string(),
                format!("cannot read catalog root (is the configured path correct?): {e}"),
            );
            return Vec::new();
        }
    };

    let mut dirs: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    let mut templates = Vec::new();
    for dir in dirs {
        match load_template_dir(&dir) {
            Ok(Some(template)) => templates.push(template),
            Ok(None) => diagnostics.push_warning(
                dir.display().to_string(),
                format!("skipping: no {METADATA_FILENAME} found"),
            ),
            Err(reason) => diagnostics.push_error(dir.display().to_string(), reason),
        }
    }
    templates
}

/// `Ok(None)` when the directory carries no metadata document at all.
fn load_template_dir(dir: &Path) -> Result<Option<CatalogTemplate>, String> {
    let metadata_path = dir.join(METADATA_FILENAME);
    if !metadata_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&metadata_path)
        .map_err(|e| format!("cannot read {METADATA_FILENAME}: {e}"))?;
    let metadata = TemplateMetadata::from_yaml(&content).map_err(|e| e.to_string())?;
    Ok(Some(CatalogTemplate::new(metadata, dir.to_path_buf())))
}
