//! Script probing - the I/O shim in front of the pure language detector.

use std::fs;
use std::path::Path;

use crate::domain::{Language, detection};

/// Detect a script's language, reading whatever the detector needs.
///
/// An unreadable script is not an error; detection falls back to the path
/// alone, then to ecosystem marker files sitting next to the script.
/// `None` still means "could not tell", never "could not read".
pub fn probe_script(path: &Path) -> Option<Language> {
    let content = fs::read_to_string(path).ok();
    if let Some(language) = detection::detect(path, content.as_deref()) {
        return Some(language);
    }
    detect_from_sibling_markers(path)
}

fn detect_from_sibling_markers(path: &Path) -> Option<Language> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty())?;
    let entries = fs::read_dir(parent).ok()?;
    let names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    detection::detect_from_markers(&names)
}
