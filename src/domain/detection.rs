//! Language detection heuristics for source scripts.
//!
//! All functions here are pure: content and directory listings are passed in
//! as values, never read from disk. `services::script_probe` owns the I/O.

use std::path::Path;

use crate::domain::Language;

/// Ecosystem manifest files, highest priority first.
///
/// `tsconfig.json` must outrank `package.json`: a TypeScript project
/// carries both.
const MANIFEST_MARKERS: [(&str, Language); 6] = [
    ("Cargo.toml", Language::Rust),
    ("tsconfig.json", Language::TypeScript),
    ("pyproject.toml", Language::Python),
    ("requirements.txt", Language::Python),
    ("setup.py", Language::Python),
    ("package.json", Language::NodeJs),
];

/// Classify a script by content signals first, then by file extension.
///
/// Returns `None` when no heuristic matches; callers must treat that as
/// "ask the user", never as a default.
pub fn detect(path: &Path, content: Option<&str>) -> Option<Language> {
    if let Some(content) = content
        && let Some(language) = detect_from_content(content)
    {
        return Some(language);
    }
    detect_from_extension(path)
}

/// Classify by the shebang interpreter, if any.
pub fn detect_from_content(content: &str) -> Option<Language> {
    let first_line = content.lines().next()?;
    let interpreter = shebang_interpreter(first_line)?;
    classify_interpreter(interpreter)
}

/// Classify by file extension alone.
pub fn detect_from_extension(path: &Path) -> Option<Language> {
    let extension = path.extension()?.to_str()?;
    match extension.to_lowercase().as_str() {
        "py" | "pyw" => Some(Language::Python),
        "rs" => Some(Language::Rust),
        "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
        "js" | "mjs" | "cjs" | "jsx" => Some(Language::NodeJs),
        "sh" | "bash" | "zsh" => Some(Language::Shell),
        _ => None,
    }
}

/// Classify by ecosystem manifest files present alongside the script.
///
/// `entries` is the file-name listing of the script's directory.
pub fn detect_from_markers<S: AsRef<str>>(entries: &[S]) -> Option<Language> {
    for (marker, language) in MANIFEST_MARKERS {
        if entries.iter().any(|entry| entry.as_ref() == marker) {
            return Some(language);
        }
    }
    None
}

/// Extract the interpreter basename from a shebang line.
///
/// Handles the `env` indirection (`#!/usr/bin/env python3`) including
/// `env -S` flag forms.
fn shebang_interpreter(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("#!")?;
    let mut tokens = rest.split_whitespace();
    let first = basename(tokens.next()?);
    if first != "env" {
        return Some(first);
    }
    tokens.find(|token| !token.starts_with('-')).map(basename)
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn classify_interpreter(name: &str) -> Option<Language> {
    if name.starts_with("ts-node") || name.starts_with("deno") {
        Some(Language::TypeScript)
    } else if name.starts_with("python") {
        Some(Language::Python)
    } else if name.starts_with("node") {
        Some(Language::NodeJs)
    } else if name.starts_with("bash") || name.starts_with("zsh") || matches!(name, "sh" | "dash" | "ksh") {
        Some(Language::Shell)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path(name: &str) -> PathBuf {
        PathBuf::from(name)
    }

    #[test]
    fn shebang_python() {
        assert_eq!(detect_from_content("#!/usr/bin/env python3\nprint('hi')"), Some(Language::Python));
        assert_eq!(detect_from_content("#!/usr/bin/python\n"), Some(Language::Python));
    }

    #[test]
    fn shebang_node_and_typescript() {
        assert_eq!(detect_from_content("#!/usr/bin/env node\n"), Some(Language::NodeJs));
        assert_eq!(detect_from_content("#!/usr/bin/env ts-node\n"), Some(Language::TypeScript));
        assert_eq!(detect_from_content("#!/usr/bin/env -S deno run\n"), Some(Language::TypeScript));
    }

    #[test]
    fn shebang_shell_variants() {
        assert_eq!(detect_from_content("#!/bin/bash\n"), Some(Language::Shell));
        assert_eq!(detect_from_content("#!/bin/sh\n"), Some(Language::Shell));
        assert_eq!(detect_from_content("#!/usr/bin/env zsh\n"), Some(Language::Shell));
    }

    #[test]
    fn content_without_shebang_is_inconclusive() {
        assert_eq!(detect_from_content("import sys\n"), None);
    }

    #[test]
    fn unknown_interpreter_is_inconclusive() {
        assert_eq!(detect_from_content("#!/usr/bin/env perl\n"), None);
    }

    #[test]
    fn extension_table() {
        assert_eq!(detect_from_extension(&path("tool.py")), Some(Language::Python));
        assert_eq!(detect_from_extension(&path("main.rs")), Some(Language::Rust));
        assert_eq!(detect_from_extension(&path("server.ts")), Some(Language::TypeScript));
        assert_eq!(detect_from_extension(&path("index.mjs")), Some(Language::NodeJs));
        assert_eq!(detect_from_extension(&path("run.sh")), Some(Language::Shell));
        assert_eq!(detect_from_extension(&path("notes.txt")), None);
        assert_eq!(detect_from_extension(&path("Makefile")), None);
    }

    #[test]
    fn content_outranks_extension() {
        // A .py wrapper around a node script is whatever its shebang says.
        assert_eq!(detect(&path("wrapper.py"), Some("#!/usr/bin/env node\n")), Some(Language::NodeJs));
    }

    #[test]
    fn extension_is_fallback_when_content_inconclusive() {
        assert_eq!(detect(&path("tool.py"), Some("import sys\n")), Some(Language::Python));
        assert_eq!(detect(&path("tool.py"), None), Some(Language::Python));
    }

    #[test]
    fn markers_priority() {
        assert_eq!(detect_from_markers(&["package.json", "tsconfig.json"]), Some(Language::TypeScript));
        assert_eq!(detect_from_markers(&["package.json"]), Some(Language::NodeJs));
        assert_eq!(detect_from_markers(&["Cargo.toml", "package.json"]), Some(Language::Rust));
        assert_eq!(detect_from_markers(&["requirements.txt"]), Some(Language::Python));
        assert_eq!(detect_from_markers::<&str>(&[]), None);
        assert_eq!(detect_from_markers(&["README.md"]), None);
    }
}
