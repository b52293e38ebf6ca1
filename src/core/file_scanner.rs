//! Source tree traversal for the usage scanner.

use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use serde::Serialize;
use walkdir::WalkDir;

use super::error::{Error, Result};

pub const DEFAULT_SOURCE_EXTENSION: &str = "dart";

/// Options controlling which files the scanner reads.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extension without the leading dot, e.g. `dart`.
    pub extension: String,
    /// Glob patterns or literal paths (relative to the root) to skip.
    pub ignores: Vec<String>,
    /// Abort on the first unreadable entry or undecodable file instead of skipping it.
    pub strict: bool,
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            ignores: Vec::new(),
            strict: false,
            follow_links: false,
        }
    }
}

/// A path that was left out of the scan and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Result of walking the source tree.
#[derive(Debug, Default)]
pub struct FileScanResult {
    /// Matching files, in walk order.
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

pub fn scan_files(root: &Path, options: &ScanOptions) -> Result<FileScanResult> {
    fs::metadata(root).map_err(|source| Error::file_not_found(root, source))?;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in &options.ignores {
        if is_glob_pattern(p) {
            // Patterns are validated when the configuration is loaded.
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let suffix = format!(".{}", options.extension.trim_start_matches('.'));
    let mut result = FileScanResult::default();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if options.strict => return Err(Error::Walk(e)),
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default();
                result.skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        // Symlinked files are read even when links are not followed for recursion.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let path = entry.path();
        if !is_source_file(path, &suffix) {
            continue;
        }

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        result.files.push(entry.into_path());
    }

    Ok(result)
}

fn is_source_file(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}
