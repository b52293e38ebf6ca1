//! Extraction of translation keys from `"key".tr()` calls.

use std::{collections::BTreeSet, fs, path::Path, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use super::{
    error::{Error, Result},
    file_scanner::{ScanOptions, SkippedFile, scan_files},
};

/// Call that marks the preceding string literal as a translation lookup.
pub const TR_CALL_SUFFIX: &str = ".tr()";

/// A quoted identifier, optional whitespace, then the tr-call suffix.
/// Opening and closing quotes are matched independently.
static TR_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"['"]([a-zA-Z0-9_]+)['"]\s*{}"#,
        regex::escape(TR_CALL_SUFFIX)
    ))
    .unwrap()
});

/// Distinct translation keys, kept in ascending code-point order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UsageKeySet(BTreeSet<String>);

impl UsageKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every key used in `text`.
    pub fn extend_from_source(&mut self, text: &str) {
        for caps in TR_KEY_REGEX.captures_iter(text) {
            if let Some(key) = caps.get(1) {
                self.0.insert(key.as_str().to_string());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Sorted, deduplicated sequence for display.
    pub fn into_sorted_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

/// Keys found in a single source text.
pub fn extract_keys(text: &str) -> UsageKeySet {
    let mut keys = UsageKeySet::new();
    keys.extend_from_source(text);
    keys
}

/// Result of scanning a source tree.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome {
    pub count: usize,
    pub keys: UsageKeySet,
    pub files_scanned: usize,
    pub skipped_files: Vec<SkippedFile>,
}

/// Walk `root` and collect the keys used in every matching source file.
///
/// Files that are not valid UTF-8 are recorded in `skipped_files`, or abort
/// the scan with [`Error::Decode`] when `options.strict` is set.
pub fn scan_usage_keys(root: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
    let scan = scan_files(root, options)?;

    let mut keys = UsageKeySet::new();
    let mut skipped_files = scan.skipped;
    let mut files_scanned = 0;

    for path in &scan.files {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(source) if options.strict => return Err(Error::file_not_found(path, source)),
            Err(e) => {
                skipped_files.push(SkippedFile {
                    path: path.to_string_lossy().into_owned(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match std::str::from_utf8(&bytes) {
            Ok(text) => {
                keys.extend_from_source(text);
                files_scanned += 1;
            }
            Err(source) if options.strict => {
                return Err(Error::Decode {
                    path: path.clone(),
                    source,
                });
            }
            Err(e) => skipped_files.push(SkippedFile {
                path: path.to_string_lossy().into_owned(),
                reason: format!("invalid UTF-8: {}", e),
            }),
        }
    }

    Ok(ScanOutcome {
        count: keys.len(),
        keys,
        files_scanned,
        skipped_files,
    })
}
