//! Top-level key comparison between two translation files.

use std::{collections::BTreeSet, path::Path};

use serde::Serialize;

use super::{document::TranslationDocument, error::Result};

/// Keys present in exactly one of two documents, split by origin.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDiffResult {
    pub only_in_first: BTreeSet<String>,
    pub only_in_second: BTreeSet<String>,
}

impl KeyDiffResult {
    /// True when both documents have the same key set.
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }
}

/// Load both files and diff their top-level key sets.
///
/// The first file is fully read and parsed before the second is opened.
pub fn compare_files(first: &Path, second: &Path) -> Result<KeyDiffResult> {
    let first = TranslationDocument::load(first)?;
    let second = TranslationDocument::load(second)?;
    Ok(compare_documents(&first, &second))
}

pub fn compare_documents(
    first: &TranslationDocument,
    second: &TranslationDocument,
) -> KeyDiffResult {
    let first_keys = first.keys();
    let second_keys = second.keys();

    KeyDiffResult {
        only_in_first: first_keys.difference(second_keys).cloned().collect(),
        only_in_second: second_keys.difference(first_keys).cloned().collect(),
    }
}
