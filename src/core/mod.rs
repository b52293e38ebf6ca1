//! Core operations shared by the CLI.
//!
//! ## Module Structure
//!
//! - `document`: Loading flat JSON translation files
//! - `compare`: Top-level key diff between two translation files
//! - `file_scanner`: Source tree traversal with extension and ignore filters
//! - `usage`: Translation key extraction from `"key".tr()` calls
//! - `error`: Error taxonomy

pub mod compare;
pub mod document;
pub mod error;
pub mod file_scanner;
pub mod usage;

pub use compare::{KeyDiffResult, compare_documents, compare_files};
pub use document::TranslationDocument;
pub use error::{Error, ErrorKind, Result};
pub use file_scanner::{DEFAULT_SOURCE_EXTENSION, ScanOptions, SkippedFile, scan_files};
pub use usage::{ScanOutcome, TR_CALL_SUFFIX, UsageKeySet, extract_keys, scan_usage_keys};
