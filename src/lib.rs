//! trkeys - translation key tooling for Flutter projects
//!
//! trkeys is a CLI tool and library for two localization chores: comparing the
//! top-level keys of two JSON translation files, and listing the keys a source
//! tree looks up through `"key".tr()` calls.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key comparison and usage scanning

pub mod cli;
pub mod config;
pub mod core;
