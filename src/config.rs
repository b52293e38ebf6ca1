use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_SOURCE_EXTENSION, Error, ScanOptions};

pub const CONFIG_FILE_NAME: &str = ".trkeysrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub follow_links: bool,
}

fn default_source_extension() -> String {
    DEFAULT_SOURCE_EXTENSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            ignores: Vec::new(),
            strict: false,
            follow_links: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the extension is empty or any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.source_extension.trim_start_matches('.').is_empty() {
            anyhow::bail!("'sourceExtension' must not be empty");
        }

        // Only patterns with wildcards are globs; the rest are literal paths.
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
            }
        }

        Ok(())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extension: self.source_extension.trim_start_matches('.').to_string(),
            ignores: self.ignores.clone(),
            strict: self.strict,
            follow_links: self.follow_links,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content =
                fs::read(&path).map_err(|source| Error::file_not_found(&path, source))?;
            let config: Config =
                serde_json::from_slice(&content).map_err(|source| Error::Parse {
                    path: path.clone(),
                    source,
                })?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
