//! Filter configuration, layered as defaults < `pats-filter.toml` < CLI flags.

use std::path::{Path, PathBuf};

use pats_fmt::FormatConfig;
use serde::Deserialize;

use crate::error::FilterError;

/// Name of the config file picked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "pats-filter.toml";

/// Everything the driver needs to process a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub format: FormatConfig,
    /// Print the column after the line number.
    pub column: bool,
    /// Rewrite message paths relative to the working directory.
    pub relative_paths: bool,
    /// Print located diagnostics as JSON objects.
    pub json: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            format: FormatConfig::default(),
            column: true,
            relative_paths: true,
            json: false,
        }
    }
}

/// The contents of a `pats-filter.toml` file. Every key is optional.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ConfigFile {
    pub width: Option<usize>,
    pub indent: Option<usize>,
    pub simplify: Option<bool>,
    pub column: Option<bool>,
    pub relative_paths: Option<bool>,
    pub placeholder: Option<char>,
    pub json: Option<bool>,
}

impl ConfigFile {
    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<ConfigFile, FilterError> {
        let content = std::fs::read_to_string(path).map_err(|source| FilterError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content).map_err(|source| FilterError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config file contents.
    pub fn from_str(content: &str) -> Result<ConfigFile, toml::de::Error> {
        toml::from_str(content)
    }

    /// Override the keys this file sets.
    pub fn apply(&self, config: &mut FilterConfig) {
        if let Some(width) = self.width {
            config.format.max_width = width;
        }
        if let Some(indent) = self.indent {
            config.format.indent_size = indent;
        }
        if let Some(simplify) = self.simplify {
            config.format.simplify = simplify;
        }
        if let Some(placeholder) = self.placeholder {
            config.format.placeholder = placeholder;
        }
        if let Some(column) = self.column {
            config.column = column;
        }
        if let Some(relative_paths) = self.relative_paths {
            config.relative_paths = relative_paths;
        }
        if let Some(json) = self.json {
            config.json = json;
        }
    }
}

/// The config file to use: `explicit` if given, else `pats-filter.toml` in
/// `cwd` when it exists.
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    }
}

/// Defaults with the located config file applied on top.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<FilterConfig, FilterError> {
    let mut config = FilterConfig::default();
    match locate(explicit, cwd) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config file");
            ConfigFile::from_file(&path)?.apply(&mut config);
        }
        None => tracing::debug!("no config file, using defaults"),
    }
    Ok(config)
}
