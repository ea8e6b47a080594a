use std::path::{Path, PathBuf};

use serde::Deserialize;

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("error parsing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config file already exists")]
    Exists,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub complete: CompleteConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchConfig {
    /// Fold ASCII case of the text and pattern before matching.
    #[serde(default = "default_true")]
    pub ignore_case: bool,

    /// Characters shown from each match offset.
    #[serde(default = "default_snippet_width")]
    pub snippet_width: usize,

    /// Maximum number of matches printed.
    #[serde(default = "default_max_shown")]
    pub max_shown: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ignore_case: true,
            snippet_width: default_snippet_width(),
            max_shown: default_max_shown(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompleteConfig {
    /// Suggestions shown per prefix.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Order suggestions by frequency instead of alphabetically.
    #[serde(default = "default_true")]
    pub ranked: bool,
}

impl Default for CompleteConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            ranked: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_snippet_width() -> usize {
    50
}

fn default_max_shown() -> usize {
    1000
}

fn default_limit() -> usize {
    10
}

/// Load and merge config files. Keys in later files override earlier ones.
/// With no files, the defaults are returned.
pub fn load_all(paths: &[PathBuf]) -> Result<Config, ConfigError> {
    let mut merged = toml::Table::new();

    for path in paths {
        log::info!("loading config: {}", path.display());
        let src = read_file(path)?;
        merge(&mut merged, src);
    }

    Ok(toml::Value::Table(merged).try_into()?)
}

/// Generate sample config file.
pub fn generate_sample(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::Exists);
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}

fn read_file(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge the given src table into the dest table, recursing into sub-tables.
fn merge(dest: &mut toml::Table, src: toml::Table) {
    for (k, v) in src {
        let toml::Value::Table(s) = v else {
            dest.insert(k, v);
            continue;
        };

        if let Some(toml::Value::Table(d)) = dest.get_mut(&k) {
            merge(d, s);
            continue;
        }
        dest.insert(k, toml::Value::Table(s));
    }
}
