use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".langfillrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Groups that are never reconciled (no file created, read or written).
    #[serde(default)]
    pub exclude_groups: Vec<String>,
    /// Locales that are never reconciled.
    #[serde(default)]
    pub exclude_langs: Vec<String>,
    /// Directory names pruned from the scan, in addition to the built-ins.
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
    /// Sort catalog entries by key before persisting.
    #[serde(default)]
    pub sort_keys: bool,
    /// Recognized call spellings. Informational: the matcher set is fixed,
    /// this list documents what it covers.
    #[serde(default = "default_trans_functions")]
    pub trans_functions: Vec<String>,
    /// File-name suffixes scanned for translation calls.
    #[serde(default = "default_file_suffixes")]
    pub file_suffixes: Vec<String>,
    /// Translations root directory, relative to the scanned path.
    #[serde(default = "default_lang_path", alias = "translationsPath")]
    pub lang_path: String,
}

fn default_trans_functions() -> Vec<String> {
    [
        "trans",
        "trans_choice",
        "Lang::get",
        "Lang::choice",
        "Lang::trans",
        "Lang::transChoice",
        "@lang",
        "@choice",
        "__",
        "$trans.get",
    ]
    .map(String::from)
    .to_vec()
}

fn default_file_suffixes() -> Vec<String> {
    crate::scanner::DEFAULT_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_lang_path() -> String {
    "lang".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude_groups: Vec::new(),
            exclude_langs: Vec::new(),
            exclude_dirs: Vec::new(),
            sort_keys: false,
            trans_functions: default_trans_functions(),
            file_suffixes: default_file_suffixes(),
            lang_path: default_lang_path(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Suffixes must begin with a dot and excluded directories must be bare
    /// names (the scanner prunes by name, not by path).
    pub fn validate(&self) -> Result<()> {
        for suffix in &self.file_suffixes {
            if !suffix.starts_with('.') {
                anyhow::bail!(
                    "Invalid entry in 'fileSuffixes': \"{}\" (must start with '.')",
                    suffix
                );
            }
        }

        for dir in &self.exclude_dirs {
            if dir.contains('/') || dir.contains('\\') {
                anyhow::bail!(
                    "Invalid entry in 'excludeDirs': \"{}\" (must be a bare directory name)",
                    dir
                );
            }
        }

        Ok(())
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
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
