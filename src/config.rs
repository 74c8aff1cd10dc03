use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tagsmithrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_yaml_dir")]
    pub yaml_dir: String,
    #[serde(default = "default_markup_dir")]
    pub markup_dir: String,
    #[serde(default = "default_translations_xml")]
    pub translations_xml: String,
    #[serde(default = "default_xml_output_dir")]
    pub xml_output_dir: String,
    #[serde(default = "default_native_output_dir")]
    pub native_output_dir: String,
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_yaml_dir() -> String {
    "translations".to_string()
}

fn default_markup_dir() -> String {
    "ui_xml".to_string()
}

fn default_translations_xml() -> String {
    "ui_xml/translations/translations.xml".to_string()
}

fn default_xml_output_dir() -> String {
    "ui_xml/translations".to_string()
}

fn default_native_output_dir() -> String {
    "src/generated".to_string()
}

fn default_base_locale() -> String {
    crate::catalog::DEFAULT_BASE_LOCALE.to_string()
}

fn default_ignores() -> Vec<String> {
    ["**/translations.xml", "**/globals.xml"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            yaml_dir: default_yaml_dir(),
            markup_dir: default_markup_dir(),
            translations_xml: default_translations_xml(),
            xml_output_dir: default_xml_output_dir(),
            native_output_dir: default_native_output_dir(),
            base_locale: default_base_locale(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// base locale is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.base_locale.trim().is_empty() {
            anyhow::bail!("'baseLocale' must not be empty");
        }

        Ok(())
    }

    /// Compiled `ignores`. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect()
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
    /// Directory containing the config file; relative paths resolve here.
    /// `None` when using defaults.
    pub root: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.root.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                root: path.parent().map(Path::to_path_buf),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: None,
        }),
    }
}
