use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{Config, load_config};

/// Loaded configuration plus the directory its relative paths resolve from.
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Load configuration starting from the current directory.
    pub fn load() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Self::load_from(&cwd)
    }

    pub fn load_from(start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        match &loaded.root {
            Some(root) => debug!(root = %root.display(), "using config file"),
            None => debug!("no config file found, using defaults"),
        }
        let root = loaded.root.unwrap_or_else(|| start_dir.to_path_buf());
        Ok(Self {
            root,
            config: loaded.config,
        })
    }

    /// A CLI override if given, otherwise the configured path under `root`.
    pub fn resolve(&self, cli_value: Option<&Path>, configured: &str) -> PathBuf {
        match cli_value {
            Some(path) => path.to_path_buf(),
            None => self.root.join(configured),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    #[test]
    fn test_resolve_prefers_cli_value() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let project = Project::load_from(dir.path()).unwrap();

        assert_eq!(
            project.resolve(Some(Path::new("elsewhere")), &project.config.yaml_dir),
            PathBuf::from("elsewhere")
        );
        assert_eq!(
            project.resolve(None, &project.config.yaml_dir),
            dir.path().join("translations")
        );
    }

    #[test]
    fn test_config_root_is_config_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "yamlDir": "i18n" }"#).unwrap();
        let nested = dir.path().join("ui_xml");
        fs::create_dir(&nested).unwrap();

        let project = Project::load_from(&nested).unwrap();

        assert_eq!(project.root, dir.path());
        assert_eq!(
            project.resolve(None, &project.config.yaml_dir),
            dir.path().join("i18n")
        );
    }
}
