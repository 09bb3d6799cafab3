use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::{ScrollerConfig, ScrollerOverrides};

const APP_SENTINEL: &str = "scroller";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "_app")]
    pub app: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "ScrollerOverrides::is_empty")]
    pub scroller: ScrollerOverrides,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: APP_SENTINEL.to_string(),
            theme: None,
            scroller: ScrollerOverrides::default(),
        }
    }
}

impl Settings {
    /// Read `path`, treating a missing file as empty settings.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read settings from {}", path.display()));
            }
        };

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;
        if settings.app != APP_SENTINEL {
            bail!(
                "{} appears to belong to another application (expected _app = '{}', found '{}')",
                path.display(),
                APP_SENTINEL,
                settings.app
            );
        }
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }

    /// Layer the `[scroller]` table over `config`.
    pub fn apply(&self, config: ScrollerConfig) -> ScrollerConfig {
        config.with_overrides(&self.scroller)
    }
}

pub fn config_dir(custom: Option<&PathBuf>) -> Option<PathBuf> {
    custom
        .cloned()
        .or_else(|| dirs::home_dir().map(|p| p.join(".config").join("scroller")))
}

pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.toml")
}

pub fn themes_dir(config_dir: &Path) -> PathBuf {
    config_dir.join("themes")
}

pub fn log_dir(config_dir: &Path) -> PathBuf {
    config_dir.join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LOAD_BATCH_SIZE, ROW_HEIGHT};
    use tempfile::TempDir;

    fn write_settings(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = settings_path(temp.path());
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn missing_file_leaves_defaults_untouched() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(&settings_path(temp.path())).unwrap();

        assert!(settings.scroller.is_empty());
        assert_eq!(
            settings.apply(ScrollerConfig::default()),
            ScrollerConfig::default()
        );
    }

    #[test]
    fn scroller_table_overrides_only_listed_fields() {
        let (_temp, path) = write_settings(
            "_app = \"scroller\"\n\n[scroller]\ntotal_items = 60\nedge_threshold = 300\n",
        );

        let config = Settings::load(&path)
            .unwrap()
            .apply(ScrollerConfig::default());

        assert_eq!(config.total_items, 60);
        assert_eq!(config.edge_threshold, 300);
        assert_eq!(config.load_batch_size, LOAD_BATCH_SIZE);
        assert_eq!(config.row_height, ROW_HEIGHT);
    }

    #[test]
    fn mistyped_scroller_field_names_the_file() {
        let (_temp, path) = write_settings("_app = \"scroller\"\n[scroller]\nrow_height = \"tall\"\n");

        let err = Settings::load(&path).unwrap_err();

        assert!(format!("{err:#}").contains("settings.toml"));
    }

    #[test]
    fn foreign_settings_file_is_rejected() {
        let (_temp, path) = write_settings("_app = \"other-app\"\n");

        let err = Settings::load(&path).unwrap_err().to_string();

        assert!(err.contains("another application"));
    }

    #[test]
    fn saved_effective_config_loads_back_identically() {
        let temp = TempDir::new().unwrap();
        let path = settings_path(&temp.path().join("nested"));
        let config = ScrollerConfig {
            load_batch_size: 10,
            line_height: 30,
            row_height: 90,
            ..Default::default()
        };

        Settings {
            scroller: ScrollerOverrides::from(config),
            ..Default::default()
        }
        .save(&path)
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[scroller]"));
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.apply(ScrollerConfig::default()), config);
    }

    #[test]
    fn empty_overrides_are_not_written() {
        let temp = TempDir::new().unwrap();
        let path = settings_path(temp.path());

        Settings {
            theme: Some("nord".to_string()),
            ..Default::default()
        }
        .save(&path)
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("theme = \"nord\""));
        assert!(!content.contains("[scroller]"));
    }

    #[test]
    fn directories_hang_off_the_config_dir() {
        let root = PathBuf::from("/custom/path");
        assert_eq!(config_dir(Some(&root)), Some(root.clone()));
        assert_eq!(log_dir(&root), root.join("logs"));
        assert_eq!(themes_dir(&root), root.join("themes"));
        assert!(config_dir(None).unwrap().ends_with(".config/scroller"));
    }
}
