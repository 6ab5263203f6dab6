use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::content;
use crate::onboarding::OnboardingPage;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV: &str = "WORLDMAP_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Skip onboarding on later launches once it was acknowledged.
    pub remember_onboarding: bool,
    /// Where the completion flag lives when `remember_onboarding` is set.
    pub state_file: PathBuf,
    pub initial_filters: Vec<String>,
    /// Replaces the built-in onboarding pages.
    pub onboarding_pages: Option<Vec<OnboardingPage>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remember_onboarding: false,
            state_file: PathBuf::from("worldmap-state.json"),
            initial_filters: content::default_filters(),
            onboarding_pages: None,
        }
    }
}

impl Config {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(path, &json)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Load from `$WORLDMAP_CONFIG`, or defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn onboarding_pages(&self) -> Vec<OnboardingPage> {
        self.onboarding_pages
            .clone()
            .unwrap_or_else(content::default_onboarding_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::PageIcon;

    #[test]
    fn empty_object_is_default() {
        let cfg = Config::from_json(Path::new("mem"), "{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.onboarding_pages().len(), 3);
        assert_eq!(cfg.initial_filters, vec!["canteen".to_string()]);
    }

    #[test]
    fn custom_pages_and_flags() {
        let json = r#"{
            "remember_onboarding": true,
            "onboarding_pages": [{"title": "Hi", "body": "There", "icon": "book"}]
        }"#;
        let cfg = Config::from_json(Path::new("mem"), json).unwrap();
        assert!(cfg.remember_onboarding);
        assert_eq!(
            cfg.onboarding_pages(),
            vec![OnboardingPage::new("Hi", "There", PageIcon::Book)]
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_json(Path::new("mem"), r#"{"pagewidth": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn page_geometry_is_not_configurable() {
        for json in [r#"{"page_width": 0}"#, r#"{"page_width": 360.0}"#] {
            let err = Config::from_json(Path::new("mem"), json).unwrap_err();
            assert!(matches!(err, ConfigError::Json { .. }), "{json}");
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
