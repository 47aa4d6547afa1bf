use crate::error::{PerfectCvError, Result};
use perfect_cv_common::ApiConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_BASE_URL: &str = "PERFECT_CV_API_BASE_URL";
pub const ENV_API_KEY: &str = "PERFECT_CV_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PerfectCvError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("perfect-cv"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn session_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session.json"))
    }

    /// Environment variables take precedence over the file.
    pub fn api_config(&self) -> ApiConfig {
        self.api_config_with(|name| std::env::var(name).ok())
    }

    pub(crate) fn api_config_with(&self, env: impl Fn(&str) -> Option<String>) -> ApiConfig {
        let base_url = env(ENV_BASE_URL).or_else(|| self.api_base_url.clone());
        let api_key = env(ENV_API_KEY).or_else(|| self.api_key.clone());
        ApiConfig::from_parts(base_url.as_deref(), api_key.as_deref())
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if url.trim().is_empty() {
            return Err(PerfectCvError::Config("base URL must not be empty".into()));
        }
        self.api_base_url = Some(url);
        self.save()
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}
