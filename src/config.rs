use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    constants::DEFAULT_RUNNER_TITLE,
    core::domain::{Environment, Project, RunnerEnvironmentsConfig},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {msg}")]
    Invalid { msg: String },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Absent means no project is open.
    pub project: Option<ProjectConfig>,
    pub resources: ResourcesConfig,
    pub runner: RunnerConfig,
    pub dialogs: DialogsConfig,
    pub system_environments: Vec<Environment>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub runner: Option<String>,
    pub environments: Option<RunnerEnvironmentsConfig>,
}

impl From<ProjectConfig> for Project {
    fn from(config: ProjectConfig) -> Self {
        Self {
            name: config.name,
            project_type: config.project_type,
            runner: config.runner,
            environments: config.environments,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResourcesConfig {
    pub total_memory: String,
    pub used_memory: String,
    pub delay_ms: u64,
    pub fail: bool,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            total_memory: "1024".to_string(),
            used_memory: "0".to_string(),
            delay_ms: 100,
            fail: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerConfig {
    pub title: String,
    pub environment_id: String,
    pub ram: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_RUNNER_TITLE.to_string(),
            environment_id: "default".to_string(),
            ram: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DialogsConfig {
    pub accept_info: bool,
    pub accept_confirm: bool,
}

impl Default for DialogsConfig {
    fn default() -> Self {
        Self {
            accept_info: true,
            accept_confirm: true,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runner.environment_id.trim().is_empty() {
            return Err(ConfigError::Invalid {
                msg: "runner.environment_id must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[tracing::instrument]
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("Config {} not found, using defaults", path.display());
        let config = AppConfig::default();
        config.validate()?;
        return Ok(config);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
