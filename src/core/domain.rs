use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Runner {
    pub id: Uuid,
    pub title: String,
    pub environment_id: String,
    /// Requested memory in megabytes. Zero means the user did not override it.
    pub ram_mb: u64,
    pub status: RunnerStatus,
    pub options: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl Runner {
    pub fn new(title: &str, environment_id: &str, ram_mb: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            environment_id: environment_id.to_string(),
            ram_mb,
            status: RunnerStatus::default(),
            options: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    #[tracing::instrument(skip(self), fields(runner_id = %self.id))]
    pub fn change_status(&mut self, new_status: RunnerStatus) {
        tracing::debug!("Runner status: {:?} -> {:?}", self.status, new_status);
        self.status = new_status;
    }

    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options = options;
        self
    }

    pub fn set_ram(&mut self, ram_mb: u64) {
        tracing::debug!("Runner {} RAM set to {} MB", self.id, ram_mb);
        self.ram_mb = ram_mb;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunnerStatus {
    #[default]
    InQueue,
    InProgress,
    Done,
    Failed,
    Stopped,
    Timeout,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerConfiguration {
    /// Memory requirement in megabytes declared by the environment. Zero means none.
    pub ram: u64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerEnvironmentsConfig {
    #[serde(rename = "default")]
    pub default_environment_id: String,
    pub configs: HashMap<String, RunnerConfiguration>,
}

impl RunnerEnvironmentsConfig {
    pub fn configuration_for(&self, environment_id: &str) -> Option<&RunnerConfiguration> {
        self.configs
            .get(environment_id)
            .or_else(|| self.configs.get(&self.default_environment_id))
    }
}

// No mapping at all yields None without trying the default environment.
pub fn resolve_configuration<'a>(
    environments: Option<&'a RunnerEnvironmentsConfig>,
    environment_id: &str,
) -> Option<&'a RunnerConfiguration> {
    environments?.configuration_for(environment_id)
}

pub fn required_memory(
    environments: Option<&RunnerEnvironmentsConfig>,
    environment_id: &str,
) -> u64 {
    resolve_configuration(environments, environment_id).map_or(0, |config| config.ram)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub project_type: String,
    pub runner: Option<String>,
    pub environments: Option<RunnerEnvironmentsConfig>,
}

impl Project {
    pub fn configured_environments(&self) -> Option<&RunnerEnvironmentsConfig> {
        self.environments.as_ref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceSnapshot {
    pub total_memory: u64,
    pub used_memory: u64,
}

impl ResourceSnapshot {
    pub fn new(total_memory: u64, used_memory: u64) -> Self {
        Self {
            total_memory,
            used_memory,
        }
    }

    pub fn available_memory(&self) -> u64 {
        self.total_memory.saturating_sub(self.used_memory)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub category: String,
    pub options: HashMap<String, String>,
}
