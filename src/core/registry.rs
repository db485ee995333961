use dashmap::DashMap;
use itertools::Itertools;
use uuid::Uuid;

use crate::core::{
    domain::{Runner, RunnerStatus},
    launch::LaunchRequest,
};

#[derive(Debug, Default)]
pub struct RunnerRegistry {
    runners: DashMap<Uuid, Runner>,
}

impl RunnerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self))]
    pub fn launch(
        &self,
        request: Option<LaunchRequest>,
        title: &str,
        environment_id: &str,
        ram_mb: u64,
    ) -> Option<Runner> {
        let Some(request) = request else {
            tracing::debug!("Nothing to launch");
            return None;
        };
        let runner = request.into_runner(title, environment_id, ram_mb);
        tracing::debug!("New runner: {:?}", runner);
        self.runners.insert(runner.id, runner.clone());
        Some(runner)
    }

    pub fn get(&self, id: &Uuid) -> Option<Runner> {
        self.runners.get(id).map(|runner| runner.value().clone())
    }

    pub fn store(&self, runner: Runner) {
        self.runners.insert(runner.id, runner);
    }

    pub fn update_status(&self, id: &Uuid, status: RunnerStatus) -> bool {
        match self.runners.get_mut(id) {
            Some(mut runner) => {
                runner.change_status(status);
                true
            }
            None => false,
        }
    }

    pub fn history(&self) -> Vec<Runner> {
        self.runners
            .iter()
            .map(|entry| entry.value().clone())
            .sorted_by_key(|runner| runner.created_at)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_launch_and_update() {
        let registry = RunnerRegistry::new();
        let runner = registry
            .launch(Some(LaunchRequest::Default), "app", "tomcat7", 256)
            .unwrap();

        assert_eq!(registry.get(&runner.id), Some(runner.clone()));
        assert!(registry.update_status(&runner.id, RunnerStatus::InProgress));
        assert_eq!(
            registry.get(&runner.id).map(|r| r.status),
            Some(RunnerStatus::InProgress)
        );
        assert!(!registry.update_status(&Uuid::new_v4(), RunnerStatus::Done));
    }

    #[test]
    fn test_store_replaces_runner() {
        let registry = RunnerRegistry::new();
        let mut runner = registry
            .launch(Some(LaunchRequest::Default), "app", "tomcat7", 0)
            .unwrap();
        runner.set_ram(512);
        registry.store(runner.clone());

        assert_eq!(registry.get(&runner.id).map(|r| r.ram_mb), Some(512));
    }

    #[test]
    fn test_history_is_ordered_by_creation() {
        let registry = RunnerRegistry::new();
        let mut first = Runner::new("first", "tomcat7", 0);
        let mut second = Runner::new("second", "tomcat7", 0);
        first.created_at = chrono::Utc::now() - chrono::Duration::minutes(5);
        second.created_at = chrono::Utc::now();
        registry.store(second);
        registry.store(first);

        let titles: Vec<_> = registry.history().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_nothing_registered_without_launch_request() {
        let registry = RunnerRegistry::new();

        assert_eq!(registry.launch(None, "app", "tomcat7", 256), None);
        assert!(registry.history().is_empty());
    }

    #[test]
    fn test_custom_launch_is_registered_with_its_environment() {
        let registry = RunnerRegistry::new();
        let options = HashMap::from([("debug".to_string(), "true".to_string())]);
        let request = LaunchRequest::Custom {
            environment_id: "system:/java/web/tomcat7".to_string(),
            title: "tomcat7".to_string(),
            options: options.clone(),
        };

        let runner = registry
            .launch(Some(request), "app", "system:/java/web/jetty9", 0)
            .unwrap();

        let stored = registry.get(&runner.id).unwrap();
        assert_eq!(stored.environment_id, "system:/java/web/tomcat7");
        assert_eq!(stored.options, options);
        assert_eq!(stored.status, RunnerStatus::InQueue);
    }
}
