use std::{sync::Arc, time::Duration};

use dashmap::DashMap;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::core::{
    domain::{Runner, RunnerStatus},
    registry::RunnerRegistry,
    traits::delegate::RunDelegate,
};

#[derive(Debug)]
pub struct RunDelegateStub {
    registry: Arc<RunnerRegistry>,
    delay: Duration,
    runs: DashMap<Uuid, JoinHandle<()>>,
}

impl RunDelegateStub {
    pub fn new(registry: Arc<RunnerRegistry>, delay: Duration) -> Self {
        Self {
            registry,
            delay,
            runs: DashMap::new(),
        }
    }

    pub async fn wait(&self, id: &Uuid) {
        let Some((_, run)) = self.runs.remove(id) else {
            return;
        };
        if let Err(e) = run.await {
            tracing::error!("Run of {} did not finish: {}", id, e);
        }
    }
}

impl RunDelegate for RunDelegateStub {
    #[tracing::instrument(skip(self), fields(runner_id = %runner.id))]
    fn perform(&self, runner: &Runner) {
        tracing::info!(
            "Starting runner {:?} in {} with {} MB, options {:?}",
            runner.title,
            runner.environment_id,
            runner.ram_mb,
            runner.options
        );

        let mut started = runner.clone();
        started.change_status(RunnerStatus::InProgress);
        self.registry.store(started);

        let registry = self.registry.clone();
        let delay = self.delay;
        let id = runner.id;

        let run = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            registry.update_status(&id, RunnerStatus::Done);
            tracing::debug!("Runner {} done", id);
        });
        self.runs.insert(id, run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_runner_progresses_to_done() {
        let registry = Arc::new(RunnerRegistry::new());
        let mut runner = Runner::new("app", "tomcat7", 0);
        runner.set_ram(256);
        registry.store(runner.clone());
        let delegate = RunDelegateStub::new(registry.clone(), Duration::from_millis(10));

        delegate.perform(&runner);

        let started = registry.get(&runner.id).unwrap();
        assert_eq!(started.status, RunnerStatus::InProgress);
        assert_eq!(started.ram_mb, 256);

        delegate.wait(&runner.id).await;
        assert_eq!(
            registry.get(&runner.id).map(|r| r.status),
            Some(RunnerStatus::Done)
        );
    }

    #[tokio::test]
    async fn test_wait_without_run_returns() {
        let delegate = RunDelegateStub::new(Arc::new(RunnerRegistry::new()), Duration::ZERO);
        delegate.wait(&Uuid::new_v4()).await;
    }
}
