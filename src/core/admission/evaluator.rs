use std::sync::Arc;

use crate::core::{
    admission::{
        decision::{Decision, Rejection, decide},
        reconcile::{Reconciliation, Stage},
    },
    domain::{Runner, RunnerStatus, required_memory},
    messages::Message,
    traits::{
        delegate::RunDelegate,
        dialogs::DialogProvider,
        notifier::{Notifier, Severity},
        project::ProjectContext,
        resources::{ResourceError, ResourceProvider},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionOutcome {
    Skipped,
    ResourcesUnavailable(ResourceError),
    Rejected(Rejection),
    Declined,
    Launched { ram: Option<u64> },
}

#[derive(Clone, Debug)]
pub struct AdmissionEvaluator {
    resources: Arc<dyn ResourceProvider>,
    projects: Arc<dyn ProjectContext>,
    delegate: Arc<dyn RunDelegate>,
    notifier: Arc<dyn Notifier>,
    dialogs: Arc<dyn DialogProvider>,
}

impl AdmissionEvaluator {
    pub fn new(
        resources: Arc<dyn ResourceProvider>,
        projects: Arc<dyn ProjectContext>,
        delegate: Arc<dyn RunDelegate>,
        notifier: Arc<dyn Notifier>,
        dialogs: Arc<dyn DialogProvider>,
    ) -> Self {
        Self {
            resources,
            projects,
            delegate,
            notifier,
            dialogs,
        }
    }

    #[tracing::instrument(skip(self, runner), fields(runner_id = %runner.id))]
    pub async fn evaluate(&self, runner: &mut Runner) -> AdmissionOutcome {
        let Some(project) = self.projects.current_project() else {
            tracing::debug!("No current project, nothing to run");
            return AdmissionOutcome::Skipped;
        };

        let snapshot = match self.resources.get_resources().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("Failed to get resources: {}", e);
                self.notifier
                    .show_error(runner, &Message::GetResourcesFailed, Some(e.clone()));
                return AdmissionOutcome::ResourcesUnavailable(e);
            }
        };

        let required_mb = required_memory(project.configured_environments(), &runner.environment_id);
        let override_mb = runner.ram_mb;
        tracing::debug!(
            "Resources: {:?}, required={} MB, override={} MB",
            snapshot,
            required_mb,
            override_mb
        );

        match decide(&snapshot, required_mb, override_mb) {
            Decision::Proceed { ram } => self.launch(runner, ram),
            Decision::Reject(rejection) => self.reject(runner, rejection),
            Decision::Reconcile {
                override_mb,
                required_mb,
            } => {
                let flow = Reconciliation::new(override_mb, required_mb);
                match flow.run(self.dialogs.as_ref()).await {
                    Stage::Proceed => self.launch(runner, Some(required_mb)),
                    stage => {
                        tracing::info!("User declined to run with required memory ({:?})", stage);
                        AdmissionOutcome::Declined
                    }
                }
            }
        }
    }

    fn launch(&self, runner: &mut Runner, ram: Option<u64>) -> AdmissionOutcome {
        if let Some(ram) = ram {
            runner.set_ram(ram);
        }
        tracing::info!("Runner admitted with {:?} MB", ram);
        self.delegate.perform(runner);
        AdmissionOutcome::Launched { ram }
    }

    fn reject(&self, runner: &mut Runner, rejection: Rejection) -> AdmissionOutcome {
        tracing::warn!("Runner rejected: {}", rejection);
        runner.change_status(RunnerStatus::Failed);

        let message = rejection.message();
        match rejection.severity() {
            Severity::Warning => self.notifier.show_warning(&message),
            Severity::Error => self.notifier.show_error(runner, &message, None),
        }
        AdmissionOutcome::Rejected(rejection)
    }
}
