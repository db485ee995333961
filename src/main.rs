use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::config::load_config;
use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::core::admission::evaluator::{AdmissionEvaluator, AdmissionOutcome};
use crate::core::catalog::EnvironmentCatalog;
use crate::core::domain::Project;
use crate::core::launch::resolve_launch;
use crate::core::presentation::RunnerItem;
use crate::core::registry::RunnerRegistry;
use crate::core::traits::resources::{ResourceError, ResourceProvider, ResourcesDescriptor};
use crate::stubs::delegate::RunDelegateStub;
use crate::stubs::dialogs::ScriptedDialogs;
use crate::stubs::environments::EnvironmentServiceStub;
use crate::stubs::notifier::TracingNotifier;
use crate::stubs::project::ProjectContextStub;
use crate::stubs::resources::ResourceProviderStub;

mod config;
mod constants;
mod core;
mod stubs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    set_panic_hook();

    let config = load_config(&config_path())?;
    let delay = Duration::from_millis(config.resources.delay_ms);
    let project: Option<Project> = config.project.clone().map(Into::into);

    let registry = Arc::new(RunnerRegistry::new());
    let notifier = Arc::new(TracingNotifier);

    let catalog = EnvironmentCatalog::new(
        Arc::new(EnvironmentServiceStub::new(
            Ok(config.system_environments.clone()),
            delay,
        )),
        notifier.clone(),
    );
    let selected = match &project {
        Some(project) => catalog
            .environments_for(&project.project_type)
            .await
            .into_iter()
            .find(|environment| environment.id == config.runner.environment_id),
        None => None,
    };
    let launch = resolve_launch(project.as_ref(), selected.as_ref());
    tracing::info!("Launch request: {:?}", launch);

    let Some(mut runner) = registry.launch(
        launch,
        &config.runner.title,
        &config.runner.environment_id,
        config.runner.ram,
    ) else {
        tracing::info!("No project open, nothing launched");
        return Ok(());
    };

    let resources: Arc<dyn ResourceProvider> = if config.resources.fail {
        Arc::new(ResourceProviderStub::new(
            Err(ResourceError::Transport {
                msg: "simulated failure".to_string(),
            }),
            delay,
        ))
    } else {
        let descriptor = ResourcesDescriptor {
            total_memory: config.resources.total_memory.clone(),
            used_memory: config.resources.used_memory.clone(),
        };
        Arc::new(ResourceProviderStub::from_descriptor(&descriptor, delay)?)
    };

    let delegate = Arc::new(RunDelegateStub::new(registry.clone(), delay));
    let evaluator = AdmissionEvaluator::new(
        resources,
        Arc::new(ProjectContextStub::new(project)),
        delegate.clone(),
        notifier,
        Arc::new(ScriptedDialogs::new(
            config.dialogs.accept_info,
            config.dialogs.accept_confirm,
        )),
    );

    let runner_id = runner.id;
    let outcome = evaluator.evaluate(&mut runner).await;
    tracing::info!("Admission outcome: {:?}", outcome);

    match outcome {
        AdmissionOutcome::Launched { .. } => delegate.wait(&runner_id).await,
        _ => registry.store(runner),
    }
    tracing::info!(
        "Runner status: {:?}",
        registry.get(&runner_id).map(|runner| runner.status)
    );

    for runner in registry.history() {
        let item = RunnerItem::from(&runner);
        tracing::info!(
            "{} | {} | {} | {:?}",
            item.start_time,
            item.name,
            item.description,
            item.presentation
        );
    }

    Ok(())
}

fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
        .into()
}

fn set_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        tracing::error!(
            message = "panic occurred",
            panic = %panic_info
        );
    }));
}
