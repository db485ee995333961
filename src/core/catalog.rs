use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::core::{
    domain::Environment,
    messages::Message,
    traits::{environments::EnvironmentService, notifier::Notifier},
};

#[derive(Debug)]
pub struct EnvironmentCatalog {
    service: Arc<dyn EnvironmentService>,
    notifier: Arc<dyn Notifier>,
    environments: OnceCell<Vec<Environment>>,
}

impl EnvironmentCatalog {
    pub fn new(service: Arc<dyn EnvironmentService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            environments: OnceCell::new(),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn environments_for(&self, project_type: &str) -> Vec<Environment> {
        let environments = self
            .environments
            .get_or_try_init(|| self.service.get_environments())
            .await;

        match environments {
            Ok(environments) => environments
                .iter()
                .filter(|environment| environment.category == project_type)
                .cloned()
                .collect(),
            Err(e) => {
                tracing::error!("Failed to get environments: {}", e);
                self.notifier
                    .show_error_message(&Message::GetEnvironmentsFailed);
                Vec::new()
            }
        }
    }
}
