use std::time::Duration;

use crate::core::{
    domain::Environment,
    traits::environments::{EnvironmentError, EnvironmentService},
};

#[derive(Debug, Clone)]
pub struct EnvironmentServiceStub {
    result: Result<Vec<Environment>, EnvironmentError>,
    delay: Duration,
}

impl EnvironmentServiceStub {
    pub fn new(result: Result<Vec<Environment>, EnvironmentError>, delay: Duration) -> Self {
        Self { result, delay }
    }
}

#[async_trait::async_trait]
impl EnvironmentService for EnvironmentServiceStub {
    #[tracing::instrument]
    async fn get_environments(&self) -> Result<Vec<Environment>, EnvironmentError> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!("Environments result: {:?}", self.result);

        self.result.clone()
    }
}
