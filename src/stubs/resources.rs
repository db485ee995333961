use std::time::Duration;

use crate::core::{
    domain::ResourceSnapshot,
    traits::resources::{ResourceError, ResourceProvider, ResourcesDescriptor},
};

#[derive(Debug, Clone)]
pub struct ResourceProviderStub {
    response: Result<String, ResourceError>,
    delay: Duration,
}

impl ResourceProviderStub {
    pub fn new(response: Result<String, ResourceError>, delay: Duration) -> Self {
        Self { response, delay }
    }

    pub fn from_descriptor(
        descriptor: &ResourcesDescriptor,
        delay: Duration,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(Ok(serde_json::to_string(descriptor)?), delay))
    }
}

#[async_trait::async_trait]
impl ResourceProvider for ResourceProviderStub {
    #[tracing::instrument]
    async fn get_resources(&self) -> Result<ResourceSnapshot, ResourceError> {
        tokio::time::sleep(self.delay).await;
        let body = self.response.clone()?;
        tracing::debug!("Resources response: {}", body);

        let descriptor: ResourcesDescriptor =
            serde_json::from_str(&body).map_err(|e| ResourceError::Transport {
                msg: format!("unexpected response: {}", e),
            })?;
        descriptor.try_into()
    }
}
