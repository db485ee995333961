use crate::core::domain::Environment;

#[mockall::automock]
#[async_trait::async_trait]
pub trait EnvironmentService: std::fmt::Debug + Send + Sync {
    async fn get_environments(&self) -> Result<Vec<Environment>, EnvironmentError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvironmentError {
    #[error("environment request failed: {msg}")]
    Transport { msg: String },
}
