use crate::core::domain::Runner;

// Fire-and-forget: progress is reported through the runner's status.
#[mockall::automock]
pub trait RunDelegate: std::fmt::Debug + Send + Sync {
    fn perform(&self, runner: &Runner);
}
