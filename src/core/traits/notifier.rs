use crate::core::{domain::Runner, messages::Message, traits::resources::ResourceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[mockall::automock]
pub trait Notifier: std::fmt::Debug + Send + Sync {
    fn show_warning(&self, message: &Message);

    fn show_error(&self, runner: &Runner, message: &Message, cause: Option<ResourceError>);

    /// Error that is not tied to a particular runner.
    fn show_error_message(&self, message: &Message);
}
