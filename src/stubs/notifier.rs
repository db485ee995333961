use crate::core::{
    domain::Runner,
    messages::Message,
    traits::{notifier::Notifier, resources::ResourceError},
};

#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_warning(&self, message: &Message) {
        tracing::warn!(target: "notification", "{}", message);
    }

    fn show_error(&self, runner: &Runner, message: &Message, cause: Option<ResourceError>) {
        match cause {
            Some(cause) => tracing::error!(
                target: "notification",
                runner = %runner.title,
                "{}: {}",
                message,
                cause
            ),
            None => tracing::error!(target: "notification", runner = %runner.title, "{}", message),
        }
    }

    fn show_error_message(&self, message: &Message) {
        tracing::error!(target: "notification", "{}", message);
    }
}
