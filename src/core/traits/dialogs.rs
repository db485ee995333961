use crate::core::messages::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAnswer {
    Accepted,
    /// The user pressed "no" or closed the dialog.
    Dismissed,
}

#[mockall::automock]
#[async_trait::async_trait]
pub trait DialogProvider: std::fmt::Debug + Send + Sync {
    async fn show_message(&self, title: &str, body: &Message) -> DialogAnswer;

    async fn confirm(&self, title: &str, body: &Message) -> DialogAnswer;
}
