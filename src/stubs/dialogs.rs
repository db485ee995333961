use crate::core::{
    messages::Message,
    traits::dialogs::{DialogAnswer, DialogProvider},
};

#[derive(Debug, Clone)]
pub struct ScriptedDialogs {
    accept_message: bool,
    accept_confirm: bool,
}

impl ScriptedDialogs {
    pub fn new(accept_message: bool, accept_confirm: bool) -> Self {
        Self {
            accept_message,
            accept_confirm,
        }
    }
}

fn answer(accept: bool) -> DialogAnswer {
    if accept {
        DialogAnswer::Accepted
    } else {
        DialogAnswer::Dismissed
    }
}

#[async_trait::async_trait]
impl DialogProvider for ScriptedDialogs {
    async fn show_message(&self, title: &str, body: &Message) -> DialogAnswer {
        tracing::info!("[{}] {}", title, body);
        answer(self.accept_message)
    }

    async fn confirm(&self, title: &str, body: &Message) -> DialogAnswer {
        tracing::info!("[{}] {} (y/n)", title, body);
        answer(self.accept_confirm)
    }
}
