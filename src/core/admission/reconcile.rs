use crate::{
    constants::WARNING_TITLE,
    core::{
        messages::Message,
        traits::dialogs::{DialogAnswer, DialogProvider},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingInfoAck,
    AwaitingConfirm,
    Proceed,
    Abort,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Proceed | Stage::Abort)
    }
}

#[derive(Debug, Clone)]
pub struct Reconciliation {
    override_mb: u64,
    required_mb: u64,
    stage: Stage,
}

impl Reconciliation {
    pub fn new(override_mb: u64, required_mb: u64) -> Self {
        Self {
            override_mb,
            required_mb,
            stage: Stage::AwaitingInfoAck,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn on_accept(&mut self) -> Stage {
        self.stage = match self.stage {
            Stage::AwaitingInfoAck => Stage::AwaitingConfirm,
            Stage::AwaitingConfirm => Stage::Proceed,
            terminal => terminal,
        };
        self.stage
    }

    pub fn on_decline(&mut self) -> Stage {
        if !self.stage.is_terminal() {
            self.stage = Stage::Abort;
        }
        self.stage
    }

    #[tracing::instrument(skip(dialogs))]
    pub async fn run(mut self, dialogs: &dyn DialogProvider) -> Stage {
        loop {
            let answer = match self.stage {
                Stage::AwaitingInfoAck => {
                    let body = Message::OverrideLessRequiredMemory {
                        override_mb: self.override_mb,
                        required: self.required_mb,
                    };
                    dialogs.show_message(WARNING_TITLE, &body).await
                }
                Stage::AwaitingConfirm => {
                    dialogs
                        .confirm(WARNING_TITLE, &Message::OverrideMemory)
                        .await
                }
                terminal => return terminal,
            };
            tracing::debug!("Answer at {:?}: {:?}", self.stage(), answer);

            match answer {
                DialogAnswer::Accepted => self.on_accept(),
                DialogAnswer::Dismissed => self.on_decline(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::dialogs::MockDialogProvider;
    use mockall::Sequence;

    #[test]
    fn test_transitions() {
        let mut flow = Reconciliation::new(128, 384);
        assert_eq!(flow.stage(), Stage::AwaitingInfoAck);
        assert_eq!(flow.on_accept(), Stage::AwaitingConfirm);
        assert_eq!(flow.on_accept(), Stage::Proceed);
        assert_eq!(flow.on_decline(), Stage::Proceed);

        let mut flow = Reconciliation::new(128, 384);
        assert_eq!(flow.on_decline(), Stage::Abort);
        assert_eq!(flow.on_accept(), Stage::Abort);

        let mut flow = Reconciliation::new(128, 384);
        flow.on_accept();
        assert_eq!(flow.on_decline(), Stage::Abort);
    }

    #[tokio::test]
    async fn test_both_gates_accepted() {
        let mut seq = Sequence::new();
        let mut dialogs = MockDialogProvider::new();
        dialogs
            .expect_show_message()
            .withf(|title, body| {
                title == WARNING_TITLE
                    && *body
                        == Message::OverrideLessRequiredMemory {
                            override_mb: 128,
                            required: 384,
                        }
            })
            .times(1)
            .in_sequence(&mut seq)
            .return_const(DialogAnswer::Accepted);
        dialogs
            .expect_confirm()
            .withf(|title, body| title == WARNING_TITLE && *body == Message::OverrideMemory)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(DialogAnswer::Accepted);

        let stage = Reconciliation::new(128, 384).run(&dialogs).await;
        assert_eq!(stage, Stage::Proceed);
    }

    #[tokio::test]
    async fn test_dismissed_info_skips_confirm() {
        let mut dialogs = MockDialogProvider::new();
        dialogs
            .expect_show_message()
            .times(1)
            .return_const(DialogAnswer::Dismissed);
        dialogs.expect_confirm().never();

        let stage = Reconciliation::new(128, 384).run(&dialogs).await;
        assert_eq!(stage, Stage::Abort);
    }

    #[tokio::test]
    async fn test_declined_confirm_aborts() {
        let mut dialogs = MockDialogProvider::new();
        dialogs
            .expect_show_message()
            .times(1)
            .return_const(DialogAnswer::Accepted);
        dialogs
            .expect_confirm()
            .times(1)
            .return_const(DialogAnswer::Dismissed);

        let stage = Reconciliation::new(128, 384).run(&dialogs).await;
        assert_eq!(stage, Stage::Abort);
    }
}
