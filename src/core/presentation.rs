use crate::core::domain::{Runner, RunnerStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Blue,
    Yellow,
    Red,
    White,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    InProgress,
    InQueue,
    Failed,
    Timeout,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    pub color: ColorClass,
    pub icon: StatusIcon,
}

impl RunnerStatus {
    // No wildcard arm: a new status has to be given a presentation here.
    pub fn presentation(self) -> StatusPresentation {
        let (color, icon) = match self {
            RunnerStatus::InProgress => (ColorClass::Blue, StatusIcon::InProgress),
            RunnerStatus::InQueue => (ColorClass::Yellow, StatusIcon::InQueue),
            RunnerStatus::Failed => (ColorClass::Red, StatusIcon::Failed),
            RunnerStatus::Timeout => (ColorClass::White, StatusIcon::Timeout),
            RunnerStatus::Stopped => (ColorClass::Red, StatusIcon::Done),
            RunnerStatus::Done => (ColorClass::Green, StatusIcon::Done),
        };
        StatusPresentation { color, icon }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerItem {
    pub name: String,
    pub description: String,
    pub start_time: String,
    pub presentation: StatusPresentation,
}

impl From<&Runner> for RunnerItem {
    fn from(runner: &Runner) -> Self {
        Self {
            name: runner.title.clone(),
            description: format!("{} MB", runner.ram_mb),
            start_time: runner.created_at.format("%H:%M:%S").to_string(),
            presentation: runner.status.presentation(),
        }
    }
}
