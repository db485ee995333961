use crate::core::domain::Project;

#[mockall::automock]
pub trait ProjectContext: std::fmt::Debug + Send + Sync {
    fn current_project(&self) -> Option<Project>;
}
