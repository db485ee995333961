use crate::core::{domain::Project, traits::project::ProjectContext};

#[derive(Debug, Clone)]
pub struct ProjectContextStub {
    project: Option<Project>,
}

impl ProjectContextStub {
    pub fn new(project: Option<Project>) -> Self {
        Self { project }
    }
}

impl ProjectContext for ProjectContextStub {
    fn current_project(&self) -> Option<Project> {
        self.project.clone()
    }
}
