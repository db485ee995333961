use std::collections::HashMap;

use crate::core::domain::{Environment, Project, Runner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRequest {
    Default,
    Custom {
        environment_id: String,
        title: String,
        options: HashMap<String, String>,
    },
}

impl LaunchRequest {
    /// `Default` runs with the given title and environment, `Custom` with its own.
    pub fn into_runner(self, title: &str, environment_id: &str, ram_mb: u64) -> Runner {
        match self {
            LaunchRequest::Default => Runner::new(title, environment_id, ram_mb),
            LaunchRequest::Custom {
                environment_id,
                title,
                options,
            } => Runner::new(&title, &environment_id, ram_mb).with_options(options),
        }
    }
}

pub fn resolve_launch(
    project: Option<&Project>,
    selected: Option<&Environment>,
) -> Option<LaunchRequest> {
    let project = project?;

    let Some(environment) = selected else {
        return Some(LaunchRequest::Default);
    };

    let is_project_runner = project
        .runner
        .as_deref()
        .is_some_and(|runner| runner.ends_with(&format!("/{}", environment.name)));
    if is_project_runner {
        return Some(LaunchRequest::Default);
    }

    Some(LaunchRequest::Custom {
        environment_id: environment.id.clone(),
        title: environment.name.clone(),
        options: environment.options.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(runner: &str) -> Project {
        Project {
            name: "project".to_string(),
            project_type: "java".to_string(),
            runner: Some(runner.to_string()),
            environments: None,
        }
    }

    fn environment(name: &str) -> Environment {
        Environment {
            id: format!("system:/java/web/{}", name),
            name: name.to_string(),
            category: "java".to_string(),
            options: HashMap::from([("debug".to_string(), "false".to_string())]),
        }
    }

    #[test]
    fn test_nothing_without_project() {
        assert_eq!(resolve_launch(None, Some(&environment("tomcat7"))), None);
    }

    #[test]
    fn test_default_without_selection() {
        let project = project("system:/java/web/tomcat7");
        assert_eq!(resolve_launch(Some(&project), None), Some(LaunchRequest::Default));
    }

    #[test]
    fn test_default_when_selection_is_project_runner() {
        let project = project("system:/java/web/tomcat7");
        let environment = environment("tomcat7");
        assert_eq!(
            resolve_launch(Some(&project), Some(&environment)),
            Some(LaunchRequest::Default)
        );
    }

    #[test]
    fn test_custom_environment() {
        let project = project("system:/java/web/tomcat7tomcat7");
        let environment = environment("tomcat7");

        let request = resolve_launch(Some(&project), Some(&environment));

        assert_eq!(
            request,
            Some(LaunchRequest::Custom {
                environment_id: "system:/java/web/tomcat7".to_string(),
                title: "tomcat7".to_string(),
                options: environment.options.clone(),
            })
        );
    }

    #[test]
    fn test_default_request_uses_given_environment() {
        let runner = LaunchRequest::Default.into_runner("runner", "system:/java/web/jetty9", 128);

        assert_eq!(runner.title, "runner");
        assert_eq!(runner.environment_id, "system:/java/web/jetty9");
        assert_eq!(runner.ram_mb, 128);
        assert!(runner.options.is_empty());
    }

    #[test]
    fn test_custom_request_carries_environment_and_options() {
        let project = project("system:/java/web/jetty9");
        let environment = environment("tomcat7");
        let request = resolve_launch(Some(&project), Some(&environment)).unwrap();

        let runner = request.into_runner("runner", "system:/java/web/jetty9", 0);

        assert_eq!(runner.title, "tomcat7");
        assert_eq!(runner.environment_id, "system:/java/web/tomcat7");
        assert_eq!(runner.options, environment.options);
    }
}
