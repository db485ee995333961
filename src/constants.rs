pub const DEFAULT_CONFIG_PATH: &str = "runner-admission.toml";
pub const CONFIG_PATH_ENV: &str = "RUNNER_ADMISSION_CONFIG";

pub const WARNING_TITLE: &str = "Warning";
pub const DEFAULT_RUNNER_TITLE: &str = "runner";
