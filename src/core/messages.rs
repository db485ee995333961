use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    GetResourcesFailed,
    GetEnvironmentsFailed,
    TotalLessRequiredMemory {
        total: u64,
        required: u64,
    },
    AvailableLessRequiredMemory {
        total: u64,
        used: u64,
        required: u64,
    },
    TotalLessOverrideMemory {
        override_mb: u64,
        total: u64,
    },
    AvailableLessOverrideMemory,
    OverrideLessRequiredMemory {
        override_mb: u64,
        required: u64,
    },
    OverrideMemory,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::GetResourcesFailed => write!(f, "Failed to get workspace resources"),
            Message::GetEnvironmentsFailed => write!(f, "Failed to get runner environments"),
            Message::TotalLessRequiredMemory { total, required } => write!(
                f,
                "Workspace memory ({total} MB) is less than the memory required by the runner ({required} MB)"
            ),
            Message::AvailableLessRequiredMemory {
                total,
                used,
                required,
            } => write!(
                f,
                "Not enough free memory: {used} MB of {total} MB is in use and the runner requires {required} MB. \
                 Stop other runners and try again"
            ),
            Message::TotalLessOverrideMemory { override_mb, total } => write!(
                f,
                "Requested memory ({override_mb} MB) exceeds workspace memory ({total} MB)"
            ),
            Message::AvailableLessOverrideMemory => write!(
                f,
                "Not enough free memory for the requested size. Stop other runners or request less memory"
            ),
            Message::OverrideLessRequiredMemory {
                override_mb,
                required,
            } => write!(
                f,
                "Requested memory ({override_mb} MB) is less than the memory required by the runner ({required} MB)"
            ),
            Message::OverrideMemory => write!(f, "Run the runner with the required memory size?"),
        }
    }
}
