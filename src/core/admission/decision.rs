use crate::core::{domain::ResourceSnapshot, messages::Message, traits::notifier::Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Start the runner. `ram` is the size to set on it, `None` leaves it untouched.
    Proceed { ram: Option<u64> },
    Reconcile { override_mb: u64, required_mb: u64 },
    Reject(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("total memory {total} MB is less than required {required} MB")]
    InsufficientTotal { total: u64, required: u64 },
    #[error("{used} MB of {total} MB in use, less than required {required} MB available")]
    InsufficientAvailable { total: u64, used: u64, required: u64 },
    #[error("override memory {override_mb} MB exceeds total memory {total} MB")]
    OverrideExceedsTotal { override_mb: u64, total: u64 },
    #[error("override memory {override_mb} MB exceeds available memory {available} MB")]
    OverrideExceedsAvailable { override_mb: u64, available: u64 },
}

impl Rejection {
    // OverrideExceedsAvailable is the only rejection reported as an error,
    // as the runner panel has always reported it.
    pub fn severity(&self) -> Severity {
        match self {
            Rejection::InsufficientTotal { .. }
            | Rejection::InsufficientAvailable { .. }
            | Rejection::OverrideExceedsTotal { .. } => Severity::Warning,
            Rejection::OverrideExceedsAvailable { .. } => Severity::Error,
        }
    }

    pub fn message(&self) -> Message {
        match *self {
            Rejection::InsufficientTotal { total, required } => {
                Message::TotalLessRequiredMemory { total, required }
            }
            Rejection::InsufficientAvailable {
                total,
                used,
                required,
            } => Message::AvailableLessRequiredMemory {
                total,
                used,
                required,
            },
            Rejection::OverrideExceedsTotal { override_mb, total } => {
                Message::TotalLessOverrideMemory { override_mb, total }
            }
            Rejection::OverrideExceedsAvailable { .. } => Message::AvailableLessOverrideMemory,
        }
    }
}

// Requirement then override, each against total then available memory.
// First failure wins; a value equal to the limit passes.
pub fn decide(snapshot: &ResourceSnapshot, required_mb: u64, override_mb: u64) -> Decision {
    let total = snapshot.total_memory;
    let used = snapshot.used_memory;
    let available = snapshot.available_memory();

    if required_mb > 0 {
        if total < required_mb {
            return Decision::Reject(Rejection::InsufficientTotal {
                total,
                required: required_mb,
            });
        }
        if available < required_mb {
            return Decision::Reject(Rejection::InsufficientAvailable {
                total,
                used,
                required: required_mb,
            });
        }
    }

    if override_mb == 0 {
        let ram = (required_mb > 0).then_some(required_mb);
        return Decision::Proceed { ram };
    }

    if total < override_mb {
        return Decision::Reject(Rejection::OverrideExceedsTotal { override_mb, total });
    }
    if available < override_mb {
        return Decision::Reject(Rejection::OverrideExceedsAvailable {
            override_mb,
            available,
        });
    }

    if override_mb < required_mb {
        return Decision::Reconcile {
            override_mb,
            required_mb,
        };
    }

    Decision::Proceed {
        ram: Some(override_mb),
    }
}
