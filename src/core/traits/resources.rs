use serde::{Deserialize, Serialize};

use crate::core::domain::ResourceSnapshot;

#[mockall::automock]
#[async_trait::async_trait]
pub trait ResourceProvider: std::fmt::Debug + Send + Sync {
    async fn get_resources(&self) -> Result<ResourceSnapshot, ResourceError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error("resource request failed: {msg}")]
    Transport { msg: String },
    #[error("malformed {field} in resources descriptor: {value:?}")]
    Malformed { field: String, value: String },
}

/// Resource usage as the runner service sends it: memory sizes as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesDescriptor {
    pub total_memory: String,
    pub used_memory: String,
}

impl TryFrom<ResourcesDescriptor> for ResourceSnapshot {
    type Error = ResourceError;

    fn try_from(descriptor: ResourcesDescriptor) -> Result<Self, ResourceError> {
        Ok(ResourceSnapshot::new(
            parse_memory("totalMemory", &descriptor.total_memory)?,
            parse_memory("usedMemory", &descriptor.used_memory)?,
        ))
    }
}

fn parse_memory(field: &str, value: &str) -> Result<u64, ResourceError> {
    value
        .trim()
        .parse()
        .map_err(|_| ResourceError::Malformed {
            field: field.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_from_json() {
        let descriptor: ResourcesDescriptor =
            serde_json::from_str(r#"{"totalMemory":"1024","usedMemory":"256"}"#).unwrap();
        let snapshot: ResourceSnapshot = descriptor.try_into().unwrap();
        assert_eq!(snapshot, ResourceSnapshot::new(1024, 256));
        assert_eq!(snapshot.available_memory(), 768);
    }

    #[test]
    fn test_malformed_descriptor() {
        let descriptor = ResourcesDescriptor {
            total_memory: "1024".to_string(),
            used_memory: "-5".to_string(),
        };
        let result: Result<ResourceSnapshot, _> = descriptor.try_into();
        assert_eq!(
            result,
            Err(ResourceError::Malformed {
                field: "usedMemory".to_string(),
                value: "-5".to_string(),
            })
        );
    }
}
