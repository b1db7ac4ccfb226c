use serde::Serialize;
use serde_json::{Map, Value};

use super::records::RawInstance;
use crate::domain::InstanceId;

/// A compute instance snapshot.
///
/// Provider metadata beyond the identifier is opaque and kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instance {
    id: InstanceId,
    #[serde(skip_serializing_if = "Map::is_empty")]
    metadata: Map<String, Value>,
}

impl Instance {
    pub fn new(id: InstanceId, metadata: Map<String, Value>) -> Self {
        Self { id, metadata }
    }

    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Look up a single provider field, e.g. `"InstanceType"`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }
}

impl From<RawInstance> for Instance {
    fn from(raw: RawInstance) -> Self {
        Self::new(raw.instance_id, raw.metadata)
    }
}
