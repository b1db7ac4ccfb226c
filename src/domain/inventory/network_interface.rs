use serde::Serialize;
use serde_json::{Map, Value};

use super::instance::Instance;
use super::records::{Attachment, RawNetworkInterface};
use crate::domain::{InstanceId, InterfaceId};

/// A network interface snapshot with its attached instance merged in.
///
/// The instance is held by value. Interfaces never point back from the
/// instance side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkInterface {
    id: InterfaceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attached_instance: Option<Instance>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    metadata: Map<String, Value>,
}

impl NetworkInterface {
    pub fn id(&self) -> &InterfaceId {
        &self.id
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Identifier of the attached instance, taken from the raw attachment data.
    ///
    /// Available whether or not the instance itself was resolved.
    pub fn attached_instance_id(&self) -> Option<&InstanceId> {
        self.attachment.as_ref().and_then(|a| a.instance_id.as_ref())
    }

    /// The attached instance, populated by the merge step of a resolution.
    pub fn attached_instance(&self) -> Option<&Instance> {
        self.attached_instance.as_ref()
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub(crate) fn with_instance(mut self, instance: Instance) -> Self {
        self.attached_instance = Some(instance);
        self
    }
}

impl From<RawNetworkInterface> for NetworkInterface {
    fn from(raw: RawNetworkInterface) -> Self {
        Self {
            id: raw.network_interface_id,
            attachment: raw.attachment,
            attached_instance: None,
            metadata: raw.extra,
        }
    }
}
