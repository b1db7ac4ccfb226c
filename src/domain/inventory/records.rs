//! Raw inventory records as returned by the describe calls.
//!
//! Field names follow the provider's PascalCase wire shapes. Fields this crate
//! does not interpret are kept in a flattened map so they survive into the
//! domain values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{InstanceId, InterfaceId};

/// One network interface record from `DescribeNetworkInterfaces`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawNetworkInterface {
    pub network_interface_id: InterfaceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawNetworkInterface {
    /// An interface record with no attachment.
    pub fn detached(id: InterfaceId) -> Self {
        Self { network_interface_id: id, attachment: None, extra: Map::new() }
    }

    /// An interface record attached to `instance_id`.
    pub fn attached(id: InterfaceId, instance_id: InstanceId) -> Self {
        Self {
            network_interface_id: id,
            attachment: Some(Attachment::to_instance(instance_id)),
            extra: Map::new(),
        }
    }

    /// Instance identifier carried by the attachment, if any.
    pub fn attached_instance_id(&self) -> Option<&InstanceId> {
        self.attachment.as_ref().and_then(|a| a.instance_id.as_ref())
    }
}

/// Attachment of an interface to a compute instance.
///
/// Interfaces owned by managed services can report an attachment without an
/// instance identifier; those resolve to no instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<InstanceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Attachment {
    pub fn to_instance(instance_id: InstanceId) -> Self {
        Self { instance_id: Some(instance_id), attachment_id: None, device_index: None, status: None }
    }
}

/// A reservation groups zero or more instances in a `DescribeInstances` result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawReservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
    #[serde(default)]
    pub instances: Vec<RawInstance>,
}

impl RawReservation {
    pub fn of(instances: Vec<RawInstance>) -> Self {
        Self { reservation_id: None, instances }
    }
}

/// One instance record inside a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawInstance {
    pub instance_id: InstanceId,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl RawInstance {
    pub fn new(instance_id: InstanceId) -> Self {
        Self { instance_id, metadata: Map::new() }
    }
}
