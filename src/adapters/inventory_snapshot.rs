//! Offline inventory served from a JSON snapshot.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{
    AppError, InstanceId, InterfaceId, RawInstance, RawNetworkInterface, RawReservation,
    UpstreamCause,
};
use crate::ports::InventoryService;

/// Inventory document in the provider's describe output shapes.
///
/// ```json
/// {"NetworkInterfaces": [...], "Reservations": [...]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventorySnapshot {
    #[serde(default)]
    pub network_interfaces: Vec<RawNetworkInterface>,
    #[serde(default)]
    pub reservations: Vec<RawReservation>,
}

impl InventorySnapshot {
    /// Load a snapshot document from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Failed to read snapshot {}: {}", path.display(), e))
        })?;
        Self::parse(&content).map_err(|e| {
            AppError::config_error(format!("Invalid snapshot {}: {}", path.display(), e))
        })
    }

    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

impl InventoryService for InventorySnapshot {
    fn describe_network_interfaces(
        &self,
        filter: Option<&[InterfaceId]>,
    ) -> Result<Vec<RawNetworkInterface>, UpstreamCause> {
        Ok(self
            .network_interfaces
            .iter()
            .filter(|raw| filter.is_none_or(|ids| ids.contains(&raw.network_interface_id)))
            .cloned()
            .collect())
    }

    /// Reservations with at least one requested member, stripped to those members.
    fn describe_instances(&self, ids: &[InstanceId]) -> Result<Vec<RawReservation>, UpstreamCause> {
        Ok(self
            .reservations
            .iter()
            .filter_map(|reservation| {
                let instances: Vec<RawInstance> = reservation
                    .instances
                    .iter()
                    .filter(|raw| ids.contains(&raw.instance_id))
                    .cloned()
                    .collect();
                (!instances.is_empty()).then(|| RawReservation {
                    reservation_id: reservation.reservation_id.clone(),
                    instances,
                })
            })
            .collect())
    }
}
