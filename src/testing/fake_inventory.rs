use std::io;
use std::sync::{Arc, Mutex};

use crate::domain::{
    InstanceId, InterfaceId, RawInstance, RawNetworkInterface, RawReservation, UpstreamCause,
};
use crate::ports::InventoryService;

pub fn eni(id: &str) -> InterfaceId {
    InterfaceId::new(id).unwrap()
}

pub fn inst(id: &str) -> InstanceId {
    InstanceId::new(id).unwrap()
}

/// In-memory inventory that records every describe call it receives.
#[derive(Clone, Default)]
pub struct FakeInventory {
    interfaces: Vec<RawNetworkInterface>,
    reservations: Vec<RawReservation>,
    interface_response: Option<Vec<RawNetworkInterface>>,
    instance_response: Option<Vec<RawReservation>>,
    interface_failure: Option<String>,
    instance_failure: Option<String>,
    pub interface_calls: Arc<Mutex<Vec<Option<Vec<InterfaceId>>>>>,
    pub instance_calls: Arc<Mutex<Vec<Vec<InstanceId>>>>,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detached(mut self, id: &str) -> Self {
        self.interfaces.push(RawNetworkInterface::detached(eni(id)));
        self
    }

    pub fn with_attached(mut self, id: &str, instance_id: &str) -> Self {
        self.interfaces.push(RawNetworkInterface::attached(eni(id), inst(instance_id)));
        self
    }

    /// Add a reservation holding one instance per identifier.
    pub fn with_instances(mut self, ids: &[&str]) -> Self {
        let instances = ids.iter().map(|id| RawInstance::new(inst(id))).collect();
        self.reservations.push(RawReservation::of(instances));
        self
    }

    /// Return this interface list verbatim, ignoring the filter.
    pub fn respond_interfaces(mut self, response: Vec<RawNetworkInterface>) -> Self {
        self.interface_response = Some(response);
        self
    }

    /// Return these reservations verbatim, ignoring the requested identifiers.
    pub fn respond_instances(mut self, response: Vec<RawReservation>) -> Self {
        self.instance_response = Some(response);
        self
    }

    pub fn fail_interfaces(mut self, message: &str) -> Self {
        self.interface_failure = Some(message.to_string());
        self
    }

    pub fn fail_instances(mut self, message: &str) -> Self {
        self.instance_failure = Some(message.to_string());
        self
    }

    pub fn interface_calls(&self) -> Vec<Option<Vec<InterfaceId>>> {
        self.interface_calls.lock().unwrap().clone()
    }

    pub fn instance_calls(&self) -> Vec<Vec<InstanceId>> {
        self.instance_calls.lock().unwrap().clone()
    }
}

impl InventoryService for FakeInventory {
    fn describe_network_interfaces(
        &self,
        filter: Option<&[InterfaceId]>,
    ) -> Result<Vec<RawNetworkInterface>, UpstreamCause> {
        self.interface_calls.lock().unwrap().push(filter.map(<[InterfaceId]>::to_vec));

        if let Some(message) = &self.interface_failure {
            return Err(io::Error::other(message.clone()).into());
        }
        if let Some(response) = &self.interface_response {
            return Ok(response.clone());
        }

        Ok(self
            .interfaces
            .iter()
            .filter(|raw| filter.is_none_or(|ids| ids.contains(&raw.network_interface_id)))
            .cloned()
            .collect())
    }

    fn describe_instances(&self, ids: &[InstanceId]) -> Result<Vec<RawReservation>, UpstreamCause> {
        self.instance_calls.lock().unwrap().push(ids.to_vec());

        if let Some(message) = &self.instance_failure {
            return Err(io::Error::other(message.clone()).into());
        }
        if let Some(response) = &self.instance_response {
            return Ok(response.clone());
        }

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
                (!instances.is_empty()).then(|| RawReservation::of(instances))
            })
            .collect())
    }
}
