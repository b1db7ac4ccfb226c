//! eniscope: read-only lookup of network interfaces and their attached instances.
//!
//! Interface resolution is a two-phase pipeline: one describe call for the
//! interfaces, then a single batched instance lookup for every distinct
//! attachment, merged back onto the interfaces that reference it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{HttpInventoryClient, InventorySnapshot, TransportError};
pub use app::api::{instance, instances, interface, interfaces};
pub use app::config::{ConfigOverrides, connect, load_config};
pub use app::services::{InstanceResolver, InterfaceResolver};
pub use domain::{
    AppError, Attachment, EniscopeConfig, Instance, InstanceId, InterfaceId, InventoryConfig,
    NetworkInterface, RawInstance, RawNetworkInterface, RawReservation, ResourceKind,
    UpstreamCause,
};
pub use ports::InventoryService;
