//! Configuration-driven entry points used by the CLI and library callers.

use crate::app::config::connect;
use crate::app::services::{InstanceResolver, InterfaceResolver};
use crate::domain::{
    AppError, Instance, InstanceId, InterfaceId, InventoryConfig, NetworkInterface,
};

/// Resolve network interfaces.
///
/// `None` lists every visible interface; `Some(&[])` resolves to nothing.
pub fn interfaces(
    config: &InventoryConfig,
    ids: Option<&[InterfaceId]>,
) -> Result<Vec<NetworkInterface>, AppError> {
    let service = connect(config)?;
    let resolver = InterfaceResolver::new(&*service);
    match ids {
        None => resolver.describe_all(),
        Some(ids) => resolver.describe_by_ids(ids),
    }
}

/// Resolve exactly one network interface.
pub fn interface(config: &InventoryConfig, id: &InterfaceId) -> Result<NetworkInterface, AppError> {
    let service = connect(config)?;
    InterfaceResolver::new(&*service).describe_by_id(id)
}

/// Resolve a batch of instances.
pub fn instances(config: &InventoryConfig, ids: &[InstanceId]) -> Result<Vec<Instance>, AppError> {
    let service = connect(config)?;
    InstanceResolver::new(&*service).describe_by_ids(ids)
}

/// Resolve exactly one instance.
pub fn instance(config: &InventoryConfig, id: &InstanceId) -> Result<Instance, AppError> {
    let service = connect(config)?;
    InstanceResolver::new(&*service).describe_by_id(id)
}
