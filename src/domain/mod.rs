pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod inventory;

pub use configuration::{EniscopeConfig, InventoryConfig, InventorySource};
pub use error::{AppError, ResourceKind, UpstreamCause};
pub use identifiers::{InstanceId, InterfaceId};
pub use inventory::{
    Attachment, Instance, NetworkInterface, RawInstance, RawNetworkInterface, RawReservation,
};
