pub mod instance_id;
pub mod interface_id;
pub mod validation;

pub use instance_id::InstanceId;
pub use interface_id::InterfaceId;
