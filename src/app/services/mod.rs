mod attachments;
pub mod instance_resolver;
pub mod interface_resolver;

pub use instance_resolver::InstanceResolver;
pub use interface_resolver::InterfaceResolver;
