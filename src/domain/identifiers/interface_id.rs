use crate::domain::ResourceKind;
use crate::impl_validated_id;

/// A validated network interface identifier (e.g. `eni-0a1b2c3d`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceId(String);

impl_validated_id!(InterfaceId, ResourceKind::NetworkInterface);
