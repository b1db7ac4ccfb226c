use crate::domain::ResourceKind;
use crate::impl_validated_id;

/// A validated compute instance identifier (e.g. `i-0a1b2c3d`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(String);

impl_validated_id!(InstanceId, ResourceKind::Instance);
