//! Inventory service port definition.

use crate::domain::{InstanceId, InterfaceId, RawNetworkInterface, RawReservation, UpstreamCause};

/// Port for the provider's read-only describe calls.
///
/// Implementations own transport, authentication and timeouts. Failures are
/// reported as an opaque cause; callers wrap it without inspecting it.
pub trait InventoryService {
    /// Describe network interfaces. `None` means no filter (every visible interface).
    fn describe_network_interfaces(
        &self,
        filter: Option<&[InterfaceId]>,
    ) -> Result<Vec<RawNetworkInterface>, UpstreamCause>;

    /// Describe the instances with the given identifiers, grouped into reservations.
    fn describe_instances(&self, ids: &[InstanceId]) -> Result<Vec<RawReservation>, UpstreamCause>;
}
