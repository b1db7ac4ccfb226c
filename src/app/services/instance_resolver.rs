//! Instance lookup over the inventory port.

use tracing::debug;

use super::attachments::distinct;
use crate::domain::{AppError, Instance, InstanceId, ResourceKind};
use crate::ports::InventoryService;

pub(crate) const DESCRIBE_INSTANCES: &str = "DescribeInstances";

/// Resolves instance identifiers into flat `Instance` values.
///
/// Reservations returned by the provider are flattened here; callers never
/// see them.
pub struct InstanceResolver<'a, S: InventoryService + ?Sized> {
    service: &'a S,
}

impl<'a, S: InventoryService + ?Sized> InstanceResolver<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Resolve exactly one instance.
    pub fn describe_by_id(&self, id: &InstanceId) -> Result<Instance, AppError> {
        let mut instances = self.describe_by_ids(std::slice::from_ref(id))?;
        instances.retain(|instance| instance.id() == id);
        match instances.len() {
            0 => Err(AppError::NotFound { kind: ResourceKind::Instance, id: id.to_string() }),
            1 => Ok(instances.remove(0)),
            count => Err(AppError::AmbiguousResult {
                kind: ResourceKind::Instance,
                id: id.to_string(),
                count,
            }),
        }
    }

    /// Resolve a batch of instances in a single describe call.
    ///
    /// The result may be shorter than `ids`: identifiers the provider does not
    /// return, or that map to an empty reservation, contribute nothing.
    pub fn describe_by_ids(&self, ids: &[InstanceId]) -> Result<Vec<Instance>, AppError> {
        if ids.is_empty() {
            debug!("no instance identifiers requested, skipping describe call");
            return Ok(Vec::new());
        }

        let requested = distinct(ids.iter().cloned());
        let reservations = self
            .service
            .describe_instances(&requested)
            .map_err(|e| AppError::upstream(DESCRIBE_INSTANCES, e))?;

        let reservation_count = reservations.len();
        let instances: Vec<Instance> = reservations
            .into_iter()
            .flat_map(|reservation| reservation.instances)
            .map(Instance::from)
            .collect();

        debug!(
            requested = requested.len(),
            reservations = reservation_count,
            resolved = instances.len(),
            "described instances"
        );
        Ok(instances)
    }
}
