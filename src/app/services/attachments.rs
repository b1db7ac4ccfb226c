//! Attachment batching and merge helpers for interface resolution.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::domain::{
    AppError, Instance, InstanceId, NetworkInterface, RawNetworkInterface, ResourceKind,
};

/// Collapse duplicates while keeping first-seen order.
pub(crate) fn distinct<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

/// Distinct instance identifiers referenced by attachments, in first-seen order.
///
/// Interfaces without an attached instance are skipped.
pub(crate) fn attached_instance_ids(raw: &[RawNetworkInterface]) -> Vec<InstanceId> {
    distinct(raw.iter().filter_map(|r| r.attached_instance_id()).cloned())
}

/// Fail when the same interface identifier appears more than once.
pub(crate) fn ensure_unique_interfaces(raw: &[RawNetworkInterface]) -> Result<(), AppError> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in raw {
        *counts.entry(record.network_interface_id.as_str()).or_default() += 1;
    }

    // Report the first duplicate in input order.
    for record in raw {
        let count = counts[record.network_interface_id.as_str()];
        if count > 1 {
            return Err(AppError::AmbiguousResult {
                kind: ResourceKind::NetworkInterface,
                id: record.network_interface_id.to_string(),
                count,
            });
        }
    }
    Ok(())
}

/// Index resolved instances by identifier, rejecting duplicates.
pub(crate) fn index_instances(
    instances: Vec<Instance>,
) -> Result<HashMap<InstanceId, Instance>, AppError> {
    let mut index: HashMap<InstanceId, Instance> = HashMap::with_capacity(instances.len());
    let mut duplicates: HashMap<InstanceId, usize> = HashMap::new();

    for instance in instances {
        let id = instance.id().clone();
        if index.insert(id.clone(), instance).is_some() {
            *duplicates.entry(id).or_insert(1) += 1;
        }
    }

    match duplicates.into_iter().min_by(|a, b| a.0.cmp(&b.0)) {
        Some((id, count)) => {
            Err(AppError::AmbiguousResult { kind: ResourceKind::Instance, id: id.to_string(), count })
        }
        None => Ok(index),
    }
}

/// Build domain interfaces, attaching each referenced instance from `instances`.
///
/// Every attached identifier must be present in `instances`.
pub(crate) fn merge(
    raw: Vec<RawNetworkInterface>,
    instances: &HashMap<InstanceId, Instance>,
) -> Result<Vec<NetworkInterface>, AppError> {
    raw.into_iter()
        .map(|record| {
            let instance_id = record.attached_instance_id().cloned();
            let interface = NetworkInterface::from(record);
            match instance_id {
                None => Ok(interface),
                Some(id) => match instances.get(&id) {
                    Some(instance) => Ok(interface.with_instance(instance.clone())),
                    None => {
                        Err(AppError::NotFound { kind: ResourceKind::Instance, id: id.to_string() })
                    }
                },
            }
        })
        .collect()
}
