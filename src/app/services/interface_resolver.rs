//! Network interface lookup with batched attachment resolution.

use std::collections::HashMap;

use tracing::debug;

use super::attachments::{
    attached_instance_ids, distinct, ensure_unique_interfaces, index_instances, merge,
};
use super::instance_resolver::InstanceResolver;
use crate::domain::{AppError, InterfaceId, NetworkInterface, RawNetworkInterface, ResourceKind};
use crate::ports::InventoryService;

pub(crate) const DESCRIBE_NETWORK_INTERFACES: &str = "DescribeNetworkInterfaces";

/// Resolves network interfaces and merges in their attached instances.
///
/// Resolution runs in two phases: one describe call for the interfaces, then
/// at most one batched instance lookup covering every distinct attachment.
pub struct InterfaceResolver<'a, S: InventoryService + ?Sized> {
    service: &'a S,
}

impl<'a, S: InventoryService + ?Sized> InterfaceResolver<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Resolve exactly one interface.
    pub fn describe_by_id(&self, id: &InterfaceId) -> Result<NetworkInterface, AppError> {
        let mut raw = self.fetch(Some(std::slice::from_ref(id)))?;
        raw.retain(|record| record.network_interface_id == *id);
        match raw.len() {
            0 => {
                return Err(AppError::NotFound {
                    kind: ResourceKind::NetworkInterface,
                    id: id.to_string(),
                });
            }
            1 => {}
            count => {
                return Err(AppError::AmbiguousResult {
                    kind: ResourceKind::NetworkInterface,
                    id: id.to_string(),
                    count,
                });
            }
        }

        let mut resolved = self.resolve(raw)?;
        Ok(resolved.remove(0))
    }

    /// Resolve every interface visible to the service, unfiltered.
    pub fn describe_all(&self) -> Result<Vec<NetworkInterface>, AppError> {
        let raw = self.fetch(None)?;
        self.resolve(raw)
    }

    /// Resolve a specific set of interfaces.
    ///
    /// An empty set resolves to no interfaces and makes no remote call; it is
    /// not the same as [`describe_all`](Self::describe_all).
    pub fn describe_by_ids(&self, ids: &[InterfaceId]) -> Result<Vec<NetworkInterface>, AppError> {
        if ids.is_empty() {
            debug!("no interface identifiers requested, skipping describe call");
            return Ok(Vec::new());
        }

        let requested = distinct(ids.iter().cloned());
        let raw = self.fetch(Some(&requested))?;
        self.resolve(raw)
    }

    fn fetch(&self, filter: Option<&[InterfaceId]>) -> Result<Vec<RawNetworkInterface>, AppError> {
        let raw = self
            .service
            .describe_network_interfaces(filter)
            .map_err(|e| AppError::upstream(DESCRIBE_NETWORK_INTERFACES, e))?;

        debug!(
            filtered = filter.is_some(),
            requested = filter.map_or(0, <[InterfaceId]>::len),
            fetched = raw.len(),
            "described network interfaces"
        );
        Ok(raw)
    }

    fn resolve(&self, raw: Vec<RawNetworkInterface>) -> Result<Vec<NetworkInterface>, AppError> {
        ensure_unique_interfaces(&raw)?;

        let attached = attached_instance_ids(&raw);
        if attached.is_empty() {
            debug!(interfaces = raw.len(), "no attachments to resolve");
            return Ok(raw.into_iter().map(NetworkInterface::from).collect());
        }

        debug!(interfaces = raw.len(), attachments = attached.len(), "resolving attachments");
        let instances = InstanceResolver::new(self.service).describe_by_ids(&attached)?;
        let index: HashMap<_, _> = index_instances(instances)?;
        merge(raw, &index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::instance_resolver::DESCRIBE_INSTANCES;
    use crate::domain::RawReservation;
    use crate::testing::{FakeInventory, eni, inst};
    use proptest::prelude::*;

    #[test]
    fn describe_by_id_resolves_attached_instance() {
        let fake = FakeInventory::new()
            .with_attached("eni-00000001", "i-00000001")
            .with_instances(&["i-00000001"]);
        let resolver = InterfaceResolver::new(&fake);

        let interface = resolver.describe_by_id(&eni("eni-00000001")).unwrap();

        assert_eq!(interface.attached_instance_id(), Some(&inst("i-00000001")));
        assert_eq!(
            interface.attached_instance().map(|i| i.id().as_str()),
            Some("i-00000001")
        );
        assert_eq!(fake.interface_calls(), vec![Some(vec![eni("eni-00000001")])]);
        assert_eq!(fake.instance_calls(), vec![vec![inst("i-00000001")]]);
    }

    #[test]
    fn describe_by_id_detached_makes_no_instance_call() {
        let fake = FakeInventory::new()
            .with_detached("eni-00000001")
            .with_instances(&["i-00000001"]);
        let resolver = InterfaceResolver::new(&fake);

        let interface = resolver.describe_by_id(&eni("eni-00000001")).unwrap();

        assert!(interface.attached_instance().is_none());
        assert!(fake.instance_calls().is_empty());
    }

    #[test]
    fn describe_by_id_missing_is_not_found() {
        let fake = FakeInventory::new().with_detached("eni-1");
        let resolver = InterfaceResolver::new(&fake);

        let err = resolver.describe_by_id(&eni("eni-missing")).unwrap_err();

        assert!(matches!(
            err,
            AppError::NotFound { kind: ResourceKind::NetworkInterface, ref id } if id == "eni-missing"
        ));
        assert!(fake.instance_calls().is_empty());
    }

    #[test]
    fn describe_by_id_multiple_matches_is_ambiguous() {
        let fake = FakeInventory::new().respond_interfaces(vec![
            RawNetworkInterface::detached(eni("eni-1")),
            RawNetworkInterface::detached(eni("eni-1")),
        ]);
        let resolver = InterfaceResolver::new(&fake);

        let err = resolver.describe_by_id(&eni("eni-1")).unwrap_err();

        assert!(matches!(err, AppError::AmbiguousResult { count: 2, .. }));
    }

    #[test]
    fn describe_by_id_ignores_foreign_record() {
        let fake = FakeInventory::new()
            .respond_interfaces(vec![RawNetworkInterface::attached(eni("eni-2"), inst("i-2"))]);
        let resolver = InterfaceResolver::new(&fake);

        let err = resolver.describe_by_id(&eni("eni-1")).unwrap_err();

        assert!(matches!(
            err,
            AppError::NotFound { kind: ResourceKind::NetworkInterface, ref id } if id == "eni-1"
        ));
        assert!(fake.instance_calls().is_empty());
    }

    #[test]
    fn describe_all_merges_attachments() {
        let fake = FakeInventory::new()
            .with_attached("eni-1", "i-1")
            .with_detached("eni-2")
            .with_instances(&["i-1"]);
        let resolver = InterfaceResolver::new(&fake);

        let interfaces = resolver.describe_all().unwrap();

        assert_eq!(interfaces.len(), 2);
        assert_eq!(interfaces[0].attached_instance_id().map(|id| id.as_str()), Some("i-1"));
        assert_eq!(interfaces[0].attached_instance().map(|i| i.id().as_str()), Some("i-1"));
        assert!(interfaces[1].attached_instance().is_none());
        assert_eq!(fake.interface_calls(), vec![None]);
    }

    #[test]
    fn shared_instance_is_requested_once() {
        let fake = FakeInventory::new()
            .with_attached("eni-1", "i-1")
            .with_attached("eni-2", "i-1")
            .with_attached("eni-3", "i-2")
            .with_instances(&["i-1", "i-2"]);
        let resolver = InterfaceResolver::new(&fake);

        let interfaces = resolver.describe_all().unwrap();

        assert_eq!(fake.instance_calls(), vec![vec![inst("i-1"), inst("i-2")]]);
        assert_eq!(interfaces[0].attached_instance(), interfaces[1].attached_instance());
        assert_eq!(interfaces[2].attached_instance().map(|i| i.id().as_str()), Some("i-2"));
    }

    #[test]
    fn describe_by_ids_empty_makes_no_calls() {
        let fake = FakeInventory::new().with_attached("eni-1", "i-1").with_instances(&["i-1"]);
        let resolver = InterfaceResolver::new(&fake);

        let interfaces = resolver.describe_by_ids(&[]).unwrap();

        assert!(interfaces.is_empty());
        assert!(fake.interface_calls().is_empty());
        assert!(fake.instance_calls().is_empty());
    }

    #[test]
    fn describe_by_ids_collapses_duplicate_input() {
        let fake = FakeInventory::new().with_detached("eni-1").with_detached("eni-2");
        let resolver = InterfaceResolver::new(&fake);

        let interfaces = resolver.describe_by_ids(&[eni("eni-1"), eni("eni-1")]).unwrap();

        assert_eq!(interfaces.len(), 1);
        assert_eq!(fake.interface_calls(), vec![Some(vec![eni("eni-1")])]);
    }

    #[test]
    fn missing_attached_instance_fails_resolution() {
        let fake = FakeInventory::new()
            .with_attached("eni-1", "i-1")
            .respond_instances(vec![RawReservation::default()]);
        let resolver = InterfaceResolver::new(&fake);

        let err = resolver.describe_all().unwrap_err();

        assert!(matches!(err, AppError::NotFound { kind: ResourceKind::Instance, .. }));
    }

    #[test]
    fn interface_call_failure_is_upstream_error() {
        let fake = FakeInventory::new().fail_interfaces("access denied");
        let resolver = InterfaceResolver::new(&fake);

        let err = resolver.describe_all().unwrap_err();

        assert!(matches!(err, AppError::Upstream { operation: DESCRIBE_NETWORK_INTERFACES, .. }));
        assert!(fake.instance_calls().is_empty());
    }

    #[test]
    fn instance_call_failure_returns_no_partial_result() {
        let fake = FakeInventory::new()
            .with_attached("eni-1", "i-1")
            .with_detached("eni-2")
            .fail_instances("connection reset");
        let resolver = InterfaceResolver::new(&fake);

        let err = resolver.describe_all().unwrap_err();

        assert!(matches!(err, AppError::Upstream { operation: DESCRIBE_INSTANCES, .. }));
    }

    #[test]
    fn repeated_resolution_is_stable() {
        let fake = FakeInventory::new()
            .with_attached("eni-1", "i-1")
            .with_detached("eni-2")
            .with_instances(&["i-1"]);
        let resolver = InterfaceResolver::new(&fake);

        let ids = [eni("eni-1"), eni("eni-2")];
        assert_eq!(resolver.describe_by_ids(&ids).unwrap(), resolver.describe_by_ids(&ids).unwrap());
    }

    proptest! {
        #[test]
        fn attached_instance_present_iff_raw_attachment(
            layout in prop::collection::vec(prop::option::of(0u8..4), 1..12)
        ) {
            let mut fake = FakeInventory::new();
            let mut instance_ids = Vec::new();
            for (index, attachment) in layout.iter().enumerate() {
                let interface_id = format!("eni-{index}");
                match attachment {
                    Some(n) => {
                        let instance_id = format!("i-{n}");
                        fake = fake.with_attached(&interface_id, &instance_id);
                        instance_ids.push(instance_id);
                    }
                    None => fake = fake.with_detached(&interface_id),
                }
            }
            instance_ids.sort();
            instance_ids.dedup();
            let refs: Vec<&str> = instance_ids.iter().map(String::as_str).collect();
            fake = fake.with_instances(&refs);

            let ids: Vec<InterfaceId> = (0..layout.len()).map(|i| eni(&format!("eni-{i}"))).collect();
            let interfaces = InterfaceResolver::new(&fake).describe_by_ids(&ids).unwrap();

            prop_assert_eq!(interfaces.len(), layout.len());
            for (interface, attachment) in interfaces.iter().zip(&layout) {
                prop_assert_eq!(interface.attached_instance().is_some(), attachment.is_some());
                prop_assert_eq!(
                    interface.attached_instance().map(|i| i.id()),
                    interface.attached_instance_id()
                );
            }

            let calls = fake.instance_calls();
            prop_assert!(calls.len() <= 1);
            if let Some(requested) = calls.first() {
                let unique: std::collections::HashSet<_> = requested.iter().collect();
                prop_assert_eq!(unique.len(), requested.len());
            }
        }
    }
}
