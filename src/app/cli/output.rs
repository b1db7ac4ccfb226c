//! Text and JSON rendering for CLI results.

use serde::Serialize;

use crate::domain::{AppError, Instance, NetworkInterface};

const NONE: &str = "-";

/// One line per interface: `<interface-id>\t<instance-id or ->`.
pub fn interface_lines(interfaces: &[NetworkInterface]) -> Vec<String> {
    interfaces
        .iter()
        .map(|interface| {
            let instance = interface.attached_instance_id().map_or(NONE, |id| id.as_str());
            format!("{}\t{}", interface.id(), instance)
        })
        .collect()
}

/// One line per instance: `<instance-id>\t<state or ->`.
pub fn instance_lines(instances: &[Instance]) -> Vec<String> {
    instances
        .iter()
        .map(|instance| {
            let state = instance
                .field("State")
                .and_then(|state| state.get("Name"))
                .and_then(|name| name.as_str())
                .unwrap_or(NONE);
            format!("{}\t{}", instance.id(), state)
        })
        .collect()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::config_error(format!("Failed to render JSON: {}", e)))
}
