pub mod inventory_http;
pub mod inventory_snapshot;

pub use inventory_http::{HttpInventoryClient, TransportError};
pub use inventory_snapshot::InventorySnapshot;
