pub mod inventory_config;
pub mod parse;

pub use inventory_config::{EniscopeConfig, InventoryConfig, InventorySource};
pub use parse::parse_config_content;
