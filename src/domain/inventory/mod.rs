pub mod instance;
pub mod network_interface;
pub mod records;

pub use instance::Instance;
pub use network_interface::NetworkInterface;
pub use records::{Attachment, RawInstance, RawNetworkInterface, RawReservation};
