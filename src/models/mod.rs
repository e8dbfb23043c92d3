//! Domain model for the subnet calculator.
//!
//! - [`Ipv4Subnet`] - IPv4 address/prefix pair with pure derivation methods

mod ipv4;

// Re-export public types
pub use ipv4::{cidr_mask, InvalidFormatError, Ipv4Subnet, MAX_LENGTH};
