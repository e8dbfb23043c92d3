//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4Subnet`] value type for an address/prefix pair in CIDR
//! notation, along with free helper functions for subnet mask calculations.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Error raised when a CIDR string fails to parse into an address and a
/// prefix within range. The only fallible operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFormatError {
    input: String,
    reason: String,
}

impl InvalidFormatError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        InvalidFormatError {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid CIDR {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidFormatError {}

/// Shift-based mask computation. Caller guarantees `prefix <= 32`.
fn mask_bits(prefix: u8) -> u32 {
    let right_len = u32::from(MAX_LENGTH - prefix);
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::cidr_mask;
/// assert_eq!(cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn cidr_mask(prefix: u8) -> Result<u32, InvalidFormatError> {
    if prefix > MAX_LENGTH {
        Err(InvalidFormatError::new(
            &prefix.to_string(),
            "prefix length is too long",
        ))
    } else {
        Ok(mask_bits(prefix))
    }
}

/// IPv4 host address with CIDR prefix, e.g. `192.168.10.10/24`.
///
/// The address is stored as given, not masked to the network. The prefix is
/// validated once in [`Ipv4Subnet::new`]; every derivation method is a pure
/// function of the two fields and cannot fail.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4Subnet {
    /// The host address, most-significant octet first.
    pub addr: Ipv4Addr,
    /// The CIDR prefix length (0-32).
    pub prefix: u8,
}

impl Ipv4Subnet {
    /// Create a new [`Ipv4Subnet`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4Subnet, InvalidFormatError> {
        let trimmed = addr_cidr.trim();
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() != 2 {
            return Err(InvalidFormatError::new(
                addr_cidr,
                "expected exactly one '/' between address and prefix",
            ));
        }
        let addr = Ipv4Addr::from_str(parts[0]).map_err(|_| {
            InvalidFormatError::new(addr_cidr, format!("invalid address {:?}", parts[0]))
        })?;
        let prefix: u8 = parts[1].parse().map_err(|_| {
            InvalidFormatError::new(addr_cidr, format!("invalid prefix {:?}", parts[1]))
        })?;
        if prefix > MAX_LENGTH {
            return Err(InvalidFormatError::new(
                addr_cidr,
                "prefix length is too long",
            ));
        }
        Ok(Ipv4Subnet { addr, prefix })
    }

    /// Number of host bits, `32 - prefix`.
    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.prefix
    }

    /// Count of usable host addresses in the subnet.
    ///
    /// /32 is a host route and counts its single address as usable; /31 has
    /// no usable hosts under the network/broadcast exclusion model; anything
    /// larger excludes the network and broadcast addresses.
    pub fn available_hosts(&self) -> u64 {
        match self.prefix {
            32 => 1,
            31 => 0,
            _ => (1u64 << self.host_bits()) - 2,
        }
    }

    /// The network address: host bits zeroed.
    pub fn network_address(&self) -> Ipv4Addr {
        let mask = mask_bits(self.prefix);
        Ipv4Addr::from(u32::from(self.addr) & mask)
    }

    /// The broadcast address: host bits set to one.
    pub fn broadcast_address(&self) -> Ipv4Addr {
        let mask = mask_bits(self.prefix);
        let network_bits = u32::from(self.addr) & mask;
        Ipv4Addr::from(network_bits | !mask)
    }

    /// The subnet mask: `prefix` leading 1-bits, the rest 0.
    pub fn subnet_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.prefix))
    }

    /// Whether the stored address is a usable host address, i.e. neither the
    /// network nor the broadcast address of the subnet.
    pub fn is_valid_host_address(&self) -> bool {
        self.addr != self.network_address() && self.addr != self.broadcast_address()
    }
}

impl fmt::Display for Ipv4Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl PartialEq for Ipv4Subnet {
    fn eq(&self, other: &Ipv4Subnet) -> bool {
        self.addr == other.addr && self.prefix == other.prefix
    }
}

impl PartialOrd for Ipv4Subnet {
    fn partial_cmp(&self, other: &Ipv4Subnet) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Ipv4Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Subnet::new(&s).map_err(de::Error::custom)
    }
}
