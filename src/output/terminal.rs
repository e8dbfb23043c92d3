//! Terminal output for subnet reports.

use crate::models::Ipv4Subnet;
use colored::Colorize;
use serde::Serialize;

/// Flat record of every value derived from one CIDR input.
///
/// All address fields are dotted-quad strings so the record serializes the
/// same way it prints.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// The input as parsed, in `addr/prefix` form.
    pub cidr: Ipv4Subnet,
    /// The host address without the prefix.
    pub address: String,
    /// The CIDR prefix length.
    pub prefix: u8,
    /// Subnet mask as a dotted quad.
    pub subnet_mask: String,
    /// Network address (host bits zeroed).
    pub network_address: String,
    /// Broadcast address (host bits set).
    pub broadcast_address: String,
    /// Count of usable host addresses.
    pub available_hosts: u64,
    /// Whether the address is neither the network nor the broadcast address.
    pub valid_host_address: bool,
}

impl SubnetReport {
    pub fn new(subnet: Ipv4Subnet) -> SubnetReport {
        SubnetReport {
            cidr: subnet,
            address: subnet.addr.to_string(),
            prefix: subnet.prefix,
            subnet_mask: subnet.subnet_mask().to_string(),
            network_address: subnet.network_address().to_string(),
            broadcast_address: subnet.broadcast_address().to_string(),
            available_hosts: subnet.available_hosts(),
            valid_host_address: subnet.is_valid_host_address(),
        }
    }
}

/// Format a label as a fixed-width, left-aligned field.
pub fn format_field(label: &str, width: usize) -> String {
    if label.len() >= width {
        label.to_string()
    } else {
        format!("{label:<width$}")
    }
}

/// Print a colored human-readable report for one subnet.
pub fn print_report(report: &SubnetReport) {
    log::info!("#Start print_report({})", report.cidr);

    const LABEL_WIDTH: usize = 18;
    let row = |label: &str, value: String| {
        println!("{} {}", format_field(label, LABEL_WIDTH).bold(), value);
    };

    row("Address:", report.address.cyan().to_string());
    row("Prefix:", format!("/{}", report.prefix));
    row("Subnet mask:", report.subnet_mask.clone());
    row("Network:", report.network_address.green().to_string());
    row("Broadcast:", report.broadcast_address.yellow().to_string());
    row("Available hosts:", report.available_hosts.to_string());
    let valid = if report.valid_host_address {
        "valid host address".green()
    } else {
        "not a valid host address (network or broadcast)".red()
    };
    row("Host:", valid.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ipv4Subnet;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("Mask:", 10), "Mask:     ");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("Mask:", 5), "Mask:");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("Available hosts:", 5), "Available hosts:");
    }

    #[test]
    fn test_report_fields() {
        let subnet = Ipv4Subnet::new("192.168.10.10/24").unwrap();
        let report = SubnetReport::new(subnet);
        assert_eq!(report.address, "192.168.10.10");
        assert_eq!(report.prefix, 24);
        assert_eq!(report.subnet_mask, "255.255.255.0");
        assert_eq!(report.network_address, "192.168.10.0");
        assert_eq!(report.broadcast_address, "192.168.10.255");
        assert_eq!(report.available_hosts, 254);
        assert!(report.valid_host_address);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let subnet = Ipv4Subnet::new("10.0.0.0/30").unwrap();
        let report = SubnetReport::new(subnet);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cidr"], "10.0.0.0/30");
        assert_eq!(json["subnet_mask"], "255.255.255.252");
        assert_eq!(json["available_hosts"], 2);
        assert_eq!(json["valid_host_address"], false);
    }
}
