// cargo watch -x 'fmt' -x 'run'  // 'run -- 192.168.10.10/24'

pub mod models;
pub mod output;

pub use models::{Ipv4Subnet, InvalidFormatError};
pub use output::SubnetReport;

/// Parse a CIDR string and derive every subnet property in one call.
pub fn summarize(addr_cidr: &str) -> Result<SubnetReport, InvalidFormatError> {
    let subnet = Ipv4Subnet::new(addr_cidr)?;
    log::debug!("summarize({addr_cidr}) parsed as {subnet}");
    Ok(SubnetReport::new(subnet))
}
