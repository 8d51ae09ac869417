//! Display/export row for one subnet.

use super::AddressSpace;
use serde::Serialize;

/// Derived fields of one [`AddressSpace`] as printable values.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// CIDR notation.
    pub subnet: String,
    pub netmask: String,
    pub wildcard: String,
    pub network: String,
    pub broadcast: String,
    /// First usable host.
    pub first_host: String,
    /// Last usable host.
    pub last_host: String,
    pub usable_hosts: u64,
    /// `None` for /0.
    pub magic_number: Option<u32>,
    /// `None` when the prefix is octet aligned.
    pub interesting_octet: Option<u8>,
    pub mask_octet_value: u8,
}

impl From<&AddressSpace> for SubnetInfo {
    fn from(space: &AddressSpace) -> Self {
        let (first_host, last_host) = match space.host_range() {
            Some((first, last)) => (first.to_string(), last.to_string()),
            None => ("none".to_string(), "none".to_string()),
        };
        SubnetInfo {
            subnet: space.to_string(),
            netmask: space.subnet_mask().to_string(),
            wildcard: space.wildcard_mask().to_string(),
            network: space.network().to_string(),
            broadcast: space.broadcast().to_string(),
            first_host,
            last_host,
            usable_hosts: space.usable_host_count(),
            magic_number: space.magic_number(),
            interesting_octet: space.interesting_octet(),
            mask_octet_value: space.mask_octet_value(),
        }
    }
}

impl SubnetInfo {
    /// Magic number as text, `-` when undefined.
    pub fn magic_label(&self) -> String {
        self.magic_number
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    /// Interesting octet as text, `-` when the prefix is octet aligned.
    pub fn octet_label(&self) -> String {
        self.interesting_octet
            .map(|o| o.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
