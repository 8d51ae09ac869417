//! IPv4 network arithmetic.
//!
//! Provides [`AddressSpace`], a network-aligned IPv4 block, along with the mask
//! helpers the rest of the crate builds on.

use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Highest prefix that still has a network and a broadcast address.
pub const MAX_CLASSIC_PREFIX: u8 = 30;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SubnetError::invalid_prefix(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of addresses in a block of the given prefix, network and broadcast included.
pub fn block_size(len: u8) -> Result<u64> {
    if len > MAX_LENGTH {
        return Err(SubnetError::invalid_prefix(len));
    }
    Ok(1u64 << (MAX_LENGTH - len))
}

/// A network-aligned IPv4 block: base address plus prefix length.
///
/// Host bits of `addr` are always zero. Build one with [`AddressSpace::normalize`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddressSpace {
    addr: Ipv4Addr,
    prefix: u8,
}

impl AddressSpace {
    /// Mask `addr` down to its network address for `prefix`.
    pub fn normalize(addr: Ipv4Addr, prefix: u8) -> Result<AddressSpace> {
        let addr = cut_addr(addr, prefix)?;
        Ok(AddressSpace { addr, prefix })
    }

    /// Same as [`normalize`](Self::normalize) for raw integers wider than 32 bits.
    pub fn from_bits(bits: u64, prefix: u8) -> Result<AddressSpace> {
        let bits = u32::try_from(bits).map_err(|_| SubnetError::invalid_address(bits))?;
        AddressSpace::normalize(Ipv4Addr::from(bits), prefix)
    }

    /// The whole IPv4 space, 0.0.0.0/0.
    pub fn everything() -> AddressSpace {
        AddressSpace {
            addr: Ipv4Addr::UNSPECIFIED,
            prefix: 0,
        }
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Network address, identical to [`addr`](Self::addr).
    pub fn network(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn mask_bits(&self) -> u32 {
        // prefix is validated on construction
        get_cidr_mask(self.prefix).unwrap_or(u32::MAX)
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    /// Bitwise complement of the subnet mask.
    pub fn wildcard_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.mask_bits())
    }

    /// Highest address of the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    /// Total addresses in the block.
    pub fn block_size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Usable hosts. /31 counts both ends, /32 its single address and /0 the
    /// entire address space.
    pub fn usable_host_count(&self) -> u64 {
        match self.prefix {
            0 => self.block_size(),
            1..=MAX_CLASSIC_PREFIX => self.block_size() - 2,
            31 => 2,
            _ => 1,
        }
    }

    /// First and last usable host, `None` if the range would be inverted.
    pub fn host_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        let network = u32::from(self.addr);
        let broadcast = u32::from(self.broadcast());
        let (first, last) = match self.prefix {
            0 => (network, broadcast),
            1..=MAX_CLASSIC_PREFIX => (network + 1, broadcast - 1),
            31 => (network, broadcast),
            _ => (network, network),
        };
        if first > last {
            return None;
        }
        Some((Ipv4Addr::from(first), Ipv4Addr::from(last)))
    }

    /// Step between consecutive subnets of this size, measured in the
    /// interesting octet. Octet-aligned prefixes step by 1 in their last mask
    /// octet. `None` for /0, which has no neighbours.
    pub fn magic_number(&self) -> Option<u32> {
        if self.prefix == 0 {
            return None;
        }
        Some(1u32 << ((MAX_LENGTH - self.prefix) % 8))
    }

    /// 1-based octet where the mask is strictly between 0 and 255.
    pub fn interesting_octet(&self) -> Option<u8> {
        if self.prefix % 8 == 0 {
            None
        } else {
            Some(self.prefix / 8 + 1)
        }
    }

    /// Mask value inside the interesting octet, 255 when the prefix is octet aligned.
    pub fn mask_octet_value(&self) -> u8 {
        match self.interesting_octet() {
            Some(octet) => self.subnet_mask().octets()[usize::from(octet - 1)],
            None => u8::MAX,
        }
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & self.mask_bits() == u32::from(self.addr)
    }

    /// True when `other` lies completely inside this block.
    pub fn covers(&self, other: &AddressSpace) -> bool {
        other.prefix >= self.prefix && self.contains(other.addr)
    }
}

impl Serialize for AddressSpace {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AddressSpace {
    fn deserialize<D>(deserializer: D) -> std::result::Result<AddressSpace, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AddressSpace::from_str(&s).map_err(de::Error::custom)
    }
}

impl FromStr for AddressSpace {
    type Err = SubnetError;

    /// Parse `a.b.c.d/p`; host bits are cleared.
    fn from_str(s: &str) -> Result<AddressSpace> {
        let (addr, prefix) = super::parse::parse_cidr(s)?;
        AddressSpace::normalize(addr, prefix)
    }
}

impl std::fmt::Display for AddressSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

/// Free-function form of [`AddressSpace::normalize`].
pub fn normalize(addr: Ipv4Addr, prefix: u8) -> Result<AddressSpace> {
    AddressSpace::normalize(addr, prefix)
}
