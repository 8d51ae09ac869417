//! Domain models for subnet calculations.
//!
//! - [`AddressSpace`] - network-aligned IPv4 block with derived fields
//! - [`Goal`] - how a network should be split
//! - [`SubnetInfo`] - printable row for one subnet
//! - [`parse`] - text to address/prefix

mod goal;
mod ipv4;
pub mod parse;
mod subnet_info;

// Re-export public types
pub use goal::Goal;
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, get_cidr_mask, normalize, AddressSpace,
    MAX_CLASSIC_PREFIX, MAX_LENGTH,
};
pub use subnet_info::SubnetInfo;
