//! Find which subnet of a split holds a given address.

use crate::error::{Result, SubnetError};
use crate::models::AddressSpace;
use std::net::Ipv4Addr;

/// Return the child whose range contains `target`.
///
/// `children` must be sorted by address and non-overlapping, as produced by
/// [`split`](crate::processing::split).
pub fn locate(children: &[AddressSpace], target: Ipv4Addr) -> Result<AddressSpace> {
    // first child starting above the target; the candidate is just before it
    let idx = children.partition_point(|child| child.addr() <= target);
    if let Some(child) = idx.checked_sub(1).map(|i| children[i]) {
        if child.contains(target) {
            log::debug!("locate({target}) -> {child}");
            return Ok(child);
        }
    }
    Err(SubnetError::AddressNotFound {
        address: target,
        network: describe_span(children),
    })
}

fn describe_span(children: &[AddressSpace]) -> String {
    match (children.first(), children.last()) {
        (Some(first), Some(last)) if first == last => first.to_string(),
        (Some(first), Some(last)) => format!("{} - {}", first.addr(), last.broadcast()),
        _ => "an empty subnet list".to_string(),
    }
}
