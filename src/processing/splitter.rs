//! Equal-size subdivision of a network.
//!
//! A [`Goal`] is first resolved into a [`SplitPlan`] (the new prefix length),
//! then the plan enumerates the children in ascending address order.

use crate::error::{Result, SubnetError};
use crate::models::{AddressSpace, Goal, MAX_CLASSIC_PREFIX, MAX_LENGTH};
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// A parent network together with the prefix its children will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan {
    parent: AddressSpace,
    prefix: u8,
}

impl SplitPlan {
    fn new(parent: AddressSpace, prefix: u8) -> Result<SplitPlan> {
        if prefix < parent.prefix() || prefix > MAX_LENGTH {
            return Err(SubnetError::invalid_goal(format!(
                "target prefix /{prefix} must be between /{} and /{MAX_LENGTH}",
                parent.prefix()
            )));
        }
        Ok(SplitPlan { parent, prefix })
    }

    pub fn parent(&self) -> AddressSpace {
        self.parent
    }

    /// Prefix length of every child.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Bits taken from the host part of the parent.
    pub fn borrowed_bits(&self) -> u8 {
        self.prefix - self.parent.prefix()
    }

    /// Bits left for hosts in each child.
    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.prefix
    }

    /// Number of children.
    pub fn count(&self) -> u64 {
        1u64 << self.borrowed_bits()
    }

    /// First child; every child shares its masks and host counts.
    pub fn first(&self) -> AddressSpace {
        self.subnets().next().unwrap_or(self.parent)
    }

    /// Children in ascending address order.
    pub fn subnets(&self) -> Subnets {
        Subnets {
            base: u64::from(u32::from(self.parent.addr())),
            step: 1u64 << (MAX_LENGTH - self.prefix),
            prefix: self.prefix,
            front: 0,
            back: self.count(),
        }
    }

    /// The child containing `target`, computed without enumerating.
    pub fn locate(&self, target: Ipv4Addr) -> Result<AddressSpace> {
        if !self.parent.contains(target) {
            return Err(SubnetError::AddressNotFound {
                address: target,
                network: self.parent.to_string(),
            });
        }
        AddressSpace::normalize(target, self.prefix)
    }
}

/// Resolve `goal` against `parent`.
pub fn plan(parent: AddressSpace, goal: Goal) -> Result<SplitPlan> {
    log::debug!("plan({parent}, {goal:?})");
    let plan = match goal {
        Goal::ByCount(n) => plan_by_count(parent, n)?,
        Goal::ByPrefix(p) => SplitPlan::new(parent, p)?,
        Goal::ByHosts(h) => plan_by_hosts(parent, h)?,
    };
    log::debug!(
        "plan {parent} -> /{} x{} (borrowed {} bits)",
        plan.prefix,
        plan.count(),
        plan.borrowed_bits()
    );
    Ok(plan)
}

/// Split `parent` per `goal`, children in ascending address order.
pub fn split(parent: AddressSpace, goal: Goal) -> Result<Vec<AddressSpace>> {
    Ok(plan(parent, goal)?.subnets().collect())
}

fn plan_by_count(parent: AddressSpace, n: u64) -> Result<SplitPlan> {
    if n < 1 {
        return Err(SubnetError::invalid_goal(
            "number of subnets must be at least 1",
        ));
    }
    if !n.is_power_of_two() {
        return Err(SubnetError::invalid_goal(format!(
            "{n} subnets cannot be equal-sized, use a power of two such as {}",
            n.next_power_of_two()
        )));
    }
    let required_bits = n.trailing_zeros();
    let new_prefix = u32::from(parent.prefix()) + required_bits;
    if new_prefix > u32::from(MAX_LENGTH) {
        return Err(SubnetError::capacity_exceeded(format!(
            "{n} subnets need {required_bits} more bits, {parent} has only {} host bits",
            MAX_LENGTH - parent.prefix()
        )));
    }
    // new_prefix <= 32 here
    SplitPlan::new(parent, new_prefix as u8)
}

fn plan_by_hosts(parent: AddressSpace, hosts: u64) -> Result<SplitPlan> {
    if hosts < 1 {
        return Err(SubnetError::invalid_goal(
            "hosts per subnet must be at least 1",
        ));
    }
    for prefix in (parent.prefix()..=MAX_CLASSIC_PREFIX).rev() {
        let candidate = AddressSpace::normalize(parent.addr(), prefix)?;
        log::trace!(
            "/{prefix} has {} usable hosts",
            candidate.usable_host_count()
        );
        if candidate.usable_host_count() >= hosts {
            return SplitPlan::new(parent, prefix);
        }
    }
    Err(SubnetError::capacity_exceeded(format!(
        "{hosts} usable hosts per subnet do not fit into {parent}"
    )))
}

/// Lazy, double-ended iterator over the children of a [`SplitPlan`].
///
/// A /0 split to /32 yields 2^32 items, more than `usize` holds on 32-bit
/// targets, so the size is reported by [`Subnets::remaining`] as `u64`.
#[derive(Debug, Clone)]
pub struct Subnets {
    base: u64,
    step: u64,
    prefix: u8,
    front: u64,
    back: u64,
}

impl Subnets {
    /// Children not yet yielded from either end.
    pub fn remaining(&self) -> u64 {
        self.back - self.front
    }

    fn at(&self, index: u64) -> Option<AddressSpace> {
        let bits = u32::try_from(self.base + index * self.step).ok()?;
        AddressSpace::normalize(Ipv4Addr::from(bits), self.prefix).ok()
    }
}

impl Iterator for Subnets {
    type Item = AddressSpace;

    fn next(&mut self) -> Option<AddressSpace> {
        if self.front >= self.back {
            return None;
        }
        let item = self.at(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(left) => (left, Some(left)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<AddressSpace> {
        self.front = self.front.saturating_add(n as u64).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Subnets {
    fn next_back(&mut self) -> Option<AddressSpace> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.at(self.back)
    }
}

impl FusedIterator for Subnets {}
