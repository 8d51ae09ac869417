//! Splitting goals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the caller wants out of a split. Exactly one mode per request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "mode", content = "value")]
pub enum Goal {
    /// Exactly `n` equal subnets, `n` a power of two.
    ByCount(u64),
    /// Every subnet of the given prefix length.
    ByPrefix(u8),
    /// Smallest subnets with at least this many usable hosts each.
    ByHosts(u64),
}

impl Goal {
    /// Short name used in export file names.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Goal::ByCount(_) => "by_count",
            Goal::ByPrefix(_) => "by_prefix",
            Goal::ByHosts(_) => "by_hosts",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Goal::ByCount(n) => write!(f, "{n} subnets"),
            Goal::ByPrefix(p) => write!(f, "prefix /{p}"),
            Goal::ByHosts(h) => write!(f, "{h} usable hosts per subnet"),
        }
    }
}
