//! Subnetting logic.
//!
//! - [`splitter`] - resolve a goal and enumerate the children
//! - [`locator`] - find the child holding an address

mod locator;
mod splitter;

// Re-export public functions
pub use locator::locate;
pub use splitter::{plan, split, SplitPlan, Subnets};
