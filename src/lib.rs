//! IPv4 subnetting engine and the thin CLI around it.
//!
//! The engine is pure: [`normalize`] builds an [`AddressSpace`], [`split`]
//! divides it per a [`Goal`] and [`locate`] finds the child holding an address.

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{ErrorKind, SubnetError};
pub use models::{normalize, AddressSpace, Goal, SubnetInfo};
pub use processing::{locate, plan, split, SplitPlan};
