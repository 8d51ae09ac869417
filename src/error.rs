//! Error kinds raised by the subnetting engine.
//!
//! Every failure is a whole-request rejection. Callers match on
//! [`SubnetError::kind`] to pick a message without looking at internals.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Result alias used by the engine.
pub type Result<T> = std::result::Result<T, SubnetError>;

/// Fieldless discriminant of [`SubnetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAddress,
    InvalidPrefix,
    InvalidGoal,
    CapacityExceeded,
    AddressNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Address text is malformed or the integer does not fit in 32 bits.
    #[error("invalid IPv4 address: {input}")]
    InvalidAddress { input: String },

    /// Prefix length outside 0..=32 (or not a number).
    #[error("invalid prefix length /{input}, expected 0-32")]
    InvalidPrefix { input: String },

    /// Goal parameter breaks its own constraint.
    #[error("invalid goal: {reason}")]
    InvalidGoal { reason: String },

    /// Not enough bits left under /32 for the goal.
    #[error("capacity exceeded: {reason}")]
    CapacityExceeded { reason: String },

    /// Target address lies outside every candidate subnet.
    #[error("address {address} is not inside {network}")]
    AddressNotFound { address: Ipv4Addr, network: String },
}

impl SubnetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubnetError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            SubnetError::InvalidPrefix { .. } => ErrorKind::InvalidPrefix,
            SubnetError::InvalidGoal { .. } => ErrorKind::InvalidGoal,
            SubnetError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            SubnetError::AddressNotFound { .. } => ErrorKind::AddressNotFound,
        }
    }

    pub(crate) fn invalid_address(input: impl ToString) -> Self {
        SubnetError::InvalidAddress {
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_prefix(input: impl ToString) -> Self {
        SubnetError::InvalidPrefix {
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_goal(reason: impl Into<String>) -> Self {
        SubnetError::InvalidGoal {
            reason: reason.into(),
        }
    }

    pub(crate) fn capacity_exceeded(reason: impl Into<String>) -> Self {
        SubnetError::CapacityExceeded {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            SubnetError::invalid_prefix(33).kind(),
            ErrorKind::InvalidPrefix
        );
        assert_eq!(
            SubnetError::invalid_goal("n < 1").kind(),
            ErrorKind::InvalidGoal
        );
        let err = SubnetError::AddressNotFound {
            address: Ipv4Addr::new(10, 0, 0, 1),
            network: "192.168.1.0/24".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::AddressNotFound);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            SubnetError::invalid_prefix(40).to_string(),
            "invalid prefix length /40, expected 0-32"
        );
        assert_eq!(
            SubnetError::invalid_address("300.1.1.1").to_string(),
            "invalid IPv4 address: 300.1.1.1"
        );
        let err = SubnetError::AddressNotFound {
            address: Ipv4Addr::new(10, 0, 0, 1),
            network: "192.168.1.0/24".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "address 10.0.0.1 is not inside 192.168.1.0/24"
        );
    }
}
