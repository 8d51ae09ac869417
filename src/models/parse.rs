//! Text parsing for addresses, prefixes and CIDR blocks.
//!
//! Accepted forms: `192.168.1.10`, `24`, `/24`, `10.0.0.0/8`. A CIDR with
//! host bits set (e.g. `192.168.1.10/27`) is accepted; callers normalize it.

use super::ipv4::MAX_LENGTH;
use crate::error::{Result, SubnetError};
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^/?\s*(\d{1,3})$").expect("Invalid Regex"))
}

/// Parse a dotted-quad IPv4 address.
pub fn parse_addr(input: &str) -> Result<Ipv4Addr> {
    let input = input.trim();
    Ipv4Addr::from_str(input).map_err(|_| SubnetError::invalid_address(input))
}

/// Parse a prefix length, with or without the leading slash.
pub fn parse_prefix(input: &str) -> Result<u8> {
    let input = input.trim();
    let caps = get_prefix_regex()
        .captures(input)
        .ok_or_else(|| SubnetError::invalid_prefix(input.trim_start_matches('/')))?;
    let prefix: u8 = caps[1]
        .parse()
        .map_err(|_| SubnetError::invalid_prefix(&caps[1]))?;
    if prefix > MAX_LENGTH {
        return Err(SubnetError::invalid_prefix(prefix));
    }
    Ok(prefix)
}

/// Parse `address/prefix`. A bare address is read as a /32.
pub fn parse_cidr(input: &str) -> Result<(Ipv4Addr, u8)> {
    let input = input.trim();
    match input.split_once('/') {
        Some((addr, prefix)) => Ok((parse_addr(addr)?, parse_prefix(prefix)?)),
        None => Ok((parse_addr(input)?, MAX_LENGTH)),
    }
}
