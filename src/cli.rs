//! Command line arguments.

use crate::config::Config;
use crate::models::parse::parse_prefix;
use crate::models::AddressSpace;
use crate::output::ExportFormat;
use clap::{Parser, Subcommand};
use std::net::Ipv4Addr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(about = "IPv4 subnetting helper: split networks, find subnets, export tables.")]
#[command(version)]
pub struct CommandLine {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Export the full subnet list (repeatable)
    #[arg(long = "export", value_enum, global = true)]
    pub export: Vec<ExportFormat>,

    /// Directory for export files [default: ~/Downloads]
    #[arg(long, global = true)]
    pub export_dir: Option<PathBuf>,

    /// Max subnets printed to the terminal
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Split a network into N equal subnets (N a power of two)
    #[command(alias = "c")]
    Count { network: AddressSpace, n: u64 },
    /// Split a network into all subnets of a target prefix
    #[command(alias = "p")]
    Prefix {
        network: AddressSpace,
        #[arg(value_parser = parse_prefix)]
        prefix: u8,
    },
    /// Split a network by usable hosts needed per subnet
    #[command(alias = "h")]
    Hosts { network: AddressSpace, hosts: u64 },
    /// Show which subnet of NETWORK split to PREFIX contains IP
    #[command(alias = "l")]
    Locate {
        network: AddressSpace,
        #[arg(value_parser = parse_prefix)]
        prefix: u8,
        ip: Ipv4Addr,
    },
    /// Analyze a single subnet (host bits are allowed)
    #[command(alias = "a")]
    Analyze { cidr: AddressSpace },
    /// Interactive menu (default)
    #[command(alias = "m")]
    Menu,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply flag overrides on top of the environment based config.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_color {
            config.use_color = false;
        }
        if let Some(dir) = &self.export_dir {
            config.export_dir = dir.clone();
        }
        if let Some(limit) = self.limit {
            config.display_limit = limit;
        }
        config
    }
}
