//! Markdown table export, handy for lab notes.

use crate::models::{AddressSpace, SubnetInfo};
use chrono::NaiveDateTime;
use itertools::Itertools;
use std::io::{self, Write};

/// Title, metadata and one table row per subnet. Returns the number of rows.
pub fn write_markdown<W, I>(
    out: &mut W,
    base: &AddressSpace,
    mode_name: &str,
    generated: &NaiveDateTime,
    infos: I,
) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = SubnetInfo>,
{
    writeln!(out, "# Subnetting export ({mode_name})")?;
    writeln!(out)?;
    writeln!(out, "- Generated: {}", generated.format("%Y-%m-%dT%H:%M:%S"))?;
    writeln!(out, "- Base network: `{base}`")?;
    writeln!(out)?;
    writeln!(
        out,
        "| Subnet | Network | Broadcast | First Host | Last Host | Hosts | Mask | Wildcard | Magic |"
    )?;
    writeln!(out, "|---|---|---|---|---|---:|---|---|---:|")?;

    let mut rows = 0;
    for info in infos {
        let cells = [
            code(&info.subnet),
            code(&info.network),
            code(&info.broadcast),
            code(&info.first_host),
            code(&info.last_host),
            info.usable_hosts.to_string(),
            code(&info.netmask),
            code(&info.wildcard),
            info.magic_label(),
        ];
        writeln!(out, "| {} |", cells.iter().join(" | "))?;
        rows += 1;
    }
    Ok(rows)
}

fn code(value: &str) -> String {
    format!("`{value}`")
}
