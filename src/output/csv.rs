//! CSV output of subnet rows.
//!
//! Semicolon separated so spreadsheet tools with a comma decimal separator
//! open it without an import dialog.

use crate::models::SubnetInfo;
use itertools::Itertools;
use std::io::{self, Write};

pub const DELIMITER: &str = ";";

const HEADER: [&str; 10] = [
    "Subnet",
    "Network",
    "Broadcast",
    "First Host",
    "Last Host",
    "Usable Hosts",
    "Netmask",
    "Wildcard",
    "Magic Number",
    "Interesting Octet",
];

/// Write the header and one line per subnet. Returns the number of rows.
pub fn write_csv<W, I>(out: &mut W, infos: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = SubnetInfo>,
{
    writeln!(out, "{}", HEADER.iter().map(|h| escape_csv_field(h)).join(DELIMITER))?;
    let mut rows = 0;
    for info in infos {
        print_csv_row(out, &info)?;
        rows += 1;
    }
    Ok(rows)
}

fn print_csv_row<W: Write>(out: &mut W, row: &SubnetInfo) -> io::Result<()> {
    let fields = [
        row.subnet.clone(),
        row.network.clone(),
        row.broadcast.clone(),
        row.first_host.clone(),
        row.last_host.clone(),
        row.usable_hosts.to_string(),
        row.netmask.clone(),
        row.wildcard.clone(),
        row.magic_label(),
        row.octet_label(),
    ];
    writeln!(
        out,
        "{}",
        fields.iter().map(|f| escape_csv_field(f)).join(DELIMITER)
    )
}

/// Quote a field that contains the delimiter, a quote or a line break.
fn escape_csv_field(input: &str) -> String {
    if input.contains(DELIMITER) || input.contains('"') || input.contains('\n') {
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}
