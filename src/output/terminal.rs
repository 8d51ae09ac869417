//! Terminal output.
//!
//! Colors are decided once by the caller and carried in a [`Ui`] value.

use crate::models::{AddressSpace, SubnetInfo};
use crate::processing::SplitPlan;
use colored::Colorize;
use std::io::{self, Write};

/// Styling switch handed to every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ui {
    use_color: bool,
}

impl Ui {
    pub fn new(use_color: bool) -> Ui {
        Ui { use_color }
    }

    pub fn plain() -> Ui {
        Ui::new(false)
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Bold cyan.
    pub fn head(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan().bold().to_string())
    }

    /// Bold green.
    pub fn ok(&self, text: &str) -> String {
        self.paint(text, |s| s.green().bold().to_string())
    }

    /// Bold yellow.
    pub fn warn(&self, text: &str) -> String {
        self.paint(text, |s| s.yellow().bold().to_string())
    }

    /// Bold red.
    pub fn err(&self, text: &str) -> String {
        self.paint(text, |s| s.red().bold().to_string())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |s| s.dimmed().to_string())
    }

    fn paint(&self, text: &str, style: fn(&str) -> String) -> String {
        if self.use_color {
            style(text)
        } else {
            text.to_string()
        }
    }
}

/// Title followed by an underline at least 20 columns wide.
pub fn write_headline<W: Write>(out: &mut W, ui: Ui, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", ui.head(text))?;
    writeln!(out, "{}", ui.dim(&"─".repeat(text.chars().count().max(20))))
}

/// Shared facts of a split: new mask, block size, magic number.
pub fn write_summary<W: Write>(out: &mut W, ui: Ui, plan: &SplitPlan) -> io::Result<()> {
    let sample = plan.first();
    writeln!(out, "Base network : {}", plan.parent())?;
    writeln!(
        out,
        "New mask     : {}  (/{})",
        sample.subnet_mask(),
        plan.prefix()
    )?;
    writeln!(out, "Wildcard     : {}", sample.wildcard_mask())?;
    writeln!(
        out,
        "Block size   : {} addresses per subnet",
        sample.block_size()
    )?;
    writeln!(out, "Subnets      : {}", plan.count())?;
    writeln!(out, "Magic number : {}", ui.ok(&describe_magic(&sample)))
}

/// Numbered detail blocks, at most `limit` of `total`.
pub fn write_subnets<W, I>(
    out: &mut W,
    ui: Ui,
    infos: I,
    limit: usize,
    total: u64,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = SubnetInfo>,
{
    for (i, info) in infos.into_iter().take(limit).enumerate() {
        writeln!(out, "{}", ui.head(&format!("{:>2}. {}", i + 1, info.subnet)))?;
        write_detail_lines(out, &info, "    ")?;
        writeln!(out)?;
    }
    if total > limit as u64 {
        writeln!(
            out,
            "{}",
            ui.warn(&format!(
                "(showing {limit} of {total} subnets, exports contain all of them)"
            ))
        )?;
    }
    Ok(())
}

/// Full analysis of a single subnet.
pub fn write_analysis<W: Write>(out: &mut W, ui: Ui, space: &AddressSpace) -> io::Result<()> {
    let info = SubnetInfo::from(space);
    writeln!(out, "{}", ui.head(&info.subnet))?;
    write_detail_lines(out, &info, "")?;
    writeln!(out, "Block size : {} addresses", space.block_size())?;
    writeln!(out, "Mask octet : {}", info.mask_octet_value)
}

fn write_detail_lines<W: Write>(out: &mut W, info: &SubnetInfo, indent: &str) -> io::Result<()> {
    writeln!(out, "{indent}Network    : {}", info.network)?;
    writeln!(out, "{indent}Broadcast  : {}", info.broadcast)?;
    writeln!(
        out,
        "{indent}Host range : {}  -  {}",
        info.first_host, info.last_host
    )?;
    writeln!(out, "{indent}Hosts      : {}", info.usable_hosts)?;
    writeln!(
        out,
        "{indent}Mask       : {}   Wildcard: {}",
        info.netmask, info.wildcard
    )?;
    match (info.magic_number, info.interesting_octet) {
        (Some(magic), Some(octet)) => writeln!(out, "{indent}Magic      : {magic} (octet {octet})"),
        (Some(magic), None) => writeln!(out, "{indent}Magic      : {magic} (octet aligned)"),
        (None, _) => writeln!(out, "{indent}Magic      : none (whole address space)"),
    }
}

/// Magic number with the octet it applies to.
pub fn describe_magic(space: &AddressSpace) -> String {
    match (space.magic_number(), space.interesting_octet()) {
        (Some(magic), Some(octet)) => format!(
            "{magic} (in octet {octet}, mask value {})",
            space.mask_octet_value()
        ),
        (Some(magic), None) => format!(
            "{magic} (prefix /{} is octet aligned, mask value 255)",
            space.prefix()
        ),
        (None, _) => "none (whole address space)".to_string(),
    }
}
