//! The five modes of the tool, shared by the CLI and the interactive menu.

use crate::config::Config;
use crate::models::{AddressSpace, Goal, SubnetInfo};
use crate::output::{
    export_plan, write_analysis, write_subnets, write_summary, ExportFormat, Ui,
};
use crate::processing::{plan, SplitPlan};
use std::error::Error;
use std::io::Write;
use std::net::Ipv4Addr;
use std::path::PathBuf;

/// Print a split and export it in `formats`.
///
/// # Returns
/// The plan and the export files written.
pub fn run_split<W: Write>(
    out: &mut W,
    ui: Ui,
    config: &Config,
    parent: AddressSpace,
    goal: Goal,
    formats: &[ExportFormat],
) -> Result<(SplitPlan, Vec<PathBuf>), Box<dyn Error>> {
    log::info!("run_split({parent}, {goal})");
    let plan = plan(parent, goal)?;

    writeln!(out)?;
    match goal {
        Goal::ByCount(n) => writeln!(
            out,
            "Borrowed bits: {bits}  (log2({n}) = {bits})",
            bits = plan.borrowed_bits()
        )?,
        Goal::ByHosts(h) => writeln!(
            out,
            "Host bits: {bits}  (/{prefix} leaves {usable} usable hosts >= {h})",
            bits = plan.host_bits(),
            prefix = plan.prefix(),
            usable = plan.first().usable_host_count()
        )?,
        Goal::ByPrefix(_) => {}
    }
    write_summary(out, ui, &plan)?;
    writeln!(out)?;
    write_subnets(
        out,
        ui,
        plan.subnets().map(|s| SubnetInfo::from(&s)),
        config.display_limit,
        plan.count(),
    )?;

    let written = run_export(out, ui, config, &plan, goal, formats)?;
    Ok((plan, written))
}

/// Export every child of `plan`, stamped with the local time, and list the files.
pub fn run_export<W: Write>(
    out: &mut W,
    ui: Ui,
    config: &Config,
    plan: &SplitPlan,
    goal: Goal,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if formats.is_empty() {
        return Ok(Vec::new());
    }
    let now = chrono::Local::now().naive_local();
    let written = export_plan(&config.export_dir, plan, goal, formats, &now)?;
    writeln!(out, "{}", ui.ok("Exported:"))?;
    for path in &written {
        writeln!(out, "  {}", path.display())?;
    }
    Ok(written)
}

/// Which subnet of `parent` split to `/prefix` holds `ip`.
pub fn run_locate<W: Write>(
    out: &mut W,
    ui: Ui,
    parent: AddressSpace,
    prefix: u8,
    ip: Ipv4Addr,
) -> Result<AddressSpace, Box<dyn Error>> {
    log::info!("run_locate({parent}, /{prefix}, {ip})");
    let plan = plan(parent, Goal::ByPrefix(prefix))?;
    let hit = plan.locate(ip)?;

    writeln!(
        out,
        "{}",
        ui.ok(&format!("Match: {ip} lies in subnet {hit}"))
    )?;
    write_analysis(out, ui, &hit)?;
    Ok(hit)
}

/// Analyze one block, host bits allowed in the input.
pub fn run_analyze<W: Write>(
    out: &mut W,
    ui: Ui,
    space: AddressSpace,
) -> Result<(), Box<dyn Error>> {
    log::info!("run_analyze({space})");
    write_analysis(out, ui, &space)?;
    Ok(())
}
