//! Writing export files.
//!
//! Files are named `subnet_<mode>_<YYYYmmdd_HHMMSS>.<ext>` and placed in the
//! configured export directory, which is created when missing.

use super::csv::write_csv;
use super::json::{write_json, ExportDocument};
use super::markdown::write_markdown;
use crate::models::{Goal, SubnetInfo};
use crate::processing::SplitPlan;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use itertools::Itertools;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExportFormat {
    Csv,
    #[value(name = "md", alias = "markdown")]
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

pub fn export_file_name(mode_name: &str, format: ExportFormat, now: &NaiveDateTime) -> String {
    format!(
        "subnet_{mode_name}_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Write every child of `plan` once per requested format.
///
/// # Returns
/// The paths written, in the order the formats were given (duplicates skipped).
pub fn export_plan(
    dir: &Path,
    plan: &SplitPlan,
    goal: Goal,
    formats: &[ExportFormat],
    now: &NaiveDateTime,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Error creating export dir {}: {e}", dir.display()))?;

    let mut written = Vec::new();
    for format in formats.iter().unique() {
        let path = dir.join(export_file_name(goal.mode_name(), *format, now));
        let file = File::create(&path)
            .map_err(|e| format!("Error creating {}: {e}", path.display()))?;
        let mut out = BufWriter::new(file);
        let infos = plan.subnets().map(|s| SubnetInfo::from(&s));

        match format {
            ExportFormat::Csv => {
                write_csv(&mut out, infos)?;
            }
            ExportFormat::Markdown => {
                write_markdown(&mut out, &plan.parent(), goal.mode_name(), now, infos)?;
            }
            ExportFormat::Json => {
                write_json(&mut out, &ExportDocument::new(plan, goal, now))?;
            }
        }
        out.flush()?;

        log::info!("Exported {} subnets to {}", plan.count(), path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::plan;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap()
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "subnet-calc-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("by_hosts", ExportFormat::Markdown, &timestamp()),
            "subnet_by_hosts_20240301_093005.md"
        );
    }

    #[test]
    fn test_export_plan_writes_all_formats() {
        let dir = temp_dir("export");
        let goal = Goal::ByCount(8);
        let plan = plan("10.0.0.0/24".parse().unwrap(), goal).unwrap();
        let paths = export_plan(
            &dir,
            &plan,
            goal,
            &[
                ExportFormat::Csv,
                ExportFormat::Markdown,
                ExportFormat::Csv,
                ExportFormat::Json,
            ],
            &timestamp(),
        )
        .expect("export failed");

        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], dir.join("subnet_by_count_20240301_093005.csv"));

        let csv = std::fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(csv.lines().count(), 9);
        assert!(csv.contains("10.0.0.224/27;10.0.0.224;10.0.0.255;"));

        let md = std::fs::read_to_string(&paths[1]).unwrap();
        assert!(md.starts_with("# Subnetting export (by_count)"));

        let json = std::fs::read_to_string(&paths[2]).unwrap();
        assert!(json.contains("\"subnet_count\": 8"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
