//! JSON export.

use crate::models::{AddressSpace, Goal, SubnetInfo};
use crate::processing::SplitPlan;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::io::Write;

/// Document written to `*.json` exports.
#[derive(Serialize, Debug)]
pub struct ExportDocument {
    pub generated: String,
    pub base_network: AddressSpace,
    pub goal: Goal,
    pub prefix: u8,
    pub subnet_count: u64,
    pub subnets: Vec<SubnetInfo>,
}

impl ExportDocument {
    /// Collects every child of `plan`.
    pub fn new(plan: &SplitPlan, goal: Goal, generated: &NaiveDateTime) -> ExportDocument {
        ExportDocument {
            generated: generated.format("%Y-%m-%dT%H:%M:%S").to_string(),
            base_network: plan.parent(),
            goal,
            prefix: plan.prefix(),
            subnet_count: plan.count(),
            subnets: plan.subnets().map(|s| SubnetInfo::from(&s)).collect(),
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, doc: &ExportDocument) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, doc)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::plan;
    use chrono::NaiveDate;

    #[test]
    fn test_write_json() {
        let goal = Goal::ByCount(4);
        let plan = plan("192.168.1.0/24".parse().unwrap(), goal).unwrap();
        let generated = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let doc = ExportDocument::new(&plan, goal, &generated);
        let mut buf = Vec::new();
        write_json(&mut buf, &doc).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["base_network"], "192.168.1.0/24");
        assert_eq!(value["goal"]["mode"], "by_count");
        assert_eq!(value["prefix"], 26);
        assert_eq!(value["subnet_count"], 4);
        assert_eq!(value["subnets"][2]["subnet"], "192.168.1.128/26");
        assert_eq!(value["subnets"][2]["magic_number"], 64);
        assert_eq!(value["subnets"][2]["interesting_octet"], 4);
    }
}
