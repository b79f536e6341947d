//! # JSON Reporting Module / JSON 报告模块
//!
//! Machine-readable score export, one record per target, for import into a
//! learning-management system or spreadsheet.
//!
//! 机器可读的成绩导出，每个目标一条记录，
//! 便于导入学习管理系统或电子表格。

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::models::ScoredResult;
use crate::core::target::Target;
use crate::infra::t;

/// One target's scores as serialized into the report.
/// 序列化到报告中的单个目标成绩。
#[derive(Serialize)]
struct TargetReport<'a> {
    label: &'a str,
    earned: u32,
    available: u32,
    results: &'a [ScoredResult],
}

/// Writes all targets' scored results as pretty-printed JSON.
///
/// 将所有目标的计分结果写为带缩进的 JSON。
pub fn write_json_report(targets: &[Target], output_path: &Path) -> Result<()> {
    let reports: Vec<TargetReport<'_>> = targets
        .iter()
        .map(|target| TargetReport {
            label: target.label(),
            earned: target.earned(),
            available: target.available(),
            results: target.results(),
        })
        .collect();
    let body = serde_json::to_string_pretty(&reports)?;
    fs::write(output_path, body)
        .with_context(|| t!("json_report.write_failed", path = output_path.display()))?;
    Ok(())
}
