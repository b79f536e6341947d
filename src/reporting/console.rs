//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders per-target score summaries in the console. Labels
//! are left-justified to a column width computed once per run, so totals
//! align vertically regardless of label length; each test name is printed
//! green for full score and red for zero, and a trailing `earned/available`
//! pair sums the scored results.
//!
//! 此模块在控制台渲染每个目标的成绩摘要。标签按每次运行计算一次的
//! 列宽左对齐，使总分不论标签长短都垂直对齐；
//! 每个测试名称满分打印为绿色、零分为红色，
//! 末尾的 `earned/available` 是计分结果的总和。

use colored::*;
use std::fmt;

use crate::core::target::Target;

/// Column width for left-justified labels: the longest target label in the
/// run plus one, computed once across all targets.
///
/// 左对齐标签的列宽：本次运行中最长的目标标签加一，
/// 在所有目标上计算一次。
pub fn column_width(targets: &[Target]) -> usize {
    targets
        .iter()
        .map(|target| target.label().len())
        .max()
        .unwrap_or(0)
        + 1
}

/// Prints one target's score line: padded label, color-coded test names,
/// and the earned/available totals. Append-only rendering; nothing is
/// returned or mutated.
///
/// 打印一个目标的成绩行：填充后的标签、按颜色编码的测试名称，
/// 以及获得/可得总分。仅追加式渲染；不返回也不修改任何内容。
pub fn print_target_results(target: &Target, width: usize) {
    print!("{:<width$}", target.label(), width = width);
    for result in target.results() {
        let name = format!("{} ", result.name);
        if result.passed() {
            print!("{}", name.green());
        } else {
            print!("{}", name.red());
        }
    }
    println!("{}/{}", target.earned(), target.available());
}

/// Prints a target-level failure in the warning treatment. Failures are
/// visible but never abort the remaining targets.
///
/// 以警告样式打印目标级失败。失败是可见的，但从不中止其余目标。
pub fn print_target_failure(label: &str, error: &dyn fmt::Display) {
    println!("{}", format!("{} {}", label, error).red());
}
