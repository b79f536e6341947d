//! # HTML Reporting Module / HTML 报告模块
//!
//! This module generates a static HTML grade report: one score table per
//! target with per-test points and status, plus run totals. The page is
//! self-contained, with the stylesheet embedded from an asset file.
//!
//! 此模块生成静态 HTML 成绩报告：每个目标一张成绩表，
//! 含每个测试的分数和状态，以及运行总分。
//! 页面是自包含的，样式表从资源文件嵌入。

use anyhow::{Context, Result};
use chrono::Local;
use maud::{DOCTYPE, PreEscaped, html};
use std::fs;
use std::path::Path;

use crate::core::target::Target;
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const REPORT_STYLE: &str = include_str!("assets/report.css");

/// Generates the HTML grade report and writes it to `output_path`.
///
/// 生成 HTML 成绩报告并写入 `output_path`。
///
/// # Arguments / 参数
/// * `targets` - The graded targets to include / 要包含的已评分目标
/// * `output_path` - Where to write the report / 报告的写入位置
pub fn generate_html_report(targets: &[Target], output_path: &Path) -> Result<()> {
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title")) }
                style { (PreEscaped(REPORT_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header")) }
                p class="timestamp" { (t!("html_report.generated", time = generated)) }
                @for target in targets {
                    section class="target" {
                        h2 { (target.label()) }
                        table {
                            thead {
                                tr {
                                    th { (t!("html_report.table.header.test")) }
                                    th class="points" { (t!("html_report.table.header.points")) }
                                    th class="status" { (t!("html_report.table.header.status")) }
                                }
                            }
                            tbody {
                                @for result in target.results() {
                                    tr {
                                        td { (result.name) }
                                        td class="points" { (result.score) "/" (result.rubric) }
                                        @if result.passed() {
                                            td class="status passed" { (t!("html_report.status_passed")) }
                                        } @else {
                                            td class="status failed" { (t!("html_report.status_failed")) }
                                        }
                                    }
                                }
                            }
                        }
                        p class="total" {
                            (t!(
                                "html_report.total",
                                earned = target.earned(),
                                available = target.available()
                            ))
                        }
                    }
                }
            }
        }
    };

    fs::write(output_path, markup.into_string())
        .with_context(|| t!("html_report.write_failed", path = output_path.display()))?;
    Ok(())
}
