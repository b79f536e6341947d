//! # Reporting Module / 报告模块
//!
//! Score reporting in several formats: the column-aligned console report,
//! an optional static HTML page, and an optional JSON export.
//!
//! 多种格式的成绩报告：列对齐的控制台报告、
//! 可选的静态 HTML 页面以及可选的 JSON 导出。

pub mod console;
pub mod html;
pub mod json;
