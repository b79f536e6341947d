//! # Rubric Runner Library / Rubric Runner 库
//!
//! This library provides the core functionality for the Rubric Runner tool,
//! a configuration-driven autograder for student project repositories.
//!
//! 此库为 Rubric Runner 工具提供核心功能，
//! 这是一个配置驱动的学生项目仓库自动评分器。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, test suite model, matching and grading engine
//! - `infra` - Infrastructure services like command execution and file system operations
//! - `reporting` - Score reporting and visualization
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置、测试套件模型、匹配与评分引擎
//! - `infra` - 基础设施服务，如命令执行和文件系统操作
//! - `reporting` - 成绩报告和可视化
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::matcher;
pub use crate::core::suite;
pub use crate::core::target;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
