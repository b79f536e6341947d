//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Rubric Runner,
//! including configuration, the test suite model, output matching,
//! and the per-repository grading engine.
//!
//! 此模块包含 Rubric Runner 的核心功能，
//! 包括配置、测试套件模型、输出匹配和针对每个仓库的评分引擎。

pub mod config;
pub mod matcher;
pub mod models;
pub mod suite;
pub mod target;

// Re-exports
pub use config::{Config, RunContext};
pub use models::{ScoredResult, TargetError, TargetState};
pub use suite::{TestCaseSpec, TestSuite};
pub use target::Target;
