//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the
//! grader: per-test scored results, the target repository lifecycle, and
//! the enumerable target-level failure modes the driver inspects.
//!
//! 此模块定义整个评分器使用的核心数据结构：
//! 每个测试的计分结果、目标仓库的生命周期，
//! 以及驱动程序检查的可枚举目标级失败模式。

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::core::suite::TestCaseSpec;
use crate::infra::command::ExecError;
use crate::infra::t;

/// The scored outcome of one test case against one target. `score` is
/// always either `0` or exactly `rubric`; a test case matches as a whole or
/// not at all, with no partial credit.
///
/// 一个测试用例针对一个目标的计分结果。`score` 总是 `0` 或恰好等于
/// `rubric`；测试用例要么整体匹配要么不匹配，没有部分得分。
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    /// The test case name / 测试用例名称
    pub name: String,
    /// Points available for this test case / 此测试用例的可得分数
    pub rubric: u32,
    /// Points earned: `0` or `rubric` / 获得的分数：`0` 或 `rubric`
    pub score: u32,
}

impl ScoredResult {
    /// A full-credit result for a matched test case.
    /// 匹配测试用例的满分结果。
    pub fn pass(spec: &TestCaseSpec) -> Self {
        ScoredResult {
            name: spec.name.clone(),
            rubric: spec.rubric,
            score: spec.rubric,
        }
    }

    /// A zero-score result for a mismatched or failed test case.
    /// 不匹配或失败测试用例的零分结果。
    pub fn fail(spec: &TestCaseSpec) -> Self {
        ScoredResult {
            name: spec.name.clone(),
            rubric: spec.rubric,
            score: 0,
        }
    }

    /// `true` when the test case earned its points.
    /// 测试用例获得分数时为 `true`。
    pub fn passed(&self) -> bool {
        self.score != 0
    }
}

/// The lifecycle of a repository target. Transitions are driven explicitly
/// by the harness, in order; the state is recorded so ordering is
/// observable rather than implicit.
///
/// 仓库目标的生命周期。状态转换由评分框架按顺序显式驱动；
/// 记录状态使顺序可观察而非隐含。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetState {
    Uninitialized,
    Cloned,
    Built,
    Tested,
    Reported,
}

/// Target-level failures. These stop one target only; the driver prints
/// them in the warning treatment and continues with the remaining targets.
///
/// 目标级失败。它们只终止一个目标；驱动程序以警告样式打印它们，
/// 并继续处理其余目标。
#[derive(Debug)]
pub enum TargetError {
    /// Constructed without a student or local override, so there is nothing
    /// to clone from. A configuration error, not a runtime fault.
    /// 构造时既无学生也无本地覆盖，因此没有可克隆的来源。
    /// 这是配置错误，不是运行时故障。
    NoRemote { label: String },
    /// The local checkout directory does not exist or is not a directory.
    /// 本地检出目录不存在或不是目录。
    MissingLocal { path: PathBuf },
    /// The configured build command string could not be tokenized.
    /// 配置的构建命令字符串无法分词。
    BadBuildCommand { command: String },
    /// `git clone` could not be spawned or timed out.
    /// 无法派生 `git clone` 或其超时。
    Clone(ExecError),
    /// The build command could not be spawned or timed out. A build that
    /// runs and exits non-zero is not an error; it surfaces later as test
    /// failures.
    /// 无法派生构建命令或其超时。能运行但以非零退出的构建不算错误；
    /// 它稍后会表现为测试失败。
    Build(ExecError),
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::NoRemote { label } => {
                write!(f, "{}", t!("target.no_remote", label = label))
            }
            TargetError::MissingLocal { path } => {
                write!(f, "{}", t!("target.missing_local", path = path.display()))
            }
            TargetError::BadBuildCommand { command } => {
                write!(f, "{}", t!("target.bad_build_command", command = command))
            }
            TargetError::Clone(e) => write!(f, "{}", t!("target.clone_failed", error = e)),
            TargetError::Build(e) => write!(f, "{}", t!("target.build_failed", error = e)),
        }
    }
}

impl std::error::Error for TargetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TargetError::Clone(e) | TargetError::Build(e) => Some(e),
            _ => None,
        }
    }
}
