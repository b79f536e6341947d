//! # Test Suite Module / 测试套件模块
//!
//! This module defines the declarative test suite: one TOML file per
//! project, each `[[tests]]` record naming a command template, the expected
//! output, where to capture the actual output, and a rubric weight.
//! Command templates carry placeholders that are resolved against the run
//! context lazily, at invocation time.
//!
//! 此模块定义声明式测试套件：每个项目一个 TOML 文件，
//! 每条 `[[tests]]` 记录给出命令模板、期望输出、
//! 实际输出的捕获位置以及量规权重。
//! 命令模板中的占位符在调用时才根据运行上下文惰性解析。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::config::RunContext;
use crate::infra::{command, fs as infra_fs, t};

/// Sentinel value of the `output` field selecting standard output capture.
/// `output` 字段选择标准输出捕获的哨兵值。
const STDOUT_SOURCE: &str = "stdout";

/// Recognized command-template placeholders, in priority order. A token is
/// scanned once and only its first-matching placeholder is substituted;
/// `$project_tests` must precede `$project`, of which it is a superstring.
/// Existing suite files rely on this first-match-wins policy.
///
/// 可识别的命令模板占位符，按优先级排列。每个 token 只扫描一次，
/// 仅替换第一个匹配的占位符；`$project_tests` 必须排在其子串
/// `$project` 之前。现有套件文件依赖这种先匹配先生效的策略。
pub const PROJECT_TESTS_PLACEHOLDER: &str = "$project_tests";
pub const PROJECT_PLACEHOLDER: &str = "$project";
pub const DIGITAL_PLACEHOLDER: &str = "$digital";

/// One declarative test case, immutable once loaded.
/// 一条声明式测试用例，加载后不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseSpec {
    /// Identifier, unique within a suite (assumed, not enforced).
    /// 标识符，在套件内唯一（假定如此，不做强制）。
    pub name: String,
    /// The command template: ordered tokens, some containing placeholders.
    /// 命令模板：有序 token，部分含有占位符。
    pub input: Vec<String>,
    /// The expected output, compared after normalization.
    /// 期望输出，在规范化后比较。
    pub expected: String,
    /// Where to capture actual output: "stdout", or a path relative to the
    /// target checkout.
    /// 实际输出的捕获位置："stdout"，或相对于目标检出目录的路径。
    #[serde(default = "default_output")]
    pub output: String,
    /// Points awarded when the output matches.
    /// 输出匹配时授予的分数。
    pub rubric: u32,
}

fn default_output() -> String {
    STDOUT_SOURCE.to_string()
}

/// Where a test case's actual output comes from.
/// 测试用例实际输出的来源。
#[derive(Debug, PartialEq, Eq)]
pub enum OutputSource<'a> {
    /// The spawned process's standard output / 派生进程的标准输出
    Stdout,
    /// A file the process is expected to create, relative to the checkout
    /// 进程应创建的文件，相对于检出目录
    File(&'a Path),
}

/// Raised when a command template references the external tool placeholder
/// but no tool path was configured.
/// 当命令模板引用外部工具占位符但未配置工具路径时产生。
#[derive(Debug)]
pub struct MissingToolPath {
    pub token: String,
}

impl fmt::Display for MissingToolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", t!("suite.missing_tool_path", token = self.token))
    }
}

impl std::error::Error for MissingToolPath {}

impl TestCaseSpec {
    /// Classifies the `output` field. Anything other than the `stdout`
    /// sentinel is a relative file path.
    /// 对 `output` 字段进行分类。除 `stdout` 哨兵外的任何值都是相对文件路径。
    pub fn output_source(&self) -> OutputSource<'_> {
        if self.output == STDOUT_SOURCE {
            OutputSource::Stdout
        } else {
            OutputSource::File(Path::new(&self.output))
        }
    }

    /// Resolves the command template against the run context. Each token is
    /// scanned for the placeholders in priority order and only the first
    /// match is substituted (every occurrence of that one placeholder);
    /// tokens without placeholders pass through unchanged. Resolution is
    /// idempotent for a given context.
    ///
    /// 根据运行上下文解析命令模板。每个 token 按优先级扫描占位符，
    /// 只替换第一个匹配项（该占位符的所有出现位置）；
    /// 不含占位符的 token 原样通过。对给定上下文的解析是幂等的。
    pub fn resolve(&self, ctx: &RunContext) -> Result<Vec<String>, MissingToolPath> {
        let substitutions: [(&str, Option<String>); 3] = [
            (
                PROJECT_TESTS_PLACEHOLDER,
                Some(ctx.project_tests.display().to_string()),
            ),
            (PROJECT_PLACEHOLDER, Some(ctx.project.clone())),
            (DIGITAL_PLACEHOLDER, ctx.digital.clone()),
        ];

        self.input
            .iter()
            .map(|token| {
                for (placeholder, value) in &substitutions {
                    if token.contains(placeholder) {
                        return match value {
                            Some(v) => Ok(token.replace(placeholder, v)),
                            None => Err(MissingToolPath {
                                token: token.clone(),
                            }),
                        };
                    }
                }
                Ok(token.clone())
            })
            .collect()
    }

    /// Runs the resolved command line inside the target checkout and
    /// captures the actual output from the configured source. For a file
    /// source the process's stdout is discarded and the file is read
    /// afterwards; a file the program never created yields the empty
    /// string. Trailing newlines are stripped from the end only.
    ///
    /// 在目标检出目录内运行解析后的命令行，并从配置的来源捕获实际输出。
    /// 文件来源会丢弃进程的 stdout，之后读取该文件；
    /// 程序从未创建的文件产生空字符串。仅从末尾去除尾随换行符。
    pub async fn capture(
        &self,
        cmd_line: &[String],
        local: &Path,
        timeout_secs: u64,
    ) -> Result<String> {
        let output = command::execute(cmd_line, Some(local), timeout_secs).await?;
        let raw = match self.output_source() {
            OutputSource::Stdout => output.stdout,
            OutputSource::File(rel) => infra_fs::read_output_file(&local.join(rel))
                .with_context(|| t!("suite.output_read_failed", path = self.output))?,
        };
        Ok(strip_trailing_newlines(&raw).to_string())
    }
}

/// The full set of test cases for one project.
/// 一个项目的全部测试用例。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuite {
    pub tests: Vec<TestCaseSpec>,
}

impl TestSuite {
    /// Total points available across the suite.
    /// 套件中可获得的总分。
    pub fn available_points(&self) -> u32 {
        self.tests.iter().map(|t| t.rubric).sum()
    }
}

/// Loads a project's suite file. Failure here aborts the whole run; there
/// is no such thing as half a suite.
///
/// 加载项目的套件文件。此处的失败会中止整个运行；不存在"半个套件"。
pub fn load_suite(path: &Path) -> Result<TestSuite> {
    let raw =
        fs::read_to_string(path).with_context(|| t!("suite.read_failed", path = path.display()))?;
    let suite: TestSuite =
        toml::from_str(&raw).with_context(|| t!("suite.parse_failed", path = path.display()))?;
    Ok(suite)
}

/// Strips newline characters from the end of captured output, leaving
/// leading and internal whitespace untouched.
/// 去除捕获输出末尾的换行符，保留开头和内部的空白不变。
pub fn strip_trailing_newlines(s: &str) -> &str {
    s.trim_end_matches('\n')
}
