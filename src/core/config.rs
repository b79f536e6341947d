//! # Configuration Module / 配置模块
//!
//! This module merges the grader's configuration from two sources:
//! a `config.toml` file holding per-course defaults and the command-line
//! flags that override them. The merged `Config` is resolved once at
//! startup; every other component receives only the values it needs.
//!
//! 此模块从两个来源合并评分器的配置：
//! 保存课程默认值的 `config.toml` 文件以及覆盖它们的命令行标志。
//! 合并后的 `Config` 在启动时解析一次；其他组件只接收各自需要的值。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::infra::t;

/// How the hosted git service authenticates clone operations.
/// 托管 git 服务对克隆操作的认证方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Credentials {
    Https,
    Ssh,
}

impl Credentials {
    /// The remote URL prefix this method implies.
    /// 此认证方式对应的远程 URL 前缀。
    pub fn remote_prefix(&self) -> &'static str {
        match self {
            Credentials::Https => "https://github.com/",
            Credentials::Ssh => "git@github.com:/",
        }
    }
}

impl FromStr for Credentials {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "https" => Ok(Credentials::Https),
            "ssh" => Ok(Credentials::Ssh),
            other => bail!(t!("config.bad_credentials", value = other)),
        }
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Https => write!(f, "https"),
            Credentials::Ssh => write!(f, "ssh"),
        }
    }
}

/// The raw contents of `config.toml`. Every field is optional here;
/// requiredness is enforced only after the command line has had its say.
///
/// `config.toml` 的原始内容。这里的每个字段都是可选的；
/// 只有在命令行生效之后才强制要求必填字段。
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// GitHub auth method ("https" or "ssh") / GitHub 认证方式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
    /// Path to an external tool jar some suites invoke (e.g. a logic simulator)
    /// 某些套件调用的外部工具 jar 的路径（例如逻辑模拟器）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital: Option<String>,
    /// A single local checkout to grade instead of student clones
    /// 要评分的单个本地检出目录（代替学生克隆）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    /// GitHub Classroom organization / GitHub Classroom 组织
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Project (assignment) name / 项目（作业）名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Student GitHub IDs, one repo each / 学生 GitHub ID，每人一个仓库
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<String>>,
    /// Print normalized actual/expected output while matching
    /// 匹配时打印规范化后的实际/期望输出
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    /// External build command run inside each checkout (default "make")
    /// 在每个检出目录内运行的外部构建命令（默认 "make"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    /// Wall-clock bound in seconds for every spawned process (default 10)
    /// 每个派生进程的挂钟时间上限，单位秒（默认 10）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

/// Values captured from the command line. A `Some` here always wins over
/// the corresponding `config.toml` field.
/// 从命令行捕获的值。此处的 `Some` 总是优先于 `config.toml` 中的对应字段。
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub credentials: Option<String>,
    pub digital: Option<String>,
    pub local: Option<String>,
    pub org: Option<String>,
    pub project: Option<String>,
    pub students: Option<Vec<String>>,
    pub verbose: bool,
}

/// The fully resolved, read-only process configuration.
/// 完全解析后的只读进程配置。
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub digital: Option<String>,
    pub local: Option<PathBuf>,
    pub org: String,
    pub project: String,
    pub students: Vec<String>,
    pub verbose: bool,
    pub build: String,
    pub timeout_secs: u64,
    /// Directory holding this project's suite and fixture files:
    /// `<cwd>/tests/<project>`.
    /// 保存此项目套件和夹具文件的目录：`<cwd>/tests/<project>`。
    pub project_tests: PathBuf,
}

/// The per-invocation substitution environment for command templates.
/// Constructed once per run and read-only thereafter.
/// 命令模板的每次调用替换环境。每次运行构造一次，此后只读。
#[derive(Debug, Clone)]
pub struct RunContext {
    pub project: String,
    pub project_tests: PathBuf,
    pub digital: Option<String>,
}

/// Default external build command / 默认的外部构建命令
pub const DEFAULT_BUILD_COMMAND: &str = "make";

/// Default per-process wall-clock bound in seconds / 默认的每进程挂钟上限（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Loads and parses `config.toml`. A missing or unparsable file is fatal to
/// the run; there is no such thing as half a configuration.
///
/// 加载并解析 `config.toml`。文件缺失或无法解析对本次运行是致命的；
/// 不存在"半份配置"。
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()))?;
    let file: ConfigFile =
        toml::from_str(&raw).with_context(|| t!("config.parse_failed", path = path.display()))?;
    Ok(file)
}

impl Config {
    /// Merges the config file with command-line overrides into the final
    /// configuration. Command-line values take precedence; `credentials`,
    /// `org`, and `project` must resolve from one of the two sources.
    ///
    /// 将配置文件与命令行覆盖合并为最终配置。命令行值优先；
    /// `credentials`、`org` 和 `project` 必须能从两个来源之一解析出来。
    pub fn from_parts(file: ConfigFile, cli: CliOverrides) -> Result<Self> {
        let credentials = match cli.credentials {
            Some(value) => value.parse()?,
            None => file
                .credentials
                .ok_or_else(|| anyhow::anyhow!(t!("config.missing_field", field = "credentials")))?,
        };
        let org = cli
            .org
            .or(file.org)
            .ok_or_else(|| anyhow::anyhow!(t!("config.missing_field", field = "org")))?;
        let project = cli
            .project
            .or(file.project)
            .ok_or_else(|| anyhow::anyhow!(t!("config.missing_field", field = "project")))?;

        let digital = cli
            .digital
            .or(file.digital)
            .map(|path| expand_path(&path))
            .transpose()?;
        let local = cli
            .local
            .or(file.local)
            .map(|path| expand_path(&path))
            .transpose()?
            // Trailing separators would leave the target with an empty label.
            // 末尾的分隔符会使目标的标签为空。
            .map(|path| PathBuf::from(path.trim_end_matches('/')));

        let students = cli.students.or(file.students).unwrap_or_default();
        let verbose = cli.verbose || file.verbose.unwrap_or(false);
        let build = file
            .build
            .unwrap_or_else(|| DEFAULT_BUILD_COMMAND.to_string());
        let timeout_secs = file.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);

        let project_tests = env::current_dir()
            .context(t!("config.cwd_failed"))?
            .join("tests")
            .join(&project);

        Ok(Config {
            credentials,
            digital,
            local,
            org,
            project,
            students,
            verbose,
            build,
            timeout_secs,
            project_tests,
        })
    }

    /// Path to the project's declarative suite file:
    /// `<project_tests>/<project>.toml`.
    /// 项目声明式套件文件的路径：`<project_tests>/<project>.toml`。
    pub fn suite_path(&self) -> PathBuf {
        self.project_tests.join(format!("{}.toml", self.project))
    }

    /// The substitution environment handed to the test case model.
    /// 交给测试用例模型的替换环境。
    pub fn run_context(&self) -> RunContext {
        RunContext {
            project: self.project.clone(),
            project_tests: self.project_tests.clone(),
            digital: self.digital.clone(),
        }
    }
}

/// Expands `~` and environment variables in user-supplied paths.
/// 展开用户提供路径中的 `~` 和环境变量。
fn expand_path(value: &str) -> Result<String> {
    Ok(shellexpand::full(value)
        .with_context(|| t!("config.expand_failed", value = value))?
        .into_owned())
}
