//! # Target Module / 目标模块
//!
//! A `Target` is one repository under test: either a student's assignment
//! clone derived from the org/project configuration, or an explicit local
//! checkout. The target owns its scored results exclusively; test cases run
//! strictly sequentially and each case is isolated, so one broken command
//! cannot abort the rest of the suite.
//!
//! `Target` 是一个被测仓库：要么是根据组织/项目配置派生的
//! 学生作业克隆，要么是显式的本地检出目录。
//! 目标独占其计分结果；测试用例严格顺序执行且彼此隔离，
//! 因此一个损坏的命令不会中止套件的其余部分。

use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

use crate::core::config::{Config, RunContext};
use crate::core::matcher;
use crate::core::models::{ScoredResult, TargetError, TargetState};
use crate::core::suite::{TestCaseSpec, TestSuite};
use crate::infra::{command, fs as infra_fs, t};

/// One repository/build under test.
/// 一个被测的仓库/构建。
#[derive(Debug)]
pub struct Target {
    local: PathBuf,
    remote: Option<String>,
    label: String,
    results: Vec<ScoredResult>,
    state: TargetState,
    verbose: bool,
}

impl Target {
    /// Derives the target for one student's assignment repo. The checkout
    /// lives under `github.com/<org>/<project>-<student>` relative to the
    /// working directory, and the remote URL follows the configured
    /// credentials method.
    ///
    /// 为一名学生的作业仓库派生目标。检出目录位于工作目录下的
    /// `github.com/<org>/<project>-<student>`，
    /// 远程 URL 跟随配置的认证方式。
    pub fn for_student(cfg: &Config, student: &str) -> Self {
        let repo_name = format!("{}-{}", cfg.project, student);
        let local = PathBuf::from("github.com").join(&cfg.org).join(&repo_name);
        let remote = format!(
            "{}{}/{}.git",
            cfg.credentials.remote_prefix(),
            cfg.org,
            repo_name
        );
        Target {
            local,
            remote: Some(remote),
            label: repo_name,
            results: Vec::new(),
            state: TargetState::Uninitialized,
            verbose: cfg.verbose,
        }
    }

    /// Wraps an explicit local checkout. There is no remote, so cloning
    /// such a target is a configuration error.
    /// 包装显式的本地检出目录。它没有远程地址，因此克隆这种目标是配置错误。
    pub fn for_local(path: &Path, verbose: bool) -> Self {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Target {
            local: path.to_path_buf(),
            remote: None,
            label,
            results: Vec::new(),
            state: TargetState::Uninitialized,
            verbose,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn local(&self) -> &Path {
        &self.local
    }

    pub fn remote(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    pub fn state(&self) -> TargetState {
        self.state
    }

    pub fn results(&self) -> &[ScoredResult] {
        &self.results
    }

    /// Points earned across all scored results so far.
    /// 迄今为止所有计分结果获得的分数。
    pub fn earned(&self) -> u32 {
        self.results.iter().map(|r| r.score).sum()
    }

    /// Points available across all scored results so far.
    /// 迄今为止所有计分结果的可得分数。
    pub fn available(&self) -> u32 {
        self.results.iter().map(|r| r.rubric).sum()
    }

    /// Clones the remote into the local directory. Idempotent: if the local
    /// directory already exists the clone is a success without touching the
    /// network, and the directory is left unmodified. The exit code of
    /// `git clone` is returned as data.
    ///
    /// 将远程仓库克隆到本地目录。幂等：若本地目录已存在，
    /// 克隆无需访问网络即算成功，且目录保持不变。
    /// `git clone` 的退出码作为数据返回。
    pub async fn clone_repo(&mut self, timeout_secs: u64) -> Result<Option<i32>, TargetError> {
        let remote = self.remote.as_ref().ok_or_else(|| TargetError::NoRemote {
            label: self.label.clone(),
        })?;
        if infra_fs::is_directory(&self.local) {
            self.state = TargetState::Cloned;
            return Ok(Some(0));
        }
        println!("{}", self.local.display());
        let cmd_line = vec![
            "git".to_string(),
            "clone".to_string(),
            remote.clone(),
            self.local.display().to_string(),
        ];
        let output = command::execute(&cmd_line, None, timeout_secs)
            .await
            .map_err(TargetError::Clone)?;
        self.state = TargetState::Cloned;
        Ok(output.exit_code)
    }

    /// Runs the configured build command inside the checkout. A build that
    /// exits non-zero still proceeds to testing: a broken build manifests
    /// as every test case failing naturally. Only a missing checkout or a
    /// command that cannot run at all stops this target.
    ///
    /// 在检出目录内运行配置的构建命令。以非零退出的构建仍会继续测试：
    /// 损坏的构建自然表现为所有测试用例失败。
    /// 只有检出目录缺失或命令根本无法运行才会终止此目标。
    pub async fn build(&mut self, build_command: &str, timeout_secs: u64) -> Result<Option<i32>, TargetError> {
        if !infra_fs::is_directory(&self.local) {
            return Err(TargetError::MissingLocal {
                path: self.local.clone(),
            });
        }
        let cmd_line = shlex::split(build_command).ok_or_else(|| TargetError::BadBuildCommand {
            command: build_command.to_string(),
        })?;
        let output = command::execute(&cmd_line, Some(&self.local), timeout_secs)
            .await
            .map_err(TargetError::Build)?;
        self.state = TargetState::Built;
        Ok(output.exit_code)
    }

    /// Runs every suite case sequentially, appending one scored result per
    /// case. Cases are independent: a resolution or execution fault in one
    /// is printed as a warning, recorded as a zero score, and the remaining
    /// cases still run.
    ///
    /// 顺序运行套件中的每个用例，每个用例追加一条计分结果。
    /// 用例彼此独立：某个用例的解析或执行故障会以警告形式打印、
    /// 记为零分，其余用例照常运行。
    pub async fn run_suite(&mut self, suite: &TestSuite, ctx: &RunContext, timeout_secs: u64) {
        for spec in &suite.tests {
            self.run_case(spec, ctx, timeout_secs).await;
        }
        self.state = TargetState::Tested;
    }

    /// Marks rendering as done. Rendering itself never mutates results.
    /// 标记渲染完成。渲染本身从不修改结果。
    pub fn mark_reported(&mut self) {
        self.state = TargetState::Reported;
    }

    async fn run_case(&mut self, spec: &TestCaseSpec, ctx: &RunContext, timeout_secs: u64) {
        let result = match self.try_case(spec, ctx, timeout_secs).await {
            Ok(true) => ScoredResult::pass(spec),
            Ok(false) => ScoredResult::fail(spec),
            Err(e) => {
                println!(
                    "{}",
                    t!("run.case_error", name = &spec.name, error = format!("{:#}", e)).red()
                );
                ScoredResult::fail(spec)
            }
        };
        self.results.push(result);
    }

    async fn try_case(
        &self,
        spec: &TestCaseSpec,
        ctx: &RunContext,
        timeout_secs: u64,
    ) -> Result<bool> {
        let cmd_line = spec.resolve(ctx)?;
        let actual = spec.capture(&cmd_line, &self.local, timeout_secs).await?;
        Ok(matcher::matches(&actual, &spec.expected, self.verbose))
    }
}

/// Builds the run's target list from the configuration: one explicit local
/// checkout, or one target per student. Neither configured is fatal to the
/// run.
///
/// 根据配置构建本次运行的目标列表：一个显式本地检出目录，
/// 或每名学生一个目标。两者都未配置对本次运行是致命的。
pub fn from_config(cfg: &Config) -> Result<Vec<Target>> {
    if let Some(local) = &cfg.local {
        Ok(vec![Target::for_local(local, cfg.verbose)])
    } else if !cfg.students.is_empty() {
        Ok(cfg
            .students
            .iter()
            .map(|student| Target::for_student(cfg, student))
            .collect())
    } else {
        anyhow::bail!(t!("config.no_targets"))
    }
}
