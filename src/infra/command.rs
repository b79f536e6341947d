//! # Command Execution Module / 命令执行模块
//!
//! This module spawns the external processes the grader drives: `git clone`,
//! the build command, and every test case command line. Each invocation is
//! bounded by a hard wall-clock timeout and captures standard output.
//!
//! 此模块派生评分器驱动的外部进程：`git clone`、
//! 构建命令以及每个测试用例的命令行。每次调用都受
//! 硬性挂钟超时限制，并捕获标准输出。

use std::fmt;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use crate::infra::t;

/// The captured outcome of one finished process.
/// 一个已结束进程的捕获结果。
#[derive(Debug, Clone)]
pub struct ExecOutput {
    /// The process exit code, if the process exited normally.
    /// 进程的退出码（如果进程正常退出）。
    pub exit_code: Option<i32>,
    /// Everything the process wrote to standard output, decoded lossily.
    /// 进程写入标准输出的所有内容（宽松解码）。
    pub stdout: String,
}

impl ExecOutput {
    /// `true` if the process exited with code zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// The ways a spawned process can fail to yield output.
/// A timeout is deliberately distinct from a spawn fault: callers that grade
/// student code treat both as a mismatch, while the driver reports them
/// differently.
///
/// 派生的进程无法产生输出的几种失败方式。
/// 超时与派生故障是刻意区分的：评分调用方将两者都视为不匹配，
/// 而驱动程序对它们的报告方式不同。
#[derive(Debug)]
pub enum ExecError {
    /// The wall-clock timeout expired; the child was killed.
    /// 挂钟超时已到；子进程已被终止。
    Timeout { secs: u64 },
    /// The command line was empty after resolution.
    /// 解析后的命令行为空。
    EmptyCommand,
    /// The process could not be spawned or waited on.
    /// 无法派生进程或等待进程。
    Spawn(std::io::Error),
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::Timeout { secs } => write!(f, "{}", t!("exec.timeout", secs = secs)),
            ExecError::EmptyCommand => write!(f, "{}", t!("exec.empty_command")),
            ExecError::Spawn(e) => write!(f, "{}", t!("exec.spawn_failed", error = e)),
        }
    }
}

impl std::error::Error for ExecError {}

/// Executes an argument vector with an optional working directory, bounded
/// by a wall-clock timeout. Standard output is captured; standard error is
/// captured and discarded so noisy student programs cannot corrupt the
/// report. A non-zero exit code is a normal result, not an error.
///
/// 在可选的工作目录中执行参数向量，受挂钟超时限制。
/// 捕获标准输出；标准错误被捕获并丢弃，以免输出嘈杂的学生程序
/// 破坏报告。非零退出码是正常结果，不是错误。
///
/// # Arguments
/// * `tokens` - The command line: program followed by its arguments
/// * `working_dir` - Directory to run in, or `None` for the current one
/// * `timeout_secs` - Hard wall-clock bound; on expiry the child is killed
pub async fn execute(
    tokens: &[String],
    working_dir: Option<&Path>,
    timeout_secs: u64,
) -> Result<ExecOutput, ExecError> {
    let (program, args) = tokens.split_first().ok_or(ExecError::EmptyCommand)?;

    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    let child = cmd.spawn().map_err(ExecError::Spawn)?;

    // Dropping the in-flight future on timeout kills the child via kill_on_drop.
    // 超时丢弃进行中的 future 时，kill_on_drop 会终止子进程。
    match tokio::time::timeout(Duration::from_secs(timeout_secs), child.wait_with_output()).await {
        Err(_) => Err(ExecError::Timeout { secs: timeout_secs }),
        Ok(Err(e)) => Err(ExecError::Spawn(e)),
        Ok(Ok(output)) => Ok(ExecOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        }),
    }
}
