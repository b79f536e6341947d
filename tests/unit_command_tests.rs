//! # Command Module Unit Tests / Command 模块单元测试
//!
//! This module contains unit tests for the bounded command runner:
//! output capture, exit codes as data, working directories, and the
//! timeout/spawn failure distinction.
//!
//! 此模块包含受限命令运行器的单元测试：
//! 输出捕获、作为数据的退出码、工作目录，
//! 以及超时与派生失败的区分。

use rubric_runner::infra::command::{ExecError, execute};
use std::fs;

fn cmd(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_captures_stdout() {
    let output = execute(&cmd(&["echo", "hello"]), None, 10).await.unwrap();

    assert_eq!(output.exit_code, Some(0));
    assert!(output.success());
    assert_eq!(output.stdout, "hello\n");
}

#[tokio::test]
async fn test_nonzero_exit_is_a_normal_result() {
    let output = execute(&cmd(&["false"]), None, 10).await.unwrap();

    assert_eq!(output.exit_code, Some(1));
    assert!(!output.success());
}

#[tokio::test]
async fn test_working_directory_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("marker.txt"), "present").unwrap();

    let output = execute(&cmd(&["ls"]), Some(dir.path()), 10).await.unwrap();

    assert!(output.stdout.contains("marker.txt"));
}

#[tokio::test]
async fn test_timeout_is_distinguishable() {
    let result = execute(&cmd(&["sleep", "5"]), None, 1).await;

    assert!(matches!(result, Err(ExecError::Timeout { secs: 1 })));
}

#[tokio::test]
async fn test_missing_program_is_a_spawn_failure() {
    let result = execute(&cmd(&["definitely_not_a_real_command_zz"]), None, 10).await;

    assert!(matches!(result, Err(ExecError::Spawn(_))));
}

#[tokio::test]
async fn test_empty_command_line() {
    let result = execute(&[], None, 10).await;

    assert!(matches!(result, Err(ExecError::EmptyCommand)));
}
