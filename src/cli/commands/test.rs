//! # Test Command Module / 测试命令模块
//!
//! This module implements the `test` command: it loads the project's suite,
//! builds the target list, then grades each target in turn — build, run
//! every test case, print the score line. Targets are processed strictly
//! sequentially and a failure in one never prevents the rest from being
//! graded.
//!
//! 此模块实现 `test` 命令：加载项目套件、构建目标列表，
//! 然后依次为每个目标评分——构建、运行所有测试用例、打印成绩行。
//! 目标严格顺序处理，单个目标的失败从不妨碍其余目标的评分。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::{Config, RunContext},
        models::TargetError,
        suite::{self, TestSuite},
        target::{self, Target},
    },
    infra::t,
    reporting::{console, html::generate_html_report, json::write_json_report},
};

/// Executes the test command: grade every configured target and render the
/// reports.
///
/// # Arguments
/// * `cfg` - The merged process configuration
/// * `html` - Optional path for an HTML grade report
/// * `json` - Optional path for a JSON score export
pub async fn execute(cfg: Config, html: Option<PathBuf>, json: Option<PathBuf>) -> Result<()> {
    let suite = suite::load_suite(&cfg.suite_path())?;
    let ctx = cfg.run_context();
    let mut targets = target::from_config(&cfg)?;

    // Column width for justified printing, computed once across the run.
    // 对齐打印的列宽，在整个运行中计算一次。
    let width = console::column_width(&targets);

    let stop_token = setup_signal_handler();

    for target in &mut targets {
        if stop_token.is_cancelled() {
            println!("{}", t!("run.interrupted").yellow());
            break;
        }
        // Isolate and continue: one broken target must not sink the run.
        // 隔离并继续：单个损坏的目标不能拖垮整个运行。
        if let Err(e) = grade_target(target, &suite, &ctx, &cfg, width).await {
            console::print_target_failure(target.label(), &e);
        }
    }

    if let Some(report_path) = &html {
        generate_html_report(&targets, report_path)?;
        println!(
            "{}",
            t!("run.html_written", path = report_path.display())
        );
    }
    if let Some(report_path) = &json {
        write_json_report(&targets, report_path)?;
        println!(
            "{}",
            t!("run.json_written", path = report_path.display())
        );
    }

    Ok(())
}

/// Grades a single target: build, run the suite, print its score line.
async fn grade_target(
    target: &mut Target,
    suite: &TestSuite,
    ctx: &RunContext,
    cfg: &Config,
    width: usize,
) -> Result<(), TargetError> {
    // The build's exit code is deliberately ignored: a broken build shows
    // up as failing test cases, not as a separate fatal stage.
    // 刻意忽略构建的退出码：损坏的构建表现为测试用例失败，
    // 而不是单独的致命阶段。
    target.build(&cfg.build, cfg.timeout_secs).await?;
    target.run_suite(suite, ctx, cfg.timeout_secs).await;
    console::print_target_results(target, width);
    target.mark_reported();
    Ok(())
}

/// Sets up a signal handler so Ctrl-C stops the run between targets.
fn setup_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            println!("\n{}", t!("run.shutdown_signal").yellow());
            token_clone.cancel();
        }
    });

    token
}
