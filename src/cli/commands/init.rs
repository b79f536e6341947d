//! # Init Command Module / 初始化命令模块
//!
//! This module scaffolds a new grading setup through an interactive
//! command-line wizard: it asks for the organization, project name, and
//! credentials method, then writes `config.toml` and a starter suite file
//! under `tests/<project>/`.
//!
//! 此模块通过交互式命令行向导搭建新的评分环境：
//! 询问组织、项目名称和认证方式，
//! 然后写入 `config.toml` 以及 `tests/<project>/` 下的起始套件文件。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::config::{ConfigFile, Credentials};
use crate::infra::t;

const DEFAULT_CONFIG: &str = r#"# Grading configuration / 评分配置
# Command-line flags override any value in this file.
# 命令行标志会覆盖此文件中的任何值。

# GitHub auth method: "https" or "ssh" / GitHub 认证方式
credentials = "https"

# GitHub Classroom organization / GitHub Classroom 组织
org = "my-classroom-org"

# Project (assignment) name; the suite lives at tests/<project>/<project>.toml
# 项目（作业）名称；套件位于 tests/<project>/<project>.toml
project = "project"

# Student GitHub IDs, one assignment repo each / 学生 GitHub ID
# students = ["alice", "bob"]

# Or grade a single local checkout instead / 或改为评分单个本地检出目录
# local = "~/work/project-solution"

# Path to an external tool jar some suites invoke / 某些套件调用的外部工具 jar
# digital = "~/Digital/digital.jar"

# External build command run inside each checkout / 在检出目录内运行的构建命令
build = "make"

# Wall-clock bound in seconds for every spawned process / 每个进程的超时（秒）
timeout = 10

# Print normalized actual and expected output / 打印规范化后的实际与期望输出
verbose = false
"#;

const STARTER_SUITE: &str = r#"# Starter test suite / 起始测试套件
# Each [[tests]] record runs one command inside the student checkout and
# compares its output (case-insensitive, whitespace ignored).
# 每条 [[tests]] 记录在学生检出目录内运行一条命令并比较其输出
# （不区分大小写，忽略空白）。

[[tests]]
name = "hello"
input = ["echo", "Hello World"]
expected = "Hello World"
rubric = 10

# Capture from a file the program writes instead of stdout:
# 从程序写入的文件而非 stdout 捕获：
# [[tests]]
# name = "output-file"
# input = ["./program", "$project_tests/input.txt"]
# expected = "42"
# output = "result.txt"
# rubric = 5
"#;

/// Runs the init wizard (or writes the defaults straight out with
/// `--non-interactive`), creating `config.toml` and a starter suite.
pub fn execute(non_interactive: bool) -> Result<()> {
    let config_path = Path::new("config.toml");
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init.welcome").cyan().bold());
        println!("{}", t!("init.description"));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", path = config_path.display()).to_string())
            .default(false)
            .interact()
            .context(t!("init.user_input_failed").to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted"));
            return Ok(());
        }
    }

    if non_interactive {
        write_config(config_path, DEFAULT_CONFIG)?;
        write_starter_suite("project")?;
        return Ok(());
    }

    // Interactive part starts here
    let org: String = Input::with_theme(&theme)
        .with_prompt(t!("init.org_prompt").to_string())
        .interact_text()
        .context(t!("init.user_input_failed").to_string())?;

    let project: String = Input::with_theme(&theme)
        .with_prompt(t!("init.project_prompt").to_string())
        .interact_text()
        .context(t!("init.user_input_failed").to_string())?;

    let credentials_options = ["https", "ssh"];
    let selection = Select::with_theme(&theme)
        .with_prompt(t!("init.credentials_prompt").to_string())
        .items(&credentials_options)
        .default(0)
        .interact()
        .context(t!("init.user_input_failed").to_string())?;
    let credentials = if credentials_options[selection] == "ssh" {
        Credentials::Ssh
    } else {
        Credentials::Https
    };

    let digital: String = Input::with_theme(&theme)
        .with_prompt(t!("init.digital_prompt").to_string())
        .allow_empty(true)
        .interact_text()
        .context(t!("init.user_input_failed").to_string())?;

    let file = ConfigFile {
        credentials: Some(credentials),
        digital: (!digital.is_empty()).then_some(digital),
        org: Some(org),
        project: Some(project.clone()),
        build: Some("make".to_string()),
        timeout: Some(10),
        verbose: Some(false),
        ..ConfigFile::default()
    };
    let rendered = toml::to_string_pretty(&file)
        .context(t!("init.write_failed", path = config_path.display()).to_string())?;

    write_config(config_path, &rendered)?;
    write_starter_suite(&project)?;
    println!("{}", t!("init.next_steps"));

    Ok(())
}

fn write_config(config_path: &Path, contents: &str) -> Result<()> {
    fs::write(config_path, contents)
        .with_context(|| t!("init.write_failed", path = config_path.display()))?;
    println!(
        "{}",
        t!("init.config_written", path = config_path.display()).green()
    );
    Ok(())
}

/// Writes the starter suite under `tests/<project>/`, leaving any existing
/// suite file untouched.
fn write_starter_suite(project: &str) -> Result<()> {
    let suite_dir = Path::new("tests").join(project);
    let suite_path = suite_dir.join(format!("{}.toml", project));
    if suite_path.exists() {
        return Ok(());
    }
    fs::create_dir_all(&suite_dir)
        .with_context(|| t!("init.write_failed", path = suite_dir.display()))?;
    fs::write(&suite_path, STARTER_SUITE)
        .with_context(|| t!("init.write_failed", path = suite_path.display()))?;
    println!(
        "{}",
        t!("init.suite_written", path = suite_path.display()).green()
    );
    Ok(())
}
