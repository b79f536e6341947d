//! # Clone Command Module / 克隆命令模块
//!
//! This module implements the `clone` command: it derives one target per
//! student and clones each assignment repository. Cloning is idempotent —
//! an existing checkout is left untouched — and a failure for one student
//! never prevents the remaining clones.
//!
//! 此模块实现 `clone` 命令：为每名学生派生一个目标并克隆其作业仓库。
//! 克隆是幂等的——已存在的检出目录保持不变——
//! 且一名学生的失败从不妨碍其余克隆。

use anyhow::Result;

use crate::core::{config::Config, target};
use crate::reporting::console;

/// Executes the clone command over the configured target list.
pub async fn execute(cfg: Config) -> Result<()> {
    let mut targets = target::from_config(&cfg)?;

    for target in &mut targets {
        if let Err(e) = target.clone_repo(cfg.timeout_secs).await {
            console::print_target_failure(target.label(), &e);
        }
    }

    Ok(())
}
