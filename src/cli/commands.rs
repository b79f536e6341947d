//! # CLI Commands / CLI 命令
//!
//! One module per subcommand: `clone`, `test`, and `init`.
//! 每个子命令一个模块：`clone`、`test` 和 `init`。

pub mod clone;
pub mod init;
pub mod test;
