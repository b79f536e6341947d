//! # File System Operations Module / 文件系统操作模块
//!
//! Small file system helpers used by the grading engine.
//!
//! 评分引擎使用的小型文件系统辅助功能。

use std::fs;
use std::io;
use std::path::Path;

/// Reads a program's output file. A missing file means the program under
/// test never produced its output and yields the empty string; any other
/// I/O fault propagates.
///
/// 读取程序的输出文件。文件缺失表示被测程序从未产生输出，
/// 返回空字符串；其他任何 I/O 故障则向上传播。
pub fn read_output_file(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e),
    }
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
