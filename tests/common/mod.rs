// Shared test helpers for integration tests
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Creates a complete grading environment in a temporary directory:
/// a `config.toml` grading a single local checkout with a no-op build
/// command, a suite file under `tests/sample/`, and the checkout itself.
///
/// 在临时目录中创建完整的评分环境：
/// 一个使用空操作构建命令评分单个本地检出目录的 `config.toml`、
/// `tests/sample/` 下的套件文件，以及检出目录本身。
pub fn setup_grading_environment() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let root = temp_dir.path();

    let config_content = r#"credentials = "https"
org = "cs315"
project = "sample"
local = "checkout"
build = "true"
timeout = 10
"#;
    fs::write(root.join("config.toml"), config_content).expect("Failed to write config.toml");

    write_sample_suite(&temp_dir, DEFAULT_SUITE);

    fs::create_dir_all(root.join("checkout")).expect("Failed to create checkout directory");

    temp_dir
}

/// A suite with one passing stdout case, one failing case, and one
/// file-output case the command actually produces.
pub const DEFAULT_SUITE: &str = r#"
[[tests]]
name = "hello"
input = ["echo", "Hello   World"]
expected = "hello world"
rubric = 10

[[tests]]
name = "mismatch"
input = ["echo", "something else"]
expected = "expected text"
rubric = 5

[[tests]]
name = "file-output"
input = ["sh", "-c", "echo done > result.txt"]
expected = "done"
output = "result.txt"
rubric = 5
"#;

/// Writes a suite file for project "sample" into the environment.
pub fn write_sample_suite(temp_dir: &TempDir, suite: &str) -> PathBuf {
    let suite_dir = temp_dir.path().join("tests").join("sample");
    fs::create_dir_all(&suite_dir).expect("Failed to create suite directory");
    let suite_path = suite_dir.join("sample.toml");
    fs::write(&suite_path, suite).expect("Failed to write suite file");
    suite_path
}

/// Creates a grading environment configured with student repos instead of
/// a local checkout. Only the listed students' checkout directories are
/// created; the rest stay missing.
pub fn setup_student_environment(students: &[&str], present: &[&str]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let root = temp_dir.path();

    let student_list = students
        .iter()
        .map(|s| format!("\"{}\"", s))
        .collect::<Vec<_>>()
        .join(", ");
    let config_content = format!(
        r#"credentials = "https"
org = "cs315"
project = "sample"
students = [{}]
build = "true"
timeout = 10
"#,
        student_list
    );
    fs::write(root.join("config.toml"), config_content).expect("Failed to write config.toml");

    write_sample_suite(&temp_dir, DEFAULT_SUITE);

    for student in present {
        let checkout = root
            .join("github.com")
            .join("cs315")
            .join(format!("sample-{}", student));
        fs::create_dir_all(&checkout).expect("Failed to create student checkout");
    }

    temp_dir
}
