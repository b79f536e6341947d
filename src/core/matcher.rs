//! # Output Matcher Module / 输出匹配模块
//!
//! The equivalence relation used to grade captured output: comparison is
//! case-insensitive and every whitespace character is deleted from both
//! sides before comparing. This tolerates cosmetic formatting differences
//! (indentation, line endings, trailing spaces) in student program output
//! while still requiring exact content equivalence.
//!
//! 用于给捕获输出评分的等价关系：比较不区分大小写，
//! 且在比较前从两侧删除所有空白字符。
//! 这容忍学生程序输出中的外观格式差异
//! （缩进、行尾风格、尾随空格），同时仍要求内容完全等价。

use crate::infra::t;

/// Normalizes a string for comparison: lowercase, with every whitespace
/// character removed entirely (not collapsed).
///
/// 规范化字符串以便比较：转为小写，并完全删除（而非折叠）所有空白字符。
pub fn normalize(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Compares actual against expected output under the grading equivalence
/// relation. Pure apart from the optional diagnostic print of the two
/// normalized strings when `verbose` is set.
///
/// 在评分等价关系下比较实际输出与期望输出。
/// 除了在设置 `verbose` 时可选地打印两个规范化字符串外，是纯函数。
pub fn matches(actual: &str, expected: &str, verbose: bool) -> bool {
    let loose_actual = normalize(actual);
    let loose_expected = normalize(expected);
    if verbose {
        println!(
            "{}",
            t!(
                "match.verbose",
                actual = loose_actual,
                expected = loose_expected
            )
        );
    }
    loose_actual == loose_expected
}
