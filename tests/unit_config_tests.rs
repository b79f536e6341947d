//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for configuration loading and the
//! file/command-line merge: command-line values take precedence, and
//! `credentials`, `org`, and `project` must resolve from one source.
//!
//! 此模块包含配置加载与文件/命令行合并的单元测试：
//! 命令行值优先，`credentials`、`org` 和 `project`
//! 必须能从某一来源解析出来。

use rubric_runner::core::config::{
    CliOverrides, Config, ConfigFile, Credentials, DEFAULT_BUILD_COMMAND, DEFAULT_TIMEOUT_SECS,
    load_config_file,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Helper function to create a complete config file / 创建完整配置文件的辅助函数
fn full_config_file() -> ConfigFile {
    ConfigFile {
        credentials: Some(Credentials::Https),
        digital: None,
        local: None,
        org: Some("cs315".to_string()),
        project: Some("sample".to_string()),
        students: Some(vec!["alice".to_string(), "bob".to_string()]),
        verbose: Some(false),
        build: None,
        timeout: None,
    }
}

#[cfg(test)]
mod config_file_tests {
    use super::*;

    #[test]
    fn test_config_file_deserialization_full() {
        let toml_str = r#"
            credentials = "ssh"
            digital = "/opt/digital.jar"
            org = "cs315"
            project = "lab05"
            students = ["alice", "bob"]
            verbose = true
            build = "make all"
            timeout = 30
        "#;

        let file: ConfigFile = toml::from_str(toml_str).unwrap();

        assert_eq!(file.credentials, Some(Credentials::Ssh));
        assert_eq!(file.digital, Some("/opt/digital.jar".to_string()));
        assert_eq!(file.org, Some("cs315".to_string()));
        assert_eq!(file.project, Some("lab05".to_string()));
        assert_eq!(
            file.students,
            Some(vec!["alice".to_string(), "bob".to_string()])
        );
        assert_eq!(file.verbose, Some(true));
        assert_eq!(file.build, Some("make all".to_string()));
        assert_eq!(file.timeout, Some(30));
    }

    #[test]
    fn test_config_file_deserialization_empty() {
        let file: ConfigFile = toml::from_str("").unwrap();

        assert!(file.credentials.is_none());
        assert!(file.org.is_none());
        assert!(file.project.is_none());
        assert!(file.students.is_none());
    }

    #[test]
    fn test_config_file_bad_credentials_value() {
        let result: Result<ConfigFile, _> = toml::from_str("credentials = \"token\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_file_missing_is_fatal() {
        let result = load_config_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_file_parse_error_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "org = [unclosed").unwrap();

        let result = load_config_file(&path);
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod merge_tests {
    use super::*;

    #[test]
    fn test_file_values_used_without_overrides() {
        let cfg = Config::from_parts(full_config_file(), CliOverrides::default()).unwrap();

        assert_eq!(cfg.credentials, Credentials::Https);
        assert_eq!(cfg.org, "cs315");
        assert_eq!(cfg.project, "sample");
        assert_eq!(cfg.students, vec!["alice", "bob"]);
        assert!(!cfg.verbose);
        assert_eq!(cfg.build, DEFAULT_BUILD_COMMAND);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let overrides = CliOverrides {
            credentials: Some("ssh".to_string()),
            org: Some("other-org".to_string()),
            project: Some("lab02".to_string()),
            students: Some(vec!["carol".to_string()]),
            verbose: true,
            ..CliOverrides::default()
        };

        let cfg = Config::from_parts(full_config_file(), overrides).unwrap();

        assert_eq!(cfg.credentials, Credentials::Ssh);
        assert_eq!(cfg.org, "other-org");
        assert_eq!(cfg.project, "lab02");
        assert_eq!(cfg.students, vec!["carol"]);
        assert!(cfg.verbose);
    }

    #[test]
    fn test_missing_required_field_is_error() {
        let mut file = full_config_file();
        file.org = None;

        let result = Config::from_parts(file, CliOverrides::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_can_supply_missing_required_field() {
        let mut file = full_config_file();
        file.project = None;
        let overrides = CliOverrides {
            project: Some("lab03".to_string()),
            ..CliOverrides::default()
        };

        let cfg = Config::from_parts(file, overrides).unwrap();
        assert_eq!(cfg.project, "lab03");
    }

    #[test]
    fn test_bad_cli_credentials_is_error() {
        let overrides = CliOverrides {
            credentials: Some("token".to_string()),
            ..CliOverrides::default()
        };

        let result = Config::from_parts(full_config_file(), overrides);
        assert!(result.is_err());
    }

    #[test]
    fn test_local_trailing_slash_is_stripped() {
        let overrides = CliOverrides {
            local: Some("/work/project-solution/".to_string()),
            ..CliOverrides::default()
        };

        let cfg = Config::from_parts(full_config_file(), overrides).unwrap();
        assert_eq!(cfg.local, Some(PathBuf::from("/work/project-solution")));
    }

    #[test]
    fn test_project_tests_and_suite_path_layout() {
        let cfg = Config::from_parts(full_config_file(), CliOverrides::default()).unwrap();

        assert!(cfg.project_tests.ends_with("tests/sample"));
        assert!(cfg.suite_path().ends_with("tests/sample/sample.toml"));
    }

    #[test]
    fn test_run_context_carries_substitution_values() {
        let mut file = full_config_file();
        file.digital = Some("/opt/digital.jar".to_string());

        let cfg = Config::from_parts(file, CliOverrides::default()).unwrap();
        let ctx = cfg.run_context();

        assert_eq!(ctx.project, "sample");
        assert_eq!(ctx.project_tests, cfg.project_tests);
        assert_eq!(ctx.digital, Some("/opt/digital.jar".to_string()));
    }
}

#[cfg(test)]
mod credentials_tests {
    use super::*;

    #[test]
    fn test_remote_prefix() {
        assert_eq!(Credentials::Https.remote_prefix(), "https://github.com/");
        assert_eq!(Credentials::Ssh.remote_prefix(), "git@github.com:/");
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let https: Credentials = "https".parse().unwrap();
        let ssh: Credentials = "ssh".parse().unwrap();

        assert_eq!(https.to_string(), "https");
        assert_eq!(ssh.to_string(), "ssh");
        assert!("gopher".parse::<Credentials>().is_err());
    }
}
