// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::config::{self, CliOverrides, Config};
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("rubric-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help(t!("cli_config", locale = locale).to_string())
                .value_name("CONFIG")
                .default_value("config.toml")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("credentials")
                .short('c')
                .long("credentials")
                .help(t!("cli_credentials", locale = locale).to_string())
                .value_name("METHOD")
                .value_parser(["https", "ssh"])
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("digital")
                .short('d')
                .long("digital")
                .help(t!("cli_digital", locale = locale).to_string())
                .value_name("PATH")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("local")
                .short('l')
                .long("local")
                .help(t!("cli_local", locale = locale).to_string())
                .value_name("DIR")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("org")
                .short('o')
                .long("org")
                .help(t!("cli_org", locale = locale).to_string())
                .value_name("ORG")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .help(t!("cli_project", locale = locale).to_string())
                .value_name("PROJECT")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("students")
                .short('s')
                .long("students")
                .help(t!("cli_students", locale = locale).to_string())
                .value_name("STUDENT")
                .num_args(1..)
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("cli_verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("clone").about(t!("cmd_clone_about", locale = locale).to_string()))
        .subcommand(
            Command::new("test")
                .about(t!("cmd_test_about", locale = locale).to_string())
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help(t!("cli_html", locale = locale).to_string())
                        .value_name("HTML")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("cli_json", locale = locale).to_string())
                        .value_name("JSON")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help("Create a default config file without launching the interactive wizard.")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("clone", sub_matches)) => {
            let cfg = load_merged_config(sub_matches)?;
            commands::clone::execute(cfg).await
        }
        Some(("test", sub_matches)) => {
            let html = sub_matches.get_one::<PathBuf>("html").cloned();
            let json = sub_matches.get_one::<PathBuf>("json").cloned();
            let cfg = load_merged_config(sub_matches)?;
            commands::test::execute(cfg, html, json).await
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            commands::init::execute(non_interactive)
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
            Ok(())
        }
    }
}

/// Loads `config.toml` and applies command-line overrides on top of it.
fn load_merged_config(matches: &ArgMatches) -> Result<Config> {
    let config_path = matches
        .get_one::<PathBuf>("config")
        .expect("--config has a default value");
    let file = config::load_config_file(config_path)?;
    let overrides = CliOverrides {
        credentials: matches.get_one::<String>("credentials").cloned(),
        digital: matches.get_one::<String>("digital").cloned(),
        local: matches.get_one::<String>("local").cloned(),
        org: matches.get_one::<String>("org").cloned(),
        project: matches.get_one::<String>("project").cloned(),
        students: matches
            .get_many::<String>("students")
            .map(|values| values.cloned().collect()),
        verbose: matches.get_flag("verbose"),
    };
    Config::from_parts(file, overrides)
}
