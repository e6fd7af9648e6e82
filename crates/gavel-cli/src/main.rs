//! GAVEL CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use gavel_cli::cli::{
    CanvasCourseCommand, Cli, Command, ConfigCommand, ConsentCommand, LogFormatArg, LogLevelArg,
    RosterCommand,
};
use gavel_cli::commands::{
    EXIT_FAILURE, exit_code, run_consent_show, run_download, run_roster_show,
};
use gavel_cli::logging::{LogConfig, LogFormat, init_logging};
use gavel_cli::summary::{config_table, print_consent, print_roster};
use gavel_core::{AppConfig, AppServices, build_canvas_client};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FAILURE);
    }

    let config = AppConfig::from_env();
    let services = AppServices::build(build_canvas_client(&config));

    let outcome = match &cli.command {
        Command::CanvasCourse(CanvasCourseCommand::Download(args)) => {
            run_download(&services, args).map(|result| println!("{}", result.message))
        }
        Command::Roster(RosterCommand::Show(args)) => {
            run_roster_show(&services, args).map(|students| print_roster(students.as_slice()))
        }
        Command::Consent(ConsentCommand::Show(args)) => run_consent_show(&services, args)
            .map(|report| print_consent(&report.visible(), &report.summary)),
        Command::Config(ConfigCommand::Show) => {
            println!("{}", config_table(&config));
            Ok(())
        }
    };

    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            exit_code(&error)
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
