//! Command-line interface entry point for `degreeplanner`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use degree_planner::config::Config;
use degree_planner::error;
use degree_planner::info;
use degree_planner::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            Ok(())
        }
        Command::Semesters { start, end } => {
            commands::planning::run_semesters(&config, start.as_deref(), end.as_deref())
        }
        Command::Plan => commands::planning::run_plan(&config),
        Command::Add { course, semester } => commands::planning::run_add(&config, &course, &semester),
        Command::Remove { course } => commands::planning::run_remove(&config, &course),
        Command::Audit { program } => commands::audit::run_audit(&config, program.as_deref()),
        Command::Overview => commands::audit::run_overview(&config),
        Command::Profile { subcommand } => commands::profile::run(&config, subcommand),
        Command::Catalog { subcommand } => commands::catalog::run(&config, subcommand),
        Command::Report {
            output,
            format,
            stdout,
        } => commands::report::run(&config, output.as_deref(), &format, stdout),
    };

    if let Err(err) = result {
        error!("{err}");
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}
