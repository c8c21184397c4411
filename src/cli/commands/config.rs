//! Config command handler

use crate::args::ConfigSubcommand;
use degree_planner::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            update(config, |c| c.set(&key, &value), &format!("Set {key} = {value}"));
        }
        Some(ConfigSubcommand::Unset { key }) => {
            update(config, |c| c.unset(&key, defaults), &format!("Reset {key} to default"));
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("Unknown config key: '{k}'");
                std::process::exit(1);
            }
        },
        None => {
            println!("\n=== Configuration ===\n");
            println!("# {}", Config::get_config_file_path().display());
            print!("{config}");
        }
    }
}

/// Apply `change`, persist, and report `done` on success
fn update<F>(config: &mut Config, change: F, done: &str)
where
    F: FnOnce(&mut Config) -> Result<(), String>,
{
    if let Err(e) = change(config) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    if let Err(e) = config.save() {
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
    println!("✓ {done}");
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            eprintln!("✗ Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
