//! Catalog command handler

use super::Session;
use crate::args::CatalogSubcommand;
use degree_planner::config::Config;
use degree_planner::core::models::course;
use degree_planner::core::store::{read_catalog_csv, RecordStore};
use degree_planner::info;
use std::path::Path;

/// Dispatch catalog subcommands
pub fn run(config: &Config, subcommand: CatalogSubcommand) -> Result<(), String> {
    match subcommand {
        CatalogSubcommand::Search { query } => search(config, &query),
        CatalogSubcommand::Import { file } => import(config, &file),
    }
}

fn search(config: &Config, query: &str) -> Result<(), String> {
    let session = Session::open(config)?;
    let catalog = session
        .store
        .catalog()
        .map_err(|e| format!("Failed to load catalog: {e}"))?;
    let hits = course::search(&catalog, query);

    if hits.is_empty() {
        println!("No courses match '{query}'.");
        return Ok(());
    }
    for c in &hits {
        println!("{:<10} {:<40} {:>4.1}  {}", c.course_id, c.title, c.credits, c.subject);
    }
    println!("\n{} course(s)", hits.len());
    Ok(())
}

fn import(config: &Config, file: &Path) -> Result<(), String> {
    let courses =
        read_catalog_csv(file).map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
    let mut session = Session::open(config)?;
    let count = session
        .store
        .import_catalog(courses)
        .map_err(|e| format!("Failed to import catalog: {e}"))?;
    info!("Imported {count} course(s) from {}", file.display());
    println!("✓ Imported {count} course(s)");
    Ok(())
}
