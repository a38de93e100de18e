//! The `liftcheck validate` command.

use std::path::PathBuf;

use anyhow::Result;

use liftcheck_core::catalog::{load_catalog, validate_catalog};
use liftcheck_core::config::load_config_from;

pub fn execute(catalog_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = config.catalog_path(catalog_path.as_deref());
    let catalog = load_catalog(&path)?;

    println!("Catalog: {} ({} tests)", path.display(), catalog.len());

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        println!("  WARNING: {w}");
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
