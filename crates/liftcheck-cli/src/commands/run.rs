//! The `liftcheck run` command.

use std::path::PathBuf;

use anyhow::Result;

use liftcheck_core::catalog::{load_catalog, validate_catalog};
use liftcheck_core::config::load_config_from;
use liftcheck_core::console::Console;
use liftcheck_core::engine::run_session;

pub fn execute(catalog_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = config.catalog_path(catalog_path.as_deref());

    // Nothing reaches stdout when the catalog cannot be loaded
    let catalog = load_catalog(&path)?;
    for w in validate_catalog(&catalog) {
        tracing::warn!("{}: {}", path.display(), w);
    }

    let mut console = Console::stdio();
    run_session(&catalog, &mut console)?;

    Ok(())
}
