//! The `liftcheck init` command.

use std::path::Path;

use anyhow::Result;

use liftcheck_core::catalog::DEFAULT_CATALOG_PATH;

const BUNDLED_CATALOG: &str = include_str!("../../../../data/powerlifting-warmup-assessment.csv");

pub fn execute() -> Result<()> {
    let path = Path::new(DEFAULT_CATALOG_PATH);
    if path.exists() {
        println!("{DEFAULT_CATALOG_PATH} already exists, skipping.");
    } else {
        std::fs::write(path, BUNDLED_CATALOG)?;
        println!("Created {DEFAULT_CATALOG_PATH}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {DEFAULT_CATALOG_PATH} to adjust tests and solutions");
    println!("  2. Run: liftcheck validate");
    println!("  3. Run: liftcheck");

    Ok(())
}
