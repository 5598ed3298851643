//! File cascade command.

use std::path::PathBuf;

use anyhow::Result;
use configor::Configor;

/// Print the selected files in merge order, one per line.
pub fn run(engine: &Configor, files: &[PathBuf]) -> Result<()> {
    for path in engine.config_files(files) {
        println!("{}", path.display());
    }
    Ok(())
}
