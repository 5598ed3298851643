//! Export the resolved configuration to files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use configor::Configor;

pub fn run(
    engine: &Configor,
    files: &[PathBuf],
    output: &Path,
    nodes: &str,
    formats: &str,
) -> Result<()> {
    let config = super::load_app_config(engine, files)?;
    let written = engine
        .dump(&config, nodes, formats, output)
        .with_context(|| format!("Failed to export configuration to {}", output.display()))?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
