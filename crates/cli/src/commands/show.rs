//! Show the resolved configuration.

use std::path::PathBuf;

use anyhow::Result;
use configor::{Configor, Format};

pub fn run(engine: &Configor, files: &[PathBuf], format: &str) -> Result<()> {
    let format: Format = format.parse()?;
    let config = super::load_app_config(engine, files)?;
    let rendered = format.encode(&config)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
