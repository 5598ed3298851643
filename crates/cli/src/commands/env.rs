//! Environment name command.

use anyhow::Result;
use configor::Configor;

pub fn run(engine: &Configor) -> Result<()> {
    println!("{}", engine.environment());
    Ok(())
}
