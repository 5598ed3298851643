//! Export of a resolved configuration to files.
//!
//! Responsibilities:
//! - Create the output directory tree.
//! - Encode the configuration once per requested (node, format) pair and
//!   write it to `<dir>/<node>.<format>`, or `<dir>/config.<format>` when no
//!   node is selected.
//!
//! Does NOT handle:
//! - Extracting a node's subtree; every file holds the whole configuration.
//!
//! Invariants:
//! - Formats are processed in request order; an unsupported format fails when
//!   its turn comes, after earlier formats were written.
//! - On Unix, created directories are `0700` and created files `0600`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{DUMP_DIR_MODE, DUMP_FILE_MODE, DUMP_WHOLE_NODE};
use crate::format::Format;
use crate::loader::ConfigError;

/// Split a comma-separated selection, trimming items and dropping empty ones.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Export `target` for comma-separated `nodes` and `formats` into `output_dir`.
///
/// Returns the written files in write order.
pub fn dump<T, P>(
    target: &T,
    nodes: &str,
    formats: &str,
    output_dir: P,
) -> Result<Vec<PathBuf>, ConfigError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    export(
        target,
        &split_list(nodes),
        &split_list(formats),
        output_dir.as_ref(),
    )
}

/// Export `target` once per (node, format) pair.
///
/// An empty node selection exports the whole configuration as `config`.
pub fn export<T>(
    target: &T,
    nodes: &[String],
    formats: &[String],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, ConfigError>
where
    T: Serialize + ?Sized,
{
    create_dir(output_dir)?;

    let whole = [DUMP_WHOLE_NODE.to_string()];
    let nodes = if nodes.is_empty() { &whole[..] } else { nodes };

    let mut written = Vec::new();
    for name in formats {
        let format: Format = name.parse()?;
        let data = format.encode(target)?;
        for node in nodes {
            let path = dump_path(output_dir, node, format);
            write_file(&path, data.as_bytes())?;
            tracing::debug!(path = %path.display(), %format, "Exported configuration");
            written.push(path);
        }
    }
    Ok(written)
}

/// `<dir>/<node>.<format>`
pub fn dump_path(output_dir: &Path, node: &str, format: Format) -> PathBuf {
    output_dir.join(format!("{node}.{format}"))
}

fn create_dir(path: &Path) -> Result<(), ConfigError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DUMP_DIR_MODE);
    }
    builder.create(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(DUMP_FILE_MODE);
    }
    options
        .open(path)
        .and_then(|mut file| file.write_all(data))
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
}
