//! File cascade selection.
//!
//! Turns the caller's list of configuration files into the ordered list of
//! files that exist on disk. Decoding that list left to right, with each file
//! merged over the previous ones, gives the first requested file the highest
//! priority and lets `<name>.<environment>.<ext>` override `<name>.<ext>`.

use std::path::{Path, PathBuf};

use crate::constants::EXAMPLE_QUALIFIER;

/// Insert `.<qualifier>` before the extension of `file`, or append it when the
/// file has no extension.
///
/// The extension starts at the last `.` of the file name, so `config.yml`
/// with `test` becomes `config.test.yml`, `config` becomes `config.test` and
/// the dotfile `.env` becomes `.test.env`.
pub fn qualified_path(file: &Path, qualifier: &str) -> PathBuf {
    let Some(name) = file.file_name().and_then(|name| name.to_str()) else {
        let mut name = file.as_os_str().to_os_string();
        name.push(format!(".{qualifier}"));
        return PathBuf::from(name);
    };

    let qualified = match name.rfind('.') {
        Some(dot) => format!("{}.{qualifier}{}", &name[..dot], &name[dot..]),
        None => format!("{name}.{qualifier}"),
    };
    file.with_file_name(qualified)
}

fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Select the files to decode for `requested` under `environment`.
///
/// Requested files are visited last to first. Each contributes its base file
/// and its environment variant when they exist; when neither exists, its
/// `.example` variant is used instead. Missing files are reported through
/// `tracing` and otherwise ignored.
pub fn select_files<P: AsRef<Path>>(requested: &[P], environment: &str) -> Vec<PathBuf> {
    let mut selected = Vec::new();

    for file in requested.iter().rev() {
        let file = file.as_ref();
        let mut found = false;

        if is_regular_file(file) {
            found = true;
            selected.push(file.to_path_buf());
        }

        let env_file = qualified_path(file, environment);
        if is_regular_file(&env_file) {
            found = true;
            selected.push(env_file);
        }

        if found {
            continue;
        }

        let example = qualified_path(file, EXAMPLE_QUALIFIER);
        if is_regular_file(&example) {
            tracing::warn!(
                file = %file.display(),
                example = %example.display(),
                "Failed to find configuration, using example file"
            );
            selected.push(example);
        } else {
            tracing::warn!(file = %file.display(), "Failed to find configuration");
        }
    }

    selected
}
