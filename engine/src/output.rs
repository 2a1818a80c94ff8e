use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ImportError;
use crate::sheet::Sheet;

/// Write one sheet to `{dir}/{name}.json`, creating the directory on first
/// use and overwriting any previous export of the same monster. The document
/// is serialized in full before anything touches the filesystem, so a failed
/// run never leaves a partial file.
pub fn write_sheet(dir: &Path, name: &str, sheet: &Sheet) -> Result<PathBuf, ImportError> {
    fs::create_dir_all(dir).map_err(|source| ImportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let body = serde_json::to_string_pretty(sheet)?;
    let path = dir.join(format!("{name}.json"));
    fs::write(&path, body).map_err(|source| ImportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "sheet written");
    Ok(path)
}
