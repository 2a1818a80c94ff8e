use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an import run. All variants are terminal; the
/// only locally-recovered failure (an invalid disambiguation selection) never
/// surfaces here, the selection loop re-prompts instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no monsters found with that name")]
    NotFound,

    #[error("request to {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize sheet: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[source] io::Error),
}
