//! Bundle error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a bundle run.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("asset root `{0}` does not exist or is not a directory")]
    MissingRoot(PathBuf),

    #[error("failed to walk `{0}`")]
    Walk(PathBuf, #[source] jwalk::Error),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("path `{0}` is not valid UTF-8")]
    NonUtf8Path(PathBuf),

    #[error("path `{path}` is not inside asset root `{root}`")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("identifier `{ident}` is derived from both `{first}` and `{second}`")]
    Collision {
        ident: String,
        first: String,
        second: String,
    },

    #[error("`{path}` maps to `{ident}`, which is reserved in {target} output")]
    Reserved {
        ident: String,
        path: String,
        target: &'static str,
    },

    #[error("failed to create output directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

pub type Result<T, E = BundleError> = std::result::Result<T, E>;
