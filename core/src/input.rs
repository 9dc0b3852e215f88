//! Input loading. The whole file is read into one shared, immutable buffer
//! before any codec starts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::info;

use crate::utils::bytes_to_mb;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("input file unreadable: {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input file is empty: {}", .path.display())]
    Empty { path: PathBuf },
}

/// Read `path` fully. Missing, unreadable and empty files are errors.
pub fn load_input(path: impl AsRef<Path>) -> Result<Bytes, InputError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound { path: path.to_path_buf() },
        _ => InputError::Unreadable { path: path.to_path_buf(), source },
    })?;

    if data.is_empty() {
        return Err(InputError::Empty { path: path.to_path_buf() });
    }

    info!(
        target: "input",
        path = %path.display(),
        size_mb = bytes_to_mb(data.len() as u64),
        "input loaded"
    );
    Ok(Bytes::from(data))
}
