use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("output file name '{name}' must be a single plain file name")]
    InvalidFileName { name: String },

    #[error("header and implementation would both be written to '{name}'")]
    DuplicateFileName { name: String },

    #[error("cannot open '{}' for writing: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
