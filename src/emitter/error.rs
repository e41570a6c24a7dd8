use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to open file: {0}")]
    Open(io::Error),

    #[error("Failed to read file metadata: {0}")]
    Stat(io::Error),

    #[error("Failed to map file into memory: {0}")]
    Map(io::Error),

    #[error("Failed to write to output: {0}")]
    Write(io::Error),
}
