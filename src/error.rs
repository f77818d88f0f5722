//! Error types for the crate

use crate::search::{InvalidBoardError, ReconstructionError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse board file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid board in {}: {source}", .path.display())]
    InvalidBoardFile {
        path: PathBuf,
        #[source]
        source: InvalidBoardError,
    },

    #[error("invalid board: {0}")]
    InvalidBoard(#[from] InvalidBoardError),

    #[error("plan is invalid: {0}")]
    InvalidPlan(String),

    #[error("failed to reconstruct the solution: {0}")]
    Reconstruction(#[from] ReconstructionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
