use std::io;
use std::path::PathBuf;
use thiserror::Error;

use regex_validator::PromptError;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("file i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("{} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("{path}:{line}: {reason}", path = .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

pub type RecordResult<T> = Result<T, RecordError>;
