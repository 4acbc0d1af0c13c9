use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before an answer was given")]
    Closed,
}
