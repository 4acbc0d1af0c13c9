use std::io;
use std::path::PathBuf;

use regex_validator::PromptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode order: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{0} has no base options and no toppings")]
    EmptyMenu(PathBuf),

    #[error("You cannot submit an empty order.")]
    EmptyOrder,

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

pub type OrderResult<T> = Result<T, OrderError>;
