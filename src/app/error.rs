use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("no quotes in the result set")]
    EmptyResult,

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl QuillError {
    /// True when the user interrupted a prompt (Ctrl-C / Esc). Interrupts
    /// take the graceful-exit path instead of being reported as failures.
    pub fn is_interrupt(&self) -> bool {
        match self {
            QuillError::Prompt(dialoguer::Error::IO(e)) => {
                e.kind() == std::io::ErrorKind::Interrupted
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuillError>;
