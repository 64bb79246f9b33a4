use thiserror::Error;

/// Errors raised by a messaging session while moving media around.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("media unavailable: {0}")]
    MediaUnavailable(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
