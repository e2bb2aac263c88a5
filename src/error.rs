use thiserror::Error;

/// Failures talking to the checker backend.
///
/// Everything here is a transport-class failure from the user's point of
/// view, except `Status`, which only the auxiliary endpoints produce.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response body is null")]
    NullBody,
    #[error("server returned HTTP {0}")]
    Status(u16),
}
