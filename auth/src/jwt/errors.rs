use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Covers every rejection: bad signature, malformed payload,
    /// missing claims, and expiry. Callers are not told which.
    #[error("Invalid token")]
    InvalidToken,
}
