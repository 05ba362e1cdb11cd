use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed token payload.
///
/// Both fields are required: a payload missing either one fails
/// deserialization and therefore fails verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user/entity identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject expiring at the given instant.
    ///
    /// # Arguments
    /// * `subject` - Identifier the token attests to
    /// * `expires_at` - Instant after which the token is no longer valid
    pub fn new(subject: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: subject.into(),
            exp: expires_at.timestamp(),
        }
    }
}
