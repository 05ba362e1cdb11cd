use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed bearer tokens.
///
/// Tokens carry a [`Claims`] payload and are signed with an HMAC-SHA
/// algorithm. Expiry is checked against a caller-supplied clock, which
/// keeps verification deterministic under test.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service signing with HS256.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Create a token service with a named HMAC algorithm.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `algorithm` - One of `HS256`, `HS384` or `HS512`
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - The name is not a supported HMAC algorithm
    pub fn with_algorithm(secret: &[u8], algorithm: &str) -> Result<Self, TokenError> {
        let algorithm = match algorithm {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => return Err(TokenError::UnsupportedAlgorithm(other.to_string())),
        };

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        })
    }

    /// Issue a signed token for a subject.
    ///
    /// The token expires at `now + ttl`; it is accepted by [`verify`]
    /// strictly before that instant.
    ///
    /// # Arguments
    /// * `subject` - Identifier the token attests to
    /// * `now` - Current instant
    /// * `ttl` - How long the token stays valid
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    ///
    /// [`verify`]: TokenService::verify
    pub fn issue(
        &self,
        subject: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::new(subject, now + ttl);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its subject.
    ///
    /// A token is rejected when its signature does not match, its payload
    /// is malformed or missing claims, or its expiry has passed
    /// (`exp <= now`). All rejections surface as the same error so callers
    /// cannot distinguish why a token was refused.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    /// * `now` - Current instant
    ///
    /// # Errors
    /// * `InvalidToken` - The token was rejected
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the caller's clock, without leeway.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::InvalidToken)?;

        let claims = token_data.claims;
        if claims.exp <= now.timestamp() {
            return Err(TokenError::InvalidToken);
        }

        Ok(claims.sub)
    }
}
