//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - Signed, expiring bearer tokens with typed claims
//!
//! Each service defines its own authentication flow and composes these
//! implementations. This avoids coupling services through shared domain logic
//! while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//! use chrono::{Duration, Utc};
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//!
//! let now = Utc::now();
//! let token = tokens.issue("alice", now, Duration::minutes(1440)).unwrap();
//! let subject = tokens.verify(&token, now).unwrap();
//! assert_eq!(subject, "alice");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
