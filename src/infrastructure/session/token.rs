//! Session token generation
//!
//! Tokens are random, URL-safe and handed to the caller exactly once. The
//! session store only ever sees the SHA-256 digest of a token.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::domain::session::SessionToken;

/// A freshly issued token together with its store key
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Token returned to the caller
    pub token: SessionToken,
    /// Digest under which the session is stored
    pub store_key: String,
}

/// Generator for session tokens
#[derive(Debug, Clone)]
pub struct SessionTokenGenerator {
    /// Prefix for all generated tokens
    prefix: String,
    /// Number of random bytes to generate
    token_bytes: usize,
}

impl SessionTokenGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            token_bytes: 32,
        }
    }

    /// Generate a new token
    pub fn issue(&self) -> IssuedToken {
        let mut random_bytes = vec![0u8; self.token_bytes];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        let token = format!("{}{}", self.prefix, URL_SAFE_NO_PAD.encode(&random_bytes));
        let store_key = digest(&token);

        IssuedToken {
            token: SessionToken::new(token),
            store_key,
        }
    }

    /// Store key for a token presented by a caller
    pub fn store_key(&self, token: &SessionToken) -> String {
        digest(token.as_str())
    }
}

impl Default for SessionTokenGenerator {
    fn default() -> Self {
        Self::new("rs_")
    }
}

/// SHA-256 digest of `value`, base64 encoded
pub(crate) fn digest(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("sha256${}", URL_SAFE_NO_PAD.encode(hasher.finalize()))
}

/// Constant-time string comparison to prevent timing attacks
pub(crate) fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
