//! Admin credential verification.

use anyhow::{Context, anyhow};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Checks presented admin tokens against the configured one.
///
/// Both sides are run through HMAC-SHA256 under a per-process random key and
/// the tags are compared with [`Mac::verify_slice`], which is constant-time.
/// The configured token itself is not kept after construction.
pub struct AuthService {
    key: [u8; 32],
    expected_tag: Vec<u8>,
}

impl AuthService {
    /// Creates a service that accepts exactly `admin_token`.
    ///
    /// # Errors
    ///
    /// Fails if the token is empty or the OS random source is unavailable.
    pub fn new(admin_token: &str) -> anyhow::Result<Self> {
        if admin_token.is_empty() {
            return Err(anyhow!("Admin token must not be empty"));
        }

        let mut key = [0u8; 32];
        getrandom::fill(&mut key).map_err(|e| anyhow!("Failed to generate HMAC key: {e}"))?;

        let mut mac = HmacSha256::new_from_slice(&key).context("Invalid HMAC key")?;
        mac.update(admin_token.as_bytes());
        let expected_tag = mac.finalize().into_bytes().to_vec();

        Ok(Self { key, expected_tag })
    }

    /// Verifies a presented token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let unauthorized = || {
            AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid admin token" }))
        };

        let mut mac = HmacSha256::new_from_slice(&self.key).map_err(|_| unauthorized())?;
        mac.update(token.as_bytes());

        mac.verify_slice(&self.expected_tag)
            .map_err(|_| unauthorized())
    }
}
