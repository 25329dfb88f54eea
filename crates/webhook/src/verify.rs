//! Delivery signature verification.
//!
//! Implements the signing scheme used by the identity provider's webhook
//! dispatcher (the Svix scheme): the signed content is
//! `{id}.{timestamp}.{payload}`, the secret is base64 after an optional
//! `whsec_` prefix, and the signature header carries one or more
//! space-separated `v1,<base64>` entries. A delivery is accepted when any
//! entry matches, compared in constant time. Timestamps further than five
//! minutes from now are rejected to bound replay.

use crate::{WebhookError, WebhookResult};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SECRET_PREFIX: &str = "whsec_";
const VERSION_PREFIX: &str = "v1,";
const TOLERANCE_SECONDS: i64 = 5 * 60;

/// Verifies (and, for tests and local tooling, produces) delivery
/// signatures against a shared secret.
#[derive(Clone)]
pub struct WebhookVerifier {
    key: Vec<u8>,
}

impl WebhookVerifier {
    /// Creates a verifier from the configured shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidSecret`] if the secret (after the
    /// optional `whsec_` prefix) is not valid base64.
    pub fn new(secret: &str) -> WebhookResult<Self> {
        let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
        let key = BASE64
            .decode(encoded)
            .map_err(|_| WebhookError::InvalidSecret)?;
        Ok(Self { key })
    }

    /// Verifies a delivery against the exact header and payload bytes.
    ///
    /// `timestamp` and `signature` are the raw header values; `now` is
    /// injected so tolerance checks are testable.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::InvalidTimestamp`] if the timestamp header is
    ///   not an integer second count
    /// - [`WebhookError::TimestampOutOfTolerance`] if the delivery is
    ///   more than five minutes old or in the future
    /// - [`WebhookError::SignatureMismatch`] if no `v1` entry matches
    pub fn verify(
        &self,
        id: &str,
        timestamp: &str,
        signature: &str,
        payload: &[u8],
        now: DateTime<Utc>,
    ) -> WebhookResult<()> {
        let seconds: i64 = timestamp
            .parse()
            .map_err(|_| WebhookError::InvalidTimestamp)?;
        if (now.timestamp() - seconds).abs() > TOLERANCE_SECONDS {
            return Err(WebhookError::TimestampOutOfTolerance);
        }

        let mac = self.mac_for(id, timestamp, payload);
        for entry in signature.split(' ') {
            let Some(encoded) = entry.strip_prefix(VERSION_PREFIX) else {
                continue;
            };
            let Ok(candidate) = BASE64.decode(encoded) else {
                continue;
            };
            // Mac::verify_slice is the constant-time comparison.
            if mac.clone().verify_slice(&candidate).is_ok() {
                return Ok(());
            }
        }
        Err(WebhookError::SignatureMismatch)
    }

    /// Produces the `v1,<base64>` signature for a delivery.
    ///
    /// Used by tests and local tooling to fabricate valid deliveries; the
    /// production flow only verifies.
    pub fn sign(&self, id: &str, timestamp: i64, payload: &[u8]) -> String {
        let mac = self.mac_for(id, &timestamp.to_string(), payload);
        let tag = mac.finalize().into_bytes();
        format!("{VERSION_PREFIX}{}", BASE64.encode(tag))
    }

    fn mac_for(&self, id: &str, timestamp: &str, payload: &[u8]) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .expect("HMAC accepts keys of any length");
        mac.update(id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);
        mac
    }
}
