//! Operator gate
//!
//! A shared-secret confirmation for destructive actions (winner deletes).
//! The secret is held as a SHA-256 digest and compared in constant time.
//! This is a confirmation affordance for a single operator, not a security
//! boundary.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};
use std::sync::RwLock;
use subtle::ConstantTimeEq;

/// Secret used when no digest is configured.
const DEFAULT_SECRET: &str = "admin123";

/// Gate holding the operator secret digest.
pub struct OperatorGate {
    digest: RwLock<[u8; 32]>,
}

impl Default for OperatorGate {
    fn default() -> Self {
        Self::from_secret(DEFAULT_SECRET)
    }
}

impl OperatorGate {
    /// Build a gate from a plaintext secret.
    pub fn from_secret(secret: &str) -> Self {
        Self {
            digest: RwLock::new(digest_of(secret)),
        }
    }

    /// Build a gate from a base64-encoded SHA-256 digest, as stored in a
    /// configuration file.
    pub fn from_digest_b64(encoded: &str) -> Result<Self, String> {
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| format!("invalid base64 digest: {}", e))?;
        let digest: [u8; 32] = bytes
            .try_into()
            .map_err(|_| "operator secret digest must be 32 bytes".to_string())?;
        Ok(Self {
            digest: RwLock::new(digest),
        })
    }

    /// Constant-time check of a presented secret.
    pub fn verify(&self, secret: &str) -> bool {
        let presented = digest_of(secret);
        match self.digest.read() {
            Ok(stored) => presented.as_slice().ct_eq(stored.as_slice()).into(),
            Err(_) => false,
        }
    }

    /// Replace the secret at runtime.
    pub fn set_secret(&self, secret: &str) {
        if let Ok(mut stored) = self.digest.write() {
            *stored = digest_of(secret);
        }
    }

    /// Base64 digest form of the current secret, for writing into configs.
    pub fn digest_b64(&self) -> String {
        match self.digest.read() {
            Ok(stored) => BASE64.encode(*stored),
            Err(_) => String::new(),
        }
    }
}

/// Base64 SHA-256 digest of a secret, for the `hash-secret` CLI helper.
pub fn digest_b64_of(secret: &str) -> String {
    BASE64.encode(digest_of(secret))
}

fn digest_of(secret: &str) -> [u8; 32] {
    Sha256::digest(secret.as_bytes()).into()
}
