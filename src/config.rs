/// Keychain configuration and NIST SP 800-132 parameter floors.
///
/// The DEK parameters are merged once at construction: callers start from
/// `DekConfig::default()` and override what they need. The defaults carry a
/// placeholder salt that MUST be overridden before real use.
use serde::{Deserialize, Serialize};

use crate::error::{KeychainError, Result};

/// Minimum passphrase length in characters.
pub const MIN_PASSPHRASE_LEN: usize = 20;
/// Minimum derived-key length in bytes (112 bits, NIST SP 800-131A).
pub const MIN_DEK_KEY_LENGTH: usize = 14;
/// Minimum PBKDF2 salt length in bytes (128 bits, NIST SP 800-132).
pub const MIN_SALT_LEN: usize = 16;
/// Minimum PBKDF2 iteration count (NIST SP 800-132).
pub const MIN_ITERATION_COUNT: u32 = 1000;

pub const DEFAULT_DEK_KEY_LENGTH: usize = 64;
pub const DEFAULT_ITERATION_COUNT: u32 = 10_000;
/// Placeholder salt. Callers MUST provide their own.
pub const DEFAULT_SALT: &str = "you should override this value or your data will not be secure";

/// PRF used by the PBKDF2 derivation of the DEK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DekHash {
    #[serde(rename = "sha2-256")]
    Sha256,
    #[default]
    #[serde(rename = "sha2-512")]
    Sha512,
}

/// Parameters for deriving the data-encrypting key from the passphrase.
#[derive(Clone, Serialize, Deserialize)]
pub struct DekConfig {
    /// Length of the derived key in bytes.
    pub key_length: usize,
    /// PBKDF2 iteration count.
    pub iteration_count: u32,
    /// PBKDF2 salt. The default is a placeholder; override it.
    pub salt: String,
    /// PRF for the derivation.
    pub hash: DekHash,
}

impl Default for DekConfig {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_DEK_KEY_LENGTH,
            iteration_count: DEFAULT_ITERATION_COUNT,
            salt: DEFAULT_SALT.to_string(),
            hash: DekHash::default(),
        }
    }
}

/// Configuration for a [`Keychain`](crate::keychain::Keychain).
///
/// Immutable once the keychain is constructed. Does not implement `Debug`,
/// keeping the passphrase out of log output.
#[derive(Clone, Serialize, Deserialize)]
pub struct KeychainConfig {
    pub pass_phrase: String,
    pub dek: DekConfig,
}

impl KeychainConfig {
    /// Configuration with the given passphrase and default DEK parameters.
    pub fn new(pass_phrase: impl Into<String>) -> Self {
        Self {
            pass_phrase: pass_phrase.into(),
            dek: DekConfig::default(),
        }
    }

    /// Enforce the parameter floors. Called synchronously by
    /// `Keychain::new`; these failures are never routed through the
    /// error-delay path.
    pub fn validate(&self) -> Result<()> {
        if self.pass_phrase.len() < MIN_PASSPHRASE_LEN {
            return Err(KeychainError::InvalidParameter(format!(
                "passPhrase must be least {MIN_PASSPHRASE_LEN} characters"
            )));
        }
        if self.dek.key_length < MIN_DEK_KEY_LENGTH {
            return Err(KeychainError::InvalidParameter(format!(
                "dek.keyLength must be least {MIN_DEK_KEY_LENGTH} bytes"
            )));
        }
        if self.dek.salt.len() < MIN_SALT_LEN {
            return Err(KeychainError::InvalidParameter(format!(
                "dek.salt must be least {MIN_SALT_LEN} bytes"
            )));
        }
        if self.dek.iteration_count < MIN_ITERATION_COUNT {
            return Err(KeychainError::InvalidParameter(format!(
                "dek.iterationCount must be least {MIN_ITERATION_COUNT}"
            )));
        }
        Ok(())
    }
}
