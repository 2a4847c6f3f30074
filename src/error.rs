use thiserror::Error;

/// Error type for all keychain operations.
///
/// The display strings are part of the observable contract: callers (and the
/// test suite) match on them, so they must not drift.
#[derive(Error, Debug)]
pub enum KeychainError {
    #[error("Invalid key name '{0}'")]
    InvalidName(String),

    #[error("Key '{0}' already exists")]
    AlreadyExists(String),

    #[error("Key '{name}' does not exist. {detail}")]
    NotFound { name: String, detail: String },

    #[error("Invalid key type '{0}'")]
    InvalidKeyType(String),

    #[error("Invalid RSA key size {0}")]
    InvalidKeySize(usize),

    /// Construction-time configuration failure (NIST parameter floors).
    /// Raised synchronously from `Keychain::new`, never delayed.
    #[error("{0}")]
    InvalidParameter(String),

    #[error("Cannot read the key, most likely the password is wrong")]
    WrongPassword,

    #[error("{0} is required")]
    MissingInput(&'static str),

    #[error("Crypto failure: {0}")]
    Crypto(String),

    #[error("Datastore failure: {0}")]
    Datastore(String),
}

pub type Result<T> = std::result::Result<T, KeychainError>;
