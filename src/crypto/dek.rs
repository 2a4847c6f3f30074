/// PBKDF2 derivation of the data-encrypting key (DEK).
///
/// The DEK is the symmetric secret that protects every stored private key.
/// It is rendered as lowercase hex because the PKCS#8 encryption downstream
/// consumes it as a passphrase string, not raw bytes; the hex form keeps it
/// printable and interoperable across implementations.
use hmac::Hmac;
use sha2::{Sha256, Sha512};
use zeroize::Zeroize;

use crate::config::{DekConfig, DekHash};
use crate::crypto::sensitive::SensitiveString;
use crate::error::{KeychainError, Result};

/// Derive the DEK from the passphrase under the given parameters.
///
/// Parameter floors are enforced by `KeychainConfig::validate` before this
/// is called; the derivation itself accepts whatever it is handed.
pub fn derive(pass_phrase: &str, dek: &DekConfig) -> Result<SensitiveString> {
    let mut okm = vec![0u8; dek.key_length];

    let derived = match dek.hash {
        DekHash::Sha256 => pbkdf2::pbkdf2::<Hmac<Sha256>>(
            pass_phrase.as_bytes(),
            dek.salt.as_bytes(),
            dek.iteration_count,
            &mut okm,
        ),
        DekHash::Sha512 => pbkdf2::pbkdf2::<Hmac<Sha512>>(
            pass_phrase.as_bytes(),
            dek.salt.as_bytes(),
            dek.iteration_count,
            &mut okm,
        ),
    };
    derived.map_err(|e| KeychainError::Crypto(format!("DEK derivation failed: {e}")))?;

    let rendered = hex::encode(&okm);
    okm.zeroize();

    Ok(SensitiveString::new(rendered))
}
