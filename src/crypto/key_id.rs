/// Stable public identifiers for keys.
///
/// The id of a key is the base58 multihash of the SHA-256 of the DER
/// encoding of its SubjectPublicKeyInfo. For RSA keys this matches the
/// libp2p PeerID derivation, so an imported peer key keeps the identifier
/// its network already knows it by.
use multihash::Multihash;
use pkcs8::EncodePublicKey;
use rsa::RsaPrivateKey;
use sha2::{Digest, Sha256};

use crate::error::{KeychainError, Result};

/// Multihash code for SHA2-256.
const SHA2_256_CODE: u64 = 0x12;

/// Derive the printable id for a private key. Deterministic: independent of
/// storage, name, and the keychain's passphrase.
pub fn key_id(key: &RsaPrivateKey) -> Result<String> {
    let spki = key
        .to_public_key()
        .to_public_key_der()
        .map_err(|e| KeychainError::Crypto(format!("SPKI encoding failed: {e}")))?;

    let digest = Sha256::digest(spki.as_bytes());
    let multihash = Multihash::<64>::wrap(SHA2_256_CODE, digest.as_slice())
        .map_err(|e| KeychainError::Crypto(format!("multihash wrapping failed: {e}")))?;

    Ok(bs58::encode(multihash.to_bytes()).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_util::test_key;

    #[test]
    fn test_id_is_deterministic() {
        let key = test_key();
        assert_eq!(key_id(key).unwrap(), key_id(key).unwrap());
    }

    #[test]
    fn test_id_is_base58_multihash_of_sha256() {
        // A SHA2-256 multihash starts with bytes 0x12 0x20, which render as
        // "Qm" in base58.
        let id = key_id(test_key()).unwrap();
        assert!(id.starts_with("Qm"), "unexpected id prefix: {id}");
        assert_eq!(id.len(), 46);
    }

    #[test]
    fn test_different_keys_have_different_ids() {
        let other = crate::crypto::rsa::generate(2048).unwrap();
        assert_ne!(key_id(test_key()).unwrap(), key_id(&other).unwrap());
    }
}
