/// The libp2p private-key protobuf envelope.
///
/// Wire schema (stable, defined by libp2p):
///
/// ```text
/// message PrivateKey {
///   required KeyType Type = 1;
///   required bytes  Data = 2;
/// }
/// ```
///
/// For RSA the Data field is the DER-encoded PKCS#1 private key.
use prost::Message;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::RsaPrivateKey;

use crate::error::{KeychainError, Result};

/// Key algorithms defined by the libp2p envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, prost::Enumeration)]
#[repr(i32)]
pub enum PeerKeyType {
    Rsa = 0,
    Ed25519 = 1,
    Secp256k1 = 2,
    Ecdsa = 3,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PrivateKeyEnvelope {
    #[prost(enumeration = "PeerKeyType", tag = "1")]
    pub key_type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

/// Decode a marshalled peer private key to an RSA private key.
///
/// Malformed envelopes and non-RSA algorithms are reported as errors, never
/// ignored.
pub fn unmarshal_private_key(bytes: &[u8]) -> Result<RsaPrivateKey> {
    let envelope = PrivateKeyEnvelope::decode(bytes)
        .map_err(|e| KeychainError::Crypto(format!("cannot unmarshal peer private key: {e}")))?;

    match PeerKeyType::try_from(envelope.key_type) {
        Ok(PeerKeyType::Rsa) => {}
        Ok(other) => {
            return Err(KeychainError::Crypto(format!(
                "unsupported peer key type {other:?}"
            )))
        }
        Err(_) => {
            return Err(KeychainError::Crypto(format!(
                "unknown peer key type {}",
                envelope.key_type
            )))
        }
    }

    RsaPrivateKey::from_pkcs1_der(&envelope.data)
        .map_err(|e| KeychainError::Crypto(format!("peer key body is not PKCS#1 DER: {e}")))
}

/// Encode an RSA private key into the libp2p envelope.
pub fn marshal_private_key(key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let der = key
        .to_pkcs1_der()
        .map_err(|e| KeychainError::Crypto(format!("PKCS#1 encoding failed: {e}")))?;

    let envelope = PrivateKeyEnvelope {
        key_type: PeerKeyType::Rsa as i32,
        data: der.as_bytes().to_vec(),
    };
    Ok(envelope.encode_to_vec())
}
