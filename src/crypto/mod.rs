/// Cryptographic building blocks for the keychain.
///
/// - `dek`: turns the user passphrase into the data-encrypting key
/// - `rsa`: key generation and the encrypted-PKCS#8 PEM codec
/// - `key_id`: stable printable identifiers (libp2p PeerID convention)
/// - `peer`: the libp2p private-key protobuf envelope
/// - `sensitive`: zeroize-on-drop containers for secret material
pub mod dek;
pub mod key_id;
pub mod peer;
pub mod rsa;
pub mod sensitive;
