//! Key material and the identifiers derived from it.

use std::fmt;
use std::sync::OnceLock;

use secp256k1::{Secp256k1, SecretKey, SignOnly};
use zeroize::Zeroize;

use crate::hash::{hash160, write_hex, Hash160};

pub const COMPRESSED_PUBKEY_SIZE: usize = 33;
pub const UNCOMPRESSED_PUBKEY_SIZE: usize = 65;
pub const SECRET_KEY_SIZE: usize = 32;

#[derive(Debug, Eq, PartialEq)]
pub enum KeyError {
    InvalidSecretKey,
    InvalidPubKeyLength(usize),
    InvalidPubKey,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::InvalidSecretKey => write!(f, "invalid secret key"),
            KeyError::InvalidPubKeyLength(len) => {
                write!(f, "invalid public key length {len}")
            }
            KeyError::InvalidPubKey => write!(f, "invalid public key"),
        }
    }
}

impl std::error::Error for KeyError {}

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct KeyId(pub Hash160);

impl KeyId {
    pub fn from_pubkey_bytes(bytes: &[u8]) -> Self {
        Self(hash160(bytes))
    }

    pub fn is_null(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }

    pub fn as_bytes(&self) -> &Hash160 {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({self})")
    }
}

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ScriptId(pub Hash160);

impl ScriptId {
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }

    pub fn as_bytes(&self) -> &Hash160 {
        &self.0
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl fmt::Debug for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptId({self})")
    }
}

/// Serialized public key. Construction checks the length against the header byte only.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PubKey(Vec<u8>);

impl PubKey {
    pub fn len_for_header(header: u8) -> usize {
        match header {
            0x02 | 0x03 => COMPRESSED_PUBKEY_SIZE,
            0x04 | 0x06 | 0x07 => UNCOMPRESSED_PUBKEY_SIZE,
            _ => 0,
        }
    }

    pub fn valid_size(bytes: &[u8]) -> bool {
        match bytes.first() {
            Some(header) => Self::len_for_header(*header) == bytes.len(),
            None => false,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        if !Self::valid_size(bytes) {
            return Err(KeyError::InvalidPubKeyLength(bytes.len()));
        }
        Ok(Self(bytes.to_vec()))
    }

    pub fn from_secp(pubkey: &secp256k1::PublicKey, compressed: bool) -> Self {
        if compressed {
            Self(pubkey.serialize().to_vec())
        } else {
            Self(pubkey.serialize_uncompressed().to_vec())
        }
    }

    pub fn is_fully_valid(&self) -> bool {
        self.to_secp().is_ok()
    }

    pub fn to_secp(&self) -> Result<secp256k1::PublicKey, KeyError> {
        secp256k1::PublicKey::from_slice(&self.0).map_err(|_| KeyError::InvalidPubKey)
    }

    pub fn is_compressed(&self) -> bool {
        self.0.len() == COMPRESSED_PUBKEY_SIZE
    }

    pub fn id(&self) -> KeyId {
        KeyId::from_pubkey_bytes(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for PubKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl fmt::Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubKey({self})")
    }
}

#[derive(Clone, Eq, PartialEq)]
pub struct PrivKey {
    secret: [u8; SECRET_KEY_SIZE],
    pubkey: PubKey,
}

impl PrivKey {
    pub fn from_secret(secret: [u8; SECRET_KEY_SIZE], compressed: bool) -> Result<Self, KeyError> {
        let secret_key = SecretKey::from_slice(&secret).map_err(|_| KeyError::InvalidSecretKey)?;
        let pubkey = secp256k1::PublicKey::from_secret_key(secp(), &secret_key);
        Ok(Self {
            secret,
            pubkey: PubKey::from_secp(&pubkey, compressed),
        })
    }

    pub fn from_slice(bytes: &[u8], compressed: bool) -> Result<Self, KeyError> {
        let secret: [u8; SECRET_KEY_SIZE] =
            bytes.try_into().map_err(|_| KeyError::InvalidSecretKey)?;
        Self::from_secret(secret, compressed)
    }

    pub fn secret_bytes(&self) -> &[u8; SECRET_KEY_SIZE] {
        &self.secret
    }

    pub fn is_compressed(&self) -> bool {
        self.pubkey.is_compressed()
    }

    pub fn pubkey(&self) -> PubKey {
        self.pubkey.clone()
    }

    pub fn id(&self) -> KeyId {
        self.pubkey.id()
    }
}

impl Drop for PrivKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl fmt::Debug for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivKey")
            .field("pubkey", &self.pubkey)
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn secp() -> &'static Secp256k1<SignOnly> {
    static SECP: OnceLock<Secp256k1<SignOnly>> = OnceLock::new();
    SECP.get_or_init(Secp256k1::signing_only)
}
