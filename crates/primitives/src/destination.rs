//! Output destinations a wallet can pay to.

use std::fmt;

use crate::hash::{hash160, write_hex, Hash160};
use crate::keys::{KeyId, PubKey, ScriptId};

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PkHash(pub Hash160);

impl PkHash {
    pub fn from_pubkey(pubkey: &PubKey) -> Self {
        Self(hash160(pubkey.as_bytes()))
    }
}

impl From<KeyId> for PkHash {
    fn from(id: KeyId) -> Self {
        Self(id.0)
    }
}

impl From<PkHash> for KeyId {
    fn from(hash: PkHash) -> Self {
        KeyId(hash.0)
    }
}

impl fmt::Debug for PkHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PkHash(")?;
        write_hex(f, &self.0)?;
        f.write_str(")")
    }
}

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ScriptHash(pub Hash160);

impl ScriptHash {
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }
}

impl From<ScriptId> for ScriptHash {
    fn from(id: ScriptId) -> Self {
        Self(id.0)
    }
}

impl From<ScriptHash> for ScriptId {
    fn from(hash: ScriptHash) -> Self {
        ScriptId(hash.0)
    }
}

impl fmt::Debug for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScriptHash(")?;
        write_hex(f, &self.0)?;
        f.write_str(")")
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Destination {
    #[default]
    NoDestination,
    PkHash(PkHash),
    ScriptHash(ScriptHash),
}

impl Destination {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Destination::NoDestination)
    }
}

impl From<PkHash> for Destination {
    fn from(hash: PkHash) -> Self {
        Destination::PkHash(hash)
    }
}

impl From<ScriptHash> for Destination {
    fn from(hash: ScriptHash) -> Self {
        Destination::ScriptHash(hash)
    }
}
