//! Key, script identifier and destination types shared by the signing crates.

pub mod destination;
pub mod hash;
pub mod keys;
pub mod origin;

pub use destination::{Destination, PkHash, ScriptHash};
pub use hash::{hash160, sha256, Hash160, Hash256};
pub use keys::{KeyError, KeyId, PrivKey, PubKey, ScriptId};
pub use origin::{KeyOriginInfo, BIP32_HARDENED};
