use sigprov_primitives::{Destination, KeyId};

/// Non-key-hash destinations map to the null [`KeyId`].
pub fn get_key_for_destination(dest: &Destination) -> KeyId {
    match dest {
        Destination::PkHash(hash) => KeyId::from(*hash),
        Destination::NoDestination | Destination::ScriptHash(_) => KeyId::default(),
    }
}
