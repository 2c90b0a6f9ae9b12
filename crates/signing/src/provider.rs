use std::sync::Arc;

use sigprov_primitives::{KeyId, KeyOriginInfo, PrivKey, PubKey, ScriptId};

/// Read access to key and script material. Lookups have no side effects.
pub trait SigningProvider {
    fn get_script(&self, _id: &ScriptId) -> Option<Vec<u8>> {
        None
    }

    fn get_pubkey(&self, _id: &KeyId) -> Option<PubKey> {
        None
    }

    fn get_key(&self, _id: &KeyId) -> Option<PrivKey> {
        None
    }

    fn get_key_origin(&self, _id: &KeyId) -> Option<KeyOriginInfo> {
        None
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DummySigningProvider;

impl SigningProvider for DummySigningProvider {}

pub static DUMMY_SIGNING_PROVIDER: DummySigningProvider = DummySigningProvider;

impl<T: SigningProvider + ?Sized> SigningProvider for &T {
    fn get_script(&self, id: &ScriptId) -> Option<Vec<u8>> {
        (**self).get_script(id)
    }

    fn get_pubkey(&self, id: &KeyId) -> Option<PubKey> {
        (**self).get_pubkey(id)
    }

    fn get_key(&self, id: &KeyId) -> Option<PrivKey> {
        (**self).get_key(id)
    }

    fn get_key_origin(&self, id: &KeyId) -> Option<KeyOriginInfo> {
        (**self).get_key_origin(id)
    }
}

impl<T: SigningProvider + ?Sized> SigningProvider for Box<T> {
    fn get_script(&self, id: &ScriptId) -> Option<Vec<u8>> {
        (**self).get_script(id)
    }

    fn get_pubkey(&self, id: &KeyId) -> Option<PubKey> {
        (**self).get_pubkey(id)
    }

    fn get_key(&self, id: &KeyId) -> Option<PrivKey> {
        (**self).get_key(id)
    }

    fn get_key_origin(&self, id: &KeyId) -> Option<KeyOriginInfo> {
        (**self).get_key_origin(id)
    }
}

impl<T: SigningProvider + ?Sized> SigningProvider for Arc<T> {
    fn get_script(&self, id: &ScriptId) -> Option<Vec<u8>> {
        (**self).get_script(id)
    }

    fn get_pubkey(&self, id: &KeyId) -> Option<PubKey> {
        (**self).get_pubkey(id)
    }

    fn get_key(&self, id: &KeyId) -> Option<PrivKey> {
        (**self).get_key(id)
    }

    fn get_key_origin(&self, id: &KeyId) -> Option<KeyOriginInfo> {
        (**self).get_key_origin(id)
    }
}
