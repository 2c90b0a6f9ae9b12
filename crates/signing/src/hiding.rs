use sigprov_primitives::{KeyId, KeyOriginInfo, PrivKey, PubKey, ScriptId};

use crate::provider::SigningProvider;

/// Read-time filter that can hide secret keys and key origins of another provider.
#[derive(Clone, Copy)]
pub struct HidingSigningProvider<'a> {
    provider: &'a dyn SigningProvider,
    hide_secret: bool,
    hide_origin: bool,
}

impl<'a> HidingSigningProvider<'a> {
    pub fn new(provider: &'a dyn SigningProvider, hide_secret: bool, hide_origin: bool) -> Self {
        Self {
            provider,
            hide_secret,
            hide_origin,
        }
    }

    pub fn hides_secret(&self) -> bool {
        self.hide_secret
    }

    pub fn hides_origin(&self) -> bool {
        self.hide_origin
    }
}

impl std::fmt::Debug for HidingSigningProvider<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HidingSigningProvider")
            .field("hide_secret", &self.hide_secret)
            .field("hide_origin", &self.hide_origin)
            .finish_non_exhaustive()
    }
}

impl SigningProvider for HidingSigningProvider<'_> {
    fn get_script(&self, id: &ScriptId) -> Option<Vec<u8>> {
        self.provider.get_script(id)
    }

    fn get_pubkey(&self, id: &KeyId) -> Option<PubKey> {
        self.provider.get_pubkey(id)
    }

    fn get_key(&self, id: &KeyId) -> Option<PrivKey> {
        if self.hide_secret {
            return None;
        }
        self.provider.get_key(id)
    }

    fn get_key_origin(&self, id: &KeyId) -> Option<KeyOriginInfo> {
        if self.hide_origin {
            return None;
        }
        self.provider.get_key_origin(id)
    }
}
