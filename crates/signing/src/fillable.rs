//! Mutable keystore that can be filled with keys, redeem scripts and watch-only scripts.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

use sigprov_consensus::{within_element_size, MAX_SCRIPT_ELEMENT_SIZE};
use sigprov_log::{log_debug, log_error};
use sigprov_primitives::{KeyId, PrivKey, PubKey, ScriptId};
use sigprov_script::extract_pubkey;

use crate::error::ProviderError;
use crate::provider::SigningProvider;

#[derive(Default)]
struct KeyStore {
    keys: BTreeMap<KeyId, PrivKey>,
    scripts: BTreeMap<ScriptId, Vec<u8>>,
    watch_keys: BTreeMap<KeyId, PubKey>,
    watch_only: BTreeSet<Vec<u8>>,
}

impl KeyStore {
    // No script forms are derived yet.
    fn implicitly_learn_related_key_scripts(&mut self, pubkey: &PubKey) {
        let id = pubkey.id();
        assert!(
            self.keys.contains_key(&id) || self.watch_keys.contains_key(&id),
            "implicit script learning for unknown key {id}"
        );
    }
}

/// Thread-safe keystore. Each call is atomic; call sequences are not.
#[derive(Default)]
pub struct FillableSigningProvider {
    store: Mutex<KeyStore>,
}

impl FillableSigningProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, KeyStore> {
        self.store.lock().expect("signing provider lock")
    }

    // The key/pubkey pairing is not checked.
    pub fn add_key_pubkey(&self, key: PrivKey, pubkey: &PubKey) -> Result<(), ProviderError> {
        let mut store = self.lock();
        store.keys.insert(pubkey.id(), key);
        store.implicitly_learn_related_key_scripts(pubkey);
        Ok(())
    }

    pub fn add_key(&self, key: PrivKey) -> Result<(), ProviderError> {
        let pubkey = key.pubkey();
        self.add_key_pubkey(key, &pubkey)
    }

    pub fn have_key(&self, id: &KeyId) -> bool {
        self.lock().keys.contains_key(id)
    }

    pub fn get_keys(&self) -> BTreeSet<KeyId> {
        self.lock().keys.keys().copied().collect()
    }

    pub fn key_count(&self) -> usize {
        self.lock().keys.len()
    }

    pub fn add_script(&self, redeem_script: &[u8]) -> Result<(), ProviderError> {
        if !within_element_size(redeem_script.len()) {
            log_error!(
                "add_script: redeem scripts > {} bytes are invalid (got {})",
                MAX_SCRIPT_ELEMENT_SIZE,
                redeem_script.len()
            );
            return Err(ProviderError::ScriptTooLarge {
                size: redeem_script.len(),
                max: MAX_SCRIPT_ELEMENT_SIZE,
            });
        }

        let id = ScriptId::from_script(redeem_script);
        self.lock().scripts.insert(id, redeem_script.to_vec());
        Ok(())
    }

    pub fn have_script(&self, id: &ScriptId) -> bool {
        self.lock().scripts.contains_key(id)
    }

    pub fn get_scripts(&self) -> BTreeSet<ScriptId> {
        self.lock().scripts.keys().copied().collect()
    }

    pub fn script_count(&self) -> usize {
        self.lock().scripts.len()
    }

    pub fn add_watch_only(&self, script: &[u8]) -> Result<(), ProviderError> {
        let pubkey = extract_pubkey(script);
        {
            let mut store = self.lock();
            store.watch_only.insert(script.to_vec());
            if let Some(pubkey) = &pubkey {
                store.watch_keys.insert(pubkey.id(), pubkey.clone());
                store.implicitly_learn_related_key_scripts(pubkey);
            }
        }
        if let Some(pubkey) = pubkey {
            log_debug!("watching pubkey {}", pubkey.id());
        }
        Ok(())
    }

    // Scripts learned from the extracted key stay in place.
    pub fn remove_watch_only(&self, script: &[u8]) -> Result<(), ProviderError> {
        let id = extract_pubkey(script).map(|pubkey| pubkey.id());
        {
            let mut store = self.lock();
            store.watch_only.remove(script);
            if let Some(id) = &id {
                store.watch_keys.remove(id);
            }
        }
        if let Some(id) = id {
            log_debug!("no longer watching pubkey {id}");
        }
        Ok(())
    }

    pub fn have_watch_only_script(&self, script: &[u8]) -> bool {
        self.lock().watch_only.contains(script)
    }

    pub fn have_watch_only(&self) -> bool {
        !self.lock().watch_only.is_empty()
    }
}

impl SigningProvider for FillableSigningProvider {
    fn get_script(&self, id: &ScriptId) -> Option<Vec<u8>> {
        self.lock().scripts.get(id).cloned()
    }

    fn get_pubkey(&self, id: &KeyId) -> Option<PubKey> {
        let store = self.lock();
        if let Some(key) = store.keys.get(id) {
            return Some(key.pubkey());
        }
        store.watch_keys.get(id).cloned()
    }

    fn get_key(&self, id: &KeyId) -> Option<PrivKey> {
        self.lock().keys.get(id).cloned()
    }
}
