//! Plain map-backed provider and the merge rule for combining two of them.

use std::collections::BTreeMap;

use sigprov_primitives::{KeyId, KeyOriginInfo, PrivKey, PubKey, ScriptId};

use crate::provider::SigningProvider;

#[derive(Clone, Debug, Default)]
pub struct FlatSigningProvider {
    pub scripts: BTreeMap<ScriptId, Vec<u8>>,
    pub pubkeys: BTreeMap<KeyId, PubKey>,
    pub origins: BTreeMap<KeyId, (PubKey, KeyOriginInfo)>,
    pub keys: BTreeMap<KeyId, PrivKey>,
}

impl FlatSigningProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
            && self.pubkeys.is_empty()
            && self.origins.is_empty()
            && self.keys.is_empty()
    }

    pub fn merge_from(&mut self, other: &FlatSigningProvider) {
        insert_missing(&mut self.scripts, &other.scripts);
        insert_missing(&mut self.pubkeys, &other.pubkeys);
        insert_missing(&mut self.origins, &other.origins);
        insert_missing(&mut self.keys, &other.keys);
    }
}

impl SigningProvider for FlatSigningProvider {
    fn get_script(&self, id: &ScriptId) -> Option<Vec<u8>> {
        self.scripts.get(id).cloned()
    }

    fn get_pubkey(&self, id: &KeyId) -> Option<PubKey> {
        self.pubkeys.get(id).cloned()
    }

    fn get_key(&self, id: &KeyId) -> Option<PrivKey> {
        self.keys.get(id).cloned()
    }

    fn get_key_origin(&self, id: &KeyId) -> Option<KeyOriginInfo> {
        self.origins.get(id).map(|(_, origin)| origin.clone())
    }
}

/// Union of `a` and `b`. Where both hold an entry for the same identifier, `a`'s wins.
pub fn merge(a: &FlatSigningProvider, b: &FlatSigningProvider) -> FlatSigningProvider {
    let mut merged = a.clone();
    merged.merge_from(b);
    merged
}

fn insert_missing<K, V>(into: &mut BTreeMap<K, V>, from: &BTreeMap<K, V>)
where
    K: Ord + Clone,
    V: Clone,
{
    for (key, value) in from {
        into.entry(key.clone()).or_insert_with(|| value.clone());
    }
}
