//! Recognition and construction of the pay-to-pubkey script form.

use sigprov_primitives::PubKey;

use crate::instruction::instructions;
use crate::opcodes::OP_CHECKSIG;

/// Matches exactly `<pubkey> OP_CHECKSIG`; any trailing byte rejects the script.
pub fn extract_pubkey(script: &[u8]) -> Option<PubKey> {
    let mut ops = instructions(script);

    let push = ops.next()?.ok()?;
    if !PubKey::valid_size(push.data) {
        return None;
    }
    let pubkey = PubKey::from_slice(push.data).ok()?;
    if !pubkey.is_fully_valid() {
        return None;
    }

    let check = ops.next()?.ok()?;
    if check.opcode != OP_CHECKSIG || ops.next().is_some() {
        return None;
    }
    Some(pubkey)
}

pub fn p2pk_script(pubkey: &PubKey) -> Vec<u8> {
    let key = pubkey.as_bytes();
    let mut script = Vec::with_capacity(key.len() + 2);
    // 33 and 65 both fit a direct push.
    script.push(key.len() as u8);
    script.extend_from_slice(key);
    script.push(OP_CHECKSIG);
    script
}
