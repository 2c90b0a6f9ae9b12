use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sigprov_primitives::PubKey;
use sigprov_script::opcodes::{
    OP_CHECKSIG, OP_CHECKSIGVERIFY, OP_DUP, OP_EQUALVERIFY, OP_HASH160, OP_PUSHDATA1,
};
use sigprov_script::{extract_pubkey, p2pk_script};

fn pubkey(seed: u8, compressed: bool) -> PubKey {
    let secp = Secp256k1::signing_only();
    let secret = SecretKey::from_slice(&[seed; 32]).expect("secret");
    PubKey::from_secp(&PublicKey::from_secret_key(&secp, &secret), compressed)
}

#[test]
fn extracts_compressed_key() {
    let key = pubkey(1, true);
    let script = p2pk_script(&key);
    assert_eq!(script.len(), 35);
    assert_eq!(script[0], 33);
    assert_eq!(script[34], OP_CHECKSIG);
    assert_eq!(extract_pubkey(&script), Some(key));
}

#[test]
fn extracts_uncompressed_key() {
    let key = pubkey(2, false);
    let script = p2pk_script(&key);
    assert_eq!(script.len(), 67);
    assert_eq!(extract_pubkey(&script), Some(key));
}

fn hybrid(seed: u8, flip_parity: bool) -> PubKey {
    let mut bytes = pubkey(seed, false).as_bytes().to_vec();
    let odd = bytes[64] & 1 == 1;
    bytes[0] = if odd != flip_parity { 0x07 } else { 0x06 };
    PubKey::from_slice(&bytes).expect("hybrid size")
}

#[test]
fn extracts_hybrid_key() {
    for seed in [10u8, 11, 12, 13] {
        let key = hybrid(seed, false);
        assert!(matches!(key.as_bytes()[0], 0x06 | 0x07));
        let script = p2pk_script(&key);
        assert_eq!(script.len(), 67);
        assert_eq!(extract_pubkey(&script), Some(key));
    }
}

#[test]
fn rejects_hybrid_key_with_wrong_parity() {
    for seed in [10u8, 11, 12, 13] {
        let key = hybrid(seed, true);
        assert!(!key.is_fully_valid());
        assert_eq!(extract_pubkey(&p2pk_script(&key)), None);
    }
}

#[test]
fn accepts_pushdata1_encoded_key() {
    let key = pubkey(3, true);
    let mut script = vec![OP_PUSHDATA1, 33];
    script.extend_from_slice(key.as_bytes());
    script.push(OP_CHECKSIG);
    assert_eq!(extract_pubkey(&script), Some(key));
}

#[test]
fn rejects_trailing_opcode() {
    let mut script = p2pk_script(&pubkey(4, true));
    script.push(OP_CHECKSIG);
    assert_eq!(extract_pubkey(&script), None);
}

#[test]
fn rejects_trailing_truncated_push() {
    let mut script = p2pk_script(&pubkey(4, true));
    script.push(0x05);
    assert_eq!(extract_pubkey(&script), None);
}

#[test]
fn rejects_invalid_length_push() {
    let key = pubkey(5, true);
    let mut script = vec![32];
    script.extend_from_slice(&key.as_bytes()[..32]);
    script.push(OP_CHECKSIG);
    assert_eq!(extract_pubkey(&script), None);

    let mut script = vec![34];
    script.extend_from_slice(key.as_bytes());
    script.push(0x00);
    script.push(OP_CHECKSIG);
    assert_eq!(extract_pubkey(&script), None);
}

#[test]
fn rejects_off_curve_key() {
    let mut script = vec![33, 0x02];
    script.extend_from_slice(&[0xffu8; 32]);
    script.push(OP_CHECKSIG);
    assert_eq!(extract_pubkey(&script), None);
}

#[test]
fn rejects_wrong_second_opcode() {
    let key = pubkey(6, true);
    let mut script = vec![33];
    script.extend_from_slice(key.as_bytes());
    script.push(OP_CHECKSIGVERIFY);
    assert_eq!(extract_pubkey(&script), None);
}

#[test]
fn rejects_bare_push() {
    let key = pubkey(7, true);
    let mut script = vec![33];
    script.extend_from_slice(key.as_bytes());
    assert_eq!(extract_pubkey(&script), None);
}

#[test]
fn rejects_p2pkh() {
    let key = pubkey(8, true);
    let mut script = vec![OP_DUP, OP_HASH160, 0x14];
    script.extend_from_slice(key.id().as_bytes());
    script.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
    assert_eq!(extract_pubkey(&script), None);
}

#[test]
fn rejects_empty_script() {
    assert_eq!(extract_pubkey(&[]), None);
    assert_eq!(extract_pubkey(&[OP_CHECKSIG]), None);
}
