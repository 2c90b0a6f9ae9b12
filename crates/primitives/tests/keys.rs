use sigprov_primitives::{hash160, sha256, KeyError, KeyId, PrivKey, PubKey, ScriptId};

fn hex(input: &str) -> Vec<u8> {
    assert!(input.len() % 2 == 0, "odd hex length");
    (0..input.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&input[i..i + 2], 16).expect("hex digit"))
        .collect()
}

fn secret_one() -> [u8; 32] {
    let mut secret = [0u8; 32];
    secret[31] = 1;
    secret
}

#[test]
fn hash_vectors() {
    assert_eq!(
        sha256(b"").to_vec(),
        hex("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
    assert_eq!(
        hash160(b"").to_vec(),
        hex("b472a266d0bd89c13706a4132ccfb16f7c3b9fcb")
    );
}

#[test]
fn compressed_key_id_matches_known_vector() {
    let key = PrivKey::from_secret(secret_one(), true).expect("secret");
    let pubkey = key.pubkey();
    assert!(pubkey.is_compressed());
    assert_eq!(
        pubkey.as_bytes().to_vec(),
        hex("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
    );
    assert_eq!(
        key.id().as_bytes().to_vec(),
        hex("751e76e8199196d454941c45d1b3a323f1433bd6")
    );
    assert_eq!(key.id().to_string(), "751e76e8199196d454941c45d1b3a323f1433bd6");
}

#[test]
fn uncompressed_key_id_matches_known_vector() {
    let key = PrivKey::from_secret(secret_one(), false).expect("secret");
    let pubkey = key.pubkey();
    assert!(!pubkey.is_compressed());
    assert_eq!(pubkey.as_bytes().len(), 65);
    assert_eq!(
        pubkey.id().as_bytes().to_vec(),
        hex("91b24bf9f5288532960ac687abb035127b1d28a5")
    );
}

#[test]
fn same_secret_different_encoding_gives_different_ids() {
    let compressed = PrivKey::from_secret([7u8; 32], true).expect("secret");
    let uncompressed = PrivKey::from_secret([7u8; 32], false).expect("secret");
    assert_ne!(compressed.id(), uncompressed.id());
    assert_ne!(compressed, uncompressed);
}

#[test]
fn pubkey_from_slice_checks_length_only() {
    let mut off_curve = [0xffu8; 33];
    off_curve[0] = 0x02;
    let pubkey = PubKey::from_slice(&off_curve).expect("valid size");
    assert!(!pubkey.is_fully_valid());
    assert_eq!(pubkey.to_secp().unwrap_err(), KeyError::InvalidPubKey);

    let err = PubKey::from_slice(&[0x02u8; 32]).unwrap_err();
    assert_eq!(err, KeyError::InvalidPubKeyLength(32));

    let real = PrivKey::from_secret([3u8; 32], true).expect("secret").pubkey();
    let parsed = PubKey::from_slice(real.as_bytes()).expect("parse");
    assert!(parsed.is_fully_valid());
    assert_eq!(parsed, real);
}

#[test]
fn script_id_is_hash160_of_bytes() {
    let script = [0x51u8, 0x87];
    assert_eq!(ScriptId::from_script(&script).0, hash160(&script));
    assert_eq!(KeyId::from_pubkey_bytes(&script).0, hash160(&script));
}

#[test]
fn debug_never_prints_secret() {
    let secret = [0xabu8; 32];
    let key = PrivKey::from_secret(secret, true).expect("secret");
    let rendered = format!("{key:?}");
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("abababab"));
    assert!(!rendered.contains("171, 171"));
    assert_eq!(key.secret_bytes(), &secret);
}
