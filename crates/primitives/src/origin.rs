use std::fmt;

pub const BIP32_HARDENED: u32 = 0x8000_0000;

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct KeyOriginInfo {
    pub fingerprint: [u8; 4],
    pub path: Vec<u32>,
}

impl KeyOriginInfo {
    pub fn new(fingerprint: [u8; 4], path: Vec<u32>) -> Self {
        Self { fingerprint, path }
    }
}

impl fmt::Display for KeyOriginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::hash::write_hex(f, &self.fingerprint)?;
        for step in &self.path {
            if step & BIP32_HARDENED != 0 {
                write!(f, "/{}'", step & !BIP32_HARDENED)?;
            } else {
                write!(f, "/{step}")?;
            }
        }
        Ok(())
    }
}
