//! Script limits shared by the script and signing crates.

/// Maximum number of bytes pushable to the stack (network rule).
///
/// Redeem scripts are pushed as a single element when spent, so this also
/// bounds the size of any redeem script a keystore will accept.
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

pub fn within_element_size(len: usize) -> bool {
    len <= MAX_SCRIPT_ELEMENT_SIZE
}
