//! Script decoding helpers used by the keystore.

pub mod instruction;
pub mod opcodes;
pub mod standard;

pub use instruction::{instructions, Instruction, InstructionError, Instructions};
pub use standard::{extract_pubkey, p2pk_script};
