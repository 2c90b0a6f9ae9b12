//! Consensus and policy constants used by key and script handling.

pub mod constants;

pub use constants::{within_element_size, MAX_SCRIPT_ELEMENT_SIZE};
