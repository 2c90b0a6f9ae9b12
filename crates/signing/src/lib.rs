//! Key and script providers for transaction signing.
//!
//! [`SigningProvider`] is the read contract every provider implements.
//! [`FlatSigningProvider`] is a plain set of maps, [`FillableSigningProvider`]
//! a lock-guarded keystore that accepts new material, and
//! [`HidingSigningProvider`] a filter that withholds secrets or key origins
//! from whatever it wraps.

mod destination;
mod error;
mod fillable;
mod flat;
mod hiding;
mod provider;

pub use destination::get_key_for_destination;
pub use error::ProviderError;
pub use fillable::FillableSigningProvider;
pub use flat::{merge, FlatSigningProvider};
pub use hiding::HidingSigningProvider;
pub use provider::{DummySigningProvider, SigningProvider, DUMMY_SIGNING_PROVIDER};
