//! Domain logic for the roster draw service.
//!
//! Everything in this crate is synchronous and free of HTTP concerns: loading
//! the character snapshot, deriving the minute seed, sampling a selection and
//! fingerprinting it. The `roster-api` crate wires these into request handlers.

pub mod code;
pub mod error;
pub mod hashing;
pub mod record;
pub mod sampler;
pub mod seed;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
