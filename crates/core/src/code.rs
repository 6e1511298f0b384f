//! Four-digit verification codes.
//!
//! A code fingerprints *which* characters were drawn for a seed so two
//! people can compare selections out of band. It identifies the set, not the
//! presentation order, and makes no secrecy claims.

use std::fmt;

use serde::Serialize;

use crate::hashing::sha256_bytes;
use crate::record::CharacterRecord;
use crate::seed::TimeSeed;

/// Number of decimal digits in a code.
pub const CODE_DIGITS: usize = 4;

const CODE_MODULUS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Derive the code for a selection drawn under `seed`.
    ///
    /// Hashes `seed`, then each display name in lexical order, separated by
    /// newlines, with SHA-256. The first 32 bits of the digest reduced
    /// modulo 10000 give the code.
    pub fn derive<'a, I>(selection: I, seed: &TimeSeed) -> Self
    where
        I: IntoIterator<Item = &'a CharacterRecord>,
    {
        let mut names: Vec<&str> = selection.into_iter().map(CharacterRecord::name).collect();
        names.sort_unstable();

        let mut payload = String::from(seed.as_str());
        for name in names {
            payload.push('\n');
            payload.push_str(name);
        }

        let [a, b, c, d, ..] = sha256_bytes(payload.as_bytes());
        let code = u32::from_be_bytes([a, b, c, d]) % CODE_MODULUS;

        Self(format!("{code:0width$}", width = CODE_DIGITS))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
