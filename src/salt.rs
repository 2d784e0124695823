//! Hash-salt generation for the injected settings block.
//!
//! The salt is the only non-deterministic value the engine produces. The byte
//! source is abstracted behind [`SaltSource`] so tests can substitute a fixed
//! sequence and assert the exact rendered settings content; production code
//! uses [`OsSaltSource`], a thin wrapper over the OS CSPRNG.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand_core::{OsRng, RngCore};

/// Number of random bytes behind one generated hash salt.
pub const HASH_SALT_BYTES: usize = 55;

/// A source of random bytes for salt generation.
pub trait SaltSource: Send + Sync + std::fmt::Debug {
    /// Fill `buf` completely with random bytes.
    fn fill(&self, buf: &mut [u8]);
}

/// Production [`SaltSource`] backed by the operating system's CSPRNG.
#[derive(Debug, Default)]
pub struct OsSaltSource;

impl SaltSource for OsSaltSource {
    fn fill(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

/// Generate one hash salt: [`HASH_SALT_BYTES`] random bytes encoded with the
/// URL-safe base64 alphabet, without padding.
#[must_use]
pub fn hash_salt(source: &dyn SaltSource) -> String {
    let mut bytes = [0_u8; HASH_SALT_BYTES];
    source.fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
