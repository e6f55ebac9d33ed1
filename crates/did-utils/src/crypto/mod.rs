//! Cryptographic primitives used across the crate.
//!
//! Keys are held in an [`AsymmetricKey`] pair whose secret half is optional,
//! so the same type serves signing (secret present) and verification
//! (public key only).

pub(crate) mod ed25519;
pub(crate) mod errors;
pub(crate) mod sha256_hash;
pub(crate) mod traits;
pub(crate) mod utils;
pub(crate) mod x25519;

pub use ed25519::Ed25519KeyPair;
pub use errors::Error;
pub use sha256_hash::sha256_hash;
pub use traits::{CoreSign, Generate, KeyMaterial, BYTES_LENGTH_32};
pub use x25519::X25519KeyPair;

/// A public key paired with an optional secret key.
pub struct AsymmetricKey<P, S> {
    pub public_key: P,
    pub secret_key: Option<S>,
}
