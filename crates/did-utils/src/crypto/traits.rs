//! Traits for cryptographic operations.

// Inspired from https://github.com/decentralized-identity/did-key.rs
// The interface is kept common to all curves, so that consuming modules
// do not depend on a specific curve implementation.

use super::errors::Error;

/// The length of a 32-byte key material.
pub const BYTES_LENGTH_32: usize = 32;

/// A trait for types that hold key material bytes.
pub trait KeyMaterial {
    /// Returns the public key bytes.
    fn public_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error>;

    /// Returns the secret key bytes.
    ///
    /// Fails with [`Error::InvalidSecretKey`] on public-only key pairs.
    fn private_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error>;
}

/// A trait for types that support deterministic key generation.
pub trait Generate: KeyMaterial {
    /// Generates a new random key from the OS entropy source.
    fn new() -> Result<Self, Error>
    where
        Self: Sized;

    /// Generates a new key deterministically using the given 32-byte seed.
    fn new_with_seed(seed: &[u8]) -> Result<Self, Error>
    where
        Self: Sized;

    /// Builds a public-only instance from an existing public key.
    fn from_public_key(public_key: &[u8; BYTES_LENGTH_32]) -> Result<Self, Error>
    where
        Self: Sized;

    /// Builds an instance from an existing secret key.
    fn from_secret_key(private_key: &[u8; BYTES_LENGTH_32]) -> Result<Self, Error>
    where
        Self: Sized;
}

/// A trait for types that support signing operations.
pub trait CoreSign {
    /// Signs the payload.
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, Error>;

    /// Verifies a signature over the payload.
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), Error>;
}
