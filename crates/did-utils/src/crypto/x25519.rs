use x25519_dalek::{PublicKey, StaticSecret};

use super::{
    errors::Error,
    traits::{KeyMaterial, BYTES_LENGTH_32},
    utils::clone_slice_to_array,
    AsymmetricKey,
};

/// X25519 key pair, only ever derived from an Ed25519 key here
/// to populate the key agreement section of `did:key` documents.
pub type X25519KeyPair = AsymmetricKey<PublicKey, StaticSecret>;

impl std::fmt::Debug for X25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.public_key))
    }
}

impl KeyMaterial for X25519KeyPair {
    fn public_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error> {
        Ok(clone_slice_to_array(self.public_key.as_bytes()))
    }

    fn private_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error> {
        match &self.secret_key {
            Some(sk) => Ok(sk.to_bytes()),
            None => Err(Error::InvalidSecretKey),
        }
    }
}

impl X25519KeyPair {
    /// Creates a public-only `X25519KeyPair`.
    pub fn from_public_key(public_key: &[u8; BYTES_LENGTH_32]) -> Result<X25519KeyPair, Error> {
        Ok(X25519KeyPair {
            public_key: PublicKey::from(clone_slice_to_array(public_key)),
            secret_key: None,
        })
    }
}
