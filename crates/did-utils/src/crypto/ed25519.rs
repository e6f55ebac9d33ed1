use curve25519_dalek::edwards::CompressedEdwardsY;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use super::{
    errors::Error,
    traits::{CoreSign, Generate, KeyMaterial, BYTES_LENGTH_32},
    utils::{clone_slice_to_array, generate_seed},
    x25519::X25519KeyPair,
    AsymmetricKey,
};

pub type Ed25519KeyPair = AsymmetricKey<VerifyingKey, SigningKey>;

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.public_key))
    }
}

impl Clone for Ed25519KeyPair {
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key,
            secret_key: self.secret_key.clone(),
        }
    }
}

impl KeyMaterial for Ed25519KeyPair {
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

impl Generate for Ed25519KeyPair {
    fn new() -> Result<Ed25519KeyPair, Error> {
        Self::new_with_seed(&[])
    }

    fn new_with_seed(seed: &[u8]) -> Result<Ed25519KeyPair, Error> {
        let secret_seed = generate_seed(seed)?;
        Self::from_secret_key(&secret_seed)
    }

    fn from_public_key(public_key: &[u8; BYTES_LENGTH_32]) -> Result<Ed25519KeyPair, Error> {
        let public_key = VerifyingKey::from_bytes(public_key).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Ed25519KeyPair {
            public_key,
            secret_key: None,
        })
    }

    fn from_secret_key(secret_key: &[u8; BYTES_LENGTH_32]) -> Result<Ed25519KeyPair, Error> {
        let sk = SigningKey::from_bytes(secret_key);
        Ok(Ed25519KeyPair {
            public_key: sk.verifying_key(),
            secret_key: Some(sk),
        })
    }
}

impl CoreSign for Ed25519KeyPair {
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, Error> {
        let sk = self.secret_key.as_ref().ok_or(Error::InvalidSecretKey)?;
        sk.try_sign(payload)
            .map(|signature| signature.to_bytes().to_vec())
            .map_err(|_| Error::SignatureError)
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), Error> {
        let sig = Signature::from_slice(signature).map_err(|_| Error::CanNotRetrieveSignature)?;
        self.public_key
            .verify(payload, &sig)
            .map_err(|_| Error::VerificationError)
    }
}

impl Ed25519KeyPair {
    /// Returns the 64-byte `seed || public key` form of the key pair.
    pub fn keypair_bytes(&self) -> Result<[u8; 64], Error> {
        match &self.secret_key {
            Some(sk) => Ok(sk.to_keypair_bytes()),
            None => Err(Error::InvalidSecretKey),
        }
    }

    /// Strips the secret half, keeping only what verification needs.
    pub fn to_public(&self) -> Ed25519KeyPair {
        Ed25519KeyPair {
            public_key: self.public_key,
            secret_key: None,
        }
    }

    /// Derives the X25519 public key matching this Ed25519 key,
    /// by mapping the Edwards point onto its Montgomery form.
    pub fn get_x25519(&self) -> Result<X25519KeyPair, Error> {
        let point = CompressedEdwardsY(self.public_key_bytes()?)
            .decompress()
            .ok_or(Error::InvalidPublicKey)?;

        X25519KeyPair::from_public_key(&point.to_montgomery().to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &[u8; 32] = b"Sample seed bytes of thirtytwo!b";

    #[test]
    fn test_new() {
        let keypair = Ed25519KeyPair::new().unwrap();
        assert_eq!(keypair.public_key_bytes().unwrap().len(), BYTES_LENGTH_32);
        assert_eq!(keypair.private_key_bytes().unwrap().len(), BYTES_LENGTH_32);
    }

    #[test]
    fn test_new_with_seed() {
        let keypair = Ed25519KeyPair::new_with_seed(SEED).unwrap();
        let pub_key_hex = hex::encode(keypair.public_key_bytes().unwrap());
        let pri_key_hex = hex::encode(keypair.private_key_bytes().unwrap());
        assert_eq!(pub_key_hex, "412328b0201b71d0144a27d028057b6fdf58d22e0f3baaebaa5388140e57bbbd");
        assert_eq!(pri_key_hex, "53616d706c652073656564206279746573206f662074686972747974776f2162");
    }

    #[test]
    fn test_keypair_bytes_concatenates_seed_and_public_key() {
        let keypair = Ed25519KeyPair::new_with_seed(SEED).unwrap();
        let bytes = keypair.keypair_bytes().unwrap();
        assert_eq!(&bytes[..32], SEED);
        assert_eq!(bytes[32..], keypair.public_key_bytes().unwrap());

        assert_eq!(keypair.to_public().keypair_bytes().unwrap_err(), Error::InvalidSecretKey);
    }

    #[test]
    fn test_sign_verify() {
        let keypair = Ed25519KeyPair::new().unwrap();
        let payload = br#"{"name":"Alice Doe","achievement":"Workshop Attendance"}"#;

        let signature = keypair.sign(payload).unwrap();
        assert!(keypair.verify(payload, &signature).is_ok());

        // A public-only copy verifies but cannot sign.
        let public = keypair.to_public();
        assert!(public.verify(payload, &signature).is_ok());
        assert_eq!(public.sign(payload).unwrap_err(), Error::InvalidSecretKey);
    }

    #[test]
    fn test_verify_rejects_other_key_and_garbage() {
        let keypair = Ed25519KeyPair::new().unwrap();
        let other = Ed25519KeyPair::new().unwrap();
        let payload = b"payload";

        let signature = keypair.sign(payload).unwrap();
        assert_eq!(other.verify(payload, &signature).unwrap_err(), Error::VerificationError);
        assert_eq!(keypair.verify(payload, &[0u8; 12]).unwrap_err(), Error::CanNotRetrieveSignature);
    }

    #[test]
    fn test_from_public_key_roundtrip() {
        let keypair = Ed25519KeyPair::new_with_seed(SEED).unwrap();
        let public = Ed25519KeyPair::from_public_key(&keypair.public_key_bytes().unwrap()).unwrap();
        assert!(public.secret_key.is_none());
        assert_eq!(public.public_key, keypair.public_key);
    }
}
