mod alg;
pub use alg::Algorithm;

use multibase::Base::Base58Btc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::{Ed25519KeyPair, Error as CryptoError, Generate, KeyMaterial, X25519KeyPair};

/// Multicodec prefix of an Ed25519 private key (`ed25519-priv`).
const ED25519_PRIV_PREFIX: [u8; 2] = [0x80, 0x26];

/// Shape of the verification methods produced when expanding a DID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PublicKeyFormat {
    /// `Multikey` methods under the `multikey/v1` context.
    #[default]
    Multikey,
    /// `Ed25519VerificationKey2020` and `X25519KeyAgreementKey2020` methods.
    Ed25519VerificationKey2020,
}

pub trait ToMultikey {
    /// Converts keypair into its multikey string
    fn to_multikey(&self) -> String;
}

impl ToMultikey for Ed25519KeyPair {
    fn to_multikey(&self) -> String {
        let prefix = &Algorithm::Ed25519.muticodec_prefix();
        let bytes = &self.public_key.as_bytes()[..];
        multibase::encode(Base58Btc, [prefix, bytes].concat())
    }
}

impl ToMultikey for X25519KeyPair {
    fn to_multikey(&self) -> String {
        let prefix = &Algorithm::X25519.muticodec_prefix();
        let bytes = &self.public_key.as_bytes()[..];
        multibase::encode(Base58Btc, [prefix, bytes].concat())
    }
}

/// Encodes the secret half of an Ed25519 key pair as `privateKeyMultibase`.
///
/// The encoded payload is the 64-byte `seed || public key` form, which
/// yields values starting with `zrv`.
pub fn ed25519_private_multikey(keypair: &Ed25519KeyPair) -> Result<String, CryptoError> {
    let bytes = keypair.keypair_bytes()?;
    Ok(multibase::encode(Base58Btc, [&ED25519_PRIV_PREFIX[..], &bytes[..]].concat()))
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Error)]
pub enum DecodeMultikeyError {
    #[error("error to multibase decode")]
    MultibaseDecodeError,
    #[error("not multibase-encoded in Base58")]
    NotBase58MultibaseEncoded,
    #[error("assumed multicodec too short")]
    MulticodecTooShort,
    #[error("unknown algorithm")]
    UnknownAlgorithm,
    #[error("invalid key material")]
    InvalidKeyMaterial,
    #[error("public key does not match the private key")]
    PublicKeyMismatch,
}

/// Decodes algorithm and key bytes from multibase-encode value
pub fn decode_multikey(multikey: &str) -> Result<(Algorithm, Vec<u8>), DecodeMultikeyError> {
    let (prefix, bytes) = decode_multicodec(multikey)?;
    let alg = Algorithm::from_muticodec_prefix(&prefix).ok_or(DecodeMultikeyError::UnknownAlgorithm)?;

    Ok((alg, bytes))
}

/// Restores an Ed25519 key pair from a `privateKeyMultibase` value.
///
/// Both the bare 32-byte seed and the 64-byte `seed || public key` forms
/// are accepted. In the latter, the public half must match the key derived
/// from the seed.
pub fn decode_ed25519_private_multikey(multikey: &str) -> Result<Ed25519KeyPair, DecodeMultikeyError> {
    let (prefix, bytes) = decode_multicodec(multikey)?;
    if prefix != ED25519_PRIV_PREFIX {
        return Err(DecodeMultikeyError::UnknownAlgorithm);
    }

    if bytes.len() != 32 && bytes.len() != 64 {
        return Err(DecodeMultikeyError::MulticodecTooShort);
    }

    let (secret, public) = bytes.split_at(32);
    let secret: [u8; 32] = secret.try_into().map_err(|_| DecodeMultikeyError::MulticodecTooShort)?;
    let keypair = Ed25519KeyPair::from_secret_key(&secret).map_err(|_| DecodeMultikeyError::InvalidKeyMaterial)?;

    if !public.is_empty() {
        let derived = keypair
            .public_key_bytes()
            .map_err(|_| DecodeMultikeyError::InvalidKeyMaterial)?;
        if public != &derived[..] {
            return Err(DecodeMultikeyError::PublicKeyMismatch);
        }
    }

    Ok(keypair)
}

fn decode_multicodec(multikey: &str) -> Result<([u8; 2], Vec<u8>), DecodeMultikeyError> {
    let (base, multicodec) = multibase::decode(multikey).map_err(|_| DecodeMultikeyError::MultibaseDecodeError)?;

    if base != Base58Btc {
        return Err(DecodeMultikeyError::NotBase58MultibaseEncoded);
    }

    if multicodec.len() < 2 {
        return Err(DecodeMultikeyError::MulticodecTooShort);
    }

    let prefix = [multicodec[0], multicodec[1]];
    Ok((prefix, multicodec[2..].to_vec()))
}
