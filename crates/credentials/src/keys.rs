use did_utils::{
    crypto::{Ed25519KeyPair, Generate, KeyMaterial},
    methods::{decode_ed25519_private_multikey, decode_multikey, ed25519_private_multikey, Algorithm, ToMultikey},
};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Type tag of the key pairs handled here.
pub const KEY_TYPE: &str = "Ed25519VerificationKey2020";

/// An Ed25519 key pair bound to its `did:key` identity.
///
/// The controller is `did:key:<publicKeyMultibase>` and the key id is
/// `<controller>#<publicKeyMultibase>`.
#[derive(Clone)]
pub struct KeyPair {
    id: String,
    controller: String,
    public_key_multibase: String,
    key: Ed25519KeyPair,
}

/// Serializable view of a key pair, as printed by the walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedKey {
    pub id: String,
    #[serde(rename = "type")]
    pub key_type: String,
    pub controller: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_multibase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_multibase: Option<String>,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("id", &self.id)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

impl KeyPair {
    /// Generates a key pair from the OS entropy source.
    pub fn generate() -> Result<Self, Error> {
        Ed25519KeyPair::new()
            .map(Self::from_ed25519)
            .map_err(Error::KeyGeneration)
    }

    /// Derives a key pair from a 32-byte seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        Ed25519KeyPair::new_with_seed(seed)
            .map(Self::from_ed25519)
            .map_err(Error::KeyGeneration)
    }

    /// Restores a key pair from its exported `privateKeyMultibase`.
    pub fn from_private_key_multibase(private_key_multibase: &str) -> Result<Self, Error> {
        decode_ed25519_private_multikey(private_key_multibase)
            .map(Self::from_ed25519)
            .map_err(Error::InvalidPrivateKey)
    }

    fn from_ed25519(key: Ed25519KeyPair) -> Self {
        let public_key_multibase = key.to_multikey();
        let controller = format!("did:key:{public_key_multibase}");

        Self {
            id: format!("{controller}#{public_key_multibase}"),
            controller,
            public_key_multibase,
            key,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn key_type(&self) -> &'static str {
        KEY_TYPE
    }

    pub fn public_key_multibase(&self) -> &str {
        &self.public_key_multibase
    }

    /// Tells whether the secret half is present.
    pub fn can_sign(&self) -> bool {
        self.key.secret_key.is_some()
    }

    pub(crate) fn ed25519(&self) -> &Ed25519KeyPair {
        &self.key
    }

    /// Public description of the key.
    pub fn export_public(&self) -> ExportedKey {
        ExportedKey {
            id: self.id.clone(),
            key_type: KEY_TYPE.to_string(),
            controller: self.controller.clone(),
            public_key_multibase: Some(self.public_key_multibase.clone()),
            private_key_multibase: None,
        }
    }

    /// Secret description of the key, with `privateKeyMultibase` set.
    pub fn export_private(&self) -> Result<ExportedKey, Error> {
        let private_key_multibase = ed25519_private_multikey(&self.key).map_err(Error::KeyGeneration)?;

        Ok(ExportedKey {
            id: self.id.clone(),
            key_type: KEY_TYPE.to_string(),
            controller: self.controller.clone(),
            public_key_multibase: None,
            private_key_multibase: Some(private_key_multibase),
        })
    }

    /// Rebuilds a public-only key bound to the given key id and controller.
    pub fn verification_key(&self, id: &str, controller: &str) -> KeyPair {
        KeyPair {
            id: id.to_string(),
            controller: controller.to_string(),
            public_key_multibase: self.public_key_multibase.clone(),
            key: self.key.to_public(),
        }
    }

    /// Tells whether a `publicKeyMultibase` value encodes this key.
    pub fn matches_public_key(&self, public_key_multibase: &str) -> bool {
        match (decode_multikey(public_key_multibase), self.key.public_key_bytes()) {
            (Ok((Algorithm::Ed25519, bytes)), Ok(own)) => bytes == own,
            _ => false,
        }
    }
}

/// Generates the key pair of a walkthrough participant.
///
/// The role is only used for logging.
pub fn generate_key_pair(role: &str) -> Result<KeyPair, Error> {
    let key_pair = KeyPair::generate()?;
    tracing::info!(role, did = key_pair.controller(), "generated key pair");

    Ok(key_pair)
}
