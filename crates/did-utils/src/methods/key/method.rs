use crate::{
    crypto::{Ed25519KeyPair, Generate, KeyMaterial},
    didcore::{Document, VerificationMethod, VerificationMethodType},
    ldmodel::Context,
    methods::{
        common::{decode_multikey, Algorithm, PublicKeyFormat, ToMultikey},
        errors::DIDResolutionError,
    },
};

const DID_KEY_PREFIX: &str = "did:key:";
const DID_V1_CONTEXT: &str = "https://www.w3.org/ns/did/v1";
const MULTIKEY_V1_CONTEXT: &str = "https://w3id.org/security/multikey/v1";
const ED25519_2020_CONTEXT: &str = "https://w3id.org/security/suites/ed25519-2020/v1";
const X25519_2020_CONTEXT: &str = "https://w3id.org/security/suites/x25519-2020/v1";

/// Driver for the `did:key` method.
#[derive(Debug, Clone)]
pub struct DidKey {
    /// Key format to consider during DID
    /// expansion into a DID document.
    pub key_format: PublicKeyFormat,

    /// Derive an X25519 key agreement method from Ed25519 keys.
    pub enable_encryption_key_derivation: bool,
}

impl Default for DidKey {
    fn default() -> Self {
        Self::new()
    }
}

impl DidKey {
    /// Creates a driver expanding keys as `Multikey` methods.
    pub fn new() -> Self {
        Self::new_full(PublicKeyFormat::default(), true)
    }

    /// Creates a driver with explicit expansion settings.
    pub fn new_full(key_format: PublicKeyFormat, enable_encryption_key_derivation: bool) -> Self {
        Self {
            key_format,
            enable_encryption_key_derivation,
        }
    }

    /// Expands a did:key address into its DID document.
    ///
    /// See https://w3c-ccg.github.io/did-method-key/#document-creation-algorithm
    pub fn expand(&self, did: &str) -> Result<Document, DIDResolutionError> {
        let Some(multikey) = did.strip_prefix(DID_KEY_PREFIX) else {
            return Err(match did.strip_prefix("did:") {
                Some(rest) if rest.contains(':') => DIDResolutionError::MethodNotSupported,
                _ => DIDResolutionError::InvalidDid,
            });
        };
        if multikey.is_empty() || multikey.contains([':', '#', '?', '/']) {
            return Err(DIDResolutionError::InvalidDid);
        }

        let (alg, key) = decode_multikey(multikey).map_err(|_| DIDResolutionError::InvalidDid)?;
        if alg != Algorithm::Ed25519 {
            return Err(DIDResolutionError::UnsupportedPublicKeyType);
        }

        // Run algorithm for signature verification method expansion
        let signature_verification_method = self.derive_verification_method(did, multikey, alg, &key)?;
        let reference = || Some(vec![VerificationMethodType::Reference(signature_verification_method.id.clone())]);

        let mut diddoc = Document {
            context: Context::SetOfString(self.contexts()),
            id: did.to_string(),
            authentication: reference(),
            assertion_method: reference(),
            capability_delegation: reference(),
            capability_invocation: reference(),
            verification_method: Some(vec![signature_verification_method.clone()]),
            ..Default::default()
        };

        if self.enable_encryption_key_derivation {
            let encryption_verification_method = self.derive_encryption_verification_method(did, &key)?;

            diddoc.key_agreement = Some(vec![VerificationMethodType::Reference(
                encryption_verification_method.id.clone(),
            )]);
            diddoc.verification_method = Some(vec![signature_verification_method, encryption_verification_method]);
        }

        Ok(diddoc)
    }

    fn contexts(&self) -> Vec<String> {
        let mut contexts = vec![String::from(DID_V1_CONTEXT)];

        match self.key_format {
            PublicKeyFormat::Multikey => contexts.push(String::from(MULTIKEY_V1_CONTEXT)),
            PublicKeyFormat::Ed25519VerificationKey2020 => {
                contexts.push(String::from(ED25519_2020_CONTEXT));
                if self.enable_encryption_key_derivation {
                    contexts.push(String::from(X25519_2020_CONTEXT));
                }
            }
        }

        contexts
    }

    /// Derives verification method from multikey constituents
    fn derive_verification_method(
        &self,
        did: &str,
        multikey: &str,
        alg: Algorithm,
        key: &[u8],
    ) -> Result<VerificationMethod, DIDResolutionError> {
        if alg.public_key_length() != key.len() {
            return Err(DIDResolutionError::InvalidPublicKeyLength);
        }

        let key_type = match (self.key_format, alg) {
            (PublicKeyFormat::Multikey, _) => "Multikey",
            (PublicKeyFormat::Ed25519VerificationKey2020, Algorithm::Ed25519) => "Ed25519VerificationKey2020",
            (PublicKeyFormat::Ed25519VerificationKey2020, Algorithm::X25519) => "X25519KeyAgreementKey2020",
        };

        Ok(VerificationMethod {
            id: format!("{did}#{multikey}"),
            key_type: String::from(key_type),
            controller: did.to_string(),
            public_key_multibase: Some(String::from(multikey)),
            ..Default::default()
        })
    }

    /// Derives X25519 key agreement verification method indirectly from Ed25519 key
    fn derive_encryption_verification_method(
        &self,
        did: &str,
        key: &[u8],
    ) -> Result<VerificationMethod, DIDResolutionError> {
        let key: [u8; 32] = key.try_into().map_err(|_| DIDResolutionError::InvalidPublicKeyLength)?;
        let ed25519_keypair = Ed25519KeyPair::from_public_key(&key).map_err(|_| DIDResolutionError::InvalidPublicKey)?;
        let x25519_keypair = ed25519_keypair.get_x25519().map_err(|_| DIDResolutionError::InvalidPublicKey)?;

        let enc_key = x25519_keypair
            .public_key_bytes()
            .map_err(|_| DIDResolutionError::InternalError)?;

        self.derive_verification_method(did, &x25519_keypair.to_multikey(), Algorithm::X25519, &enc_key)
    }
}
