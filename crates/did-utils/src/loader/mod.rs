//! Document loading for credential processing.
//!
//! A [`DocumentLoader`] maps an identifier to the document it designates:
//! DIDs and DID URLs go through a [`DIDResolver`], JSON-LD context URLs are
//! served from bundled copies. Issuance and verification share one loader.

mod contexts;

pub use contexts::{
    StaticContextLoader, CREDENTIALS_V1_CONTEXT, DID_V1_CONTEXT, OPEN_BADGES_V3_CONTEXT,
    W3ID_DATA_INTEGRITY_V2_CONTEXT, W3ID_DID_V1_CONTEXT, W3ID_ED2020_V1_CONTEXT, W3ID_MULTIKEY_V1_CONTEXT,
    W3ID_X25519_2020_V1_CONTEXT,
};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::{
    didcore::{Document, VerificationMethod},
    methods::{Content, DIDResolutionError, DIDResolver},
};

/// A document obtained from the loader.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteDocument {
    Did(Document),
    VerificationMethod(VerificationMethod),
    Context(Value),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoaderError {
    #[error("unresolvable identifier: {0}")]
    Unresolvable(String),
    #[error("failed to resolve {identifier}: {source}")]
    Resolution {
        identifier: String,
        source: DIDResolutionError,
    },
    #[error("bundled context {url} is malformed: {reason}")]
    MalformedContext { url: String, reason: String },
}

/// Loads the document designated by an identifier.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, identifier: &str) -> Result<RemoteDocument, LoaderError>;
}

/// Loader consulting a DID resolver for DIDs and the bundled contexts for
/// everything else.
pub struct DefaultDocumentLoader<R: DIDResolver> {
    resolver: R,
    contexts: StaticContextLoader,
}

impl<R: DIDResolver> DefaultDocumentLoader<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            contexts: StaticContextLoader,
        }
    }

    /// Borrows the DID resolver this loader consults.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

#[async_trait]
impl<R: DIDResolver> DocumentLoader for DefaultDocumentLoader<R> {
    async fn load(&self, identifier: &str) -> Result<RemoteDocument, LoaderError> {
        if identifier.starts_with("did:") {
            tracing::debug!("dereferencing {identifier}");

            let content = self.resolver.dereference(identifier).await.map_err(|source| match source {
                DIDResolutionError::NotFound => LoaderError::Unresolvable(identifier.to_string()),
                source => LoaderError::Resolution {
                    identifier: identifier.to_string(),
                    source,
                },
            })?;

            return Ok(match content {
                Content::DIDDocument(diddoc) => RemoteDocument::Did(diddoc),
                Content::VerificationMethod(method) => RemoteDocument::VerificationMethod(method),
            });
        }

        tracing::debug!("loading context {identifier}");
        self.contexts.load(identifier).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::{DidKey, PublicKeyFormat};

    const DID: &str = "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";

    fn loader() -> DefaultDocumentLoader<DidKey> {
        DefaultDocumentLoader::new(DidKey::new_full(PublicKeyFormat::Ed25519VerificationKey2020, true))
    }

    struct MockResolver;

    #[async_trait]
    impl DIDResolver for MockResolver {
        async fn resolve(&self, did: &str) -> Result<Document, DIDResolutionError> {
            match did {
                "did:example:alice" => Ok(Document {
                    id: did.to_string(),
                    ..Default::default()
                }),
                _ => Err(DIDResolutionError::InvalidDid),
            }
        }
    }

    #[tokio::test]
    async fn test_resolution_symmetry() {
        let loader = loader();

        let RemoteDocument::Did(first) = loader.load(DID).await.unwrap() else {
            panic!("expected a DID document");
        };
        let RemoteDocument::Did(second) = loader.load(DID).await.unwrap() else {
            panic!("expected a DID document");
        };

        assert_eq!(
            json_canon::to_string(&first).unwrap(),
            json_canon::to_string(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_load_key_id_yields_verification_method() {
        let key_id = format!("{DID}#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK");

        let RemoteDocument::VerificationMethod(method) = loader().load(&key_id).await.unwrap() else {
            panic!("expected a verification method");
        };

        assert_eq!(method.id, key_id);
        assert_eq!(method.controller, DID);
        assert_eq!(
            method.public_key_multibase.as_deref(),
            Some("z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK")
        );
    }

    #[tokio::test]
    async fn test_load_bundled_contexts() {
        let loader = loader();

        for url in [CREDENTIALS_V1_CONTEXT, OPEN_BADGES_V3_CONTEXT, W3ID_DATA_INTEGRITY_V2_CONTEXT] {
            assert!(matches!(loader.load(url).await.unwrap(), RemoteDocument::Context(_)));
        }
    }

    #[tokio::test]
    async fn test_load_failures() {
        let loader = loader();

        let err = loader.load("https://example.com/context/v1").await.unwrap_err();
        assert_eq!(err, LoaderError::Unresolvable("https://example.com/context/v1".to_string()));

        let err = loader.load(&format!("{DID}#missing")).await.unwrap_err();
        assert_eq!(err, LoaderError::Unresolvable(format!("{DID}#missing")));

        let err = loader.load("did:web:example.com").await.unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Resolution {
                source: DIDResolutionError::InvalidDidUrl,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_loader_consults_injected_resolver() {
        let loader = DefaultDocumentLoader::new(MockResolver);

        let RemoteDocument::Did(diddoc) = loader.load("did:example:alice").await.unwrap() else {
            panic!("expected a DID document");
        };
        assert_eq!(diddoc.id, "did:example:alice");

        assert!(loader.load(DID).await.is_err());
    }
}
