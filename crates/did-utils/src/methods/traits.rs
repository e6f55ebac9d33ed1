//! Trait definitions for DID methods.

use async_trait::async_trait;

use crate::{
    didcore::{Document, VerificationMethod},
    methods::{errors::DIDResolutionError, utils::parse_did_url},
};

/// Resource a DID URL dereferences to.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    DIDDocument(Document),
    VerificationMethod(VerificationMethod),
}

/// Abstract contract for DID resolution.
///
/// [See DID Resolution Specification](https://w3c.github.io/did-resolution)
#[async_trait]
pub trait DIDResolver: Send + Sync {
    /// Resolves a DID address into its corresponding DID document.
    async fn resolve(&self, did: &str) -> Result<Document, DIDResolutionError>;

    /// Dereferences a DID URL into its corresponding resource.
    ///
    /// A bare DID yields its document, a DID URL with a fragment yields the
    /// verification method the fragment designates.
    async fn dereference(&self, did_url: &str) -> Result<Content, DIDResolutionError> {
        let (did, _query, fragment) = parse_did_url(did_url)?;

        let diddoc = self.resolve(&did).await.map_err(|err| match err {
            DIDResolutionError::InvalidDid => DIDResolutionError::InvalidDidUrl,
            err => err,
        })?;

        match fragment {
            None => Ok(Content::DIDDocument(diddoc)),
            Some(fragment) => diddoc
                .find_verification_method(&format!("#{fragment}"))
                .cloned()
                .map(|method| {
                    Content::VerificationMethod(VerificationMethod {
                        id: diddoc.absolute_id(&method.id),
                        ..method
                    })
                })
                .ok_or(DIDResolutionError::NotFound),
        }
    }
}
