use async_trait::async_trait;

use crate::{
    didcore::Document,
    methods::{errors::DIDResolutionError, traits::DIDResolver},
};

use super::DidKey;

#[async_trait]
impl DIDResolver for DidKey {
    /// Resolves a did:key address by expanding the key it encodes.
    async fn resolve(&self, did: &str) -> Result<Document, DIDResolutionError> {
        self.expand(did)
    }
}
