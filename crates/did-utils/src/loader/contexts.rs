use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::{DocumentLoader, LoaderError, RemoteDocument};

pub const CREDENTIALS_V1_CONTEXT: &str = "https://www.w3.org/2018/credentials/v1";
pub const DID_V1_CONTEXT: &str = "https://www.w3.org/ns/did/v1";
pub const W3ID_DID_V1_CONTEXT: &str = "https://w3id.org/did/v1";
pub const W3ID_DATA_INTEGRITY_V2_CONTEXT: &str = "https://w3id.org/security/data-integrity/v2";
pub const W3ID_ED2020_V1_CONTEXT: &str = "https://w3id.org/security/suites/ed25519-2020/v1";
pub const W3ID_MULTIKEY_V1_CONTEXT: &str = "https://w3id.org/security/multikey/v1";
pub const W3ID_X25519_2020_V1_CONTEXT: &str = "https://w3id.org/security/suites/x25519-2020/v1";
pub const OPEN_BADGES_V3_CONTEXT: &str = "https://purl.imsglobal.org/spec/ob/v3p0/context-3.0.1.json";

lazy_static::lazy_static! {
    static ref STATIC_CONTEXTS: HashMap<&'static str, &'static str> = HashMap::from([
        (CREDENTIALS_V1_CONTEXT, include_str!("../../contexts/credentials-v1.jsonld")),
        (DID_V1_CONTEXT, include_str!("../../contexts/did-v1.jsonld")),
        (W3ID_DID_V1_CONTEXT, include_str!("../../contexts/did-v1.jsonld")),
        (W3ID_DATA_INTEGRITY_V2_CONTEXT, include_str!("../../contexts/data-integrity-v2.jsonld")),
        (W3ID_ED2020_V1_CONTEXT, include_str!("../../contexts/ed25519-2020-v1.jsonld")),
        (W3ID_MULTIKEY_V1_CONTEXT, include_str!("../../contexts/multikey-v1.jsonld")),
        (W3ID_X25519_2020_V1_CONTEXT, include_str!("../../contexts/x25519-2020-v1.jsonld")),
        (OPEN_BADGES_V3_CONTEXT, include_str!("../../contexts/ob-v3p0-3.0.1.jsonld")),
    ]);
}

/// Serves JSON-LD contexts from copies bundled into the binary.
///
/// No network access is ever attempted.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContextLoader;

impl StaticContextLoader {
    /// Tells whether a context URL is bundled.
    pub fn contains(&self, url: &str) -> bool {
        STATIC_CONTEXTS.contains_key(url)
    }

    /// Lists the bundled context URLs.
    pub fn urls(&self) -> Vec<&'static str> {
        let mut urls: Vec<_> = STATIC_CONTEXTS.keys().copied().collect();
        urls.sort_unstable();
        urls
    }

    /// Parses the bundled copy of a context.
    pub fn get(&self, url: &str) -> Option<Result<Value, LoaderError>> {
        STATIC_CONTEXTS.get(url).map(|content| {
            serde_json::from_str(content).map_err(|err| LoaderError::MalformedContext {
                url: url.to_string(),
                reason: err.to_string(),
            })
        })
    }
}

#[async_trait]
impl DocumentLoader for StaticContextLoader {
    async fn load(&self, identifier: &str) -> Result<RemoteDocument, LoaderError> {
        match self.get(identifier) {
            Some(document) => document.map(RemoteDocument::Context),
            None => Err(LoaderError::Unresolvable(identifier.to_string())),
        }
    }
}
