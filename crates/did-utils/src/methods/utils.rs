use std::collections::HashMap;

use url::Url;

use super::errors::DIDResolutionError;

pub type ParsedDIDUrl = (String, HashMap<String, String>, Option<String>);

/// Parses DID URL into (did, query, fragment)
pub fn parse_did_url(did_url: &str) -> Result<ParsedDIDUrl, DIDResolutionError> {
    if !did_url.starts_with("did:") || did_url.contains("%%") {
        return Err(DIDResolutionError::InvalidDidUrl);
    }

    let parts: Vec<_> = did_url.split(':').collect();
    if parts.len() < 3 {
        return Err(DIDResolutionError::InvalidDidUrl);
    }

    // Colons are masked so that the whole DID parses as a URL host.
    let url = did_url.replace(':', "%%");
    let url = Url::parse(&format!("scheme://{}", url)).map_err(|_| DIDResolutionError::InvalidDidUrl)?;
    let domain = url.domain().ok_or(DIDResolutionError::InvalidDidUrl)?;

    let did = domain.replace("%%", ":");
    let query = url
        .query_pairs()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    let fragment = url.fragment().map(|x| x.to_string());

    Ok((did, query, fragment))
}
