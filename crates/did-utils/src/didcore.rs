use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ldmodel::Context;

// === Structure of a did document ===

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    // The @context property defines the vocabulary used in the JSON-LD document.
    // In the context of a DID Document, it defines the vocabulary for the
    // various properties within the document, such as verificationMethod.
    #[serde(rename = "@context")]
    pub context: Context,

    // === Identifier ===

    // Identifier property is mandatory in a did document.
    // see https://www.w3.org/TR/did-core/#dfn-id
    pub id: String,

    // See https://www.w3.org/TR/did-core/#dfn-controller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<Controller>,

    // See https://www.w3.org/TR/did-core/#dfn-alsoknownas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub also_known_as: Option<Vec<String>>,

    // === Verification Methods ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<Vec<VerificationMethod>>,

    // === Verification Relationships ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Vec<VerificationMethodType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_method: Option<Vec<VerificationMethodType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_delegation: Option<Vec<VerificationMethodType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_invocation: Option<Vec<VerificationMethodType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<Vec<VerificationMethodType>>,

    // === Dynamic Properties ===
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub additional_properties: Option<HashMap<String, Value>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Controller {
    SingleString(String),
    SetOfString(Vec<String>),
}

#[derive(Serialize, Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: String,

    #[serde(rename = "type")]
    pub key_type: String,

    pub controller: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_multibase: Option<String>,

    // === Additional properties ===
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub additional_properties: Option<HashMap<String, Value>>,
}

// === Verification relationship entries ===
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VerificationMethodType {
    Reference(String),
    Embedded(Box<VerificationMethod>),
}

impl VerificationMethodType {
    /// Identifier of the referenced or embedded method.
    pub fn id(&self) -> &str {
        match self {
            VerificationMethodType::Reference(id) => id,
            VerificationMethodType::Embedded(method) => &method.id,
        }
    }
}

impl Document {
    /// Expands a relative DID URL (`#fragment`) against the document id.
    pub fn absolute_id(&self, id: &str) -> String {
        if id.starts_with('#') {
            format!("{}{}", self.id, id)
        } else {
            id.to_string()
        }
    }

    /// Looks up a verification method by its absolute or relative id.
    pub fn find_verification_method(&self, id: &str) -> Option<&VerificationMethod> {
        let wanted = self.absolute_id(id);
        self.verification_method
            .as_ref()?
            .iter()
            .find(|method| self.absolute_id(&method.id) == wanted)
    }

    /// Tells whether a verification method is authorized for assertions.
    pub fn is_assertion_method(&self, id: &str) -> bool {
        let wanted = self.absolute_id(id);
        self.assertion_method
            .iter()
            .flatten()
            .any(|entry| self.absolute_id(entry.id()) == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diddoc() -> Document {
        serde_json::from_str(
            r##"{
                "@context": [
                    "https://www.w3.org/ns/did/v1",
                    "https://w3id.org/security/suites/ed25519-2020/v1"
                ],
                "id": "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK",
                "verificationMethod": [{
                    "id": "#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK",
                    "type": "Ed25519VerificationKey2020",
                    "controller": "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK",
                    "publicKeyMultibase": "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"
                }],
                "authentication": ["#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"],
                "assertionMethod": ["#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"]
            }"##,
        )
        .unwrap()
    }

    // Reading and writing back a document must not lose or rename anything.
    #[test]
    fn test_canonicalize_did_document() {
        let document = diddoc();
        let canonicalized = json_canon::to_string(&document).unwrap();

        let expected = r##"{"@context":["https://www.w3.org/ns/did/v1","https://w3id.org/security/suites/ed25519-2020/v1"],"assertionMethod":["#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"],"authentication":["#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"],"id":"did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK","verificationMethod":[{"controller":"did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK","id":"#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK","publicKeyMultibase":"z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK","type":"Ed25519VerificationKey2020"}]}"##;
        assert_eq!(expected, canonicalized);
    }

    #[test]
    fn test_find_verification_method_with_relative_and_absolute_ids() {
        let document = diddoc();
        let absolute = "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";

        assert!(document.find_verification_method(absolute).is_some());
        assert!(document.find_verification_method("#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK").is_some());
        assert!(document.find_verification_method("#other").is_none());

        assert!(document.is_assertion_method(absolute));
        assert!(!document.is_assertion_method("did:key:z6Mkother#z6Mkother"));
    }
}
