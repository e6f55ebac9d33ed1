use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Data Integrity proof.
///
/// See https://www.w3.org/TR/vc-data-integrity/#proofs
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    // An optional identifier for the proof.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // See https://www.w3.org/TR/vc-data-integrity/#dfn-proof-type
    #[serde(rename = "type")]
    pub proof_type: String,

    // Identifier of the cryptographic suite, required for DataIntegrityProof.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cryptosuite: Option<String>,

    // See https://www.w3.org/TR/vc-data-integrity/#dfn-proof-purpose
    pub proof_purpose: String,

    // See https://www.w3.org/TR/vc-data-integrity/#dfn-verification-method
    pub verification_method: String,

    // The date and time the proof was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    // The date and time that the proof expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,

    // One or more security domains in which the proof is meant to be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,

    // Used once for a particular domain and window of time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,

    // Multibase-encoded signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Domain {
    SingleString(String),
    SetOfString(Vec<String>),
}
