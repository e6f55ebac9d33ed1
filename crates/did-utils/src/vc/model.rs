use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ldmodel::Context, proof::Proof};

/// Represents a Verifiable Credential.
///
/// Follows the v1.1 data model, where validity is expressed with
/// `issuanceDate` and `expirationDate`.
///
/// See https://www.w3.org/TR/vc-data-model/
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredential {
    #[serde(rename = "@context")]
    pub context: Context,

    // Identifier of this credential.
    // WARNING: This is not the identifier of the subject of the credential.
    // WARNING: This is not the identifier of the holder of the credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // see https://www.w3.org/TR/vc-data-model/#types
    #[serde(rename = "type")]
    pub cred_type: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // see https://www.w3.org/TR/vc-data-model/#issuer
    pub issuer: Issuer,

    // see https://www.w3.org/TR/vc-data-model/#issuance-date
    pub issuance_date: DateTime<Utc>,

    // see https://www.w3.org/TR/vc-data-model/#expiration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,

    // See https://www.w3.org/TR/vc-data-model/#credential-subject
    pub credential_subject: CredentialSubject,

    // We allow a vc to be created without the proof block,
    // as the unsecured version is produced before proof production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Proof>,

    // === Properties Map===
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub additional_properties: Option<HashMap<String, Value>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Issuer {
    SingleString(String),
    IssuerObject(IssuerObject),
}

/// Issuer profile, as embedded in Open Badges credentials.
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
pub struct IssuerObject {
    pub id: String,

    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_type: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,

    // === Properties Map===
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub additional_properties: Option<HashMap<String, Value>>,
}

impl Issuer {
    /// Identifier of the issuer, whatever the shape it is expressed with.
    pub fn id(&self) -> &str {
        match self {
            Issuer::SingleString(id) => id,
            Issuer::IssuerObject(profile) => &profile.id,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSubject {
    // Identifies the subject of the verifiable credential
    // (the thing the claims are about), usually a DID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // === Properties Map===
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub additional_properties: Option<HashMap<String, Value>>,
}

impl VerifiableCredential {
    /// Returns a copy of the credential with its proof removed.
    pub fn unsecured(&self) -> VerifiableCredential {
        VerifiableCredential {
            proof: None,
            ..self.clone()
        }
    }

    /// Tells whether the credential is expired at the given instant.
    ///
    /// A credential without expiration date never expires.
    pub fn is_expired_at(&self, instant: DateTime<Utc>) -> bool {
        self.expiration_date.map_or(false, |expiration| expiration < instant)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn credential() -> VerifiableCredential {
        serde_json::from_str(include_str!("../../test_resources/open_badge_credential.json")).unwrap()
    }

    #[test]
    fn test_deserialize_open_badge_credential() {
        let vc = credential();

        assert_eq!(vc.cred_type, vec!["VerifiableCredential", "OpenBadgeCredential"]);
        assert_eq!(vc.issuer.id(), "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK");
        assert_eq!(
            vc.credential_subject.id.as_deref(),
            Some("did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp")
        );

        let subject = vc.credential_subject.additional_properties.as_ref().unwrap();
        assert_eq!(subject["name"], "Alice Doe");
        assert_eq!(subject["achievement"]["achievementType"], "Workshop Attendance");
        assert!(vc.proof.is_none());
    }

    #[test]
    fn test_serialization_preserves_credential() {
        let raw: Value = serde_json::from_str(include_str!("../../test_resources/open_badge_credential.json")).unwrap();
        let reserialized = serde_json::to_value(credential()).unwrap();

        assert_eq!(
            json_canon::to_string(&raw).unwrap(),
            json_canon::to_string(&reserialized).unwrap()
        );
    }

    #[test]
    fn test_issuer_profile_keeps_unmodeled_fields() {
        let issuer: Issuer = serde_json::from_str(
            r#"{"id": "did:example:issuer", "type": ["Profile"], "email": "badges@example.org"}"#,
        )
        .unwrap();

        let Issuer::IssuerObject(profile) = &issuer else {
            panic!("expected an issuer profile");
        };
        assert_eq!(profile.additional_properties.as_ref().unwrap()["email"], "badges@example.org");
        assert_eq!(serde_json::to_value(&issuer).unwrap()["email"], "badges@example.org");
    }

    #[test]
    fn test_issuer_as_plain_string() {
        let issuer: Issuer = serde_json::from_str(r#""did:example:issuer""#).unwrap();
        assert_eq!(issuer.id(), "did:example:issuer");
    }

    #[test]
    fn test_expiration() {
        let vc = credential();

        assert!(!vc.is_expired_at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
        assert!(vc.is_expired_at(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()));

        let vc = VerifiableCredential {
            expiration_date: None,
            ..vc
        };
        assert!(!vc.is_expired_at(Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap()));
    }
}
