use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use did_utils::{
    ldmodel::Context,
    loader::{CREDENTIALS_V1_CONTEXT, OPEN_BADGES_V3_CONTEXT, W3ID_DATA_INTEGRITY_V2_CONTEXT},
    vc::{CredentialSubject, Issuer, IssuerObject, VerifiableCredential},
};
use serde_json::{json, Value};
use uuid::Uuid;

const BADGE_IMAGE: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTrJ20Y03jPHKxgQ2HXQ36tGm9u62u4pedvpA&s";

/// Claims of the Open Badge handed to workshop participants.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeTemplate {
    pub credential_name: String,
    pub issuer_name: String,
    pub issuer_url: String,
    pub issuer_image: String,
    pub achievement_type: String,
    pub achievement_name: String,
    pub achievement_description: String,
    pub criteria_narrative: String,
    pub achievement_image: String,
    pub participant_name: String,
    /// Time between issuance and expiration, `None` for no expiration.
    pub validity: Option<Duration>,
}

impl Default for BadgeTemplate {
    fn default() -> Self {
        Self {
            credential_name: "DevFest Mt Kenya SSI Workshop Attendance".to_string(),
            issuer_name: "DevFest Mt Kenya".to_string(),
            issuer_url: "https://gdg.community.dev/gdg-mt-kenya/".to_string(),
            issuer_image: BADGE_IMAGE.to_string(),
            achievement_type: "Workshop Attendance".to_string(),
            achievement_name: "SSI Technical Deep Dive Workshop".to_string(),
            achievement_description: "Successfully completed the Self-Sovereign Identity (SSI) Technical Deep Dive \
                Workshop at DevFest Mt Kenya 2024. This workshop covered DIDs, Verifiable Credentials, and hands-on \
                implementation of SSI solutions."
                .to_string(),
            criteria_narrative: "This credential was issued to an attendee who:\n\
                1. Participated in the full-day SSI Technical Workshop\n\
                2. Completed hands-on exercises with DIDs and VCs\n\
                3. Demonstrated understanding of SSI concepts through practical implementation"
                .to_string(),
            achievement_image: BADGE_IMAGE.to_string(),
            participant_name: "Alice Doe".to_string(),
            validity: Some(Duration::days(730)),
        }
    }
}

impl BadgeTemplate {
    /// Builds the unsigned credential awarding the badge to `holder_did`.
    pub fn build(&self, issuer_did: &str, holder_did: &str, issued_at: DateTime<Utc>) -> VerifiableCredential {
        let achievement = json!({
            "id": format!("urn:uuid:{}", Uuid::new_v4()),
            "type": ["Achievement"],
            "achievementType": self.achievement_type,
            "name": self.achievement_name,
            "description": self.achievement_description,
            "criteria": {
                "type": "Criteria",
                "narrative": self.criteria_narrative,
            },
            "image": {
                "id": self.achievement_image,
                "type": "Image",
            },
        });

        let subject = HashMap::from([
            ("type".to_string(), json!(["AchievementSubject"])),
            ("achievement".to_string(), achievement),
            ("name".to_string(), Value::String(self.participant_name.clone())),
        ]);

        VerifiableCredential {
            context: Context::SetOfString(vec![
                CREDENTIALS_V1_CONTEXT.to_string(),
                OPEN_BADGES_V3_CONTEXT.to_string(),
                W3ID_DATA_INTEGRITY_V2_CONTEXT.to_string(),
            ]),
            id: Some(format!("urn:uuid:{}", Uuid::new_v4())),
            cred_type: vec!["VerifiableCredential".to_string(), "OpenBadgeCredential".to_string()],
            name: Some(self.credential_name.clone()),
            description: None,
            issuer: Issuer::IssuerObject(IssuerObject {
                id: issuer_did.to_string(),
                issuer_type: Some(vec!["Profile".to_string()]),
                name: Some(self.issuer_name.clone()),
                url: Some(self.issuer_url.clone()),
                image: Some(Value::String(self.issuer_image.clone())),
                additional_properties: None,
            }),
            issuance_date: issued_at,
            expiration_date: self.validity.map(|validity| issued_at + validity),
            credential_subject: CredentialSubject {
                id: Some(holder_did.to_string()),
                additional_properties: Some(subject),
            },
            proof: None,
            additional_properties: None,
        }
    }
}
