use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use did_utils::{
    didcore::{Document, VerificationMethod},
    loader::{DocumentLoader, RemoteDocument},
    proof::{CryptoProof, EdDsaJcs2022, Proof, CRYPRO_SUITE_EDDSA_JCS_2022, PROOF_TYPE_DATA_INTEGRITY_PROOF},
    vc::VerifiableCredential,
};
use multibase::Base;
use serde_json::json;

use crate::{
    purpose::{AssertionPurpose, ASSERTION_METHOD},
    BadgeTemplate, Error, KeyPair,
};

/// Issues badge credentials signed with `eddsa-jcs-2022`.
pub struct CredentialIssuer {
    loader: Arc<dyn DocumentLoader>,
    template: BadgeTemplate,
}

impl CredentialIssuer {
    pub fn new(loader: Arc<dyn DocumentLoader>, template: BadgeTemplate) -> Self {
        Self { loader, template }
    }

    pub fn template(&self) -> &BadgeTemplate {
        &self.template
    }

    /// Builds the unsigned credential, issued now.
    pub fn build_credential(&self, issuer_key_pair: &KeyPair, holder_did: &str) -> VerifiableCredential {
        let issued_at = Utc::now().trunc_subsecs(0);
        self.template.build(issuer_key_pair.controller(), holder_did, issued_at)
    }

    /// Issues a badge credential to `holder_did`.
    pub async fn issue(&self, issuer_key_pair: &KeyPair, holder_did: &str) -> Result<VerifiableCredential, Error> {
        let credential = self.build_credential(issuer_key_pair, holder_did);
        self.sign(credential, issuer_key_pair).await
    }

    /// Attaches an assertion proof made with `issuer_key_pair`.
    pub async fn sign(
        &self,
        credential: VerifiableCredential,
        issuer_key_pair: &KeyPair,
    ) -> Result<VerifiableCredential, Error> {
        if !issuer_key_pair.can_sign() {
            return Err(Error::signing(
                "issuer key pair has no private key",
                json!({ "keyId": issuer_key_pair.id() }),
            ));
        }

        if credential.issuer.id() != issuer_key_pair.controller() {
            return Err(Error::signing(
                "credential issuer does not match the signing key controller",
                json!({ "issuer": credential.issuer.id(), "controller": issuer_key_pair.controller() }),
            ));
        }

        for url in credential.context.urls() {
            self.loader.load(url).await?;
        }

        let proof_options = Proof {
            proof_type: PROOF_TYPE_DATA_INTEGRITY_PROOF.to_string(),
            cryptosuite: Some(CRYPRO_SUITE_EDDSA_JCS_2022.to_string()),
            proof_purpose: ASSERTION_METHOD.to_string(),
            verification_method: issuer_key_pair.id().to_string(),
            created: Some(credential.issuance_date),
            ..Default::default()
        };

        let (method, controller_document) = self.resolve_signer(issuer_key_pair).await?;
        AssertionPurpose::for_key(issuer_key_pair)
            .validate(&proof_options, &method, &controller_document)
            .map_err(|reason| {
                Error::signing(
                    "signing key is not authorized for assertions",
                    json!({ "keyId": issuer_key_pair.id(), "reason": reason }),
                )
            })?;

        let payload = serde_json::to_value(credential.unsecured())
            .map_err(|err| Error::MalformedCredential(err.to_string()))?;

        let prover = EdDsaJcs2022 {
            proof: proof_options,
            key_pair: issuer_key_pair.ed25519().clone(),
            proof_value_codec: Some(Base::Base58Btc),
        };

        let proof = prover.proof(&payload).map_err(|err| {
            Error::signing(
                "failed to sign credential",
                json!({ "keyId": issuer_key_pair.id(), "reason": err.to_string() }),
            )
        })?;

        tracing::info!(
            credential = credential.id.as_deref().unwrap_or_default(),
            issuer = issuer_key_pair.controller(),
            "issued credential"
        );

        Ok(VerifiableCredential {
            proof: Some(proof),
            ..credential
        })
    }

    async fn resolve_signer(&self, issuer_key_pair: &KeyPair) -> Result<(VerificationMethod, Document), Error> {
        let method = match self.loader.load(issuer_key_pair.id()).await? {
            RemoteDocument::VerificationMethod(method) => method,
            _ => {
                return Err(Error::signing(
                    "signing key does not designate a verification method",
                    json!({ "keyId": issuer_key_pair.id() }),
                ))
            }
        };

        let controller_document = match self.loader.load(&method.controller).await? {
            RemoteDocument::Did(document) => document,
            _ => {
                return Err(Error::signing(
                    "signing key controller is not a DID",
                    json!({ "controller": method.controller }),
                ))
            }
        };

        Ok((method, controller_document))
    }
}
