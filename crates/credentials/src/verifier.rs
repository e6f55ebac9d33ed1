use std::sync::Arc;

use chrono::{DateTime, Utc};
use did_utils::{
    didcore::{Document, VerificationMethod},
    loader::{DocumentLoader, RemoteDocument},
    proof::{CryptoProof, EdDsaJcs2022, Proof, CRYPRO_SUITE_EDDSA_JCS_2022, PROOF_TYPE_DATA_INTEGRITY_PROOF},
    vc::VerifiableCredential,
};

use crate::{
    purpose::AssertionPurpose,
    result::{ProofResult, VerificationResult},
    Error, KeyPair,
};

/// Verifies credentials issued by a known signer.
pub struct CredentialVerifier {
    loader: Arc<dyn DocumentLoader>,
}

impl CredentialVerifier {
    pub fn new(loader: Arc<dyn DocumentLoader>) -> Self {
        Self { loader }
    }

    /// Verifies `credential` against the key of its expected signer.
    pub async fn verify(
        &self,
        credential: &VerifiableCredential,
        signer_key_pair: &KeyPair,
    ) -> Result<VerificationResult, Error> {
        self.verify_at(credential, signer_key_pair, Utc::now()).await
    }

    /// Verifies `credential` as of the given instant.
    ///
    /// Unresolvable documents are faults; every other failed check makes
    /// for a negative result.
    pub async fn verify_at(
        &self,
        credential: &VerifiableCredential,
        signer_key_pair: &KeyPair,
        now: DateTime<Utc>,
    ) -> Result<VerificationResult, Error> {
        for url in credential.context.urls() {
            self.loader.load(url).await?;
        }

        let Some(proof) = &credential.proof else {
            return Ok(VerificationResult::failure("credential has no proof", vec![]));
        };
        tracing::debug!(verification_method = %proof.verification_method, "verifying credential");

        let (method, controller_document) = self.resolve_verification_method(&proof.verification_method).await?;

        let verification_key = signer_key_pair.verification_key(&proof.verification_method, credential.issuer.id());
        let purpose = AssertionPurpose::for_key(signer_key_pair);

        let mut errors = vec![];

        if proof.proof_type != PROOF_TYPE_DATA_INTEGRITY_PROOF
            || proof.cryptosuite.as_deref() != Some(CRYPRO_SUITE_EDDSA_JCS_2022)
        {
            errors.push(format!(
                "unsupported proof type \"{}\" with cryptosuite {:?}",
                proof.proof_type, proof.cryptosuite
            ));
        }

        if let Err(reason) = purpose.validate(proof, &method, &controller_document) {
            errors.push(reason);
        }

        if credential.issuer.id() != method.controller {
            errors.push(format!(
                "credential issuer \"{}\" is not the verification method controller \"{}\"",
                credential.issuer.id(),
                method.controller
            ));
        }

        if !method
            .public_key_multibase
            .as_deref()
            .is_some_and(|public_key| verification_key.matches_public_key(public_key))
        {
            errors.push(format!(
                "verification key does not match verification method \"{}\"",
                method.id
            ));
        }

        if credential.is_expired_at(now) {
            errors.push("credential has expired".to_string());
        }

        if proof.created.is_some_and(|created| created > now) {
            errors.push("proof was created in the future".to_string());
        }

        if let Err(reason) = self.check_signature(credential, proof, &verification_key) {
            errors.push(reason);
        }

        let verified = errors.is_empty();
        tracing::info!(verified, credential = credential.id.as_deref().unwrap_or_default(), "verified credential");

        Ok(VerificationResult::from_proof_results(vec![ProofResult {
            proof: proof.clone(),
            verified,
            error: (!verified).then(|| errors.join("; ")),
        }]))
    }

    async fn resolve_verification_method(&self, key_id: &str) -> Result<(VerificationMethod, Document), Error> {
        let RemoteDocument::VerificationMethod(method) = self.loader.load(key_id).await? else {
            return Err(Error::MalformedCredential(format!(
                "\"{key_id}\" does not designate a verification method"
            )));
        };

        let RemoteDocument::Did(controller_document) = self.loader.load(&method.controller).await? else {
            return Err(Error::MalformedCredential(format!(
                "controller \"{}\" does not designate a DID document",
                method.controller
            )));
        };

        Ok((method, controller_document))
    }

    fn check_signature(
        &self,
        credential: &VerifiableCredential,
        proof: &Proof,
        verification_key: &KeyPair,
    ) -> Result<(), String> {
        let payload = serde_json::to_value(credential.unsecured()).map_err(|err| err.to_string())?;

        let verifier = EdDsaJcs2022 {
            proof: proof.clone(),
            key_pair: verification_key.ed25519().clone(),
            proof_value_codec: None,
        };

        verifier
            .verify(&payload)
            .map_err(|err| format!("signature verification failed: {err}"))
    }
}
