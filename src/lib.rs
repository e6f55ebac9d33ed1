//! Trust-triangle walkthrough: an issuer hands a workshop badge to a holder,
//! and the credential is then verified on behalf of a third party.

pub mod config;
mod narrative;

use std::sync::Arc;

use credentials::{generate_key_pair, CredentialIssuer, CredentialVerifier, Error, KeyPair, VerificationResult};
use did_utils::{
    loader::{DefaultDocumentLoader, DocumentLoader},
    methods::{DidKey, PublicKeyFormat},
    vc::VerifiableCredential,
};

pub use config::{ConfigError, DemoConfig};

/// Everything produced by one run of the walkthrough.
#[derive(Debug)]
pub struct DemoOutcome {
    pub issuer: KeyPair,
    pub holder: KeyPair,
    /// Only generated for the narrative, verification does not use it.
    pub verifier: Option<KeyPair>,
    pub credential: VerifiableCredential,
    pub result: VerificationResult,
}

/// Loader shared by issuer and verifier.
///
/// Verification methods are expanded as `Ed25519VerificationKey2020`, the
/// key type the participants' key pairs carry.
pub fn document_loader() -> Arc<dyn DocumentLoader> {
    let driver = DidKey::new_full(PublicKeyFormat::Ed25519VerificationKey2020, true);
    Arc::new(DefaultDocumentLoader::new(driver))
}

/// Runs the walkthrough, narrating each step on stdout.
///
/// A credential that fails verification is part of the outcome; only
/// operational faults are returned as errors.
pub async fn run_demo(config: &DemoConfig) -> Result<DemoOutcome, Error> {
    let loader = document_loader();
    let issuer = CredentialIssuer::new(loader.clone(), config.badge_template());
    let verifier = CredentialVerifier::new(loader);

    narrative::start();

    narrative::party("ISSUER", &format!("({})", config.issuer_name));
    let issuer_key_pair = generate_key_pair("issuer")?;
    narrative::key_pair("issuer", &issuer_key_pair)?;

    narrative::party("HOLDER", "(Workshop Participant)");
    let holder_key_pair = generate_key_pair("holder")?;
    narrative::key_pair("holder", &holder_key_pair)?;

    let verifier_key_pair = if config.generate_verifier_keys {
        narrative::party("VERIFIER", "(Third Party)");
        let key_pair = generate_key_pair("verifier")?;
        narrative::key_pair("verifier", &key_pair)?;
        Some(key_pair)
    } else {
        None
    };

    narrative::issuing();
    let unsigned = issuer.build_credential(&issuer_key_pair, holder_key_pair.controller());
    narrative::credential_before_issuing(&unsigned);

    let credential = issuer.sign(unsigned, &issuer_key_pair).await?;
    if let Some(proof) = &credential.proof {
        narrative::issued_proof(proof);
    }
    narrative::issued(&credential);

    narrative::verifying(&credential);
    let result = verifier.verify(&credential, &issuer_key_pair).await?;

    if result.verified {
        narrative::verified(&result, config);
    } else {
        narrative::rejected(&result);
    }

    Ok(DemoOutcome {
        issuer: issuer_key_pair,
        holder: holder_key_pair,
        verifier: verifier_key_pair,
        credential,
        result,
    })
}
