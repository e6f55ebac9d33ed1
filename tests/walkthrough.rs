use credentials::{CredentialIssuer, CredentialVerifier, KeyPair};
use did_utils::loader::{DocumentLoader, RemoteDocument};
use trust_triangle::{document_loader, run_demo, DemoConfig};

#[tokio::test]
async fn test_walkthrough_verifies_with_issuer_key() {
    let outcome = run_demo(&DemoConfig::default()).await.unwrap();

    assert!(outcome.result.verified, "{:?}", outcome.result);
    assert!(outcome.verifier.is_some());

    let credential = &outcome.credential;
    assert_eq!(credential.issuer.id(), outcome.issuer.controller());
    assert_eq!(credential.credential_subject.id.as_deref(), Some(outcome.holder.controller()));
    assert_eq!(
        credential.proof.as_ref().map(|proof| proof.verification_method.as_str()),
        Some(outcome.issuer.id())
    );
}

#[tokio::test]
async fn test_walkthrough_without_verifier_keys_or_expiration() {
    let config = DemoConfig {
        generate_verifier_keys: false,
        validity_days: None,
        participant_name: "Bob Kamau".to_string(),
        ..Default::default()
    };

    let outcome = run_demo(&config).await.unwrap();

    assert!(outcome.result.verified);
    assert!(outcome.verifier.is_none());
    assert!(outcome.credential.expiration_date.is_none());

    let subject = serde_json::to_value(&outcome.credential.credential_subject).unwrap();
    assert_eq!(subject["name"], "Bob Kamau");
}

#[tokio::test]
async fn test_holder_key_does_not_verify_issued_credential() {
    let loader = document_loader();
    let issuer = CredentialIssuer::new(loader.clone(), DemoConfig::default().badge_template());
    let verifier = CredentialVerifier::new(loader);

    let issuer_key_pair = KeyPair::generate().unwrap();
    let holder_key_pair = KeyPair::generate().unwrap();

    let credential = issuer.issue(&issuer_key_pair, holder_key_pair.controller()).await.unwrap();

    let result = verifier.verify(&credential, &issuer_key_pair).await.unwrap();
    assert!(result.verified);

    let result = verifier.verify(&credential, &holder_key_pair).await.unwrap();
    assert!(!result.verified);
    assert!(result.error.is_some());
}

#[tokio::test]
async fn test_issuer_did_resolves_identically_twice() {
    let loader = document_loader();
    let issuer_key_pair = KeyPair::generate().unwrap();

    let first = loader.load(issuer_key_pair.controller()).await.unwrap();
    let second = loader.load(issuer_key_pair.controller()).await.unwrap();
    assert_eq!(first, second);

    let RemoteDocument::Did(document) = first else {
        panic!("expected a DID document");
    };
    assert_eq!(document.id, issuer_key_pair.controller());
}
