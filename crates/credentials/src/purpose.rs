use did_utils::{
    didcore::{Document, VerificationMethod},
    proof::Proof,
};

use crate::KeyPair;

/// Proof purpose term for credential issuance.
pub const ASSERTION_METHOD: &str = "assertionMethod";

/// The assertion proof purpose, bound to an expected controller.
///
/// A proof satisfies it when it is made for `assertionMethod` with a key
/// the controller lists among its assertion methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionPurpose {
    pub controller: String,
    pub assertion_method: Vec<String>,
}

impl AssertionPurpose {
    /// Expects proofs made with the given key on behalf of its controller.
    pub fn for_key(key_pair: &KeyPair) -> Self {
        Self {
            controller: key_pair.controller().to_string(),
            assertion_method: vec![key_pair.id().to_string()],
        }
    }

    /// Checks a proof against this purpose.
    ///
    /// `method` is the resolved verification method of the proof and
    /// `controller_document` the resolved document of its controller.
    pub fn validate(
        &self,
        proof: &Proof,
        method: &VerificationMethod,
        controller_document: &Document,
    ) -> Result<(), String> {
        if proof.proof_purpose != ASSERTION_METHOD {
            return Err(format!(
                "proof purpose \"{}\" does not match \"{ASSERTION_METHOD}\"",
                proof.proof_purpose
            ));
        }

        if method.controller != self.controller || controller_document.id != self.controller {
            return Err(format!(
                "verification method controller \"{}\" is not the expected controller \"{}\"",
                method.controller, self.controller
            ));
        }

        if !self.assertion_method.contains(&method.id) {
            return Err(format!(
                "verification method \"{}\" is not authorized by the expected controller",
                method.id
            ));
        }

        if !controller_document.is_assertion_method(&method.id) {
            return Err(format!(
                "verification method \"{}\" is not an assertion method of \"{}\"",
                method.id, controller_document.id
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use did_utils::methods::DidKey;

    use super::*;

    fn fixtures() -> (KeyPair, VerificationMethod, Document) {
        let key_pair = KeyPair::from_seed(b"Sample seed bytes of thirtytwo!b").unwrap();
        let document = DidKey::new().expand(key_pair.controller()).unwrap();
        let method = document.find_verification_method(key_pair.id()).cloned().unwrap();

        (key_pair, method, document)
    }

    fn proof(key_pair: &KeyPair, purpose: &str) -> Proof {
        Proof {
            proof_type: "DataIntegrityProof".to_string(),
            proof_purpose: purpose.to_string(),
            verification_method: key_pair.id().to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_assertion_by_expected_key() {
        let (key_pair, method, document) = fixtures();
        let purpose = AssertionPurpose::for_key(&key_pair);

        assert_eq!(purpose.validate(&proof(&key_pair, ASSERTION_METHOD), &method, &document), Ok(()));
    }

    #[test]
    fn test_validate_rejects_other_purpose() {
        let (key_pair, method, document) = fixtures();
        let purpose = AssertionPurpose::for_key(&key_pair);

        assert!(purpose
            .validate(&proof(&key_pair, "authentication"), &method, &document)
            .is_err());
    }

    #[test]
    fn test_validate_rejects_foreign_controller() {
        let (key_pair, method, document) = fixtures();
        let other = KeyPair::generate().unwrap();
        let purpose = AssertionPurpose::for_key(&other);

        let err = purpose
            .validate(&proof(&key_pair, ASSERTION_METHOD), &method, &document)
            .unwrap_err();
        assert!(err.contains("expected controller"));
    }

    #[test]
    fn test_validate_rejects_method_missing_from_controller_document() {
        let (key_pair, method, mut document) = fixtures();
        document.assertion_method = None;

        let purpose = AssertionPurpose::for_key(&key_pair);
        let err = purpose
            .validate(&proof(&key_pair, ASSERTION_METHOD), &method, &document)
            .unwrap_err();
        assert!(err.contains("not an assertion method"));
    }
}
