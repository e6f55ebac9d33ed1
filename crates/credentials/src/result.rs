use did_utils::proof::Proof;
use serde::{Deserialize, Serialize};

/// Outcome of a credential verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub verified: bool,
    pub results: Vec<ProofResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<VerificationError>,
}

/// Outcome of checking a single proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofResult {
    pub proof: Proof,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationError {
    pub message: String,
    pub errors: Vec<String>,
}

impl VerificationResult {
    pub(crate) fn from_proof_results(results: Vec<ProofResult>) -> Self {
        let errors: Vec<String> = results.iter().filter_map(|result| result.error.clone()).collect();

        if results.is_empty() {
            return Self::failure("credential has no proof", vec![]);
        }

        if errors.is_empty() {
            Self {
                verified: true,
                results,
                error: None,
            }
        } else {
            Self {
                verified: false,
                results,
                error: Some(VerificationError {
                    message: "verification failed".to_string(),
                    errors,
                }),
            }
        }
    }

    pub(crate) fn failure(message: &str, errors: Vec<String>) -> Self {
        Self {
            verified: false,
            results: vec![],
            error: Some(VerificationError {
                message: message.to_string(),
                errors,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proof_result(error: Option<&str>) -> ProofResult {
        ProofResult {
            proof: Proof::default(),
            verified: error.is_none(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_aggregation() {
        let result = VerificationResult::from_proof_results(vec![proof_result(None)]);
        assert!(result.verified);
        assert!(result.error.is_none());

        let result = VerificationResult::from_proof_results(vec![proof_result(None), proof_result(Some("bad"))]);
        assert!(!result.verified);
        assert_eq!(result.error.unwrap().errors, vec!["bad"]);

        let result = VerificationResult::from_proof_results(vec![]);
        assert!(!result.verified);
        assert_eq!(result.error.unwrap().message, "credential has no proof");
    }

    #[test]
    fn test_serialization_skips_absent_error() {
        let json = serde_json::to_value(VerificationResult::from_proof_results(vec![proof_result(None)])).unwrap();

        assert_eq!(json["verified"], true);
        assert!(json.get("error").is_none());
        assert!(json["results"][0].get("error").is_none());
    }
}
