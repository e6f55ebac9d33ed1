use did_utils::{crypto::Error as CryptoError, loader::LoaderError, methods::DecodeMultikeyError};
use serde_json::Value;

/// Faults raised while issuing or verifying a credential.
///
/// A credential that simply fails verification is not a fault, it is
/// reported through a negative [`VerificationResult`](crate::VerificationResult).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("key generation failed: {0}")]
    KeyGeneration(#[source] CryptoError),
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(#[source] DecodeMultikeyError),
    #[error(transparent)]
    Resolution(#[from] LoaderError),
    #[error("{message}")]
    Signing { message: String, details: Option<Value> },
    #[error("malformed credential: {0}")]
    MalformedCredential(String),
}

impl Error {
    pub(crate) fn signing(message: impl Into<String>, details: Value) -> Self {
        Error::Signing {
            message: message.into(),
            details: Some(details),
        }
    }

    /// Structured details attached to the error, if any.
    pub fn details(&self) -> Option<&Value> {
        match self {
            Error::Signing { details, .. } => details.as_ref(),
            _ => None,
        }
    }
}
