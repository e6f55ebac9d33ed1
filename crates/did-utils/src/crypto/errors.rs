use thiserror::Error;

/// The set of errors that can occur during key operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Can not retrieve signature
    #[error("can not retrieve signature")]
    CanNotRetrieveSignature,
    /// Entropy source failure
    #[error("entropy source failure: {0}")]
    Entropy(String),
    /// Invalid key length
    #[error("invalid key length")]
    InvalidKeyLength,
    /// Invalid secret key
    #[error("invalid secret key")]
    InvalidSecretKey,
    /// Invalid seed
    #[error("invalid seed")]
    InvalidSeed,
    /// Invalid public key
    #[error("invalid public key")]
    InvalidPublicKey,
    /// Error while signing
    #[error("error while signing")]
    SignatureError,
    /// Error while verifying
    #[error("signature verification failed")]
    VerificationError,
    /// Invalid proof
    #[error("invalid proof")]
    InvalidProof,
    /// Invalid call
    #[error("invalid call: {0}")]
    InvalidCall(String),
}
