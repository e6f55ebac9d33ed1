//! Issuance and verification of Open Badge credentials between `did:key`
//! identities.
//!
//! Issuer and verifier share one [`DocumentLoader`](did_utils::loader::DocumentLoader),
//! through which contexts, verification methods and controller documents are
//! resolved on both sides.

mod error;
mod issuer;
mod keys;
mod purpose;
mod result;
mod template;
mod verifier;

pub use error::Error;
pub use issuer::CredentialIssuer;
pub use keys::{generate_key_pair, ExportedKey, KeyPair, KEY_TYPE};
pub use purpose::{AssertionPurpose, ASSERTION_METHOD};
pub use result::{ProofResult, VerificationError, VerificationResult};
pub use template::BadgeTemplate;
pub use verifier::CredentialVerifier;
