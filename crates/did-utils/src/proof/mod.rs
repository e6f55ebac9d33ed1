//! This module provides utilities for creating and verifying proofs.
//!
//! The only suite shipped is [`EdDsaJcs2022`]: proof options and document
//! are canonicalized with JCS, hashed separately with SHA-256, and the
//! concatenated hashes are signed with Ed25519.
//!
//! # Examples
//!
//! ```
//! use did_utils::{
//!     crypto::{Ed25519KeyPair, Generate},
//!     proof::{CryptoProof, EdDsaJcs2022, Proof},
//! };
//! use multibase::Base;
//! use serde_json::json;
//!
//! let key_pair = Ed25519KeyPair::new().unwrap();
//! let payload = json!({ "name": "Alice" });
//!
//! let prover = EdDsaJcs2022 {
//!     proof: Proof {
//!         proof_purpose: "assertionMethod".to_string(),
//!         verification_method: "did:example:issuer#key-1".to_string(),
//!         ..Default::default()
//!     },
//!     key_pair: key_pair.clone(),
//!     proof_value_codec: Some(Base::Base58Btc),
//! };
//! let proof = prover.proof(&payload).unwrap();
//!
//! let verifier = EdDsaJcs2022 {
//!     proof,
//!     key_pair: key_pair.to_public(),
//!     proof_value_codec: None,
//! };
//! assert!(verifier.verify(&payload).is_ok());
//! ```

mod eddsa_jcs_2022;
mod model;
mod traits;

// public re-exports
pub use eddsa_jcs_2022::{EdDsaJcs2022, CRYPRO_SUITE_EDDSA_JCS_2022, PROOF_TYPE_DATA_INTEGRITY_PROOF};
pub use model::{Domain, Proof};
pub use traits::CryptoProof;
