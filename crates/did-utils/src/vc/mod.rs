//! This module provides the [Verifiable Credentials (VCs)][vc] data model.
//!
//! [vc]: https://www.w3.org/TR/vc-data-model/

mod model;

pub use model::{CredentialSubject, Issuer, IssuerObject, VerifiableCredential};
