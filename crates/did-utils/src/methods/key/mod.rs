//! The did:key method is a non-registry approach to DID Methods based on expanding
//! a cryptographic public key into a DID Document.
//!
//! See https://w3c-ccg.github.io/did-method-key

mod method;
mod resolver;

pub use method::DidKey;
