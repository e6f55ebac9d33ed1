/*! # did-utils

This library provides the building blocks of a `did:key` based credential flow.
It includes Ed25519 key handling, DID core documents, `did:key` expansion,
a document loader backed by bundled JSON-LD contexts, Data Integrity proofs
and the Verifiable Credential data model.

## Features

- **Cryptographic Operations**: Ed25519 key generation, signing and verification, with X25519 key agreement derivation.
- **DID Support**: `did:key` generation and resolution into DID documents, without any registry lookup.
- **Document Loading**: a single loader resolving both DIDs and context URLs, shared by issuance and verification.
- **Verifiable Credentials**: the credential model and the `eddsa-jcs-2022` proof suite.

*/
pub mod crypto;
pub mod didcore;
pub mod ldmodel;
pub mod loader;
pub mod methods;
pub mod proof;
pub mod vc;
