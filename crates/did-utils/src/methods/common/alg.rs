/// Supported cryptographic algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Ed25519,
    X25519,
}

use Algorithm::*;

// See:
// - https://w3c-ccg.github.io/did-method-key/#signature-method-creation-algorithm
// - https://w3c-ccg.github.io/did-method-key/#encryption-method-creation-algorithm
impl Algorithm {
    /// Returns the two-byte multicodec prefix associated with the algorithm.
    pub fn muticodec_prefix(&self) -> [u8; 2] {
        match self {
            Ed25519 => [0xed, 0x01],
            X25519 => [0xec, 0x01],
        }
    }

    /// Creates an `Algorithm` variant from the given multicodec prefix.
    pub fn from_muticodec_prefix(prefix: &[u8; 2]) -> Option<Self> {
        match prefix {
            [0xed, 0x01] => Some(Ed25519),
            [0xec, 0x01] => Some(X25519),
            _ => None,
        }
    }

    /// Returns the length of the public key for the algorithm.
    pub fn public_key_length(&self) -> usize {
        match self {
            Ed25519 => 32,
            X25519 => 32,
        }
    }
}
