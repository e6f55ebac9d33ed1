use serde_json::Value;

use crate::crypto::Error;

use super::model::Proof;

/// A trait to be implemented by every crypto suite
pub trait CryptoProof {
    /// Creates the proof value and adds it to the proof object.
    ///
    /// The payload is the data to be signed without any proof entry.
    ///
    /// Returns the proof object with the proof value added.
    fn proof(&self, payload: &Value) -> Result<Proof, Error>;

    /// Verifies that this proof authenticates the payload.
    ///
    /// A `proof` entry found at the top level of the payload is ignored.
    fn verify(&self, payload: &Value) -> Result<(), Error>;
}
