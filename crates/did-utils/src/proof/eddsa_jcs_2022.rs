use multibase::Base;
use serde_json::Value;

use crate::crypto::{sha256_hash, CoreSign, Ed25519KeyPair, Error};

use super::{model::Proof, traits::CryptoProof};

pub const CRYPRO_SUITE_EDDSA_JCS_2022: &str = "eddsa-jcs-2022";
pub const PROOF_TYPE_DATA_INTEGRITY_PROOF: &str = "DataIntegrityProof";

/// The `eddsa-jcs-2022` Data Integrity suite.
///
/// See https://www.w3.org/TR/vc-di-eddsa/#eddsa-jcs-2022
pub struct EdDsaJcs2022 {
    /// The proof object
    ///
    /// In a proof creation process, it does not contain the proof value, but
    ///   carries info like the purpose and the verification method.
    ///
    /// In a proof verification process, it contains the proof as found in the
    ///   secured document, including the proof value
    pub proof: Proof,

    /// The keypair used to create the proof, in which case the signing key must be present,
    /// or to verify it, in which case only the public key is needed.
    ///
    /// This module does not perform resolution of the verification method.
    pub key_pair: Ed25519KeyPair,

    /// The proof value codec, only needed for proof creation.
    ///
    /// For the decoding, codec is automaticaly infered from the string.
    pub proof_value_codec: Option<Base>,
}

impl EdDsaJcs2022 {
    // Proof options are the proof without its value, with suite fields pinned.
    fn proof_options(&self) -> Proof {
        Proof {
            proof_type: PROOF_TYPE_DATA_INTEGRITY_PROOF.to_string(),
            cryptosuite: Some(CRYPRO_SUITE_EDDSA_JCS_2022.to_string()),
            proof_value: None,
            ..self.proof.clone()
        }
    }

    // SHA-256 of the canonical proof options followed by SHA-256 of the canonical document.
    fn hash_data(proof_options: &Proof, document: &Value) -> Result<Vec<u8>, Error> {
        let canon_proof = json_canon::to_string(proof_options).map_err(|_| Error::InvalidProof)?;
        let canon_doc = json_canon::to_string(document).map_err(|_| Error::InvalidProof)?;

        Ok([sha256_hash(canon_proof.as_bytes()), sha256_hash(canon_doc.as_bytes())].concat())
    }
}

impl CryptoProof for EdDsaJcs2022 {
    fn proof(&self, payload: &Value) -> Result<Proof, Error> {
        let codec = self
            .proof_value_codec
            .ok_or_else(|| Error::InvalidCall("proof_value_codec must be set for proof creation".to_string()))?;

        let mut proof_options = self.proof_options();
        proof_options.created.get_or_insert_with(chrono::Utc::now);

        let hash = Self::hash_data(&proof_options, payload)?;
        let signature = self.key_pair.sign(&hash)?;

        Ok(Proof {
            proof_value: Some(multibase::encode(codec, signature)),
            ..proof_options
        })
    }

    fn verify(&self, payload: &Value) -> Result<(), Error> {
        let proof_value = self.proof.proof_value.as_ref().ok_or(Error::InvalidProof)?;

        if self.proof.proof_type != PROOF_TYPE_DATA_INTEGRITY_PROOF
            || self.proof.cryptosuite.as_deref() != Some(CRYPRO_SUITE_EDDSA_JCS_2022)
        {
            return Err(Error::InvalidProof);
        }

        // Strip the proof from the payload if any.
        let mut naked_payload = payload.clone();
        if let Some(object) = naked_payload.as_object_mut() {
            object.remove("proof");
        }

        let hash = Self::hash_data(&self.proof_options(), &naked_payload)?;
        let (_, signature) = multibase::decode(proof_value).map_err(|_| Error::InvalidProof)?;

        self.key_pair.verify(&hash, &signature)
    }
}
