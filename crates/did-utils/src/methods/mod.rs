mod common;
mod errors;
mod key;
mod traits;
mod utils;

pub use common::{
    decode_ed25519_private_multikey, decode_multikey, ed25519_private_multikey, Algorithm, DecodeMultikeyError,
    PublicKeyFormat, ToMultikey,
};
pub use errors::DIDResolutionError;
pub use key::DidKey;
pub use traits::{Content, DIDResolver};
pub use utils::parse_did_url;
