use super::{errors::Error, traits::BYTES_LENGTH_32};

// Generate a seed from an optional initial seed.
// If the initial seed is empty, draw a random seed from the OS.
pub(super) fn generate_seed(initial_seed: &[u8]) -> Result<[u8; BYTES_LENGTH_32], Error> {
    if initial_seed.is_empty() {
        let mut seed = [0u8; BYTES_LENGTH_32];
        getrandom::getrandom(&mut seed).map_err(|err| Error::Entropy(err.to_string()))?;
        return Ok(seed);
    }

    initial_seed.try_into().map_err(|_| Error::InvalidSeed)
}

// Clone a slice into an array.
pub(super) fn clone_slice_to_array(slice: &[u8; BYTES_LENGTH_32]) -> [u8; BYTES_LENGTH_32] {
    let mut array = [0u8; BYTES_LENGTH_32];
    array.clone_from_slice(slice);
    array
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_seed_with_valid_initial_seed() {
        let seed = [7u8; BYTES_LENGTH_32];
        let generated_seed = generate_seed(&seed).unwrap();
        assert_eq!(seed, generated_seed);
    }

    #[test]
    fn test_generate_seed_without_initial_seed_is_random() {
        let first = generate_seed(&[]).unwrap();
        let second = generate_seed(&[]).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_generate_seed_with_wrong_size_is_rejected() {
        let err = generate_seed(&[1, 2, 3]).unwrap_err();
        assert_eq!(err, Error::InvalidSeed);
    }

    #[test]
    fn test_clone_slice_to_array() {
        let slice = [1u8; BYTES_LENGTH_32];
        let array = clone_slice_to_array(&slice);
        assert_eq!(slice, array);
    }
}
