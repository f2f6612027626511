//! SHA-1 digest helper for validation-code derivation.

use sha1::{Digest, Sha1};

/// SHA-1 of `message`'s UTF-8 bytes, rendered as 40 lowercase hex characters.
///
/// Pure and deterministic; the sole source of pseudo-randomness for the
/// validation code.
pub fn sha1_hex(message: &str) -> String {
    hex::encode(Sha1::digest(message.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector_empty_string() {
        assert_eq!(sha1_hex(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn known_vector_test() {
        assert_eq!(sha1_hex("test"), "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3");
    }

    #[test]
    fn output_is_40_lowercase_hex_chars() {
        let digest = sha1_hex("any input");
        assert_eq!(digest.len(), 40);
        assert!(digest
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(sha1_hex("input1"), sha1_hex("input2"));
    }

    #[test]
    fn same_input_is_stable() {
        assert_eq!(sha1_hex("same input"), sha1_hex("same input"));
    }
}
