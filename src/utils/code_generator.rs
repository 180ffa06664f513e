//! Short code generation.

use rand::Rng;

/// Alphabet for generated codes: digits plus lowercase letters (base 36).
pub const CODE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 5;

/// Generates a random 5-character base-36 short code.
///
/// Uses the thread-local pseudo-random generator; this is not
/// cryptographically secure, and collisions are left to the store's
/// uniqueness check rather than retried here.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_code_has_expected_length() {
        assert_eq!(generate_code().len(), CODE_LENGTH);
    }

    #[test]
    fn test_generated_code_uses_base36_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.bytes().all(|b| CODE_ALPHABET.contains(&b)),
                "unexpected character in code '{}'",
                code
            );
        }
    }

    #[test]
    fn test_generated_codes_are_mostly_distinct() {
        let codes: HashSet<_> = (0..1000).map(|_| generate_code()).collect();
        // 36^5 values; 1000 draws colliding more than a handful of times
        // would indicate a broken generator.
        assert!(codes.len() > 990);
    }
}
