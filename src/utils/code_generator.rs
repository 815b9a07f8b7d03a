//! Random short code generation.
//!
//! Codes are drawn from a 57-character alphabet without look-alike symbols
//! (`0`, `1`, `I`, `O`, `l` are excluded).

use rand::Rng;

/// Length of generated codes.
pub const CODE_LENGTH: usize = 7;

/// Unambiguous alphanumerics.
pub const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// Uniqueness is not guaranteed here; the caller checks the store and retries.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_size_and_uniqueness() {
        assert_eq!(ALPHABET.len(), 57);
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), ALPHABET.len());
    }

    #[test]
    fn test_alphabet_excludes_ambiguous() {
        for c in [b'0', b'1', b'I', b'O', b'l'] {
            assert!(!ALPHABET.contains(&c));
        }
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        assert_eq!(codes.len(), 1000);
    }
}
