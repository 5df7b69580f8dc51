//! Opaque identifier tokens for conversations and messages.
//!
//! Tokens look like `k3j9x0qa-7b2m`: two groups of lowercase ASCII letters and
//! digits (8 and 4 characters) joined by a dash, 36^12 possible values.

use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const GROUPS: [usize; 2] = [8, 4];

/// Mint a new random identifier token.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let mut out = String::with_capacity(GROUPS.iter().sum::<usize>() + GROUPS.len() - 1);
    for (i, len) in GROUPS.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        for _ in 0..*len {
            let idx = rng.random_range(0..ALPHABET.len());
            out.push(ALPHABET[idx] as char);
        }
    }
    out
}

/// Treat `None`, empty, and whitespace-only identifiers as absent.
pub fn non_blank(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), 13);
        let (head, tail) = id.split_once('-').unwrap();
        assert_eq!(head.len(), 8);
        assert_eq!(tail.len(), 4);
        assert!(
            id.chars()
                .all(|c| c == '-' || c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn test_generate_id_is_low_collision() {
        let ids: HashSet<String> = (0..1_000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" abc ")), Some("abc"));
    }
}
