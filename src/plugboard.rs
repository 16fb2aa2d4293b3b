//! Plugboard: disjoint letter-pair swaps on either side of the rotor stack.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::utils::alphabet::{Letter, ALPHABET_LEN};

/// Maximum number of pairs: every letter wired once.
pub const MAX_PAIRS: usize = ALPHABET_LEN / 2;

/// A validated set of disjoint letter pairs.
///
/// Letters that appear in a pair are swapped with their partner; all other
/// letters pass straight through. The pair set is fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(Letter, Letter)>,
}

impl Plugboard {
    /// Plugboard with no cables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a plugboard from two-letter entries such as `"AB"`.
    ///
    /// Entries are case-insensitive. Each entry must hold exactly two
    /// distinct letters, and no letter may appear in more than one entry.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPlugboardPair`] naming the first
    /// offending entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sim::Plugboard;
    ///
    /// let board = Plugboard::new(&["AB", "cd"]).unwrap();
    /// assert_eq!(board.len(), 2);
    ///
    /// assert!(Plugboard::new(&["AB", "BC"]).is_err());
    /// ```
    pub fn new(pairs: &[&str]) -> Result<Self, ConfigError> {
        let mut used = [false; ALPHABET_LEN];
        let mut parsed = Vec::with_capacity(pairs.len());

        for &entry in pairs {
            let invalid = || ConfigError::InvalidPlugboardPair(entry.to_string());
            let mut letters = entry
                .chars()
                .map(|c| Letter::from_char(c.to_ascii_uppercase()));
            let (a, b) = match (letters.next(), letters.next(), letters.next()) {
                (Some(Some(a)), Some(Some(b)), None) => (a, b),
                _ => return Err(invalid()),
            };
            if a == b || used[a.index()] || used[b.index()] {
                return Err(invalid());
            }
            used[a.index()] = true;
            used[b.index()] = true;
            parsed.push((a, b));
        }

        Ok(Plugboard { pairs: parsed })
    }

    /// Returns the partner of `c` if it is plugged, otherwise `c` itself.
    pub fn swap(&self, c: Letter) -> Letter {
        for &(a, b) in &self.pairs {
            if c == a {
                return b;
            }
            if c == b {
                return a;
            }
        }
        c
    }

    /// Configured pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (Letter, Letter)> + '_ {
        self.pairs.iter().copied()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no pairs are configured.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Parses a whitespace-separated pair list such as `"AB CD ef"`.
impl FromStr for Plugboard {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries: Vec<&str> = s.split_whitespace().collect();
        Plugboard::new(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_swap_is_symmetric() {
        let board = Plugboard::new(&["AB", "CD"]).unwrap();
        assert_eq!(board.swap(letter('A')), letter('B'));
        assert_eq!(board.swap(letter('B')), letter('A'));
        assert_eq!(board.swap(letter('D')), letter('C'));
        assert_eq!(board.swap(letter('E')), letter('E'));
    }

    #[test]
    fn test_empty_board_is_identity() {
        let board = Plugboard::empty();
        assert!(board.is_empty());
        for i in 0..ALPHABET_LEN {
            let c = Letter::from_index(i);
            assert_eq!(board.swap(c), c);
        }
    }

    #[test]
    fn test_lowercase_entries_accepted() {
        let board = Plugboard::new(&["qz"]).unwrap();
        assert_eq!(board.swap(letter('Q')), letter('Z'));
    }

    #[test]
    fn test_full_board() {
        let board = Plugboard::new(&[
            "AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST", "UV", "WX", "YZ",
        ])
        .unwrap();
        assert_eq!(board.len(), MAX_PAIRS);
        for i in 0..ALPHABET_LEN {
            assert_ne!(board.swap(Letter::from_index(i)), Letter::from_index(i));
        }
    }

    #[test]
    fn test_rejects_malformed_entries() {
        for bad in ["", "A", "ABC", "A1", "A ", "AA", "aA", "ÉA"] {
            assert_eq!(
                Plugboard::new(&[bad]),
                Err(ConfigError::InvalidPlugboardPair(bad.to_string())),
                "{:?} accepted",
                bad
            );
        }
    }

    #[test]
    fn test_rejects_reused_letter() {
        assert_eq!(
            Plugboard::new(&["AB", "CA"]),
            Err(ConfigError::InvalidPlugboardPair("CA".to_string()))
        );
        assert_eq!(
            Plugboard::new(&["AB", "ab"]),
            Err(ConfigError::InvalidPlugboardPair("ab".to_string()))
        );
    }

    #[test]
    fn test_from_str() {
        let board: Plugboard = "ab  CD\tef".parse().unwrap();
        let pairs: Vec<(char, char)> = board
            .pairs()
            .map(|(a, b)| (a.to_char(), b.to_char()))
            .collect();
        assert_eq!(pairs, vec![('A', 'B'), ('C', 'D'), ('E', 'F')]);

        let empty: Plugboard = "   ".parse().unwrap();
        assert!(empty.is_empty());

        assert!("AB BCD".parse::<Plugboard>().is_err());
    }
}
