//! Fixed 26-letter alphabet and modulo-26 index arithmetic.
//!
//! Every substitution in the machine works on alphabet indices rather than
//! characters. [`Letter`] is the only way a character enters the signal
//! path, so once a value is a `Letter` it is guaranteed to be in range.

use std::fmt;

/// Number of symbols in the machine alphabet.
pub(crate) const ALPHABET_LEN: usize = 26;

/// The machine alphabet in index order.
pub(crate) const ALPHABET: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Reduces `n` modulo 26 into the range `0..26`.
///
/// Uses Euclidean remainder, so negative offsets (position minus ring
/// setting, for example) wrap to the top of the alphabet.
///
/// # Parameters
/// - `n`: Any signed offset.
///
/// # Returns
/// An index in `0..26`.
pub(crate) fn wrap(n: i32) -> usize {
    n.rem_euclid(ALPHABET_LEN as i32) as usize
}

/// A single letter of the machine alphabet, stored as its index (A = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Converts an uppercase ASCII letter into a `Letter`.
    ///
    /// Lowercase letters, digits, punctuation and non-ASCII characters all
    /// return `None`; callers uppercase their input first.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sim::Letter;
    ///
    /// assert_eq!(Letter::from_char('C').map(|l| l.index()), Some(2));
    /// assert!(Letter::from_char('c').is_none());
    /// assert!(Letter::from_char(' ').is_none());
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    /// Builds a letter from an index, wrapping modulo 26.
    pub fn from_index(index: usize) -> Self {
        Letter((index % ALPHABET_LEN) as u8)
    }

    /// Index of this letter in the alphabet (`0..26`).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The uppercase ASCII character for this letter.
    pub fn to_char(self) -> char {
        ALPHABET[self.index()] as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Converts a static wiring string into an index table.
///
/// Used to build the rotor catalog and reflector at compile time.
pub(crate) const fn wiring_table(wiring: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut table = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        table[i] = wiring[i] - b'A';
        i += 1;
    }
    table
}
