//! Fixed reflector (UKW-B wiring).

use crate::utils::alphabet::{wiring_table, Letter, ALPHABET_LEN};

/// Reflector wiring as alphabet indices. An involution with no fixed points.
pub(crate) const REFLECTOR_WIRING: [u8; ALPHABET_LEN] = wiring_table(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");

/// Turns the signal back through the rotors.
pub(crate) fn reflect(c: Letter) -> Letter {
    Letter::from_index(REFLECTOR_WIRING[c.index()] as usize)
}
