//! Rotor: the stateful substitution unit of the machine.
//!
//! A rotor combines a fixed wiring permutation and a turnover notch (both
//! taken from [`ROTOR_CATALOG`]) with a ring setting and a rotational
//! position chosen by the operator. Only the position changes after
//! construction, and only through [`Rotor::step`].

use crate::utils::alphabet::{wiring_table, wrap, Letter, ALPHABET_LEN};

/// Immutable description of a rotor variant: its wiring and notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RotorSpec {
    /// Historical name of the variant.
    name: &'static str,
    /// Wiring permutation as alphabet indices: input `i` is wired to `wiring[i]`.
    wiring: [u8; ALPHABET_LEN],
    /// Index of the turnover notch letter.
    notch: u8,
}

/// Built-in rotor catalog, addressed by rotor ID (0..=2).
pub(crate) static ROTOR_CATALOG: [RotorSpec; 3] = [
    RotorSpec {
        name: "I",
        wiring: wiring_table(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
        notch: b'Q' - b'A',
    },
    RotorSpec {
        name: "II",
        wiring: wiring_table(b"AJDKSIRUXBLHWTMCQGZNPYFVOE"),
        notch: b'E' - b'A',
    },
    RotorSpec {
        name: "III",
        wiring: wiring_table(b"BDFHJLCPRTXVZNYEIWGAKMUSQO"),
        notch: b'V' - b'A',
    },
];

/// Looks up a catalog entry by rotor ID.
pub(crate) fn catalog_entry(id: usize) -> Option<&'static RotorSpec> {
    ROTOR_CATALOG.get(id)
}

/// A rotor in a machine, with its own ring setting and rotational position.
///
/// `forward` and `backward` are exact inverses for any fixed position, which
/// is what makes the whole machine reciprocal.
#[derive(Debug, Clone)]
pub(crate) struct Rotor {
    spec: &'static RotorSpec,
    inverse: [u8; ALPHABET_LEN],
    ring_setting: usize,
    position: usize,
}

impl Rotor {
    /// Creates a rotor from a catalog entry.
    ///
    /// Only entries of [`ROTOR_CATALOG`] exist, so the wiring is always a
    /// permutation.
    ///
    /// The inverse of the wiring is computed once here so that the return
    /// path is a table lookup.
    ///
    /// # Parameters
    /// - `spec`: Catalog entry providing wiring and notch.
    /// - `ring_setting`: Ring offset, reduced modulo 26.
    /// - `position`: Initial rotational position, reduced modulo 26.
    pub(crate) fn new(spec: &'static RotorSpec, ring_setting: usize, position: usize) -> Self {
        let mut inverse = [0u8; ALPHABET_LEN];
        for (input, &output) in spec.wiring.iter().enumerate() {
            inverse[output as usize] = input as u8;
        }
        Rotor {
            spec,
            inverse,
            ring_setting: ring_setting % ALPHABET_LEN,
            position: position % ALPHABET_LEN,
        }
    }

    /// Advances the rotor by one position, wrapping from Z back to A.
    pub(crate) fn step(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// Returns true if the letter showing at the current position is the notch.
    pub(crate) fn at_notch(&self) -> bool {
        self.position == self.spec.notch as usize
    }

    /// Passes a letter through the wiring toward the reflector.
    ///
    /// # Parameters
    /// - `c`: Letter entering from the plugboard side.
    ///
    /// # Returns
    /// The letter leaving toward the reflector.
    pub(crate) fn forward(&self, c: Letter) -> Letter {
        let shifted = self.shift_in(c);
        let wired = self.spec.wiring[shifted] as usize;
        self.shift_out(wired)
    }

    /// Passes a letter through the inverse wiring on the way back from the
    /// reflector.
    ///
    /// # Parameters
    /// - `c`: Letter entering from the reflector side.
    ///
    /// # Returns
    /// The letter leaving toward the plugboard.
    pub(crate) fn backward(&self, c: Letter) -> Letter {
        let shifted = self.shift_in(c);
        let wired = self.inverse[shifted] as usize;
        self.shift_out(wired)
    }

    /// Current rotational position (0..26).
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Moves the rotor to `position` (reduced modulo 26).
    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position % ALPHABET_LEN;
    }

    /// Ring setting fixed at construction.
    pub(crate) fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    /// Catalog name of this rotor variant.
    pub(crate) fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Contact offset: `(index(c) + position - ring_setting) mod 26`.
    fn shift_in(&self, c: Letter) -> usize {
        wrap(c.index() as i32 + self.position as i32 - self.ring_setting as i32)
    }

    /// Undoes the contact offset on the wired index.
    fn shift_out(&self, wired: usize) -> Letter {
        Letter::from_index(wrap(
            wired as i32 - self.position as i32 + self.ring_setting as i32,
        ))
    }
}
