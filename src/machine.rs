//! Machine: three-rotor orchestrator.
//!
//! Owns three rotors (index 0 leftmost and slowest, index 2 rightmost
//! and fastest) plus a [`Plugboard`]. Each letter steps the rotors and then
//! travels plugboard, rotors 2-1-0, reflector, rotors 0-1-2, plugboard.
//!
//! The only mutable state is the three rotor positions. Two machines built
//! from the same settings step through identical states, so feeding one
//! machine's output into the other returns the original text.

use crate::error::ConfigError;
use crate::plugboard::Plugboard;
use crate::reflector::reflect;
use crate::rotor::{catalog_entry, Rotor};
use crate::utils::alphabet::{Letter, ALPHABET_LEN};

/// Number of rotors in the machine.
pub const NUM_ROTORS: usize = 3;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// Three-rotor cipher machine with reflector and plugboard.
///
/// Encryption and decryption are the same operation: build a second machine
/// with identical settings and run the ciphertext through it.
///
/// A `Machine` carries keystream state. Calls must be applied in order on a
/// single thread; use one instance per message or session.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: [Rotor; NUM_ROTORS],
    initial_positions: [usize; NUM_ROTORS],
    plugboard: Plugboard,
}

impl Machine {
    /// Creates a machine from rotor IDs, start positions, ring settings and
    /// plugboard pairs.
    ///
    /// All inputs are validated here. A machine that is returned can process
    /// any text without failing.
    ///
    /// # Parameters
    /// - `rotor_ids`: Three catalog IDs (0..=2), left to right.
    /// - `rotor_positions`: Three start positions (0..=25).
    /// - `ring_settings`: Three ring settings (0..=25).
    /// - `plugboard_pairs`: Up to 13 two-letter entries, each letter used once.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidLength`] if a list does not hold three values.
    /// - [`ConfigError::InvalidRotorId`] for an ID outside the catalog.
    /// - [`ConfigError::InvalidPosition`] / [`ConfigError::InvalidRingSetting`]
    ///   for values above 25.
    /// - [`ConfigError::InvalidPlugboardPair`] for a malformed or overlapping pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sim::Machine;
    ///
    /// let mut machine = Machine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
    /// assert_eq!(machine.process("AAAAA"), "BDZGO");
    /// ```
    ///
    /// ```
    /// use enigma_sim::{ConfigError, Machine};
    ///
    /// let result = Machine::new(&[0, 1, 3], &[0, 0, 0], &[0, 0, 0], &[]);
    /// assert_eq!(result.unwrap_err(), ConfigError::InvalidRotorId(3));
    /// ```
    pub fn new(
        rotor_ids: &[usize],
        rotor_positions: &[usize],
        ring_settings: &[usize],
        plugboard_pairs: &[&str],
    ) -> Result<Self, ConfigError> {
        let plugboard = match Plugboard::new(plugboard_pairs) {
            Ok(board) => board,
            Err(err) => {
                tracing::debug!(error = %err, "rejected plugboard configuration");
                return Err(err);
            }
        };
        Self::with_plugboard(rotor_ids, rotor_positions, ring_settings, plugboard)
    }

    /// Creates a machine around an already validated [`Plugboard`].
    ///
    /// # Errors
    /// Same rotor, position and ring setting errors as [`Machine::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sim::{Machine, Plugboard};
    ///
    /// let board: Plugboard = "AB CD".parse().unwrap();
    /// let mut machine =
    ///     Machine::with_plugboard(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], board).unwrap();
    /// let cipher = machine.process("HELLO");
    /// assert_eq!(cipher.len(), 5);
    /// ```
    pub fn with_plugboard(
        rotor_ids: &[usize],
        rotor_positions: &[usize],
        ring_settings: &[usize],
        plugboard: Plugboard,
    ) -> Result<Self, ConfigError> {
        let result = Self::build(rotor_ids, rotor_positions, ring_settings, plugboard);
        match &result {
            Ok(machine) => tracing::debug!(
                rotors = ?machine.rotor_names(),
                positions = ?machine.initial_positions,
                ring_settings = ?machine.ring_settings(),
                plugboard_pairs = machine.plugboard.len(),
                "machine configured"
            ),
            Err(err) => tracing::debug!(error = %err, "rejected machine configuration"),
        }
        result
    }

    /// Internal constructor shared by `new()` and `with_plugboard()`.
    fn build(
        rotor_ids: &[usize],
        rotor_positions: &[usize],
        ring_settings: &[usize],
        plugboard: Plugboard,
    ) -> Result<Self, ConfigError> {
        let ids = exactly_three("rotor_ids", rotor_ids)?;
        let positions = exactly_three("rotor_positions", rotor_positions)?;
        let rings = exactly_three("ring_settings", ring_settings)?;

        let mut specs = Vec::with_capacity(NUM_ROTORS);
        for id in ids {
            specs.push(catalog_entry(id).ok_or(ConfigError::InvalidRotorId(id))?);
        }
        if let Some(&pos) = positions.iter().find(|&&p| p >= ALPHABET_LEN) {
            return Err(ConfigError::InvalidPosition(pos));
        }
        if let Some(&ring) = rings.iter().find(|&&r| r >= ALPHABET_LEN) {
            return Err(ConfigError::InvalidRingSetting(ring));
        }

        let rotors = [0, 1, 2].map(|i| Rotor::new(specs[i], rings[i], positions[i]));

        Ok(Machine {
            rotors,
            initial_positions: positions,
            plugboard,
        })
    }

    /// Advances the rotors for one keystroke.
    ///
    /// Notches are read before anything moves. If the middle rotor sits at
    /// its notch, it steps together with the left rotor; otherwise the middle
    /// rotor steps if the right rotor is at its notch. The right rotor always
    /// steps last. A middle rotor carried onto its notch by the right rotor
    /// therefore steps again on the next keystroke (double-stepping).
    fn step_rotors(&mut self) {
        if self.rotors[MIDDLE].at_notch() {
            tracing::trace!(
                window = %self.window(),
                "middle rotor at notch, stepping left and middle"
            );
            self.rotors[LEFT].step();
            self.rotors[MIDDLE].step();
        } else if self.rotors[RIGHT].at_notch() {
            self.rotors[MIDDLE].step();
        }
        self.rotors[RIGHT].step();
    }

    /// Encrypts a single uppercase character.
    ///
    /// Characters outside `A..=Z` are returned unchanged and do not move
    /// the rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sim::Machine;
    ///
    /// let mut machine = Machine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
    /// assert_eq!(machine.encrypt_char(' '), ' ');
    /// assert_eq!(machine.positions(), [0, 0, 0]);
    /// assert_eq!(machine.encrypt_char('A'), 'B');
    /// assert_eq!(machine.positions(), [0, 0, 1]);
    /// ```
    pub fn encrypt_char(&mut self, c: char) -> char {
        match Letter::from_char(c) {
            Some(letter) => self.encrypt_letter(letter).to_char(),
            None => c,
        }
    }

    /// Full signal path for one letter, including the keystroke step.
    fn encrypt_letter(&mut self, letter: Letter) -> Letter {
        self.step_rotors();

        let mut c = self.plugboard.swap(letter);
        for rotor in self.rotors.iter().rev() {
            c = rotor.forward(c);
        }
        c = reflect(c);
        for rotor in self.rotors.iter() {
            c = rotor.backward(c);
        }
        self.plugboard.swap(c)
    }

    /// Uppercases `text` and encrypts it character by character.
    ///
    /// Letters are uppercased with ASCII rules so the output has exactly as
    /// many characters as the input. Anything that is not `A..=Z` after
    /// uppercasing passes through untouched. Non-ASCII characters whose
    /// Unicode uppercase is an ASCII letter, such as `ı` (dotless i) and
    /// `ſ` (long s), are not folded to `I`/`S`; they pass through unchanged
    /// and do not step the rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sim::Machine;
    ///
    /// let mut encoder = Machine::new(&[0, 1, 2], &[5, 10, 15], &[0, 0, 0], &["AB"]).unwrap();
    /// let mut decoder = Machine::new(&[0, 1, 2], &[5, 10, 15], &[0, 0, 0], &["AB"]).unwrap();
    ///
    /// let cipher = encoder.process("Attack at dawn!");
    /// assert_eq!(decoder.process(&cipher), "ATTACK AT DAWN!");
    /// ```
    pub fn process(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| self.encrypt_char(c.to_ascii_uppercase()))
            .collect()
    }

    /// Returns every rotor to the position it had at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sim::Machine;
    ///
    /// let mut machine = Machine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
    /// let cipher = machine.process("HELLO");
    /// machine.reset();
    /// assert_eq!(machine.process(&cipher), "HELLO");
    /// ```
    pub fn reset(&mut self) {
        for (rotor, &pos) in self.rotors.iter_mut().zip(self.initial_positions.iter()) {
            rotor.set_position(pos);
        }
        tracing::trace!(window = %self.window(), "rotors reset");
    }

    /// Current rotor positions, left to right.
    pub fn positions(&self) -> [usize; NUM_ROTORS] {
        [0, 1, 2].map(|i| self.rotors[i].position())
    }

    /// Current rotor positions shown as letters, e.g. `"AAB"`.
    pub fn window(&self) -> String {
        self.rotors
            .iter()
            .map(|r| Letter::from_index(r.position()).to_char())
            .collect()
    }

    /// Ring settings, left to right.
    pub fn ring_settings(&self) -> [usize; NUM_ROTORS] {
        [0, 1, 2].map(|i| self.rotors[i].ring_setting())
    }

    /// Catalog names of the installed rotors, left to right.
    pub fn rotor_names(&self) -> [&'static str; NUM_ROTORS] {
        [0, 1, 2].map(|i| self.rotors[i].name())
    }

    /// The plugboard wiring.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}

/// Checks that `values` holds exactly three entries.
fn exactly_three(
    field: &'static str,
    values: &[usize],
) -> Result<[usize; NUM_ROTORS], ConfigError> {
    values
        .try_into()
        .map_err(|_| ConfigError::InvalidLength {
            field,
            len: values.len(),
        })
}
