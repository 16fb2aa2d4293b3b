//! Serializable machine settings.
//!
//! [`MachineConfig`] is the shape a front end or settings file hands to the
//! core. It holds raw values; nothing is checked until [`MachineConfig::build`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::machine::Machine;

/// Raw machine settings as supplied by a caller.
///
/// # Examples
///
/// ```
/// use enigma_sim::MachineConfig;
///
/// let config = MachineConfig {
///     plugboard: vec!["AB".into(), "CD".into()],
///     ..MachineConfig::default()
/// };
/// let mut machine = config.build().unwrap();
/// assert_eq!(machine.process("hi").len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor catalog IDs, left to right.
    pub rotors: Vec<usize>,
    /// Start positions, left to right.
    pub positions: Vec<usize>,
    /// Ring settings, left to right.
    pub ring_settings: Vec<usize>,
    /// Two-letter plugboard entries.
    #[serde(default)]
    pub plugboard: Vec<String>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotors: vec![0, 1, 2],
            positions: vec![0, 0, 0],
            ring_settings: vec![0, 0, 0],
            plugboard: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Validates the settings and builds a fresh [`Machine`].
    ///
    /// Each call yields an independent machine at the configured start
    /// positions, so the same config serves both ends of a message.
    ///
    /// # Errors
    /// Any [`ConfigError`] that [`Machine::new`] would return.
    pub fn build(&self) -> Result<Machine, ConfigError> {
        let pairs: Vec<&str> = self.plugboard.iter().map(String::as_str).collect();
        Machine::new(&self.rotors, &self.positions, &self.ring_settings, &pairs)
    }
}
