//! Error types for machine configuration.

use thiserror::Error;

/// Errors produced while configuring a [`Machine`](crate::Machine).
///
/// Every variant is raised at construction time. A machine that was built
/// successfully never fails while processing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One of the rotor ID, position or ring setting lists does not hold
    /// exactly three values.
    #[error("{field} must contain exactly 3 values, got {len}")]
    InvalidLength {
        /// Name of the offending list.
        field: &'static str,
        /// Length that was supplied.
        len: usize,
    },
    /// Rotor ID outside the built-in catalog.
    #[error("rotor id {0} is not in the catalog (expected 0..=2)")]
    InvalidRotorId(usize),
    /// Rotor start position outside [0, 25].
    #[error("rotor position {0} is out of range (expected 0..=25)")]
    InvalidPosition(usize),
    /// Ring setting outside [0, 25].
    #[error("ring setting {0} is out of range (expected 0..=25)")]
    InvalidRingSetting(usize),
    /// Plugboard entry that is not two distinct letters, or that reuses a
    /// letter already wired by another pair.
    #[error("invalid plugboard pair {0:?}")]
    InvalidPlugboardPair(String),
}
