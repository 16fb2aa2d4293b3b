//! Three-rotor electromechanical rotor cipher simulator.
//!
//! Models an Enigma-style machine: a fixed catalog of three rotors, one
//! reflector, operator-chosen rotor order, start positions and ring
//! settings, and an optional plugboard. The transform is reciprocal: a
//! second machine with the same settings turns the ciphertext back into
//! the (uppercased) plaintext.
//!
//! This is a historical simulation. It offers no cryptographic security.
//!
//! # Architecture
//!
//! ```text
//! Plugboard -> Rotor[2] -> Rotor[1] -> Rotor[0] -> Reflector
//!                                                      |
//! Plugboard <- Rotor[2] <- Rotor[1] <- Rotor[0] <------+
//! ```
//!
//! Before each letter the rotors step; the middle rotor double-steps when
//! it reaches its own notch.
//!
//! # Examples
//!
//! ```
//! use enigma_sim::Machine;
//!
//! let mut encoder = Machine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &["AB"]).unwrap();
//! let mut decoder = Machine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &["AB"]).unwrap();
//!
//! let cipher = encoder.process("HELLOWORLD");
//! assert_eq!(cipher, "ILADBBMTBZ");
//! assert_eq!(decoder.process(&cipher), "HELLOWORLD");
//! ```
//!
//! Settings can also come from a serialized [`MachineConfig`]:
//!
//! ```
//! use enigma_sim::MachineConfig;
//!
//! let config = MachineConfig {
//!     positions: vec![5, 10, 15],
//!     ..MachineConfig::default()
//! };
//! let mut machine = config.build().unwrap();
//! assert_eq!(machine.process("TESTMESSAGE"), "QRWVPMPGURV");
//! ```
//!
//! Rotors come only from the built-in catalog, selected by ID through
//! [`Machine::new`]. The rotor type itself is not part of the public API:
//!
//! ```compile_fail
//! use enigma_sim::rotor::Rotor;
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod machine;
pub mod plugboard;
pub(crate) mod reflector;
pub(crate) mod rotor;
pub(crate) mod utils;

pub use config::MachineConfig;
pub use error::ConfigError;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use utils::alphabet::Letter;
