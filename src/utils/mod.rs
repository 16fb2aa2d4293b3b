//! Shared helpers for the cipher core.

pub(crate) mod alphabet;
