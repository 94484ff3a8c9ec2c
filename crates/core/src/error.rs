//! Error types shared by the memory map and domain model.
//!
//! Policy follows the table in the harness's error handling design:
//! `ConfigError` is the only fatal kind raised from this crate; the
//! rest are returned to the caller, who logs and continues.

use thiserror::Error;

/// Raised while assembling [`crate::config::Config`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown ROM variant {0:?}")]
    UnknownVariant(String),
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Raised by domain-model mutations that address a slot out of range.
#[derive(Debug, Error)]
pub enum MemoryBoundsError {
    #[error("party slot {0} out of range 1..=6")]
    InvalidPartySlot(usize),
    #[error("move slot {0} out of range 1..=4")]
    InvalidMoveSlot(usize),
}

/// Raised while decoding ROM-resident data (move names, text).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("move id {0} has no corresponding name (bank exhausted)")]
    NameNotFound(u8),
}
