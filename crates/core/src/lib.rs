//! Memory-map decoding and domain model for a Gen-1 Pokémon ROM running
//! under an externally supplied Game Boy emulator.
//!
//! This crate knows how to address, relocate, and decode bytes; it
//! does not run a scene state machine or a services loop (see the
//! sibling crates for those). Everything here is pure with respect to
//! the emulator: reads re-fetch bytes on every call, and the only
//! mutation primitives are the narrow `set_*` methods on
//! [`pokemon::PartyPokemon`].

pub mod battle;
pub mod config;
pub mod dvs;
pub mod emulator;
pub mod error;
pub mod memory;
pub mod menu;
pub mod moves;
pub mod pokemon;
pub mod snapshot;
pub mod species;
pub mod status;
pub mod text;
pub mod types;
pub mod variant;
