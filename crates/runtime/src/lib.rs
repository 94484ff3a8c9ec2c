//! The cooperative runtime: an emulator tick loop, a services loop,
//! the button queue connecting them, durable save-state snapshots, and
//! the MQTT bus client.

pub mod bus;
pub mod button_queue;
pub mod emulator_loop;
pub mod error;
pub mod runtime;
pub mod services;
pub mod snapshot_builder;
pub mod snapshot_store;

pub use runtime::Runtime;
