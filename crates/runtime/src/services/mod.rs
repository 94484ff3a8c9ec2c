//! Background services ticked on the services thread, independently of
//! the emulator's own tick loop.

pub mod autosave;
pub mod battle_command_listener;
pub mod scene_manager;

pub use autosave::AutosaveService;
pub use scene_manager::SceneManagerService;
