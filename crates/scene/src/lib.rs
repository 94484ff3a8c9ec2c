//! The battle scene state machine: observes the in-game menu cursor
//! and drives it toward a commanded outcome one button per tick.

use std::time::Instant;

use harness_core::emulator::Button;
use harness_core::menu::MenuState;

pub mod command;
pub mod error;
pub mod state_machine;

pub use command::{BattleAction, BattleCommand};
pub use error::SceneError;
pub use state_machine::{NormalBattle, Phase};

/// The source expresses battle scenes as a `BattleScene` base class with
/// a `NormalBattle` subclass; Safari and old-man battles were sketched
/// but never implemented there either, so only `Normal` appears here.
pub enum Scene {
    Normal(NormalBattle),
}

impl Scene {
    pub fn battle_id(&self) -> u8 {
        match self {
            Scene::Normal(b) => b.battle_id(),
        }
    }

    /// Advance whichever scene kind this holds, returning the next
    /// button to press, if any.
    pub fn update(&mut self, menu: &MenuState, queue_empty: bool, now: Instant) -> Option<Button> {
        match self {
            Scene::Normal(b) => b.update(menu, queue_empty, now),
        }
    }

    /// Whether the scene has returned to a known-good resting position.
    pub fn is_ready(&self, menu: &MenuState) -> bool {
        match self {
            Scene::Normal(b) => b.is_ready(menu),
        }
    }
}
