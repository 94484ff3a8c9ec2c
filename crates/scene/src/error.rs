//! Errors raised by the scene layer. None of these are fatal; the
//! runtime logs and drops the offending command or tick.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no active scene to receive command")]
    NoActiveScene,
    #[error("unsupported battle action: {0:?}")]
    UnsupportedAction(crate::command::BattleAction),
    #[error("move choice {0} out of range 1..=4")]
    InvalidMoveChoice(u32),
}
