//! Subscribes to `{base}/battle/move` and forwards validated commands
//! to whatever scene is currently active.

use std::sync::Mutex;

use serde::Deserialize;

use harness_scene::{BattleAction, BattleCommand, Scene};

#[derive(Debug, Deserialize)]
struct MoveMessage {
    action: String,
    choice: Option<u32>,
}

/// Parse one incoming `battle/move` payload into a [`BattleCommand`],
/// logging and returning `None` for anything malformed — mirrors the
/// defensive `try/except` shape of the service this is grounded on.
pub fn parse_command(payload: &[u8], request_id: String) -> Option<BattleCommand> {
    let text = match std::str::from_utf8(payload) {
        Ok(t) => t,
        Err(_) => {
            log::warn!("move command payload was not valid UTF-8");
            return None;
        }
    };

    let message: MoveMessage = match serde_json::from_str(text) {
        Ok(m) => m,
        Err(_) => {
            log::warn!("invalid JSON payload for move command");
            return None;
        }
    };

    let Some(kind) = BattleAction::parse(&message.action) else {
        log::warn!("unrecognised battle action {:?}", message.action);
        return None;
    };

    let Some(choice) = message.choice else {
        log::warn!("move command missing 'choice'");
        return None;
    };

    Some(BattleCommand::new(kind, choice, request_id))
}

/// Forward a just-arrived command to `scene`, if one is active.
pub fn dispatch(scene: &Mutex<Option<Scene>>, command: BattleCommand) {
    let mut guard = scene.lock().unwrap();
    match guard.as_mut() {
        None => log::warn!("received battle action command but no battle is active"),
        Some(Scene::Normal(battle)) => {
            if let Err(e) = battle.enqueue_command(command) {
                log::warn!("failed to queue move: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_move_command() {
        let cmd = parse_command(br#"{"action":"move","choice":3}"#, "r1".into()).unwrap();
        assert_eq!(cmd.kind, BattleAction::Move);
        assert_eq!(cmd.payload, 3);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_command(b"not json", "r2".into()).is_none());
    }

    #[test]
    fn rejects_unknown_actions() {
        assert!(parse_command(br#"{"action":"teleport","choice":1}"#, "r3".into()).is_none());
    }

    #[test]
    fn rejects_missing_choice() {
        assert!(parse_command(br#"{"action":"move"}"#, "r4".into()).is_none());
    }
}
