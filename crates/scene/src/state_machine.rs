//! The phase-driven battle scene: the hardest component in the
//! harness. Observes [`MenuState`] and emits at most one button press
//! per scheduling tick to realise a commanded [`BattleAction`].

use std::time::{Duration, Instant};

use harness_core::emulator::Button;
use harness_core::menu::MenuState;

use crate::command::{BattleAction, BattleCommand};
use crate::error::SceneError;

/// Cursor-top tile coordinates that identify a menu by sight alone.
/// `MOVES_OR_TEXT` is deliberately ambiguous: the move list and a
/// post-move textbox are drawn at the same coordinates, which is why
/// the scene tracks its own phase instead of trusting the coordinate
/// alone.
mod menu_location {
    pub const MAIN_MENU_LEFT: (u8, u8) = (9, 14);
    pub const MAIN_MENU_RIGHT: (u8, u8) = (15, 14);
    pub const MOVES_OR_TEXT: (u8, u8) = (5, 12);
    #[allow(dead_code)]
    pub const POKEMON_SELECTION: (u8, u8) = (0, 1);
    #[allow(dead_code)]
    pub const POKEMON_SUB_MENU: (u8, u8) = (12, 12);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    SelectingMove,
    PostDialog,
}

fn is_ready_main_menu(menu: &MenuState) -> bool {
    menu.cursor_pos_top() == menu_location::MAIN_MENU_LEFT && menu.selected_item_id == 0
}

/// A single ongoing battle, tracked by its in-game `battle_id`.
pub struct NormalBattle {
    battle_id: u8,
    phase: Phase,
    active_command: Option<BattleCommand>,
    cooldown: Duration,
    last_enqueue_at: Option<Instant>,
}

impl NormalBattle {
    pub fn new(battle_id: u8) -> Self {
        Self {
            battle_id,
            phase: Phase::Idle,
            active_command: None,
            cooldown: Duration::from_millis(200),
            last_enqueue_at: None,
        }
    }

    pub fn with_cooldown(battle_id: u8, cooldown: Duration) -> Self {
        let mut s = Self::new(battle_id);
        s.cooldown = cooldown;
        s
    }

    pub fn battle_id(&self) -> u8 {
        self.battle_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self, menu: &MenuState) -> bool {
        is_ready_main_menu(menu)
    }

    /// Accept a validated command. Unsupported actions are logged and
    /// treated as immediately complete (no button is ever enqueued for
    /// them); only `Move` with a valid `1..=4` slot is staged.
    pub fn enqueue_command(&mut self, cmd: BattleCommand) -> Result<(), SceneError> {
        match cmd.kind {
            BattleAction::Move => {
                if !(1..=4).contains(&cmd.payload) {
                    log::warn!("dropping move command with out-of-range choice {}", cmd.payload);
                    return Err(SceneError::InvalidMoveChoice(cmd.payload));
                }
                self.active_command = Some(cmd);
                self.phase = Phase::Idle;
                Ok(())
            }
            other => {
                log::warn!("battle action {other:?} is not supported yet; dropping");
                Err(SceneError::UnsupportedAction(other))
            }
        }
    }

    fn may_enqueue(&self, queue_empty: bool, now: Instant) -> bool {
        if !queue_empty {
            return false;
        }
        match self.last_enqueue_at {
            None => true,
            Some(last) => now.duration_since(last) >= self.cooldown,
        }
    }

    fn record_enqueue(&mut self, now: Instant) {
        self.last_enqueue_at = Some(now);
    }

    /// When idle, nudge the game back to a known-good position.
    fn idle_recovery_button(menu: &MenuState) -> Option<Button> {
        let pos = menu.cursor_pos_top();
        if pos == menu_location::MAIN_MENU_RIGHT {
            Some(Button::Left)
        } else if pos == menu_location::MAIN_MENU_LEFT {
            if menu.selected_item_id > 0 {
                Some(Button::Up)
            } else {
                None
            }
        } else if pos == menu_location::MOVES_OR_TEXT {
            None
        } else {
            Some(Button::B)
        }
    }

    /// Advance the state machine one tick. `menu` is a just-read
    /// snapshot; `queue_empty` and `now` implement the input-gating
    /// contract (at most one button enqueued per tick, respecting the
    /// scene's own cooldown).
    pub fn update(&mut self, menu: &MenuState, queue_empty: bool, now: Instant) -> Option<Button> {
        let Some(command) = &self.active_command else {
            if !self.may_enqueue(queue_empty, now) {
                return None;
            }
            let button = Self::idle_recovery_button(menu);
            if button.is_some() {
                self.record_enqueue(now);
            }
            return button;
        };

        let slot = command.payload as u8;

        if !self.may_enqueue(queue_empty, now) {
            return None;
        }

        let button = match self.phase {
            Phase::Idle => {
                if menu.cursor_pos_top() == menu_location::MOVES_OR_TEXT {
                    self.phase = Phase::SelectingMove;
                    return self.update(menu, queue_empty, now);
                }
                if is_ready_main_menu(menu) {
                    Some(Button::A)
                } else {
                    Self::idle_recovery_button(menu)
                }
            }
            Phase::SelectingMove => {
                let cur = menu.selected_item_id;
                match cur.cmp(&(slot - 1)) {
                    std::cmp::Ordering::Less => Some(Button::Down),
                    std::cmp::Ordering::Greater => Some(Button::Up),
                    std::cmp::Ordering::Equal => {
                        self.phase = Phase::PostDialog;
                        Some(Button::A)
                    }
                }
            }
            Phase::PostDialog => {
                if is_ready_main_menu(menu) {
                    self.active_command = None;
                    self.phase = Phase::Idle;
                    None
                } else {
                    Some(Button::B)
                }
            }
        };

        if button.is_some() {
            self.record_enqueue(now);
        }
        button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_at(x: u8, y: u8, selected: u8) -> MenuState {
        MenuState {
            cursor_x_top: x,
            cursor_y_top: y,
            selected_item_id: selected,
            hidden_tile_under_cursor: 0,
            last_item_id: 0,
            key_bitmask: 0,
            previous_item_id: 0,
            last_party_cursor_pos: 0,
            last_item_cursor_pos: 0,
            last_battle_cursor_pos: 0,
            current_party_index: 0,
            cursor_tile_ptr: 0,
            first_displayed_item_id: 0,
            select_highlight: 0,
        }
    }

    fn ready_main_menu() -> MenuState {
        menu_at(9, 14, 0)
    }

    fn tick(battle: &mut NormalBattle, menu: &MenuState) -> Option<Button> {
        let now = battle.last_enqueue_at.map_or_else(Instant::now, |t| t + Duration::from_secs(1));
        battle.update(menu, true, now)
    }

    #[test]
    fn move_three_from_ready_main_menu_opens_then_aligns_then_confirms() {
        let mut battle = NormalBattle::new(1);
        battle
            .enqueue_command(BattleCommand::new(BattleAction::Move, 3, "r1".into()))
            .unwrap();

        // Not yet at the move list: open it.
        assert_eq!(tick(&mut battle, &ready_main_menu()), Some(Button::A));

        // Now at MOVES_OR_TEXT with selection 0; move 3 sits at index 2,
        // so exactly two downs from here confirm it.
        let mut menu = menu_at(5, 12, 0);
        battle.phase = Phase::SelectingMove;
        assert_eq!(tick(&mut battle, &menu), Some(Button::Down));
        menu.selected_item_id = 1;
        assert_eq!(tick(&mut battle, &menu), Some(Button::Down));
        menu.selected_item_id = 2;
        assert_eq!(tick(&mut battle, &menu), Some(Button::A));
        assert_eq!(battle.phase(), Phase::PostDialog);

        // Post-dialog: mash B until back at the ready main menu.
        assert_eq!(tick(&mut battle, &menu), Some(Button::B));
        assert_eq!(tick(&mut battle, &ready_main_menu()), None);
        assert_eq!(battle.phase(), Phase::Idle);
    }

    #[test]
    fn move_one_from_selection_zero_confirms_immediately() {
        let mut battle = NormalBattle::new(1);
        battle
            .enqueue_command(BattleCommand::new(BattleAction::Move, 1, "r2".into()))
            .unwrap();
        battle.phase = Phase::SelectingMove;
        let menu = menu_at(5, 12, 0);
        assert_eq!(tick(&mut battle, &menu), Some(Button::A));
        assert_eq!(battle.phase(), Phase::PostDialog);
    }

    #[test]
    fn move_four_from_selection_two_sends_one_down() {
        let mut battle = NormalBattle::new(1);
        battle
            .enqueue_command(BattleCommand::new(BattleAction::Move, 4, "r3".into()))
            .unwrap();
        battle.phase = Phase::SelectingMove;
        let mut menu = menu_at(5, 12, 2);
        assert_eq!(tick(&mut battle, &menu), Some(Button::Down));
        menu.selected_item_id = 3;
        assert_eq!(tick(&mut battle, &menu), Some(Button::A));
    }

    #[test]
    fn idle_in_main_menu_right_presses_left_never_a() {
        let mut battle = NormalBattle::new(1);
        let menu = menu_at(15, 14, 0);
        assert_eq!(tick(&mut battle, &menu), Some(Button::Left));
    }

    #[test]
    fn idle_in_moves_or_text_does_nothing() {
        let mut battle = NormalBattle::new(1);
        let menu = menu_at(5, 12, 0);
        assert_eq!(tick(&mut battle, &menu), None);
    }

    #[test]
    fn gating_blocks_a_second_enqueue_within_the_cooldown() {
        let mut battle = NormalBattle::new(1);
        let menu = menu_at(15, 14, 0);
        let now = Instant::now();
        assert_eq!(battle.update(&menu, true, now), Some(Button::Left));
        assert_eq!(battle.update(&menu, true, now), None);
    }

    #[test]
    fn gating_blocks_when_the_queue_is_not_empty() {
        let mut battle = NormalBattle::new(1);
        let menu = menu_at(15, 14, 0);
        assert_eq!(battle.update(&menu, false, Instant::now()), None);
    }

    #[test]
    fn unsupported_action_is_rejected_and_never_staged() {
        let mut battle = NormalBattle::new(1);
        let result = battle.enqueue_command(BattleCommand::new(BattleAction::Item, 1, "r4".into()));
        assert!(result.is_err());
        assert!(battle.active_command.is_none());
    }
}
