//! Drives the emulator's own tick loop, popping at most one queued
//! button every [`EmulatorLoop::button_cooldown`].
//!
//! The services loop runs on a separate thread started by
//! [`crate::runtime::Runtime`]; this type only owns the emulator-tick
//! side of the pair described in the concurrency design.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use harness_core::emulator::Emulator;

use crate::button_queue::ButtonQueue;

pub struct EmulatorLoop {
    button_cooldown: Duration,
    next_button_at: Mutex<Instant>,
}

impl EmulatorLoop {
    pub fn new(button_cooldown: Duration) -> Self {
        Self { button_cooldown, next_button_at: Mutex::new(Instant::now()) }
    }

    /// Advance the emulator by one frame and, if the button cooldown has
    /// elapsed, pop and press one queued button. Returns `false` once
    /// the emulator reports it has stopped running.
    pub fn step(&self, emu: &mut dyn Emulator, queue: &ButtonQueue, now: Instant) -> bool {
        let running = emu.tick();
        if !running {
            return false;
        }
        self.maybe_pop_button(emu, queue, now);
        true
    }

    fn maybe_pop_button(&self, emu: &mut dyn Emulator, queue: &ButtonQueue, now: Instant) {
        let mut next_button_at = self.next_button_at.lock().unwrap();
        if now < *next_button_at {
            return;
        }
        match queue.pop_or_none() {
            None => *next_button_at = now + self.button_cooldown,
            Some(button) => {
                log::debug!("processing button {button:?}");
                emu.press_button(button);
                *next_button_at = now + self.button_cooldown;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harness_core::emulator::test_support::FakeEmulator;
    use harness_core::emulator::Button;

    #[test]
    fn pops_one_button_per_cooldown_window() {
        let loop_ = EmulatorLoop::new(Duration::from_millis(0));
        let queue = ButtonQueue::default();
        queue.append(Button::A);
        queue.append(Button::B);
        let mut emu = FakeEmulator::default();

        let now = Instant::now();
        assert!(loop_.step(&mut emu, &queue, now));
        assert_eq!(emu.presses, vec![Button::A]);

        assert!(loop_.step(&mut emu, &queue, now + Duration::from_millis(1)));
        assert_eq!(emu.presses, vec![Button::A, Button::B]);
    }

    #[test]
    fn stops_when_the_emulator_reports_not_running() {
        let loop_ = EmulatorLoop::new(Duration::from_secs(1));
        let queue = ButtonQueue::default();
        let mut emu = FakeEmulator::default();
        emu.running = false;
        assert!(!loop_.step(&mut emu, &queue, Instant::now()));
    }
}
