//! Periodically persists the emulator state to disk.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use harness_core::emulator::Emulator;

use crate::snapshot_store::SnapshotStore;

pub struct AutosaveService {
    store: SnapshotStore,
    interval: Duration,
    next_save_at: Mutex<Instant>,
}

impl AutosaveService {
    pub fn new(store: SnapshotStore, interval: Duration) -> Self {
        Self { store, interval, next_save_at: Mutex::new(Instant::now() + interval) }
    }

    /// Load any existing snapshot into `emu`. Called once before the
    /// emulator starts ticking.
    pub fn start(&self, emu: &mut dyn Emulator) {
        log::debug!("autosave service initialising");
        match self.store.load(emu) {
            Ok(true) => log::info!("loaded prior save state"),
            Ok(false) => log::debug!("no prior save state found"),
            Err(e) => log::warn!("failed to load save state: {e}"),
        }
        *self.next_save_at.lock().unwrap() = Instant::now() + self.interval;
    }

    pub fn tick(&self, emu: &dyn Emulator, now: Instant) {
        let mut next_save_at = self.next_save_at.lock().unwrap();
        if now < *next_save_at {
            return;
        }
        log::debug!("saving emulator state");
        match self.store.save(emu) {
            Ok(()) => log::info!("game state saved"),
            Err(e) => log::warn!("failed to save game state: {e}"),
        }
        *next_save_at = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harness_core::emulator::test_support::FakeEmulator;
    use std::{env, fs};

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let mut dir = env::temp_dir();
        dir.push(format!("harness_autosave_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn tick_before_the_interval_elapses_does_not_save() {
        let dir = temp_dir("early");
        let store = SnapshotStore::new(dir.join("ROM.state"));
        let service = AutosaveService::new(store, Duration::from_secs(100));
        let emu = FakeEmulator::default();
        service.tick(&emu, Instant::now());
        assert!(!dir.join("ROM.state").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn tick_after_the_interval_saves_and_reschedules() {
        let dir = temp_dir("due");
        let store = SnapshotStore::new(dir.join("ROM.state"));
        let service = AutosaveService::new(store, Duration::from_millis(1));
        let emu = FakeEmulator::default();
        std::thread::sleep(Duration::from_millis(5));
        service.tick(&emu, Instant::now());
        assert!(dir.join("ROM.state").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
