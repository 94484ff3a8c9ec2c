//! Crash-safe, rotating save-state snapshots.
//!
//! Canonical file: `ROM.state`. Backups: `.bak_1` (most recent prior)
//! through `.bak_N` (oldest). A save rotates backups, copies the
//! current file into `.bak_1`, then writes the new state to a temp
//! file and atomically renames it over the canonical path — readers
//! never observe a torn file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use harness_core::emulator::Emulator;

use crate::error::{LoadIoError, SaveIoError};

const MAX_BACKUPS: u32 = 5;

pub struct SnapshotStore {
    path: PathBuf,
    /// Serialises overlapping saves; the emulator-access mutex already
    /// keeps reads/writes to the emulator itself from overlapping, but
    /// two autosave ticks racing each other on the filesystem is a
    /// separate hazard this guards against.
    save_gate: Mutex<()>,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path, save_gate: Mutex::new(()) }
    }

    fn bak_path(&self, n: u32) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".bak_{n}"));
        self.path.with_file_name(name)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmpwrite");
        self.path.with_file_name(name)
    }

    /// Load the canonical snapshot into `emu`, if one exists. Returns
    /// `false` (not an error) when there is nothing to load yet.
    pub fn load(&self, emu: &mut dyn Emulator) -> Result<bool, LoadIoError> {
        if !self.path.exists() {
            return Ok(false);
        }
        let mut file = fs::File::open(&self.path).map_err(|source| LoadIoError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        emu.load_state(&mut file).map_err(|source| LoadIoError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(true)
    }

    /// Save `emu`'s state, rotating backups first.
    pub fn save(&self, emu: &dyn Emulator) -> Result<(), SaveIoError> {
        let _guard = self.save_gate.lock().unwrap();

        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        rotate(self, MAX_BACKUPS)?;

        if self.path.exists() {
            fs::copy(&self.path, self.bak_path(1)).map_err(|source| SaveIoError::Rotate {
                path: self.bak_path(1).display().to_string(),
                source,
            })?;
        }

        let tmp = self.tmp_path();
        let result = write_tmp(&tmp, emu);
        match result {
            Ok(()) => {
                fs::rename(&tmp, &self.path).map_err(|source| SaveIoError::Write {
                    path: self.path.display().to_string(),
                    source,
                })?;
                Ok(())
            }
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                Err(e)
            }
        }
    }
}

fn rotate(store: &SnapshotStore, max_backups: u32) -> Result<(), SaveIoError> {
    let oldest = store.bak_path(max_backups);
    if oldest.exists() {
        fs::remove_file(&oldest).map_err(|source| SaveIoError::Rotate {
            path: oldest.display().to_string(),
            source,
        })?;
    }
    for n in (1..max_backups).rev() {
        let src = store.bak_path(n);
        let dst = store.bak_path(n + 1);
        if src.exists() {
            fs::rename(&src, &dst).map_err(|source| SaveIoError::Rotate {
                path: dst.display().to_string(),
                source,
            })?;
        }
    }
    Ok(())
}

fn write_tmp(tmp: &Path, emu: &dyn Emulator) -> Result<(), SaveIoError> {
    let mut file = fs::File::create(tmp).map_err(|source| SaveIoError::Write {
        path: tmp.display().to_string(),
        source,
    })?;
    emu.save_state(&mut file).map_err(|source| SaveIoError::Write {
        path: tmp.display().to_string(),
        source,
    })?;
    file.flush().map_err(|source| SaveIoError::Write { path: tmp.display().to_string(), source })?;
    file.sync_all().map_err(|source| SaveIoError::Write { path: tmp.display().to_string(), source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use harness_core::emulator::test_support::FakeEmulator;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir = env::temp_dir();
        dir.push(format!("harness_snapshot_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn saving_when_no_prior_state_creates_only_the_canonical_file() {
        let dir = temp_dir("first_save");
        let store = SnapshotStore::new(dir.join("ROM.state"));
        let emu = FakeEmulator::default();
        store.save(&emu).unwrap();
        assert!(dir.join("ROM.state").exists());
        assert!(!dir.join("ROM.state.bak_1").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn seven_saves_leave_exactly_the_canonical_file_and_five_backups() {
        let dir = temp_dir("rotation");
        let store = SnapshotStore::new(dir.join("ROM.state"));
        for i in 0..7u8 {
            let mut emu = FakeEmulator::default();
            emu.memory[0] = i;
            store.save(&emu).unwrap();
        }
        assert!(dir.join("ROM.state").exists());
        for n in 1..=5 {
            assert!(dir.join(format!("ROM.state.bak_{n}")).exists(), "missing bak_{n}");
        }
        assert!(!dir.join("ROM.state.bak_6").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_on_a_fresh_directory_returns_false_without_erroring() {
        let dir = temp_dir("fresh_load");
        let store = SnapshotStore::new(dir.join("ROM.state"));
        let mut emu = FakeEmulator::default();
        assert!(!store.load(&mut emu).unwrap());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_then_load_round_trips_the_emulator_state() {
        let dir = temp_dir("round_trip");
        let store = SnapshotStore::new(dir.join("ROM.state"));
        let mut emu = FakeEmulator::default();
        emu.memory[100] = 0x42;
        store.save(&emu).unwrap();

        let mut reloaded = FakeEmulator::default();
        assert!(store.load(&mut reloaded).unwrap());
        assert_eq!(reloaded.memory[100], 0x42);
        fs::remove_dir_all(&dir).unwrap();
    }
}
