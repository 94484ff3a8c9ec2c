//! A minimal, flat-memory [`Emulator`] that loads a ROM image into the
//! fixed `0x0000..0x4000` window and otherwise behaves like idle RAM.
//!
//! The harness treats the actual Game Boy core as an external
//! collaborator reached only through [`Emulator`]; this type exists so
//! the CLI has something concrete to hand to [`harness_runtime::Runtime`]
//! when no richer backend (a real CPU core, or an IPC bridge to one) is
//! wired in. It never advances CPU state on its own; `tick()` always
//! reports running, and the process only stops on a shutdown signal.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use harness_core::emulator::{Button, Emulator};

pub struct RawRomEmulator {
    memory: Vec<u8>,
}

impl RawRomEmulator {
    pub fn load(rom_path: &Path) -> io::Result<Self> {
        let rom = fs::read(rom_path)?;
        let mut memory = vec![0u8; 0x1_0000];
        let window = rom.len().min(0x4000);
        memory[..window].copy_from_slice(&rom[..window]);
        Ok(Self { memory })
    }
}

impl Emulator for RawRomEmulator {
    fn tick(&mut self) -> bool {
        true
    }

    fn read_u8(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn read_range(&self, start: u16, end: u16) -> Vec<u8> {
        self.memory[start as usize..end as usize].to_vec()
    }

    fn write_u8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn press_button(&mut self, button: Button) {
        log::trace!("press {button:?} (no-op: no CPU core is wired in)");
    }

    fn save_state(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.memory)
    }

    fn load_state(&mut self, reader: &mut dyn Read) -> io::Result<()> {
        reader.read_exact(&mut self.memory)
    }
}
