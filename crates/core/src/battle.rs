//! The single byte that tells the rest of the harness whether a battle
//! is in progress at all. Everything else in [`crate::pokemon`] only
//! makes sense once this reads non-zero.

use crate::emulator::Emulator;
use crate::memory;
use crate::variant::{MemoryRegion, RomVariant};

#[derive(Debug, Clone, Copy)]
pub struct BattleFlagLayout {
    battle_type: MemoryRegion,
    turn_counter: MemoryRegion,
}

impl BattleFlagLayout {
    pub fn bind(variant: RomVariant) -> Self {
        Self {
            battle_type: MemoryRegion::new_raw(0xD057, 0xD058, "battle type id").bind(variant),
            turn_counter: MemoryRegion::new_raw(0xCCD5, 0xCCD6, "battle turn counter").bind(variant),
        }
    }

    /// `0` outside battle; `1` for a normal trainer/wild fight, `2` for
    /// the old-man/safari variants the scene layer does not yet model.
    pub fn read(&self, emu: &dyn Emulator) -> u8 {
        memory::read_u8(emu, self.battle_type)
    }

    pub fn turn_counter(&self, emu: &dyn Emulator) -> u8 {
        memory::read_u8(emu, self.turn_counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulator::test_support::FakeEmulator;

    #[test]
    fn zero_means_no_battle() {
        let layout = BattleFlagLayout::bind(RomVariant::Red);
        let emu = FakeEmulator::default();
        assert_eq!(layout.read(&emu), 0);
    }

    #[test]
    fn nonzero_reports_the_battle_kind() {
        let layout = BattleFlagLayout::bind(RomVariant::Red);
        let mut emu = FakeEmulator::default();
        emu.write_u8(0xD057, 1);
        assert_eq!(layout.read(&emu), 1);
    }

    #[test]
    fn turn_counter_reads_its_own_byte() {
        let layout = BattleFlagLayout::bind(RomVariant::Red);
        let mut emu = FakeEmulator::default();
        emu.write_u8(0xCCD5, 7);
        assert_eq!(layout.turn_counter(&emu), 7);
    }
}
