//! Party Pokémon lens: the 44-byte record present in six WRAM slots.

use crate::dvs::{self, Dvs};
use crate::emulator::Emulator;
use crate::error::MemoryBoundsError;
use crate::memory;
use crate::species::SpeciesId;
use crate::status::{self, Status};
use crate::text::CharTable;
use crate::variant::{MemoryRegion, RomVariant};

const SLOT_SIZE: u16 = 44;
const SLOT_COUNT: usize = 6;
const NICKNAME_SIZE: u16 = 11;

/// WRAM addresses for the party block, relocated per [`RomVariant`] at
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct PartyLayout {
    party_count: MemoryRegion,
    party_base: u16,
    nickname_base: u16,
}

impl PartyLayout {
    pub fn bind(variant: RomVariant) -> Self {
        let party_count = MemoryRegion::new_raw(0xD163, 0xD164, "party count").bind(variant);
        let (party_base, _) = variant.relocate(0xD16B, 0xD16B);
        let (nickname_base, _) = variant.relocate(0xD2B5, 0xD2B5);
        Self { party_count, party_base, nickname_base }
    }

    /// Number of Pokémon currently in the party, per the party-count byte.
    pub fn count(&self, emu: &dyn Emulator) -> u8 {
        memory::read_u8(emu, self.party_count)
    }

    /// Lens onto slot `index` (`0..6`). Does not check the slot against
    /// the live party count; callers combine this with [`PartyLayout::count`]
    /// to distinguish an occupied slot from stale WRAM.
    pub fn slot(&self, index: usize) -> Result<PartyPokemon, MemoryBoundsError> {
        if index >= SLOT_COUNT {
            return Err(MemoryBoundsError::InvalidPartySlot(index));
        }
        let record_start = self.party_base + index as u16 * SLOT_SIZE;
        let nickname_start = self.nickname_base + index as u16 * NICKNAME_SIZE;
        Ok(PartyPokemon {
            record: MemoryRegion { start: record_start, end: record_start + SLOT_SIZE, description: "party mon record" },
            nickname: MemoryRegion { start: nickname_start, end: nickname_start + NICKNAME_SIZE, description: "party mon nickname" },
        })
    }
}

/// A thin lens over one party slot's 44-byte record. Holds no bytes of
/// its own; every accessor re-reads the emulator.
#[derive(Debug, Clone, Copy)]
pub struct PartyPokemon {
    record: MemoryRegion,
    nickname: MemoryRegion,
}

impl PartyPokemon {
    fn field(&self, offset: u16, len: u16) -> MemoryRegion {
        MemoryRegion {
            start: self.record.start + offset,
            end: self.record.start + offset + len,
            description: "party mon field",
        }
    }

    pub fn species_id(&self, emu: &dyn Emulator) -> SpeciesId {
        SpeciesId(memory::read_u8(emu, self.field(0, 1)))
    }

    pub fn current_hp(&self, emu: &dyn Emulator) -> u16 {
        memory::read_u16_hi_lo(emu, self.field(1, 2))
    }

    pub fn status(&self, emu: &dyn Emulator) -> Status {
        status::parse_status(memory::read_u8(emu, self.field(4, 1)))
    }

    pub fn types(&self, emu: &dyn Emulator) -> (u8, u8) {
        let bytes = memory::read_u8_list(emu, self.field(5, 2));
        (bytes[0], bytes[1])
    }

    pub fn move_ids(&self, emu: &dyn Emulator) -> [u8; 4] {
        let bytes = memory::read_u8_list(emu, self.field(8, 4));
        [bytes[0], bytes[1], bytes[2], bytes[3]]
    }

    pub fn experience(&self, emu: &dyn Emulator) -> u32 {
        memory::read_u24_hi_mid_lo(emu, self.field(14, 3))
    }

    pub fn dvs(&self, emu: &dyn Emulator) -> Dvs {
        let bytes = memory::read_u8_list(emu, self.field(27, 2));
        dvs::parse_dvs(bytes[0], bytes[1])
    }

    pub fn pp(&self, emu: &dyn Emulator) -> [u8; 4] {
        let bytes = memory::read_u8_list(emu, self.field(29, 4));
        [bytes[0], bytes[1], bytes[2], bytes[3]]
    }

    pub fn level(&self, emu: &dyn Emulator) -> u8 {
        memory::read_u8(emu, self.field(33, 1))
    }

    pub fn max_hp(&self, emu: &dyn Emulator) -> u16 {
        memory::read_u16_hi_lo(emu, self.field(34, 2))
    }

    pub fn attack(&self, emu: &dyn Emulator) -> u16 {
        memory::read_u16_hi_lo(emu, self.field(36, 2))
    }

    pub fn defense(&self, emu: &dyn Emulator) -> u16 {
        memory::read_u16_hi_lo(emu, self.field(38, 2))
    }

    pub fn speed(&self, emu: &dyn Emulator) -> u16 {
        memory::read_u16_hi_lo(emu, self.field(40, 2))
    }

    pub fn special(&self, emu: &dyn Emulator) -> u16 {
        memory::read_u16_hi_lo(emu, self.field(42, 2))
    }

    pub fn nickname(&self, emu: &dyn Emulator, table: &CharTable) -> String {
        memory::read_string(emu, self.nickname, table)
    }

    /// Set the canonical level field. Out-of-range levels are left to
    /// the caller; the game itself bounds levels to `1..=100`.
    pub fn set_level(&self, emu: &mut dyn Emulator, level: u8) {
        emu.write_u8(self.field(33, 1).start, level);
    }

    /// Overwrite move slot `slot` (`0..4`) with `move_id`.
    pub fn set_move(&self, emu: &mut dyn Emulator, slot: usize, move_id: u8) -> Result<(), MemoryBoundsError> {
        if slot >= 4 {
            return Err(MemoryBoundsError::InvalidMoveSlot(slot));
        }
        emu.write_u8(self.field(8, 4).start + slot as u16, move_id);
        Ok(())
    }

    /// Overwrite PP for move slot `slot` (`0..4`).
    pub fn set_pp(&self, emu: &mut dyn Emulator, slot: usize, pp: u8) -> Result<(), MemoryBoundsError> {
        if slot >= 4 {
            return Err(MemoryBoundsError::InvalidMoveSlot(slot));
        }
        emu.write_u8(self.field(29, 4).start + slot as u16, pp);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulator::test_support::FakeEmulator;

    fn layout() -> PartyLayout {
        PartyLayout::bind(RomVariant::Red)
    }

    #[test]
    fn slot_index_out_of_range_is_a_bounds_error() {
        assert!(matches!(layout().slot(6), Err(MemoryBoundsError::InvalidPartySlot(6))));
    }

    #[test]
    fn reads_species_and_level_from_the_right_offsets() {
        let layout = layout();
        let mut emu = FakeEmulator::default();
        let slot0 = layout.slot(0).unwrap();
        emu.write_u8(slot0_addr(&layout, 0), 0x99); // Bulbasaur
        emu.write_u8(slot0_addr(&layout, 33), 42);
        assert_eq!(slot0.species_id(&emu).0, 0x99);
        assert_eq!(slot0.level(&emu), 42);
    }

    fn slot0_addr(layout: &PartyLayout, offset: u16) -> u16 {
        layout.slot(0).unwrap().record.start + offset
    }

    #[test]
    fn set_move_rejects_out_of_range_slot() {
        let layout = layout();
        let mut emu = FakeEmulator::default();
        let mon = layout.slot(0).unwrap();
        assert!(mon.set_move(&mut emu, 4, 1).is_err());
    }

    #[test]
    fn set_move_then_read_back_round_trips() {
        let layout = layout();
        let mut emu = FakeEmulator::default();
        let mon = layout.slot(1).unwrap();
        mon.set_move(&mut emu, 2, 0x55).unwrap();
        assert_eq!(mon.move_ids(&emu)[2], 0x55);
    }
}
