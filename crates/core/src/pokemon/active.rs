//! Active Pokémon lens: the player's currently-sent-out Pokémon.
//!
//! Symmetrical to [`crate::pokemon::enemy::EnemyPokemon`], offset to
//! the player-side battle struct rather than the enemy-side one.

use crate::dvs::{self, Dvs};
use crate::emulator::Emulator;
use crate::memory;
use crate::species::SpeciesId;
use crate::status::{self, Status};
use crate::variant::{MemoryRegion, RomVariant};

#[derive(Debug, Clone, Copy)]
pub struct ActivePokemon {
    species: MemoryRegion,
    level: MemoryRegion,
    status: MemoryRegion,
    types: MemoryRegion,
    current_hp: MemoryRegion,
    max_hp: MemoryRegion,
    moves: MemoryRegion,
    pp: MemoryRegion,
    dvs: MemoryRegion,
}

impl ActivePokemon {
    pub fn bind(variant: RomVariant) -> Self {
        Self {
            species: MemoryRegion::new_raw(0xD014, 0xD015, "active species").bind(variant),
            level: MemoryRegion::new_raw(0xD022, 0xD023, "active level").bind(variant),
            status: MemoryRegion::new_raw(0xD016, 0xD017, "active status").bind(variant),
            types: MemoryRegion::new_raw(0xD019, 0xD01B, "active types").bind(variant),
            current_hp: MemoryRegion::new_raw(0xD017, 0xD019, "active current hp").bind(variant),
            max_hp: MemoryRegion::new_raw(0xD023, 0xD025, "active max hp").bind(variant),
            moves: MemoryRegion::new_raw(0xD01C, 0xD020, "active moves").bind(variant),
            pp: MemoryRegion::new_raw(0xD02D + 4, 0xD02D + 8, "active pp").bind(variant),
            dvs: MemoryRegion::new_raw(0xD020, 0xD022, "active dvs").bind(variant),
        }
    }

    pub fn species_id(&self, emu: &dyn Emulator) -> SpeciesId {
        SpeciesId(memory::read_u8(emu, self.species))
    }

    pub fn level(&self, emu: &dyn Emulator) -> u8 {
        memory::read_u8(emu, self.level)
    }

    pub fn status(&self, emu: &dyn Emulator) -> Status {
        status::parse_status(memory::read_u8(emu, self.status))
    }

    pub fn types(&self, emu: &dyn Emulator) -> (u8, u8) {
        let bytes = memory::read_u8_list(emu, self.types);
        (bytes[0], bytes[1])
    }

    pub fn current_hp(&self, emu: &dyn Emulator) -> u16 {
        memory::read_u16_hi_lo(emu, self.current_hp)
    }

    pub fn max_hp(&self, emu: &dyn Emulator) -> u16 {
        memory::read_u16_hi_lo(emu, self.max_hp)
    }

    pub fn move_ids(&self, emu: &dyn Emulator) -> [u8; 4] {
        let bytes = memory::read_u8_list(emu, self.moves);
        [bytes[0], bytes[1], bytes[2], bytes[3]]
    }

    pub fn pp(&self, emu: &dyn Emulator) -> [u8; 4] {
        let bytes = memory::read_u8_list(emu, self.pp);
        [bytes[0], bytes[1], bytes[2], bytes[3]]
    }

    pub fn dvs(&self, emu: &dyn Emulator) -> Dvs {
        let bytes = memory::read_u8_list(emu, self.dvs);
        dvs::parse_dvs(bytes[0], bytes[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulator::test_support::FakeEmulator;

    #[test]
    fn reads_level_from_its_own_address() {
        let active = ActivePokemon::bind(RomVariant::Red);
        let mut emu = FakeEmulator::default();
        emu.write_u8(0xD022, 57);
        assert_eq!(active.level(&emu), 57);
    }
}
