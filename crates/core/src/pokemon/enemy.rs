//! Enemy Pokémon lens: the active opponent's in-battle struct.
//!
//! Unlike the party record, the in-battle structs are not one
//! contiguous 44-byte block; the fields below are individually
//! addressed, mirroring how the original memory map names them one at
//! a time rather than as a single struct.

use crate::dvs::{self, Dvs};
use crate::emulator::Emulator;
use crate::memory;
use crate::species::SpeciesId;
use crate::status::{self, Status};
use crate::variant::{MemoryRegion, RomVariant};

#[derive(Debug, Clone, Copy)]
pub struct EnemyPokemon {
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

impl EnemyPokemon {
    pub fn bind(variant: RomVariant) -> Self {
        Self {
            species: MemoryRegion::new_raw(0xCFE5, 0xCFE6, "enemy species").bind(variant),
            level: MemoryRegion::new_raw(0xCFF3, 0xCFF4, "enemy level").bind(variant),
            status: MemoryRegion::new_raw(0xCFE7, 0xCFE8, "enemy status").bind(variant),
            types: MemoryRegion::new_raw(0xCFEA, 0xCFEC, "enemy types").bind(variant),
            current_hp: MemoryRegion::new_raw(0xCFE8, 0xCFEA, "enemy current hp").bind(variant),
            max_hp: MemoryRegion::new_raw(0xCFF4, 0xCFF6, "enemy max hp").bind(variant),
            moves: MemoryRegion::new_raw(0xCFED, 0xCFF1, "enemy moves").bind(variant),
            pp: MemoryRegion::new_raw(0xD02C, 0xD030, "enemy pp").bind(variant),
            dvs: MemoryRegion::new_raw(0xCFF1, 0xCFF3, "enemy dvs").bind(variant),
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
    fn reads_species_and_hp_from_their_own_addresses() {
        let enemy = EnemyPokemon::bind(RomVariant::Red);
        let mut emu = FakeEmulator::default();
        emu.write_u8(0xCFE5, 0x99);
        emu.write_u8(0xCFE8, 0x00);
        emu.write_u8(0xCFE9, 0x2A);
        assert_eq!(enemy.species_id(&emu).0, 0x99);
        assert_eq!(enemy.current_hp(&emu), 42);
    }
}
