//! The capability interface uniting party, active and enemy Pokémon.
//!
//! The original distinguishes these three via abstract-base-class
//! inheritance and virtual properties; here they're a tagged variant
//! over three lens structs sharing the same read shape.

use crate::emulator::Emulator;
use crate::error::DecodeError;
use crate::moves::Move;
use crate::species::SpeciesId;
use crate::status::Status;
use crate::text::CharTable;

use super::active::ActivePokemon;
use super::enemy::EnemyPokemon;
use super::party::PartyPokemon;

/// Which underlying lens a [`PokemonView`] wraps.
#[derive(Clone, Copy)]
pub enum PokemonView {
    Party(PartyPokemon),
    Active(ActivePokemon),
    Enemy(EnemyPokemon),
}

impl PokemonView {
    pub fn species_id(&self, emu: &dyn Emulator) -> SpeciesId {
        match self {
            PokemonView::Party(p) => p.species_id(emu),
            PokemonView::Active(a) => a.species_id(emu),
            PokemonView::Enemy(e) => e.species_id(emu),
        }
    }

    pub fn level(&self, emu: &dyn Emulator) -> u8 {
        match self {
            PokemonView::Party(p) => p.level(emu),
            PokemonView::Active(a) => a.level(emu),
            PokemonView::Enemy(e) => e.level(emu),
        }
    }

    pub fn current_hp(&self, emu: &dyn Emulator) -> u16 {
        match self {
            PokemonView::Party(p) => p.current_hp(emu),
            PokemonView::Active(a) => a.current_hp(emu),
            PokemonView::Enemy(e) => e.current_hp(emu),
        }
    }

    pub fn max_hp(&self, emu: &dyn Emulator) -> u16 {
        match self {
            PokemonView::Party(p) => p.max_hp(emu),
            PokemonView::Active(a) => a.max_hp(emu),
            PokemonView::Enemy(e) => e.max_hp(emu),
        }
    }

    pub fn status(&self, emu: &dyn Emulator) -> Status {
        match self {
            PokemonView::Party(p) => p.status(emu),
            PokemonView::Active(a) => a.status(emu),
            PokemonView::Enemy(e) => e.status(emu),
        }
    }

    pub fn types(&self, emu: &dyn Emulator) -> (u8, u8) {
        match self {
            PokemonView::Party(p) => p.types(emu),
            PokemonView::Active(a) => a.types(emu),
            PokemonView::Enemy(e) => e.types(emu),
        }
    }

    fn move_ids(&self, emu: &dyn Emulator) -> [u8; 4] {
        match self {
            PokemonView::Party(p) => p.move_ids(emu),
            PokemonView::Active(a) => a.move_ids(emu),
            PokemonView::Enemy(e) => e.move_ids(emu),
        }
    }

    fn pp(&self, emu: &dyn Emulator) -> [u8; 4] {
        match self {
            PokemonView::Party(p) => p.pp(emu),
            PokemonView::Active(a) => a.pp(emu),
            PokemonView::Enemy(e) => e.pp(emu),
        }
    }

    /// Resolve this Pokémon's four move slots into full [`Move`]
    /// records, skipping empty slots (`move_id == 0`). Requires
    /// exclusive emulator access for the ROM bank switches involved.
    pub fn moves(&self, emu: &mut dyn Emulator, table: &CharTable) -> Result<Vec<Move>, DecodeError> {
        let ids = self.move_ids(emu);
        let pps = self.pp(emu);
        let mut out = Vec::with_capacity(4);
        for (slot, &id) in ids.iter().enumerate() {
            if id == 0 {
                continue;
            }
            let mut mv = Move::load_from_id(emu, id, table)?;
            mv.pp = pps[slot];
            out.push(mv);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulator::test_support::FakeEmulator;
    use crate::pokemon::party::PartyLayout;
    use crate::variant::RomVariant;

    #[test]
    fn dispatches_to_the_wrapped_lens() {
        let layout = PartyLayout::bind(RomVariant::Red);
        let mon = layout.slot(0).unwrap();
        let view = PokemonView::Party(mon);
        let mut emu = FakeEmulator::default();
        mon.set_level(&mut emu, 33);
        assert_eq!(view.level(&emu), 33);
    }

    #[test]
    fn moves_skips_empty_slots() {
        let table = CharTable::gen1();
        let active = ActivePokemon::bind(RomVariant::Red);
        let view = PokemonView::Active(active);
        let mut emu = FakeEmulator::default();
        // All move slots are zero by default -> no moves resolved, and
        // no ROM bank read is attempted.
        let moves = view.moves(&mut emu, &table).unwrap();
        assert!(moves.is_empty());
    }
}
