//! Assembles the JSON-ready [`SceneSnapshot`] from live memory reads.
//!
//! Mirrors `NormalBattle.to_dict()` from the prototype this harness is
//! based on: one enemy, one active battler, and the six party slots,
//! each resolved into a [`PokemonSnapshot`] with its moves spelled out.

use harness_core::emulator::Emulator;
use harness_core::error::DecodeError;
use harness_core::moves::Move;
use harness_core::pokemon::{ActivePokemon, EnemyPokemon, PartyLayout, PokemonView};
use harness_core::snapshot::{BattleScene, MoveView, PokemonSnapshot};
use harness_core::species::DexNumber;
use harness_core::status::Status;
use harness_core::text::CharTable;
use harness_core::types;

fn status_labels(status: Status) -> Vec<String> {
    vec![status.display()]
}

fn type_labels(raw: (u8, u8)) -> [String; 2] {
    [
        types::type_name(raw.0).unwrap_or("").to_string(),
        types::type_name(raw.1).unwrap_or("").to_string(),
    ]
}

fn move_view(mv: &Move) -> MoveView {
    MoveView {
        name: mv.name.clone(),
        effect: mv.effect_description().to_string(),
        power: mv.power as i16,
        move_type: types::type_name(mv.move_type).unwrap_or("").to_string(),
        accuracy: mv.accuracy_percent(),
        pp: [mv.pp, mv.pp],
    }
}

fn pokemon_snapshot(
    view: &PokemonView,
    emu: &mut dyn Emulator,
    table: &CharTable,
) -> Result<PokemonSnapshot, DecodeError> {
    let species = view.species_id(emu);
    let dex = species.to_dex_number();
    let name = dex.and_then(DexNumber::name).map(|n| n.en.to_string()).unwrap_or_default();
    let moves = view.moves(emu, table)?.iter().map(move_view).collect();

    Ok(PokemonSnapshot {
        dex: dex.map(|d| d.0).unwrap_or(0),
        name,
        level: view.level(emu),
        hp: [view.current_hp(emu), view.max_hp(emu)],
        types: type_labels(view.types(emu)),
        status: status_labels(view.status(emu)),
        moves,
    })
}

/// Build a full battle snapshot for the currently active battle.
/// Requires exclusive emulator access: each Pokémon's moves trigger a
/// ROM bank switch.
pub fn build_battle_scene(
    party: &PartyLayout,
    active: &ActivePokemon,
    enemy: &EnemyPokemon,
    emu: &mut dyn Emulator,
    table: &CharTable,
) -> Result<BattleScene, DecodeError> {
    let enemy_view = PokemonView::Enemy(*enemy);
    let active_view = PokemonView::Active(*active);

    let enemy_snapshot = pokemon_snapshot(&enemy_view, emu, table)?;
    let on_battle_snapshot = pokemon_snapshot(&active_view, emu, table)?;

    let mut party_snapshots = Vec::with_capacity(6);
    for slot in 0..6 {
        let mon = party.slot(slot).expect("party slots 0..6 are always in range");
        let view = PokemonView::Party(mon);
        party_snapshots.push(pokemon_snapshot(&view, emu, table)?);
    }

    Ok(BattleScene {
        enemy: enemy_snapshot,
        on_battle: on_battle_snapshot,
        party: party_snapshots.try_into().unwrap_or_else(|_| unreachable!()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use harness_core::emulator::test_support::FakeEmulator;
    use harness_core::variant::RomVariant;

    #[test]
    fn builds_a_snapshot_with_empty_moves_when_nothing_is_set() {
        let table = CharTable::gen1();
        let party = PartyLayout::bind(RomVariant::Red);
        let active = ActivePokemon::bind(RomVariant::Red);
        let enemy = EnemyPokemon::bind(RomVariant::Red);
        let mut emu = FakeEmulator::default();

        let scene = build_battle_scene(&party, &active, &enemy, &mut emu, &table).unwrap();
        assert_eq!(scene.party.len(), 6);
        assert!(scene.enemy.moves.is_empty());
    }
}
