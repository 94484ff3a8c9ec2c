//! Domain views over live Pokémon data: party, active, and enemy.

pub mod active;
pub mod enemy;
pub mod party;
pub mod view;

pub use active::ActivePokemon;
pub use enemy::EnemyPokemon;
pub use party::{PartyLayout, PartyPokemon};
pub use view::PokemonView;
