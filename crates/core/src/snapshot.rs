//! The JSON projection published to the battle-info topic.
//!
//! These types mirror the wire schema exactly; nothing here reads
//! memory directly; callers assemble a [`SceneSnapshot`] from
//! [`crate::pokemon::PokemonView`]s and [`crate::moves::Move`]s already
//! in hand.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MoveView {
    pub name: String,
    pub effect: String,
    pub power: i16,
    #[serde(rename = "type")]
    pub move_type: String,
    /// Percentage, `0.0..=100.0`.
    pub accuracy: f32,
    /// `[remaining, max]`.
    pub pp: [u8; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct PokemonSnapshot {
    pub dex: u8,
    pub name: String,
    pub level: u8,
    /// `[current, max]`.
    pub hp: [u16; 2],
    pub types: [String; 2],
    pub status: Vec<String>,
    pub moves: Vec<MoveView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleScene {
    pub enemy: PokemonSnapshot,
    pub on_battle: PokemonSnapshot,
    pub party: [PokemonSnapshot; 6],
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub battle_id: u8,
    pub turn: u8,
    pub timestamp: f64,
    pub scene: BattleScene,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pokemon(name: &str) -> PokemonSnapshot {
        PokemonSnapshot {
            dex: 25,
            name: name.to_string(),
            level: 10,
            hp: [30, 35],
            types: ["Electric".to_string(), "".to_string()],
            status: vec!["Healthy".to_string()],
            moves: vec![MoveView {
                name: "THUNDERSHOCK".to_string(),
                effect: "Just damage.".to_string(),
                power: 40,
                move_type: "Electric".to_string(),
                accuracy: 100.0,
                pp: [30, 30],
            }],
        }
    }

    #[test]
    fn snapshot_serializes_with_the_documented_field_names() {
        let snapshot = SceneSnapshot {
            battle_id: 1,
            turn: 3,
            timestamp: 1_700_000_000.0,
            scene: BattleScene {
                enemy: sample_pokemon("PIKACHU"),
                on_battle: sample_pokemon("PIKACHU"),
                party: std::array::from_fn(|_| sample_pokemon("PIKACHU")),
            },
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["battle_id"], 1);
        assert_eq!(json["turn"], 3);
        assert_eq!(json["scene"]["enemy"]["dex"], 25);
        assert_eq!(json["scene"]["enemy"]["moves"][0]["type"], "Electric");
        assert_eq!(json["scene"]["party"].as_array().unwrap().len(), 6);
    }
}
