//! Species identity: internal ROM ordering vs. National Pokédex order.
//!
//! The ROM stores Pokémon by an internal index (`SpeciesId`) that has
//! nothing to do with Pokédex order — it reflects whatever order the
//! games' data tables happened to be built in, with gaps left by
//! "MissingNo." glitch entries. [`DexNumber`] is the familiar 1–151
//! ordering. The two tables below are the only bridge between them;
//! nothing in this crate re-derives one from the other.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Internal ROM species index, as stored in party/enemy memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeciesId(pub u8);

/// National Pokédex number, 1..=151 for Gen 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DexNumber(pub u8);

/// Canonical name in the two locales the harness cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesName {
    pub en: &'static str,
    pub fr: &'static str,
}

fn rom_to_dex_table() -> &'static HashMap<u8, u8> {
    static TABLE: OnceLock<HashMap<u8, u8>> = OnceLock::new();
    TABLE.get_or_init(|| {
        ROM_TO_DEX.iter().copied().collect()
    })
}

fn dex_to_rom_table() -> &'static HashMap<u8, u8> {
    static TABLE: OnceLock<HashMap<u8, u8>> = OnceLock::new();
    TABLE.get_or_init(|| {
        DEX_TO_ROM.iter().copied().collect()
    })
}

fn dex_to_name_table() -> &'static HashMap<u8, SpeciesName> {
    static TABLE: OnceLock<HashMap<u8, SpeciesName>> = OnceLock::new();
    TABLE.get_or_init(|| {
        DEX_TO_NAME
            .iter()
            .map(|&(dex, en, fr)| (dex, SpeciesName { en, fr }))
            .collect()
    })
}

impl SpeciesId {
    /// Look up the National Dex number for this ROM index. `None` for
    /// the "MissingNo." gaps the ROM table leaves unassigned.
    pub fn to_dex_number(self) -> Option<DexNumber> {
        rom_to_dex_table().get(&self.0).map(|&d| DexNumber(d))
    }
}

impl DexNumber {
    /// Look up the ROM species index for this Dex number.
    pub fn to_species_id(self) -> Option<SpeciesId> {
        dex_to_rom_table().get(&self.0).map(|&r| SpeciesId(r))
    }

    /// Canonical English/French name for this Dex number.
    pub fn name(self) -> Option<&'static SpeciesName> {
        dex_to_name_table().get(&self.0)
    }
}

/// ROM species index -> National Dex number. Indices absent from this
/// table are "MissingNo." glitch slots.
const ROM_TO_DEX: &[(u8, u8)] = &[
    (0x01, 112), (0x02, 115), (0x03, 32), (0x04, 35), (0x05, 21),
    (0x06, 100), (0x07, 34), (0x08, 80), (0x09, 2), (0x0A, 103),
    (0x0B, 108), (0x0C, 102), (0x0D, 88), (0x0E, 94), (0x0F, 29),
    (0x10, 31), (0x11, 104), (0x12, 111), (0x13, 131), (0x14, 59),
    (0x15, 151), (0x16, 130), (0x17, 90), (0x18, 72), (0x19, 92),
    (0x1A, 123), (0x1B, 120), (0x1C, 9), (0x1D, 127), (0x1E, 114),
    (0x21, 58), (0x22, 95), (0x23, 22), (0x24, 16), (0x25, 79),
    (0x26, 64), (0x27, 75), (0x28, 113), (0x29, 67), (0x2A, 122),
    (0x2B, 106), (0x2C, 107), (0x2D, 24), (0x2E, 47), (0x2F, 54),
    (0x30, 96), (0x31, 76), (0x33, 126), (0x35, 125), (0x36, 82),
    (0x37, 109), (0x39, 56), (0x3A, 86), (0x3B, 50), (0x3C, 128),
    (0x40, 83), (0x41, 48), (0x42, 149), (0x46, 84), (0x47, 60),
    (0x48, 124), (0x49, 146), (0x4A, 144), (0x4B, 145), (0x4C, 132),
    (0x4D, 52), (0x4E, 98), (0x52, 37), (0x53, 38), (0x54, 25),
    (0x55, 26), (0x58, 147), (0x59, 148), (0x5A, 140), (0x5B, 141),
    (0x5C, 116), (0x5D, 117), (0x60, 27), (0x61, 28), (0x62, 138),
    (0x63, 139), (0x64, 39), (0x65, 40), (0x66, 133), (0x67, 136),
    (0x68, 135), (0x69, 134), (0x6A, 66), (0x6B, 41), (0x6C, 23),
    (0x6D, 46), (0x6E, 61), (0x6F, 62), (0x70, 13), (0x71, 14),
    (0x72, 15), (0x74, 85), (0x75, 57), (0x76, 51), (0x77, 49),
    (0x78, 87), (0x7B, 10), (0x7C, 11), (0x7D, 12), (0x7E, 68),
    (0x80, 55), (0x81, 97), (0x82, 42), (0x83, 150), (0x84, 143),
    (0x85, 129), (0x88, 89), (0x8A, 99), (0x8B, 91), (0x8D, 101),
    (0x8E, 36), (0x8F, 110), (0x90, 53), (0x91, 105), (0x93, 93),
    (0x94, 63), (0x95, 65), (0x96, 17), (0x97, 18), (0x98, 121),
    (0x99, 1), (0x9A, 3), (0x9B, 73), (0x9D, 118), (0x9E, 119),
    (0xA3, 77), (0xA4, 78), (0xA5, 19), (0xA6, 20), (0xA7, 33),
    (0xA8, 30), (0xA9, 74), (0xAA, 137), (0xAB, 142), (0xAD, 81),
    (0xB0, 4), (0xB1, 7), (0xB2, 5), (0xB3, 8), (0xB4, 6),
    (0xB9, 43), (0xBA, 44), (0xBB, 45), (0xBC, 69), (0xBD, 70),
    (0xBE, 71),
];

/// National Dex number -> ROM species index. The inverse of
/// [`ROM_TO_DEX`]; kept as its own literal table (rather than derived)
/// so a lookup never has to scan the forward table backwards.
const DEX_TO_ROM: &[(u8, u8)] = &[
    (1, 0x99), (2, 0x09), (3, 0x9A), (4, 0xB0), (5, 0xB2),
    (6, 0xB4), (7, 0xB1), (8, 0xB3), (9, 0x1C), (10, 0x7B),
    (11, 0x7C), (12, 0x7D), (13, 0x70), (14, 0x71), (15, 0x72),
    (16, 0x24), (17, 0x96), (18, 0x97), (19, 0xA5), (20, 0xA6),
    (21, 0x05), (22, 0x23), (23, 0x6C), (24, 0x2D), (25, 0x54),
    (26, 0x55), (27, 0x60), (28, 0x61), (29, 0x0F), (30, 0xA8),
    (31, 0x10), (32, 0x03), (33, 0xA7), (34, 0x07), (35, 0x04),
    (36, 0x8E), (37, 0x52), (38, 0x53), (39, 0x64), (40, 0x65),
    (41, 0x6B), (42, 0x82), (43, 0xB9), (44, 0xBA), (45, 0xBB),
    (46, 0x6D), (47, 0x2E), (48, 0x41), (49, 0x77), (50, 0x3B),
    (51, 0x76), (52, 0x4D), (53, 0x90), (54, 0x2F), (55, 0x80),
    (56, 0x39), (57, 0x75), (58, 0x21), (59, 0x14), (60, 0x47),
    (61, 0x6E), (62, 0x6F), (63, 0x94), (64, 0x26), (65, 0x95),
    (66, 0x6A), (67, 0x29), (68, 0x7E), (69, 0xBC), (70, 0xBD),
    (71, 0xBE), (72, 0x18), (73, 0x9B), (74, 0xA9), (75, 0x27),
    (76, 0x31), (77, 0xA3), (78, 0xA4), (79, 0x25), (80, 0x08),
    (81, 0xAD), (82, 0x36), (83, 0x40), (84, 0x46), (85, 0x74),
    (86, 0x3A), (87, 0x78), (88, 0x0D), (89, 0x88), (90, 0x17),
    (91, 0x8B), (92, 0x19), (93, 0x93), (94, 0x0E), (95, 0x22),
    (96, 0x30), (97, 0x81), (98, 0x4E), (99, 0x8A), (100, 0x06),
    (101, 0x8D), (102, 0x0C), (103, 0x0A), (104, 0x11), (105, 0x91),
    (106, 0x2B), (107, 0x2C), (108, 0x0B), (109, 0x37), (110, 0x8F),
    (111, 0x12), (112, 0x01), (113, 0x28), (114, 0x1E), (115, 0x02),
    (116, 0x5C), (117, 0x5D), (118, 0x9D), (119, 0x9E), (120, 0x1B),
    (121, 0x98), (122, 0x2A), (123, 0x1A), (124, 0x48), (125, 0x35),
    (126, 0x33), (127, 0x1D), (128, 0x3C), (129, 0x85), (130, 0x16),
    (131, 0x13), (132, 0x4C), (133, 0x66), (134, 0x69), (135, 0x68),
    (136, 0x67), (137, 0xAA), (138, 0x62), (139, 0x63), (140, 0x5A),
    (141, 0x5B), (142, 0xAB), (143, 0x84), (144, 0x4A), (145, 0x4B),
    (146, 0x49), (147, 0x58), (148, 0x59), (149, 0x42), (150, 0x83),
    (151, 0x15),
];

/// National Dex number -> (English name, French name).
const DEX_TO_NAME: &[(u8, &str, &str)] = &[
    (1, "Bulbasaur", "Bulbizarre"), (2, "Ivysaur", "Herbizarre"),
    (3, "Venusaur", "Florizarre"), (4, "Charmander", "Salamèche"),
    (5, "Charmeleon", "Reptincel"), (6, "Charizard", "Dracaufeu"),
    (7, "Squirtle", "Carapuce"), (8, "Wartortle", "Carabaffe"),
    (9, "Blastoise", "Tortank"), (10, "Caterpie", "Chenipan"),
    (11, "Metapod", "Chrysacier"), (12, "Butterfree", "Papilusion"),
    (13, "Weedle", "Aspicot"), (14, "Kakuna", "Coconfort"),
    (15, "Beedrill", "Dardargnan"), (16, "Pidgey", "Roucool"),
    (17, "Pidgeotto", "Roucoups"), (18, "Pidgeot", "Roucarnage"),
    (19, "Rattata", "Rattata"), (20, "Raticate", "Rattatac"),
    (21, "Spearow", "Piafabec"), (22, "Fearow", "Rapasdepic"),
    (23, "Ekans", "Abo"), (24, "Arbok", "Arbok"),
    (25, "Pikachu", "Pikachu"), (26, "Raichu", "Raichu"),
    (27, "Sandshrew", "Sabelette"), (28, "Sandslash", "Sablaireau"),
    (29, "Nidoran♀", "Nidoran♀"), (30, "Nidorina", "Nidorina"),
    (31, "Nidoqueen", "Nidoqueen"), (32, "Nidoran♂", "Nidoran♂"),
    (33, "Nidorino", "Nidorino"), (34, "Nidoking", "Nidoking"),
    (35, "Clefairy", "Mélofée"), (36, "Clefable", "Mélodelfe"),
    (37, "Vulpix", "Goupix"), (38, "Ninetales", "Feunard"),
    (39, "Jigglypuff", "Rondoudou"), (40, "Wigglytuff", "Grodoudou"),
    (41, "Zubat", "Nosferapti"), (42, "Golbat", "Nosferalto"),
    (43, "Oddish", "Mystherbe"), (44, "Gloom", "Ortide"),
    (45, "Vileplume", "Rafflesia"), (46, "Paras", "Paras"),
    (47, "Parasect", "Parasect"), (48, "Venonat", "Mimitoss"),
    (49, "Venomoth", "Aéromite"), (50, "Diglett", "Taupiqueur"),
    (51, "Dugtrio", "Triopikeur"), (52, "Meowth", "Miaouss"),
    (53, "Persian", "Persian"), (54, "Psyduck", "Psykokwak"),
    (55, "Golduck", "Akwakwak"), (56, "Mankey", "Férosinge"),
    (57, "Primeape", "Colossinge"), (58, "Growlithe", "Caninos"),
    (59, "Arcanine", "Arcanin"), (60, "Poliwag", "Ptitard"),
    (61, "Poliwhirl", "Têtarte"), (62, "Poliwrath", "Tartard"),
    (63, "Abra", "Abra"), (64, "Kadabra", "Kadabra"),
    (65, "Alakazam", "Alakazam"), (66, "Machop", "Machoc"),
    (67, "Machoke", "Machopeur"), (68, "Machamp", "Mackogneur"),
    (69, "Bellsprout", "Chétiflor"), (70, "Weepinbell", "Boustiflor"),
    (71, "Victreebel", "Empiflor"), (72, "Tentacool", "Tentacool"),
    (73, "Tentacruel", "Tentacruel"), (74, "Geodude", "Racaillou"),
    (75, "Graveler", "Gravalanch"), (76, "Golem", "Grolem"),
    (77, "Ponyta", "Ponyta"), (78, "Rapidash", "Galopa"),
    (79, "Slowpoke", "Ramoloss"), (80, "Slowbro", "Flagadoss"),
    (81, "Magnemite", "Magnéti"), (82, "Magneton", "Magnéton"),
    (83, "Farfetch'd", "Canarticho"), (84, "Doduo", "Doduo"),
    (85, "Dodrio", "Dodrio"), (86, "Seel", "Otaria"),
    (87, "Dewgong", "Lamantine"), (88, "Grimer", "Tadmorv"),
    (89, "Muk", "Grotadmorv"), (90, "Shellder", "Kokiyas"),
    (91, "Cloyster", "Crustabri"), (92, "Gastly", "Fantominus"),
    (93, "Haunter", "Spectrum"), (94, "Gengar", "Ectoplasma"),
    (95, "Onix", "Onix"), (96, "Drowzee", "Soporifik"),
    (97, "Hypno", "Hypnomade"), (98, "Krabby", "Krabby"),
    (99, "Kingler", "Krabboss"), (100, "Voltorb", "Voltorbe"),
    (101, "Electrode", "Électrode"), (102, "Exeggcute", "Noeunoeuf"),
    (103, "Exeggutor", "Noadkoko"), (104, "Cubone", "Osselait"),
    (105, "Marowak", "Ossatueur"), (106, "Hitmonlee", "Kicklee"),
    (107, "Hitmonchan", "Tygnon"), (108, "Lickitung", "Excelangue"),
    (109, "Koffing", "Smogo"), (110, "Weezing", "Smogogo"),
    (111, "Rhyhorn", "Rhinocorne"), (112, "Rhydon", "Rhinoféros"),
    (113, "Chansey", "Leveinard"), (114, "Tangela", "Saquedeneu"),
    (115, "Kangaskhan", "Kangourex"), (116, "Horsea", "Hypotrempe"),
    (117, "Seadra", "Hypocéan"), (118, "Goldeen", "Poissirène"),
    (119, "Seaking", "Poissoroy"), (120, "Staryu", "Stari"),
    (121, "Starmie", "Staross"), (122, "Mr. Mime", "M. Mime"),
    (123, "Scyther", "Insécateur"), (124, "Jynx", "Lippoutou"),
    (125, "Electabuzz", "Élektek"), (126, "Magmar", "Magmar"),
    (127, "Pinsir", "Scarabrute"), (128, "Tauros", "Tauros"),
    (129, "Magikarp", "Magicarpe"), (130, "Gyarados", "Léviator"),
    (131, "Lapras", "Lokhlass"), (132, "Ditto", "Métamorph"),
    (133, "Eevee", "Évoli"), (134, "Vaporeon", "Aquali"),
    (135, "Jolteon", "Voltali"), (136, "Flareon", "Pyroli"),
    (137, "Porygon", "Porygon"), (138, "Omanyte", "Amonita"),
    (139, "Omastar", "Amonistar"), (140, "Kabuto", "Kabuto"),
    (141, "Kabutops", "Kabutops"), (142, "Aerodactyl", "Ptéra"),
    (143, "Snorlax", "Ronflex"), (144, "Articuno", "Artikodin"),
    (145, "Zapdos", "Électhor"), (146, "Moltres", "Sulfura"),
    (147, "Dratini", "Minidraco"), (148, "Dragonair", "Draco"),
    (149, "Dragonite", "Dracolosse"), (150, "Mewtwo", "Mewtwo"),
    (151, "Mew", "Mew"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_to_dex_and_back_round_trips_for_known_species() {
        let mew = SpeciesId(0x15);
        let dex = mew.to_dex_number().unwrap();
        assert_eq!(dex, DexNumber(151));
        assert_eq!(dex.to_species_id().unwrap(), mew);
    }

    #[test]
    fn missingno_gaps_resolve_to_none() {
        assert!(SpeciesId(0x1F).to_dex_number().is_none());
        assert!(SpeciesId(0x20).to_dex_number().is_none());
    }

    #[test]
    fn every_dex_number_1_to_151_has_a_name_and_a_rom_id() {
        for dex in 1..=151u8 {
            let d = DexNumber(dex);
            assert!(d.to_species_id().is_some(), "missing rom id for dex {dex}");
            assert!(d.name().is_some(), "missing name for dex {dex}");
        }
    }

    #[test]
    fn bulbasaur_name_is_localized() {
        let name = DexNumber(1).name().unwrap();
        assert_eq!(name.en, "Bulbasaur");
        assert_eq!(name.fr, "Bulbizarre");
    }
}
