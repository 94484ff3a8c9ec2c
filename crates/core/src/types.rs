//! Gen-1 elemental type ids.
//!
//! The ROM's type ids are not contiguous: physical types occupy
//! `0x00..0x09`, special types resume at `0x14`. Ids with no assigned
//! name (`0x06`, `0x09`) are kept in the table as documented gaps
//! rather than silently absorbed into a neighbour.

const TYPE_NAMES: &[(u8, &str)] = &[
    (0, "Normal"),
    (1, "Fighting"),
    (2, "Flying"),
    (3, "Poison"),
    (4, "Ground"),
    (5, "Rock"),
    (6, "Bird"),
    (7, "Bug"),
    (8, "Ghost"),
    (9, "Steel"),
    (20, "Fire"),
    (21, "Water"),
    (22, "Grass"),
    (23, "Electric"),
    (24, "Psychic"),
    (25, "Ice"),
    (26, "Dragon"),
];

/// Name for a raw type id, or `None` for an unassigned id.
pub fn type_name(id: u8) -> Option<&'static str> {
    TYPE_NAMES.iter().find(|&&(t, _)| t == id).map(|&(_, name)| name)
}
