//! Gen-1 packed text decoding.
//!
//! Game text is stored as a byte stream terminated by a sentinel
//! (`0x50`). Each byte maps to a grapheme via [`CharTable`]; unknown
//! bytes render as `<?HH>` placeholders so gaps in the table are
//! visible rather than silently dropped. Decoding is one-way: nothing
//! in this harness re-encodes text back into the game's byte form.

use std::collections::HashMap;

/// Terminator byte that ends a packed string.
pub const TERMINATOR: u8 = 0x50;

/// A byte-to-grapheme mapping for Gen-1 packed text.
pub struct CharTable {
    entries: HashMap<u8, &'static str>,
}

impl CharTable {
    /// The standard Gen-1 table: uppercase/lowercase letters, digits,
    /// and the handful of control glyphs the harness needs to render
    /// (species/player placeholders, ellipsis, gender symbols).
    pub fn gen1() -> Self {
        let mut entries = HashMap::new();

        const UPPER: &[&str] = &[
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
            "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
        ];
        for (i, ch) in UPPER.iter().enumerate() {
            entries.insert(0x80 + i as u8, *ch);
        }

        const LOWER: &[&str] = &[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
            "r", "s", "t", "u", "v", "w", "x", "y", "z",
        ];
        for (i, ch) in LOWER.iter().enumerate() {
            entries.insert(0xA0 + i as u8, *ch);
        }

        const DIGITS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        for (i, ch) in DIGITS.iter().enumerate() {
            entries.insert(0xF6 + i as u8, *ch);
        }

        entries.insert(0x7F, " ");
        entries.insert(0xE0, "<pkmn>");
        entries.insert(0xE1, "<player>");
        entries.insert(0xE3, "…");
        entries.insert(0xE6, "'");
        entries.insert(0xE7, "♂");
        entries.insert(0xE8, "♀");
        entries.insert(0xE9, "é");
        entries.insert(0xEE, "?");
        entries.insert(0xEF, "!");
        entries.insert(0x54, ".");
        entries.insert(0x53, "-");

        Self { entries }
    }

    pub fn get(&self, byte: u8) -> Option<&'static str> {
        self.entries.get(&byte).copied()
    }
}

/// Decode a packed byte string using `table`.
///
/// When `stop_at_terminator` is `true` (the default for every caller
/// in this crate), decoding halts at the first [`TERMINATOR`] byte
/// rather than including it in the output. Unknown bytes render as
/// `<?HH>` in uppercase hex.
pub fn decode(bytes: &[u8], table: &CharTable, stop_at_terminator: bool) -> String {
    let mut out = String::new();
    for &b in bytes {
        if stop_at_terminator && b == TERMINATOR {
            break;
        }
        match table.get(b) {
            Some(grapheme) => out.push_str(grapheme),
            None => out.push_str(&format!("<?{b:02X}>")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_basic_letters() {
        let table = CharTable::gen1();
        let decoded = decode(&[0x91, 0x84, 0x83, 0x50], &table, true);
        assert_eq!(decoded, "RED");
    }

    #[test]
    fn unknown_byte_renders_as_placeholder() {
        let table = CharTable::gen1();
        let decoded = decode(&[0x00], &table, false);
        assert_eq!(decoded, "<?00>");
    }

    #[test]
    fn terminator_truncates_decoding() {
        let table = CharTable::gen1();
        let bytes = [0x91, 0x84, 0x83, 0x50, 0x91, 0x91, 0x91];
        let full = decode(&bytes, &table, true);
        let prefix_idx = bytes.iter().position(|&b| b == TERMINATOR).unwrap();
        let truncated = decode(&bytes[..prefix_idx], &table, true);
        assert_eq!(full, truncated);
    }

    #[test]
    fn decoding_without_terminator_still_stops_at_end_of_input() {
        let table = CharTable::gen1();
        let decoded = decode(&[0x91, 0x84], &table, true);
        assert_eq!(decoded, "RE");
    }
}
