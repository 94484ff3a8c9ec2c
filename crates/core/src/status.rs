//! Status-condition byte decoding.
//!
//! Bits 0–2 hold a sleep-turn counter; when non-zero the Pokémon is
//! asleep and every other bit is meaningless. Otherwise bits 3–6 flag
//! poisoned/burned/frozen/paralysed, at most one of which is ever set
//! by the game. This supersedes the older `Sleep (N turn asleep)`
//! phrasing found in scattered early readers; the live game UI reads
//! `Sleep (7 − counter)/7`.

const SLEEP_COUNTER_MASK: u8 = 0b0000_0111;
const POISONED_BIT: u8 = 0b0000_1000;
const BURNED_BIT: u8 = 0b0001_0000;
const FROZEN_BIT: u8 = 0b0010_0000;
const PARALYSED_BIT: u8 = 0b0100_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Healthy,
    Asleep { counter: u8 },
    Poisoned,
    Burned,
    Frozen,
    Paralysed,
}

impl Status {
    /// Render the way the game's own status line reads.
    pub fn display(self) -> String {
        match self {
            Status::Healthy => "Healthy".to_string(),
            Status::Asleep { counter } => format!("Sleep ({}/7)", 7 - counter),
            Status::Poisoned => "Poisoned".to_string(),
            Status::Burned => "Burned".to_string(),
            Status::Frozen => "Frozen".to_string(),
            Status::Paralysed => "Paralysed".to_string(),
        }
    }
}

/// Decode a status byte per the rule above.
pub fn parse_status(b: u8) -> Status {
    let counter = b & SLEEP_COUNTER_MASK;
    if counter != 0 {
        return Status::Asleep { counter };
    }
    if b & POISONED_BIT != 0 {
        return Status::Poisoned;
    }
    if b & BURNED_BIT != 0 {
        return Status::Burned;
    }
    if b & FROZEN_BIT != 0 {
        return Status::Frozen;
    }
    if b & PARALYSED_BIT != 0 {
        return Status::Paralysed;
    }
    Status::Healthy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_byte_is_healthy() {
        assert_eq!(parse_status(0x00), Status::Healthy);
    }

    #[test]
    fn sleep_counter_takes_priority_over_other_bits() {
        let status = parse_status(0b0101_0011);
        assert_eq!(status, Status::Asleep { counter: 3 });
        assert_eq!(status.display(), "Sleep (4/7)");
    }

    #[test]
    fn each_condition_bit_decodes_independently() {
        assert_eq!(parse_status(POISONED_BIT), Status::Poisoned);
        assert_eq!(parse_status(BURNED_BIT), Status::Burned);
        assert_eq!(parse_status(FROZEN_BIT), Status::Frozen);
        assert_eq!(parse_status(PARALYSED_BIT), Status::Paralysed);
    }

    #[test]
    fn fully_rested_sleep_counter_displays_seven_sevenths() {
        assert_eq!(parse_status(0b001).display(), "Sleep (6/7)");
    }
}
