//! ROM variant identification and address relocation.
//!
//! Red/Blue and Yellow share almost the entire WRAM layout, but Yellow
//! inserts a single extra byte below `0xCF1A`, shifting everything at
//! or above that address down by one. [`MemoryRegion`] applies this
//! relocation once, at construction, so every other component can deal
//! in already-correct addresses.

use crate::error::ConfigError;

/// The inflection address above which Yellow's layout diverges from
/// Red/Blue's by one byte.
pub const YELLOW_SHIFT_THRESHOLD: u16 = 0xCF1A;

/// Which cartridge revision the harness is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomVariant {
    Red,
    Blue,
    Yellow,
}

impl RomVariant {
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Self::Red),
            "blue" | "b" => Ok(Self::Blue),
            "yellow" | "y" => Ok(Self::Yellow),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }

    /// Address offset this variant applies to regions at or above
    /// [`YELLOW_SHIFT_THRESHOLD`]. Always `0` below the threshold.
    fn relocation_offset(self) -> i32 {
        match self {
            Self::Red | Self::Blue => 0,
            Self::Yellow => -1,
        }
    }

    /// Relocate a raw `[start, end)` pair for this variant. Idempotent:
    /// applying the relocated pair through this function again yields
    /// the same pair, because the decision of whether to shift is made
    /// from the already-relocated addresses and a region that started
    /// above the threshold stays above it once shifted.
    pub fn relocate(self, start: u16, end: u16) -> (u16, u16) {
        let offset = self.relocation_offset();
        if offset == 0 {
            return (start, end);
        }
        let shift_start = start >= YELLOW_SHIFT_THRESHOLD;
        let shift_end = end >= YELLOW_SHIFT_THRESHOLD;
        let new_start = if shift_start { (start as i32 + offset) as u16 } else { start };
        let new_end = if shift_end { (end as i32 + offset) as u16 } else { end };
        (new_start, new_end)
    }
}

/// A named, half-open byte range `[start, end)` in the emulator's flat
/// address space, already relocated for the active [`RomVariant`].
///
/// Constructed once, at process startup, as a process-wide constant per
/// named address; never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct MemoryRegion {
    pub start: u16,
    pub end: u16,
    pub description: &'static str,
}

impl MemoryRegion {
    /// `start_raw`/`end_raw` are the Red/Blue addresses as documented;
    /// `variant` determines the relocation applied.
    pub const fn new_raw(start_raw: u16, end_raw: u16, description: &'static str) -> RawRegion {
        RawRegion { start_raw, end_raw, description }
    }

    pub fn size(&self) -> usize {
        (self.end - self.start) as usize
    }
}

/// A [`MemoryRegion`] not yet bound to a [`RomVariant`]. Call
/// [`RawRegion::bind`] once the variant is known at startup.
#[derive(Debug, Clone, Copy)]
pub struct RawRegion {
    pub start_raw: u16,
    pub end_raw: u16,
    pub description: &'static str,
}

impl RawRegion {
    pub fn bind(self, variant: RomVariant) -> MemoryRegion {
        debug_assert!(self.start_raw < self.end_raw, "region must be non-empty");
        let (start, end) = variant.relocate(self.start_raw, self.end_raw);
        MemoryRegion { start, end, description: self.description }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_blue_never_relocate() {
        for variant in [RomVariant::Red, RomVariant::Blue] {
            assert_eq!(variant.relocate(0xC000, 0xC010), (0xC000, 0xC010));
            assert_eq!(variant.relocate(0xCF1A, 0xCF20), (0xCF1A, 0xCF20));
        }
    }

    #[test]
    fn yellow_below_threshold_unchanged() {
        let (s, e) = RomVariant::Yellow.relocate(0xC000, 0xC010);
        assert_eq!((s, e), (0xC000, 0xC010));
    }

    #[test]
    fn yellow_at_or_above_threshold_shifts_by_one() {
        let (s, e) = RomVariant::Yellow.relocate(0xCF1A, 0xCF20);
        assert_eq!((s, e), (0xCF19, 0xCF1F));
    }

    #[test]
    fn yellow_straddling_span_shifts_only_the_endpoint_above_threshold() {
        let (s, e) = RomVariant::Yellow.relocate(0xCF10, 0xCF20);
        assert_eq!(s, 0xCF10);
        assert_eq!(e, 0xCF1F);
    }

    #[test]
    fn binding_the_same_raw_region_twice_is_idempotent() {
        let raw = MemoryRegion::new_raw(0xCD2D, 0xCD3A, "test region");
        let once = raw.bind(RomVariant::Yellow);
        let twice = raw.bind(RomVariant::Yellow);
        assert_eq!((once.start, once.end), (twice.start, twice.end));
    }

    #[test]
    fn from_str_parses_known_variants() {
        assert_eq!(RomVariant::from_str("red").unwrap(), RomVariant::Red);
        assert_eq!(RomVariant::from_str("Yellow").unwrap(), RomVariant::Yellow);
        assert!(RomVariant::from_str("emerald").is_err());
    }
}
