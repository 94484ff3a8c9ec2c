//! In-game menu overlay state.
//!
//! `MenuState` is a snapshot, not a lens: the scene state machine needs
//! to reason about several fields together at one instant (a cursor
//! that moved mid-read would be worse than useless), so this is the
//! one domain view that reads everything up front rather than exposing
//! per-field accessors.

use crate::emulator::Emulator;
use crate::memory;
use crate::variant::{MemoryRegion, RomVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub cursor_x_top: u8,
    pub cursor_y_top: u8,
    pub selected_item_id: u8,
    pub hidden_tile_under_cursor: u8,
    pub last_item_id: u8,
    pub key_bitmask: u8,
    pub previous_item_id: u8,
    pub last_party_cursor_pos: u8,
    pub last_item_cursor_pos: u8,
    pub last_battle_cursor_pos: u8,
    pub current_party_index: u8,
    pub cursor_tile_ptr: u16,
    pub first_displayed_item_id: u8,
    pub select_highlight: u8,
}

impl MenuState {
    pub fn cursor_pos_top(&self) -> (u8, u8) {
        (self.cursor_x_top, self.cursor_y_top)
    }

    pub fn has_select_highlight(&self) -> bool {
        self.select_highlight != 0
    }
}

/// WRAM addresses backing [`MenuState`], relocated per [`RomVariant`].
#[derive(Debug, Clone, Copy)]
pub struct MenuLayout {
    cursor_y: MemoryRegion,
    cursor_x: MemoryRegion,
    selected_item: MemoryRegion,
    hidden_tile: MemoryRegion,
    last_item_id: MemoryRegion,
    key_bitmask: MemoryRegion,
    previous_item_id: MemoryRegion,
    last_party_pos: MemoryRegion,
    last_item_pos: MemoryRegion,
    last_battle_pos: MemoryRegion,
    current_party_index: MemoryRegion,
    cursor_tile_ptr: MemoryRegion,
    first_item_id: MemoryRegion,
    select_highlight: MemoryRegion,
}

impl MenuLayout {
    pub fn bind(variant: RomVariant) -> Self {
        Self {
            cursor_y: MemoryRegion::new_raw(0xCC24, 0xCC25, "menu cursor y").bind(variant),
            cursor_x: MemoryRegion::new_raw(0xCC25, 0xCC26, "menu cursor x").bind(variant),
            selected_item: MemoryRegion::new_raw(0xCC26, 0xCC27, "menu selected item").bind(variant),
            hidden_tile: MemoryRegion::new_raw(0xCC27, 0xCC28, "menu hidden tile").bind(variant),
            last_item_id: MemoryRegion::new_raw(0xCC36, 0xCC37, "menu last item id").bind(variant),
            key_bitmask: MemoryRegion::new_raw(0xCC29, 0xCC2A, "menu key bitmask").bind(variant),
            previous_item_id: MemoryRegion::new_raw(0xCC2A, 0xCC2B, "menu previous item id").bind(variant),
            last_party_pos: MemoryRegion::new_raw(0xCC2B, 0xCC2C, "menu last party pos").bind(variant),
            last_item_pos: MemoryRegion::new_raw(0xCC2C, 0xCC2D, "menu last item pos").bind(variant),
            last_battle_pos: MemoryRegion::new_raw(0xCC2D, 0xCC2E, "menu last battle pos").bind(variant),
            current_party_index: MemoryRegion::new_raw(0xCC2E, 0xCC2F, "menu current party index").bind(variant),
            cursor_tile_ptr: MemoryRegion::new_raw(0xCC30, 0xCC32, "menu cursor tile ptr").bind(variant),
            first_item_id: MemoryRegion::new_raw(0xCC32, 0xCC33, "menu first displayed item id").bind(variant),
            select_highlight: MemoryRegion::new_raw(0xCC35, 0xCC36, "menu select highlight").bind(variant),
        }
    }

    /// Read every field in one pass.
    pub fn read(&self, emu: &dyn Emulator) -> MenuState {
        MenuState {
            cursor_y_top: memory::read_u8(emu, self.cursor_y),
            cursor_x_top: memory::read_u8(emu, self.cursor_x),
            selected_item_id: memory::read_u8(emu, self.selected_item),
            hidden_tile_under_cursor: memory::read_u8(emu, self.hidden_tile),
            last_item_id: memory::read_u8(emu, self.last_item_id),
            key_bitmask: memory::read_u8(emu, self.key_bitmask),
            previous_item_id: memory::read_u8(emu, self.previous_item_id),
            last_party_cursor_pos: memory::read_u8(emu, self.last_party_pos),
            last_item_cursor_pos: memory::read_u8(emu, self.last_item_pos),
            last_battle_cursor_pos: memory::read_u8(emu, self.last_battle_pos),
            current_party_index: memory::read_u8(emu, self.current_party_index),
            cursor_tile_ptr: memory::read_u16_hi_lo(emu, self.cursor_tile_ptr),
            first_displayed_item_id: memory::read_u8(emu, self.first_item_id),
            select_highlight: memory::read_u8(emu, self.select_highlight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulator::test_support::FakeEmulator;

    #[test]
    fn reads_cursor_and_selection_fields() {
        let layout = MenuLayout::bind(RomVariant::Red);
        let mut emu = FakeEmulator::default();
        emu.write_u8(0xCC25, 9);
        emu.write_u8(0xCC24, 14);
        emu.write_u8(0xCC26, 0);
        let state = layout.read(&emu);
        assert_eq!(state.cursor_pos_top(), (9, 14));
        assert_eq!(state.selected_item_id, 0);
    }

    #[test]
    fn select_highlight_flag_follows_the_raw_byte() {
        let layout = MenuLayout::bind(RomVariant::Red);
        let mut emu = FakeEmulator::default();
        emu.write_u8(0xCC35, 1);
        assert!(layout.read(&emu).has_select_highlight());
    }
}
