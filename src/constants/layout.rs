// Tue Feb 10 2026 - Alex
//
// Struct layouts, array geometry and sentinels for the observed process.
// Offsets are relative to the owning struct's base.

// GBA address space regions a text pointer may legally land in.
pub const EWRAM_START: u32 = 0x0200_0000;
pub const EWRAM_END: u32 = 0x0203_FFFF;
pub const IWRAM_START: u32 = 0x0300_0000;
pub const IWRAM_END: u32 = 0x0300_7FFF;
pub const ROM_START: u32 = 0x0800_0000;
pub const ROM_END: u32 = 0x09FF_FFFF;

// Cooperative scheduler (gTasks).
pub const NUM_TASKS: usize = 16;
pub const TASK_SIZE: usize = 0x28;
pub const TASK_FUNC_OFFSET: usize = 0x00;
pub const TASK_ISACTIVE_OFFSET: usize = 0x04;
pub const TASK_DATA_OFFSET: usize = 0x08;
pub const TASK_DATA_WORDS: usize = 16;

/// Code pointers carry the instruction-set tag in bit 0; identity
/// comparisons must mask it off on both sides.
pub const FUNC_PTR_MASK: u32 = 0xFFFF_FFFE;

// Text printers (sTextPrinters).
pub const NUM_TEXT_PRINTERS: usize = 32;
pub const TEXT_PRINTER_SIZE: usize = 0x24;
pub const PRINTER_TEXT_PTR_OFFSET: usize = 0x00;
pub const PRINTER_WINDOW_ID_OFFSET: usize = 0x04;
pub const PRINTER_ACTIVE_OFFSET: usize = 0x1B;

// Windows (gWindows).
pub const NUM_WINDOWS: usize = 32;
pub const WINDOW_SIZE: usize = 0x0C;
pub const WINDOW_BG_OFFSET: usize = 0x00;
pub const WINDOW_HEIGHT_OFFSET: usize = 0x04;
/// Sentinel id for "no window allocated".
pub const WINDOW_NONE: u8 = 0xFF;

// sMenu.
pub const SMENU_SIZE: usize = 0x0C;
pub const SMENU_CURSOR_POS_OFFSET: usize = 0x02;
pub const SMENU_MIN_CURSOR_POS_OFFSET: usize = 0x03;
pub const SMENU_MAX_CURSOR_POS_OFFSET: usize = 0x04;
pub const SMENU_WINDOW_ID_OFFSET: usize = 0x05;

// Script ListMenu template stored in the list task's data words.
pub const LISTMENU_ITEMS_PTR_OFFSET: usize = 0x00;
pub const LISTMENU_TOTAL_ITEMS_OFFSET: usize = 0x0C;
pub const LISTMENU_SCROLL_OFFSET: usize = 0x18;
pub const LISTMENU_ROW_OFFSET: usize = 0x1A;
/// Data word of the dispatcher task holding the list task id.
pub const SCRIPT_LIST_TASK_ID_INDEX: usize = 14;
pub const LISTMENU_SILPHCO_FLOORS: u16 = 1;

// Battle geometry.
pub const BATTLE_MAX_BATTLERS: usize = 4;
pub const BATTLE_MON_SIZE: usize = 0x58;
pub const BATTLE_MON_SPECIES_OFFSET: usize = 0x00;
pub const BATTLE_MON_MOVES_OFFSET: usize = 0x0C;
pub const BATTLE_MON_PP_OFFSET: usize = 0x24;
pub const BATTLE_MON_HP_OFFSET: usize = 0x28;
pub const BATTLE_MON_LEVEL_OFFSET: usize = 0x2A;
pub const BATTLE_MON_MAX_HP_OFFSET: usize = 0x2C;
pub const BATTLE_MON_NICKNAME_OFFSET: usize = 0x30;
pub const BATTLE_MON_NICKNAME_LEN: usize = 11;
pub const GBATTLECOMMUNICATION_SIZE: usize = 8;
pub const MOVE_NAME_LENGTH: usize = 13;
pub const MAX_MON_MOVES: usize = 4;

/// Battler position parity: even = player side, odd = opponent side.
pub const B_POSITION_OPPONENT_LEFT: u8 = 1;
pub const B_POSITION_OPPONENT_RIGHT: u8 = 3;

/// Screen height in pixels; the battle action window scrolls BG0 by one
/// screen, the move window by two. Empirical signal, see ui::battle.
pub const DISPLAY_HEIGHT: u16 = 160;

/// Battle-script opcodes that block on a yes/no style choice.
pub const BATTLE_SCRIPT_CHOICE_OPCODES: [u8; 3] = [0x5A, 0x5B, 0x67];

// Multichoice table geometry (sMultichoiceLists entries are {ptr, count}).
pub const MULTICHOICE_ENTRY_SIZE: u32 = 8;
pub const MULTICHOICE_ITEM_SIZE: u32 = 8;
/// Multichoice id of the Pokemon Center PC menu (options drawn manually).
pub const MULTI_PC: u16 = 0x0045;
/// Multichoice ids used by department-store style elevators.
pub const ELEVATOR_MULTICHOICE_IDS: [u16; 3] = [20, 31, 42];

pub const MENU_ACTION_SIZE: u32 = 8;

// Party menu block (gPartyMenu).
pub const PARTY_MENU_SLOT_ID_OFFSET: usize = 0x09;
pub const PARTY_MENU_ACTION_OFFSET: usize = 0x0B;
pub const PARTY_SIZE: usize = 6;

// In-battle indicator: bit 1 of the overworld flags byte mirrors
// "a battle is running".
pub const IN_BATTLE_BITMASK: u8 = 0x02;

pub const START_MENU_MAX_ACTIONS: usize = 9;

/// Event flag bitfield offset inside SaveBlock1.
pub const SAVEBLOCK1_FLAGS_OFFSET: u32 = 0x0EE0;

/// Selection marker prefixed to the focused entry of rendered menus.
pub const CURSOR_GLYPH: &str = "►";
