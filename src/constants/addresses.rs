// Tue Feb 10 2026 - Alex
//
// FireRed (BPRE rev 1.0) symbol addresses consulted by the classifier.
// One flat catalogue, imported by name; a value of 0 means the symbol is
// unavailable for this ROM revision and every gate that consults it must
// treat the signal as absent.

// ---------------------------------------------------------------------------
// Main loop / frame dispatch
// ---------------------------------------------------------------------------

pub const GMAIN_ADDR: u32 = 0x0300_30F0;
pub const GMAIN_CALLBACK2_OFFSET: u32 = 0x004;

/// Overworld frame callback (CB2_Overworld). Thumb address, bit 0 set.
pub const CB2_OVERWORLD_ADDR: u32 = 0x0805_6789;

// Title / main menu callbacks.
pub const CB2_INIT_TITLE_SCREEN_ADDR: u32 = 0x0807_8CA1;
pub const CB2_TITLE_SCREEN_ADDR: u32 = 0x0807_8E45;
pub const CB2_INIT_MAIN_MENU_ADDR: u32 = 0x0802_B9A5;
pub const CB2_MAIN_MENU_ADDR: u32 = 0x0802_BB21;
pub const CB2_REINIT_MAIN_MENU_ADDR: u32 = 0x0802_BA6D;

// Screen-owning callbacks consulted by individual detectors.
pub const CB2_LOAD_NAMING_SCREEN_ADDR: u32 = 0x0809_D745;
pub const CB2_NAMING_SCREEN_ADDR: u32 = 0x0809_D8E1;
pub const CB2_BAG_MENU_RUN_ADDR: u32 = 0x0810_7BE5;
pub const CB2_TM_CASE_ADDR: u32 = 0x0813_1D49;
pub const CB2_TRAINER_CARD_ADDR: u32 = 0x0808_9D01;
pub const CB2_PARTY_MENU_ADDR: u32 = 0x0811_F2A5;
pub const CB2_SHOP_BUY_MENU_ADDR: u32 = 0x0809_AF21;
pub const CB2_SUMMARY_SCREEN_ADDR: u32 = 0x0813_4F65;
pub const CB2_POKE_STORAGE_ADDR: u32 = 0x0808_CE11;
pub const CB2_FLY_MAP_ADDR: u32 = 0x080B_FD65;
pub const CB2_POKEDEX_ADDR: u32 = 0x0810_2B41;

// ---------------------------------------------------------------------------
// Scheduler tasks
// ---------------------------------------------------------------------------

pub const GTASKS_ADDR: u32 = 0x0300_5090;

pub const TASK_TITLE_SCREEN_PHASE1_ADDR: u32 = 0x0807_90D5;
pub const TASK_TITLE_SCREEN_PHASE2_ADDR: u32 = 0x0807_9211;
pub const TASK_TITLE_SCREEN_PHASE3_ADDR: u32 = 0x0807_9329;

pub const TASK_DISPLAY_MAIN_MENU_ADDR: u32 = 0x0802_BD41;
pub const TASK_HIGHLIGHT_SELECTED_MAIN_MENU_ITEM_ADDR: u32 = 0x0802_BF0D;
pub const TASK_HANDLE_MAIN_MENU_INPUT_ADDR: u32 = 0x0802_C059;

pub const TASK_SHOW_START_MENU_ADDR: u32 = 0x0806_F705;
pub const TASK_START_MENU_HANDLE_INPUT_ADDR: u32 = 0x0806_F889;

pub const TASK_HANDLE_YES_NO_INPUT_ADDR: u32 = 0x0806_45C1;
pub const TASK_CALL_YES_OR_NO_CALLBACK_ADDR: u32 = 0x0806_4689;
pub const TASK_HANDLE_MULTICHOICE_INPUT_ADDR: u32 = 0x0806_4231;

/// Script ListMenu drivers (Silph Co floor select and friends).
pub const TASK_LIST_MENU_HANDLE_INPUT_ADDR: u32 = 0x0806_4CE5;
pub const TASK_LIST_MENU_REMOVE_ADDR: u32 = 0x0806_4E01;

pub const TASK_SHOP_MENU_ADDR: u32 = 0x0809_ADC9;
pub const TASK_SHOP_BUY_HANDLE_INPUT_ADDR: u32 = 0x0809_B3C5;

pub const TASK_PLAYER_PC_PROCESS_MENU_INPUT_ADDR: u32 = 0x0809_3101;
pub const TASK_PLAYER_PC_DRAW_TOP_MENU_ADDR: u32 = 0x0809_3045;
pub const TASK_ITEM_STORAGE_PROCESS_MENU_INPUT_ADDR: u32 = 0x0809_33ED;
pub const TASK_ITEM_PC_HANDLE_INPUT_ADDR: u32 = 0x0809_3A75;
pub const TASK_ITEM_PC_SUBMENU_HANDLE_INPUT_ADDR: u32 = 0x0809_3D19;
pub const TASK_POKE_STORAGE_PC_MENU_ADDR: u32 = 0x0808_C675;

pub const TASK_CONTROLS_GUIDE_LOAD_PAGE_ADDR: u32 = 0x0812_E341;
pub const TASK_CONTROLS_GUIDE_HANDLE_INPUT_ADDR: u32 = 0x0812_E47D;
pub const TASK_PIKACHU_INTRO_LOAD_PAGE_ADDR: u32 = 0x0812_E9A1;
pub const TASK_PIKACHU_INTRO_HANDLE_INPUT_ADDR: u32 = 0x0812_EAD5;

pub const TASK_BERRY_CRUSH_RANKINGS_ADDR: u32 = 0x0814_C3B9;
pub const TASK_RUSH_INJURED_POKEMON_TO_CENTER_ADDR: u32 = 0x0805_6E3D;

pub const TASK_OPTION_MENU_FADE_IN_ADDR: u32 = 0x0808_8A41;
pub const TASK_OPTION_MENU_PROCESS_INPUT_ADDR: u32 = 0x0808_8B0D;

pub const TASK_SUMMARY_HANDLE_REPLACE_MOVE_INPUT_ADDR: u32 = 0x0813_6AC5;

/// New-game Oak speech task handlers; any of these active means the intro
/// lecture is running even though field controls are not locked.
pub const TASK_NEW_GAME_SPEECH_ADDRS: [u32; 4] = [
    0x0802_CB35,
    0x0802_CCE9,
    0x0802_CE9D,
    0x0802_D0C1,
];

pub const TASK_NEW_GAME_GENDER_MENU_ADDR: u32 = 0x0802_CF51;

// ---------------------------------------------------------------------------
// Text printers / string buffers / windows
// ---------------------------------------------------------------------------

pub const STEXTPRINTERS_ADDR: u32 = 0x0300_2F70;

pub const GSTRINGVAR1_ADDR: u32 = 0x0202_B2B8;
pub const GSTRINGVAR2_ADDR: u32 = 0x0202_B2FC;
pub const GSTRINGVAR3_ADDR: u32 = 0x0202_B340;
/// gStringVar1 through gStringVar3 are 68 bytes each.
pub const GSTRINGVAR_SIZE: u32 = 68;
pub const GSTRINGVAR4_ADDR: u32 = 0x0202_B4B8;
pub const GSTRINGVAR4_SIZE: u32 = 500;

pub const GDISPLAYEDSTRINGBATTLE_ADDR: u32 = 0x0202_2AB8;
pub const GDISPLAYEDSTRINGBATTLE_SIZE: u32 = 300;

// The three battle substitution buffers sit right after the displayed
// battle string.
pub const GBATTLETEXTBUFF1_ADDR: u32 = 0x0202_2BE4;
pub const GBATTLETEXTBUFF2_ADDR: u32 = 0x0202_2BF4;
pub const GBATTLETEXTBUFF3_ADDR: u32 = 0x0202_2C04;
pub const GBATTLETEXTBUFF_SIZE: u32 = 16;

pub const GWINDOWS_ADDR: u32 = 0x0202_F380;

pub const SMENU_ADDR: u32 = 0x0203_ADE4;
pub const SYESNO_WINDOWID_ADDR: u32 = 0x0203_ADE0;
pub const SSAVE_INFO_WINDOWID_ADDR: u32 = 0x0203_ADE1;

pub const START_MENU_WINDOW_ID_ADDR: u32 = 0x0203_ABCC;
pub const START_MENU_NUM_ACTIONS_ADDR: u32 = 0x0203_ABC8;
pub const START_MENU_CURSOR_POS_ADDR: u32 = 0x0203_ABCA;
pub const START_MENU_ACTIONS_ADDR: u32 = 0x0203_ABBC;

// ---------------------------------------------------------------------------
// Script engine / overworld state
// ---------------------------------------------------------------------------

pub const SCRIPT_LOCK_FIELD_CONTROLS_ADDR: u32 = 0x0300_0F2C;
pub const GQUEST_LOG_STATE_ADDR: u32 = 0x0300_5E88;
pub const GQUEST_LOG_PLAYBACK_STATE_ADDR: u32 = 0x0300_5E89;
pub const SQUEST_LOG_WINDOW_IDS_ADDR: u32 = 0x0203_B020;
pub const QUEST_LOG_WINDOW_COUNT: usize = 3;

pub const GSPECIALVAR_0X8004_ADDR: u32 = 0x0203_7380;
pub const GSPECIALVAR_0X8005_ADDR: u32 = 0x0203_7382;

pub const GSAVEBLOCK1_PTR_ADDR: u32 = 0x0300_5008;
pub const GSAVEBLOCK2_PTR_ADDR: u32 = 0x0300_500C;

// ---------------------------------------------------------------------------
// Multichoice / menus in ROM
// ---------------------------------------------------------------------------

pub const SMULTICHOICE_LISTS_ADDR: u32 = 0x083E_8A18;
pub const SPLAYER_PC_MENU_ACTIONS_ADDR: u32 = 0x083A_5D44;
pub const STOP_MENU_NUM_OPTIONS_ADDR: u32 = 0x0203_AB44;
pub const STOP_MENU_OPTION_ORDER_PTR_ADDR: u32 = 0x0203_AB48;
pub const SFLOOR_NAME_POINTERS_ADDR: u32 = 0x083E_9C40;
pub const SFLOOR_NAME_POINTERS_SIZE: u32 = 0x38;

// Static ROM strings surfaced as fallbacks when printers have gone idle.
pub const GTEXT_WOULD_YOU_LIKE_TO_SAVE_ADDR: u32 = 0x081A_09C4;
pub const GTEXT_ALREADY_SAVE_FILE_ADDR: u32 = 0x081A_0A11;
pub const GTEXT_DIFFERENT_GAME_FILE_ADDR: u32 = 0x081A_0A6E;
pub const GTEXT_WHICH_PC_ADDR: u32 = 0x081A_1B20;
pub const GTEXT_SOMEONES_PC_ADDR: u32 = 0x081A_1B61;
pub const GTEXT_LANETTES_PC_ADDR: u32 = 0x081A_1B72;
pub const GTEXT_HALL_OF_FAME_ADDR: u32 = 0x081A_1B84;
pub const GTEXT_LOG_OFF_ADDR: u32 = 0x081A_1B95;
pub const GTEXT_WHAT_WOULD_YOU_LIKE_ADDR: u32 = 0x081A_1BA4;
pub const GTEXT_WANT_WHICH_FLOOR_ADDR: u32 = 0x081A_4C31;
pub const GTEXT_NOW_ON_ADDR: u32 = 0x081A_4C55;
pub const GTEXT_SCURRIED_TO_CENTER_ADDR: u32 = 0x081A_2E09;
pub const GTEXT_SCURRIED_BACK_HOME_ADDR: u32 = 0x081A_2E6A;
pub const GTEXT_BOY_OR_GIRL_ADDR: u32 = 0x081A_07F1;

pub const FLAG_SYS_PC_LANETTE: u16 = 0x804;

// ---------------------------------------------------------------------------
// Battle
// ---------------------------------------------------------------------------

pub const GBATTLETYPEFLAGS_ADDR: u32 = 0x0202_2B4C;
pub const GBATTLERSCOUNT_ADDR: u32 = 0x0202_3BCC;
pub const GABSENTBATTLERFLAGS_ADDR: u32 = 0x0202_3DD0;
pub const GBATTLERPOSITIONS_ADDR: u32 = 0x0202_3BCE;
pub const GBATTLEMONS_ADDR: u32 = 0x0202_3BE4;
pub const GACTIVEBATTLER_ADDR: u32 = 0x0202_3BC4;
pub const GBATTLERCONTROLLERFUNCS_ADDR: u32 = 0x0300_4FE0;
pub const GACTIONSELECTIONCURSOR_ADDR: u32 = 0x0202_3D6C;
pub const GMOVESELECTIONCURSOR_ADDR: u32 = 0x0202_3D70;
pub const GMULTIUSEPLAYERCURSOR_ADDR: u32 = 0x0202_3D78;
pub const GBATTLESCRIPTCURRINSTR_ADDR: u32 = 0x0202_3D80;
pub const GBATTLECOMMUNICATION_ADDR: u32 = 0x0202_3D88;
pub const GBATTLE_BG0_Y_ADDR: u32 = 0x0202_2F2C;

/// The overworld mirrors "a battle is running" into this flags byte.
pub const IN_BATTLE_BIT_ADDR: u32 = 0x0300_0F9C;

/// ROM table of move names, fixed-width entries.
pub const GMOVE_NAMES_ADDR: u32 = 0x0824_7110;

/// Player battler controller handlers while a menu is waiting for input.
/// Each set lists the normal handler plus its link variant.
pub const BTL_HANDLE_ACTION_FUNCS: [u32; 2] = [0x0803_2FCD, 0x0812_B975];
pub const BTL_HANDLE_MOVE_FUNCS: [u32; 2] = [0x0803_3201, 0x0812_BB09];
pub const BTL_HANDLE_TARGET_FUNCS: [u32; 1] = [0x0803_35C5];
pub const BTL_HANDLE_YESNO_FUNCS: [u32; 1] = [0x0803_3781];

// ---------------------------------------------------------------------------
// Party / summary / storage
// ---------------------------------------------------------------------------

pub const GPARTY_MENU_ADDR: u32 = 0x0203_B0A0;
pub const GPLAYER_PARTY_COUNT_ADDR: u32 = 0x0202_4029;
pub const GPLAYER_PARTY_ADDR: u32 = 0x0202_402C;
pub const SPARTY_MENU_INTERNAL_PTR_ADDR: u32 = 0x0203_B09C;

pub const SPOKE_STORAGE_PTR_ADDR: u32 = 0x0203_9D00;
pub const SPOKE_STORAGE_CHOOSE_BOX_MENU_PTR_ADDR: u32 = 0x0203_9D04;
pub const SPOKE_STORAGE_IN_PARTY_MENU_ADDR: u32 = 0x0203_9D08;
pub const SPOKE_STORAGE_CURRENT_BOX_OPTION_ADDR: u32 = 0x0203_9D09;
pub const SPOKE_STORAGE_CURSOR_AREA_ADDR: u32 = 0x0203_9D0A;
pub const SPOKE_STORAGE_CURSOR_POSITION_ADDR: u32 = 0x0203_9D0B;

pub const GPLAYER_PC_ITEM_PAGE_INFO_ADDR: u32 = 0x0203_AB4C;
pub const SITEM_STORAGE_MENU_PTR_ADDR: u32 = 0x0203_AB58;
pub const SITEM_STORAGE_LIST_STATE_ADDR: u32 = 0x0203_AB5C;

pub const SNAMING_SCREEN_PTR_ADDR: u32 = 0x0203_A140;
