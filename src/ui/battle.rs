// Tue Feb 10 2026 - Alex
//
// In-battle UI recognition. The authoritative signal is which input
// handler each player-side battler controller is parked on; two
// empirical fallbacks cover the window between menu setup and handler
// installation.

use bitflags::bitflags;

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::text::decode::decode_text;
use crate::ui::context::QueryContext;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BattleTypeFlags: u32 {
        const DOUBLE = 0x0001;
        const LINK = 0x0002;
        const IS_MASTER = 0x0004;
        const TRAINER = 0x0008;
        const FIRST_BATTLE = 0x0010;
        const LINK_IN_BATTLE = 0x0020;
        const MULTI = 0x0040;
        const SAFARI = 0x0080;
        const OLD_MAN_TUTORIAL = 0x0100;
        const ROAMER = 0x0200;
        const GHOST = 0x8000;
    }
}

const ACTION_LABELS: [&str; 4] = ["FIGHT", "BAG", "POKéMON", "RUN"];
const SAFARI_ACTION_LABELS: [&str; 4] = ["BALL", "POKéBLOCK", "GO NEAR", "RUN"];

pub fn battle_type_flags(ctx: &QueryContext) -> BattleTypeFlags {
    BattleTypeFlags::from_bits_truncate(ctx.u32(addr::GBATTLETYPEFLAGS_ADDR))
}

fn controller_func(ctx: &QueryContext, battler: usize) -> u32 {
    ctx.u32(addr::GBATTLERCONTROLLERFUNCS_ADDR + (battler * 4) as u32) & layout::FUNC_PTR_MASK
}

fn func_matches_any(func: u32, set: &[u32]) -> bool {
    set.iter()
        .any(|&known| known != 0 && func == known & layout::FUNC_PTR_MASK)
}

fn battler_position(ctx: &QueryContext, battler: usize) -> u8 {
    ctx.u8(addr::GBATTLERPOSITIONS_ADDR + battler as u32)
}

fn battler_present(ctx: &QueryContext, battler: usize) -> bool {
    let absent = ctx.u8(addr::GABSENTBATTLERFLAGS_ADDR);
    absent & (1 << battler) == 0
}

/// Player-side battlers (even position parity) that are present, in
/// battler order.
fn player_battlers(ctx: &QueryContext) -> Vec<usize> {
    let count = (ctx.u8(addr::GBATTLERSCOUNT_ADDR) as usize).min(layout::BATTLE_MAX_BATTLERS);
    (0..count)
        .filter(|&b| battler_present(ctx, b) && battler_position(ctx, b) % 2 == 0)
        .collect()
}

fn opponent_battlers(ctx: &QueryContext) -> Vec<usize> {
    let count = (ctx.u8(addr::GBATTLERSCOUNT_ADDR) as usize).min(layout::BATTLE_MAX_BATTLERS);
    (0..count)
        .filter(|&b| battler_present(ctx, b) && battler_position(ctx, b) % 2 == 1)
        .collect()
}

fn mon_nickname(ctx: &QueryContext, battler: usize) -> Option<String> {
    let base = addr::GBATTLEMONS_ADDR + (battler * layout::BATTLE_MON_SIZE) as u32;
    let raw = ctx.bytes(
        base + layout::BATTLE_MON_NICKNAME_OFFSET as u32,
        layout::BATTLE_MON_NICKNAME_LEN,
    )?;
    let name = decode_text(&raw, raw.len(), false);
    (!name.is_empty()).then_some(name)
}

fn mon_move_names(ctx: &QueryContext, battler: usize) -> Vec<String> {
    let base = addr::GBATTLEMONS_ADDR + (battler * layout::BATTLE_MON_SIZE) as u32;
    let mut names = Vec::new();
    for slot in 0..layout::MAX_MON_MOVES {
        let move_id = ctx.u16(base + (layout::BATTLE_MON_MOVES_OFFSET + slot * 2) as u32);
        if move_id == 0 {
            continue;
        }
        let name_addr =
            addr::GMOVE_NAMES_ADDR + move_id as u32 * layout::MOVE_NAME_LENGTH as u32;
        match ctx.rom_string(name_addr, layout::MOVE_NAME_LENGTH) {
            Some(name) => names.push(name),
            None => names.push(format!("MOVE {}", slot + 1)),
        }
    }
    names
}

fn displayed_battle_text(ctx: &QueryContext) -> String {
    let Some(raw) = ctx.bytes(
        addr::GDISPLAYEDSTRINGBATTLE_ADDR,
        addr::GDISPLAYEDSTRINGBATTLE_SIZE as usize,
    ) else {
        return String::new();
    };
    decode_text(&raw, raw.len(), false)
}

fn action_labels(ctx: &QueryContext) -> Vec<String> {
    let labels = if battle_type_flags(ctx).contains(BattleTypeFlags::SAFARI) {
        SAFARI_ACTION_LABELS
    } else {
        ACTION_LABELS
    };
    labels.iter().map(|s| s.to_string()).collect()
}

fn action_state(ctx: &QueryContext, battler: usize, via: Option<&'static str>) -> UiState {
    let options = action_labels(ctx);
    let cursor = ctx.u8(addr::GACTIONSELECTIONCURSOR_ADDR + battler as u32) as usize;
    let choice = ChoiceMenu::new(ChoiceKind::Actions, options.clone(), cursor);
    let grid = menu::render_grid2x2(&options, choice.cursor_position);
    let prompt = displayed_battle_text(ctx);
    let visible = if prompt.is_empty() {
        grid
    } else {
        format!("{prompt}\n{grid}")
    };
    let mut state = UiState::new(ScreenKind::BattleActions, visible).with_choice(choice);
    if let Some(signal) = via {
        state = state.via(signal);
    }
    state
}

fn move_state(ctx: &QueryContext, battler: usize, via: Option<&'static str>) -> UiState {
    let options = mon_move_names(ctx, battler);
    let cursor = ctx.u8(addr::GMOVESELECTIONCURSOR_ADDR + battler as u32) as usize;
    let choice = ChoiceMenu::new(ChoiceKind::Moves, options.clone(), cursor);
    let visible = menu::render_grid2x2(&options, choice.cursor_position);
    let mut state = UiState::new(ScreenKind::BattleMoves, visible).with_choice(choice);
    if let Some(signal) = via {
        state = state.via(signal);
    }
    state
}

fn target_state(ctx: &QueryContext) -> UiState {
    let mut options = Vec::new();
    for battler in opponent_battlers(ctx) {
        if let Some(name) = mon_nickname(ctx, battler) {
            options.push(name);
        }
    }
    let cursor = ctx.u8(addr::GMULTIUSEPLAYERCURSOR_ADDR) as usize;
    let choice = ChoiceMenu::new(ChoiceKind::Target, options.clone(), cursor);
    let visible = menu::render_list(&options, choice.cursor_position);
    UiState::new(ScreenKind::BattleTarget, visible).with_choice(choice)
}

fn yes_no_state(ctx: &QueryContext, cursor: usize, via: Option<&'static str>) -> UiState {
    let options = vec!["YES".to_string(), "NO".to_string()];
    let mut choice = ChoiceMenu::new(ChoiceKind::YesNo, options, cursor);
    let prompt = displayed_battle_text(ctx);
    let visible = format!("{}\n{}", prompt, menu::render_yes_no(choice.cursor_position))
        .trim()
        .to_string();
    if !prompt.is_empty() {
        choice = choice.with_prompt(prompt);
    }
    let mut state = UiState::new(ScreenKind::BattleYesNo, visible).with_choice(choice);
    if let Some(signal) = via {
        state = state.via(signal);
    }
    state
}

/// Recognize the battle input menu currently waiting on the player.
///
/// Controller handlers are consulted in yes/no, target, move, action
/// order: the later menus stay installed underneath the earlier ones,
/// so the most specific handler wins.
pub fn detect_battle_ui(ctx: &QueryContext) -> Option<UiState> {
    if !ctx.in_battle {
        return None;
    }
    let players = player_battlers(ctx);

    for &b in &players {
        if func_matches_any(controller_func(ctx, b), &addr::BTL_HANDLE_YESNO_FUNCS) {
            let cursor = ctx.u8(addr::GMULTIUSEPLAYERCURSOR_ADDR) as usize;
            return Some(yes_no_state(ctx, cursor, None));
        }
    }
    if players
        .iter()
        .any(|&b| func_matches_any(controller_func(ctx, b), &addr::BTL_HANDLE_TARGET_FUNCS))
    {
        return Some(target_state(ctx));
    }
    for &b in &players {
        if func_matches_any(controller_func(ctx, b), &addr::BTL_HANDLE_MOVE_FUNCS) {
            return Some(move_state(ctx, b, None));
        }
    }
    for &b in &players {
        if func_matches_any(controller_func(ctx, b), &addr::BTL_HANDLE_ACTION_FUNCS) {
            return Some(action_state(ctx, b, None));
        }
    }

    // Empirical fallback 1: the battle script interpreter is parked on
    // an opcode that blocks on a yes/no box.
    let script_ptr = ctx.u32(addr::GBATTLESCRIPTCURRINSTR_ADDR);
    if script_ptr != 0 {
        let opcode = ctx.u8(script_ptr);
        if layout::BATTLE_SCRIPT_CHOICE_OPCODES.contains(&opcode) {
            let cursor = ctx.u8(addr::GBATTLECOMMUNICATION_ADDR + 1) as usize;
            return Some(yes_no_state(ctx, cursor, Some("heuristic")));
        }
    }

    // Empirical fallback 2: the action window scrolls BG0 down by one
    // screen, the move window by two.
    let bg0_y = ctx.u16(addr::GBATTLE_BG0_Y_ADDR);
    let first = players.first().copied().unwrap_or(0);
    if bg0_y == layout::DISPLAY_HEIGHT {
        return Some(action_state(ctx, first, Some("heuristic")));
    }
    if bg0_y == layout::DISPLAY_HEIGHT * 2 {
        return Some(move_state(ctx, first, Some("heuristic")));
    }

    // No menu; surface running battle text if there is any.
    let text = displayed_battle_text(ctx);
    if text.chars().count() > 2 {
        return Some(UiState::new(ScreenKind::Dialog, text));
    }
    None
}
