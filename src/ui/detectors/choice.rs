// Tue Feb 10 2026 - Alex
//
// Script-driven choice menus: yes/no boxes, multichoice lists, the shop
// front menu and the new-game gender pick. Shared by the dedicated
// detectors and by the generic fallback at the end of the chain.

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::ui::context::QueryContext;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ChoiceMenu, ScreenKind};
use crate::ui::tasks;

const ROM_STRING_MAX: usize = 200;

/// A recognized choice plus the screen kind it implies when it stands
/// alone (most ride on top of a dialog).
pub struct ChoiceHit {
    pub menu: ChoiceMenu,
    pub screen: ScreenKind,
}

/// Yes/no box. The input task is the primary signal; when a script has
/// already swapped the task out, the allocated-window validation in
/// [`menu::yes_no_window`] stands in for it.
pub fn yes_no_choice(ctx: &QueryContext) -> Option<ChoiceHit> {
    let task_live = tasks::find_active_task_any(
        ctx,
        &[
            addr::TASK_HANDLE_YES_NO_INPUT_ADDR,
            addr::TASK_CALL_YES_OR_NO_CALLBACK_ADDR,
        ],
    )
    .is_some();
    if !task_live && menu::yes_no_window(ctx).is_none() {
        return None;
    }
    let cursor = menu::yes_no_cursor(ctx);
    let options = vec!["YES".to_string(), "NO".to_string()];
    Some(ChoiceHit {
        menu: ChoiceMenu::new(ChoiceKind::YesNo, options, cursor),
        screen: ScreenKind::Dialog,
    })
}

/// Options of the Pokemon Center PC menu, which the script builds at
/// runtime instead of pointing at a ROM list.
fn pc_menu_options(ctx: &QueryContext, count: usize) -> Vec<String> {
    let someones = if player_knows_lanette(ctx) {
        ctx.rom_string(addr::GTEXT_LANETTES_PC_ADDR, ROM_STRING_MAX)
            .unwrap_or_else(|| "LANETTE's PC".to_string())
    } else {
        ctx.rom_string(addr::GTEXT_SOMEONES_PC_ADDR, ROM_STRING_MAX)
            .unwrap_or_else(|| "SOMEONE's PC".to_string())
    };
    let player_pc = player_pc_label(ctx);
    let mut options = vec![someones, player_pc];
    if count >= 4 {
        options.push(
            ctx.rom_string(addr::GTEXT_HALL_OF_FAME_ADDR, ROM_STRING_MAX)
                .unwrap_or_else(|| "HALL OF FAME".to_string()),
        );
    }
    options.push(
        ctx.rom_string(addr::GTEXT_LOG_OFF_ADDR, ROM_STRING_MAX)
            .unwrap_or_else(|| "LOG OFF".to_string()),
    );
    options
}

fn player_knows_lanette(ctx: &QueryContext) -> bool {
    // Flag lives in the save block; unreadable means not set.
    let sb1 = ctx.u32(addr::GSAVEBLOCK1_PTR_ADDR);
    if !(layout::EWRAM_START..=layout::EWRAM_END).contains(&sb1) {
        return false;
    }
    let flag = addr::FLAG_SYS_PC_LANETTE;
    let byte = ctx.u8(sb1 + layout::SAVEBLOCK1_FLAGS_OFFSET + (flag / 8) as u32);
    byte & (1 << (flag % 8)) != 0
}

fn player_pc_label(ctx: &QueryContext) -> String {
    // The script expands the player's name into gStringVar4 ("MAY's PC").
    let Some(raw) = ctx.bytes(addr::GSTRINGVAR4_ADDR, 40) else {
        return "PLAYER's PC".to_string();
    };
    let text = crate::text::decode::decode_text(&raw, raw.len(), true);
    if text.to_uppercase().contains("PC") {
        text
    } else {
        "PLAYER's PC".to_string()
    }
}

/// Multichoice list driven by the script engine. The running task's
/// seventh data word carries the list id.
pub fn multichoice(ctx: &QueryContext) -> Option<ChoiceHit> {
    let task = tasks::find_active_task(ctx, addr::TASK_HANDLE_MULTICHOICE_INPUT_ADDR)?;
    let list_id = tasks::task_data_s16(ctx, task, 7);
    if !(0..=512).contains(&list_id) {
        return None;
    }
    let list_id = list_id as u16;
    let cursor = menu::menu_cursor_pos(ctx).max(0) as usize;

    if list_id == layout::MULTI_PC {
        let (_, max) = menu::menu_cursor_bounds(ctx);
        let count = max as usize + 1;
        if !(2..=10).contains(&count) {
            return None;
        }
        let options = pc_menu_options(ctx, count);
        let prompt = ctx
            .rom_string(addr::GTEXT_WHICH_PC_ADDR, ROM_STRING_MAX)
            .unwrap_or_else(|| "Which PC should be accessed?".to_string());
        return Some(ChoiceHit {
            menu: ChoiceMenu::new(ChoiceKind::Multichoice, options, cursor).with_prompt(prompt),
            screen: ScreenKind::Dialog,
        });
    }

    let entry = addr::SMULTICHOICE_LISTS_ADDR + list_id as u32 * layout::MULTICHOICE_ENTRY_SIZE;
    let items_ptr = ctx.u32(entry);
    let count = ctx.u8(entry + 4) as usize;
    if count == 0 || count > 20 || !(layout::ROM_START..=layout::ROM_END).contains(&items_ptr) {
        return None;
    }
    let mut options = Vec::with_capacity(count);
    for i in 0..count {
        let text_ptr = ctx.u32(items_ptr + i as u32 * layout::MULTICHOICE_ITEM_SIZE);
        let label = ctx
            .rom_string(text_ptr, ROM_STRING_MAX)
            .unwrap_or_default();
        if label.is_empty() {
            return None;
        }
        options.push(label);
    }

    let screen = if layout::ELEVATOR_MULTICHOICE_IDS.contains(&list_id) {
        ScreenKind::ElevatorMenu
    } else {
        ScreenKind::Dialog
    };
    Some(ChoiceHit {
        menu: ChoiceMenu::new(ChoiceKind::Multichoice, options, cursor),
        screen,
    })
}

/// BUY/SELL/QUIT front menu of a mart.
pub fn shop_choice(ctx: &QueryContext) -> Option<ChoiceHit> {
    tasks::find_active_task(ctx, addr::TASK_SHOP_MENU_ADDR)?;
    let cursor = menu::menu_cursor_pos(ctx).max(0) as usize;
    let options = vec!["BUY".to_string(), "SELL".to_string(), "QUIT".to_string()];
    Some(ChoiceHit {
        menu: ChoiceMenu::new(ChoiceKind::ShopChoice, options, cursor),
        screen: ScreenKind::Dialog,
    })
}

/// Boy-or-girl pick during the professor's welcome lecture.
pub fn gender_choice(ctx: &QueryContext) -> Option<ChoiceHit> {
    tasks::find_active_task(ctx, addr::TASK_NEW_GAME_GENDER_MENU_ADDR)?;
    let cursor = menu::menu_cursor_pos(ctx).max(0) as usize;
    let options = vec!["BOY".to_string(), "GIRL".to_string()];
    let prompt = ctx
        .rom_string(addr::GTEXT_BOY_OR_GIRL_ADDR, ROM_STRING_MAX)
        .unwrap_or_else(|| "Are you a boy? Or are you a girl?".to_string());
    Some(ChoiceHit {
        menu: ChoiceMenu::new(ChoiceKind::Gender, options, cursor).with_prompt(prompt),
        screen: ScreenKind::Dialog,
    })
}

/// Player's home PC top menu. Options come from an order array of
/// action ids resolved through the ROM action table; the result is only
/// trusted when the labels look like the real menu.
pub fn player_pc_choice(ctx: &QueryContext) -> Option<ChoiceHit> {
    tasks::find_active_task_any(
        ctx,
        &[
            addr::TASK_PLAYER_PC_PROCESS_MENU_INPUT_ADDR,
            addr::TASK_PLAYER_PC_DRAW_TOP_MENU_ADDR,
        ],
    )?;
    let count = ctx.u8(addr::STOP_MENU_NUM_OPTIONS_ADDR) as usize;
    if !(1..=8).contains(&count) {
        return None;
    }
    let order_ptr = ctx.u32(addr::STOP_MENU_OPTION_ORDER_PTR_ADDR);
    let order = ctx.bytes(order_ptr, count)?;
    let mut options = Vec::with_capacity(count);
    for action_id in order {
        let entry = addr::SPLAYER_PC_MENU_ACTIONS_ADDR + action_id as u32 * layout::MENU_ACTION_SIZE;
        let text_ptr = ctx.u32(entry);
        let label = ctx.rom_string(text_ptr, ROM_STRING_MAX)?;
        options.push(label);
    }
    let upper: Vec<String> = options.iter().map(|o| o.to_uppercase()).collect();
    let has = |needle: &str| upper.iter().any(|o| o.contains(needle));
    if !has("ITEM STORAGE") || !has("MAILBOX") || !(has("TURN OFF") || has("LOG OFF")) {
        return None;
    }
    let cursor = menu::menu_cursor_pos(ctx).max(0) as usize;
    Some(ChoiceHit {
        menu: ChoiceMenu::new(ChoiceKind::PlayerPc, options, cursor)
            .with_prompt("What would you like to do?"),
        screen: ScreenKind::PlayerPcMenu,
    })
}

/// The sub-order the generic fallback tries when no dedicated detector
/// fired: shop front menu, multichoice, yes/no, gender, then player PC.
pub fn any_choice(ctx: &QueryContext) -> Option<ChoiceHit> {
    shop_choice(ctx)
        .or_else(|| multichoice(ctx))
        .or_else(|| yes_no_choice(ctx))
        .or_else(|| gender_choice(ctx))
        .or_else(|| player_pc_choice(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryRegion, MemorySnapshot};
    use crate::ui::tasks::testutil::task_table;

    fn ctx_with(entries: Vec<(u32, Vec<u8>)>) -> QueryContext {
        let regions: Vec<MemoryRegion> = entries
            .iter()
            .map(|(a, b)| MemoryRegion::new(*a, b.len() as u32))
            .collect();
        let snap =
            MemorySnapshot::from_ranges(&regions, entries.into_iter().map(|(_, b)| b).collect());
        QueryContext::from_snapshot(snap, false)
    }

    fn smenu_bytes(cursor: u8, min: u8, max: u8, window_id: u8) -> Vec<u8> {
        let mut block = vec![0u8; layout::SMENU_SIZE];
        block[layout::SMENU_CURSOR_POS_OFFSET] = cursor;
        block[layout::SMENU_MIN_CURSOR_POS_OFFSET] = min;
        block[layout::SMENU_MAX_CURSOR_POS_OFFSET] = max;
        block[layout::SMENU_WINDOW_ID_OFFSET] = window_id;
        block
    }

    fn encode(text: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for ch in text.chars() {
            let byte = match ch {
                ' ' => 0x00,
                'A'..='Z' => 0xBB + (ch as u8 - b'A'),
                'a'..='z' => 0xD5 + (ch as u8 - b'a'),
                _ => panic!("no mapping for {ch:?}"),
            };
            out.push(byte);
        }
        out.push(0xFF);
        out
    }

    #[test]
    fn test_yes_no_task_cursor_maps_to_options() {
        for (cursor, expected) in [(0u8, "YES"), (1u8, "NO")] {
            let ctx = ctx_with(vec![
                (
                    addr::GTASKS_ADDR,
                    task_table(&[(0, addr::TASK_HANDLE_YES_NO_INPUT_ADDR, &[])]),
                ),
                (addr::SMENU_ADDR, smenu_bytes(cursor, 0, 1, 5)),
            ]);
            let hit = yes_no_choice(&ctx).unwrap();
            assert_eq!(hit.menu.selected_option.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_yes_no_without_task_or_window_not_recognized() {
        let ctx = ctx_with(vec![(addr::SMENU_ADDR, smenu_bytes(0, 0, 1, 5))]);
        assert!(yes_no_choice(&ctx).is_none());
    }

    #[test]
    fn test_multichoice_reads_rom_list() {
        let list_id: u16 = 12;
        let entry = addr::SMULTICHOICE_LISTS_ADDR + list_id as u32 * layout::MULTICHOICE_ENTRY_SIZE;
        let items_ptr = 0x0830_0000u32;
        let label_a = 0x0830_1000u32;
        let label_b = 0x0830_1010u32;
        let mut entry_bytes = items_ptr.to_le_bytes().to_vec();
        entry_bytes.extend([2, 0, 0, 0]);
        let mut items = label_a.to_le_bytes().to_vec();
        items.extend([0u8; 4]);
        items.extend(label_b.to_le_bytes());
        items.extend([0u8; 4]);
        let ctx = ctx_with(vec![
            (
                addr::GTASKS_ADDR,
                task_table(&[(
                    1,
                    addr::TASK_HANDLE_MULTICHOICE_INPUT_ADDR,
                    &[0, 0, 0, 0, 0, 0, 0, list_id],
                )]),
            ),
            (addr::SMENU_ADDR, smenu_bytes(1, 0, 1, 3)),
            (entry, entry_bytes),
            (items_ptr, items),
            (label_a, encode("CYCLE")),
            (label_b, encode("WALK")),
        ]);
        let hit = multichoice(&ctx).unwrap();
        assert_eq!(hit.menu.options, vec!["CYCLE", "WALK"]);
        assert_eq!(hit.menu.selected_option.as_deref(), Some("WALK"));
        assert_eq!(hit.screen, ScreenKind::Dialog);
    }

    #[test]
    fn test_elevator_multichoice_id_maps_to_elevator_screen() {
        let list_id = layout::ELEVATOR_MULTICHOICE_IDS[0];
        let entry = addr::SMULTICHOICE_LISTS_ADDR + list_id as u32 * layout::MULTICHOICE_ENTRY_SIZE;
        let items_ptr = 0x0830_2000u32;
        let label = 0x0830_2100u32;
        let mut entry_bytes = items_ptr.to_le_bytes().to_vec();
        entry_bytes.extend([1, 0, 0, 0]);
        let mut items = label.to_le_bytes().to_vec();
        items.extend([0u8; 4]);
        let ctx = ctx_with(vec![
            (
                addr::GTASKS_ADDR,
                task_table(&[(
                    0,
                    addr::TASK_HANDLE_MULTICHOICE_INPUT_ADDR,
                    &[0, 0, 0, 0, 0, 0, 0, list_id],
                )]),
            ),
            (addr::SMENU_ADDR, smenu_bytes(0, 0, 0, 3)),
            (entry, entry_bytes),
            (items_ptr, items),
            (label, encode("ONE F")),
        ]);
        let hit = multichoice(&ctx).unwrap();
        assert_eq!(hit.screen, ScreenKind::ElevatorMenu);
    }

    #[test]
    fn test_multichoice_out_of_range_id_rejected() {
        let ctx = ctx_with(vec![(
            addr::GTASKS_ADDR,
            task_table(&[(
                0,
                addr::TASK_HANDLE_MULTICHOICE_INPUT_ADDR,
                &[0, 0, 0, 0, 0, 0, 0, 600],
            )]),
        )]);
        assert!(multichoice(&ctx).is_none());
    }

    #[test]
    fn test_shop_choice() {
        let ctx = ctx_with(vec![
            (
                addr::GTASKS_ADDR,
                task_table(&[(4, addr::TASK_SHOP_MENU_ADDR, &[])]),
            ),
            (addr::SMENU_ADDR, smenu_bytes(2, 0, 2, 1)),
        ]);
        let hit = shop_choice(&ctx).unwrap();
        assert_eq!(hit.menu.selected_option.as_deref(), Some("QUIT"));
    }

    #[test]
    fn test_player_pc_requires_expected_labels() {
        // Labels resolve, but they are not the player PC menu.
        let order_ptr = 0x0203_0100u32;
        let label = 0x0830_4000u32;
        let entry = addr::SPLAYER_PC_MENU_ACTIONS_ADDR;
        let ctx = ctx_with(vec![
            (
                addr::GTASKS_ADDR,
                task_table(&[(2, addr::TASK_PLAYER_PC_PROCESS_MENU_INPUT_ADDR, &[])]),
            ),
            (addr::STOP_MENU_NUM_OPTIONS_ADDR, vec![1]),
            (
                addr::STOP_MENU_OPTION_ORDER_PTR_ADDR,
                order_ptr.to_le_bytes().to_vec(),
            ),
            (order_ptr, vec![0]),
            (entry, label.to_le_bytes().to_vec()),
            (label, encode("SOMETHING ELSE")),
        ]);
        assert!(player_pc_choice(&ctx).is_none());
    }
}
