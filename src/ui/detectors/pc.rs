// Tue Feb 10 2026 - Alex
//
// The PC family: the storage-system entry menu, the player's home PC
// and its item storage list and sub-menu.

use crate::constants::addresses as addr;
use crate::ui::context::QueryContext;
use crate::ui::detectors::choice;
use crate::ui::detectors::Detector;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};
use crate::ui::tasks;
use crate::text::printer;

const STORAGE_PC_OPTIONS: [&str; 5] = [
    "WITHDRAW POKéMON",
    "DEPOSIT POKéMON",
    "MOVE POKéMON",
    "MOVE ITEMS",
    "SEE YA!",
];

const ITEM_STORAGE_OPTIONS: [&str; 4] =
    ["WITHDRAW ITEM", "DEPOSIT ITEM", "TOSS ITEM", "EXIT"];

pub struct PokeStoragePcMenuDetector;

impl Detector for PokeStoragePcMenuDetector {
    fn name(&self) -> &'static str {
        "poke_storage_pc_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        tasks::find_active_task(ctx, addr::TASK_POKE_STORAGE_PC_MENU_ADDR)?;
        let cursor = menu::menu_cursor_pos(ctx).max(0) as usize;
        let options: Vec<String> = STORAGE_PC_OPTIONS.iter().map(|s| s.to_string()).collect();
        let choice = ChoiceMenu::new(ChoiceKind::Menu, options.clone(), cursor);
        let visible = menu::render_list(&options, choice.cursor_position);
        Some(UiState::new(ScreenKind::PokemonStorage, visible).with_choice(choice))
    }
}

pub struct PlayerPcMenuDetector;

impl Detector for PlayerPcMenuDetector {
    fn name(&self) -> &'static str {
        "player_pc_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        let hit = choice::player_pc_choice(ctx)?;
        let mut visible = menu::render_list(&hit.menu.options, hit.menu.cursor_position);
        if let Some(prompt) = &hit.menu.prompt_text {
            visible = format!("{prompt}\n{visible}");
        }
        Some(UiState::new(ScreenKind::PlayerPcMenu, visible).with_choice(hit.menu))
    }
}

pub struct ItemStorageListDetector;

impl Detector for ItemStorageListDetector {
    fn name(&self) -> &'static str {
        "item_storage_list"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        tasks::find_active_task_any(
            ctx,
            &[
                addr::TASK_ITEM_PC_HANDLE_INPUT_ADDR,
                addr::TASK_ITEM_PC_SUBMENU_HANDLE_INPUT_ADDR,
            ],
        )?;
        // Page info block: items-above-viewport word then cursor row.
        let scroll = ctx.u16(addr::GPLAYER_PC_ITEM_PAGE_INFO_ADDR);
        let row = ctx.u16(addr::GPLAYER_PC_ITEM_PAGE_INFO_ADDR + 2);
        let total = ctx.u16(addr::GPLAYER_PC_ITEM_PAGE_INFO_ADDR + 4);
        let selected = menu::list_selected_index(scroll, row, total);
        let text = printer::find_active_printer_text(ctx.reader(), true)
            .map(|h| h.text)
            .unwrap_or_default();
        let mut state = UiState::new(ScreenKind::ItemStorageList, text);
        let mut items: Vec<String> = Vec::new();
        if total > 0 {
            // Item names live behind the save block; report positions
            // rather than guessing labels.
            items = (0..total).map(|i| format!("ITEM {}", i + 1)).collect();
        }
        let mut choice = ChoiceMenu::new(ChoiceKind::List, items, selected);
        // A context sub-menu stacks a yes/no on top of the list.
        if tasks::find_active_task(ctx, addr::TASK_ITEM_PC_SUBMENU_HANDLE_INPUT_ADDR).is_some() {
            if menu::yes_no_window(ctx).is_some() {
                let cursor = menu::yes_no_cursor(ctx);
                choice = ChoiceMenu::new(
                    ChoiceKind::YesNo,
                    vec!["YES".to_string(), "NO".to_string()],
                    cursor,
                );
                state.visible_text = format!(
                    "{}\n{}",
                    state.visible_text,
                    menu::render_yes_no(cursor)
                )
                .trim()
                .to_string();
            }
        }
        Some(state.with_choice(choice))
    }
}

pub struct ItemStorageMenuDetector;

impl Detector for ItemStorageMenuDetector {
    fn name(&self) -> &'static str {
        "item_storage_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        tasks::find_active_task(ctx, addr::TASK_ITEM_STORAGE_PROCESS_MENU_INPUT_ADDR)?;
        let cursor = menu::menu_cursor_pos(ctx).max(0) as usize;
        let options: Vec<String> = ITEM_STORAGE_OPTIONS.iter().map(|s| s.to_string()).collect();
        let choice = ChoiceMenu::new(ChoiceKind::Menu, options.clone(), cursor);
        let visible = menu::render_list(&options, choice.cursor_position);
        Some(UiState::new(ScreenKind::ItemStorageMenu, visible).with_choice(choice))
    }
}
