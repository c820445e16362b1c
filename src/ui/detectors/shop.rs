// Tue Feb 10 2026 - Alex
//
// Mart buy screen and the scripted elevator floor picker.

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::text::printer;
use crate::ui::context::QueryContext;
use crate::ui::detectors::title::callback_matches_any;
use crate::ui::detectors::Detector;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};
use crate::ui::tasks;

pub struct ShopBuyMenuDetector;

impl Detector for ShopBuyMenuDetector {
    fn name(&self) -> &'static str {
        "shop_buy_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        let on = callback_matches_any(ctx, &[addr::CB2_SHOP_BUY_MENU_ADDR])
            || tasks::find_active_task(ctx, addr::TASK_SHOP_BUY_HANDLE_INPUT_ADDR).is_some();
        if !on {
            return None;
        }
        let text = printer::find_active_printer_text(ctx.reader(), true)
            .map(|h| h.text)
            .unwrap_or_default();
        let mut state = UiState::new(ScreenKind::ShopBuyMenu, text);
        if menu::yes_no_window(ctx).is_some() {
            let cursor = menu::yes_no_cursor(ctx);
            state.visible_text = format!("{}\n{}", state.visible_text, menu::render_yes_no(cursor))
                .trim()
                .to_string();
            state = state.with_choice(ChoiceMenu::new(
                ChoiceKind::YesNo,
                vec!["YES".to_string(), "NO".to_string()],
                cursor,
            ));
        }
        Some(state)
    }
}

/// Silph Co style floor picker: a script list menu plus the floor-select
/// special id. Department store elevators instead go through plain
/// multichoice ids and are recognized by the choice fallback.
pub struct ElevatorMenuDetector;

impl Detector for ElevatorMenuDetector {
    fn name(&self) -> &'static str {
        "elevator_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        if ctx.u16(addr::GSPECIALVAR_0X8004_ADDR) != layout::LISTMENU_SILPHCO_FLOORS {
            return None;
        }
        let list = menu::script_list_menu(ctx)?;
        let selected = list.selected_index();
        let floor_count =
            (addr::SFLOOR_NAME_POINTERS_SIZE / 4).min(list.total_items as u32) as usize;
        let mut options = Vec::with_capacity(floor_count);
        for i in 0..floor_count {
            let ptr = ctx.u32(addr::SFLOOR_NAME_POINTERS_ADDR + i as u32 * 4);
            options.push(ctx.rom_string(ptr, 32).unwrap_or_else(|| format!("{}F", i + 1)));
        }
        let prompt = ctx
            .rom_string(addr::GTEXT_WANT_WHICH_FLOOR_ADDR, 200)
            .unwrap_or_else(|| "Want which floor?".to_string());
        let choice =
            ChoiceMenu::new(ChoiceKind::List, options.clone(), selected).with_prompt(prompt.clone());
        let visible = format!(
            "{}\n{}",
            prompt,
            menu::render_list(&options, choice.cursor_position)
        );
        Some(UiState::new(ScreenKind::ElevatorMenu, visible).with_choice(choice))
    }
}
