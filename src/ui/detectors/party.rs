// Tue Feb 10 2026 - Alex
//
// Party screen, the summary pages and the move-replace prompt nested
// inside the summary.

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::text::printer;
use crate::ui::context::QueryContext;
use crate::ui::detectors::title::callback_matches_any;
use crate::ui::detectors::Detector;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};
use crate::ui::tasks;

pub struct PartyMenuDetector;

impl Detector for PartyMenuDetector {
    fn name(&self) -> &'static str {
        "party_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        if !callback_matches_any(ctx, &[addr::CB2_PARTY_MENU_ADDR]) {
            return None;
        }
        let party_count = ctx.u8(addr::GPLAYER_PARTY_COUNT_ADDR) as usize;
        let slot = ctx.u8(addr::GPARTY_MENU_ADDR + layout::PARTY_MENU_SLOT_ID_OFFSET as u32) as usize;
        let hit = printer::find_active_printer_text(ctx.reader(), true);
        let mut text = hit.map(|h| h.text).unwrap_or_default();
        let mut state = UiState::new(ScreenKind::PartyMenu, String::new());

        if menu::yes_no_window(ctx).is_some() {
            // Confirmation on top of the party action menu.
            let cursor = menu::yes_no_cursor(ctx);
            text = format!("{}\n{}", text, menu::render_yes_no(cursor))
                .trim()
                .to_string();
            state = state.with_choice(ChoiceMenu::new(
                ChoiceKind::YesNo,
                vec!["YES".to_string(), "NO".to_string()],
                cursor,
            ));
        } else if party_count > 0 {
            let slots: Vec<String> = (0..party_count.min(layout::PARTY_SIZE))
                .map(|i| format!("SLOT {}", i + 1))
                .collect();
            state = state.with_choice(ChoiceMenu::new(ChoiceKind::List, slots, slot));
        }
        state.visible_text = text;
        Some(state)
    }
}

pub struct SummaryScreenDetector;

impl Detector for SummaryScreenDetector {
    fn name(&self) -> &'static str {
        "summary_screen"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        if !callback_matches_any(ctx, &[addr::CB2_SUMMARY_SCREEN_ADDR]) {
            return None;
        }
        // The move-replace prompt runs on the same callback; its own
        // detector handles that case.
        if tasks::find_active_task(ctx, addr::TASK_SUMMARY_HANDLE_REPLACE_MOVE_INPUT_ADDR).is_some()
        {
            return None;
        }
        let text = printer::find_active_printer_text(ctx.reader(), true)
            .map(|h| h.text)
            .unwrap_or_default();
        Some(UiState::new(ScreenKind::SummaryScreen, text))
    }
}

pub struct SummaryMoveReplaceDetector;

impl Detector for SummaryMoveReplaceDetector {
    fn name(&self) -> &'static str {
        "summary_move_replace"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        let task = tasks::find_active_task(ctx, addr::TASK_SUMMARY_HANDLE_REPLACE_MOVE_INPUT_ADDR)?;
        let cursor = tasks::task_data_s16(ctx, task, 0).max(0) as usize;
        let text = printer::find_active_printer_text(ctx.reader(), true)
            .map(|h| h.text)
            .unwrap_or_default();
        // Four move rows plus the cancel row.
        let options: Vec<String> = (0..layout::MAX_MON_MOVES)
            .map(|i| format!("MOVE {}", i + 1))
            .chain(std::iter::once("CANCEL".to_string()))
            .collect();
        let choice = ChoiceMenu::new(ChoiceKind::Moves, options, cursor);
        Some(UiState::new(ScreenKind::SummaryMoveReplace, text).with_choice(choice))
    }
}
