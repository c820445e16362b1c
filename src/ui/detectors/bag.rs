// Tue Feb 10 2026 - Alex
//
// Item screens: the TM case and the bag. The bag overlays an item
// message window and sometimes a yes/no confirmation on top of its
// list, so its state folds those in.

use crate::constants::addresses as addr;
use crate::text::printer;
use crate::ui::context::QueryContext;
use crate::ui::detectors::title::callback_matches_any;
use crate::ui::detectors::Detector;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};

pub struct TmCaseDetector;

impl Detector for TmCaseDetector {
    fn name(&self) -> &'static str {
        "tm_case"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        callback_matches_any(ctx, &[addr::CB2_TM_CASE_ADDR]).then(|| {
            let text = printer::find_active_printer_text(ctx.reader(), true)
                .map(|h| h.text)
                .unwrap_or_default();
            UiState::new(ScreenKind::TmCase, text)
        })
    }
}

pub struct BagMenuDetector;

impl Detector for BagMenuDetector {
    fn name(&self) -> &'static str {
        "bag_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        if !callback_matches_any(ctx, &[addr::CB2_BAG_MENU_RUN_ADDR]) {
            return None;
        }
        let hit = printer::find_active_printer_text(ctx.reader(), true);
        let mut text = hit.as_ref().map(|h| h.text.clone()).unwrap_or_default();
        let mut state = UiState::new(ScreenKind::BagMenu, String::new());
        if let Some(hit) = &hit {
            if hit.pages.len() > 1 {
                state = state.with_pages(hit.pages.clone(), hit.current_page);
            }
        }
        // Use-or-toss confirmations stack a yes/no on the message box.
        if menu::yes_no_window(ctx).is_some() {
            let cursor = menu::yes_no_cursor(ctx);
            let rendered = menu::render_yes_no(cursor);
            text = if text.is_empty() {
                rendered
            } else {
                format!("{text}\n{rendered}")
            };
            state = state.with_choice(ChoiceMenu::new(
                ChoiceKind::YesNo,
                vec!["YES".to_string(), "NO".to_string()],
                cursor,
            ));
        }
        state.visible_text = text;
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::layout;
    use crate::memory::{MemoryRegion, MemorySnapshot};

    fn ctx_with(entries: Vec<(u32, Vec<u8>)>) -> QueryContext {
        let regions: Vec<MemoryRegion> = entries
            .iter()
            .map(|(a, b)| MemoryRegion::new(*a, b.len() as u32))
            .collect();
        let snap =
            MemorySnapshot::from_ranges(&regions, entries.into_iter().map(|(_, b)| b).collect());
        QueryContext::from_snapshot(snap, false)
    }

    fn callback_entry(cb: u32) -> (u32, Vec<u8>) {
        (
            addr::GMAIN_ADDR + addr::GMAIN_CALLBACK2_OFFSET,
            cb.to_le_bytes().to_vec(),
        )
    }

    #[test]
    fn test_tm_case_by_callback() {
        let ctx = ctx_with(vec![callback_entry(addr::CB2_TM_CASE_ADDR)]);
        assert_eq!(TmCaseDetector.detect(&ctx).unwrap().menu_type, ScreenKind::TmCase);
    }

    #[test]
    fn test_bag_menu_with_stacked_yes_no() {
        let mut windows = vec![layout::WINDOW_NONE; layout::NUM_WINDOWS * layout::WINDOW_SIZE];
        windows[4 * layout::WINDOW_SIZE + layout::WINDOW_BG_OFFSET] = 0;
        windows[4 * layout::WINDOW_SIZE + layout::WINDOW_HEIGHT_OFFSET] = 4;
        let mut smenu = vec![0u8; layout::SMENU_SIZE];
        smenu[layout::SMENU_MAX_CURSOR_POS_OFFSET] = 1;
        smenu[layout::SMENU_WINDOW_ID_OFFSET] = 4;
        let ctx = ctx_with(vec![
            callback_entry(addr::CB2_BAG_MENU_RUN_ADDR),
            (addr::SYESNO_WINDOWID_ADDR, vec![4]),
            (addr::GWINDOWS_ADDR, windows),
            (addr::SMENU_ADDR, smenu),
        ]);
        let state = BagMenuDetector.detect(&ctx).unwrap();
        assert_eq!(state.menu_type, ScreenKind::BagMenu);
        assert_eq!(
            state.choice.unwrap().selected_option.as_deref(),
            Some("YES")
        );
    }

    #[test]
    fn test_bag_menu_without_overlay_still_recognized() {
        let ctx = ctx_with(vec![callback_entry(addr::CB2_BAG_MENU_RUN_ADDR)]);
        let state = BagMenuDetector.detect(&ctx).unwrap();
        assert!(state.choice.is_none());
    }
}
