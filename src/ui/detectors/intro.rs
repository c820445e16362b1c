// Tue Feb 10 2026 - Alex
//
// Screens around the new-game flow: the naming keyboard, the controls
// guide, the Pikachu intro pages and the quest-log recap overlay.

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::text::printer;
use crate::ui::context::QueryContext;
use crate::ui::detectors::title::callback_matches_any;
use crate::ui::detectors::Detector;
use crate::ui::menu;
use crate::ui::state::{ScreenKind, UiState};
use crate::ui::tasks;

pub struct NamingScreenDetector;

impl Detector for NamingScreenDetector {
    fn name(&self) -> &'static str {
        "naming_screen"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        let by_callback = callback_matches_any(
            ctx,
            &[addr::CB2_LOAD_NAMING_SCREEN_ADDR, addr::CB2_NAMING_SCREEN_ADDR],
        );
        // The keyboard state lives behind a heap pointer; a live one is
        // corroborating evidence while the callback is mid-switch.
        let state_ptr = ctx.u32(addr::SNAMING_SCREEN_PTR_ADDR);
        let ptr_live = (layout::EWRAM_START..=layout::EWRAM_END).contains(&state_ptr);
        if !by_callback || !ptr_live {
            return None;
        }
        let text = printer::find_active_printer_text(ctx.reader(), true)
            .map(|hit| hit.text)
            .unwrap_or_default();
        Some(UiState::new(ScreenKind::NamingScreen, text))
    }
}

/// Multi-page info screen driven by a pair of tasks, one loading pages
/// and one polling input.
fn page_screen(
    ctx: &QueryContext,
    kind: ScreenKind,
    load_task: u32,
    input_task: u32,
) -> Option<UiState> {
    tasks::find_active_task_any(ctx, &[load_task, input_task])?;
    let hit = printer::find_active_printer_text(ctx.reader(), true);
    let text = hit.as_ref().map(|h| h.text.clone()).unwrap_or_default();
    let mut state = UiState::new(kind, text);
    if let Some(hit) = hit {
        if !hit.pages.is_empty() {
            let current = hit.current_page;
            state = state.with_pages(hit.pages, current);
        }
    }
    Some(state)
}

pub struct ControlsGuideDetector;

impl Detector for ControlsGuideDetector {
    fn name(&self) -> &'static str {
        "controls_guide"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        page_screen(
            ctx,
            ScreenKind::ControlsGuide,
            addr::TASK_CONTROLS_GUIDE_LOAD_PAGE_ADDR,
            addr::TASK_CONTROLS_GUIDE_HANDLE_INPUT_ADDR,
        )
    }
}

pub struct PikachuIntroDetector;

impl Detector for PikachuIntroDetector {
    fn name(&self) -> &'static str {
        "pikachu_intro"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        page_screen(
            ctx,
            ScreenKind::PikachuIntro,
            addr::TASK_PIKACHU_INTRO_LOAD_PAGE_ADDR,
            addr::TASK_PIKACHU_INTRO_HANDLE_INPUT_ADDR,
        )
    }
}

pub struct QuestLogPlaybackDetector;

impl Detector for QuestLogPlaybackDetector {
    fn name(&self) -> &'static str {
        "quest_log_playback"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        if ctx.u8(addr::GQUEST_LOG_PLAYBACK_STATE_ADDR) == 0 {
            return None;
        }
        // The recap header renders through dedicated windows; one of
        // them must actually be allocated before this counts.
        let window_ids = ctx.bytes(
            addr::SQUEST_LOG_WINDOW_IDS_ADDR,
            addr::QUEST_LOG_WINDOW_COUNT,
        )?;
        let live_window = window_ids
            .iter()
            .copied()
            .find(|&id| menu::window_allocated(ctx, id))?;
        let text = printer::text_for_window(ctx.reader(), live_window, true)
            .or_else(|| printer::find_active_printer_text(ctx.reader(), true).map(|h| h.text))
            .unwrap_or_default();
        Some(UiState::new(ScreenKind::QuestLogPlayback, text))
    }
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

    #[test]
    fn test_naming_screen_needs_callback_and_pointer() {
        let cb_entry = (
            addr::GMAIN_ADDR + addr::GMAIN_CALLBACK2_OFFSET,
            addr::CB2_NAMING_SCREEN_ADDR.to_le_bytes().to_vec(),
        );
        // Callback alone is not enough.
        let ctx = ctx_with(vec![cb_entry.clone()]);
        assert!(NamingScreenDetector.detect(&ctx).is_none());
        // Pointer alone is not enough either.
        let ptr_entry = (
            addr::SNAMING_SCREEN_PTR_ADDR,
            0x0203_8000u32.to_le_bytes().to_vec(),
        );
        let ctx = ctx_with(vec![ptr_entry.clone()]);
        assert!(NamingScreenDetector.detect(&ctx).is_none());
        let ctx = ctx_with(vec![cb_entry, ptr_entry]);
        assert!(NamingScreenDetector.detect(&ctx).is_some());
    }

    #[test]
    fn test_controls_guide_by_task() {
        let ctx = ctx_with(vec![(
            addr::GTASKS_ADDR,
            task_table(&[(2, addr::TASK_CONTROLS_GUIDE_HANDLE_INPUT_ADDR, &[])]),
        )]);
        let state = ControlsGuideDetector.detect(&ctx).unwrap();
        assert_eq!(state.menu_type, ScreenKind::ControlsGuide);
    }

    #[test]
    fn test_quest_log_needs_allocated_window() {
        let mut windows = vec![layout::WINDOW_NONE; layout::NUM_WINDOWS * layout::WINDOW_SIZE];
        // Playback flagged but all windows freed: stale byte, reject.
        let ctx = ctx_with(vec![
            (addr::GQUEST_LOG_PLAYBACK_STATE_ADDR, vec![2]),
            (addr::SQUEST_LOG_WINDOW_IDS_ADDR, vec![4, 5, 6]),
            (addr::GWINDOWS_ADDR, windows.clone()),
        ]);
        assert!(QuestLogPlaybackDetector.detect(&ctx).is_none());

        windows[5 * layout::WINDOW_SIZE + layout::WINDOW_BG_OFFSET] = 0;
        let ctx = ctx_with(vec![
            (addr::GQUEST_LOG_PLAYBACK_STATE_ADDR, vec![2]),
            (addr::SQUEST_LOG_WINDOW_IDS_ADDR, vec![4, 5, 6]),
            (addr::GWINDOWS_ADDR, windows),
        ]);
        assert!(QuestLogPlaybackDetector.detect(&ctx).is_some());
    }
}
