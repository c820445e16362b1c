// Tue Feb 10 2026 - Alex
//
// Full-screen overlays owned by their dispatch callback: the fly map,
// the Pokedex, the storage system and the berry crush rankings board.

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::text::printer;
use crate::ui::context::QueryContext;
use crate::ui::detectors::title::callback_matches_any;
use crate::ui::detectors::Detector;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};
use crate::ui::tasks;

fn printer_text(ctx: &QueryContext) -> String {
    printer::find_active_printer_text(ctx.reader(), true)
        .map(|hit| hit.text)
        .unwrap_or_default()
}

pub struct FlyMapDetector;

impl Detector for FlyMapDetector {
    fn name(&self) -> &'static str {
        "fly_map"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        callback_matches_any(ctx, &[addr::CB2_FLY_MAP_ADDR])
            .then(|| UiState::new(ScreenKind::FlyMap, printer_text(ctx)))
    }
}

pub struct PokedexDetector;

impl Detector for PokedexDetector {
    fn name(&self) -> &'static str {
        "pokedex"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        callback_matches_any(ctx, &[addr::CB2_POKEDEX_ADDR])
            .then(|| UiState::new(ScreenKind::Pokedex, printer_text(ctx)))
    }
}

pub struct PokemonStorageDetector;

impl Detector for PokemonStorageDetector {
    fn name(&self) -> &'static str {
        "pokemon_storage"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        if !callback_matches_any(ctx, &[addr::CB2_POKE_STORAGE_ADDR]) {
            return None;
        }
        // The storage session allocates its state on the heap; without
        // it the callback word is stale.
        let state_ptr = ctx.u32(addr::SPOKE_STORAGE_PTR_ADDR);
        if !(layout::EWRAM_START..=layout::EWRAM_END).contains(&state_ptr) {
            return None;
        }
        let mut text = printer_text(ctx);
        let mut state = UiState::new(ScreenKind::PokemonStorage, String::new());
        // Storage confirmation popups stack a yes/no on the overlay.
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

pub struct BerryCrushRankingsDetector;

impl Detector for BerryCrushRankingsDetector {
    fn name(&self) -> &'static str {
        "berry_crush_rankings"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        tasks::find_active_task(ctx, addr::TASK_BERRY_CRUSH_RANKINGS_ADDR)?;
        Some(UiState::new(ScreenKind::BerryCrushRankings, printer_text(ctx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_fly_map_by_callback() {
        let ctx = ctx_with(vec![callback_entry(addr::CB2_FLY_MAP_ADDR)]);
        assert_eq!(
            FlyMapDetector.detect(&ctx).unwrap().menu_type,
            ScreenKind::FlyMap
        );
    }

    #[test]
    fn test_storage_needs_heap_pointer() {
        let ctx = ctx_with(vec![callback_entry(addr::CB2_POKE_STORAGE_ADDR)]);
        assert!(PokemonStorageDetector.detect(&ctx).is_none());
        let ctx = ctx_with(vec![
            callback_entry(addr::CB2_POKE_STORAGE_ADDR),
            (
                addr::SPOKE_STORAGE_PTR_ADDR,
                0x0203_9000u32.to_le_bytes().to_vec(),
            ),
        ]);
        assert!(PokemonStorageDetector.detect(&ctx).is_some());
    }

    #[test]
    fn test_storage_stacks_yes_no() {
        let mut windows = vec![layout::WINDOW_NONE; layout::NUM_WINDOWS * layout::WINDOW_SIZE];
        windows[6 * layout::WINDOW_SIZE + layout::WINDOW_BG_OFFSET] = 0;
        windows[6 * layout::WINDOW_SIZE + layout::WINDOW_HEIGHT_OFFSET] = 4;
        let mut smenu = vec![0u8; layout::SMENU_SIZE];
        smenu[layout::SMENU_CURSOR_POS_OFFSET] = 1;
        smenu[layout::SMENU_MIN_CURSOR_POS_OFFSET] = 0;
        smenu[layout::SMENU_MAX_CURSOR_POS_OFFSET] = 1;
        smenu[layout::SMENU_WINDOW_ID_OFFSET] = 6;
        let ctx = ctx_with(vec![
            callback_entry(addr::CB2_POKE_STORAGE_ADDR),
            (
                addr::SPOKE_STORAGE_PTR_ADDR,
                0x0203_9000u32.to_le_bytes().to_vec(),
            ),
            (addr::SYESNO_WINDOWID_ADDR, vec![6]),
            (addr::GWINDOWS_ADDR, windows),
            (addr::SMENU_ADDR, smenu),
        ]);
        let state = PokemonStorageDetector.detect(&ctx).unwrap();
        let choice = state.choice.unwrap();
        assert_eq!(choice.selected_option.as_deref(), Some("NO"));
        assert!(state.visible_text.contains("►NO"));
    }
}
