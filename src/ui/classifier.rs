// Tue Feb 10 2026 - Alex
//
// The ordered detector chain. Earlier entries own more specific
// signals; the first positive answer wins and later detectors are
// never consulted. An idle overworld short-circuits before any
// detector runs at all.

use once_cell::sync::Lazy;

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::transport::TransportError;
use crate::ui::battle;
use crate::ui::context::QueryContext;
use crate::ui::detectors::{
    bag::{BagMenuDetector, TmCaseDetector},
    fallback::{ChoiceFallbackDetector, TextFallbackDetector},
    field::{OptionMenuDetector, StartMenuDetector, TrainerCardDetector, WhiteoutRecoveryDetector},
    intro::{
        ControlsGuideDetector, NamingScreenDetector, PikachuIntroDetector, QuestLogPlaybackDetector,
    },
    overlays::{
        BerryCrushRankingsDetector, FlyMapDetector, PokedexDetector, PokemonStorageDetector,
    },
    party::{PartyMenuDetector, SummaryMoveReplaceDetector, SummaryScreenDetector},
    pc::{
        ItemStorageListDetector, ItemStorageMenuDetector, PlayerPcMenuDetector,
        PokeStoragePcMenuDetector,
    },
    shop::{ElevatorMenuDetector, ShopBuyMenuDetector},
    title::{TitleMenuDetector, TitleScreenDetector},
    Detector,
};
use crate::ui::state::{ScreenKind, UiState};

struct BattleUiDetector;

impl Detector for BattleUiDetector {
    fn name(&self) -> &'static str {
        "battle_ui"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        battle::detect_battle_ui(ctx)
    }
}

static CHAIN: Lazy<Vec<Box<dyn Detector>>> = Lazy::new(|| {
    vec![
        Box::new(TitleScreenDetector),
        Box::new(NamingScreenDetector),
        Box::new(ControlsGuideDetector),
        Box::new(PikachuIntroDetector),
        Box::new(QuestLogPlaybackDetector),
        Box::new(FlyMapDetector),
        Box::new(PokedexDetector),
        Box::new(PokemonStorageDetector),
        Box::new(BerryCrushRankingsDetector),
        Box::new(PokeStoragePcMenuDetector),
        Box::new(PlayerPcMenuDetector),
        Box::new(ItemStorageListDetector),
        Box::new(ItemStorageMenuDetector),
        Box::new(StartMenuDetector),
        Box::new(TmCaseDetector),
        Box::new(BagMenuDetector),
        Box::new(TrainerCardDetector),
        Box::new(OptionMenuDetector),
        Box::new(TitleMenuDetector),
        Box::new(PartyMenuDetector),
        Box::new(ShopBuyMenuDetector),
        Box::new(SummaryScreenDetector),
        Box::new(SummaryMoveReplaceDetector),
        Box::new(ElevatorMenuDetector),
        Box::new(WhiteoutRecoveryDetector),
        Box::new(ChoiceFallbackDetector),
        Box::new(BattleUiDetector),
        Box::new(TextFallbackDetector),
    ]
});

/// True when every cheap idleness signal agrees the player is simply
/// walking around: overworld callback installed, no script lock, no
/// battle, no dialog window remnants and no menu bookkeeping. In that
/// case the query answers without invoking a single detector.
fn overworld_idle(ctx: &QueryContext) -> bool {
    if ctx.in_battle || ctx.field_controls_locked {
        return false;
    }
    if ctx.callback_masked() != addr::CB2_OVERWORLD_ADDR & layout::FUNC_PTR_MASK {
        return false;
    }
    // Positive evidence required: each byte must be readable and show
    // the idle value, otherwise the full chain decides.
    let idle_byte = |a: u32, expect: u8| matches!(ctx.bytes(a, 1), Some(b) if b[0] == expect);
    if !idle_byte(addr::SYESNO_WINDOWID_ADDR, layout::WINDOW_NONE) {
        return false;
    }
    if !idle_byte(addr::SSAVE_INFO_WINDOWID_ADDR, layout::WINDOW_NONE) {
        return false;
    }
    if !idle_byte(addr::START_MENU_WINDOW_ID_ADDR, layout::WINDOW_NONE) {
        return false;
    }
    let Some(printers) = ctx.bytes(
        addr::STEXTPRINTERS_ADDR,
        layout::NUM_TEXT_PRINTERS * layout::TEXT_PRINTER_SIZE,
    ) else {
        return false;
    };
    (0..layout::NUM_TEXT_PRINTERS)
        .all(|slot| printers[slot * layout::TEXT_PRINTER_SIZE + layout::PRINTER_ACTIVE_OFFSET] == 0)
}

/// Run the chain over one query context and produce exactly one state.
///
/// Recognizing nothing is a normal outcome and yields the `None` state
/// with empty text; only a transport failure surfaces as an error.
pub fn classify(ctx: &QueryContext) -> Result<UiState, TransportError> {
    let state = classify_inner(ctx);
    if let Some(fault) = ctx.take_fault() {
        return Err(fault);
    }
    Ok(state)
}

fn classify_inner(ctx: &QueryContext) -> UiState {
    if overworld_idle(ctx) {
        log::trace!("overworld idle, skipping detector chain");
        return UiState::none();
    }
    for detector in CHAIN.iter() {
        ctx.note_detector_run();
        if let Some(state) = detector.detect(ctx) {
            log::debug!("screen recognized by {}", detector.name());
            debug_assert!(
                state.menu_type != ScreenKind::None,
                "detectors answer None instead of the none state"
            );
            return state;
        }
    }
    UiState::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryRegion, MemorySnapshot};
    use crate::ui::tasks::testutil::task_table;

    fn ctx_from(entries: Vec<(u32, Vec<u8>)>) -> QueryContext {
        let regions: Vec<MemoryRegion> = entries
            .iter()
            .map(|(a, b)| MemoryRegion::new(*a, b.len() as u32))
            .collect();
        let snap =
            MemorySnapshot::from_ranges(&regions, entries.into_iter().map(|(_, b)| b).collect());
        QueryContext::from_snapshot(snap, false)
    }

    fn idle_overworld_entries() -> Vec<(u32, Vec<u8>)> {
        vec![
            (
                addr::GMAIN_ADDR + addr::GMAIN_CALLBACK2_OFFSET,
                addr::CB2_OVERWORLD_ADDR.to_le_bytes().to_vec(),
            ),
            (addr::SCRIPT_LOCK_FIELD_CONTROLS_ADDR, vec![0]),
            (addr::IN_BATTLE_BIT_ADDR, vec![0]),
            (addr::SYESNO_WINDOWID_ADDR, vec![layout::WINDOW_NONE]),
            (addr::SSAVE_INFO_WINDOWID_ADDR, vec![layout::WINDOW_NONE]),
            (addr::START_MENU_WINDOW_ID_ADDR, vec![layout::WINDOW_NONE]),
            (
                addr::STEXTPRINTERS_ADDR,
                vec![0u8; layout::NUM_TEXT_PRINTERS * layout::TEXT_PRINTER_SIZE],
            ),
        ]
    }

    #[test]
    fn test_idle_overworld_skips_every_detector() {
        let ctx = ctx_from(idle_overworld_entries());
        let state = classify(&ctx).unwrap();
        assert!(state.is_none());
        assert_eq!(state.visible_text, "");
        assert_eq!(ctx.detectors_run(), 0);
    }

    #[test]
    fn test_locked_field_runs_the_chain() {
        let mut entries = idle_overworld_entries();
        entries.retain(|(a, _)| *a != addr::SCRIPT_LOCK_FIELD_CONTROLS_ADDR);
        entries.push((addr::SCRIPT_LOCK_FIELD_CONTROLS_ADDR, vec![1]));
        let ctx = ctx_from(entries);
        let state = classify(&ctx).unwrap();
        // Nothing on screen, so still none, but the chain did run.
        assert!(state.is_none());
        assert!(ctx.detectors_run() > 0);
    }

    #[test]
    fn test_unrecognized_returns_none_not_error() {
        let ctx = ctx_from(vec![]);
        let state = classify(&ctx).unwrap();
        assert!(state.is_none());
    }

    #[test]
    fn test_title_screen_wins_over_fallbacks() {
        let ctx = ctx_from(vec![(
            addr::GTASKS_ADDR,
            task_table(&[(0, addr::TASK_TITLE_SCREEN_PHASE1_ADDR, &[])]),
        )]);
        let state = classify(&ctx).unwrap();
        assert_eq!(state.menu_type, ScreenKind::TitleScreen);
    }

    #[test]
    fn test_end_to_end_battle_actions() {
        let mut entries = vec![
            (addr::IN_BATTLE_BIT_ADDR, vec![layout::IN_BATTLE_BITMASK]),
            (addr::GBATTLERSCOUNT_ADDR, vec![2]),
            (addr::GABSENTBATTLERFLAGS_ADDR, vec![0]),
            (addr::GBATTLERPOSITIONS_ADDR, vec![0, 1, 2, 3]),
            (addr::GBATTLETYPEFLAGS_ADDR, 0u32.to_le_bytes().to_vec()),
            (addr::GACTIONSELECTIONCURSOR_ADDR, vec![1, 0, 0, 0]),
        ];
        let mut funcs = Vec::new();
        funcs.extend(addr::BTL_HANDLE_ACTION_FUNCS[0].to_le_bytes());
        funcs.extend([0u8; 12]);
        entries.push((addr::GBATTLERCONTROLLERFUNCS_ADDR, funcs));
        let ctx = ctx_from(entries);
        let state = classify(&ctx).unwrap();
        assert_eq!(state.menu_type, ScreenKind::BattleActions);
        let choice = state.choice.unwrap();
        assert_eq!(choice.options, vec!["FIGHT", "BAG", "POKéMON", "RUN"]);
        assert_eq!(choice.cursor_position, 1);
        assert_eq!(choice.selected_option.as_deref(), Some("BAG"));
    }

    #[test]
    fn test_snapshot_reclassification_is_deterministic() {
        let entries = vec![(
            addr::GTASKS_ADDR,
            task_table(&[(0, addr::TASK_TITLE_SCREEN_PHASE1_ADDR, &[])]),
        )];
        let a = classify(&ctx_from(entries.clone())).unwrap();
        let b = classify(&ctx_from(entries)).unwrap();
        assert_eq!(a, b);
    }
}
