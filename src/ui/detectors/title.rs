// Tue Feb 10 2026 - Alex

use crate::constants::addresses as addr;
use crate::ui::context::QueryContext;
use crate::ui::detectors::Detector;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};
use crate::ui::tasks;

/// What the title screen renders while waiting for START. Static
/// imagery, so the text is synthesized rather than decoded.
const TITLE_SCREEN_VISIBLE_TEXT: &str =
    "Pokémon FireRed Version\nPRESS START\n2004 GAME FREAK inc.";

const TITLE_SCREEN_CALLBACKS: [u32; 2] =
    [addr::CB2_INIT_TITLE_SCREEN_ADDR, addr::CB2_TITLE_SCREEN_ADDR];

const TITLE_SCREEN_TASKS: [u32; 3] = [
    addr::TASK_TITLE_SCREEN_PHASE1_ADDR,
    addr::TASK_TITLE_SCREEN_PHASE2_ADDR,
    addr::TASK_TITLE_SCREEN_PHASE3_ADDR,
];

const MAIN_MENU_CALLBACKS: [u32; 3] = [
    addr::CB2_INIT_MAIN_MENU_ADDR,
    addr::CB2_MAIN_MENU_ADDR,
    addr::CB2_REINIT_MAIN_MENU_ADDR,
];

const MAIN_MENU_TASKS: [u32; 3] = [
    addr::TASK_DISPLAY_MAIN_MENU_ADDR,
    addr::TASK_HIGHLIGHT_SELECTED_MAIN_MENU_ITEM_ADDR,
    addr::TASK_HANDLE_MAIN_MENU_INPUT_ADDR,
];

pub(crate) fn callback_matches_any(ctx: &QueryContext, set: &[u32]) -> bool {
    let cb = ctx.callback_masked();
    cb != 0
        && set
            .iter()
            .any(|&known| known != 0 && cb == known & crate::constants::layout::FUNC_PTR_MASK)
}

pub struct TitleScreenDetector;

impl Detector for TitleScreenDetector {
    fn name(&self) -> &'static str {
        "title_screen"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        let on = callback_matches_any(ctx, &TITLE_SCREEN_CALLBACKS)
            || tasks::find_active_task_any(ctx, &TITLE_SCREEN_TASKS).is_some();
        on.then(|| UiState::new(ScreenKind::TitleScreen, TITLE_SCREEN_VISIBLE_TEXT))
    }
}

/// Option rows per save-file situation: 0 = no save, 1 = save present,
/// 2 = save plus mystery gift unlocked.
fn main_menu_options(variant: u16) -> Vec<String> {
    let rows: &[&str] = match variant {
        0 => &["NEW GAME", "OPTION"],
        1 => &["CONTINUE", "NEW GAME", "OPTION"],
        _ => &["CONTINUE", "NEW GAME", "MYSTERY GIFT", "OPTION"],
    };
    rows.iter().map(|s| s.to_string()).collect()
}

pub struct TitleMenuDetector;

impl Detector for TitleMenuDetector {
    fn name(&self) -> &'static str {
        "title_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        let task = tasks::find_active_task_any(ctx, &MAIN_MENU_TASKS);
        if task.is_none() && !callback_matches_any(ctx, &MAIN_MENU_CALLBACKS) {
            return None;
        }
        let (variant, cursor) = match task {
            Some(id) => (
                tasks::task_data_u16(ctx, id, 0),
                tasks::task_data_s16(ctx, id, 1).max(0) as usize,
            ),
            None => (0, 0),
        };
        let options = main_menu_options(variant);
        let choice = ChoiceMenu::new(ChoiceKind::Menu, options.clone(), cursor);
        let visible = menu::render_list(&options, choice.cursor_position);
        Some(UiState::new(ScreenKind::TitleMenu, visible).with_choice(choice))
    }
}
