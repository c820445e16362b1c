// Tue Feb 10 2026 - Alex
//
// Field-mode screens: the start menu, the option screen, the trainer
// card and the whiteout recovery cutscene.

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::text::decode::decode_text;
use crate::text::printer;
use crate::ui::context::QueryContext;
use crate::ui::detectors::title::callback_matches_any;
use crate::ui::detectors::Detector;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};
use crate::ui::tasks;

/// Start menu action names indexed by action id. The two player-name
/// slots render the trainer's name in game; the generic label keeps the
/// report stable without chasing the save block.
const START_MENU_ACTION_NAMES: [&str; 9] = [
    "POKéDEX", "POKéMON", "BAG", "PLAYER", "SAVE", "OPTION", "EXIT", "RETIRE", "PLAYER",
];

const OPTION_MENU_ITEMS: [&str; 7] = [
    "TEXT SPEED",
    "BATTLE SCENE",
    "BATTLE STYLE",
    "SOUND",
    "BUTTON MODE",
    "FRAME",
    "CANCEL",
];

pub struct StartMenuDetector;

impl Detector for StartMenuDetector {
    fn name(&self) -> &'static str {
        "start_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        tasks::find_active_task_any(
            ctx,
            &[
                addr::TASK_SHOW_START_MENU_ADDR,
                addr::TASK_START_MENU_HANDLE_INPUT_ADDR,
            ],
        )?;
        let window_id = ctx.u8(addr::START_MENU_WINDOW_ID_ADDR);
        if !menu::window_allocated(ctx, window_id) {
            return None;
        }
        let num_actions = ctx.u8(addr::START_MENU_NUM_ACTIONS_ADDR) as usize;
        if num_actions == 0 || num_actions > layout::START_MENU_MAX_ACTIONS {
            return None;
        }
        let action_ids = ctx.bytes(addr::START_MENU_ACTIONS_ADDR, num_actions)?;
        let options: Vec<String> = action_ids
            .iter()
            .map(|&id| {
                START_MENU_ACTION_NAMES
                    .get(id as usize)
                    .copied()
                    .unwrap_or("?")
                    .to_string()
            })
            .collect();
        let cursor = ctx.u8(addr::START_MENU_CURSOR_POS_ADDR) as usize;
        let choice = ChoiceMenu::new(ChoiceKind::Menu, options.clone(), cursor);
        let visible = menu::render_list(&options, choice.cursor_position);
        Some(UiState::new(ScreenKind::StartMenu, visible).with_choice(choice))
    }
}

pub struct OptionMenuDetector;

impl Detector for OptionMenuDetector {
    fn name(&self) -> &'static str {
        "option_menu"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        let task = tasks::find_active_task_any(
            ctx,
            &[
                addr::TASK_OPTION_MENU_FADE_IN_ADDR,
                addr::TASK_OPTION_MENU_PROCESS_INPUT_ADDR,
            ],
        )?;
        let cursor = tasks::task_data_s16(ctx, task, 0).max(0) as usize;
        let options: Vec<String> = OPTION_MENU_ITEMS.iter().map(|s| s.to_string()).collect();
        let choice = ChoiceMenu::new(ChoiceKind::Menu, options.clone(), cursor);
        let visible = menu::render_list(&options, choice.cursor_position);
        Some(UiState::new(ScreenKind::OptionMenu, visible).with_choice(choice))
    }
}

pub struct TrainerCardDetector;

impl Detector for TrainerCardDetector {
    fn name(&self) -> &'static str {
        "trainer_card"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        callback_matches_any(ctx, &[addr::CB2_TRAINER_CARD_ADDR]).then(|| {
            let text = printer::find_active_printer_text(ctx.reader(), true)
                .map(|h| h.text)
                .unwrap_or_default();
            UiState::new(ScreenKind::TrainerCard, text)
        })
    }
}

pub struct WhiteoutRecoveryDetector;

impl Detector for WhiteoutRecoveryDetector {
    fn name(&self) -> &'static str {
        "whiteout_recovery"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        let task = tasks::find_active_task(ctx, addr::TASK_RUSH_INJURED_POKEMON_TO_CENTER_ADDR)?;
        // Data word 0 is the cutscene state machine; the message is on
        // screen only in the two text states.
        let state = tasks::task_data_u16(ctx, task, 0);
        if state != 1 && state != 4 {
            return None;
        }
        let window_id = tasks::task_data_u16(ctx, task, 1) as u8;
        let text = printer::text_for_window(ctx.reader(), window_id, true)
            .or_else(|| {
                let raw = ctx.bytes(addr::GSTRINGVAR4_ADDR, addr::GSTRINGVAR4_SIZE as usize)?;
                let decoded = decode_text(&raw, raw.len(), false);
                (decoded.chars().count() > 2).then_some(decoded)
            })
            .or_else(|| {
                let rom = if state == 1 {
                    addr::GTEXT_SCURRIED_TO_CENTER_ADDR
                } else {
                    addr::GTEXT_SCURRIED_BACK_HOME_ADDR
                };
                ctx.rom_string(rom, 200)
            })
            .unwrap_or_default();
        Some(UiState::new(ScreenKind::WhiteoutRecovery, text))
    }
}
