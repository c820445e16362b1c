// Tue Feb 10 2026 - Alex
//
// End of the chain: a generic choice-menu recognizer for script menus
// no dedicated detector claimed, then a plain-text fallback that
// surfaces whatever the printers are drawing.

use crate::constants::addresses as addr;
use crate::text::{decode, printer};
use crate::ui::context::QueryContext;
use crate::ui::detectors::choice;
use crate::ui::detectors::Detector;
use crate::ui::menu;
use crate::ui::state::{ChoiceKind, ScreenKind, UiState};

fn dialog_prompt(ctx: &QueryContext) -> Option<printer::PrinterHit> {
    printer::find_active_printer_text(ctx.reader(), true)
}

/// The save flow raises its YES/NO after the dialog printer has gone
/// idle, so the prompt often has to be recovered out of band: the
/// current gStringVar4 page first, then the static save prompts in ROM.
fn save_prompt_text(ctx: &QueryContext) -> Option<String> {
    if let Some(raw) = ctx.bytes(addr::GSTRINGVAR4_ADDR, addr::GSTRINGVAR4_SIZE as usize) {
        let guess = decode::decode_text(&raw, 200, true);
        if !guess.is_empty() {
            return Some(guess);
        }
    }
    [
        addr::GTEXT_WOULD_YOU_LIKE_TO_SAVE_ADDR,
        addr::GTEXT_ALREADY_SAVE_FILE_ADDR,
        addr::GTEXT_DIFFERENT_GAME_FILE_ADDR,
    ]
    .into_iter()
    .find_map(|a| {
        let raw = ctx.bytes(a, 160)?;
        let text = decode::decode_text(&raw, raw.len(), true);
        (!text.is_empty()).then_some(text)
    })
}

pub struct ChoiceFallbackDetector;

impl Detector for ChoiceFallbackDetector {
    fn name(&self) -> &'static str {
        "choice_fallback"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        let hit = choice::any_choice(ctx)?;
        let prompt_hit = dialog_prompt(ctx);
        let mut menu_box = hit.menu;
        if menu_box.prompt_text.is_none() {
            if let Some(p) = &prompt_hit {
                menu_box = menu_box.with_prompt(p.text.clone());
            }
        }
        if menu_box.prompt_text.is_none()
            && menu_box.kind == ChoiceKind::YesNo
            && save_info_visible(ctx)
        {
            if let Some(p) = save_prompt_text(ctx) {
                menu_box = menu_box.with_prompt(p);
            }
        }
        let rendered = if menu_box.kind == ChoiceKind::YesNo {
            menu::render_yes_no(menu_box.cursor_position)
        } else {
            menu::render_list(&menu_box.options, menu_box.cursor_position)
        };
        let visible = match &menu_box.prompt_text {
            Some(p) => format!("{p}\n{rendered}"),
            None => rendered,
        };
        let mut state = UiState::new(hit.screen, visible).with_choice(menu_box);
        if let Some(p) = prompt_hit {
            if p.pages.len() > 1 {
                let current = p.current_page;
                state = state.with_pages(p.pages, current);
            }
        }
        Some(state)
    }
}

pub struct TextFallbackDetector;

impl Detector for TextFallbackDetector {
    fn name(&self) -> &'static str {
        "text_fallback"
    }

    fn detect(&self, ctx: &QueryContext) -> Option<UiState> {
        // The dialog slot goes inactive the moment printing finishes,
        // while the box stays up until dismissed; treat it as evidence
        // whenever a script holds the field or slow mode asks for it.
        let include_idle = ctx.field_controls_locked || ctx.slow_mode;
        let hit = printer::find_active_printer_text(ctx.reader(), include_idle);

        // The save-info summary window renders above the save dialog.
        let save_info = save_info_text(ctx);

        let mut text = hit.as_ref().map(|h| h.text.clone()).unwrap_or_default();
        if let Some(info) = &save_info {
            text = if text.is_empty() {
                info.clone()
            } else {
                format!("{info}\n{text}")
            };
        }
        if text.chars().count() <= 2 {
            return None;
        }
        let mut state = UiState::new(ScreenKind::Dialog, text);
        if let Some(hit) = hit {
            if !hit.pages.is_empty() {
                let current = if hit.pages.len() == 1 { 1 } else { hit.current_page };
                state = state.with_pages(hit.pages, current);
            }
        }
        Some(state)
    }
}

fn save_info_visible(ctx: &QueryContext) -> bool {
    menu::window_allocated(ctx, ctx.u8(addr::SSAVE_INFO_WINDOWID_ADDR))
}

fn save_info_text(ctx: &QueryContext) -> Option<String> {
    if !save_info_visible(ctx) {
        return None;
    }
    let id = ctx.u8(addr::SSAVE_INFO_WINDOWID_ADDR);
    printer::text_for_window(ctx.reader(), id, true)
}
