// Tue Feb 10 2026 - Alex
//
// One detector per recognizable screen. Each checks a distinguishing
// signal (dispatch callback, scheduler task, allocated window or valid
// pointer) before trusting any field layout, and answers None when its
// screen is not on.

pub mod bag;
pub mod choice;
pub mod fallback;
pub mod field;
pub mod intro;
pub mod overlays;
pub mod party;
pub mod pc;
pub mod shop;
pub mod title;

use crate::ui::context::QueryContext;
use crate::ui::state::UiState;

pub trait Detector: Send + Sync {
    fn name(&self) -> &'static str;
    fn detect(&self, ctx: &QueryContext) -> Option<UiState>;
}
