// Tue Feb 10 2026 - Alex

pub mod battle;
pub mod classifier;
pub mod context;
pub mod detectors;
pub mod menu;
pub mod state;
pub mod tasks;

pub use classifier::classify;
pub use context::QueryContext;
pub use state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};
