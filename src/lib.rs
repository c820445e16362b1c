// Tue Feb 10 2026 - Alex

#![allow(dead_code)]
#![allow(unreachable_patterns)]

pub mod config;
pub mod constants;
pub mod memory;
pub mod session;
pub mod text;
pub mod transport;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use memory::{MemoryReader, MemorySnapshot, ReadMetrics};
pub use session::SessionContext;
pub use transport::{BridgeClient, TransportError};
pub use ui::classifier::classify;
pub use ui::context::QueryContext;
pub use ui::state::{ChoiceKind, ChoiceMenu, ScreenKind, UiState};
