// Tue Feb 10 2026 - Alex
//
// Connection-scoped state: one bridge client plus the caches that stay
// valid for as long as the same game instance is on the other end.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;

use crate::config::Config;
use crate::memory::{MemorySnapshot, ReadMetrics};
use crate::transport::{BridgeClient, TransportError};
use crate::ui::classifier;
use crate::ui::context::QueryContext;
use crate::ui::state::UiState;

pub struct SessionContext {
    client: Arc<BridgeClient>,
    config: Config,
    rom_strings: Arc<Mutex<AHashMap<u32, String>>>,
    last_metrics: Mutex<ReadMetrics>,
}

impl SessionContext {
    pub fn connect(config: Config) -> Result<Self, TransportError> {
        config.validate().map_err(TransportError::Protocol)?;
        let client = Arc::new(BridgeClient::connect(&config)?);
        log::info!(
            "Bridge session open to {} ({})",
            config.host,
            if config.use_http { "http" } else { "socket" }
        );
        Ok(Self {
            client,
            config,
            rom_strings: Arc::new(Mutex::new(AHashMap::new())),
            last_metrics: Mutex::new(ReadMetrics::default()),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &BridgeClient {
        &self.client
    }

    /// Capture one coherent view of the game and classify it.
    pub fn query_state(&self) -> Result<UiState, TransportError> {
        let ctx = QueryContext::capture(Arc::clone(&self.client), self.config.slow_mode)?
            .with_rom_string_cache(Arc::clone(&self.rom_strings));
        let state = classifier::classify(&ctx)?;
        *self.last_metrics.lock() = ctx.metrics().snapshot();
        Ok(state)
    }

    /// Classify a snapshot captured elsewhere, offline. ROM strings the
    /// snapshot does not cover simply come back as placeholders.
    pub fn classify_snapshot(
        snapshot: MemorySnapshot,
        slow_mode: bool,
    ) -> Result<UiState, TransportError> {
        let ctx = QueryContext::from_snapshot(snapshot, slow_mode);
        classifier::classify(&ctx)
    }

    /// Text currently bound to one window, if any printer wrote to it.
    pub fn window_text(&self, window_id: u8) -> Result<Option<String>, TransportError> {
        let ctx = QueryContext::capture(Arc::clone(&self.client), self.config.slow_mode)?
            .with_rom_string_cache(Arc::clone(&self.rom_strings));
        let text = crate::text::printer::text_for_window(ctx.reader(), window_id, true);
        if let Some(fault) = ctx.take_fault() {
            return Err(fault);
        }
        Ok(text)
    }

    /// Read counters from the most recent query.
    pub fn last_metrics(&self) -> ReadMetrics {
        self.last_metrics.lock().clone()
    }

    pub fn press_button(&self, button: &str, frames: u32) -> Result<(), TransportError> {
        self.client.press_button(button, frames)
    }

    pub fn hold_button(&self, button: &str) -> Result<(), TransportError> {
        self.client.hold_button(button)
    }

    pub fn clear_held_buttons(&self) -> Result<(), TransportError> {
        self.client.clear_held_buttons()
    }

    pub fn screenshot(&self, path: &str) -> Result<(), TransportError> {
        self.client.screenshot(path)
    }

    pub fn save_state_file(&self, path: &str) -> Result<(), TransportError> {
        self.client.save_state_file(path)
    }

    pub fn load_state_file(&self, path: &str) -> Result<(), TransportError> {
        self.client.load_state_file(path)
    }

    pub fn reset(&self) -> Result<(), TransportError> {
        self.client.reset()
    }
}
