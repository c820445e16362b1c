// Tue Feb 10 2026 - Alex

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::memory::{
    LiveReader, MemoryError, MemoryReader, MemoryRegion, MemorySnapshot, MetricsScope,
};
use crate::transport::{BridgeClient, TransportError};

/// Byte ranges captured up front for every query. One batched request
/// covers everything the detector chain dereferences unconditionally;
/// pointer-chased data (ROM strings, dynamic buffers) is read on demand
/// through the live fallback.
fn capture_ranges() -> Vec<(u32, usize)> {
    vec![
        (addr::GMAIN_ADDR + addr::GMAIN_CALLBACK2_OFFSET, 4),
        (addr::SCRIPT_LOCK_FIELD_CONTROLS_ADDR, 1),
        (addr::IN_BATTLE_BIT_ADDR, 1),
        (
            addr::GTASKS_ADDR,
            layout::NUM_TASKS * layout::TASK_SIZE,
        ),
        (
            addr::STEXTPRINTERS_ADDR,
            layout::NUM_TEXT_PRINTERS * layout::TEXT_PRINTER_SIZE,
        ),
        (addr::GWINDOWS_ADDR, layout::NUM_WINDOWS * layout::WINDOW_SIZE),
        (addr::SYESNO_WINDOWID_ADDR, 2),
        (addr::SMENU_ADDR, layout::SMENU_SIZE),
        // gStringVar1 through the end of gStringVar4 is contiguous.
        (
            addr::GSTRINGVAR1_ADDR,
            (addr::GSTRINGVAR4_ADDR + addr::GSTRINGVAR4_SIZE - addr::GSTRINGVAR1_ADDR) as usize,
        ),
        // gDisplayedStringBattle, the three substitution buffers behind
        // it, and gBattleTypeFlags (which lives inside this span) in one
        // block.
        (
            addr::GDISPLAYEDSTRINGBATTLE_ADDR,
            (addr::GDISPLAYEDSTRINGBATTLE_SIZE + 3 * addr::GBATTLETEXTBUFF_SIZE) as usize,
        ),
        (addr::START_MENU_ACTIONS_ADDR, 0x14),
        (addr::GQUEST_LOG_STATE_ADDR, 2),
        (
            addr::SQUEST_LOG_WINDOW_IDS_ADDR,
            addr::QUEST_LOG_WINDOW_COUNT,
        ),
        (addr::GSPECIALVAR_0X8004_ADDR, 4),
        (addr::GSAVEBLOCK1_PTR_ADDR, 8),
        (addr::STOP_MENU_NUM_OPTIONS_ADDR, 8),
        // gActiveBattler through gAbsentBattlerFlags, one block.
        (
            addr::GACTIVEBATTLER_ADDR,
            (addr::GABSENTBATTLERFLAGS_ADDR + 4 - addr::GACTIVEBATTLER_ADDR) as usize,
        ),
        (
            addr::GBATTLERCONTROLLERFUNCS_ADDR,
            layout::BATTLE_MAX_BATTLERS * 4,
        ),
        (addr::GBATTLE_BG0_Y_ADDR, 4),
        (addr::SPARTY_MENU_INTERNAL_PTR_ADDR, 0x14),
        (addr::GPLAYER_PARTY_COUNT_ADDR, 1),
        (addr::SPOKE_STORAGE_PTR_ADDR, 0x0C),
        (addr::GPLAYER_PC_ITEM_PAGE_INFO_ADDR, 0x14),
        (addr::SNAMING_SCREEN_PTR_ADDR, 4),
    ]
}

/// Snapshot-first reader with an optional live fallback for addresses
/// outside the captured set. A transport failure in the fallback is
/// latched so the classifier can surface it even if the read site
/// discarded the error.
pub struct ContextReader {
    snapshot: MemorySnapshot,
    live: Option<LiveReader>,
    fault: Arc<Mutex<Option<String>>>,
}

impl ContextReader {
    fn fall_back<T>(
        &self,
        miss: MemoryError,
        read: impl FnOnce(&LiveReader) -> Result<T, MemoryError>,
    ) -> Result<T, MemoryError> {
        let Some(live) = &self.live else {
            return Err(miss);
        };
        match read(live) {
            Ok(v) => Ok(v),
            Err(MemoryError::Transport(e)) => {
                *self.fault.lock() = Some(e.to_string());
                Err(MemoryError::Transport(e))
            }
            Err(e) => Err(e),
        }
    }
}

impl MemoryReader for ContextReader {
    fn read_u8(&self, a: u32) -> Result<u8, MemoryError> {
        match self.snapshot.read_u8(a) {
            Ok(v) => Ok(v),
            Err(miss) => self.fall_back(miss, |live| live.read_u8(a)),
        }
    }

    fn read_u16(&self, a: u32) -> Result<u16, MemoryError> {
        match self.snapshot.read_u16(a) {
            Ok(v) => Ok(v),
            Err(miss) => self.fall_back(miss, |live| live.read_u16(a)),
        }
    }

    fn read_u32(&self, a: u32) -> Result<u32, MemoryError> {
        match self.snapshot.read_u32(a) {
            Ok(v) => Ok(v),
            Err(miss) => self.fall_back(miss, |live| live.read_u32(a)),
        }
    }

    fn read_bytes(&self, a: u32, len: usize) -> Result<Vec<u8>, MemoryError> {
        match self.snapshot.read_bytes(a, len) {
            Ok(v) => Ok(v.to_vec()),
            Err(miss) => self.fall_back(miss, |live| live.read_bytes(a, len)),
        }
    }
}

/// Everything one classification query reads from, plus the three flags
/// every detector may gate on. Built once per query; detectors never
/// touch the transport directly.
pub struct QueryContext {
    reader: ContextReader,
    metrics: MetricsScope,
    pub top_level_callback: u32,
    pub field_controls_locked: bool,
    pub in_battle: bool,
    pub slow_mode: bool,
    detectors_run: AtomicUsize,
    rom_strings: Arc<Mutex<AHashMap<u32, String>>>,
}

impl QueryContext {
    /// Capture a fresh snapshot over the bridge and wrap it with a live
    /// fallback for on-demand reads.
    pub fn capture(client: Arc<BridgeClient>, slow_mode: bool) -> Result<Self, TransportError> {
        let metrics = MetricsScope::new();
        let ranges = capture_ranges();
        let captures = client.read_ranges(&ranges)?;
        let requested: usize = ranges.iter().map(|(_, len)| len).sum();
        let returned: usize = captures.iter().map(Vec::len).sum();
        metrics.record_read_ranges(ranges.len(), requested, returned);
        let regions: Vec<MemoryRegion> = ranges
            .iter()
            .map(|(a, len)| MemoryRegion::new(*a, *len as u32))
            .collect();
        let snapshot = MemorySnapshot::from_ranges(&regions, captures);
        let live = LiveReader::new(client, metrics.clone());
        let reader = ContextReader {
            snapshot,
            live: Some(live),
            fault: Arc::new(Mutex::new(None)),
        };
        Ok(Self::from_reader(reader, metrics, slow_mode))
    }

    /// Classify against a pre-captured snapshot. Addresses outside the
    /// snapshot read as unmapped, exactly like stale live memory.
    pub fn from_snapshot(snapshot: MemorySnapshot, slow_mode: bool) -> Self {
        let reader = ContextReader {
            snapshot,
            live: None,
            fault: Arc::new(Mutex::new(None)),
        };
        Self::from_reader(reader, MetricsScope::new(), slow_mode)
    }

    fn from_reader(reader: ContextReader, metrics: MetricsScope, slow_mode: bool) -> Self {
        let top_level_callback = reader
            .read_u32(addr::GMAIN_ADDR + addr::GMAIN_CALLBACK2_OFFSET)
            .unwrap_or(0);
        let field_controls_locked = reader
            .read_u8(addr::SCRIPT_LOCK_FIELD_CONTROLS_ADDR)
            .map(|b| b != 0)
            .unwrap_or(false);
        let in_battle = reader
            .read_u8(addr::IN_BATTLE_BIT_ADDR)
            .map(|b| b & layout::IN_BATTLE_BITMASK != 0)
            .unwrap_or(false);
        Self {
            reader,
            metrics,
            top_level_callback,
            field_controls_locked,
            in_battle,
            slow_mode,
            detectors_run: AtomicUsize::new(0),
            rom_strings: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Share a cache of decoded ROM strings across queries of the same
    /// session. ROM content never changes underneath a connection.
    pub fn with_rom_string_cache(mut self, cache: Arc<Mutex<AHashMap<u32, String>>>) -> Self {
        self.rom_strings = cache;
        self
    }

    /// Decode a terminated string at a ROM address, memoized. Addresses
    /// outside ROM or unreadable in the current mode yield None.
    pub fn rom_string(&self, a: u32, max_len: usize) -> Option<String> {
        if !(layout::ROM_START..=layout::ROM_END).contains(&a) {
            return None;
        }
        if let Some(cached) = self.rom_strings.lock().get(&a) {
            return Some(cached.clone());
        }
        let raw = self.bytes(a, max_len)?;
        let text = crate::text::decode::decode_text(&raw, raw.len(), false);
        if text.is_empty() {
            return None;
        }
        self.rom_strings.lock().insert(a, text.clone());
        Some(text)
    }

    pub fn reader(&self) -> &dyn MemoryReader {
        &self.reader
    }

    pub fn metrics(&self) -> &MetricsScope {
        &self.metrics
    }

    // Tolerant accessors. A miss reads as zero so detectors can probe
    // optional structures without error plumbing; positive gates must
    // therefore never treat zero as a match.

    pub fn u8(&self, a: u32) -> u8 {
        self.reader.read_u8(a).unwrap_or(0)
    }

    pub fn u16(&self, a: u32) -> u16 {
        self.reader.read_u16(a).unwrap_or(0)
    }

    pub fn u32(&self, a: u32) -> u32 {
        self.reader.read_u32(a).unwrap_or(0)
    }

    pub fn bytes(&self, a: u32, len: usize) -> Option<Vec<u8>> {
        self.reader.read_bytes(a, len).ok()
    }

    /// Dispatch callback with the instruction-set tag stripped.
    pub fn callback_masked(&self) -> u32 {
        self.top_level_callback & layout::FUNC_PTR_MASK
    }

    pub fn note_detector_run(&self) {
        self.detectors_run.fetch_add(1, Ordering::Relaxed);
    }

    pub fn detectors_run(&self) -> usize {
        self.detectors_run.load(Ordering::Relaxed)
    }

    /// A transport failure latched during an on-demand read, if any.
    pub fn take_fault(&self) -> Option<TransportError> {
        self.reader.fault.lock().take().map(TransportError::Fault)
    }
}
