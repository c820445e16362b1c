// Tue Feb 10 2026 - Alex
//
// Recovers on-screen text from the render engine's printer slots. Each
// slot carries a cursor into the string being drawn; the cursor is
// usually mid-string, so the scanner walks back to the string start
// before decoding. When several slots are live, a score picks the one
// a player is most likely reading.

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::memory::fields;
use crate::memory::MemoryReader;
use crate::text::charmap::{PROMPT_CODES, TERMINATOR};
use crate::text::decode::{decode_text, split_pages, DialogPages};

/// How far around the printer cursor the scanner captures.
const SCAN_WINDOW: u32 = 512;

/// Shortest decoded string worth reporting. One or two glyphs are
/// almost always a cursor arrow or leftover page punctuation.
const MIN_TEXT_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct PrinterHit {
    pub slot: usize,
    pub window_id: u8,
    pub text_ptr: u32,
    pub text: String,
    pub pages: Vec<String>,
    pub current_page: usize,
    pub score: i32,
}

impl PrinterHit {
    pub fn dialog_pages(&self) -> DialogPages {
        DialogPages {
            pages: self.pages.clone(),
            current_page: self.current_page,
        }
    }
}

fn region_bounds(ptr: u32) -> Option<(u32, u32)> {
    if (layout::EWRAM_START..=layout::EWRAM_END).contains(&ptr) {
        Some((layout::EWRAM_START, layout::EWRAM_END))
    } else if (layout::IWRAM_START..=layout::IWRAM_END).contains(&ptr) {
        Some((layout::IWRAM_START, layout::IWRAM_END))
    } else if (layout::ROM_START..=layout::ROM_END).contains(&ptr) {
        Some((layout::ROM_START, layout::ROM_END))
    } else {
        None
    }
}

fn in_buffer(ptr: u32, start: u32, size: u32) -> bool {
    ptr >= start && ptr < start.saturating_add(size)
}

/// Tier of a pointer into one of the named shared string buffers. The
/// battle message buffer outranks gStringVar4, which outranks the small
/// substitution buffers.
fn buffer_tier(ptr: u32) -> Option<i32> {
    if in_buffer(
        ptr,
        addr::GDISPLAYEDSTRINGBATTLE_ADDR,
        addr::GDISPLAYEDSTRINGBATTLE_SIZE,
    ) {
        Some(90)
    } else if in_buffer(ptr, addr::GSTRINGVAR4_ADDR, addr::GSTRINGVAR4_SIZE) {
        Some(80)
    } else if in_buffer(ptr, addr::GSTRINGVAR1_ADDR, addr::GSTRINGVAR_SIZE)
        || in_buffer(ptr, addr::GSTRINGVAR2_ADDR, addr::GSTRINGVAR_SIZE)
        || in_buffer(ptr, addr::GSTRINGVAR3_ADDR, addr::GSTRINGVAR_SIZE)
    {
        Some(70)
    } else if in_buffer(ptr, addr::GBATTLETEXTBUFF1_ADDR, addr::GBATTLETEXTBUFF_SIZE)
        || in_buffer(ptr, addr::GBATTLETEXTBUFF2_ADDR, addr::GBATTLETEXTBUFF_SIZE)
        || in_buffer(ptr, addr::GBATTLETEXTBUFF3_ADDR, addr::GBATTLETEXTBUFF_SIZE)
    {
        Some(60)
    } else {
        None
    }
}

/// Rank a printer slot by where its string lives and which slot holds
/// it. Slot 0 is the field dialog window, so it dominates; the named
/// shared buffers rank above anonymous work RAM, which ranks above ROM
/// constants. The region bonus applies only to unnamed pointers.
fn score_slot(slot: usize, ptr: u32) -> i32 {
    let mut score = if slot == 0 { 100 } else { 0 };
    if let Some(tier) = buffer_tier(ptr) {
        return score + tier;
    }
    if (layout::ROM_START..=layout::ROM_END).contains(&ptr) {
        score += 20;
    } else if region_bounds(ptr).is_some() {
        score += 40;
    }
    score
}

/// Capture a window of bytes around the cursor and split it into the
/// part before the cursor and the part from the cursor on.
fn capture_around(
    reader: &dyn MemoryReader,
    ptr: u32,
) -> Option<(Vec<u8>, usize)> {
    let (lo, hi) = region_bounds(ptr)?;
    let start = ptr.saturating_sub(SCAN_WINDOW).max(lo);
    let end = ptr.saturating_add(SCAN_WINDOW).min(hi);
    let len = (end - start + 1) as usize;
    let bytes = reader.read_bytes(start, len).ok()?;
    Some((bytes, (ptr - start) as usize))
}

/// Walk backward from the cursor to the start of the string. The
/// previous string's terminator (or the front of the captured window)
/// marks the boundary.
fn string_start(window: &[u8], cursor: usize) -> usize {
    let mut i = cursor;
    while i > 0 {
        if window[i - 1] == TERMINATOR {
            break;
        }
        i -= 1;
    }
    i
}

fn decode_slot(reader: &dyn MemoryReader, ptr: u32) -> Option<(String, Vec<String>, usize)> {
    let (window, cursor) = capture_around(reader, ptr)?;
    let start = string_start(&window, cursor);
    let raw = &window[start..];
    let full = decode_text(raw, raw.len(), false);
    if full.chars().count() < MIN_TEXT_LEN {
        return None;
    }
    let pages = split_pages(&full);
    // The cursor has already passed this many page prompts.
    let prompts_passed = raw[..cursor - start]
        .iter()
        .filter(|b| PROMPT_CODES.contains(b))
        .count();
    let current_page = if pages.is_empty() {
        1
    } else {
        (prompts_passed + 1).min(pages.len())
    };
    // What the player is reading right now is the page under the
    // cursor, not the head of the buffer.
    let visible = pages
        .get(current_page.saturating_sub(1))
        .cloned()
        .unwrap_or(full);
    Some((visible, pages, current_page))
}

fn scan_printers(
    reader: &dyn MemoryReader,
    accept: impl Fn(usize, bool, u8) -> bool,
) -> Option<PrinterHit> {
    let total = layout::NUM_TEXT_PRINTERS * layout::TEXT_PRINTER_SIZE;
    let table = reader.read_bytes(addr::STEXTPRINTERS_ADDR, total).ok()?;
    let mut best: Option<PrinterHit> = None;
    for slot in 0..layout::NUM_TEXT_PRINTERS {
        let base = slot * layout::TEXT_PRINTER_SIZE;
        let entry = &table[base..base + layout::TEXT_PRINTER_SIZE];
        let active = fields::u8_at(entry, layout::PRINTER_ACTIVE_OFFSET) != 0;
        let window_id = fields::u8_at(entry, layout::PRINTER_WINDOW_ID_OFFSET);
        if !accept(slot, active, window_id) {
            continue;
        }
        let ptr = fields::u32le_at(entry, layout::PRINTER_TEXT_PTR_OFFSET);
        if region_bounds(ptr).is_none() {
            continue;
        }
        let Some((text, pages, current_page)) = decode_slot(reader, ptr) else {
            continue;
        };
        let score = score_slot(slot, ptr);
        let better = best.as_ref().map(|b| score > b.score).unwrap_or(true);
        if better {
            best = Some(PrinterHit {
                slot,
                window_id,
                text_ptr: ptr,
                text,
                pages,
                current_page,
                score,
            });
        }
    }
    best
}

/// Find the most plausible on-screen text across all printer slots.
///
/// Slot 0 (the field dialog window) often finishes printing before the
/// player dismisses the box, so `include_inactive_window0` keeps it in
/// the running even when its active flag has dropped.
pub fn find_active_printer_text(
    reader: &dyn MemoryReader,
    include_inactive_window0: bool,
) -> Option<PrinterHit> {
    scan_printers(reader, |slot, active, _| {
        active || (include_inactive_window0 && slot == 0)
    })
}

/// Text of the printer bound to one specific window, if any slot is
/// (or recently was) printing into it.
pub fn text_for_window(
    reader: &dyn MemoryReader,
    window_id: u8,
    include_inactive: bool,
) -> Option<String> {
    scan_printers(reader, |_, active, wid| {
        wid == window_id && (active || include_inactive)
    })
    .map(|hit| hit.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryRegion, MemorySnapshot, SnapshotReader};

    fn encode(text: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for ch in text.chars() {
            let byte = match ch {
                ' ' => 0x00,
                '!' => 0xAB,
                'A'..='Z' => 0xBB + (ch as u8 - b'A'),
                'a'..='z' => 0xD5 + (ch as u8 - b'a'),
                _ => panic!("no mapping for {ch:?}"),
            };
            out.push(byte);
        }
        out
    }

    fn reader_with(printer_table: Vec<u8>, string_addr: u32, string_bytes: Vec<u8>) -> SnapshotReader {
        // Pad the string capture so the scanner's window around the
        // cursor stays inside one segment.
        let pad = SCAN_WINDOW as usize + 8;
        let seg_start = string_addr - pad as u32;
        let mut seg = vec![TERMINATOR; pad];
        seg.extend(string_bytes);
        seg.extend(vec![TERMINATOR; pad]);
        let snap = MemorySnapshot::from_ranges(
            &[
                MemoryRegion::new(addr::STEXTPRINTERS_ADDR, printer_table.len() as u32),
                MemoryRegion::new(seg_start, seg.len() as u32),
            ],
            vec![printer_table, seg],
        );
        SnapshotReader::new(snap)
    }

    fn printer_table_with_slot(slot: usize, text_ptr: u32, window_id: u8, active: bool) -> Vec<u8> {
        let mut table = vec![0u8; layout::NUM_TEXT_PRINTERS * layout::TEXT_PRINTER_SIZE];
        let base = slot * layout::TEXT_PRINTER_SIZE;
        table[base..base + 4].copy_from_slice(&text_ptr.to_le_bytes());
        table[base + layout::PRINTER_WINDOW_ID_OFFSET] = window_id;
        table[base + layout::PRINTER_ACTIVE_OFFSET] = u8::from(active);
        table
    }

    #[test]
    fn test_finds_text_from_mid_string_cursor() {
        let string_addr = addr::GSTRINGVAR4_ADDR;
        let mut raw = encode("Hello trainer!");
        raw.push(TERMINATOR);
        // Cursor points six glyphs in.
        let table = printer_table_with_slot(0, string_addr + 6, 0, true);
        let reader = reader_with(table, string_addr, raw);
        let hit = find_active_printer_text(&reader, false).unwrap();
        assert_eq!(hit.text, "Hello trainer!");
        assert_eq!(hit.slot, 0);
    }

    #[test]
    fn test_short_strings_rejected() {
        let string_addr = addr::GSTRINGVAR4_ADDR;
        let mut raw = encode("Hi");
        raw.push(TERMINATOR);
        let table = printer_table_with_slot(0, string_addr, 0, true);
        let reader = reader_with(table, string_addr, raw);
        assert!(find_active_printer_text(&reader, false).is_none());
    }

    #[test]
    fn test_inactive_slot0_needs_opt_in() {
        let string_addr = addr::GSTRINGVAR4_ADDR;
        let mut raw = encode("Lingering dialog");
        raw.push(TERMINATOR);
        let table = printer_table_with_slot(0, string_addr, 0, false);
        let reader = reader_with(table.clone(), string_addr, raw.clone());
        assert!(find_active_printer_text(&reader, false).is_none());
        let reader = reader_with(table, string_addr, raw);
        let hit = find_active_printer_text(&reader, true).unwrap();
        assert_eq!(hit.text, "Lingering dialog");
    }

    #[test]
    fn test_slot0_outranks_other_slots() {
        let string_addr = addr::GSTRINGVAR4_ADDR;
        let mut raw = encode("Front text");
        raw.push(TERMINATOR);
        let mut raw2 = encode("Back text");
        raw2.push(TERMINATOR);
        let mut table = printer_table_with_slot(0, string_addr, 0, true);
        let other = printer_table_with_slot(5, string_addr + 32, 5, true);
        let base = 5 * layout::TEXT_PRINTER_SIZE;
        table[base..base + layout::TEXT_PRINTER_SIZE]
            .copy_from_slice(&other[base..base + layout::TEXT_PRINTER_SIZE]);
        let pad = SCAN_WINDOW as usize + 8;
        let seg_start = string_addr - pad as u32;
        let mut seg = vec![TERMINATOR; pad];
        seg.extend(&raw);
        seg.resize(pad + 32, TERMINATOR);
        seg.extend(&raw2);
        seg.extend(vec![TERMINATOR; pad]);
        let snap = MemorySnapshot::from_ranges(
            &[
                MemoryRegion::new(addr::STEXTPRINTERS_ADDR, table.len() as u32),
                MemoryRegion::new(seg_start, seg.len() as u32),
            ],
            vec![table, seg],
        );
        let reader = SnapshotReader::new(snap);
        let hit = find_active_printer_text(&reader, false).unwrap();
        assert_eq!(hit.slot, 0);
        assert_eq!(hit.text, "Front text");
    }

    #[test]
    fn test_battle_buffer_outranks_var_four() {
        let battle_addr = addr::GDISPLAYEDSTRINGBATTLE_ADDR;
        let var4_addr = addr::GSTRINGVAR4_ADDR;
        let mut battle_raw = encode("Battle message text");
        battle_raw.push(TERMINATOR);
        let mut var4_raw = encode("Var four text");
        var4_raw.push(TERMINATOR);
        // Two active non-zero slots, so only the buffer tier decides.
        let mut table = printer_table_with_slot(2, battle_addr, 2, true);
        let other = printer_table_with_slot(5, var4_addr, 5, true);
        let base = 5 * layout::TEXT_PRINTER_SIZE;
        table[base..base + layout::TEXT_PRINTER_SIZE]
            .copy_from_slice(&other[base..base + layout::TEXT_PRINTER_SIZE]);
        let pad = SCAN_WINDOW as usize + 8;
        let pad_seg = |start: u32, raw: &[u8]| {
            let mut seg = vec![TERMINATOR; pad];
            seg.extend(raw);
            seg.extend(vec![TERMINATOR; pad]);
            (start - pad as u32, seg)
        };
        let (battle_start, battle_seg) = pad_seg(battle_addr, &battle_raw);
        let (var4_start, var4_seg) = pad_seg(var4_addr, &var4_raw);
        let snap = MemorySnapshot::from_ranges(
            &[
                MemoryRegion::new(addr::STEXTPRINTERS_ADDR, table.len() as u32),
                MemoryRegion::new(battle_start, battle_seg.len() as u32),
                MemoryRegion::new(var4_start, var4_seg.len() as u32),
            ],
            vec![table, battle_seg, var4_seg],
        );
        let reader = SnapshotReader::new(snap);
        let hit = find_active_printer_text(&reader, false).unwrap();
        assert_eq!(hit.text, "Battle message text");
        assert_eq!(hit.slot, 2);
    }

    #[test]
    fn test_region_bonus_only_for_unnamed_pointers() {
        // A named buffer never collects the work-RAM bonus on top of
        // its tier.
        assert_eq!(super::score_slot(3, addr::GDISPLAYEDSTRINGBATTLE_ADDR), 90);
        assert_eq!(super::score_slot(3, addr::GSTRINGVAR4_ADDR), 80);
        assert_eq!(super::score_slot(3, addr::GSTRINGVAR1_ADDR), 70);
        assert_eq!(super::score_slot(3, addr::GBATTLETEXTBUFF2_ADDR), 60);
        // Unnamed pointers rank by region: work RAM above ROM.
        assert_eq!(super::score_slot(3, 0x0203_0000), 40);
        assert_eq!(super::score_slot(3, 0x0830_0000), 20);
        assert!(super::score_slot(3, addr::GBATTLETEXTBUFF2_ADDR) > super::score_slot(3, 0x0203_0000));
    }

    #[test]
    fn test_page_tracking() {
        let string_addr = addr::GSTRINGVAR4_ADDR;
        let mut raw = encode("Page one");
        raw.push(0xFB);
        let second_start = raw.len();
        raw.extend(encode("Page two"));
        raw.push(TERMINATOR);
        // Cursor inside the second page.
        let table = printer_table_with_slot(0, string_addr + second_start as u32 + 2, 0, true);
        let reader = reader_with(table, string_addr, raw);
        let hit = find_active_printer_text(&reader, false).unwrap();
        assert_eq!(hit.pages, vec!["Page one", "Page two"]);
        assert_eq!(hit.current_page, 2);
    }

    #[test]
    fn test_text_for_window() {
        let string_addr = addr::GSTRINGVAR4_ADDR;
        let mut raw = encode("Window bound");
        raw.push(TERMINATOR);
        let table = printer_table_with_slot(3, string_addr, 7, true);
        let reader = reader_with(table, string_addr, raw);
        assert_eq!(
            text_for_window(&reader, 7, false).as_deref(),
            Some("Window bound")
        );
        assert!(text_for_window(&reader, 8, false).is_none());
    }
}
