// Tue Feb 10 2026 - Alex

use serde::Serialize;

use crate::text::charmap::{self, PAGE_BREAK, PROMPT_CODES, TERMINATOR};

/// A multi-page dialog as the player would page through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogPages {
    pub pages: Vec<String>,
    pub current_page: usize,
}

impl DialogPages {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Decode an encoded buffer up to its terminator (or `max_len` bytes).
///
/// Prompt bytes either stop the decode (`stop_at_prompt`) or turn into a
/// page separator. Two-byte control sequences are skipped whole, bytes
/// with no glyph are dropped, and the result is whitespace-trimmed. The
/// decode is a pure function of the input bytes.
pub fn decode_text(raw: &[u8], max_len: usize, stop_at_prompt: bool) -> String {
    let mut out = String::new();
    let mut i = 0usize;
    let limit = raw.len().min(max_len);
    while i < limit {
        let byte = raw[i];
        if byte == TERMINATOR {
            break;
        }
        if PROMPT_CODES.contains(&byte) {
            if stop_at_prompt {
                break;
            }
            out.push(PAGE_BREAK);
            i += 1;
            continue;
        }
        if charmap::CONTROL_SKIP_TWO.contains(&byte) {
            i += 2;
            continue;
        }
        if let Some(glyph) = charmap::glyph(byte) {
            out.push_str(glyph);
        }
        i += 1;
    }
    out.trim().to_string()
}

/// Split a decoded dialog into pages at the prompt separators, dropping
/// pages that trim to nothing.
pub fn split_pages(decoded: &str) -> Vec<String> {
    decoded
        .split(PAGE_BREAK)
        .map(|page| page.trim().to_string())
        .filter(|page| !page.is_empty())
        .collect()
}
