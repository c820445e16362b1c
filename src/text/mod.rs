// Tue Feb 10 2026 - Alex

pub mod charmap;
pub mod decode;
pub mod printer;

pub use charmap::{CONTROL_SKIP_TWO, PROMPT_CODES, TERMINATOR};
pub use decode::{decode_text, split_pages, DialogPages};
pub use printer::{find_active_printer_text, text_for_window, PrinterHit};
