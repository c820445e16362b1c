// Tue Feb 10 2026 - Alex
//
// Character table for the game's proprietary text encoding. One byte
// per glyph; 0xFF terminates a string, 0xFA and 0xFB pause for player
// input between pages, 0xFC and 0xFD introduce a two-byte control
// sequence (format codes and placeholder expansion respectively).

/// End-of-string byte.
pub const TERMINATOR: u8 = 0xFF;

/// Bytes that halt rendering until the player advances the dialog.
pub const PROMPT_CODES: [u8; 2] = [0xFA, 0xFB];

/// Control bytes followed by one argument byte.
pub const CONTROL_SKIP_TWO: [u8; 2] = [0xFC, 0xFD];

/// Page break emitted by the decoder for the paragraph control byte.
pub const PAGE_BREAK: char = '\u{000C}';

/// Map one encoded byte to its printable form. Returns None for bytes
/// with no glyph (control codes are handled before this lookup).
pub fn glyph(byte: u8) -> Option<&'static str> {
    let s = match byte {
        0x00 => " ",
        0x1B => "é",
        0x2D => "&",
        0x35 => "=",
        0x36 => ";",
        0x51 => "¿",
        0x52 => "¡",
        0x5A => "Í",
        0x6F => "Á",
        0x79 => "↑",
        0x7A => "↓",
        0x7B => "←",
        0x7C => "→",
        0x85 => "<",
        0x86 => ">",
        0xA0 => "ʳᵉ",
        0xA1 => "0",
        0xA2 => "1",
        0xA3 => "2",
        0xA4 => "3",
        0xA5 => "4",
        0xA6 => "5",
        0xA7 => "6",
        0xA8 => "7",
        0xA9 => "8",
        0xAA => "9",
        0xAB => "!",
        0xAC => "?",
        0xAD => ".",
        0xAE => "-",
        0xAF => "·",
        0xB0 => "…",
        0xB1 => "“",
        0xB2 => "”",
        0xB3 => "‘",
        0xB4 => "’",
        0xB5 => "♂",
        0xB6 => "♀",
        0xB7 => "$",
        0xB8 => ",",
        0xB9 => "×",
        0xBA => "/",
        0xBB => "A",
        0xBC => "B",
        0xBD => "C",
        0xBE => "D",
        0xBF => "E",
        0xC0 => "F",
        0xC1 => "G",
        0xC2 => "H",
        0xC3 => "I",
        0xC4 => "J",
        0xC5 => "K",
        0xC6 => "L",
        0xC7 => "M",
        0xC8 => "N",
        0xC9 => "O",
        0xCA => "P",
        0xCB => "Q",
        0xCC => "R",
        0xCD => "S",
        0xCE => "T",
        0xCF => "U",
        0xD0 => "V",
        0xD1 => "W",
        0xD2 => "X",
        0xD3 => "Y",
        0xD4 => "Z",
        0xD5 => "a",
        0xD6 => "b",
        0xD7 => "c",
        0xD8 => "d",
        0xD9 => "e",
        0xDA => "f",
        0xDB => "g",
        0xDC => "h",
        0xDD => "i",
        0xDE => "j",
        0xDF => "k",
        0xE0 => "l",
        0xE1 => "m",
        0xE2 => "n",
        0xE3 => "o",
        0xE4 => "p",
        0xE5 => "q",
        0xE6 => "r",
        0xE7 => "s",
        0xE8 => "t",
        0xE9 => "u",
        0xEA => "v",
        0xEB => "w",
        0xEC => "x",
        0xED => "y",
        0xEE => "z",
        0xEF => "►",
        0xF0 => ":",
        0xF1 => "Ä",
        0xF2 => "Ö",
        0xF3 => "Ü",
        0xF4 => "ä",
        0xF5 => "ö",
        0xF6 => "ü",
        0xFE => "\n",
        _ => return None,
    };
    Some(s)
}

/// True when the byte maps to a glyph a player can read (letters,
/// digits and punctuation; excludes whitespace and arrows).
pub fn is_readable(byte: u8) -> bool {
    matches!(byte, 0xA1..=0xEE | 0x1B | 0xF0)
}
