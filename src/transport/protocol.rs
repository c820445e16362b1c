// Tue Feb 10 2026 - Alex
//
// Wire grammar of the bridge's line protocol. Requests are a command
// keyword plus comma-separated arguments, framed by a fixed marker; the
// response reuses the marker. Two payloads are reserved: an empty-success
// sentinel and an error prefix.

use crate::transport::TransportError;

pub const END_MARKER: &str = "<|END|>";
pub const SUCCESS_SENTINEL: &str = "<|SUCCESS|>";
pub const ERROR_PREFIX: &str = "<|ERROR|>";

pub fn read8_cmd(addr: u32) -> String {
    format!("bridge.read8,0x{addr:08X}")
}

pub fn read16_cmd(addr: u32) -> String {
    format!("bridge.read16,0x{addr:08X}")
}

pub fn read32_cmd(addr: u32) -> String {
    format!("bridge.read32,0x{addr:08X}")
}

pub fn read_range_cmd(addr: u32, len: usize) -> String {
    format!("bridge.readRangeHex,0x{addr:08X},{len}")
}

pub fn read_ranges_cmd(ranges: &[(u32, usize)]) -> String {
    let mut args = String::new();
    for (addr, len) in ranges {
        if !args.is_empty() {
            args.push(',');
        }
        args.push_str(&format!("0x{addr:08X},{len}"));
    }
    format!("bridge.readRangesHex,[{args}]")
}

pub fn press_button_cmd(button: &str, frames: u32) -> String {
    format!("bridge.pressButton,{button},{frames}")
}

pub fn hold_button_cmd(button: &str) -> String {
    format!("bridge.holdButton,{button}")
}

pub fn clear_buttons_cmd() -> String {
    "bridge.clearButtons".to_string()
}

pub fn screenshot_cmd(path: &str) -> String {
    format!("bridge.screenshot,{path}")
}

pub fn save_state_cmd(path: &str) -> String {
    format!("bridge.saveStateFile,{path}")
}

pub fn load_state_cmd(path: &str) -> String {
    format!("bridge.loadStateFile,{path}")
}

pub fn reset_cmd() -> String {
    "bridge.reset".to_string()
}

/// Classify a framed payload: error sentinel fails, success sentinel maps
/// to the empty payload, anything else passes through.
pub fn check_payload(payload: &str) -> Result<String, TransportError> {
    let trimmed = payload.trim();
    if let Some(rest) = trimmed.strip_prefix(ERROR_PREFIX) {
        return Err(TransportError::Bridge(rest.trim().to_string()));
    }
    if trimmed == SUCCESS_SENTINEL {
        return Ok(String::new());
    }
    Ok(trimmed.to_string())
}

/// Parse a numeric scalar reply (decimal, or hex with an 0x prefix).
pub fn parse_scalar(payload: &str) -> Result<u32, TransportError> {
    let t = payload.trim();
    let parsed = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        t.parse::<u32>()
    };
    parsed.map_err(|_| TransportError::Protocol(format!("expected a number, got {t:?}")))
}

/// Parse one range payload: a run of two-hex-digit byte pairs, or in the
/// legacy mode comma-separated hex/decimal values. Empty payload means
/// zero bytes.
pub fn parse_range_payload(payload: &str) -> Result<Vec<u8>, TransportError> {
    let t = payload.trim();
    if t.is_empty() {
        return Ok(Vec::new());
    }
    if !t.contains(',') {
        if t.len() % 2 != 0 {
            return Err(TransportError::Protocol(format!(
                "odd hex payload length {}",
                t.len()
            )));
        }
        let mut out = Vec::with_capacity(t.len() / 2);
        for i in (0..t.len()).step_by(2) {
            let pair = &t[i..i + 2];
            let b = u8::from_str_radix(pair, 16)
                .map_err(|_| TransportError::Protocol(format!("bad hex pair {pair:?}")))?;
            out.push(b);
        }
        return Ok(out);
    }
    // Legacy comma-separated form.
    let mut out = Vec::new();
    for tok in t.split(',') {
        let tok = tok.trim();
        if tok.is_empty() {
            continue;
        }
        let b = if let Some(hex) = tok.strip_prefix("0x").or_else(|| tok.strip_prefix("0X")) {
            u8::from_str_radix(hex, 16)
        } else {
            tok.parse::<u8>()
        }
        .map_err(|_| TransportError::Protocol(format!("bad byte token {tok:?}")))?;
        out.push(b);
    }
    Ok(out)
}

/// Parse a multi-range payload: pipe-separated segments, one per requested
/// range; an empty segment means zero bytes for that range.
pub fn parse_ranges_payload(payload: &str, expected: usize) -> Result<Vec<Vec<u8>>, TransportError> {
    let mut out: Vec<Vec<u8>> = Vec::with_capacity(expected);
    if !payload.trim().is_empty() {
        for segment in payload.trim().split('|') {
            out.push(parse_range_payload(segment)?);
        }
    }
    // A short reply leaves trailing ranges empty rather than failing the
    // whole call; the snapshot builder skips empty captures. Extra
    // segments beyond the request are dropped.
    while out.len() < expected {
        out.push(Vec::new());
    }
    out.truncate(expected);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(read8_cmd(0x0203ABCC), "bridge.read8,0x0203ABCC");
        assert_eq!(read_range_cmd(0x02000000, 16), "bridge.readRangeHex,0x02000000,16");
        assert_eq!(
            read_ranges_cmd(&[(0x100, 2), (0x200, 4)]),
            "bridge.readRangesHex,[0x00000100,2,0x00000200,4]"
        );
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(check_payload("<|SUCCESS|>").unwrap(), "");
        assert!(matches!(
            check_payload("<|ERROR|> no such command"),
            Err(TransportError::Bridge(_))
        ));
        assert_eq!(check_payload(" 42 ").unwrap(), "42");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse_scalar("42").unwrap(), 42);
        assert_eq!(parse_scalar("0x2A").unwrap(), 42);
        assert!(parse_scalar("forty-two").is_err());
    }

    #[test]
    fn test_hex_pair_payload() {
        assert_eq!(parse_range_payload("0a0b0c").unwrap(), vec![0x0A, 0x0B, 0x0C]);
        assert_eq!(parse_range_payload("").unwrap(), Vec::<u8>::new());
        assert!(parse_range_payload("0a0").is_err());
    }

    #[test]
    fn test_legacy_csv_payload() {
        assert_eq!(parse_range_payload("10,0x20,3").unwrap(), vec![10, 0x20, 3]);
    }

    #[test]
    fn test_ranges_payload_with_empty_segment() {
        let parsed = parse_ranges_payload("0102||ff", 3).unwrap();
        assert_eq!(parsed, vec![vec![1, 2], vec![], vec![0xFF]]);
    }

    #[test]
    fn test_ranges_payload_pads_short_reply() {
        let parsed = parse_ranges_payload("aa", 3).unwrap();
        assert_eq!(parsed, vec![vec![0xAA], vec![], vec![]]);
    }

    #[test]
    fn test_ranges_payload_drops_extra_segments() {
        let parsed = parse_ranges_payload("01|02|03|04", 2).unwrap();
        assert_eq!(parsed, vec![vec![1], vec![2]]);
    }
}
