// Tue Feb 10 2026 - Alex
//
// Total little-endian field readers. Out-of-bounds probes return 0 so the
// detectors can speculate about offsets without guarding every access; the
// classifier's failure policy depends on these never panicking.

pub fn u8_at(raw: &[u8], offset: usize) -> u8 {
    raw.get(offset).copied().unwrap_or(0)
}

pub fn u16le_at(raw: &[u8], offset: usize) -> u16 {
    match offset.checked_add(2).and_then(|end| raw.get(offset..end)) {
        Some(b) => u16::from_le_bytes([b[0], b[1]]),
        None => 0,
    }
}

pub fn u32le_at(raw: &[u8], offset: usize) -> u32 {
    match offset.checked_add(4).and_then(|end| raw.get(offset..end)) {
        Some(b) => u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        let raw = [0x78, 0x56, 0x34, 0x12];
        assert_eq!(u8_at(&raw, 0), 0x78);
        assert_eq!(u16le_at(&raw, 0), 0x5678);
        assert_eq!(u16le_at(&raw, 2), 0x1234);
        assert_eq!(u32le_at(&raw, 0), 0x1234_5678);
    }

    #[test]
    fn test_out_of_bounds_is_zero() {
        let raw = [0xFF, 0xFF];
        assert_eq!(u8_at(&raw, 2), 0);
        assert_eq!(u16le_at(&raw, 1), 0);
        assert_eq!(u32le_at(&raw, 0), 0);
        // Offsets near usize::MAX must not overflow the end-of-read
        // computation.
        assert_eq!(u32le_at(&[], usize::MAX - 2), 0);
        assert_eq!(u32le_at(&raw, usize::MAX), 0);
        assert_eq!(u16le_at(&[], usize::MAX), 0);
        assert_eq!(u16le_at(&raw, usize::MAX - 1), 0);
    }
}
