// Tue Feb 10 2026 - Alex

/// One captured run of bytes starting at a fixed address. Immutable once
/// constructed.
#[derive(Debug, Clone)]
pub struct CapturedSegment {
    start: u32,
    bytes: Vec<u8>,
}

impl CapturedSegment {
    pub fn new(start: u32, bytes: Vec<u8>) -> Self {
        Self { start, bytes }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end address.
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.bytes.len() as u32)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Slice covering `[addr, addr+len)`, or None when the request is not
    /// fully inside this segment.
    pub fn slice(&self, addr: u32, len: usize) -> Option<&[u8]> {
        if addr < self.start {
            return None;
        }
        let off = (addr - self.start) as usize;
        let end = off.checked_add(len)?;
        if end > self.bytes.len() {
            return None;
        }
        Some(&self.bytes[off..end])
    }
}
