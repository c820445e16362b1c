// Tue Feb 10 2026 - Alex

use std::fmt;

/// Descriptor of an address range in the observed process. Never owns bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRegion {
    address: u32,
    length: u32,
}

impl MemoryRegion {
    pub fn new(address: u32, length: u32) -> Self {
        Self { address, length }
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Exclusive end address.
    pub fn end(&self) -> u32 {
        self.address.saturating_add(self.length)
    }

    pub fn contains(&self, addr: u32) -> bool {
        addr >= self.address && addr < self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}+{}", self.address, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let r = MemoryRegion::new(0x0200_0000, 0x10);
        assert!(r.contains(0x0200_0000));
        assert!(r.contains(0x0200_000F));
        assert!(!r.contains(0x0200_0010));
        assert_eq!(r.end(), 0x0200_0010);
    }
}
