// Tue Feb 10 2026 - Alex

use crate::memory::{CapturedSegment, MemoryError, MemoryRegion};

/// An ordered set of captured segments serving reads for one
/// classification pass. Segments may nest or overlap (a narrow capture
/// inside a wider block); a read succeeds when it is fully inside any
/// single segment, and anything spanning a gap or boundary is
/// `OutOfRange`.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshot {
    segments: Vec<CapturedSegment>,
}

impl MemorySnapshot {
    pub fn new(mut segments: Vec<CapturedSegment>) -> Self {
        segments.retain(|s| s.start() != 0 && !s.is_empty());
        segments.sort_by_key(|s| s.start());
        Self { segments }
    }

    /// Build from parallel region / capture lists. Entries with a zero
    /// address or a missing capture are skipped, mirroring the tolerant
    /// construction the live side feeds us (a failed range arrives empty).
    pub fn from_ranges(regions: &[MemoryRegion], captures: Vec<Vec<u8>>) -> Self {
        let segments = regions
            .iter()
            .zip(captures)
            .filter(|(region, bytes)| region.address() != 0 && !bytes.is_empty())
            .map(|(region, bytes)| CapturedSegment::new(region.address(), bytes))
            .collect();
        Self::new(segments)
    }

    pub fn segments(&self) -> &[CapturedSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The slice serving `[addr, addr+len)`. The latest-starting segment
    /// is preferred, but a narrow capture nested inside a wider block
    /// must not shadow it, so the search walks back through every
    /// segment starting at or before `addr`.
    fn covering_slice(&self, addr: u32, len: usize) -> Option<&[u8]> {
        let idx = self.segments.partition_point(|s| s.start() <= addr);
        self.segments[..idx]
            .iter()
            .rev()
            .find_map(|seg| seg.slice(addr, len))
    }

    pub fn read_bytes(&self, addr: u32, len: usize) -> Result<&[u8], MemoryError> {
        self.covering_slice(addr, len)
            .ok_or(MemoryError::OutOfRange { addr, len })
    }

    pub fn read_u8(&self, addr: u32) -> Result<u8, MemoryError> {
        Ok(self.read_bytes(addr, 1)?[0])
    }

    pub fn read_u16(&self, addr: u32) -> Result<u16, MemoryError> {
        let b = self.read_bytes(addr, 2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&self, addr: u32) -> Result<u32, MemoryError> {
        let b = self.read_bytes(addr, 4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// True when `[addr, addr+len)` would be served by this snapshot.
    pub fn covers(&self, addr: u32, len: usize) -> bool {
        self.covering_slice(addr, len).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MemorySnapshot {
        MemorySnapshot::from_ranges(
            &[
                MemoryRegion::new(0x0200_0000, 4),
                MemoryRegion::new(0, 4),
                MemoryRegion::new(0x0200_0010, 2),
            ],
            vec![vec![0xAA, 0xBB, 0xCC, 0xDD], vec![1, 2, 3, 4], vec![0x11, 0x22]],
        )
    }

    #[test]
    fn test_zero_address_regions_dropped_and_sorted() {
        let snap = snapshot();
        assert_eq!(snap.segments().len(), 2);
        assert!(snap.segments()[0].start() < snap.segments()[1].start());
    }

    #[test]
    fn test_reads_within_one_segment() {
        let snap = snapshot();
        assert_eq!(snap.read_u8(0x0200_0000).unwrap(), 0xAA);
        assert_eq!(snap.read_u16(0x0200_0000).unwrap(), 0xBBAA);
        assert_eq!(snap.read_u32(0x0200_0000).unwrap(), 0xDDCC_BBAA);
        assert_eq!(snap.read_u16(0x0200_0010).unwrap(), 0x2211);
    }

    #[test]
    fn test_gap_and_boundary_reads_fail() {
        let snap = snapshot();
        // Spans the gap between the two segments.
        assert!(snap.read_bytes(0x0200_0002, 0x10).is_err());
        // One byte past a segment end.
        assert!(snap.read_bytes(0x0200_0010, 3).is_err());
        // Entirely uncovered.
        assert!(snap.read_u8(0x0300_0000).is_err());
        assert!(snap.read_u8(0x01FF_FFFF).is_err());
    }

    #[test]
    fn test_nested_segment_does_not_shadow_outer_block() {
        let snap = MemorySnapshot::from_ranges(
            &[
                MemoryRegion::new(0x0200_0000, 0x40),
                MemoryRegion::new(0x0200_0010, 4),
            ],
            vec![vec![0x11u8; 0x40], vec![0xEE; 4]],
        );
        // Inside the narrow capture: its bytes win.
        assert_eq!(snap.read_u8(0x0200_0012).unwrap(), 0xEE);
        // Past the narrow capture but inside the outer block: still
        // served, from the outer block.
        assert_eq!(snap.read_u8(0x0200_0018).unwrap(), 0x11);
        assert_eq!(snap.read_u32(0x0200_0016).unwrap(), 0x1111_1111);
        assert!(snap.covers(0x0200_0014, 0x2C));
    }

    #[test]
    fn test_covers() {
        let snap = snapshot();
        assert!(snap.covers(0x0200_0000, 4));
        assert!(!snap.covers(0x0200_0000, 5));
    }
}
