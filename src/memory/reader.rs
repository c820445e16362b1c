// Tue Feb 10 2026 - Alex

use std::sync::Arc;

use crate::memory::metrics::MetricsScope;
use crate::memory::{MemoryError, MemorySnapshot};
use crate::transport::BridgeClient;

/// Read capability over the observed process. Callers must not assume
/// whether reads are served remotely or from a pre-captured snapshot.
pub trait MemoryReader: Send + Sync {
    fn read_u8(&self, addr: u32) -> Result<u8, MemoryError>;
    fn read_u16(&self, addr: u32) -> Result<u16, MemoryError>;
    fn read_u32(&self, addr: u32) -> Result<u32, MemoryError>;
    fn read_bytes(&self, addr: u32, len: usize) -> Result<Vec<u8>, MemoryError>;
}

/// Serves reads from one captured snapshot.
pub struct SnapshotReader {
    snapshot: MemorySnapshot,
}

impl SnapshotReader {
    pub fn new(snapshot: MemorySnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &MemorySnapshot {
        &self.snapshot
    }
}

impl MemoryReader for SnapshotReader {
    fn read_u8(&self, addr: u32) -> Result<u8, MemoryError> {
        self.snapshot.read_u8(addr)
    }

    fn read_u16(&self, addr: u32) -> Result<u16, MemoryError> {
        self.snapshot.read_u16(addr)
    }

    fn read_u32(&self, addr: u32) -> Result<u32, MemoryError> {
        self.snapshot.read_u32(addr)
    }

    fn read_bytes(&self, addr: u32, len: usize) -> Result<Vec<u8>, MemoryError> {
        Ok(self.snapshot.read_bytes(addr, len)?.to_vec())
    }
}

/// Issues one remote request per call through the shared bridge client.
pub struct LiveReader {
    client: Arc<BridgeClient>,
    metrics: MetricsScope,
}

impl LiveReader {
    pub fn new(client: Arc<BridgeClient>, metrics: MetricsScope) -> Self {
        Self { client, metrics }
    }

    pub fn client(&self) -> &BridgeClient {
        &self.client
    }
}

impl MemoryReader for LiveReader {
    fn read_u8(&self, addr: u32) -> Result<u8, MemoryError> {
        let v = self.client.read8(addr)?;
        self.metrics.record_read8();
        Ok(v)
    }

    fn read_u16(&self, addr: u32) -> Result<u16, MemoryError> {
        let v = self.client.read16(addr)?;
        self.metrics.record_read16();
        Ok(v)
    }

    fn read_u32(&self, addr: u32) -> Result<u32, MemoryError> {
        let v = self.client.read32(addr)?;
        self.metrics.record_read32();
        Ok(v)
    }

    fn read_bytes(&self, addr: u32, len: usize) -> Result<Vec<u8>, MemoryError> {
        match self.client.read_range(addr, len) {
            Ok(bytes) => {
                self.metrics.record_read_range(len, bytes.len());
                Ok(bytes)
            }
            Err(first_err) => {
                // The ranged primitive can be missing on older bridge
                // scripts; fall back to per-byte reads. Same result,
                // higher latency.
                log::debug!(
                    "ranged read of {} bytes at 0x{:08X} failed ({}), falling back to byte reads",
                    len,
                    addr,
                    first_err
                );
                let mut out = Vec::with_capacity(len);
                for i in 0..len {
                    let v = self.client.read8(addr + i as u32)?;
                    self.metrics.record_read8();
                    out.push(v);
                }
                Ok(out)
            }
        }
    }
}
