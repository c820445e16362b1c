// Tue Feb 10 2026 - Alex

use thiserror::Error;

use crate::transport::TransportError;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Out of range: {len} bytes at 0x{addr:08X} not covered by any captured segment")]
    OutOfRange { addr: u32, len: usize },
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl MemoryError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MemoryError::OutOfRange { .. })
    }
}
