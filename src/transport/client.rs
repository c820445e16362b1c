// Tue Feb 10 2026 - Alex

use serde_json::json;

use crate::config::Config;
use crate::transport::protocol;
use crate::transport::{HttpTransport, SocketTransport, TransportError};

/// Largest single ranged read the bridge answers reliably.
const READ_RANGE_CHUNK: usize = 1024;

/// (offset, length) pairs covering `len` bytes in chunk-sized steps.
fn chunk_plan(len: usize) -> Vec<(usize, usize)> {
    let mut plan = Vec::with_capacity(len.div_ceil(READ_RANGE_CHUNK));
    let mut offset = 0usize;
    while offset < len {
        let step = (len - offset).min(READ_RANGE_CHUNK);
        plan.push((offset, step));
        offset += step;
    }
    plan
}

/// Unified handle over whichever transport the session was configured
/// with. Callers see the same read and control surface either way; the
/// HTTP shim lacks the batched multi-range primitive, so that call
/// degrades to a per-range loop behind the same signature.
pub enum BridgeClient {
    Socket(SocketTransport),
    Http(HttpTransport),
}

impl BridgeClient {
    pub fn connect(config: &Config) -> Result<Self, TransportError> {
        if config.use_http {
            let http = HttpTransport::connect(
                &config.host,
                config.http_port,
                config.connect_timeout(),
                config.io_timeout(),
            )?;
            Ok(BridgeClient::Http(http))
        } else {
            let socket = SocketTransport::connect(
                &config.host,
                config.port,
                config.port_max,
                config.connect_timeout(),
                config.io_timeout(),
            )?;
            Ok(BridgeClient::Socket(socket))
        }
    }

    pub fn read8(&self, addr: u32) -> Result<u8, TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                let payload = s.request(&protocol::read8_cmd(addr))?;
                Ok(protocol::parse_scalar(&payload)? as u8)
            }
            BridgeClient::Http(h) => h.read8(addr),
        }
    }

    pub fn read16(&self, addr: u32) -> Result<u16, TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                let payload = s.request(&protocol::read16_cmd(addr))?;
                Ok(protocol::parse_scalar(&payload)? as u16)
            }
            BridgeClient::Http(h) => h.read16(addr),
        }
    }

    pub fn read32(&self, addr: u32) -> Result<u32, TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                let payload = s.request(&protocol::read32_cmd(addr))?;
                protocol::parse_scalar(&payload)
            }
            BridgeClient::Http(h) => h.read32(addr),
        }
    }

    fn read_range_raw(&self, addr: u32, len: usize) -> Result<Vec<u8>, TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                let payload = s.request(&protocol::read_range_cmd(addr, len))?;
                protocol::parse_range_payload(&payload)
            }
            BridgeClient::Http(h) => h.read_range(addr, len),
        }
    }

    /// Read a contiguous range, splitting requests that exceed the
    /// bridge's per-reply limit and reassembling the pieces in order.
    pub fn read_range(&self, addr: u32, len: usize) -> Result<Vec<u8>, TransportError> {
        if len <= READ_RANGE_CHUNK {
            return self.read_range_raw(addr, len);
        }
        let mut out = Vec::with_capacity(len);
        for (offset, step) in chunk_plan(len) {
            let chunk = self.read_range_raw(addr + offset as u32, step)?;
            let short = chunk.len() < step;
            out.extend_from_slice(&chunk);
            if short {
                break;
            }
        }
        Ok(out)
    }

    /// Capture many ranges in one round trip where the transport allows
    /// it. Returns one byte vector per requested range, index-aligned;
    /// unreadable ranges come back empty rather than failing the batch.
    pub fn read_ranges(&self, ranges: &[(u32, usize)]) -> Result<Vec<Vec<u8>>, TransportError> {
        if ranges.is_empty() {
            return Ok(Vec::new());
        }
        match self {
            BridgeClient::Socket(s) => {
                let payload = s.request(&protocol::read_ranges_cmd(ranges))?;
                protocol::parse_ranges_payload(&payload, ranges.len())
            }
            BridgeClient::Http(h) => {
                let mut out = Vec::with_capacity(ranges.len());
                for (addr, len) in ranges {
                    match h.read_range(*addr, *len) {
                        Ok(bytes) => out.push(bytes),
                        Err(TransportError::Bridge(msg)) => {
                            log::debug!("Range 0x{:08X}+{} unreadable: {}", addr, len, msg);
                            out.push(Vec::new());
                        }
                        Err(e) => return Err(e),
                    }
                }
                Ok(out)
            }
        }
    }

    pub fn press_button(&self, button: &str, frames: u32) -> Result<(), TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                s.request(&protocol::press_button_cmd(button, frames))?;
                Ok(())
            }
            BridgeClient::Http(h) => {
                h.command("/pressButton", json!({ "button": button, "frames": frames }))
            }
        }
    }

    pub fn hold_button(&self, button: &str) -> Result<(), TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                s.request(&protocol::hold_button_cmd(button))?;
                Ok(())
            }
            BridgeClient::Http(h) => h.command("/holdButton", json!({ "button": button })),
        }
    }

    pub fn clear_held_buttons(&self) -> Result<(), TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                s.request(&protocol::clear_buttons_cmd())?;
                Ok(())
            }
            BridgeClient::Http(h) => h.command("/clearButtons", json!({})),
        }
    }

    pub fn screenshot(&self, path: &str) -> Result<(), TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                s.request(&protocol::screenshot_cmd(path))?;
                Ok(())
            }
            BridgeClient::Http(h) => h.command("/screenshot", json!({ "path": path })),
        }
    }

    pub fn save_state_file(&self, path: &str) -> Result<(), TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                s.request(&protocol::save_state_cmd(path))?;
                Ok(())
            }
            BridgeClient::Http(h) => h.command("/saveStateFile", json!({ "path": path })),
        }
    }

    pub fn load_state_file(&self, path: &str) -> Result<(), TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                s.request(&protocol::load_state_cmd(path))?;
                Ok(())
            }
            BridgeClient::Http(h) => h.command("/loadStateFile", json!({ "path": path })),
        }
    }

    pub fn reset(&self) -> Result<(), TransportError> {
        match self {
            BridgeClient::Socket(s) => {
                s.request(&protocol::reset_cmd())?;
                Ok(())
            }
            BridgeClient::Http(h) => h.command("/reset", json!({})),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_plan_covers_len_in_order() {
        assert_eq!(chunk_plan(100), vec![(0, 100)]);
        assert_eq!(chunk_plan(1024), vec![(0, 1024)]);
        assert_eq!(chunk_plan(2500), vec![(0, 1024), (1024, 1024), (2048, 452)]);
        assert!(chunk_plan(0).is_empty());
        let plan = chunk_plan(5000);
        let total: usize = plan.iter().map(|(_, s)| s).sum();
        assert_eq!(total, 5000);
        assert!(plan.windows(2).all(|w| w[0].0 + w[0].1 == w[1].0));
    }
}
