// Tue Feb 10 2026 - Alex
//
// Secondary transport speaking HTTP/1.1 to bridges that expose a REST
// shim instead of the raw socket. Hand-rolled request writer over
// TcpStream; the body grammar is JSON either way.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::transport::TransportError;

pub struct HttpTransport {
    host: String,
    port: u16,
    connect_timeout: Duration,
    io_timeout: Duration,
}

#[derive(Deserialize)]
struct ScalarReply {
    #[serde(default)]
    value: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct RangeReply {
    #[serde(default)]
    bytes: Option<serde_json::Value>,
    #[serde(default)]
    hex: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpTransport {
    pub fn connect(
        host: &str,
        port: u16,
        connect_timeout: Duration,
        io_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let transport = Self {
            host: host.to_string(),
            port,
            connect_timeout,
            io_timeout,
        };
        // Probe with a harmless read so a dead endpoint fails at
        // connect time, not on the first query.
        transport.post("/read8", &json!({ "address": 0x0200_0000u32 }))?;
        log::info!("Connected to HTTP bridge at {}:{}", host, port);
        Ok(transport)
    }

    fn post(&self, path: &str, body: &serde_json::Value) -> Result<String, TransportError> {
        let addr = std::net::ToSocketAddrs::to_socket_addrs(&(self.host.as_str(), self.port))
            .map_err(TransportError::Io)?
            .next()
            .ok_or_else(|| TransportError::Http(format!("cannot resolve {}", self.host)))?;
        let mut stream = TcpStream::connect_timeout(&addr, self.connect_timeout)?;
        stream.set_read_timeout(Some(self.io_timeout))?;
        stream.set_write_timeout(Some(self.io_timeout))?;

        let payload = body.to_string();
        let request = format!(
            "POST {path} HTTP/1.1\r\nHost: {}:{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
            self.host,
            self.port,
            payload.len()
        );
        stream.write_all(request.as_bytes())?;
        stream.flush()?;

        let mut reader = BufReader::new(stream);
        let mut status_line = String::new();
        reader.read_line(&mut status_line)?;
        let status = status_line
            .split_whitespace()
            .nth(1)
            .and_then(|s| s.parse::<u16>().ok())
            .ok_or_else(|| TransportError::Http(format!("bad status line {status_line:?}")))?;

        let mut content_length: Option<usize> = None;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line)?;
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some(v) = line
                .to_ascii_lowercase()
                .strip_prefix("content-length:")
                .map(str::trim)
                .and_then(|v| v.parse::<usize>().ok())
            {
                content_length = Some(v);
            }
        }

        let body_text = match content_length {
            Some(n) => {
                let mut buf = vec![0u8; n];
                reader.read_exact(&mut buf)?;
                String::from_utf8_lossy(&buf).into_owned()
            }
            None => {
                let mut buf = String::new();
                reader.read_to_string(&mut buf)?;
                buf
            }
        };

        if status >= 400 {
            return Err(TransportError::Http(format!(
                "{path} returned {status}: {}",
                body_text.trim()
            )));
        }
        Ok(body_text)
    }

    fn scalar(&self, path: &str, addr: u32) -> Result<u32, TransportError> {
        let body = self.post(path, &json!({ "address": addr }))?;
        let reply: ScalarReply = serde_json::from_str(&body)
            .map_err(|e| TransportError::Http(format!("{path}: bad JSON reply: {e}")))?;
        if let Some(err) = reply.error {
            return Err(TransportError::Bridge(err));
        }
        match reply.value {
            Some(serde_json::Value::Number(n)) => n
                .as_u64()
                .map(|v| v as u32)
                .ok_or_else(|| TransportError::Http(format!("{path}: non-integer value"))),
            Some(serde_json::Value::String(s)) => crate::transport::protocol::parse_scalar(&s)
                .map_err(|e| TransportError::Http(format!("{path}: {e}"))),
            _ => Err(TransportError::Http(format!("{path}: missing value"))),
        }
    }

    pub fn read8(&self, addr: u32) -> Result<u8, TransportError> {
        Ok(self.scalar("/read8", addr)? as u8)
    }

    pub fn read16(&self, addr: u32) -> Result<u16, TransportError> {
        Ok(self.scalar("/read16", addr)? as u16)
    }

    pub fn read32(&self, addr: u32) -> Result<u32, TransportError> {
        self.scalar("/read32", addr)
    }

    pub fn read_range(&self, addr: u32, len: usize) -> Result<Vec<u8>, TransportError> {
        let body = self.post("/readRange", &json!({ "address": addr, "length": len }))?;
        let reply: RangeReply = serde_json::from_str(&body)
            .map_err(|e| TransportError::Http(format!("/readRange: bad JSON reply: {e}")))?;
        if let Some(err) = reply.error {
            return Err(TransportError::Bridge(err));
        }
        if let Some(hex) = reply.hex {
            return crate::transport::protocol::parse_range_payload(&hex);
        }
        match reply.bytes {
            Some(serde_json::Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    let v = item
                        .as_u64()
                        .filter(|v| *v <= u8::MAX as u64)
                        .ok_or_else(|| {
                            TransportError::Http("/readRange: non-byte array element".to_string())
                        })?;
                    out.push(v as u8);
                }
                Ok(out)
            }
            Some(serde_json::Value::String(s)) => {
                crate::transport::protocol::parse_range_payload(&s)
            }
            _ => Err(TransportError::Http("/readRange: missing bytes".to_string())),
        }
    }

    pub fn command(&self, path: &str, body: serde_json::Value) -> Result<(), TransportError> {
        let reply = self.post(path, &body)?;
        if let Ok(parsed) = serde_json::from_str::<ScalarReply>(&reply) {
            if let Some(err) = parsed.error {
                return Err(TransportError::Bridge(err));
            }
        }
        Ok(())
    }
}
