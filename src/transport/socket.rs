// Tue Feb 10 2026 - Alex

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use parking_lot::Mutex;

use crate::transport::protocol::{self, END_MARKER};
use crate::transport::TransportError;

/// Line-protocol transport over a plain TCP socket. One connection,
/// serialized requests; the bridge answers in request order so a shared
/// connection needs a lock around the whole exchange.
pub struct SocketTransport {
    host: String,
    port_lo: u16,
    port_hi: u16,
    connect_timeout: Duration,
    io_timeout: Duration,
    conn: Mutex<Option<TcpStream>>,
    connected_port: Mutex<Option<u16>>,
}

impl SocketTransport {
    pub fn connect(
        host: &str,
        port_lo: u16,
        port_hi: u16,
        connect_timeout: Duration,
        io_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let transport = Self {
            host: host.to_string(),
            port_lo,
            port_hi,
            connect_timeout,
            io_timeout,
            conn: Mutex::new(None),
            connected_port: Mutex::new(None),
        };
        let (stream, port) = transport.open_stream()?;
        log::info!("Connected to bridge at {}:{}", host, port);
        *transport.conn.lock() = Some(stream);
        *transport.connected_port.lock() = Some(port);
        Ok(transport)
    }

    pub fn connected_port(&self) -> Option<u16> {
        *self.connected_port.lock()
    }

    /// Scan the configured port range and return the first socket that
    /// accepts a connection.
    fn open_stream(&self) -> Result<(TcpStream, u16), TransportError> {
        for port in self.port_lo..=self.port_hi {
            let addrs = match std::net::ToSocketAddrs::to_socket_addrs(&(self.host.as_str(), port))
            {
                Ok(addrs) => addrs,
                Err(_) => continue,
            };
            for addr in addrs {
                match TcpStream::connect_timeout(&addr, self.connect_timeout) {
                    Ok(stream) => {
                        stream.set_read_timeout(Some(self.io_timeout))?;
                        stream.set_write_timeout(Some(self.io_timeout))?;
                        stream.set_nodelay(true)?;
                        return Ok((stream, port));
                    }
                    Err(e) => {
                        log::debug!("Port {} refused: {}", port, e);
                    }
                }
            }
        }
        Err(TransportError::Connect {
            host: self.host.clone(),
            port_lo: self.port_lo,
            port_hi: self.port_hi,
        })
    }

    /// Send one command and collect the reply up to the end marker. The
    /// returned payload has the marker stripped but sentinels intact.
    fn exchange(stream: &mut TcpStream, command: &str, io_timeout: Duration) -> std::io::Result<String> {
        stream.set_read_timeout(Some(io_timeout))?;
        stream.write_all(command.as_bytes())?;
        stream.write_all(END_MARKER.as_bytes())?;
        stream.flush()?;

        let mut reply = String::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf)?;
            if n == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "bridge closed the connection mid-reply",
                ));
            }
            reply.push_str(&String::from_utf8_lossy(&buf[..n]));
            if let Some(pos) = reply.find(END_MARKER) {
                reply.truncate(pos);
                return Ok(reply);
            }
        }
    }

    /// Issue a request, retrying once over a fresh connection if the
    /// first attempt dies. A failure of the retry is a transport fault.
    pub fn request(&self, command: &str) -> Result<String, TransportError> {
        let mut guard = self.conn.lock();
        for attempt in 0..2 {
            if guard.is_none() {
                let (stream, port) = self.open_stream()?;
                *self.connected_port.lock() = Some(port);
                *guard = Some(stream);
            }
            let stream = guard.as_mut().ok_or_else(|| {
                TransportError::Fault("connection slot empty after reconnect".to_string())
            })?;
            match Self::exchange(stream, command, self.io_timeout) {
                Ok(raw) => return protocol::check_payload(&raw),
                Err(e) if attempt == 0 => {
                    log::warn!("Bridge request failed ({}), reconnecting", e);
                    *guard = None;
                }
                Err(e) => {
                    *guard = None;
                    return Err(TransportError::Fault(e.to_string()));
                }
            }
        }
        Err(TransportError::Fault("request retries exhausted".to_string()))
    }
}
