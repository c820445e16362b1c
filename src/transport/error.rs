// Tue Feb 10 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No bridge listening on {host} ports {port_lo}-{port_hi}")]
    Connect {
        host: String,
        port_lo: u16,
        port_hi: u16,
    },
    #[error("Malformed response: {0}")]
    Protocol(String),
    #[error("Bridge reported an error: {0}")]
    Bridge(String),
    #[error("Transport fault, request failed after reconnect: {0}")]
    Fault(String),
    #[error("HTTP error: {0}")]
    Http(String),
}
