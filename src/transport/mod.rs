// Tue Feb 10 2026 - Alex

pub mod client;
pub mod error;
pub mod http;
pub mod protocol;
pub mod socket;

pub use client::BridgeClient;
pub use error::TransportError;
pub use http::HttpTransport;
pub use socket::SocketTransport;
