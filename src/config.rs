// Tue Feb 10 2026 - Alex

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub port_max: u16,
    pub use_http: bool,
    pub http_port: u16,
    pub connect_timeout_ms: u64,
    pub io_timeout_ms: u64,
    pub watch_interval_ms: u64,
    pub slow_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            port_max: 8907,
            use_http: false,
            http_port: 5000,
            connect_timeout_ms: 500,
            io_timeout_ms: 3000,
            watch_interval_ms: 250,
            slow_mode: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        if self.port_max < port {
            self.port_max = port;
        }
        self
    }

    pub fn with_http(mut self, http_port: u16) -> Self {
        self.use_http = true;
        self.http_port = http_port;
        self
    }

    pub fn with_slow_mode(mut self, slow: bool) -> Self {
        self.slow_mode = slow;
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn io_timeout(&self) -> Duration {
        Duration::from_millis(self.io_timeout_ms)
    }

    pub fn watch_interval(&self) -> Duration {
        Duration::from_millis(self.watch_interval_ms)
    }

    /// Environment overrides applied on top of the current values. The
    /// emulator-side bridge script uses the same variable names.
    pub fn apply_env(mut self) -> Self {
        if let Ok(host) = std::env::var("MGBA_BRIDGE_HOST") {
            if !host.is_empty() {
                self.host = host;
            }
        }
        if let Ok(port) = std::env::var("MGBA_BRIDGE_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.port = port;
                if self.port_max < port {
                    self.port_max = port;
                }
            }
        }
        if let Ok(port) = std::env::var("MGBA_BRIDGE_HTTP_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.use_http = true;
                self.http_port = port;
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("host must not be empty".to_string());
        }
        if self.port_max < self.port {
            return Err("port_max must not be below port".to_string());
        }
        if self.io_timeout_ms == 0 {
            return Err("io_timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_with_port_keeps_range_ordered() {
        let cfg = Config::default().with_port(9999);
        assert_eq!(cfg.port, 9999);
        assert!(cfg.port_max >= cfg.port);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_port_range() {
        let mut cfg = Config::default();
        cfg.port = 9000;
        cfg.port_max = 8000;
        assert!(cfg.validate().is_err());
    }
}
