//! Configuration for a VRROOM connection
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use crate::error::{Result, VrroomError};

/// Default TCP port the switch listens on for text commands
pub const DEFAULT_PORT: u16 = 2222;

/// Default time to wait on a single send or receive (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default size of the single read performed per response
pub const DEFAULT_RECEIVE_BUFFER_SIZE: usize = 256;

/// Connection configuration for one switch
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Host name or IP address of the switch
    pub address: String,

    /// TCP port of the switch's command interface
    pub port: u16,

    /// Connect, read, and write timeout (milliseconds)
    pub timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Maximum bytes taken from the socket for one response
    pub receive_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            receive_buffer_size: DEFAULT_RECEIVE_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Reject settings a connection cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(VrroomError::Config("address must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(VrroomError::Config("port must be non-zero".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(VrroomError::Config("timeout must be non-zero".to_string()));
        }
        if self.receive_buffer_size == 0 {
            return Err(VrroomError::Config(
                "receive buffer size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the switch address (host name or IP)
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.config.address = address.into();
        self
    }

    /// Set the switch TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the timeout (in milliseconds)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set the receive buffer size (in bytes)
    pub fn receive_buffer_size(mut self, size: usize) -> Self {
        self.config.receive_buffer_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
