//! Error types for the VRROOM client
//!
//! Every command either returns a typed result or fails with exactly one
//! of these variants. Nothing here is retried by the library.

use thiserror::Error;

/// Result type alias using VrroomError
pub type Result<T> = std::result::Result<T, VrroomError>;

/// Boxed cause carried by a failed value conversion
pub type ConversionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for VRROOM operations
#[derive(Debug, Error)]
pub enum VrroomError {
    // -------------------------------------------------------------------------
    // Request Errors (detected before any I/O)
    // -------------------------------------------------------------------------
    #[error("invalid target '{0}'")]
    InvalidTarget(String),

    #[error("{patterns} value pattern(s) given with {converters} converter(s)")]
    ArityMismatch { patterns: usize, converters: usize },

    #[error("invalid value pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // -------------------------------------------------------------------------
    // Response Errors
    // -------------------------------------------------------------------------
    #[error("malformed response framing: {0}")]
    Framing(String),

    /// `response` is the received bytes, framing included
    #[error("unable to parse response {response:?} for target '{target}'")]
    ResponseParsing { response: String, target: String },

    #[error("unable to convert value '{token}': {source}")]
    ValueConversion {
        token: String,
        #[source]
        source: ConversionError,
    },

    #[error("returned value '{returned}' at position {position} was different than desired ({desired})")]
    ValueNotConfirmed {
        position: usize,
        returned: String,
        desired: String,
    },

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("timed out waiting for the switch")]
    Timeout,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}

impl VrroomError {
    /// Classify an I/O failure from the socket, folding read/write timeouts
    /// into [`VrroomError::Timeout`].
    pub fn from_io(err: std::io::Error) -> Self {
        match err.kind() {
            // Unix reports an expired socket timeout as WouldBlock, Windows as TimedOut
            std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut => VrroomError::Timeout,
            _ => VrroomError::Io(err),
        }
    }
}
