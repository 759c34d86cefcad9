//! # vrroom
//!
//! A client for the HDFury VRROOM HDMI switch's TCP command interface:
//! - Line-oriented `get`/`set` request encoding
//! - Response validation against per-value regular-expression grammars
//! - Typed value codecs (inputs, modes, addresses, ports, on/off switches)
//! - Echo verification of SET commands
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Typed Commands                   │
//! │  (inputs, modes, network, actions)            │
//! └─────────────────────┬────────────────────────┘
//!                       │ target + value specs
//! ┌─────────────────────▼────────────────────────┐
//! │           execute_get / execute_set           │
//! │  (target check, one send, one receive, echo)  │
//! └──────────┬──────────────────────┬────────────┘
//!            │                      │
//!            ▼                      ▼
//!   ┌─────────────────┐    ┌─────────────────┐
//!   │ Target Registry │    │  Command Codec  │
//!   └─────────────────┘    └─────────────────┘
//!                                   │
//!                          ┌────────▼────────┐
//!                          │    Transport    │
//!                          │  (TcpStream)    │
//!                          └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use vrroom::commands::inputs::{get_selected_inputs, set_selected_input_tx0};
//! use vrroom::protocol::Input;
//! use vrroom::{Config, Connection};
//!
//! let config = Config::builder().address("192.168.1.50").build();
//! let mut connection = Connection::open(&config)?;
//!
//! let (tx0, tx1) = get_selected_inputs(&mut connection)?;
//! println!("TX0: {:?}, TX1: {:?}", tx0, tx1);
//!
//! set_selected_input_tx0(&mut connection, Input::Rx2)?;
//! # Ok::<(), vrroom::VrroomError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod commands;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, VrroomError};
pub use config::Config;
pub use network::{Connection, Transport};
pub use commands::{execute_get, execute_raw, execute_set};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the vrroom crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
