//! Network Module
//!
//! TCP connection handling.
//!
//! ## Model
//! - One blocking socket per switch
//! - One command in flight at a time: send, then wait for the response
//!   (or the timeout) before sending again

mod connection;
mod transport;

pub use connection::Connection;
pub use transport::Transport;
