//! Connection
//!
//! Owns the TCP socket to one switch.

use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};

use bytes::{Bytes, BytesMut};

use super::transport::Transport;
use crate::commands::execute_raw;
use crate::config::Config;
use crate::error::{Result, VrroomError};

/// A connection to a single switch
///
/// The socket is released on [`close`](Connection::close) or drop,
/// whichever comes first.
pub struct Connection {
    /// TCP stream, `None` once closed
    stream: Option<TcpStream>,

    /// Remote address for logging
    peer_addr: SocketAddr,

    /// Bytes taken per response
    receive_buffer_size: usize,
}

impl Connection {
    /// Connect to the switch described by `config`
    ///
    /// Sets up timeouts and disables Nagle's algorithm.
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;

        let peer_addr = (config.address.as_str(), config.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                VrroomError::Connection(format!(
                    "'{}:{}' did not resolve to an address",
                    config.address, config.port
                ))
            })?;

        tracing::info!("Connecting to VRROOM switch at {}", peer_addr);
        let stream =
            TcpStream::connect_timeout(&peer_addr, config.timeout()).map_err(VrroomError::from_io)?;

        stream.set_read_timeout(Some(config.timeout()))?;
        stream.set_write_timeout(Some(config.timeout()))?;
        stream.set_nodelay(true)?;

        tracing::info!("Connected to VRROOM switch at {}", peer_addr);

        Ok(Self {
            stream: Some(stream),
            peer_addr,
            receive_buffer_size: config.receive_buffer_size,
        })
    }

    /// Get the peer address
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    /// Close the socket. Calling this again is a no-op.
    pub fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            // The peer may already be gone; the socket is released either way
            let _ = stream.shutdown(Shutdown::Both);
            tracing::info!("Closed connection to {}", self.peer_addr);
        }
    }

    /// Send a raw command line and return the response line without framing
    pub fn send_raw_command(&mut self, command: &str) -> Result<String> {
        execute_raw(self, command)
    }

    fn stream(&mut self) -> Result<&mut TcpStream> {
        let peer_addr = self.peer_addr;
        self.stream
            .as_mut()
            .ok_or_else(|| VrroomError::Connection(format!("connection to {peer_addr} is closed")))
    }
}

impl Transport for Connection {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let stream = self.stream()?;
        stream.write_all(bytes).map_err(VrroomError::from_io)?;
        stream.flush().map_err(VrroomError::from_io)?;
        tracing::trace!("Sent {} bytes to {}", bytes.len(), self.peer_addr);
        Ok(())
    }

    fn receive(&mut self, max_bytes: usize) -> Result<Bytes> {
        let stream = self.stream()?;
        let mut buffer = BytesMut::zeroed(max_bytes);
        let read = stream.read(&mut buffer).map_err(VrroomError::from_io)?;
        buffer.truncate(read);
        tracing::trace!("Received {} bytes from {}", read, self.peer_addr);
        Ok(buffer.freeze())
    }

    fn receive_limit(&self) -> usize {
        self.receive_buffer_size
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}
