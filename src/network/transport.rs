//! Transport seam
//!
//! The command layer only needs a blocking duplex byte stream.

use bytes::Bytes;

use crate::config::DEFAULT_RECEIVE_BUFFER_SIZE;
use crate::error::Result;

/// A connected byte stream carrying one command at a time
pub trait Transport {
    /// Write all of `bytes` (blocking, bounded by the write timeout)
    fn send(&mut self, bytes: &[u8]) -> Result<()>;

    /// Perform one blocking read of at most `max_bytes` bytes.
    ///
    /// There is no reassembly: a response split across reads is truncated.
    fn receive(&mut self, max_bytes: usize) -> Result<Bytes>;

    /// Bytes to ask for when reading one response
    fn receive_limit(&self) -> usize {
        DEFAULT_RECEIVE_BUFFER_SIZE
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).send(bytes)
    }

    fn receive(&mut self, max_bytes: usize) -> Result<Bytes> {
        (**self).receive(max_bytes)
    }

    fn receive_limit(&self) -> usize {
        (**self).receive_limit()
    }
}
