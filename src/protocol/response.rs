//! Response definitions
//!
//! Represents a response line after it matched its grammar but before its
//! values were converted.

/// A matched response: the echoed target and one raw token per value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Target the switch answered for
    pub target: String,

    /// Value tokens, in wire order
    pub values: Vec<String>,
}

impl ParsedResponse {
    /// A response that carried no values (e.g. `reboot`)
    pub fn is_bare(&self) -> bool {
        self.values.is_empty()
    }
}
