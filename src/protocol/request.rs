//! Request definitions
//!
//! Represents commands sent to the switch.

use std::fmt;

use super::codec::{encode_get, encode_set};

/// Request kind, as written at the start of the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Get,
    Set,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestKind::Get => "get",
            RequestKind::Set => "set",
        })
    }
}

/// A single command for the switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Read the current value(s) of a target
    Get { target: String },

    /// Change a target to the given value(s), already in wire form
    Set { target: String, values: Vec<String> },
}

impl Request {
    pub fn get(target: impl Into<String>) -> Self {
        Request::Get {
            target: target.into(),
        }
    }

    pub fn set<I>(target: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Request::Set {
            target: target.into(),
            values: values.into_iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Get the request kind
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::Get { .. } => RequestKind::Get,
            Request::Set { .. } => RequestKind::Set,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Request::Get { target } | Request::Set { target, .. } => target,
        }
    }

    /// Encode to wire bytes, newline terminated
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Request::Get { target } => encode_get(target),
            Request::Set { target, values } => encode_set(target, values),
        }
    }
}
