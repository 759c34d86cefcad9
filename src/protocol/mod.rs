//! Protocol Module
//!
//! Defines the line-oriented text protocol spoken by the switch.
//!
//! ## Protocol Format
//!
//! ### Request Format
//! ```text
//! get <target>\n
//! set <target>[ <v1> ... <vn>]\n
//! ```
//!
//! ### Response Format
//! ```text
//! <target>[ <v1> ... <vn>]\r\n
//! ```
//!
//! There are no length prefixes, checksums, or request IDs: a response can
//! only be matched to its request by waiting for it before sending the next.

mod codec;
mod request;
mod response;
mod target;
mod value;

pub use codec::{
    decode_raw, decode_response, decode_response_parts, encode_get, encode_raw, encode_set,
    parse_response, COMMAND_TERMINATOR,
};
pub use request::{Request, RequestKind};
pub use response::ParsedResponse;
pub use target::Target;
pub use value::{
    zip_specs, Converter, Input, Ipv4, MacAddress, OnOff, OperationMode, ResetKind, TcpPort,
    ValueSpec, WireValue,
};
