//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! get <target>\n
//! set <target>[ <v1> <v2> ... <vn>]\n
//! ```
//!
//! ### Response Format
//! ```text
//! <target>[ <v1> <v2> ... <vn>]\r\n     (the \r is optional)
//! ```
//!
//! Each response value must match the pattern supplied for its position.
//! The line as a whole is anchored; individual patterns are not.

use std::fmt;

use regex::Regex;

use super::response::ParsedResponse;
use super::value::{zip_specs, Converter, ValueSpec};
use crate::error::{Result, VrroomError};

/// Terminates every request line
pub const COMMAND_TERMINATOR: char = '\n';

/// Name of the capture group holding the value tokens
const VALUES_GROUP: &str = "values";

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a request for the current value(s) of `target`
///
/// Format: `get <target>\n`
pub fn encode_get(target: &str) -> Vec<u8> {
    encode_raw(&format!("get {target}"))
}

/// Encode a request setting `target` to `values`
///
/// Format: `set <target> <v1> ... <vn>\n`, or `set <target>\n` when there
/// are no values. `None` counts as no values.
pub fn encode_set<I>(target: &str, values: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut command = format!("set {target}");
    for value in values {
        command.push(' ');
        command.push_str(&value.to_string());
    }
    encode_raw(&command)
}

/// Encode a raw command line, appending the terminator only if missing
pub fn encode_raw(command: &str) -> Vec<u8> {
    let mut line = String::with_capacity(command.len() + 1);
    line.push_str(command);
    if !line.ends_with(COMMAND_TERMINATOR) {
        line.push(COMMAND_TERMINATOR);
    }
    line.into_bytes()
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Strip line framing from a raw response
///
/// Returns the text before the first `\n`, minus one optional `\r`. Fails
/// with `Framing` when there is no `\n`, when a stray `\r` appears inside
/// the line, or when the line is not UTF-8.
pub fn decode_raw(response: &[u8]) -> Result<&str> {
    let newline = response.iter().position(|&b| b == b'\n').ok_or_else(|| {
        VrroomError::Framing(format!(
            "no line terminator in {} byte response",
            response.len()
        ))
    })?;

    let line = &response[..newline];
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if line.contains(&b'\r') {
        return Err(VrroomError::Framing(
            "carriage return inside response line".to_string(),
        ));
    }

    std::str::from_utf8(line)
        .map_err(|e| VrroomError::Framing(format!("response is not valid UTF-8: {e}")))
}

/// Match a raw response against the grammar for `target` and `specs`
///
/// The grammar is `^<target>$` when there are no specs, otherwise
/// `^<target> (?P<values>(?:<p1>) (?:<p2>) ... (?:<pn>))$`. A pattern that
/// compiles alone but breaks the combined grammar is reported as the whole
/// grammar.
pub fn parse_response<T>(
    response: &[u8],
    target: &str,
    specs: &[ValueSpec<T>],
) -> Result<ParsedResponse> {
    let line = decode_raw(response)?;
    let grammar = build_grammar(target, specs)?;

    let parsing_error = || VrroomError::ResponseParsing {
        response: String::from_utf8_lossy(response).into_owned(),
        target: target.to_string(),
    };

    let captures = grammar.captures(line).ok_or_else(parsing_error)?;
    let values: Vec<String> = match captures.name(VALUES_GROUP) {
        Some(group) => group.as_str().split(' ').map(str::to_string).collect(),
        None => Vec::new(),
    };

    // A pattern that swallows a space shifts every following token
    if values.len() != specs.len() {
        return Err(parsing_error());
    }

    Ok(ParsedResponse {
        target: target.to_string(),
        values,
    })
}

/// Decode a raw response into one typed value per spec, in order
pub fn decode_response<T>(
    response: &[u8],
    target: &str,
    specs: &[ValueSpec<T>],
) -> Result<Vec<T>> {
    let parsed = parse_response(response, target, specs)?;

    specs
        .iter()
        .zip(&parsed.values)
        .map(|(spec, token)| spec.convert(token))
        .collect()
}

/// [`decode_response`] with patterns and converters supplied as separate lists
///
/// Fails with `ArityMismatch` before looking at `response` when the lists
/// differ in length.
pub fn decode_response_parts<T, P: AsRef<str>>(
    response: &[u8],
    target: &str,
    patterns: &[P],
    converters: &[Converter<T>],
) -> Result<Vec<T>> {
    let specs = zip_specs(patterns, converters)?;
    decode_response(response, target, &specs)
}

fn build_grammar<T>(target: &str, specs: &[ValueSpec<T>]) -> Result<Regex> {
    let target = regex::escape(target);
    let grammar = if specs.is_empty() {
        format!("^{target}$")
    } else {
        // Grouped so that alternation stays inside its own token
        let values = specs
            .iter()
            .map(|spec| format!("(?:{})", spec.pattern()))
            .collect::<Vec<_>>()
            .join(" ");
        format!("^{target} (?P<{VALUES_GROUP}>{values})$")
    };

    Regex::new(&grammar).map_err(|source| {
        let pattern = specs
            .iter()
            .map(ValueSpec::pattern)
            .find(|p| Regex::new(p).is_err())
            .map_or_else(|| grammar.clone(), str::to_string);
        VrroomError::InvalidPattern { pattern, source }
    })
}
