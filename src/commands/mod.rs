//! Commands
//!
//! Get/set exchanges against a [`Transport`], plus typed wrappers for the
//! switch's properties. Every exchange is one send followed by one receive.

use std::fmt;

use bytes::Bytes;

use crate::error::{Result, VrroomError};
use crate::network::Transport;
use crate::protocol::{
    decode_raw, decode_response, encode_get, encode_raw, encode_set, Target, ValueSpec,
};

pub mod actions;
pub mod inputs;
pub mod modes;
pub mod network;

/// Read the values of `target`, one per spec
///
/// Fails with `InvalidTarget` before any I/O if `target` is not registered.
pub fn execute_get<C, T>(
    transport: &mut C,
    target: &str,
    specs: &[ValueSpec<T>],
) -> Result<Vec<T>>
where
    C: Transport + ?Sized,
{
    Target::parse(target)?;

    let response = exchange_get(transport, target)?;
    decode_response(&response, target, specs)
}

/// Read exactly `N` values of a registered target
pub(crate) fn get_values<C, T, const N: usize>(
    transport: &mut C,
    target: Target,
    specs: &[ValueSpec<T>; N],
) -> Result<[T; N]>
where
    C: Transport + ?Sized,
{
    let response = exchange_get(transport, target.as_str())?;
    let values = decode_response(&response, target.as_str(), specs)?;

    values
        .try_into()
        .map_err(|_| VrroomError::ResponseParsing {
            response: String::from_utf8_lossy(&response).into_owned(),
            target: target.to_string(),
        })
}

/// Read the only value of a registered target
pub(crate) fn get_value<C, T>(transport: &mut C, target: Target, spec: ValueSpec<T>) -> Result<T>
where
    C: Transport + ?Sized,
{
    let [value] = get_values(transport, target, &[spec])?;
    Ok(value)
}

fn exchange_get<C>(transport: &mut C, target: &str) -> Result<Bytes>
where
    C: Transport + ?Sized,
{
    tracing::debug!("get {}", target);
    transport.send(&encode_get(target))?;
    let limit = transport.receive_limit();
    let response = transport.receive(limit)?;
    tracing::debug!(
        "response for {}: {:?}",
        target,
        String::from_utf8_lossy(&response)
    );
    Ok(response)
}

/// Set `target` to `desired` and check the echoed values
///
/// Returned values are compared to `desired` by position, up to the shorter
/// of the two. The first difference fails with `ValueNotConfirmed`; nothing
/// is retried.
pub fn execute_set<C, T>(
    transport: &mut C,
    target: &str,
    desired: &[T],
    specs: &[ValueSpec<T>],
) -> Result<()>
where
    C: Transport + ?Sized,
    T: PartialEq + fmt::Display,
{
    Target::parse(target)?;

    tracing::debug!(
        "set {} {:?}",
        target,
        desired.iter().map(T::to_string).collect::<Vec<_>>()
    );
    transport.send(&encode_set(target, desired))?;
    let limit = transport.receive_limit();
    let response = transport.receive(limit)?;
    tracing::debug!(
        "response for {}: {:?}",
        target,
        String::from_utf8_lossy(&response)
    );

    let returned = decode_response(&response, target, specs)?;
    confirm_values(&returned, desired)
}

/// Send a raw command line and return the response line
pub fn execute_raw<C>(transport: &mut C, command: &str) -> Result<String>
where
    C: Transport + ?Sized,
{
    tracing::debug!("raw {:?}", command.trim_end());
    transport.send(&encode_raw(command))?;
    let limit = transport.receive_limit();
    let response = transport.receive(limit)?;
    Ok(decode_raw(&response)?.to_string())
}

fn confirm_values<T>(returned: &[T], desired: &[T]) -> Result<()>
where
    T: PartialEq + fmt::Display,
{
    let mismatch = returned
        .iter()
        .zip(desired)
        .enumerate()
        .find(|(_, (returned, desired))| returned != desired);

    match mismatch {
        Some((position, (returned, desired))) => {
            tracing::warn!(
                "Switch returned '{}' at position {} instead of '{}'",
                returned,
                position,
                desired
            );
            Err(VrroomError::ValueNotConfirmed {
                position,
                returned: returned.to_string(),
                desired: desired.to_string(),
            })
        }
        None => Ok(()),
    }
}
