//! One-shot actions: factory reset, hotplug, reboot.
//!
//! Actions are SETs. Hotplug and reboot carry no values and the switch
//! answers with the bare target name.

use super::execute_set;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{ResetKind, Target, ValueSpec};

/// Resets the requested data on the switch.
pub fn factory_reset<C: Transport + ?Sized>(transport: &mut C, kind: ResetKind) -> Result<()> {
    execute_set(
        transport,
        Target::FactoryReset.as_str(),
        &[kind],
        &[ValueSpec::of()],
    )
}

/// Sends a hotplug event to the sources.
pub fn hotplug<C: Transport + ?Sized>(transport: &mut C) -> Result<()> {
    bare_action(transport, Target::Hotplug)
}

/// Reboots the switch.
pub fn reboot<C: Transport + ?Sized>(transport: &mut C) -> Result<()> {
    bare_action(transport, Target::Reboot)
}

fn bare_action<C: Transport + ?Sized>(transport: &mut C, target: Target) -> Result<()> {
    execute_set::<_, String>(transport, target.as_str(), &[], &[])
}
