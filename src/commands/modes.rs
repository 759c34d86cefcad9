//! Operation mode and automatic input switching.

use super::{execute_set, get_value};
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{OnOff, OperationMode, Target, ValueSpec};

/// Gets the current operation mode of the switch.
pub fn get_operation_mode<C: Transport + ?Sized>(transport: &mut C) -> Result<OperationMode> {
    get_value(transport, Target::OperationMode, ValueSpec::of())
}

/// Sets the operation mode of the switch.
pub fn set_operation_mode<C: Transport + ?Sized>(
    transport: &mut C,
    mode: OperationMode,
) -> Result<()> {
    execute_set(
        transport,
        Target::OperationMode.as_str(),
        &[mode],
        &[ValueSpec::of()],
    )
}

/// Gets whether automatic input switching is enabled.
pub fn get_autoswitch_enabled<C: Transport + ?Sized>(transport: &mut C) -> Result<bool> {
    get_value(transport, Target::AutoSwitching, ValueSpec::<OnOff>::of()).map(OnOff::is_on)
}

/// Enables/disables automatic input switching.
pub fn set_autoswitch_enabled<C: Transport + ?Sized>(
    transport: &mut C,
    enabled: bool,
) -> Result<()> {
    execute_set(
        transport,
        Target::AutoSwitching.as_str(),
        &[OnOff::from(enabled)],
        &[ValueSpec::of()],
    )
}
