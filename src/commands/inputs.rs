//! Input selection for outputs TX0 and TX1.

use super::{execute_set, get_value, get_values};
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{Input, Target, ValueSpec};

fn input_specs<const N: usize>() -> [ValueSpec<Input>; N] {
    std::array::from_fn(|_| ValueSpec::of())
}

/// Gets the selected inputs as `(tx0, tx1)`.
pub fn get_selected_inputs<C: Transport + ?Sized>(transport: &mut C) -> Result<(Input, Input)> {
    let [tx0, tx1] = get_values(transport, Target::SelectedInputs, &input_specs::<2>())?;
    Ok((tx0, tx1))
}

/// Sets the inputs of both outputs in one command.
pub fn set_selected_inputs<C: Transport + ?Sized>(
    transport: &mut C,
    tx0: Input,
    tx1: Input,
) -> Result<()> {
    execute_set(
        transport,
        Target::SelectedInputs.as_str(),
        &[tx0, tx1],
        &input_specs::<2>(),
    )
}

/// Gets the selected input for output TX0.
pub fn get_selected_input_tx0<C: Transport + ?Sized>(transport: &mut C) -> Result<Input> {
    get_single_input(transport, Target::SelectedInputTx0)
}

/// Gets the selected input for output TX1.
pub fn get_selected_input_tx1<C: Transport + ?Sized>(transport: &mut C) -> Result<Input> {
    get_single_input(transport, Target::SelectedInputTx1)
}

/// Sets the selected input for output TX0.
pub fn set_selected_input_tx0<C: Transport + ?Sized>(
    transport: &mut C,
    input: Input,
) -> Result<()> {
    execute_set(
        transport,
        Target::SelectedInputTx0.as_str(),
        &[input],
        &input_specs::<1>(),
    )
}

/// Sets the selected input for output TX1.
pub fn set_selected_input_tx1<C: Transport + ?Sized>(
    transport: &mut C,
    input: Input,
) -> Result<()> {
    execute_set(
        transport,
        Target::SelectedInputTx1.as_str(),
        &[input],
        &input_specs::<1>(),
    )
}

fn get_single_input<C: Transport + ?Sized>(transport: &mut C, target: Target) -> Result<Input> {
    get_value(transport, target, ValueSpec::of())
}
