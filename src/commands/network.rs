//! Network settings of the switch.

use std::net::Ipv4Addr;

use super::{execute_set, get_value};
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{Ipv4, MacAddress, OnOff, Target, TcpPort, ValueSpec, WireValue};

fn get_one<C, T>(transport: &mut C, target: Target) -> Result<T>
where
    C: Transport + ?Sized,
    T: WireValue,
{
    get_value(transport, target, ValueSpec::of())
}

fn set_one<C, T>(transport: &mut C, target: Target, value: T) -> Result<()>
where
    C: Transport + ?Sized,
    T: WireValue + PartialEq,
{
    execute_set(transport, target.as_str(), &[value], &[ValueSpec::of()])
}

// =============================================================================
// Addressing
// =============================================================================

/// Gets the current IP address of the switch.
pub fn get_ip_address<C: Transport + ?Sized>(transport: &mut C) -> Result<Ipv4Addr> {
    get_one::<_, Ipv4>(transport, Target::IpAddress).map(|ip| ip.0)
}

/// Sets the IP address of the switch.
pub fn set_ip_address<C: Transport + ?Sized>(transport: &mut C, address: Ipv4Addr) -> Result<()> {
    set_one(transport, Target::IpAddress, Ipv4(address))
}

/// Gets the current IP network mask of the switch.
pub fn get_ip_network_mask<C: Transport + ?Sized>(transport: &mut C) -> Result<Ipv4Addr> {
    get_one::<_, Ipv4>(transport, Target::IpNetworkMask).map(|ip| ip.0)
}

/// Sets the IP network mask of the switch.
pub fn set_ip_network_mask<C: Transport + ?Sized>(transport: &mut C, mask: Ipv4Addr) -> Result<()> {
    set_one(transport, Target::IpNetworkMask, Ipv4(mask))
}

/// Gets the current IP gateway of the switch.
pub fn get_ip_gateway<C: Transport + ?Sized>(transport: &mut C) -> Result<Ipv4Addr> {
    get_one::<_, Ipv4>(transport, Target::IpGateway).map(|ip| ip.0)
}

/// Sets the IP gateway of the switch.
pub fn set_ip_gateway<C: Transport + ?Sized>(transport: &mut C, gateway: Ipv4Addr) -> Result<()> {
    set_one(transport, Target::IpGateway, Ipv4(gateway))
}

/// Gets the hardware address of the switch. It cannot be set.
pub fn get_mac_address<C: Transport + ?Sized>(transport: &mut C) -> Result<MacAddress> {
    get_one(transport, Target::MacAddress)
}

// =============================================================================
// Switches
// =============================================================================

/// Gets whether DHCP is enabled.
pub fn get_dhcp_enabled<C: Transport + ?Sized>(transport: &mut C) -> Result<bool> {
    get_one::<_, OnOff>(transport, Target::Dhcp).map(OnOff::is_on)
}

/// Enables/disables DHCP.
pub fn set_dhcp_enabled<C: Transport + ?Sized>(transport: &mut C, enabled: bool) -> Result<()> {
    set_one(transport, Target::Dhcp, OnOff::from(enabled))
}

/// Gets whether IP interrupts are enabled.
pub fn get_ip_interrupts_enabled<C: Transport + ?Sized>(transport: &mut C) -> Result<bool> {
    get_one::<_, OnOff>(transport, Target::IpInterrupt).map(OnOff::is_on)
}

/// Enables/disables IP interrupts.
pub fn set_ip_interrupts_enabled<C: Transport + ?Sized>(
    transport: &mut C,
    enabled: bool,
) -> Result<()> {
    set_one(transport, Target::IpInterrupt, OnOff::from(enabled))
}

// =============================================================================
// Command Port
// =============================================================================

/// Gets the TCP port used for commands.
pub fn get_tcp_port<C: Transport + ?Sized>(transport: &mut C) -> Result<TcpPort> {
    get_one(transport, Target::TcpPort)
}

/// Sets the TCP port used for commands.
pub fn set_tcp_port<C: Transport + ?Sized>(transport: &mut C, port: TcpPort) -> Result<()> {
    set_one(transport, Target::TcpPort, port)
}
