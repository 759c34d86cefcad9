//! Tests for get/set commands
//!
//! These tests verify:
//! - Target validation before any I/O
//! - Request bytes written for each command
//! - Echo verification of SET responses
//! - Typed wrappers for inputs, modes, network settings, and actions

#[path = "../common/mod.rs"]
mod common;

use std::net::Ipv4Addr;

use common::ScriptedTransport;
use vrroom::commands::{actions, inputs, modes, network};
use vrroom::config::DEFAULT_RECEIVE_BUFFER_SIZE;
use vrroom::protocol::{Input, MacAddress, OperationMode, ResetKind, TcpPort, ValueSpec};
use vrroom::{execute_get, execute_raw, execute_set, VrroomError};

fn input_specs() -> [ValueSpec<Input>; 2] {
    [ValueSpec::of(), ValueSpec::of()]
}

// =============================================================================
// Base GET Tests
// =============================================================================

#[test]
fn test_get_without_values() {
    let mut transport = ScriptedTransport::replying(b"hotplug\r\n");

    let values = execute_get::<_, String>(&mut transport, "hotplug", &[]).unwrap();

    assert_eq!(transport.sent_once(), "get hotplug\n");
    assert!(values.is_empty());
}

#[test]
fn test_get_text_value() {
    let mut transport = ScriptedTransport::replying(b"opmode 2\r\n");

    let values = execute_get(&mut transport, "opmode", &[ValueSpec::text("[0-4]")]).unwrap();

    assert_eq!(transport.sent_once(), "get opmode\n");
    assert_eq!(values, vec!["2".to_string()]);
}

#[test]
fn test_get_typed_values() {
    let mut transport = ScriptedTransport::replying(b"insel 2 0\r\n");

    let values = execute_get(&mut transport, "insel", &input_specs()).unwrap();

    assert_eq!(transport.sent_once(), "get insel\n");
    assert_eq!(values, vec![Input::Rx2, Input::Rx0]);
}

#[test]
fn test_get_reads_once_with_buffer_limit() {
    let mut transport = ScriptedTransport::replying(b"opmode 2\r\n");

    execute_get(&mut transport, "opmode", &[ValueSpec::text("[0-4]")]).unwrap();

    assert_eq!(transport.receive_sizes, vec![DEFAULT_RECEIVE_BUFFER_SIZE]);
}

#[test]
fn test_get_invalid_target_sends_nothing() {
    let mut transport = ScriptedTransport::replying(b"\r\n");

    let result = execute_get(&mut transport, "invalid", &[ValueSpec::<Input>::of()]);

    match result {
        Err(VrroomError::InvalidTarget(target)) => assert_eq!(target, "invalid"),
        other => panic!("expected InvalidTarget, got {other:?}"),
    }
    assert!(transport.sent.is_empty());
    assert!(transport.receive_sizes.is_empty());
}

#[test]
fn test_get_timeout() {
    let mut transport = ScriptedTransport::timing_out();

    let result = execute_get(&mut transport, "opmode", &[ValueSpec::<OperationMode>::of()]);

    assert!(matches!(result, Err(VrroomError::Timeout)));
    assert_eq!(transport.sent_once(), "get opmode\n");
}

#[test]
fn test_get_truncated_response() {
    let mut transport = ScriptedTransport::replying(b"insel 2");

    let result = execute_get(&mut transport, "insel", &input_specs());

    assert!(matches!(result, Err(VrroomError::Framing(_))));
}

// =============================================================================
// Base SET Tests
// =============================================================================

#[test]
fn test_set_text_value() {
    let mut transport = ScriptedTransport::replying(b"opmode 1\r\n");

    execute_set(
        &mut transport,
        "opmode",
        &["1".to_string()],
        &[ValueSpec::text("[0-4]")],
    )
    .unwrap();

    assert_eq!(transport.sent_once(), "set opmode 1\n");
}

#[test]
fn test_set_typed_values() {
    let mut transport = ScriptedTransport::replying(b"insel 0 4\r\n");

    execute_set(
        &mut transport,
        "insel",
        &[Input::Rx0, Input::Follow],
        &input_specs(),
    )
    .unwrap();

    assert_eq!(transport.sent_once(), "set insel 0 4\n");
}

#[test]
fn test_set_without_values() {
    let mut transport = ScriptedTransport::replying(b"reboot\r\n");

    execute_set::<_, String>(&mut transport, "reboot", &[], &[]).unwrap();

    assert_eq!(transport.sent_once(), "set reboot\n");
}

#[test]
fn test_set_value_not_confirmed() {
    let mut transport = ScriptedTransport::replying(b"insel 0 2\r\n");

    let result = execute_set(
        &mut transport,
        "insel",
        &[Input::Rx0, Input::Follow],
        &input_specs(),
    );

    match result {
        Err(VrroomError::ValueNotConfirmed {
            position,
            returned,
            desired,
        }) => {
            assert_eq!(position, 1);
            assert_eq!(returned, "2");
            assert_eq!(desired, "4");
        }
        other => panic!("expected ValueNotConfirmed, got {other:?}"),
    }
}

#[test]
fn test_set_reports_first_mismatch() {
    let mut transport = ScriptedTransport::replying(b"insel 3 2\r\n");

    let result = execute_set(
        &mut transport,
        "insel",
        &[Input::Rx0, Input::Follow],
        &input_specs(),
    );

    assert!(matches!(
        result,
        Err(VrroomError::ValueNotConfirmed { position: 0, .. })
    ));
}

#[test]
fn test_set_extra_desired_values_unchecked() {
    let mut transport = ScriptedTransport::replying(b"inseltx0 1\r\n");

    execute_set(
        &mut transport,
        "inseltx0",
        &[Input::Rx1, Input::Rx3],
        &[ValueSpec::of()],
    )
    .unwrap();

    assert_eq!(transport.sent_once(), "set inseltx0 1 3\n");
}

#[test]
fn test_set_invalid_target_sends_nothing() {
    let mut transport = ScriptedTransport::replying(b"\r\n");

    let result = execute_set(
        &mut transport,
        "invalid",
        &[Input::Rx0],
        &[ValueSpec::of()],
    );

    assert!(matches!(result, Err(VrroomError::InvalidTarget(_))));
    assert!(transport.sent.is_empty());
}

#[test]
fn test_set_unparseable_response() {
    let mut transport = ScriptedTransport::replying(b"opmode 9\r\n");

    let result = execute_set(
        &mut transport,
        "opmode",
        &[OperationMode::MatrixTmds],
        &[ValueSpec::of()],
    );

    assert!(matches!(result, Err(VrroomError::ResponseParsing { .. })));
}

// =============================================================================
// Raw Command Tests
// =============================================================================

#[test]
fn test_raw_command() {
    let mut transport = ScriptedTransport::replying(b"opmode 3\r\n");

    let response = execute_raw(&mut transport, "get opmode").unwrap();

    assert_eq!(transport.sent_once(), "get opmode\n");
    assert_eq!(response, "opmode 3");
}

#[test]
fn test_raw_command_skips_target_check() {
    let mut transport = ScriptedTransport::replying(b"unknown command\r\n");

    let response = execute_raw(&mut transport, "get teleport\n").unwrap();

    assert_eq!(transport.sent_once(), "get teleport\n");
    assert_eq!(response, "unknown command");
}

// =============================================================================
// Input Command Tests
// =============================================================================

#[test]
fn test_get_selected_inputs() {
    let mut transport = ScriptedTransport::replying(b"insel 1 4\r\n");

    let selected = inputs::get_selected_inputs(&mut transport).unwrap();

    assert_eq!(transport.sent_once(), "get insel\n");
    assert_eq!(selected, (Input::Rx1, Input::Follow));
}

#[test]
fn test_set_selected_inputs() {
    let mut transport = ScriptedTransport::replying(b"insel 2 4\r\n");

    inputs::set_selected_inputs(&mut transport, Input::Rx2, Input::Follow).unwrap();

    assert_eq!(transport.sent_once(), "set insel 2 4\n");
}

#[test]
fn test_selected_input_per_output() {
    let mut transport = ScriptedTransport::replying(b"inseltx0 3\r\n");
    assert_eq!(
        inputs::get_selected_input_tx0(&mut transport).unwrap(),
        Input::Rx3
    );
    assert_eq!(transport.sent_once(), "get inseltx0\n");

    let mut transport = ScriptedTransport::replying(b"inseltx1 0\r\n");
    assert_eq!(
        inputs::get_selected_input_tx1(&mut transport).unwrap(),
        Input::Rx0
    );
    assert_eq!(transport.sent_once(), "get inseltx1\n");

    let mut transport = ScriptedTransport::replying(b"inseltx0 2\r\n");
    inputs::set_selected_input_tx0(&mut transport, Input::Rx2).unwrap();
    assert_eq!(transport.sent_once(), "set inseltx0 2\n");

    let mut transport = ScriptedTransport::replying(b"inseltx1 1\r\n");
    inputs::set_selected_input_tx1(&mut transport, Input::Rx1).unwrap();
    assert_eq!(transport.sent_once(), "set inseltx1 1\n");
}

// =============================================================================
// Mode Command Tests
// =============================================================================

#[test]
fn test_operation_mode() {
    let mut transport = ScriptedTransport::replying(b"opmode 2\r\n");
    assert_eq!(
        modes::get_operation_mode(&mut transport).unwrap(),
        OperationMode::MatrixTmds
    );
    assert_eq!(transport.sent_once(), "get opmode\n");

    let mut transport = ScriptedTransport::replying(b"opmode 0\r\n");
    modes::set_operation_mode(&mut transport, OperationMode::SplitterVrr).unwrap();
    assert_eq!(transport.sent_once(), "set opmode 0\n");
}

#[test]
fn test_operation_mode_unparseable_reports_response() {
    let mut transport = ScriptedTransport::replying(b"opmode 9\r\n");

    match modes::get_operation_mode(&mut transport) {
        Err(VrroomError::ResponseParsing { response, target }) => {
            assert_eq!(response, "opmode 9\r\n");
            assert_eq!(target, "opmode");
        }
        other => panic!("expected ResponseParsing, got {other:?}"),
    }
}

#[test]
fn test_selected_inputs_missing_value_reports_response() {
    let mut transport = ScriptedTransport::replying(b"insel 2\r\n");

    match inputs::get_selected_inputs(&mut transport) {
        Err(VrroomError::ResponseParsing { response, target }) => {
            assert_eq!(response, "insel 2\r\n");
            assert_eq!(target, "insel");
        }
        other => panic!("expected ResponseParsing, got {other:?}"),
    }
}

#[test]
fn test_autoswitch() {
    let mut transport = ScriptedTransport::replying(b"autosw off\r\n");
    assert!(!modes::get_autoswitch_enabled(&mut transport).unwrap());
    assert_eq!(transport.sent_once(), "get autosw\n");

    let mut transport = ScriptedTransport::replying(b"autosw on\r\n");
    modes::set_autoswitch_enabled(&mut transport, true).unwrap();
    assert_eq!(transport.sent_once(), "set autosw on\n");
}

#[test]
fn test_autoswitch_not_confirmed() {
    let mut transport = ScriptedTransport::replying(b"autosw off\r\n");

    let result = modes::set_autoswitch_enabled(&mut transport, true);

    match result {
        Err(VrroomError::ValueNotConfirmed {
            returned, desired, ..
        }) => {
            assert_eq!(returned, "off");
            assert_eq!(desired, "on");
        }
        other => panic!("expected ValueNotConfirmed, got {other:?}"),
    }
}

// =============================================================================
// Network Command Tests
// =============================================================================

#[test]
fn test_ip_address() {
    let mut transport = ScriptedTransport::replying(b"ipaddr 192.168.1.128\r\n");
    assert_eq!(
        network::get_ip_address(&mut transport).unwrap(),
        Ipv4Addr::new(192, 168, 1, 128)
    );
    assert_eq!(transport.sent_once(), "get ipaddr\n");

    let mut transport = ScriptedTransport::replying(b"ipaddr 208.67.222.222\r\n");
    network::set_ip_address(&mut transport, Ipv4Addr::new(208, 67, 222, 222)).unwrap();
    assert_eq!(transport.sent_once(), "set ipaddr 208.67.222.222\n");
}

#[test]
fn test_ip_network_mask() {
    let mut transport = ScriptedTransport::replying(b"ipmask 255.255.255.0\r\n");
    assert_eq!(
        network::get_ip_network_mask(&mut transport).unwrap(),
        Ipv4Addr::new(255, 255, 255, 0)
    );
    assert_eq!(transport.sent_once(), "get ipmask\n");

    let mut transport = ScriptedTransport::replying(b"ipmask 255.0.0.0\r\n");
    network::set_ip_network_mask(&mut transport, Ipv4Addr::new(255, 0, 0, 0)).unwrap();
    assert_eq!(transport.sent_once(), "set ipmask 255.0.0.0\n");
}

#[test]
fn test_ip_gateway() {
    let mut transport = ScriptedTransport::replying(b"ipgw 192.168.1.1\r\n");
    assert_eq!(
        network::get_ip_gateway(&mut transport).unwrap(),
        Ipv4Addr::new(192, 168, 1, 1)
    );
    assert_eq!(transport.sent_once(), "get ipgw\n");

    let mut transport = ScriptedTransport::replying(b"ipgw 208.67.222.220\r\n");
    network::set_ip_gateway(&mut transport, Ipv4Addr::new(208, 67, 222, 220)).unwrap();
    assert_eq!(transport.sent_once(), "set ipgw 208.67.222.220\n");
}

#[test]
fn test_ip_address_out_of_range() {
    let mut transport = ScriptedTransport::replying(b"ipaddr 192.168.1.256\r\n");

    assert!(matches!(
        network::get_ip_address(&mut transport),
        Err(VrroomError::ResponseParsing { .. })
    ));
}

#[test]
fn test_dhcp_and_interrupts() {
    let mut transport = ScriptedTransport::replying(b"dhcp off\r\n");
    assert!(!network::get_dhcp_enabled(&mut transport).unwrap());
    assert_eq!(transport.sent_once(), "get dhcp\n");

    let mut transport = ScriptedTransport::replying(b"dhcp on\r\n");
    network::set_dhcp_enabled(&mut transport, true).unwrap();
    assert_eq!(transport.sent_once(), "set dhcp on\n");

    let mut transport = ScriptedTransport::replying(b"ipinterrupt off\r\n");
    assert!(!network::get_ip_interrupts_enabled(&mut transport).unwrap());
    assert_eq!(transport.sent_once(), "get ipinterrupt\n");

    let mut transport = ScriptedTransport::replying(b"ipinterrupt on\r\n");
    network::set_ip_interrupts_enabled(&mut transport, true).unwrap();
    assert_eq!(transport.sent_once(), "set ipinterrupt on\n");
}

#[test]
fn test_tcp_port() {
    let mut transport = ScriptedTransport::replying(b"tcpport 2222\r\n");
    assert_eq!(network::get_tcp_port(&mut transport).unwrap().get(), 2222);
    assert_eq!(transport.sent_once(), "get tcpport\n");

    let mut transport = ScriptedTransport::replying(b"tcpport 80\r\n");
    network::set_tcp_port(&mut transport, TcpPort::new(80).unwrap()).unwrap();
    assert_eq!(transport.sent_once(), "set tcpport 80\n");
}

#[test]
fn test_mac_address() {
    let mut transport = ScriptedTransport::replying(b"mac 19:AC:B5:D3:22:F4\r\n");

    let mac = network::get_mac_address(&mut transport).unwrap();

    assert_eq!(transport.sent_once(), "get mac\n");
    assert_eq!(mac, MacAddress([0x19, 0xAC, 0xB5, 0xD3, 0x22, 0xF4]));
}

// =============================================================================
// Action Command Tests
// =============================================================================

#[test]
fn test_factory_reset() {
    for (kind, reply, request) in [
        (ResetKind::Settings, b"factoryreset 1\r\n", "set factoryreset 1\n"),
        (ResetKind::EdidTables, b"factoryreset 2\r\n", "set factoryreset 2\n"),
        (ResetKind::All, b"factoryreset 3\r\n", "set factoryreset 3\n"),
    ] {
        let mut transport = ScriptedTransport::replying(reply);
        actions::factory_reset(&mut transport, kind).unwrap();
        assert_eq!(transport.sent_once(), request);
    }
}

#[test]
fn test_hotplug() {
    let mut transport = ScriptedTransport::replying(b"hotplug\r\n");

    actions::hotplug(&mut transport).unwrap();

    assert_eq!(transport.sent_once(), "set hotplug\n");
}

#[test]
fn test_reboot() {
    let mut transport = ScriptedTransport::replying(b"reboot\r\n");

    actions::reboot(&mut transport).unwrap();

    assert_eq!(transport.sent_once(), "set reboot\n");
}

#[test]
fn test_reboot_unexpected_reply() {
    let mut transport = ScriptedTransport::replying(b"reboot 1\r\n");

    assert!(matches!(
        actions::reboot(&mut transport),
        Err(VrroomError::ResponseParsing { .. })
    ));
}
