//! VRROOM CLI
//!
//! Command-line interface for controlling a VRROOM switch.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};
use vrroom::commands::{actions, inputs, modes, network};
use vrroom::protocol::{Input, ResetKind, WireValue};
use vrroom::{execute_raw, Config, Connection, Result};

/// Typed in the console to leave it
const QUIT_COMMAND: &str = "quit";

/// VRROOM CLI
#[derive(Parser, Debug)]
#[command(name = "vrroom-cli")]
#[command(about = "Controls an HDFury VRROOM HDMI switch over TCP")]
#[command(version)]
struct Args {
    /// IP or host name of the switch
    #[arg(short, long)]
    address: String,

    /// Command port of the switch
    #[arg(short, long, default_value_t = vrroom::config::DEFAULT_PORT)]
    port: u16,

    /// Send/receive timeout in milliseconds
    #[arg(long, default_value_t = vrroom::config::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every value that can be read from the switch
    Status,

    /// Show the selected inputs, or change them
    Inputs {
        /// Input (0-4) for output TX0
        #[arg(long, value_parser = parse_input)]
        tx0: Option<Input>,

        /// Input (0-4) for output TX1
        #[arg(long, value_parser = parse_input)]
        tx1: Option<Input>,
    },

    /// Execute an action on the switch
    Action {
        #[arg(value_enum)]
        action: Action,
    },

    /// Send one raw command and print the response
    Raw {
        /// Command words, e.g. `get opmode`
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },

    /// Read raw commands from stdin until `quit`
    Console,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Action {
    Hotplug,
    Reboot,
    ResetSettings,
    ResetEdid,
    ResetAll,
}

fn parse_input(s: &str) -> std::result::Result<Input, String> {
    <Input as WireValue>::parse(s).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vrroom=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder()
        .address(&args.address)
        .port(args.port)
        .timeout_ms(args.timeout_ms)
        .build();

    let mut connection = match Connection::open(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to connect to {}:{}: {}", args.address, args.port, e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&mut connection, args.command);
    connection.close();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("An error has occurred! {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(connection: &mut Connection, command: Commands) -> Result<()> {
    match command {
        Commands::Status => show_status(connection),
        Commands::Inputs { tx0, tx1 } => change_inputs(connection, tx0, tx1),
        Commands::Action { action } => {
            tracing::info!("Executing action {:?}...", action);
            match action {
                Action::Hotplug => actions::hotplug(connection)?,
                Action::Reboot => actions::reboot(connection)?,
                Action::ResetSettings => actions::factory_reset(connection, ResetKind::Settings)?,
                Action::ResetEdid => actions::factory_reset(connection, ResetKind::EdidTables)?,
                Action::ResetAll => actions::factory_reset(connection, ResetKind::All)?,
            }
            tracing::info!("Action executed successfully");
            Ok(())
        }
        Commands::Raw { command } => {
            let response = execute_raw(connection, &command.join(" "))?;
            println!("{response}");
            Ok(())
        }
        Commands::Console => console(connection),
    }
}

fn show_status(connection: &mut Connection) -> Result<()> {
    let (tx0, tx1) = inputs::get_selected_inputs(connection)?;

    tracing::info!("Operation mode: {:?}", modes::get_operation_mode(connection)?);
    tracing::info!("Selected inputs: TX0 {:?}, TX1 {:?}", tx0, tx1);
    tracing::info!("Autoswitch: {}", modes::get_autoswitch_enabled(connection)?);
    tracing::info!("IP address: {}", network::get_ip_address(connection)?);
    tracing::info!("Network mask: {}", network::get_ip_network_mask(connection)?);
    tracing::info!("Default gateway: {}", network::get_ip_gateway(connection)?);
    tracing::info!("DHCP: {}", network::get_dhcp_enabled(connection)?);
    tracing::info!("IP interrupts: {}", network::get_ip_interrupts_enabled(connection)?);
    tracing::info!("TCP port: {}", network::get_tcp_port(connection)?);
    tracing::info!("MAC address: {}", network::get_mac_address(connection)?);
    Ok(())
}

fn change_inputs(
    connection: &mut Connection,
    tx0: Option<Input>,
    tx1: Option<Input>,
) -> Result<()> {
    match (tx0, tx1) {
        (None, None) => {}
        (Some(tx0), Some(tx1)) => inputs::set_selected_inputs(connection, tx0, tx1)?,
        (Some(tx0), None) => inputs::set_selected_input_tx0(connection, tx0)?,
        (None, Some(tx1)) => inputs::set_selected_input_tx1(connection, tx1)?,
    }

    let (tx0, tx1) = inputs::get_selected_inputs(connection)?;
    tracing::info!("Selected inputs: TX0 {:?}, TX1 {:?}", tx0, tx1);
    Ok(())
}

fn console(connection: &mut Connection) -> Result<()> {
    tracing::info!("Enter the command '{}' to quit.", QUIT_COMMAND);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter command: ");
        io::stdout().flush()?;

        let command = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let command = command.trim();
        if command == QUIT_COMMAND {
            return Ok(());
        }
        if command.is_empty() {
            continue;
        }

        match execute_raw(connection, command) {
            Ok(response) => tracing::info!("Response: '{}'", response),
            // The switch stays usable after an unparseable reply
            Err(e @ (vrroom::VrroomError::Framing(_) | vrroom::VrroomError::Timeout)) => {
                tracing::warn!("{}", e)
            }
            Err(e) => return Err(e),
        }
    }
}
